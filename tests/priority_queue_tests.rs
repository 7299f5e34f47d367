use digraph_paths::data_structures::{HeapSlot, IndexedPriorityQueue};
use digraph_paths::Error;
use rand::prelude::*;
use rand::rngs::StdRng;

#[derive(Debug)]
struct Item {
    key: f64,
    slot: Option<usize>,
}

impl HeapSlot for Item {
    type Key = f64;

    fn key(&self) -> f64 {
        self.key
    }

    fn queue_index(&self) -> Option<usize> {
        self.slot
    }

    fn set_queue_index(&mut self, index: Option<usize>) {
        self.slot = index;
    }
}

fn items(keys: &[f64]) -> Vec<Item> {
    keys.iter().map(|&key| Item { key, slot: None }).collect()
}

fn drain(queue: &mut IndexedPriorityQueue, items: &mut [Item]) -> Vec<usize> {
    let mut order = Vec::new();
    while let Some(id) = queue.extract_min(items) {
        order.push(id);
    }
    order
}

#[test]
fn test_extracts_in_key_order_after_decrease() {
    let mut items = items(&[5.0, 3.0, 8.0, 1.0, 9.0, 2.0]);
    let mut queue = IndexedPriorityQueue::new();
    for id in 0..items.len() {
        queue.insert(&mut items, id).unwrap();
    }
    assert_eq!(queue.len(), 6);

    items[2].key = 0.0;
    queue.decrease_key(&mut items, 2).unwrap();

    assert_eq!(drain(&mut queue, &mut items), vec![2, 3, 5, 1, 0, 4]);
    assert!(queue.is_empty());
    assert!(items.iter().all(|item| item.slot.is_none()));
}

#[test]
fn test_membership() {
    let mut items = items(&[1.0, 2.0, 3.0]);
    let mut queue = IndexedPriorityQueue::new();
    queue.insert(&mut items, 1).unwrap();

    assert!(queue.contains(&items, 1));
    assert!(!queue.contains(&items, 0));
    assert_eq!(queue.insert(&mut items, 1), Err(Error::AlreadyQueued(1)));
    assert_eq!(queue.decrease_key(&mut items, 2), Err(Error::NotQueued(2)));
    assert_eq!(queue.insert(&mut items, 3), Err(Error::IndexOutOfRange(3)));
    assert_eq!(queue.len(), 1);

    assert_eq!(queue.extract_min(&mut items), Some(1));
    assert!(!queue.contains(&items, 1));
    assert_eq!(queue.extract_min(&mut items), None);
}

#[test]
fn test_stale_position_is_not_membership() {
    let mut items = items(&[1.0, 2.0]);
    items[1].slot = Some(0);
    let mut queue = IndexedPriorityQueue::new();
    queue.insert(&mut items, 0).unwrap();

    // Item 1 claims slot 0, but slot 0 holds item 0
    assert!(!queue.contains(&items, 1));
    queue.insert(&mut items, 1).unwrap();
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_clear_releases_members() {
    let mut items = items(&[4.0, 2.0, 7.0]);
    let mut queue = IndexedPriorityQueue::with_capacity(3);
    for id in 0..3 {
        queue.insert(&mut items, id).unwrap();
    }
    queue.clear(&mut items);

    assert!(queue.is_empty());
    assert!(items.iter().all(|item| item.slot.is_none()));
    queue.insert(&mut items, 2).unwrap();
    assert_eq!(queue.extract_min(&mut items), Some(2));
}

#[test]
fn test_random_interleaving_keeps_heap_order() {
    let mut rng = StdRng::seed_from_u64(11);
    let n = 300;
    let mut items: Vec<Item> = (0..n)
        .map(|_| Item { key: rng.gen_range(0.0..1000.0), slot: None })
        .collect();
    let mut queue = IndexedPriorityQueue::new();

    for id in 0..n {
        queue.insert(&mut items, id).unwrap();
        // Lower the key of some random member now and then
        if rng.gen_bool(0.3) {
            let target = rng.gen_range(0..=id);
            if queue.contains(&items, target) {
                items[target].key -= rng.gen_range(0.0..500.0);
                queue.decrease_key(&mut items, target).unwrap();
            }
        }
    }

    let order = drain(&mut queue, &mut items);
    assert_eq!(order.len(), n);
    for pair in order.windows(2) {
        assert!(items[pair[0]].key <= items[pair[1]].key);
    }
}
