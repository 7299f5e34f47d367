use std::fmt::Debug;

use crate::graph::VertexId;
use crate::{Error, Result};

/// An element that can sit in an [`IndexedPriorityQueue`]
///
/// The queue keeps each member's heap position inside the member itself, which
/// is what makes `decrease_key` possible without searching the heap.
pub trait HeapSlot {
    type Key: PartialOrd + Copy + Debug;

    /// Current priority; smaller comes out first
    fn key(&self) -> Self::Key;

    /// Position in the heap while queued
    fn queue_index(&self) -> Option<usize>;

    fn set_queue_index(&mut self, index: Option<usize>);
}

/// Binary min-heap of arena indices with decrease-key support
///
/// The items themselves live in an arena owned by the caller (the vertex list
/// of a graph). Every operation borrows that arena, reads keys from it and
/// writes heap positions back into it. While an item is queued its position
/// field belongs to the queue; an item may be in at most one queue at a time.
#[derive(Debug, Default)]
pub struct IndexedPriorityQueue {
    heap: Vec<VertexId>,
}

impl IndexedPriorityQueue {
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedPriorityQueue { heap: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` members
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if `id` is a member of this queue
    pub fn contains<I: HeapSlot>(&self, items: &[I], id: VertexId) -> bool {
        match items.get(id).and_then(|item| item.queue_index()) {
            Some(position) => self.heap.get(position) == Some(&id),
            None => false,
        }
    }

    /// Adds `id` with its current key
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `items` has no entry at `id`.
    pub fn insert<I: HeapSlot>(&mut self, items: &mut [I], id: VertexId) -> Result<()> {
        if self.contains(items, id) {
            return Err(Error::AlreadyQueued(id));
        }
        if id >= items.len() {
            return Err(Error::IndexOutOfRange(id));
        }
        self.heap.push(id);
        let last = self.heap.len() - 1;
        items[id].set_queue_index(Some(last));
        self.sift_up(items, last);
        Ok(())
    }

    /// Removes and returns the member with the smallest key
    pub fn extract_min<I: HeapSlot>(&mut self, items: &mut [I]) -> Option<VertexId> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(items, 0, last);
        let min = self.heap.pop()?;
        items[min].set_queue_index(None);
        if !self.heap.is_empty() {
            self.sift_down(items, 0);
        }
        Some(min)
    }

    /// Restores heap order after the key of `id` was lowered by the caller
    ///
    /// Raising the key instead leaves the heap order unspecified.
    pub fn decrease_key<I: HeapSlot>(&mut self, items: &mut [I], id: VertexId) -> Result<()> {
        if !self.contains(items, id) {
            return Err(Error::NotQueued(id));
        }
        if let Some(position) = items[id].queue_index() {
            self.sift_up(items, position);
        }
        Ok(())
    }

    /// Removes every member, releasing their heap positions
    pub fn clear<I: HeapSlot>(&mut self, items: &mut [I]) {
        for id in self.heap.drain(..) {
            if let Some(item) = items.get_mut(id) {
                item.set_queue_index(None);
            }
        }
    }

    fn less<I: HeapSlot>(&self, items: &[I], a: usize, b: usize) -> bool {
        items[self.heap[a]].key() < items[self.heap[b]].key()
    }

    fn swap<I: HeapSlot>(&mut self, items: &mut [I], a: usize, b: usize) {
        self.heap.swap(a, b);
        items[self.heap[a]].set_queue_index(Some(a));
        items[self.heap[b]].set_queue_index(Some(b));
    }

    fn sift_up<I: HeapSlot>(&mut self, items: &mut [I], mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.less(items, position, parent) {
                break;
            }
            self.swap(items, position, parent);
            position = parent;
        }
    }

    fn sift_down<I: HeapSlot>(&mut self, items: &mut [I], mut position: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;
            if left < len && self.less(items, left, smallest) {
                smallest = left;
            }
            if right < len && self.less(items, right, smallest) {
                smallest = right;
            }
            if smallest == position {
                break;
            }
            self.swap(items, position, smallest);
            position = smallest;
        }
    }
}
