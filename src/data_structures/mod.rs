pub mod indexed_priority_queue;

pub use indexed_priority_queue::{HeapSlot, IndexedPriorityQueue};
