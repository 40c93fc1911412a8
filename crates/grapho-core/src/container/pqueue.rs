use crate::graph::Weight;

/// Heap slot: an arbitrary payload and the priority it was pushed with
#[derive(Debug, Clone)]
struct Entry<T> {
    item: T,
    priority: Weight,
}

/// Binary min-heap priority queue.
///
/// `push` and `pop` are `O(log n)`, `len` is `O(1)`. There is no
/// decrease-key: callers that need to lower a priority push a fresh entry
/// and discard the stale one when it surfaces (lazy deletion).
///
/// Entries with equal priority are not ordered by insertion.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Priority of the item `pop` would return next
    pub fn peek_priority(&self) -> Option<Weight> {
        self.entries.first().map(|e| e.priority)
    }

    /// Insert an item, then bubble it up while it is strictly smaller
    /// than its parent
    pub fn push(&mut self, item: T, priority: Weight) {
        self.entries.push(Entry { item, priority });

        let mut index = self.entries.len() - 1;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].priority < self.entries[parent].priority {
                self.entries.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Remove and return the minimum-priority item, or `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        let last = self.entries.len().checked_sub(1)?;

        // Move last leaf to root, detach the old root
        self.entries.swap(0, last);
        let entry = self.entries.pop()?;

        self.sift_down(0);
        Some(entry.item)
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            let child = if right < len && self.entries[right].priority < self.entries[left].priority
            {
                right
            } else {
                left
            };

            if self.entries[index].priority > self.entries[child].priority {
                self.entries.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}
