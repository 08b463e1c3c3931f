//! Bounded FIFO of recently dealt items.

use std::collections::VecDeque;

/// Fixed-capacity queue that evicts its oldest entry once full.
///
/// Insertion order defines recency. Duplicates are allowed: an item dealt
/// again after an exhaustion reset occupies a second slot. A capacity of 0
/// is valid and keeps the queue permanently empty.
#[derive(Debug, Clone)]
pub struct RecentQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T: PartialEq> RecentQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `item`, evicting the oldest entry if the queue is full.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
        if self.items.len() > self.capacity {
            self.items.pop_front();
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_within_capacity() {
        let mut queue = RecentQueue::new(3);
        queue.push("a");
        queue.push("b");
        assert_eq!(queue.len(), 2);
        assert!(queue.contains(&"a"));
        assert!(queue.contains(&"b"));
        assert!(!queue.contains(&"c"));
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut queue = RecentQueue::new(2);
        queue.push(1);
        queue.push(2);
        queue.push(3);

        assert_eq!(queue.len(), 2);
        assert!(!queue.contains(&1));
        let order: Vec<i32> = queue.iter().copied().collect();
        assert_eq!(order, vec![2, 3]);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut queue = RecentQueue::new(3);
        queue.push("x");
        queue.push("x");
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let mut queue = RecentQueue::new(0);
        queue.push("a");
        queue.push("b");
        assert!(queue.is_empty());
        assert!(!queue.contains(&"a"));
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut queue = RecentQueue::new(5);
        for i in 0..100 {
            queue.push(i);
            assert!(queue.len() <= 5);
        }
        let order: Vec<i32> = queue.iter().copied().collect();
        assert_eq!(order, vec![95, 96, 97, 98, 99]);
    }
}
