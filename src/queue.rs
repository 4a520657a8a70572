//! A plain first-in, first-out queue. The command tree uses it to walk officers level by level.
//!
//! # Examples
//!
//! ```
//! use command_tree::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue("Riker");
//! queue.enqueue("Data");
//!
//! assert_eq!(queue.dequeue(), Some("Riker"));
//! assert_eq!(queue.dequeue(), Some("Data"));
//!
//! // An empty queue hands back `None` instead of an item.
//! assert_eq!(queue.dequeue(), None);
//! ```

use std::collections::VecDeque;

/// An unbounded FIFO. Items come out in exactly the order they went in.
#[derive(Clone, Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Appends `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the front of the queue, or `None` when it is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The item that the next [`dequeue`][Self::dequeue] would return.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// How many items are waiting.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there is nothing left to dequeue.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_insertion_order() {
        let mut queue = Queue::new();
        for x in 0..5 {
            queue.enqueue(x);
        }

        let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_queue_yields_none() {
        let mut queue: Queue<i32> = Queue::default();
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.peek(), None);

        // Still usable after hitting the bottom.
        queue.enqueue(7);
        assert_eq!(queue.peek(), Some(&7));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.dequeue(), Some(7));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn interleaved_enqueue_and_dequeue() {
        let mut queue: Queue<_> = [1, 2].into_iter().collect();
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }
}
