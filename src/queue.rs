//! Bounded, array-backed binary min-heap.
//!
//! Unlike [`std::collections::BinaryHeap`] the queue never grows past the
//! capacity it was created with, and the sift rules are fixed so that the
//! order in which equal entries come out is reproducible.

use crate::error::{Error, Result};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T> {
    data: Vec<T>,
    capacity: usize,
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left_child(i: usize) -> usize {
    2 * i + 1
}

impl<T> MinPriorityQueue<T> {
    /// Create an empty queue holding at most `capacity` entries.
    ///
    /// The whole backing array is reserved up front, so a failing allocation
    /// is reported here and never during [`insert`](Self::insert).
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        Ok(Self { data, capacity })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Ord> MinPriorityQueue<T> {
    pub fn peek_min(&self) -> Result<&T> {
        self.data.first().ok_or(Error::EmptyQueue)
    }

    /// Append `entry` and sift it up. A full queue rejects the entry with
    /// [`Error::QueueFull`] and drops it.
    pub fn insert(&mut self, entry: T) -> Result<()> {
        if self.is_full() {
            warn!(capacity = self.capacity, "rejected insert into full queue");
            return Err(Error::QueueFull {
                capacity: self.capacity,
            });
        }

        self.data.push(entry);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    pub fn extract_min(&mut self) -> Result<T> {
        if self.data.is_empty() {
            warn!("extract_min on empty queue");
            return Err(Error::EmptyQueue);
        }

        // moves the tail into slot 0
        let min = self.data.swap_remove(0);
        self.sift_down(0);
        Ok(min)
    }

    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[parent(i)] <= self.data[i])
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if self.data[p] <= self.data[i] {
                break;
            }
            self.data.swap(p, i);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = left_child(i);
            if left >= self.data.len() {
                break;
            }

            // the right child only wins when strictly smaller
            let right = left + 1;
            let child = match self.data.get(right) {
                Some(r) if *r < self.data[left] => right,
                _ => left,
            };

            if self.data[i] <= self.data[child] {
                break;
            }
            self.data.swap(i, child);
            i = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use derivative::Derivative;

    fn drain<T: Ord>(q: &mut MinPriorityQueue<T>) -> Vec<T> {
        let mut out = Vec::new();
        while !q.is_empty() {
            out.push(q.extract_min().unwrap());
        }
        out
    }

    #[test]
    fn queue_new_is_empty() {
        let q: MinPriorityQueue<u32> = MinPriorityQueue::with_capacity(4).unwrap();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), 4);
    }

    #[test]
    fn queue_extracts_in_order() {
        let mut q = MinPriorityQueue::with_capacity(8).unwrap();
        for x in [5, 3, 8, 1, 9, 2, 7, 4] {
            q.insert(x).unwrap();
            assert!(q.is_heap());
        }

        assert_eq!(*q.peek_min().unwrap(), 1);
        assert_eq!(drain(&mut q), vec![1, 2, 3, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn queue_rejects_past_capacity() {
        let mut q = MinPriorityQueue::with_capacity(2).unwrap();
        q.insert(2).unwrap();
        q.insert(1).unwrap();

        assert!(matches!(
            q.insert(0),
            Err(Error::QueueFull { capacity: 2 })
        ));
        // the rejected entry never made it in
        assert_eq!(drain(&mut q), vec![1, 2]);
    }

    #[test]
    fn queue_zero_capacity() {
        let mut q = MinPriorityQueue::with_capacity(0).unwrap();
        assert!(q.is_full());
        assert!(q.insert(1).is_err());
    }

    #[test]
    fn queue_empty_queries() {
        let mut q: MinPriorityQueue<u8> = MinPriorityQueue::with_capacity(1).unwrap();
        assert!(matches!(q.peek_min(), Err(Error::EmptyQueue)));
        assert!(matches!(q.extract_min(), Err(Error::EmptyQueue)));
    }

    #[test]
    fn queue_interleaved() {
        let mut q = MinPriorityQueue::with_capacity(4).unwrap();
        q.insert(4).unwrap();
        q.insert(2).unwrap();
        assert_eq!(q.extract_min().unwrap(), 2);
        q.insert(1).unwrap();
        q.insert(3).unwrap();
        assert!(q.is_heap());
        assert_eq!(q.extract_min().unwrap(), 1);
        assert_eq!(q.extract_min().unwrap(), 3);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn queue_sift_down_prefers_left_on_tie() {
        #[derive(Debug, Derivative)]
        #[derivative(PartialEq, Eq, PartialOrd, Ord)]
        struct Keyed(
            u32,
            #[derivative(PartialEq = "ignore")]
            #[derivative(PartialOrd = "ignore")]
            #[derivative(Ord = "ignore")]
            char,
        );

        let mut q = MinPriorityQueue::with_capacity(4).unwrap();
        q.insert(Keyed(0, 'r')).unwrap();
        q.insert(Keyed(1, 'a')).unwrap();
        q.insert(Keyed(1, 'b')).unwrap();
        q.insert(Keyed(9, 'z')).unwrap();

        assert_eq!(q.extract_min().unwrap().0, 0);
        // the tail (9) sank towards the left child
        assert_eq!(q.as_slice()[0].1, 'a');
        assert_eq!(q.as_slice()[2].1, 'b');
    }
}
