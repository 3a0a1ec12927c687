use crate::dyn_array::{DynArray, Position};
use crate::error::Error;
use log::{debug, trace};

/// Priority of an element. Larger values are dequeued first.
pub type Priority = i32;

/// One node of the heap: a payload and the priority it was inserted with.
#[derive(Clone)]
struct Element<T> {
    data: T,
    priority: Priority,
}

/// A max-priority queue, stored as a binary heap in a `DynArray`.
///
/// The array encodes a complete binary tree: the children of the node at `i`
/// are at `2i + 1` and `2i + 2`, and every parent has a priority greater than
/// or equal to the priorities of its children. The element with the greatest
/// priority is therefore always at index 0.
///
/// No order is guaranteed among elements that have equal priorities.
///
/// The queue owns the values it is given and nothing more. To keep ownership
/// of a payload, insert a reference, an `Rc`/`Arc` handle, or an id. Dropping
/// a non-empty queue drops the values still stored in it; for those kinds of
/// payloads that releases only the reference, never the referenced data.
pub struct PriorityQueue<T> {
    heap: DynArray<Element<T>>,
}

fn left(parent: usize) -> usize {
    parent * 2 + 1
}
fn right(parent: usize) -> usize {
    parent * 2 + 2
}
fn parent(child: usize) -> usize {
    (child - 1) / 2
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: DynArray::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        debug!("creating priority queue with capacity {}", capacity);
        Self {
            heap: DynArray::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every element, dropping the stored values.
    pub fn clear(&mut self) {
        debug!("clearing priority queue ({} elements)", self.heap.len());
        self.heap.clear();
    }

    /// Inserts `data` with the given priority. O(log n).
    pub fn insert(&mut self, data: T, priority: Priority) {
        self.heap.insert(Position::End, Element { data, priority });
        self.percolate_up(self.heap.len() - 1);
        self.check();
    }

    /// Returns the payload with the greatest priority.
    ///
    /// Panics if the queue is empty. Use `try_max` or check `is_empty` first.
    pub fn max(&self) -> &T {
        assert!(!self.is_empty(), "max() called on an empty priority queue");
        &self.heap.get(0).data
    }

    /// Returns the greatest priority in the queue.
    ///
    /// Panics if the queue is empty.
    pub fn max_priority(&self) -> Priority {
        assert!(
            !self.is_empty(),
            "max_priority() called on an empty priority queue"
        );
        self.heap.get(0).priority
    }

    pub fn try_max(&self) -> Result<&T, Error> {
        if self.is_empty() {
            return Err(Error::EmptyQueue);
        }
        Ok(&self.heap.get(0).data)
    }

    pub fn try_max_priority(&self) -> Result<Priority, Error> {
        if self.is_empty() {
            return Err(Error::EmptyQueue);
        }
        Ok(self.heap.get(0).priority)
    }

    /// Removes the element with the greatest priority and returns its payload,
    /// or `None` if the queue is empty. O(log n).
    pub fn max_dequeue(&mut self) -> Option<T> {
        self.max_dequeue_with_priority().map(|(data, _)| data)
    }

    /// Like `max_dequeue`, but also returns the priority of the removed element.
    pub fn max_dequeue_with_priority(&mut self) -> Option<(T, Priority)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let Element { data, priority } = self.heap.remove(Position::End);
        if !self.heap.is_empty() {
            self.percolate_down(0);
        }
        self.check();
        Some((data, priority))
    }

    /// Iterates `(payload, priority)` pairs in heap (array) order, which is
    /// not sorted.
    pub fn iter(&self) -> impl Iterator<Item = (&T, Priority)> + '_ {
        self.heap.iter().map(|e| (&e.data, e.priority))
    }

    /// Returns an iterator that dequeues elements in descending priority
    /// order. Elements not consumed by the iterator stay in the queue.
    pub fn drain_ordered(&mut self) -> DrainOrdered<'_, T> {
        DrainOrdered { queue: self }
    }

    fn priority_at(&self, index: usize) -> Priority {
        self.heap.get(index).priority
    }

    // Moves the element at `index` toward the root while it outranks its parent.
    fn percolate_up(&mut self, index: usize) {
        let mut i = index;
        while i > 0 {
            let parent = parent(i);
            if self.priority_at(i) <= self.priority_at(parent) {
                break;
            }
            trace!("percolate up: swap {} <-> {}", i, parent);
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    // Moves the element at `index` toward the leaves while a child outranks it.
    // The left child is considered first; the right child must strictly beat
    // whichever of {current, left} is winning.
    fn percolate_down(&mut self, index: usize) {
        let len = self.heap.len();
        let mut i = index;
        loop {
            let mut highest = i;
            let mut highest_priority = self.priority_at(i);

            let left = left(i);
            if left < len && self.priority_at(left) > highest_priority {
                highest = left;
                highest_priority = self.priority_at(left);
            }
            let right = right(i);
            if right < len && self.priority_at(right) > highest_priority {
                highest = right;
            }

            if highest == i {
                break;
            }
            trace!("percolate down: swap {} <-> {}", i, highest);
            self.heap.swap(i, highest);
            i = highest;
        }
    }

    #[cfg(debug_assertions)]
    fn check(&self) {
        for i in 1..self.heap.len() {
            assert!(
                self.priority_at(parent(i)) >= self.priority_at(i),
                "heap order violated at index {}",
                i
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn check(&self) {}
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for PriorityQueue<T> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
        }
    }
}

impl<T> Extend<(T, Priority)> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (T, Priority)>>(&mut self, iter: I) {
        for (data, priority) in iter {
            self.insert(data, priority);
        }
    }
}

impl<T> core::iter::FromIterator<(T, Priority)> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, Priority)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

pub struct DrainOrdered<'a, T> {
    queue: &'a mut PriorityQueue<T>,
}

impl<'a, T> Iterator for DrainOrdered<'a, T> {
    type Item = (T, Priority);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.max_dequeue_with_priority()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

use core::fmt::{Debug, Formatter};

impl<T> Debug for PriorityQueue<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Q: ")?;
        for (_, priority) in self.iter() {
            write!(fmt, "({}) ", priority)?;
        }
        Ok(())
    }
}
