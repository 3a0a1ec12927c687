/// Where an element is inserted into, or removed from, a `DynArray`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Position {
    /// A specific index. For `insert`, this may be equal to `len()`.
    Index(usize),
    /// One past the last element for `insert`, or the last element for `remove`.
    End,
}

/// A growable, indexed sequence of elements.
///
/// Appending and removing the last element are amortized O(1). Inserting or
/// removing anywhere else shifts the elements that follow. Every index passed
/// to a method must be in bounds; out-of-range access is a programming error
/// and panics.
#[derive(Clone, Eq, PartialEq)]
pub struct DynArray<T> {
    items: Vec<T>,
}

impl<T> DynArray<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn get(&self, index: usize) -> &T {
        self.check_index(index);
        &self.items[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.check_index(index);
        &mut self.items[index]
    }

    /// Overwrites the element at `index` and returns the previous one.
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.check_index(index);
        core::mem::replace(&mut self.items[index], value)
    }

    pub fn insert(&mut self, position: Position, value: T) {
        match position {
            Position::End => self.items.push(value),
            Position::Index(index) => {
                assert!(
                    index <= self.items.len(),
                    "insert index {} is out of range for length {}",
                    index,
                    self.items.len()
                );
                self.items.insert(index, value);
            }
        }
    }

    pub fn remove(&mut self, position: Position) -> T {
        match position {
            Position::End => match self.items.pop() {
                Some(value) => value,
                None => panic!("cannot remove from an empty array"),
            },
            Position::Index(index) => {
                self.check_index(index);
                self.items.remove(index)
            }
        }
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.check_index(a);
        self.check_index(b);
        self.items.swap(a, b);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.items.len(),
            "index {} is out of range for length {}",
            index,
            self.items.len()
        );
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

use core::fmt::{Debug, Formatter};
impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.debug_list().entries(self.items.iter()).finish()
    }
}
