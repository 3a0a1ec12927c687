//! A max-priority queue backed by a binary heap in a growable array.

pub mod dyn_array;
pub mod error;
pub mod priority_queue;

#[cfg(test)]
mod testing;

pub use crate::error::Error;
pub use crate::priority_queue::{DrainOrdered, Priority, PriorityQueue};
