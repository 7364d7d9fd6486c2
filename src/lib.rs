//! m-ary Heaps for Rust
//!
//! This crate provides an array-backed priority heap with a configurable
//! branching factor and a pluggable ordering strategy, plus a small owned
//! linked list with pivot partitioning and predicate filtering.
//!
//! # Features
//!
//! - **MaryHeap**: O(log_m n) push, O(m log_m n) pop, O(1) top; arity fixed
//!   at construction (2 for a binary heap, wider for shallower trees)
//! - **Comparators**: [`Less`] (min-heap, the default), [`Greater`]
//!   (max-heap), or any `Fn(&T, &T) -> bool` closure
//! - **StdHeap**: an `Option`-returning, `BinaryHeap`-shaped facade over any [`Heap`]
//! - **List**: singly linked list with iterative `pivot` and `filter`
//!
//! # Example
//!
//! ```rust
//! use mary_heap::{Greater, Heap, HeapError, MaryHeap};
//!
//! let mut heap = MaryHeap::with_comparator(3, Greater).unwrap();
//! heap.push(5);
//! heap.push(1);
//! heap.push(8);
//! assert_eq!(heap.top(), Ok(&8));
//! assert_eq!(heap.pop(), Ok(8));
//!
//! let mut empty: MaryHeap<i32> = MaryHeap::new();
//! assert_eq!(empty.pop(), Err(HeapError::Underflow));
//! ```

pub mod llrec;
pub mod mary;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use mary::MaryHeap;
pub use traits::{Comparator, Greater, Heap, HeapError, Less};
