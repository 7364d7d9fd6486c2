//! Common traits for heap data structures
//!
//! This module provides the two seams every container in this crate is built
//! around:
//!
//! - [`Comparator`]: the ordering strategy, a strict weak ordering predicate
//!   answering "does `a` outrank `b`?"
//! - [`Heap`]: the container API (`push`, `top`, `pop`, `len`, `is_empty`)
//!
//! The stock comparators [`Less`] and [`Greater`] give min-heap and max-heap
//! behavior respectively. Any closure `Fn(&T, &T) -> bool` is also a
//! comparator, so one-off orderings need no new type.

use thiserror::Error;

/// Error type for heap operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `top` or `pop` was called on an empty heap
    #[error("heap is empty")]
    Underflow,

    /// A child number outside `1..=arity` was requested from the index mapping
    #[error("invalid child number {child} for a heap of arity {arity}")]
    InvalidArgument { child: usize, arity: usize },

    /// The heap was constructed with a branching factor below 2
    #[error("invalid arity {0}: a heap needs at least 2 children per node")]
    InvalidArity(usize),
}

/// Ordering strategy for a heap
///
/// `outranks(a, b)` returns true when `a` must be considered of strictly
/// higher priority than `b`. Implementations must be a strict weak ordering
/// (irreflexive, asymmetric, transitive); the heap's invariant only holds
/// under that assumption.
///
/// # Example
///
/// ```rust
/// use mary_heap::{Comparator, Greater, Less};
///
/// assert!(Less.outranks(&1, &2));
/// assert!(Greater.outranks(&2, &1));
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.outranks(&"ab", &"abc"));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Returns true if `a` strictly outranks `b`
    fn outranks(&self, a: &T, b: &T) -> bool;
}

/// Natural ascending order: smaller elements have priority (min-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

/// Natural descending order: larger elements have priority (max-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Comparator<T> for Less {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: PartialOrd + ?Sized> Comparator<T> for Greater {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Base trait for priority heap containers
///
/// Unlike `std::collections::BinaryHeap`, emptiness is reported as an error
/// rather than `None`: `top` and `pop` fail with [`HeapError::Underflow`] and
/// leave the heap untouched. Wrap a heap in
/// [`StdHeap`](crate::stdlib_compat::StdHeap) for an `Option`-based API.
///
/// # Example
///
/// ```rust
/// use mary_heap::{Heap, HeapError, MaryHeap};
///
/// let mut heap: MaryHeap<i32> = MaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.top(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.len(), 2);
///
/// heap.clear();
/// assert_eq!(heap.pop(), Err(HeapError::Underflow));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log_m n) comparisons.
    fn push(&mut self, item: T);

    /// Returns the highest priority element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn top(&self) -> Result<&T, HeapError>;

    /// Removes and returns the highest priority element
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty; the heap is
    /// left unchanged.
    ///
    /// # Time Complexity
    /// O(m log_m n) comparisons.
    fn pop(&mut self) -> Result<T, HeapError>;
}
