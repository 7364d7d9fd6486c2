//! Standard library compatibility layer
//!
//! Provides an `Option`-returning facade shaped like
//! `std::collections::BinaryHeap` over any [`Heap`].
//!
//! # Differences from BinaryHeap
//!
//! - **Ordering is the wrapped heap's**: a `MaryHeap` with the default
//!   [`Less`](crate::Less) comparator is a min-heap, while `BinaryHeap` is a
//!   max-heap. Wrap a `MaryHeap<T, Greater>` for `BinaryHeap` order.
//!
//! # Example
//!
//! ```rust
//! use mary_heap::stdlib_compat::StdHeap;
//! use mary_heap::{Greater, MaryHeap};
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap: StdHeap<i32, MaryHeap<i32, Greater>> = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&7));
//! assert_eq!(heap.pop(), Some(7));
//! ```

use crate::traits::Heap;
use std::marker::PhantomData;

/// A `BinaryHeap`-style wrapper around any [`Heap`]
///
/// Empty-heap conditions surface as `None` instead of
/// [`HeapError::Underflow`](crate::HeapError::Underflow).
///
/// # Type Parameters
/// - `T`: The element type
/// - `H`: The underlying heap implementation (e.g., `MaryHeap<T, Greater>`)
#[derive(Debug, Clone)]
pub struct StdHeap<T, H: Heap<T>> {
    heap: H,
    _phantom: PhantomData<T>,
}

impl<T, H: Heap<T> + Default> StdHeap<T, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::from_heap(H::default())
    }
}

impl<T, H: Heap<T>> StdHeap<T, H> {
    /// Wraps an existing heap, e.g. one built with a custom arity
    pub fn from_heap(heap: H) -> Self {
        Self {
            heap,
            _phantom: PhantomData,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        self.heap.push(item)
    }

    /// Returns a reference to the highest priority item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.top().ok()
    }

    /// Removes and returns the highest priority item
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    /// Unwraps the underlying heap
    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<T, H: Heap<T> + Default> Default for StdHeap<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mary::MaryHeap;
    use crate::traits::{Greater, Less};

    #[test]
    fn test_matches_binary_heap_order() {
        let values = [4, 8, 1, 9, 3, 3, 7];

        let mut std_heap = std::collections::BinaryHeap::new();
        let mut heap: StdHeap<i32, MaryHeap<i32, Greater>> = StdHeap::new();
        for value in values {
            std_heap.push(value);
            heap.push(value);
        }

        assert_eq!(heap.len(), std_heap.len());
        while let Some(expected) = std_heap.pop() {
            assert_eq!(heap.peek(), Some(&expected));
            assert_eq!(heap.pop(), Some(expected));
        }
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_wraps_custom_arity() {
        let inner = MaryHeap::with_comparator(4, Less).unwrap();
        let mut heap = StdHeap::from_heap(inner);
        heap.push("pear");
        heap.push("apple");
        heap.push("fig");

        assert_eq!(heap.pop(), Some("apple"));

        let inner = heap.into_inner();
        assert_eq!(inner.arity(), 4);
        assert_eq!(inner.len(), 2);
    }
}
