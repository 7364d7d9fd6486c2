//! m-ary Heap implementation
//!
//! An array-backed heap whose implicit tree has a configurable branching
//! factor `m` (the *arity*) and whose ordering is supplied by an injected
//! [`Comparator`]. With `m = 2` this is the classic binary heap; wider heaps
//! are shallower (height O(log_m n)) at the cost of scanning up to `m`
//! children on every sift-down step.
//!
//! # Layout
//!
//! Nodes live in a single `Vec`. The root is at index 0, the children of the
//! node at `i` are at `m*i + 1 ..= m*i + m`, and the parent of `i` is at
//! `(i - 1) / m`. No child ever outranks its parent.
//!
//! # Time Complexity
//!
//! | Operation | Complexity      |
//! |-----------|-----------------|
//! | `push`    | O(log_m n)      |
//! | `pop`     | O(m log_m n)    |
//! | `top`     | O(1)            |
//! | `len`     | O(1)            |
//!
//! # Example
//!
//! ```rust
//! use mary_heap::{Greater, Heap, MaryHeap};
//!
//! let mut heap = MaryHeap::with_comparator(3, Greater).unwrap();
//! for value in [5, 1, 4, 2, 8, 3] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.top(), Ok(&8));
//! assert_eq!(heap.into_sorted_vec(), vec![8, 5, 4, 3, 2, 1]);
//! ```

use crate::traits::{Comparator, Heap, HeapError, Less};
use std::fmt;

/// Branching factor used by [`MaryHeap::new`]
pub const DEFAULT_ARITY: usize = 2;

/// An m-ary heap ordered by a pluggable comparator
///
/// The element for which no other element [`outranks`](Comparator::outranks)
/// it is always at the root. With the default [`Less`] comparator this is a
/// min-heap; use [`Greater`](crate::Greater) or a closure for other orders.
#[derive(Clone)]
pub struct MaryHeap<T, C = Less> {
    /// Nodes in level order
    data: Vec<T>,
    /// Branching factor, fixed at construction (always >= 2)
    arity: usize,
    comparator: C,
}

impl<T, C: Comparator<T> + Default> MaryHeap<T, C> {
    /// Creates an empty binary heap with the comparator's default value
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            arity: DEFAULT_ARITY,
            comparator: C::default(),
        }
    }

    /// Creates an empty heap with `arity` children per node
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn with_arity(arity: usize) -> Result<Self, HeapError> {
        Self::with_comparator(arity, C::default())
    }
}

impl<T, C: Comparator<T>> MaryHeap<T, C> {
    /// Creates an empty heap with `arity` children per node, ordered by
    /// `comparator`
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn with_comparator(arity: usize, comparator: C) -> Result<Self, HeapError> {
        Self::with_capacity(arity, comparator, 0)
    }

    /// Like [`with_comparator`](Self::with_comparator), reserving room for
    /// `capacity` elements up front
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn with_capacity(
        arity: usize,
        comparator: C,
        capacity: usize,
    ) -> Result<Self, HeapError> {
        if arity < 2 {
            return Err(HeapError::InvalidArity(arity));
        }
        log::debug!("new {}-ary heap, capacity {}", arity, capacity);
        Ok(Self {
            data: Vec::with_capacity(capacity),
            arity,
            comparator,
        })
    }

    /// Returns the branching factor
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the comparator
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Inserts an element, restoring the heap property by sift-up
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the highest priority element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    pub fn top(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Underflow)
    }

    /// Returns the highest priority element, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the highest priority element
    ///
    /// The root is swapped with the last node, the storage shrinks by one,
    /// and the new root is sifted down.
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty, leaving it
    /// unchanged.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Underflow);
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop().ok_or(HeapError::Underflow)?;

        self.sift_down(0)?;

        Ok(result)
    }

    /// Drops every element, keeping the arity, comparator and allocation
    pub fn clear(&mut self) {
        log::debug!("clearing {} elements", self.data.len());
        self.data.clear();
    }

    /// Returns the backing storage in level order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in pop order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            out.push(item);
        }
        out
    }

    /// Pops elements in priority order until the heap is empty
    ///
    /// Elements not yielded before the iterator is dropped stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    /// Checks that no node outranks its parent
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| {
            !self
                .comparator
                .outranks(&self.data[i], &self.data[self.parent(i)])
        })
    }

    /// Index of the `child`-th child (1-based) of `node`
    ///
    /// Does not check that the child exists. `None` means the index is not
    /// representable as a `usize`, so no such node can exist either.
    fn nth_child(&self, node: usize, child: usize) -> Result<Option<usize>, HeapError> {
        if child < 1 || child > self.arity {
            return Err(HeapError::InvalidArgument {
                child,
                arity: self.arity,
            });
        }
        Ok(self
            .arity
            .checked_mul(node)
            .and_then(|first| first.checked_add(child)))
    }

    /// Index of the parent of `node`; `node` must not be the root
    fn parent(&self, node: usize) -> usize {
        (node - 1) / self.arity
    }

    fn node_exists(&self, node: usize) -> bool {
        node < self.data.len()
    }

    /// Move element at index up while it outranks its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = self.parent(index);
            if self
                .comparator
                .outranks(&self.data[index], &self.data[parent])
            {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        log::trace!("sift_up settled at {}", index);
    }

    /// Move element at index down while its best child outranks it
    ///
    /// Children are scanned in order; a later child replaces the current
    /// candidate only if it strictly outranks it, so ties go to the
    /// earliest child.
    fn sift_down(&mut self, mut index: usize) -> Result<(), HeapError> {
        loop {
            let mut best = match self.nth_child(index, 1)? {
                Some(first) if self.node_exists(first) => first,
                _ => break,
            };

            for child in 2..=self.arity {
                let candidate = match self.nth_child(index, child)? {
                    Some(candidate) if self.node_exists(candidate) => candidate,
                    _ => break,
                };
                if self
                    .comparator
                    .outranks(&self.data[candidate], &self.data[best])
                {
                    best = candidate;
                }
            }

            if self.comparator.outranks(&self.data[best], &self.data[index]) {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
        log::trace!("sift_down settled at {}", index);
        Ok(())
    }
}

impl<T, C: Comparator<T>> Heap<T> for MaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        MaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MaryHeap::len(self)
    }

    fn push(&mut self, item: T) {
        MaryHeap::push(self, item)
    }

    fn top(&self) -> Result<&T, HeapError> {
        MaryHeap::top(self)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        MaryHeap::pop(self)
    }
}

impl<T, C: Comparator<T> + Default> Default for MaryHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Extend<T> for MaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for MaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaryHeap")
            .field("arity", &self.arity)
            .field("data", &self.data)
            .finish()
    }
}

/// Iterator returned by [`MaryHeap::drain_sorted`]
pub struct DrainSorted<'a, T, C: Comparator<T>> {
    heap: &'a mut MaryHeap<T, C>,
}

impl<T, C: Comparator<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}
