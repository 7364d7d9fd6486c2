//! Owned singly linked list with pivot partitioning and filtering
//!
//! Nodes are `Box`ed and owned by exactly one list at a time. [`List::pivot`]
//! and [`List::filter`] move nodes from the input list into the output lists
//! without reallocating them, and every traversal (including `Drop`) is a
//! loop, so list length never turns into call-stack depth.
//!
//! # Example
//!
//! ```rust
//! use mary_heap::llrec::List;
//!
//! let list: List<i64> = [8, 3, 9, 1, 5].into_iter().collect();
//! let (smaller, larger) = list.pivot(&5);
//! assert_eq!(smaller.to_string(), "3 1 5");
//! assert_eq!(larger.to_string(), "8 9");
//!
//! let odd = larger.filter(|v| v % 2 == 0);
//! assert_eq!(odd.to_string(), "9");
//! ```

use std::fmt;

struct Node<T> {
    val: T,
    next: Option<Box<Node<T>>>,
}

type Link<T> = Option<Box<Node<T>>>;

/// Places `node` in the empty slot `tail` and returns the node's own `next`
/// slot, which is the new tail.
fn append<T>(tail: &mut Link<T>, node: Box<Node<T>>) -> &mut Link<T> {
    &mut tail.insert(node).next
}

/// A singly linked list
pub struct List<T> {
    head: Link<T>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns true if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Prepends a value
    pub fn push_front(&mut self, val: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { val, next }));
        self.len += 1;
    }

    /// Removes and returns the first value
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            node.val
        })
    }

    /// Returns a reference to the first value
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.val)
    }

    /// Iterates over the values front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Removes every node whose value satisfies `pred`, keeping the rest in
    /// their original order
    pub fn filter<P>(mut self, mut pred: P) -> List<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut kept = List::new();
        let mut tail = &mut kept.head;
        let mut cursor = self.head.take();
        self.len = 0;

        while let Some(mut node) = cursor {
            cursor = node.next.take();
            if !pred(&node.val) {
                tail = append(tail, node);
                kept.len += 1;
            }
        }

        kept
    }
}

impl<T: PartialOrd> List<T> {
    /// Splits the list around `pivot`
    ///
    /// Returns `(smaller, larger)`: every node whose value is `<= pivot` moves
    /// to `smaller`, every other node to `larger`. Both keep the input's
    /// relative order.
    pub fn pivot(mut self, pivot: &T) -> (List<T>, List<T>) {
        let mut smaller = List::new();
        let mut larger = List::new();
        let mut small_tail = &mut smaller.head;
        let mut large_tail = &mut larger.head;
        let mut cursor = self.head.take();
        self.len = 0;

        while let Some(mut node) = cursor {
            cursor = node.next.take();
            if node.val <= *pivot {
                small_tail = append(small_tail, node);
                smaller.len += 1;
            } else {
                large_tail = append(large_tail, node);
                larger.len += 1;
            }
        }

        log::debug!(
            "pivot split {} nodes into {} smaller and {} larger",
            smaller.len + larger.len,
            smaller.len,
            larger.len
        );
        (smaller, larger)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        let mut tail = &mut list.head;
        let mut len = 0;
        for val in iter {
            tail = append(tail, Box::new(Node { val, next: None }));
            len += 1;
        }
        list.len = len;
        list
    }
}

/// Borrowing iterator returned by [`List::iter`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.val
        })
    }
}

/// Owning iterator over a [`List`]
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Space separated values
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", val)?;
        }
        Ok(())
    }
}
