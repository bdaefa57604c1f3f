//! Doubly-linked list over an internal node arena.
//!
//! Nodes live in a [`slab::Slab`]; links are slot indices rather than
//! pointers, so removal frees a slot for reuse instead of deallocating a
//! node, and a stale [`Handle`] can never dangle into freed memory.
//!
//! # Example
//!
//! ```
//! use linkv_list::List;
//!
//! let mut list: List<u64> = List::new();
//!
//! // Insert values - returns a handle for O(1) access/removal later
//! let a = list.push_back(1);
//! let b = list.push_back(2);
//! let c = list.push_back(3);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(b), Some(&2));
//!
//! // Remove from middle - O(1)
//! assert!(list.remove(b));
//! assert_eq!(list.len(), 2);
//!
//! // Negative indices count from the tail
//! assert_eq!(list.index(-1), Some(c));
//! assert_eq!(list.index(0), Some(a));
//!
//! assert_eq!(list.pop_front(), Some(1));
//! assert_eq!(list.pop_front(), Some(3));
//! assert_eq!(list.pop_front(), None);
//! ```
//!
//! # Ownership
//!
//! The second type parameter picks the [`Release`] policy. Destroying a node
//! (`remove`, `clear`, drop) runs the policy once; popping or taking a node
//! hands the payload back instead.
//!
//! # Handle Invariant
//!
//! A handle is valid until its node leaves the list. Using it afterwards is
//! a logic error: the lookup either misses or finds whichever node reused
//! the slot. Memory safety is unaffected.

use core::fmt;

use slab::Slab;

use crate::{Handle, Owned, Release};

/// A node in the arena. The list manages the links; callers only see `&T`.
#[derive(Debug)]
struct Node<T> {
    data: T,
    prev: Handle,
    next: Handle,
}

/// Traversal direction for [`List::walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Head to tail.
    Forward,
    /// Tail to head.
    Reverse,
}

/// A doubly-linked list owning its node arena.
///
/// # Type Parameters
///
/// - `T`: payload type
/// - `R`: release policy (default [`Owned`])
///
/// # Example
///
/// ```
/// use linkv_list::List;
///
/// let mut list: List<String> = List::new();
///
/// let key = list.push_back("hello".into());
/// list.push_front("first".into());
///
/// assert_eq!(list.get(key).map(String::as_str), Some("hello"));
/// assert_eq!(list.find(|s: &String, p: &str| s == p, "first"), list.front_handle());
/// ```
pub struct List<T, R: Release<T> = Owned> {
    nodes: Slab<Node<T>>,
    head: Handle,
    tail: Handle,
    release: R,
}

impl<T> List<T, Owned> {
    /// Creates an empty owning list.
    #[inline]
    pub fn new() -> Self {
        Self::with_release(Owned)
    }

    /// Creates an empty owning list with room for `capacity` nodes before
    /// the arena grows.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_release(capacity, Owned)
    }
}

impl<T, R: Release<T> + Default> Default for List<T, R> {
    fn default() -> Self {
        Self::with_release(R::default())
    }
}

// =============================================================================
// Construction and introspection
// =============================================================================

impl<T, R: Release<T>> List<T, R> {
    /// Creates an empty list that destroys payloads through `release`.
    #[inline]
    pub fn with_release(release: R) -> Self {
        Self::with_capacity_and_release(0, release)
    }

    /// Creates an empty list with a preallocated arena and the given policy.
    #[inline]
    pub fn with_capacity_and_release(capacity: usize, release: R) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: Handle::NONE,
            tail: Handle::NONE,
            release,
        }
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the release policy.
    #[inline]
    pub fn release_policy(&self) -> &R {
        &self.release
    }

    /// Returns the head node's handle, or `None` if empty.
    #[inline]
    pub fn front_handle(&self) -> Option<Handle> {
        self.head.get()
    }

    /// Returns the tail node's handle, or `None` if empty.
    #[inline]
    pub fn back_handle(&self) -> Option<Handle> {
        self.tail.get()
    }

    /// Returns `true` if `handle` refers to a node currently in the list.
    #[inline]
    pub fn contains(&self, handle: Handle) -> bool {
        self.nodes.contains(handle.slot())
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Pushes a value to the back of the list.
    ///
    /// Returns the handle of the new node.
    pub fn push_back(&mut self, value: T) -> Handle {
        let key = Handle::from_slot(self.nodes.insert(Node {
            data: value,
            prev: self.tail,
            next: Handle::NONE,
        }));

        if self.tail.is_some() {
            self.nodes[self.tail.slot()].next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        key
    }

    /// Pushes a value to the front of the list.
    ///
    /// Returns the handle of the new node.
    pub fn push_front(&mut self, value: T) -> Handle {
        let key = Handle::from_slot(self.nodes.insert(Node {
            data: value,
            prev: Handle::NONE,
            next: self.head,
        }));

        if self.head.is_some() {
            self.nodes[self.head.slot()].prev = key;
        } else {
            self.tail = key;
        }

        self.head = key;
        key
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the back node and returns its payload.
    ///
    /// Ownership transfers to the caller; the release policy is not run.
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.take(self.tail)
    }

    /// Removes the front node and returns its payload.
    ///
    /// Ownership transfers to the caller; the release policy is not run.
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.take(self.head)
    }

    /// Unlinks a node and returns its payload without releasing it.
    ///
    /// Returns `None` if `handle` is not in the list.
    pub fn take(&mut self, handle: Handle) -> Option<T> {
        let node = self.nodes.try_remove(handle.slot())?;

        if node.prev.is_some() {
            self.nodes[node.prev.slot()].next = node.next;
        } else {
            self.head = node.next;
        }

        if node.next.is_some() {
            self.nodes[node.next.slot()].prev = node.prev;
        } else {
            self.tail = node.prev;
        }

        Some(node.data)
    }

    /// Unlinks a node and destroys its payload through the release policy.
    ///
    /// Returns `false` if `handle` is not in the list.
    pub fn remove(&mut self, handle: Handle) -> bool {
        match self.take(handle) {
            Some(value) => {
                self.release.release(value);
                true
            }
            None => false,
        }
    }

    /// Destroys every node, head to tail, through the release policy.
    ///
    /// The list is empty afterwards.
    pub fn clear(&mut self) {
        while let Some(value) = self.pop_front() {
            self.release.release(value);
        }
        debug_assert!(self.head.is_none() && self.tail.is_none());
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the payload at `handle`.
    #[inline]
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.nodes.get(handle.slot()).map(|node| &node.data)
    }

    /// Returns a mutable reference to the payload at `handle`.
    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.nodes.get_mut(handle.slot()).map(|node| &mut node.data)
    }

    /// Returns a reference to the front payload.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(self.head)
    }

    /// Returns a reference to the back payload.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.tail)
    }

    /// Returns the handle of the node after `handle`.
    ///
    /// Returns `None` if `handle` is the tail or not in the list.
    #[inline]
    pub fn next_handle(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle.slot())?.next.get()
    }

    /// Returns the handle of the node before `handle`.
    ///
    /// Returns `None` if `handle` is the head or not in the list.
    #[inline]
    pub fn prev_handle(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle.slot())?.prev.get()
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Returns the first node, head to tail, whose payload is equal to
    /// `probe` under `eq`.
    ///
    /// ```
    /// use linkv_list::List;
    ///
    /// struct Pair { key: i32, value: &'static str }
    ///
    /// let mut list = List::new();
    /// list.push_back(Pair { key: 1, value: "a" });
    /// let two = list.push_back(Pair { key: 2, value: "b" });
    ///
    /// let eq = |pair: &Pair, key: &i32| pair.key == *key;
    /// assert_eq!(list.find(eq, &2), Some(two));
    /// assert_eq!(list.find(eq, &3), None);
    /// ```
    pub fn find<P, F>(&self, eq: F, probe: &P) -> Option<Handle>
    where
        P: ?Sized,
        F: Fn(&T, &P) -> bool,
    {
        self.find_by(|data| eq(data, probe))
    }

    /// Returns the first node, head to tail, whose payload satisfies `pred`.
    pub fn find_by<F>(&self, mut pred: F) -> Option<Handle>
    where
        F: FnMut(&T) -> bool,
    {
        self.walk(Direction::Forward)
            .find(|(_, data)| pred(data))
            .map(|(handle, _)| handle)
    }

    /// Returns the handle at position `index`.
    ///
    /// Non-negative indices count from the head (`0` = first). Negative
    /// indices count from the tail (`-1` = last) and are walked from the
    /// tail. Returns `None` when the index is out of range.
    pub fn index(&self, index: isize) -> Option<Handle> {
        let (direction, steps) = if index < 0 {
            (Direction::Reverse, index.unsigned_abs() - 1)
        } else {
            (Direction::Forward, index.unsigned_abs())
        };

        if steps >= self.len() {
            return None;
        }

        self.walk(direction).nth(steps).map(|(handle, _)| handle)
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over payloads, front to back.
    ///
    /// Use `.rev()` for back to front.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            handles: self.handles(),
        }
    }

    /// Returns an iterator over handles, front to back.
    #[inline]
    pub fn handles(&self) -> Handles<'_, T> {
        Handles {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Returns an iterator over `(handle, payload)` pairs in `direction`.
    #[inline]
    pub fn walk(&self, direction: Direction) -> Walk<'_, T> {
        Walk {
            handles: self.handles(),
            direction,
        }
    }
}

impl<T, R: Release<T>> Drop for List<T, R> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, R: Release<T>> fmt::Debug for List<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[list of {} nodes] ", self.len())?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T, Owned> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T, R: Release<T>> Extend<T> for List<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T, R: Release<T>> IntoIterator for &'a List<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over node handles.
pub struct Handles<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: Handle,
    back: Handle,
    remaining: usize,
}

impl<T> Handles<'_, T> {
    #[inline]
    fn finish(&mut self) {
        self.front = Handle::NONE;
        self.back = Handle::NONE;
    }
}

impl<T> Iterator for Handles<'_, T> {
    type Item = Handle;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front.is_none() {
            return None;
        }

        let key = self.front;
        self.remaining -= 1;

        // Met in the middle
        if self.front == self.back {
            self.finish();
        } else {
            self.front = self.nodes[key.slot()].next;
        }

        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Handles<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.back.is_none() {
            return None;
        }

        let key = self.back;
        self.remaining -= 1;

        if self.front == self.back {
            self.finish();
        } else {
            self.back = self.nodes[key.slot()].prev;
        }

        Some(key)
    }
}

impl<T> ExactSizeIterator for Handles<'_, T> {}

impl<T> Clone for Handles<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Iterator over references to payloads.
pub struct Iter<'a, T> {
    handles: Handles<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.handles.nodes;
        let key = self.handles.next()?;
        Some(&nodes[key.slot()].data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.handles.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let nodes = self.handles.nodes;
        let key = self.handles.next_back()?;
        Some(&nodes[key.slot()].data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over `(handle, payload)` pairs in a fixed [`Direction`].
pub struct Walk<'a, T> {
    handles: Handles<'a, T>,
    direction: Direction,
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = (Handle, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.handles.nodes;
        let key = match self.direction {
            Direction::Forward => self.handles.next()?,
            Direction::Reverse => self.handles.next_back()?,
        };
        Some((key, &nodes[key.slot()].data))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.handles.size_hint()
    }
}

impl<T> ExactSizeIterator for Walk<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Borrowed, Destructor};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::cell::RefCell;

    /// Checks head/tail, link symmetry, and that both traversal directions
    /// agree with each other and with the count.
    fn assert_links<T, R: Release<T>>(list: &List<T, R>) {
        if list.is_empty() {
            assert!(list.head.is_none());
            assert!(list.tail.is_none());
            return;
        }

        assert!(list.nodes[list.head.slot()].prev.is_none());
        assert!(list.nodes[list.tail.slot()].next.is_none());

        let mut forward = Vec::new();
        let mut key = list.head;
        while key.is_some() {
            let node = &list.nodes[key.slot()];
            if node.next.is_some() {
                assert_eq!(list.nodes[node.next.slot()].prev, key);
            }
            forward.push(key);
            key = node.next;
        }

        let mut backward = Vec::new();
        let mut key = list.tail;
        while key.is_some() {
            backward.push(key);
            key = list.nodes[key.slot()].prev;
        }
        backward.reverse();

        assert_eq!(forward, backward);
        assert_eq!(forward.len(), list.len());
    }

    #[test]
    fn new_list_is_empty() {
        let list: List<u64> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front_handle().is_none());
        assert!(list.back_handle().is_none());
        assert_links(&list);
    }

    #[test]
    fn push_back_single() {
        let mut list: List<u64> = List::new();

        let a = list.push_back(1);

        assert_eq!(list.len(), 1);
        assert_eq!(list.front_handle(), Some(a));
        assert_eq!(list.back_handle(), Some(a));
        assert_eq!(list.get(a), Some(&1));
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&1));
        assert_links(&list);
    }

    #[test]
    fn push_back_multiple() {
        let mut list: List<u64> = List::new();

        let a = list.push_back(1);
        let _b = list.push_back(2);
        let c = list.push_back(3);

        assert_eq!(list.front_handle(), Some(a));
        assert_eq!(list.back_handle(), Some(c));

        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![1, 2, 3]);
        assert_links(&list);
    }

    #[test]
    fn push_front_multiple() {
        let mut list: List<u64> = List::new();

        let a = list.push_front(1);
        let _b = list.push_front(2);
        let c = list.push_front(3);

        assert_eq!(list.front_handle(), Some(c));
        assert_eq!(list.back_handle(), Some(a));

        // Order should be 3, 2, 1
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![3, 2, 1]);
        assert_links(&list);
    }

    #[test]
    fn pop_front_and_back() {
        let mut list: List<u64> = [1, 2, 3, 4].into_iter().collect();

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(4));
        assert_eq!(list.len(), 2);
        assert_links(&list);

        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert_links(&list);
    }

    #[test]
    fn remove_middle_head_and_tail() {
        let mut list: List<u64> = List::new();

        let a = list.push_back(1);
        let b = list.push_back(2);
        let c = list.push_back(3);
        let d = list.push_back(4);

        assert!(list.remove(b));
        assert_links(&list);
        assert!(list.remove(a));
        assert_eq!(list.front_handle(), Some(c));
        assert_links(&list);
        assert!(list.remove(d));
        assert_eq!(list.back_handle(), Some(c));
        assert_links(&list);

        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![3]);
    }

    #[test]
    fn remove_stale_handle() {
        let mut list: List<u64> = List::new();

        let a = list.push_back(1);
        assert!(list.remove(a));
        assert!(!list.remove(a));
        assert!(!list.contains(a));
        assert_eq!(list.get(a), None);
        assert_eq!(list.take(a), None);
    }

    #[test]
    fn slot_reuse_after_remove() {
        let mut list: List<u64> = List::new();

        let a = list.push_back(1);
        list.push_back(2);
        list.remove(a);

        let c = list.push_back(3);
        assert_eq!(c, a);
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![2, 3]);
        assert_links(&list);
    }

    #[test]
    fn take_does_not_release() {
        let released = RefCell::new(Vec::new());
        let mut list = List::with_release(Destructor::new(|v: u64| released.borrow_mut().push(v)));

        let a = list.push_back(1);
        list.push_back(2);

        assert_eq!(list.take(a), Some(1));
        assert_eq!(list.pop_back(), Some(2));
        assert!(released.borrow().is_empty());
    }

    #[test]
    fn release_runs_once_per_destroyed_node() {
        let released = RefCell::new(Vec::new());
        {
            let mut list =
                List::with_release(Destructor::new(|v: u64| released.borrow_mut().push(v)));

            let a = list.push_back(1);
            list.push_back(2);
            list.push_back(3);
            list.push_back(4);

            list.remove(a);
            assert_eq!(*released.borrow(), vec![1]);

            list.clear();
            assert_eq!(*released.borrow(), vec![1, 2, 3, 4]);
            assert_links(&list);

            list.push_back(5);
            list.push_back(6);
        }
        // Dropped list releases the rest, head to tail
        assert_eq!(*released.borrow(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn borrowed_list_leaves_payloads_with_caller() {
        let values = vec![String::from("a"), String::from("b"), String::from("c")];

        let mut list: List<&String, Borrowed> = List::with_release(Borrowed);
        let handles: Vec<_> = values.iter().map(|v| list.push_back(v)).collect();

        assert!(list.remove(handles[1]));
        list.clear();
        drop(list);

        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn clear() {
        let mut list: List<u64> = [1, 2, 3].into_iter().collect();

        list.clear();

        assert!(list.is_empty());
        assert!(list.front().is_none());
        assert_links(&list);

        // Reusable after clear
        list.push_back(4);
        assert_eq!(list.front(), Some(&4));
    }

    #[test]
    fn find_by_probe() {
        let mut list: List<(i32, &str)> = List::new();

        list.push_back((1, "a"));
        let b = list.push_back((2, "b"));
        list.push_back((2, "shadowed"));

        let eq = |pair: &(i32, &str), key: &i32| pair.0 == *key;
        assert_eq!(list.find(eq, &2), Some(b));
        assert_eq!(list.find(eq, &9), None);
        assert_eq!(list.find_by(|pair| pair.1 == "shadowed"), list.back_handle());
    }

    #[test]
    fn index_positive_and_negative() {
        let mut list: List<u64> = List::new();

        let a = list.push_back(10);
        let b = list.push_back(20);
        let c = list.push_back(30);

        assert_eq!(list.index(0), Some(a));
        assert_eq!(list.index(1), Some(b));
        assert_eq!(list.index(2), Some(c));
        assert_eq!(list.index(3), None);

        assert_eq!(list.index(-1), Some(c));
        assert_eq!(list.index(-2), Some(b));
        assert_eq!(list.index(-3), Some(a));
        assert_eq!(list.index(-4), None);

        assert_eq!(list.index(isize::MIN), None);
        assert_eq!(list.index(isize::MAX), None);
    }

    #[test]
    fn index_empty() {
        let list: List<u64> = List::new();
        assert_eq!(list.index(0), None);
        assert_eq!(list.index(-1), None);
    }

    #[test]
    fn walk_both_directions() {
        let mut list: List<u64> = List::new();

        let a = list.push_back(1);
        let b = list.push_back(2);
        let c = list.push_back(3);

        let forward: Vec<_> = list.walk(Direction::Forward).collect();
        assert_eq!(forward, vec![(a, &1), (b, &2), (c, &3)]);

        let reverse: Vec<_> = list.walk(Direction::Reverse).collect();
        assert_eq!(reverse, vec![(c, &3), (b, &2), (a, &1)]);

        // Fresh iterator each call
        assert_eq!(list.walk(Direction::Reverse).len(), 3);
    }

    #[test]
    fn iter_double_ended() {
        let list: List<u64> = [1, 2, 3, 4].into_iter().collect();

        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        let values: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(values, vec![4, 3, 2, 1]);
    }

    #[test]
    fn next_and_prev_handle() {
        let mut list: List<u64> = List::new();

        let a = list.push_back(1);
        let b = list.push_back(2);
        let c = list.push_back(3);

        assert_eq!(list.next_handle(a), Some(b));
        assert_eq!(list.next_handle(b), Some(c));
        assert_eq!(list.next_handle(c), None);

        assert_eq!(list.prev_handle(a), None);
        assert_eq!(list.prev_handle(b), Some(a));
        assert_eq!(list.prev_handle(c), Some(b));
    }

    #[test]
    fn get_mut() {
        let mut list: List<u64> = List::new();

        let a = list.push_back(1);
        *list.get_mut(a).unwrap() = 10;

        assert_eq!(list.get(a), Some(&10));
    }

    #[test]
    fn debug_lists_payloads() {
        let list: List<u64> = [1, 2].into_iter().collect();
        assert_eq!(format!("{list:?}"), "[list of 2 nodes] [1, 2]");
    }

    #[test]
    fn random_ops_keep_links_consistent() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let mut list: List<u32> = List::new();
        let mut model: Vec<(Handle, u32)> = Vec::new();

        for i in 0..10_000u32 {
            match rng.gen_range(0..6) {
                0 => model.push((list.push_back(i), i)),
                1 => model.insert(0, (list.push_front(i), i)),
                2 => assert_eq!(list.pop_back(), model.pop().map(|(_, v)| v)),
                3 => {
                    let expected = if model.is_empty() {
                        None
                    } else {
                        Some(model.remove(0).1)
                    };
                    assert_eq!(list.pop_front(), expected);
                }
                _ => {
                    if !model.is_empty() {
                        let at = rng.gen_range(0..model.len());
                        let (handle, _) = model.remove(at);
                        assert!(list.remove(handle));
                    }
                }
            }

            if i % 97 == 0 {
                assert_links(&list);
            }
        }

        assert_links(&list);
        let values: Vec<_> = list.iter().copied().collect();
        let expected: Vec<_> = model.iter().map(|&(_, v)| v).collect();
        assert_eq!(values, expected);
    }
}
