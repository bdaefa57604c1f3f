//! Stable node handles.
//!
//! A [`Handle`] is the arena slot of a node. It stays valid until that node
//! is removed, taken, or popped; after that the slot may be reused by a later
//! insert (same discipline as the `slab` crate).

use core::fmt;

/// A stable reference to a list node, usable for O(1) access and removal.
///
/// Handles are only meaningful for the list that returned them.
///
/// # Example
///
/// ```
/// use linkv_list::List;
///
/// let mut list: List<&str> = List::new();
/// let a = list.push_back("a");
/// let b = list.push_back("b");
///
/// assert_ne!(a, b);
/// assert_eq!(list.get(b), Some(&"b"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(usize);

impl Handle {
    /// Sentinel for "no node", used for the links of head/tail and the
    /// ends of an empty list.
    pub(crate) const NONE: Self = Handle(usize::MAX);

    #[inline]
    pub(crate) const fn from_slot(slot: usize) -> Self {
        Handle(slot)
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0
    }

    #[inline]
    pub(crate) const fn is_none(self) -> bool {
        self.0 == usize::MAX
    }

    #[inline]
    pub(crate) const fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Converts a sentinel-encoded link into an `Option`.
    #[inline]
    pub(crate) const fn get(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("Handle(NONE)")
        } else {
            write!(f, "Handle({})", self.0)
        }
    }
}
