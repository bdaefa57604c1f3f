//! Payload release policies.
//!
//! Whether a list owns its payloads is part of its type. Every path that
//! destroys a node (`remove`, `clear`, dropping the list) hands the payload
//! to the list's [`Release`] policy exactly once. Paths that transfer the
//! payload out (`pop_front`, `pop_back`, `take`) never touch the policy.
//!
//! ```text
//! Owned          - list owns T, release drops it
//! Borrowed       - list holds &'a V, caller keeps ownership
//! Destructor<F>  - list owns T, release runs F(T)
//! ```

/// Policy invoked when the list destroys a node's payload.
pub trait Release<T> {
    /// Consumes a payload whose node is being destroyed.
    fn release(&mut self, value: T);
}

/// The list owns its payloads and drops them on release.
///
/// This is the default policy for [`List`](crate::List).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Owned;

impl<T> Release<T> for Owned {
    #[inline]
    fn release(&mut self, value: T) {
        drop(value);
    }
}

/// The list borrows its payloads; the caller remains responsible for them.
///
/// Only available for reference payloads, so the list can never end up
/// responsible for destroying a value it does not own.
///
/// # Example
///
/// ```
/// use linkv_list::{Borrowed, List};
///
/// let names = vec![String::from("a"), String::from("b")];
///
/// let mut view: List<&String, Borrowed> = List::with_release(Borrowed);
/// for name in &names {
///     view.push_back(name);
/// }
/// view.clear();
///
/// // Still ours.
/// assert_eq!(names.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Borrowed;

impl<'a, V: ?Sized> Release<&'a V> for Borrowed {
    #[inline]
    fn release(&mut self, _value: &'a V) {}
}

/// The list owns its payloads and runs a caller-supplied destructor on
/// release.
///
/// # Example
///
/// ```
/// use linkv_list::{Destructor, List};
///
/// let mut released = Vec::new();
/// {
///     let mut list = List::with_release(Destructor::new(|v: u32| released.push(v)));
///     list.push_back(1);
///     let two = list.push_back(2);
///     list.push_back(3);
///
///     assert!(list.remove(two));
///     assert_eq!(list.pop_front(), Some(1)); // transferred, not released
/// }
/// assert_eq!(released, vec![2, 3]);
/// ```
pub struct Destructor<F>(F);

impl<F> Destructor<F> {
    /// Wraps a destructor closure.
    pub const fn new(f: F) -> Self {
        Destructor(f)
    }

    /// Returns the wrapped closure.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<T, F: FnMut(T)> Release<T> for Destructor<F> {
    #[inline]
    fn release(&mut self, value: T) {
        (self.0)(value)
    }
}

impl<F> core::fmt::Debug for Destructor<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Destructor(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn owned_drops() {
        let drops = Rc::new(Cell::new(0));
        Owned.release(DropCounter(drops.clone()));
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn borrowed_leaves_value_alone() {
        let drops = Rc::new(Cell::new(0));
        let value = DropCounter(drops.clone());
        Borrowed.release(&value);
        assert_eq!(drops.get(), 0);
        drop(value);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn destructor_receives_value() {
        let mut seen = Vec::new();
        let mut release = Destructor::new(|v: &'static str| seen.push(v));
        release.release("x");
        release.release("y");
        drop(release);
        assert_eq!(seen, vec!["x", "y"]);
    }
}
