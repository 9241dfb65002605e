use core::fmt::Display;

use alloc::string::String;
use alloc::vec::Vec;

/// Bound for list elements: comparable for lookup and removal, printable for
/// [`ReadableList::render`].
pub trait ListData: PartialEq + Display {}

impl<T> ListData for T where T: PartialEq + Display + ?Sized {}

/// Read-side operations shared by [`LockedList`](super::LockedList) and
/// [`ListHandle`](super::ListHandle).
///
/// Every method runs under a single acquisition of the read lock, so each call
/// sees one consistent state of the list. An absent handle answers as an
/// empty list.
pub trait ReadableList<T: ListData> {
    /// Get the number of elements.
    fn len(&self) -> usize;

    /// Check if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if some element equals `value`.
    fn contains(&self, value: &T) -> bool;

    /// Call `visit` once per element, head to tail.
    ///
    /// The read lock is held for the whole walk. `visit` may read the same
    /// list again but must not mutate it: a write from inside the visitor
    /// waits on the lock it is itself holding and never returns.
    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T);

    /// Render as `Length: <n>, Data: <v1> <v2> ... <vn>`.
    fn render(&self) -> String;

    /// Clone every element into a vector, head to tail.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::new();
        self.for_each(|value| out.push(value.clone()));
        out
    }
}
