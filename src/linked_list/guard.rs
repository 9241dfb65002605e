use core::fmt::{self, Debug};
use core::ops::Deref;
use core::ptr::NonNull;

use spin::RwLockReadGuard;

use super::iter::Iter;
use super::node::Node;
use super::raw::RawList;

/// A shared view of a whole [`LockedList`](super::LockedList).
///
/// The guard holds the read lock: node references obtained through it stay
/// valid for as long as the guard lives, and every writer on the list waits
/// until it is dropped. Keep it short-lived, and never call a mutating list
/// operation on the same thread while one is alive.
pub struct ListReadGuard<'a, T> {
    raw: RwLockReadGuard<'a, RawList<T>>,
}

impl<'a, T> ListReadGuard<'a, T> {
    pub(crate) fn new(raw: RwLockReadGuard<'a, RawList<T>>) -> Self {
        Self { raw }
    }

    /// The first node, or `None` if the list is empty.
    pub fn head(&self) -> Option<&Node<T>> {
        self.raw.head()
    }

    /// The last node, or `None` if the list is empty.
    pub fn tail(&self) -> Option<&Node<T>> {
        self.raw.tail()
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.raw.iter()
    }

    /// The first node whose value equals `value`.
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        self.raw.find(value)
    }
}

impl<'g, T> IntoIterator for &'g ListReadGuard<'_, T> {
    type Item = &'g T;
    type IntoIter = Iter<'g, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for ListReadGuard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A node found by [`LockedList::find`](super::LockedList::find).
///
/// Dereferences to the [`Node`], from which the rest of the chain can be
/// walked with [`Node::next`]. Like [`ListReadGuard`] it pins the read lock,
/// so writers block until it is dropped.
pub struct NodeRef<'a, T> {
    _raw: RwLockReadGuard<'a, RawList<T>>,
    node: NonNull<Node<T>>,
}

impl<'a, T> NodeRef<'a, T> {
    /// # Safety
    ///
    /// `node` must be reachable from the list behind `raw`.
    pub(crate) unsafe fn new(raw: RwLockReadGuard<'a, RawList<T>>, node: NonNull<Node<T>>) -> Self {
        Self { _raw: raw, node }
    }
}

impl<T> Deref for NodeRef<'_, T> {
    type Target = Node<T>;

    fn deref(&self) -> &Self::Target {
        // The read guard keeps every writer out, so the node stays linked.
        unsafe { self.node.as_ref() }
    }
}

impl<T: Debug> Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&**self, f)
    }
}
