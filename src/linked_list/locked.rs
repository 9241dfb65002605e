use core::fmt::{self, Debug, Display};
use core::ptr::NonNull;
use core::sync::atomic::{AtomicUsize, Ordering};

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use crossbeam_utils::CachePadded;
use log::trace;
use spin::RwLock;

use super::guard::{ListReadGuard, NodeRef};
use super::raw::RawList;
use super::traits::{ListData, ReadableList};

/// A singly linked list guarded by one reader-writer lock.
///
/// Mutations take the write lock for their whole duration; lookups, visits
/// and rendering take the read lock and may overlap with each other. The
/// element count is mirrored into an atomic so [`len`](Self::len) never
/// touches the lock.
///
/// The lock is a spin lock without writer preference: a steady stream of
/// readers can delay a writer indefinitely.
pub struct LockedList<T> {
    inner: RwLock<RawList<T>>,
    len: CachePadded<AtomicUsize>,
}

impl<T> LockedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        Self {
            inner: RwLock::new(RawList::new()),
            len: CachePadded::new(AtomicUsize::new(0)),
        }
    }

    /// Runs `op` under the write lock and publishes the resulting length
    /// before the lock is released.
    fn write<R>(&self, op: impl FnOnce(&mut RawList<T>) -> R) -> R {
        let mut raw = self.inner.write();
        let was_empty = raw.is_empty();
        let out = op(&mut *raw);
        let len = raw.len();
        self.len.store(len, Ordering::Release);
        if was_empty != raw.is_empty() {
            trace!(
                "list at {:p} became {}",
                self,
                if was_empty { "non-empty" } else { "empty" }
            );
        }
        out
    }

    /// Adds `value` at the front of the list. O(1).
    pub fn insert(&self, value: T) {
        self.write(|raw| raw.push_front(value));
    }

    /// Adds `value` at the back of the list. O(1).
    pub fn append(&self, value: T) {
        self.write(|raw| raw.push_back(value));
    }

    /// Removes the head and returns its value, or `None` if the list is empty.
    pub fn delete_head(&self) -> Option<T> {
        self.write(RawList::pop_front)
    }

    /// Removes the tail and returns its value, or `None` if the list is empty.
    ///
    /// O(n): the node in front of the tail is found by walking from the head.
    pub fn delete_tail(&self) -> Option<T> {
        self.write(RawList::pop_back)
    }

    /// Removes every element.
    pub fn clear(&self) {
        // Detach under the lock, free after releasing it.
        let detached = self.write(core::mem::take);
        drop(detached);
    }

    /// Get the number of elements without taking the lock.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Takes the read lock and returns a view of the whole list.
    pub fn read(&self) -> ListReadGuard<'_, T> {
        ListReadGuard::new(self.inner.read())
    }

    /// Calls `visit` once per element, head to tail, under the read lock.
    ///
    /// `visit` must not mutate this list; see [`ReadableList::for_each`].
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let raw = self.inner.read();
        for value in raw.iter() {
            visit(value);
        }
    }

    /// A clone of the head value.
    pub fn head_value(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().head().map(|node| node.value().clone())
    }

    /// A clone of the tail value.
    pub fn tail_value(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().tail().map(|node| node.value().clone())
    }

    /// Clones every element into a vector, head to tail.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let raw = self.inner.read();
        let mut out = Vec::with_capacity(raw.len());
        out.extend(raw.iter().cloned());
        out
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let raw = self.inner.read();
        raw.assert_invariants();
        assert_eq!(self.len(), raw.len(), "length mirror is out of date");
    }
}

impl<T: ListData> LockedList<T> {
    /// Finds the first node equal to `value`.
    ///
    /// The returned [`NodeRef`] holds the read lock until it is dropped, so
    /// writers on this list wait for it. Copy what you need out of it and let
    /// it go.
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        let raw = self.inner.read();
        let found = NonNull::from(raw.find(value)?);
        // `found` is reachable from the list `raw` guards.
        Some(unsafe { NodeRef::new(raw, found) })
    }

    pub fn contains(&self, value: &T) -> bool {
        self.inner.read().find(value).is_some()
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` and leaves the list untouched if there is none.
    pub fn delete(&self, value: &T) -> bool {
        self.write(|raw| raw.remove(value)).is_some()
    }

    /// Renders the list as `Length: <n>, Data: <v1> <v2> ... <vn>`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: ListData> ReadableList<T> for LockedList<T> {
    fn len(&self) -> usize {
        LockedList::len(self)
    }

    fn contains(&self, value: &T) -> bool {
        LockedList::contains(self, value)
    }

    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        LockedList::for_each(self, visit)
    }

    fn render(&self) -> String {
        LockedList::render(self)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        LockedList::to_vec(self)
    }
}

impl<T> Default for LockedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for LockedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.inner.read();
        write!(f, "Length: {}, Data:", raw.len())?;
        for value in raw.iter() {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for LockedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.inner.read();
        f.debug_list().entries(raw.iter()).finish()
    }
}

/// Collects `iter` into a detached chain. The caller's iterator runs without
/// the lock, and a panic in it leaves the list untouched.
fn stage<T>(iter: impl IntoIterator<Item = T>) -> RawList<T> {
    let mut staged = RawList::new();
    iter.into_iter().for_each(|value| staged.push_back(value));
    staged
}

impl<T> FromIterator<T> for LockedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let staged = stage(iter);
        Self {
            len: CachePadded::new(AtomicUsize::new(staged.len())),
            inner: RwLock::new(staged),
        }
    }
}

impl<T> Extend<T> for LockedList<T> {
    /// Appends every item; the batch is linked in under one write lock.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut staged = stage(iter);
        self.write(|raw| raw.splice_back(&mut staged));
    }
}
