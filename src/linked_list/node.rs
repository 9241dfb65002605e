use core::fmt::{self, Debug};
use core::ptr::NonNull;

use alloc::boxed::Box;

/// A single cell of a singly linked list.
///
/// A node owns the node after it: the chain is freed front to back by the
/// list that owns the head, never by the node itself. Nodes are only ever
/// handed out behind a shared reference whose lifetime is tied to a read lock,
/// so their contents cannot change while they are observed.
pub struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    /// Allocates a node on the heap and leaks it into a raw pointer.
    /// Ownership of the allocation passes to whichever link stores the pointer.
    pub(crate) fn alloc(value: T, next: Option<NonNull<Node<T>>>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }

    /// Reclaims a node previously produced by [`Node::alloc`] and returns its
    /// value together with the link it held.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`], must no longer be reachable from
    /// any list, and must not be reclaimed twice.
    pub(crate) unsafe fn reclaim(node: NonNull<Node<T>>) -> (T, Option<NonNull<Node<T>>>) {
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        (node.value, node.next)
    }

    /// The element stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The node after this one, or `None` if this is the tail.
    pub fn next(&self) -> Option<&Node<T>> {
        // A live `&self` means the owning list is borrowed, and with it every
        // node reachable from this one.
        self.next.map(|next| unsafe { &*next.as_ptr() })
    }

    pub(crate) fn next_ptr(&self) -> Option<NonNull<Node<T>>> {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: Option<NonNull<Node<T>>>) {
        self.next = next;
    }

    /// Whether this node is the last one in its list.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

impl<T: Debug> Debug for Node<T> {
    // Only the local cell: walking the chain here would recurse once per node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("is_last", &self.is_last())
            .finish()
    }
}

unsafe impl<T: Send> Send for Node<T> {}
unsafe impl<T: Sync> Sync for Node<T> {}
