use core::ptr::NonNull;

use super::iter::Iter;
use super::node::Node;

/// The unsynchronized chain behind [`LockedList`](super::LockedList).
///
/// `head` owns the whole chain transitively. `tail` is a non-owning cache of
/// the last node so that appends stay O(1). `len` is the exact number of
/// nodes reachable from `head`.
pub(crate) struct RawList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
}

impl<T> RawList<T> {
    pub(crate) const fn new() -> Self {
        RawList {
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn head(&self) -> Option<&Node<T>> {
        self.head.map(|head| unsafe { &*head.as_ptr() })
    }

    pub(crate) fn tail(&self) -> Option<&Node<T>> {
        self.tail.map(|tail| unsafe { &*tail.as_ptr() })
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head(), self.len)
    }

    /// Links a new node in front of the current head.
    pub(crate) fn push_front(&mut self, value: T) {
        let node = Node::alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Links a new node after the current tail.
    pub(crate) fn push_back(&mut self, value: T) {
        let node = Node::alloc(value, None);
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().set_next(Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Unlinks the head and hands back its value.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(unsafe { self.unlink(None, head) })
    }

    /// Unlinks the tail and hands back its value.
    ///
    /// There is no back-link, so the tail's parent is found by walking from
    /// the head.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        let parent = self.parent_of(tail);
        Some(unsafe { self.unlink(parent, tail) })
    }

    /// Unlinks the first node whose value equals `value`.
    pub(crate) fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let (parent, found) = self.find_with_parent(value)?;
        Some(unsafe { self.unlink(parent, found) })
    }

    pub(crate) fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        self.find_with_parent(value)
            .map(|(_, found)| unsafe { &*found.as_ptr() })
    }

    /// Moves every node of `other` behind the current tail, leaving `other`
    /// empty. O(1).
    pub(crate) fn splice_back(&mut self, other: &mut RawList<T>) {
        let Some(other_head) = other.head.take() else {
            return;
        };
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().set_next(Some(other_head)) },
            None => self.head = Some(other_head),
        }
        self.tail = other.tail.take();
        self.len += core::mem::take(&mut other.len);
    }

    /// Drops every node, front to back.
    pub(crate) fn clear(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        self.len = 0;
        while let Some(node) = current {
            // Every node reachable from the old head is reclaimed exactly once.
            let (_, next) = unsafe { Node::reclaim(node) };
            current = next;
        }
    }

    /// Returns the first node equal to `value` and the node in front of it.
    fn find_with_parent(
        &self,
        value: &T,
    ) -> Option<(Option<NonNull<Node<T>>>, NonNull<Node<T>>)>
    where
        T: PartialEq,
    {
        let mut parent = None;
        let mut current = self.head;
        while let Some(node) = current {
            let node_ref = unsafe { node.as_ref() };
            if node_ref.value() == value {
                return Some((parent, node));
            }
            parent = Some(node);
            current = node_ref.next_ptr();
        }
        None
    }

    fn parent_of(&self, target: NonNull<Node<T>>) -> Option<NonNull<Node<T>>> {
        let mut parent = None;
        let mut current = self.head;
        while let Some(node) = current {
            if node == target {
                return parent;
            }
            parent = Some(node);
            current = unsafe { node.as_ref().next_ptr() };
        }
        None
    }

    /// Detaches `node` from the chain and reclaims it.
    ///
    /// # Safety
    ///
    /// `node` must be linked into this list and `parent` must be the node
    /// directly in front of it, or `None` if `node` is the head.
    unsafe fn unlink(&mut self, parent: Option<NonNull<Node<T>>>, node: NonNull<Node<T>>) -> T {
        let (value, next) = unsafe { Node::reclaim(node) };
        match parent {
            Some(mut parent) => unsafe { parent.as_mut().set_next(next) },
            None => self.head = next,
        }
        if self.tail == Some(node) {
            self.tail = parent;
        }
        self.len -= 1;
        value
    }

    /// Walks the chain and panics if any structural invariant is broken.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.head.is_none(), self.len == 0, "head nullity disagrees with len");
        assert_eq!(self.tail.is_none(), self.len == 0, "tail nullity disagrees with len");

        let mut steps = 0;
        let mut last = None;
        let mut current = self.head;
        while let Some(node) = current {
            steps += 1;
            assert!(steps <= self.len, "chain is longer than len or cyclic");
            last = Some(node);
            current = unsafe { node.as_ref().next_ptr() };
        }
        assert_eq!(steps, self.len, "chain is shorter than len");
        assert_eq!(last, self.tail, "last reachable node is not the tail");
    }
}

impl<T> Default for RawList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for RawList<T> {}
unsafe impl<T: Sync> Sync for RawList<T> {}
