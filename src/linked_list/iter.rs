use core::iter::FusedIterator;

use super::node::Node;

/// A head-to-tail iterator over the values of a locked list.
///
/// Obtained from [`ListReadGuard::iter`](super::ListReadGuard::iter); it
/// borrows the guard, so the read lock outlives the iteration.
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
        }
    }
}
