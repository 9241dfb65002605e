use core::fmt::{self, Debug, Display};

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use log::debug;

use super::error::{ListError, ListResult};
use super::guard::NodeRef;
use super::locked::LockedList;
use super::traits::{ListData, ReadableList};

/// A shared, possibly absent reference to a [`LockedList`].
///
/// Mutations through an absent handle fail with [`ListError::InvalidHandle`].
/// Reads through an absent handle behave as if the list were empty.
pub struct ListHandle<T> {
    list: Option<Arc<LockedList<T>>>,
}

impl<T> ListHandle<T> {
    /// Creates a handle to a new, empty list.
    pub fn new() -> Self {
        Self {
            list: Some(Arc::new(LockedList::new())),
        }
    }

    /// Creates a handle that points at no list.
    pub const fn absent() -> Self {
        Self { list: None }
    }

    pub fn is_absent(&self) -> bool {
        self.list.is_none()
    }

    /// The list behind this handle.
    pub fn get(&self) -> ListResult<&LockedList<T>> {
        self.list.as_deref().ok_or_else(|| {
            debug!("access through an absent list handle");
            ListError::InvalidHandle
        })
    }

    /// Detaches the handle from its list, leaving it absent.
    pub fn take(&mut self) -> Option<Arc<LockedList<T>>> {
        self.list.take()
    }

    pub fn insert(&self, value: T) -> ListResult<()> {
        self.get()?.insert(value);
        Ok(())
    }

    pub fn append(&self, value: T) -> ListResult<()> {
        self.get()?.append(value);
        Ok(())
    }

    pub fn delete_head(&self) -> ListResult<Option<T>> {
        Ok(self.get()?.delete_head())
    }

    pub fn delete_tail(&self) -> ListResult<Option<T>> {
        Ok(self.get()?.delete_tail())
    }

    pub fn clear(&self) -> ListResult<()> {
        self.get()?.clear();
        Ok(())
    }

    /// Get the number of elements; zero for an absent handle.
    pub fn len(&self) -> usize {
        self.list.as_ref().map_or(0, |list| list.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        if let Some(list) = &self.list {
            list.for_each(visit);
        }
    }
}

impl<T: ListData> ListHandle<T> {
    pub fn delete(&self, value: &T) -> ListResult<bool> {
        Ok(self.get()?.delete(value))
    }

    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.list.as_ref()?.find(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.list.as_ref().is_some_and(|list| list.contains(value))
    }

    /// Renders the list; an absent handle renders as an empty list.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: ListData> ReadableList<T> for ListHandle<T> {
    fn len(&self) -> usize {
        ListHandle::len(self)
    }

    fn contains(&self, value: &T) -> bool {
        ListHandle::contains(self, value)
    }

    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        ListHandle::for_each(self, visit)
    }

    fn render(&self) -> String {
        ListHandle::render(self)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.as_ref().map_or_else(Vec::new, |list| list.to_vec())
    }
}

impl<T> Clone for ListHandle<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<T> Default for ListHandle<T> {
    /// An absent handle.
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Arc<LockedList<T>>> for ListHandle<T> {
    fn from(list: Arc<LockedList<T>>) -> Self {
        Self { list: Some(list) }
    }
}

impl<T> From<LockedList<T>> for ListHandle<T> {
    fn from(list: LockedList<T>) -> Self {
        Self::from(Arc::new(list))
    }
}

impl<T> From<Option<Arc<LockedList<T>>>> for ListHandle<T> {
    fn from(list: Option<Arc<LockedList<T>>>) -> Self {
        Self { list }
    }
}

impl<T: Display> Display for ListHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.list {
            Some(list) => Display::fmt(list, f),
            None => f.write_str("Length: 0, Data:"),
        }
    }
}

impl<T: Debug> Debug for ListHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.list {
            Some(list) => f.debug_tuple("ListHandle").field(list).finish(),
            None => f.write_str("ListHandle(<absent>)"),
        }
    }
}
