//! A thread-safe singly linked list.
//!
//! [`LockedList`] keeps a chain of heap nodes with a cached tail, guarded by a
//! single reader-writer lock. Writers (`insert`, `append`, `delete`,
//! `delete_head`, `delete_tail`, `clear`) hold the lock exclusively; readers
//! (`find`, `for_each`, `render`, `read`) share it.
//!
//! ## Core Components
//!
//! - [`LockedList`]: the list itself.
//! - [`Node`]: one cell of the chain, reachable only through a read guard.
//! - [`ListReadGuard`] and [`NodeRef`]: views that pin the read lock while
//!   node references are alive.
//! - [`ListHandle`]: a shared handle that may be absent; mutating through an
//!   absent handle yields [`ListError::InvalidHandle`].
//!
//! ## Node references
//!
//! Node references can never dangle: they borrow a guard that holds the read
//! lock. The other side of that is that a live guard stalls every writer, and a
//! write issued on the same thread while a guard is alive spins forever.
//! Values copied out of the list (`head_value`, `to_vec`, the results of the
//! `delete_*` calls) are snapshots and may be stale as soon as they return.
//!
//! # Examples
//!
//! ```
//! use locked_list::LockedList;
//!
//! let list = LockedList::new();
//! list.insert(4);
//! list.insert(3);
//! list.insert(2);
//! list.insert(1);
//! assert_eq!(list.render(), "Length: 4, Data: 1 2 3 4");
//!
//! assert!(list.delete(&2));
//! assert_eq!(list.delete_head(), Some(1));
//! assert_eq!(list.delete_tail(), Some(4));
//! assert_eq!(list.to_vec(), vec![3]);
//!
//! {
//!     let view = list.read();
//!     let head = view.head().unwrap();
//!     assert_eq!(*head.value(), 3);
//!     assert!(head.next().is_none());
//! }
//!
//! assert!(list.delete(&3));
//! assert!(list.is_empty());
//! assert_eq!(list.delete_tail(), None);
//! ```

mod error;
mod guard;
mod handle;
mod iter;
mod locked;
mod node;
mod raw;
mod traits;

#[cfg(test)]
mod tests;

pub use error::{ListError, ListResult};
pub use guard::{ListReadGuard, NodeRef};
pub use handle::ListHandle;
pub use iter::Iter;
pub use locked::LockedList;
pub use node::Node;
pub use traits::{ListData, ReadableList};
