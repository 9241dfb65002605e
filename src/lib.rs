#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::{ListError, ListHandle, ListResult, LockedList};
