extern crate std;

use alloc::{format, string::ToString, sync::Arc};
use std::thread;
use std::vec;
use std::vec::Vec;

use crate::linked_list::{ListError, ListHandle, LockedList, ReadableList};

#[test]
fn test_absent_handle_rejects_mutations() {
    let handle = ListHandle::<i32>::absent();
    assert!(handle.is_absent());

    assert_eq!(handle.insert(1), Err(ListError::InvalidHandle));
    assert_eq!(handle.append(1), Err(ListError::InvalidHandle));
    assert_eq!(handle.delete(&1), Err(ListError::InvalidHandle));
    assert_eq!(handle.delete_head(), Err(ListError::InvalidHandle));
    assert_eq!(handle.delete_tail(), Err(ListError::InvalidHandle));
    assert_eq!(handle.clear(), Err(ListError::InvalidHandle));
    assert!(handle.get().is_err());
}

#[test]
fn test_absent_handle_reads_as_empty() {
    let handle = ListHandle::<i32>::default();
    assert_eq!(handle.len(), 0);
    assert!(handle.is_empty());
    assert!(handle.find(&1).is_none());
    assert!(!handle.contains(&1));
    assert_eq!(handle.render(), "Length: 0, Data:");
    assert_eq!(ReadableList::to_vec(&handle), Vec::<i32>::new());

    let mut calls = 0;
    handle.for_each(|_| calls += 1);
    assert_eq!(calls, 0);

    assert_eq!(format!("{:?}", handle), "ListHandle(<absent>)");
}

#[test]
fn test_not_found_is_not_an_error() {
    let handle = ListHandle::<i32>::new();
    assert_eq!(handle.delete(&1), Ok(false));
    assert_eq!(handle.delete_head(), Ok(None));
    assert_eq!(handle.delete_tail(), Ok(None));
}

#[test]
fn test_present_handle_operations() {
    let handle = ListHandle::new();
    handle.insert(2).unwrap();
    handle.insert(1).unwrap();
    handle.append(3).unwrap();
    assert_eq!(handle.len(), 3);
    assert_eq!(handle.render(), "Length: 3, Data: 1 2 3");
    assert_eq!(handle.find(&2).map(|n| *n.value()), Some(2));

    assert_eq!(handle.delete(&2), Ok(true));
    assert_eq!(handle.delete_head(), Ok(Some(1)));
    assert_eq!(handle.delete_tail(), Ok(Some(3)));
    assert!(handle.is_empty());
    handle.get().unwrap().assert_invariants();
}

#[test]
fn test_clones_share_one_list() {
    let handle = ListHandle::new();
    let other = handle.clone();
    other.append("shared".to_string()).unwrap();
    assert!(handle.contains(&"shared".to_string()));
    assert_eq!(handle.len(), 1);
}

#[test]
fn test_take_leaves_handle_absent() {
    let mut handle = ListHandle::new();
    handle.append(5).unwrap();

    let list = handle.take().unwrap();
    assert!(handle.is_absent());
    assert_eq!(handle.append(6), Err(ListError::InvalidHandle));
    assert_eq!(list.to_vec(), vec![5]);

    let restored = ListHandle::from(list);
    assert_eq!(restored.to_vec(), vec![5]);
}

#[test]
fn test_from_conversions() {
    let from_list: ListHandle<i32> = ListHandle::from((1..=2).collect::<LockedList<i32>>());
    assert_eq!(from_list.render(), "Length: 2, Data: 1 2");

    let from_none: ListHandle<i32> = ListHandle::from(None::<Arc<LockedList<i32>>>);
    assert!(from_none.is_absent());
}

#[test]
fn test_error_message() {
    assert_eq!(
        ListError::InvalidHandle.to_string(),
        "operation on an absent list handle"
    );
}

#[test]
fn test_handle_across_threads() {
    let handle = ListHandle::new();
    let workers: Vec<_> = (0..4)
        .map(|i| {
            let handle = handle.clone();
            thread::spawn(move || {
                for j in 0..50 {
                    handle.append(i * 100 + j).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }
    assert_eq!(handle.len(), 200);
    handle.get().unwrap().assert_invariants();
}
