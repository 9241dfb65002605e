use core::fmt::Debug;

use super::LockedList;

mod handle;

/// Checks length, head-to-tail order and that the last node walked is the
/// cached tail.
pub(super) fn assert_list<T: PartialEq + Debug>(list: &LockedList<T>, expected: &[T]) {
    list.assert_invariants();
    assert_eq!(list.len(), expected.len());

    let view = list.read();
    let mut last = None;
    let mut current = view.head();
    let mut index = 0;
    while let Some(node) = current {
        assert!(index < expected.len(), "list is longer than expected");
        assert_eq!(node.value(), &expected[index], "value {} differs", index);
        last = Some(node);
        current = node.next();
        index += 1;
    }
    assert_eq!(index, expected.len(), "list is shorter than expected");

    match (last, view.tail()) {
        (Some(last), Some(tail)) => assert!(core::ptr::eq(last, tail), "tail is not the last node"),
        (None, None) => {}
        (last, tail) => panic!("head/tail mismatch: last {:?}, tail {:?}", last, tail),
    }
}
