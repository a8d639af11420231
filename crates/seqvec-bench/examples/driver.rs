//! Assertion driver for the `DynamicArray` contract.
//!
//! Walks through construction, list operations and dynamic-array
//! operations, asserting after each step. Any failed assertion aborts the
//! run with a panic; progress is reported on stderr.

use seqvec::{seqvec, ArrayError, DynamicArray};

fn main() {
    eprintln!("=== seqvec assertion driver ===\n");

    eprintln!("[1] construction and assignment");
    let v1: DynamicArray<i32> = DynamicArray::new();
    assert_eq!(v1.size(), 0);
    assert_eq!(v1.capacity(), 0);

    let v2: DynamicArray<i32> = DynamicArray::with_len(4);
    assert_eq!(v2.size(), 4);
    assert_eq!(v2.capacity(), 4);

    let mut v3 = DynamicArray::new();
    v3.clone_from(&v2);
    assert_eq!(v3.size(), 4);

    let array_v4 = seqvec![1, 2, 3];
    assert_eq!(array_v4.size(), 3);
    assert_eq!(array_v4.capacity(), 3);

    v3.assign_slice(array_v4.as_slice());
    assert_eq!(v3.size(), 3);
    assert_eq!(v3.capacity(), 6);

    let v = DynamicArray::from_range(&array_v4, array_v4.cbegin(), array_v4.cend());
    assert_eq!(v, [1, 2, 3]);
    assert_eq!(v.capacity(), 3);

    let mut v5 = array_v4.clone();
    assert_eq!(v5.size(), 3);
    assert_eq!(v5.capacity(), 3);
    eprintln!("    ok: {}", v3.render());

    eprintln!("[2] common list operations");
    v5.clear();
    assert_eq!(v5.size(), 0);
    assert_eq!(v5.capacity(), 3);
    assert!(!v2.empty());
    assert!(v1.empty());
    assert!(v5.empty());

    let mut v6 = seqvec![3, 4, 5];
    v6.push_front(2);
    assert_eq!(v6, [2, 3, 4, 5]);

    let mut v7 = seqvec![2, 3, 4];
    v7.push_back(5);
    assert_eq!(v7, [2, 3, 4, 5]);
    assert_eq!(*v7.back(), 5);
    assert_eq!(*v7.front(), 2);

    let mut v8 = seqvec![9, 8, 7, 6];
    v8.pop_back();
    assert_eq!(v8.size(), 3);
    v8.pop_front();
    assert_eq!(v8, [8, 7]);

    let mut v9 = seqvec![1, 2];
    v9.assign(5, 566);
    assert_eq!(v9.size(), 5);
    assert_eq!(v9.capacity(), 5);
    eprintln!("    ok: {}", v6.render());

    eprintln!("[3] dynamic-array operations");
    assert_eq!(v9[0], 566);
    assert_eq!(v9.at(0), Ok(&566));
    assert_eq!(v9.at(5), Err(ArrayError::OutOfRange { pos: 5, len: 5 }));

    let mut w = seqvec![10, 20, 30, 40];
    let pos = w.begin() + 2;
    w.insert(pos, 3);
    assert_eq!(w, [10, 20, 3, 30, 40]);

    let mut e = seqvec![1, 2, 3, 4, 5, 6];
    let first = e.begin();
    e.erase_range(first, first + 4);
    assert_eq!(e, [5, 6]);

    let stale = e.begin();
    e.reserve(100);
    assert!(!e.is_valid(stale));
    eprintln!("    ok: {}", w.render());

    eprintln!("\nall assertions passed");
}
