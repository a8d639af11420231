//! Assertion driver covering the public contract section by section:
//! construction and assignment, common list operations, and the
//! operations specific to a dynamic array.

use seqvec::{seqvec, ArrayError, DynamicArray};

// ── Construction, destruction, assignment ─────────────────────────

#[test]
fn default_construction() {
    let v1: DynamicArray<i32> = DynamicArray::new();
    assert_eq!(v1.size(), 0);
    assert_eq!(v1.capacity(), 0);
}

#[test]
fn sized_construction() {
    let v2: DynamicArray<i32> = DynamicArray::with_len(4);
    assert_eq!(v2.size(), 4);
    assert_eq!(v2.capacity(), 4);
    assert!(v2.iter().all(|&x| x == 0));

    let reserved: DynamicArray<i32> = DynamicArray::with_capacity(4);
    assert_eq!(reserved.size(), 0);
    assert_eq!(reserved.capacity(), 4);
}

#[test]
fn copy_assignment() {
    let v2: DynamicArray<i32> = DynamicArray::with_len(4);
    let mut v3 = DynamicArray::new();
    v3.clone_from(&v2);
    assert_eq!(v3.size(), 4);
    assert_eq!(v3, v2);
}

#[test]
fn initializer_list_construction_and_assignment() {
    let array_v4 = seqvec![1, 2, 3];
    assert_eq!(array_v4.size(), 3);
    assert_eq!(array_v4.capacity(), 3);

    let mut v3 = seqvec![9, 9, 9, 9];
    v3.assign_slice(&[1, 2, 3]);
    assert_eq!(v3.size(), 3);
    assert_eq!(v3.capacity(), 6);
    assert_eq!(v3, array_v4);
}

#[test]
fn range_construction() {
    let array_v4 = seqvec![1, 2, 3];
    let v = DynamicArray::from_range(&array_v4, array_v4.cbegin(), array_v4.cend());
    assert_eq!(v[0], 1);
    assert_eq!(v[1], 2);
    assert_eq!(v[2], 3);
    assert_eq!(v.size(), 3);
    assert_eq!(v.capacity(), 3);
}

#[test]
fn copy_construction() {
    let array_v4 = seqvec![1, 2, 3];
    let v5 = array_v4.clone();
    assert_eq!(v5.size(), 3);
    assert_eq!(v5.capacity(), array_v4.capacity());
}

// ── Common list operations ────────────────────────────────────────

#[test]
fn clear_and_empty() {
    let mut v5 = seqvec![1, 2, 3];
    let v1: DynamicArray<i32> = DynamicArray::new();
    let v2: DynamicArray<i32> = DynamicArray::with_len(4);

    v5.clear();
    assert_eq!(v5.size(), 0);
    assert_eq!(v5.capacity(), 3);
    assert!(!v2.empty());
    assert!(v1.empty());
    assert!(v5.empty());
}

#[test]
fn push_front() {
    let mut v6 = seqvec![3, 4, 5];
    v6.push_front(2);
    assert_eq!(v6[0], 2);
    assert_eq!(v6[1], 3);
    assert_eq!(v6[2], 4);
    assert_eq!(v6[3], 5);
}

#[test]
fn push_front_onto_empty() {
    let mut v = DynamicArray::new();
    v.push_front(5);
    v.push_front(4);
    v.push_front(3);
    assert_eq!(v, [3, 4, 5]);
}

#[test]
fn push_back() {
    let mut v7 = seqvec![2, 3, 4];
    v7.push_back(5);
    assert_eq!(v7, [2, 3, 4, 5]);
    assert_eq!(v7.size(), 4);
    assert_eq!(*v7.back(), 5);
    assert_eq!(*v7.front(), 2);
}

#[test]
fn pop_back_then_pop_front() {
    let mut v8 = seqvec![9, 8, 7, 6];
    v8.pop_back();
    assert_eq!(v8.size(), 3);
    v8.pop_front();
    assert_eq!(v8.size(), 2);
    assert_eq!(v8[0], 8);
    assert_eq!(v8[1], 7);
}

#[test]
fn back_of_empty_is_absent() {
    let v1: DynamicArray<i32> = DynamicArray::new();
    assert_eq!(v1.last(), None);
}

#[test]
fn assign_count_copies() {
    let mut v9 = seqvec![1, 2];
    v9.assign(5, 566);
    assert_eq!(v9.size(), 5);
    assert_eq!(v9.capacity(), 5);
    assert_eq!(v9[0], 566);
}

// ── Dynamic-array operations ──────────────────────────────────────

#[test]
fn index_at_and_capacity() {
    let mut v9 = DynamicArray::new();
    v9.assign(5, 566);
    assert_eq!(v9[0], 566);
    assert_eq!(v9.at(0), Ok(&566));
    assert_eq!(v9.at(5), Err(ArrayError::OutOfRange { pos: 5, len: 5 }));
    assert_eq!(v9.capacity(), 5);
}

#[test]
fn at_size_leaves_state_unchanged() {
    let v = seqvec![4, 5, 6];
    let before = v.clone();
    let err = v.at(v.size()).unwrap_err();
    assert_eq!(err.to_string(), "position 3 out of range for length 3");
    assert_eq!(v, before);
    assert_eq!(v.capacity(), before.capacity());
}

#[test]
fn insert_before_index_two() {
    let mut v = seqvec![10, 20, 30, 40];
    let pos = v.begin() + 2;
    v.insert(pos, 3);
    assert_eq!(v, [10, 20, 3, 30, 40]);
    assert_eq!(v.size(), 5);
}

#[test]
fn erase_leading_four() {
    let mut v = seqvec![1, 2, 3, 4, 5, 6];
    let first = v.begin();
    v.erase_range(first, first + 4);
    assert_eq!(v, [5, 6]);
    assert_eq!(v.size(), 2);
}

#[test]
fn clear_keeps_capacity() {
    let mut v = seqvec![1, 2, 3];
    v.reserve(10);
    let cap = v.capacity();
    v.clear();
    assert!(v.empty());
    assert_eq!(v.capacity(), cap);
}

#[test]
fn insert_list_and_range() {
    let mut v = seqvec![1, 6];
    v.insert_slice(v.begin() + 1, &[2, 3]);
    let tail = seqvec![4, 5];
    v.insert_range(v.end() - 1, &tail, tail.cbegin(), tail.cend());
    assert_eq!(v, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn rendering_shows_storage() {
    let mut v = seqvec![1, 2];
    v.reserve(4);
    assert_eq!(v.render().to_string(), "[1, 2 | _, _]");
}
