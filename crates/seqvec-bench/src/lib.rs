//! Workload profiles for benchmarking seqvec.
//!
//! - [`mixed_workload`]: deterministic sequence of end and positional
//!   operations derived from a seed.
//! - [`apply`]: replay a workload against a [`DynamicArray`].
//! - [`apply_reference`]: replay the same workload against a `Vec`, used as
//!   the model in tests and as the baseline in benches.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use seqvec::DynamicArray;

/// One step of a workload. Positions are taken modulo the current length
/// at replay time, so every workload is valid for any starting array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    PushBack(u64),
    PushFront(u64),
    PopBack,
    PopFront,
    Insert { at: usize, value: u64 },
    Erase { at: usize },
}

/// Build a deterministic workload of `n` operations.
///
/// Roughly two thirds of the operations add elements, so the array grows
/// over the run and exercises reallocation.
pub fn mixed_workload(n: usize, seed: u64) -> Vec<Op> {
    let mut ops = Vec::with_capacity(n);
    let mut state = seed;
    for i in 0..n {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add((i as u64).wrapping_mul(1442695040888963407) | 1);
        let roll = (state >> 33) as usize;
        let value = state >> 16;
        let op = match roll % 9 {
            0..=2 => Op::PushBack(value),
            3 => Op::PushFront(value),
            4 | 5 => Op::Insert { at: roll, value },
            6 => Op::PopBack,
            7 => Op::PopFront,
            _ => Op::Erase { at: roll },
        };
        ops.push(op);
    }
    ops
}

/// Replay `ops` against `array`.
pub fn apply(array: &mut DynamicArray<u64>, ops: &[Op]) {
    for &op in ops {
        match op {
            Op::PushBack(v) => array.push_back(v),
            Op::PushFront(v) => array.push_front(v),
            Op::PopBack => {
                array.pop_back();
            }
            Op::PopFront => {
                array.pop_front();
            }
            Op::Insert { at, value } => {
                let index = at % (array.len() + 1);
                array.insert(array.cursor_at(index), value);
            }
            Op::Erase { at } => {
                if !array.is_empty() {
                    let index = at % array.len();
                    array.erase(array.cursor_at(index));
                }
            }
        }
    }
}

/// Replay `ops` against a `Vec`, with the same position rules as [`apply`].
pub fn apply_reference(model: &mut Vec<u64>, ops: &[Op]) {
    for &op in ops {
        match op {
            Op::PushBack(v) => model.push(v),
            Op::PushFront(v) => model.insert(0, v),
            Op::PopBack => {
                model.pop();
            }
            Op::PopFront => {
                if !model.is_empty() {
                    model.remove(0);
                }
            }
            Op::Insert { at, value } => {
                let index = at % (model.len() + 1);
                model.insert(index, value);
            }
            Op::Erase { at } => {
                if !model.is_empty() {
                    let index = at % model.len();
                    model.remove(index);
                }
            }
        }
    }
}
