//! `bitmanip` — branch-free bit and ASCII utilities for 32-bit integers.
//!
//! This crate is `#![no_std]` and has no dependencies. It provides:
//! - Single-bit operations on `i32`: test, set, clear, toggle (1-indexed
//!   positions), plus in-place variants taking `&mut i32`
//! - Two's-complement tricks: branch-free `abs`, XOR `swap`,
//!   rightmost-set-bit clearing and position
//! - Table-driven parity checking (`has_odd_parity`)
//! - ASCII case conversion via bitmasks (the `ascii` module)
//!
//! Every function is total: there are no error returns and no panic paths.
//! Inputs outside a function's intended domain (bit positions past the word
//! width, non-letter bytes passed to the ASCII helpers) produce documented
//! garbage values rather than failures. The exact edge-case semantics are
//! spelled out on each function.

#![no_std]

mod bits;
pub use bits::{
    abs, is_bit_set, is_odd, is_power_of_two, opposite_signs, rightmost_bit_pos, set_bit,
    set_bit_in_place, swap, toggle_bit, toggle_bit_in_place, unset_bit, unset_bit_in_place,
    unset_rightmost_bit, unset_rightmost_bit_in_place,
};

mod parity;
pub use parity::has_odd_parity;

pub mod ascii;
