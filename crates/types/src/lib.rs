#![no_std]

//! Plain data shared by the TIC-80 binding: the palette set, the per-call
//! option records, the RAM map and the input vocabulary. Nothing in here talks
//! to the host, so everything is testable on any target.

pub mod palette;
pub use palette::{ColorList, PaletteSet, color_index};

pub mod memory;
pub use memory::{BitWidth, OutOfRange, Region, FREE_RAM, IO_RAM};

pub mod input;
pub use input::{Button, Gamepad, Key, MouseState, Player};

pub mod sync;
pub use sync::SyncMask;

pub mod options;
pub use options::*;

/// Reduces `value` into `0..modulus` using the Euclidean remainder, so
/// negative inputs land at the top of the range instead of going negative.
#[inline]
pub const fn wrap(value: i32, modulus: i32) -> i32 {
    value.rem_euclid(modulus)
}
