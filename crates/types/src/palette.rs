use core::fmt;
use core::ops::Deref;

use crate::wrap;

/// Number of entries in the TIC-80 palette.
pub const PALETTE_SIZE: usize = 16;

/// Reduces a caller color into a palette index (`0..16`).
#[inline]
pub const fn color_index(color: i32) -> i8 {
    wrap(color, PALETTE_SIZE as i32) as i8
}

/// A subset of the 16-color palette, one bit per color.
///
/// Bit `i` is set when color `i` is a member. Every color argument is reduced
/// modulo 16 first, so no operation can fail.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PaletteSet(u16);

impl PaletteSet {
    pub const EMPTY: Self = Self(0);

    pub const fn new() -> Self {
        Self::EMPTY
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn contains(&self, color: i32) -> bool {
        self.0 & Self::bit(color) != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn add_color(&mut self, color: i32) {
        self.0 |= Self::bit(color);
    }

    pub fn remove_color(&mut self, color: i32) {
        self.0 &= !Self::bit(color);
    }

    /// Member colors in ascending order, or `None` when the set is empty.
    pub fn colors(&self) -> Option<ColorList> {
        if self.is_empty() {
            return None;
        }

        let mut list = ColorList {
            buf: [0; PALETTE_SIZE],
            len: 0,
        };
        for color in 0..PALETTE_SIZE {
            if self.0 & (1 << color) != 0 {
                list.buf[list.len] = color as u8;
                list.len += 1;
            }
        }
        Some(list)
    }

    const fn bit(color: i32) -> u16 {
        1 << (color_index(color) as u32)
    }
}

impl fmt::Debug for PaletteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.colors() {
            Some(colors) => f.debug_set().entries(colors.iter()).finish(),
            None => f.write_str("{}"),
        }
    }
}

/// Fixed-capacity list of palette indices produced by [`PaletteSet::colors`].
///
/// Lives on the stack so building a transparency filter never allocates.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ColorList {
    buf: [u8; PALETTE_SIZE],
    len: usize,
}

impl ColorList {
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl Deref for ColorList {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for ColorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
