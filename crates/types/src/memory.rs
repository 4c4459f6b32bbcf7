//! The TIC-80 RAM map as seen from a cartridge.
//!
//! The host's addressable space is 256 KiB starting at address 0, split into
//! two fixed windows:
//! - IO RAM (`0x00000..0x18000`): screen, palette, tiles, sprites, map, input,
//!   sound registers and the rest of the host-managed I/O state.
//! - Free RAM (`0x18000..0x40000`): general purpose. Under the default wasm
//!   linker configuration the cartridge's own data segment and heap live here.
//!
//! Sub-byte granularities address smaller units: a 4-bit address counts
//! nibbles from address 0, so nibble `n` lives in byte `n / 2`.

use core::fmt;

/// Total addressable RAM in bytes.
pub const RAM_SIZE: u32 = 0x40000;

/// A named, fixed window into host memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub base: u32,
    pub size: u32,
}

pub const IO_RAM: Region = Region::new("IO_RAM", 0x00000, 0x18000);
pub const FREE_RAM: Region = Region::new("FREE_RAM", 0x18000, 0x28000);

impl Region {
    pub const fn new(name: &'static str, base: u32, size: u32) -> Self {
        Self { name, base, size }
    }

    /// One past the last byte of the window.
    pub const fn end(&self) -> u32 {
        self.base + self.size
    }

    /// Number of `width`-sized units the window holds.
    pub const fn units(&self, width: BitWidth) -> u32 {
        self.size * width.units_per_byte()
    }

    /// Checks that `len` bytes starting at window offset `offset` stay inside
    /// the window and returns the absolute address of the first byte.
    pub const fn checked_address(&self, offset: u32, len: u32) -> Result<u32, OutOfRange> {
        match offset.checked_add(len) {
            Some(end) if end <= self.size => Ok(self.base + offset),
            _ => Err(OutOfRange {
                region: self.name,
                offset,
                len,
            }),
        }
    }

    /// Same as [`Region::checked_address`] for a single sub-byte unit; the
    /// returned address is in `width` units.
    pub const fn checked_unit_address(
        &self,
        index: u32,
        width: BitWidth,
    ) -> Result<u32, OutOfRange> {
        if index < self.units(width) {
            Ok(self.base * width.units_per_byte() + index)
        } else {
            Err(OutOfRange {
                region: self.name,
                offset: index,
                len: 1,
            })
        }
    }
}

/// Bits per addressed unit for peek/poke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BitWidth {
    One = 1,
    Two = 2,
    Four = 4,
    Eight = 8,
}

impl BitWidth {
    pub const fn bits(self) -> i8 {
        self as i8
    }

    pub const fn units_per_byte(self) -> u32 {
        8 / self as u32
    }

    pub const fn mask(self) -> u8 {
        match self {
            BitWidth::Eight => 0xff,
            _ => (1u8 << self as u8) - 1,
        }
    }
}

/// A window access that would leave the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    pub region: &'static str,
    pub offset: u32,
    pub len: u32,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: offset 0x{:05x} (+{}) is outside the window",
            self.region, self.offset, self.len
        )
    }
}

/// Well-known areas inside IO RAM.
pub mod layout {
    use super::Region;

    pub const SCREEN: Region = Region::new("SCREEN", 0x00000, 0x03fc0);
    pub const PALETTE: Region = Region::new("PALETTE", 0x03fc0, 48);
    pub const PALETTE_MAP: Region = Region::new("PALETTE_MAP", 0x03ff0, 8);
    pub const BORDER_COLOR: Region = Region::new("BORDER_COLOR", 0x03ff8, 1);
    pub const SCREEN_OFFSET: Region = Region::new("SCREEN_OFFSET", 0x03ff9, 2);
    pub const MOUSE_CURSOR: Region = Region::new("MOUSE_CURSOR", 0x03ffb, 1);
    pub const BLIT_SEGMENT: Region = Region::new("BLIT_SEGMENT", 0x03ffc, 1);
    pub const TILES: Region = Region::new("TILES", 0x04000, 0x2000);
    pub const SPRITES: Region = Region::new("SPRITES", 0x06000, 0x2000);
    pub const MAP: Region = Region::new("MAP", 0x08000, 0x7f80);
    pub const GAMEPADS: Region = Region::new("GAMEPADS", 0x0ff80, 4);
    pub const MOUSE: Region = Region::new("MOUSE", 0x0ff84, 4);
    pub const KEYBOARD: Region = Region::new("KEYBOARD", 0x0ff88, 4);
    pub const PERSISTENT: Region = Region::new("PERSISTENT", 0x14004, 0x400);
    pub const SPRITE_FLAGS: Region = Region::new("SPRITE_FLAGS", 0x14404, 0x200);
    pub const SYSTEM_FONT: Region = Region::new("SYSTEM_FONT", 0x14604, 0x800);

    /// Screen size in pixels.
    pub const SCREEN_WIDTH: i32 = 240;
    pub const SCREEN_HEIGHT: i32 = 136;

    /// Map size in cells.
    pub const MAP_WIDTH: i32 = 240;
    pub const MAP_HEIGHT: i32 = 136;

    /// Sprite sheet entries (256 background tiles + 256 foreground sprites).
    pub const SPRITE_COUNT: i32 = 512;
    pub const FLAGS_PER_SPRITE: i32 = 8;

    /// Persistent memory slots (32-bit each).
    pub const PMEM_SLOTS: i32 = 256;
}
