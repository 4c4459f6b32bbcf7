//! Access to the host's RAM.
//!
//! The free functions are thin, unchecked pass-throughs to `peek`, `poke`,
//! `memcpy` and `memset` taking absolute addresses. [`IO_RAM`] and
//! [`FREE_RAM`] are bounds-checked handles on the two fixed windows; their
//! offsets are relative to the window base and every access that would leave
//! the window fails with [`OutOfRange`] before reaching the host.

use types::memory::{self as map, Region};
use types::{BitWidth, OutOfRange};

use crate::log::{self, HEX_BYTES_PER_LINE};
use crate::sys;

/// Console color used by [`MemoryWindow::dump`].
pub const DUMP_COLOR: i32 = 13;

pub fn peek(address: i32) -> u8 {
    unsafe { sys::peek(address, BitWidth::Eight.bits()) as u8 }
}

pub fn peek4(address: i32) -> u8 {
    unsafe { sys::peek(address, BitWidth::Four.bits()) as u8 }
}

pub fn peek2(address: i32) -> u8 {
    unsafe { sys::peek(address, BitWidth::Two.bits()) as u8 }
}

pub fn peek1(address: i32) -> u8 {
    unsafe { sys::peek(address, BitWidth::One.bits()) as u8 }
}

pub fn poke(address: i32, value: u8) {
    unsafe { sys::poke(address, value as i8, BitWidth::Eight.bits()) }
}

pub fn poke4(address: i32, value: u8) {
    unsafe { sys::poke(address, value as i8, BitWidth::Four.bits()) }
}

pub fn poke2(address: i32, value: u8) {
    unsafe { sys::poke(address, value as i8, BitWidth::Two.bits()) }
}

pub fn poke1(address: i32, value: u8) {
    unsafe { sys::poke(address, value as i8, BitWidth::One.bits()) }
}

/// Copies `length` bytes from `source` to `destination` inside host RAM.
pub fn memcpy(destination: i32, source: i32, length: i32) {
    unsafe { sys::tic_memcpy(destination, source, length) }
}

/// Sets `length` bytes starting at `address` to `value`.
pub fn memset(address: i32, value: u8, length: i32) {
    unsafe { sys::tic_memset(address, value as i32, length) }
}

/// Bounds-checked handle on one fixed RAM window.
#[derive(Debug)]
pub struct MemoryWindow {
    region: Region,
}

pub static IO_RAM: MemoryWindow = MemoryWindow::new(map::IO_RAM);
pub static FREE_RAM: MemoryWindow = MemoryWindow::new(map::FREE_RAM);

impl MemoryWindow {
    const fn new(region: Region) -> Self {
        Self { region }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn name(&self) -> &'static str {
        self.region.name
    }

    pub fn base(&self) -> u32 {
        self.region.base
    }

    pub fn size(&self) -> u32 {
        self.region.size
    }

    /// Absolute address of a window offset.
    pub fn address(&self, offset: u32) -> Result<u32, OutOfRange> {
        self.region.checked_address(offset, 1)
    }

    pub fn peek(&self, offset: u32) -> Result<u8, OutOfRange> {
        let address = self.region.checked_address(offset, 1)?;
        Ok(peek(address as i32))
    }

    pub fn poke(&self, offset: u32, value: u8) -> Result<(), OutOfRange> {
        let address = self.region.checked_address(offset, 1)?;
        poke(address as i32, value);
        Ok(())
    }

    /// Reads the `index`th `width`-bit unit of the window.
    pub fn peek_bits(&self, index: u32, width: BitWidth) -> Result<u8, OutOfRange> {
        let address = self.region.checked_unit_address(index, width)?;
        let value = unsafe { sys::peek(address as i32, width.bits()) };
        Ok(value as u8 & width.mask())
    }

    /// Writes the `index`th `width`-bit unit; bits of `value` above the width
    /// are ignored.
    pub fn poke_bits(&self, index: u32, width: BitWidth, value: u8) -> Result<(), OutOfRange> {
        let address = self.region.checked_unit_address(index, width)?;
        unsafe { sys::poke(address as i32, (value & width.mask()) as i8, width.bits()) };
        Ok(())
    }

    /// Fills `buf` from the window starting at `offset`.
    pub fn read(&self, offset: u32, buf: &mut [u8]) -> Result<(), OutOfRange> {
        let start = self.span(offset, buf.len())?;
        for (address, byte) in (start..).zip(buf.iter_mut()) {
            *byte = peek(address as i32);
        }
        Ok(())
    }

    pub fn write(&self, offset: u32, bytes: &[u8]) -> Result<(), OutOfRange> {
        let start = self.span(offset, bytes.len())?;
        for (address, byte) in (start..).zip(bytes) {
            poke(address as i32, *byte);
        }
        Ok(())
    }

    pub fn fill(&self, offset: u32, value: u8, len: u32) -> Result<(), OutOfRange> {
        let start = self.region.checked_address(offset, len)?;
        memset(start as i32, value, len as i32);
        Ok(())
    }

    /// Copies `len` bytes from window offset `source` to `destination`.
    /// Both ranges must lie inside the window.
    pub fn copy_within(&self, source: u32, destination: u32, len: u32) -> Result<(), OutOfRange> {
        let from = self.region.checked_address(source, len)?;
        let to = self.region.checked_address(destination, len)?;
        memcpy(to as i32, from as i32, len as i32);
        Ok(())
    }

    /// Hex dump of `len` bytes at `offset` to the console.
    pub fn dump(&self, offset: u32, len: u32) -> Result<(), OutOfRange> {
        self.region.checked_address(offset, len)?;
        let mut row = [0u8; HEX_BYTES_PER_LINE];
        let mut at = offset;
        let end = offset + len;
        while at < end {
            let count = ((end - at) as usize).min(HEX_BYTES_PER_LINE);
            self.read(at, &mut row[..count])?;
            log::trace_hex(self.name(), at, &row[..count], DUMP_COLOR);
            at += count as u32;
        }
        Ok(())
    }

    fn span(&self, offset: u32, len: usize) -> Result<u32, OutOfRange> {
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        self.region.checked_address(offset, len)
    }
}
