//! Console logging through the host's `trace` primitive.
//!
//! `trace!` formats with `core::fmt` straight into a fixed stack buffer, so
//! logging never allocates and is usable from the panic handler.

use core::fmt;

use types::color_index;

use crate::sys;
use crate::text::encode_char;

/// Bytes available for one console line, terminator included.
pub const LINE_CAPACITY: usize = 256;

/// Color used when a `trace!` call names none.
pub const DEFAULT_COLOR: i32 = 15;

pub const HEX_BYTES_PER_LINE: usize = 16;

/// One console line, already encoded for the host.
///
/// Text past the capacity is dropped a whole character at a time, and the
/// byte after the content is always zero.
pub struct ConsoleLine {
    buf: [u8; LINE_CAPACITY],
    len: usize,
}

impl ConsoleLine {
    pub const fn new() -> Self {
        Self {
            buf: [0; LINE_CAPACITY],
            len: 0,
        }
    }

    /// Encoded content without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn is_full(&self) -> bool {
        self.len == LINE_CAPACITY - 1
    }

    /// Zero-terminated line for host calls that take text.
    pub fn as_ptr(&self) -> *const u8 {
        self.buf.as_ptr()
    }

    pub fn send(&self, color: i8) {
        unsafe { sys::trace(self.as_ptr(), color) }
    }
}

impl Default for ConsoleLine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for ConsoleLine {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.chars().filter_map(encode_char) {
            if self.is_full() {
                break;
            }
            self.buf[self.len] = byte;
            self.len += 1;
        }
        Ok(())
    }
}

/// Formats `args` and writes them to the console in `color` (mod 16).
pub fn trace_args(args: fmt::Arguments<'_>, color: i32) {
    let mut line = ConsoleLine::new();
    let _ = fmt::Write::write_fmt(&mut line, args);
    line.send(color_index(color));
}

/// Writes `bytes` as hex, 16 per line, each line prefixed with `label` and
/// the offset of its first byte counted from `offset`.
pub fn trace_hex(label: &str, offset: u32, bytes: &[u8], color: i32) {
    let mut encoded = [0u8; HEX_BYTES_PER_LINE * 2];
    for (row, chunk) in bytes.chunks(HEX_BYTES_PER_LINE).enumerate() {
        let digits = &mut encoded[..chunk.len() * 2];
        if hex::encode_to_slice(chunk, digits).is_err() {
            continue;
        }
        let digits = core::str::from_utf8(digits).unwrap_or("");
        let at = offset.wrapping_add((row * HEX_BYTES_PER_LINE) as u32);
        trace_args(format_args!("{label}+{at:05x}: {digits}"), color);
    }
}

/// Writes a formatted line to the console.
///
/// ```ignore
/// trace!("score {}", score);
/// trace!(color = 2; "lost a life at {},{}", x, y);
/// ```
#[macro_export]
macro_rules! trace {
    (color = $color:expr; $($arg:tt)+) => {
        $crate::log::trace_args(format_args!($($arg)+), $color)
    };
    ($($arg:tt)+) => {
        $crate::log::trace_args(format_args!($($arg)+), $crate::log::DEFAULT_COLOR)
    };
}
