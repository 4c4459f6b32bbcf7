//! Text as the host reads it: 7-bit bytes ending in a single zero.

use alloc::vec::Vec;

use crate::buffer::Projected;

/// Byte substituted for every character the host cannot display.
pub const REPLACEMENT: u8 = b'?';

/// Maps one character to the byte the host receives, or `None` for NUL,
/// which would end the string early and is dropped instead.
pub const fn encode_char(c: char) -> Option<u8> {
    match c as u32 {
        0 => None,
        1..=0x7f => Some(c as u8),
        _ => Some(REPLACEMENT),
    }
}

/// An encoded, zero-terminated copy of a caller string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextData(Vec<u8>);

impl TextData {
    pub fn encode(text: &str) -> Self {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        bytes.extend(text.chars().filter_map(encode_char));
        bytes.push(0);
        Self(bytes)
    }

    /// Encoded bytes including the terminator; never empty.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Encoded bytes without the terminator.
    pub fn text(&self) -> &[u8] {
        &self.0[..self.0.len() - 1]
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.0.as_ptr()
    }

    pub fn project(&self) -> Projected<'_> {
        Projected::new(Some(&self.0))
    }
}

impl From<&str> for TextData {
    fn from(text: &str) -> Self {
        TextData::encode(text)
    }
}
