use core::ops::{BitOr, BitOrAssign};

use crate::wrap;

/// Number of cartridge memory banks.
pub const BANK_COUNT: i32 = 8;

/// Which data banks a `sync` call exchanges. The empty mask means all of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SyncMask(u8);

impl SyncMask {
    pub const ALL: Self = Self(0);
    pub const TILES: Self = Self(1 << 0);
    pub const SPRITES: Self = Self(1 << 1);
    pub const MAP: Self = Self(1 << 2);
    pub const SOUND_EFFECTS: Self = Self(1 << 3);
    pub const MUSIC: Self = Self(1 << 4);
    pub const PALETTE: Self = Self(1 << 5);
    pub const FLAGS: Self = Self(1 << 6);
    pub const SCREEN: Self = Self(1 << 7);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: SyncMask) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for SyncMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SyncMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Wraps a bank number into `0..8`.
pub const fn bank_index(bank: i32) -> i8 {
    wrap(bank, BANK_COUNT) as i8
}
