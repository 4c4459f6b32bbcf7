use crate::{wrap, PaletteSet};

use super::transparency_setters;

pub const FLIP_HORIZONTAL: i32 = 1;
pub const FLIP_VERTICAL: i32 = 2;
pub const QUARTER_TURNS: i32 = 4;

/// Options for `spr`.
///
/// `rotate` counts clockwise quarter turns and is always kept in `0..=3`;
/// `flip` is a bit set of [`FLIP_HORIZONTAL`] and [`FLIP_VERTICAL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteOptions {
    transparent_colors: PaletteSet,
    scale: i32,
    flip: i32,
    rotate: i32,
    width: i32,
    height: i32,
}

impl SpriteOptions {
    pub const DEFAULT: Self = Self {
        transparent_colors: PaletteSet::EMPTY,
        scale: 1,
        flip: 0,
        rotate: 0,
        width: 1,
        height: 1,
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[must_use]
    pub fn set_scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn flip_horizontally(mut self) -> Self {
        self.flip ^= FLIP_HORIZONTAL;
        self
    }

    #[must_use]
    pub fn flip_vertically(mut self) -> Self {
        self.flip ^= FLIP_VERTICAL;
        self
    }

    #[must_use]
    pub fn rotate_90_cw(mut self) -> Self {
        self.rotate = wrap(self.rotate + 1, QUARTER_TURNS);
        self
    }

    #[must_use]
    pub fn rotate_90_ccw(mut self) -> Self {
        self.rotate = wrap(self.rotate - 1, QUARTER_TURNS);
        self
    }

    #[must_use]
    pub fn rotate_180(mut self) -> Self {
        self.rotate = wrap(self.rotate + 2, QUARTER_TURNS);
        self
    }

    /// Size in 8×8 sub-sprites.
    #[must_use]
    pub fn set_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn flip(&self) -> i32 {
        self.flip
    }

    pub fn rotate(&self) -> i32 {
        self.rotate
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

transparency_setters!(SpriteOptions);

impl Default for SpriteOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
