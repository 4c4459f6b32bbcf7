use crate::PaletteSet;

use super::transparency_setters;

/// Options for `map`.
///
/// The default draws the 30×17 cell window at the top-left of the map to the
/// top-left of the screen, which exactly covers the 240×136 display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapOptions {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    screen_x: i32,
    screen_y: i32,
    transparent_colors: PaletteSet,
    scale: i32,
}

impl MapOptions {
    pub const DEFAULT: Self = Self {
        x: 0,
        y: 0,
        width: 30,
        height: 17,
        screen_x: 0,
        screen_y: 0,
        transparent_colors: PaletteSet::EMPTY,
        scale: 1,
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Map cell to start drawing from.
    #[must_use]
    pub fn set_offset(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Number of cells to draw.
    #[must_use]
    pub fn set_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Screen pixel to draw the first cell at.
    #[must_use]
    pub fn set_position(mut self, x: i32, y: i32) -> Self {
        self.screen_x = x;
        self.screen_y = y;
        self
    }

    #[must_use]
    pub fn set_scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn screen_x(&self) -> i32 {
        self.screen_x
    }

    pub fn screen_y(&self) -> i32 {
        self.screen_y
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }
}

transparency_setters!(MapOptions);

impl Default for MapOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
