use crate::PaletteSet;

use super::transparency_setters;

/// Options for `font`, which draws text using sprite data as glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontOptions {
    transparent_colors: PaletteSet,
    character_width: i32,
    character_height: i32,
    fixed: bool,
    scale: i32,
    alternate_page: bool,
}

impl FontOptions {
    pub const DEFAULT: Self = Self {
        transparent_colors: PaletteSet::EMPTY,
        character_width: 8,
        character_height: 8,
        fixed: false,
        scale: 1,
        alternate_page: false,
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the maximum glyph cell in pixels.
    #[must_use]
    pub fn set_character_size(mut self, width: i32, height: i32) -> Self {
        self.character_width = width;
        self.character_height = height;
        self
    }

    #[must_use]
    pub fn set_scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    /// Toggles monospacing.
    #[must_use]
    pub fn toggle_fixed(mut self) -> Self {
        self.fixed = !self.fixed;
        self
    }

    /// Toggles between the primary and alternate font page.
    #[must_use]
    pub fn toggle_page(mut self) -> Self {
        self.alternate_page = !self.alternate_page;
        self
    }

    pub fn character_width(&self) -> i32 {
        self.character_width
    }

    pub fn character_height(&self) -> i32 {
        self.character_height
    }

    pub fn fixed(&self) -> bool {
        self.fixed
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn alternate_page(&self) -> bool {
        self.alternate_page
    }
}

transparency_setters!(FontOptions);

impl Default for FontOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
