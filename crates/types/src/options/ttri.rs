use crate::PaletteSet;

use super::transparency_setters;

/// Options for `ttri`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TexturedTriangleOptions {
    use_tiles: bool,
    transparent_colors: PaletteSet,
    use_depth: bool,
    z: [i32; 3],
}

impl TexturedTriangleOptions {
    pub const DEFAULT: Self = Self {
        use_tiles: false,
        transparent_colors: PaletteSet::EMPTY,
        use_depth: false,
        z: [0; 3],
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Enables perspective-correct texturing with a depth per vertex.
    #[must_use]
    pub fn set_texture_depth(mut self, z0: i32, z1: i32, z2: i32) -> Self {
        self.use_depth = true;
        self.z = [z0, z1, z2];
        self
    }

    /// Switches the texture source between the sprite sheet and the tile sheet.
    #[must_use]
    pub fn toggle_texture_source(mut self) -> Self {
        self.use_tiles = !self.use_tiles;
        self
    }

    pub fn use_tiles(&self) -> bool {
        self.use_tiles
    }

    pub fn use_depth(&self) -> bool {
        self.use_depth
    }

    pub fn depths(&self) -> [i32; 3] {
        self.z
    }
}

transparency_setters!(TexturedTriangleOptions);

impl Default for TexturedTriangleOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
