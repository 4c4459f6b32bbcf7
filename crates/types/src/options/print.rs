use crate::color_index;

/// Options for `print`, which draws text with the system font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    color: i8,
    fixed: bool,
    scale: i32,
    alternate_page: bool,
}

impl PrintOptions {
    pub const DEFAULT: Self = Self {
        color: 15,
        fixed: false,
        scale: 1,
        alternate_page: false,
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[must_use]
    pub fn set_color(mut self, color: i32) -> Self {
        self.color = color_index(color);
        self
    }

    #[must_use]
    pub fn set_scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn toggle_fixed(mut self) -> Self {
        self.fixed = !self.fixed;
        self
    }

    /// Toggles between the large and small system font.
    #[must_use]
    pub fn toggle_page(mut self) -> Self {
        self.alternate_page = !self.alternate_page;
        self
    }

    pub fn color(&self) -> i8 {
        self.color
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

impl Default for PrintOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
