use crate::color_index;

/// Options for `trace`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceOptions {
    color: i8,
}

impl TraceOptions {
    pub const DEFAULT: Self = Self { color: 15 };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[must_use]
    pub fn set_color(mut self, color: i32) -> Self {
        self.color = color_index(color);
        self
    }

    pub fn color(&self) -> i8 {
        self.color
    }
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
