//! Per-call configuration records, one per configurable host primitive.
//!
//! Every record is `Copy`, starts from its family's `DEFAULT` constant and is
//! adjusted with chained setters that take and return the record by value:
//!
//! ```
//! use types::SpriteOptions;
//!
//! let options = SpriteOptions::new()
//!     .add_transparent_color(14)
//!     .set_scale(3)
//!     .set_size(2, 2);
//! assert_eq!(options.scale(), 3);
//! ```
//!
//! Setters never fail: bounded fields wrap into range, sound-effect speed
//! saturates, and everything else is stored as given and narrowed at the
//! call boundary.

/// Value the host reads as "not specified, keep the current one".
pub const UNSPECIFIED: i32 = -1;

/// Generates the transparency setters shared by the families that draw from
/// sprite or tile data.
macro_rules! transparency_setters {
    ($name:ident) => {
        impl $name {
            /// Adds a color to render as transparent.
            #[must_use]
            pub fn add_transparent_color(mut self, color: i32) -> Self {
                self.transparent_colors.add_color(color);
                self
            }

            /// Stops rendering a color as transparent.
            #[must_use]
            pub fn remove_transparent_color(mut self, color: i32) -> Self {
                self.transparent_colors.remove_color(color);
                self
            }

            /// Renders every color.
            #[must_use]
            pub fn set_opaque(mut self) -> Self {
                self.transparent_colors.clear();
                self
            }

            pub fn transparent_colors(&self) -> $crate::PaletteSet {
                self.transparent_colors
            }
        }
    };
}

pub(crate) use transparency_setters;

pub mod font;
pub mod map;
pub mod music;
pub mod print;
pub mod sfx;
pub mod sprite;
pub mod ttri;
pub mod trace;

pub use font::FontOptions;
pub use map::MapOptions;
pub use music::MusicOptions;
pub use print::PrintOptions;
pub use sfx::{Note, SoundEffectOptions};
pub use sprite::SpriteOptions;
pub use trace::TraceOptions;
pub use ttri::TexturedTriangleOptions;
