//! Drawing primitives.
//!
//! Colors are reduced mod 16 on every call. Shapes whose host entry takes
//! float coordinates (`line`, `tri`, `trib`, `ttri`) accept integers and
//! convert them exactly.

use core::fmt;

use types::memory::layout;
use types::{
    FontOptions, MapOptions, PaletteSet, PrintOptions, SpriteOptions, TexturedTriangleOptions,
    color_index, wrap,
};

use crate::buffer::Projected;
use crate::log::ConsoleLine;
use crate::sys;
use crate::text::TextData;

/// Clears the screen to `color`.
pub fn cls(color: i32) {
    unsafe { sys::cls(color_index(color)) }
}

/// Sets pixel `(x, y)` to `color` and returns the color it held before.
pub fn pix(x: i32, y: i32, color: i32) -> i32 {
    unsafe { sys::pix(x, y, color_index(color)) as u8 as i32 }
}

/// Color of pixel `(x, y)`, without drawing.
pub fn pget(x: i32, y: i32) -> i32 {
    unsafe { sys::pix(x, y, -1) as u8 as i32 }
}

pub fn line(x0: i32, y0: i32, x1: i32, y1: i32, color: i32) {
    unsafe { sys::line(x0 as f32, y0 as f32, x1 as f32, y1 as f32, color_index(color)) }
}

pub fn rect(x: i32, y: i32, width: i32, height: i32, color: i32) {
    unsafe { sys::rect(x, y, width, height, color_index(color)) }
}

pub fn rectb(x: i32, y: i32, width: i32, height: i32, color: i32) {
    unsafe { sys::rectb(x, y, width, height, color_index(color)) }
}

pub fn circ(x: i32, y: i32, radius: i32, color: i32) {
    unsafe { sys::circ(x, y, radius, color_index(color)) }
}

pub fn circb(x: i32, y: i32, radius: i32, color: i32) {
    unsafe { sys::circb(x, y, radius, color_index(color)) }
}

pub fn elli(x: i32, y: i32, radius_x: i32, radius_y: i32, color: i32) {
    unsafe { sys::elli(x, y, radius_x, radius_y, color_index(color)) }
}

pub fn ellib(x: i32, y: i32, radius_x: i32, radius_y: i32, color: i32) {
    unsafe { sys::ellib(x, y, radius_x, radius_y, color_index(color)) }
}

pub fn tri(points: [(i32, i32); 3], color: i32) {
    let [x0, y0, x1, y1, x2, y2] = flatten(points);
    unsafe { sys::tri(x0, y0, x1, y1, x2, y2, color_index(color)) }
}

pub fn trib(points: [(i32, i32); 3], color: i32) {
    let [x0, y0, x1, y1, x2, y2] = flatten(points);
    unsafe { sys::trib(x0, y0, x1, y1, x2, y2, color_index(color)) }
}

/// Draws a triangle filled with the texture area spanned by `texture`, taken
/// from the sprite sheet unless the options select tiles.
pub fn ttri(
    points: [(i32, i32); 3],
    texture: [(i32, i32); 3],
    options: Option<&TexturedTriangleOptions>,
) {
    let options = options.unwrap_or(&TexturedTriangleOptions::DEFAULT);
    let [x0, y0, x1, y1, x2, y2] = flatten(points);
    let [u0, v0, u1, v1, u2, v2] = flatten(texture);
    let [z0, z1, z2] = options.depths().map(|z| z as f32);
    with_filter(options.transparent_colors(), |filter| unsafe {
        sys::ttri(
            x0,
            y0,
            x1,
            y1,
            x2,
            y2,
            u0,
            v0,
            u1,
            v1,
            u2,
            v2,
            options.use_tiles() as i32,
            filter.as_ptr(),
            filter.count(),
            z0,
            z1,
            z2,
            options.use_depth(),
        )
    })
}

/// Draws sprite `id` (and its neighbours, for sizes above 1×1) at `(x, y)`.
pub fn spr(id: i32, x: i32, y: i32, options: Option<&SpriteOptions>) {
    let options = options.unwrap_or(&SpriteOptions::DEFAULT);
    with_filter(options.transparent_colors(), |filter| unsafe {
        sys::spr(
            id,
            x,
            y,
            filter.as_ptr(),
            filter.count(),
            options.scale(),
            options.flip(),
            options.rotate(),
            options.width(),
            options.height(),
        )
    })
}

/// Draws a region of the map.
pub fn map(options: Option<&MapOptions>) {
    let options = options.unwrap_or(&MapOptions::DEFAULT);
    with_filter(options.transparent_colors(), |filter| unsafe {
        sys::map(
            options.x(),
            options.y(),
            options.width(),
            options.height(),
            options.screen_x(),
            options.screen_y(),
            filter.as_ptr(),
            filter.count(),
            0,
        )
    })
}

/// Draws `text` using the sprite sheet as the font; returns its width in
/// pixels.
pub fn font(text: &str, x: i32, y: i32, options: Option<&FontOptions>) -> i32 {
    let options = options.unwrap_or(&FontOptions::DEFAULT);
    let text = TextData::encode(text);
    with_filter(options.transparent_colors(), |filter| unsafe {
        sys::font(
            text.as_ptr(),
            x,
            y,
            filter.as_ptr(),
            filter.count(),
            options.character_width() as i8,
            options.character_height() as i8,
            options.fixed(),
            options.scale() as i8,
            options.alternate_page(),
        )
    })
}

/// Draws `text` in the system font; returns its width in pixels.
pub fn print(text: &str, x: i32, y: i32, options: Option<&PrintOptions>) -> i32 {
    let options = options.unwrap_or(&PrintOptions::DEFAULT);
    let text = TextData::encode(text);
    unsafe {
        sys::print(
            text.as_ptr(),
            x,
            y,
            options.color(),
            options.fixed() as i8,
            options.scale() as i8,
            options.alternate_page() as i8,
        )
    }
}

/// Formats `args` into a stack line and draws it like [`print`], without
/// allocating. Output past one console line is dropped.
///
/// ```ignore
/// print_args(format_args!("SCORE {}", score), 4, 4, None);
/// ```
pub fn print_args(
    args: fmt::Arguments<'_>,
    x: i32,
    y: i32,
    options: Option<&PrintOptions>,
) -> i32 {
    let options = options.unwrap_or(&PrintOptions::DEFAULT);
    let mut line = ConsoleLine::new();
    let _ = fmt::Write::write_fmt(&mut line, args);
    unsafe {
        sys::print(
            line.as_ptr(),
            x,
            y,
            options.color(),
            options.fixed() as i8,
            options.scale() as i8,
            options.alternate_page() as i8,
        )
    }
}

/// Limits drawing to the given rectangle.
pub fn clip(x: i32, y: i32, width: i32, height: i32) {
    unsafe { sys::clip(x, y, width, height) }
}

/// Restores drawing to the whole screen.
pub fn clip_reset() {
    clip(0, 0, layout::SCREEN_WIDTH, layout::SCREEN_HEIGHT);
}

/// Tile id at map cell `(x, y)`.
pub fn mget(x: i32, y: i32) -> i32 {
    unsafe { sys::mget(x, y) }
}

pub fn mset(x: i32, y: i32, tile: i32) {
    unsafe { sys::mset(x, y, tile) }
}

/// Reads flag `flag` (mod 8) of sprite `sprite` (mod 512).
pub fn fget(sprite: i32, flag: i32) -> bool {
    unsafe { sys::fget(sprite_index(sprite), flag_index(flag)) != 0 }
}

pub fn fset(sprite: i32, flag: i32, value: bool) {
    unsafe { sys::fset(sprite_index(sprite), flag_index(flag), value) }
}

fn sprite_index(sprite: i32) -> i32 {
    wrap(sprite, layout::SPRITE_COUNT)
}

fn flag_index(flag: i32) -> i8 {
    wrap(flag, layout::FLAGS_PER_SPRITE) as i8
}

fn flatten(points: [(i32, i32); 3]) -> [f32; 6] {
    let [(x0, y0), (x1, y1), (x2, y2)] = points;
    [x0, y0, x1, y1, x2, y2].map(|v| v as f32)
}

/// Projects the transparency filter of `colors` for the duration of `call`.
fn with_filter<R>(colors: PaletteSet, call: impl FnOnce(Projected<'_>) -> R) -> R {
    let colors = colors.colors();
    call(Projected::new(colors.as_deref()))
}
