//! Raw host primitives.
//!
//! On wasm32 these are the functions TIC-80 exports to the cart under the
//! `env` import module, declared with the exact argument order and widths the
//! host expects. Everywhere else the same names resolve to the in-process
//! recorder in [`crate::host`], so the safe wrappers compile and run
//! unchanged in tests.
//!
//! Results the host hands back as `bool` or a narrow integer are declared as
//! `i32` (their wasm representation) and narrowed by the wrappers.

#![allow(clippy::too_many_arguments)]

/// Mouse record the host fills in for `mouse`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseData {
    pub x: i16,
    pub y: i16,
    pub scroll_x: i8,
    pub scroll_y: i8,
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

#[cfg(target_arch = "wasm32")]
#[link(wasm_import_module = "env")]
unsafe extern "C" {
    pub fn btn(id: i32) -> i32;
    pub fn btnp(id: i32, hold: i32, period: i32) -> i32;
    pub fn clip(x: i32, y: i32, width: i32, height: i32);
    pub fn cls(color: i8);
    pub fn circ(x: i32, y: i32, radius: i32, color: i8);
    pub fn circb(x: i32, y: i32, radius: i32, color: i8);
    pub fn elli(x: i32, y: i32, radius_x: i32, radius_y: i32, color: i8);
    pub fn ellib(x: i32, y: i32, radius_x: i32, radius_y: i32, color: i8);
    pub fn exit();
    pub fn fget(sprite: i32, flag: i8) -> i32;
    pub fn fset(sprite: i32, flag: i8, value: bool);
    pub fn font(
        text: *const u8,
        x: i32,
        y: i32,
        transparent_colors: *const u8,
        transparent_count: i8,
        character_width: i8,
        character_height: i8,
        fixed: bool,
        scale: i8,
        alternate_page: bool,
    ) -> i32;
    pub fn key(id: i32) -> i32;
    pub fn keyp(id: i8, hold: i32, period: i32) -> i32;
    pub fn line(x0: f32, y0: f32, x1: f32, y1: f32, color: i8);
    pub fn map(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        screen_x: i32,
        screen_y: i32,
        transparent_colors: *const u8,
        transparent_count: i8,
        remap: i32,
    );
    // Renamed on the Rust side so they never shadow the compiler's own
    // memcpy/memset symbols.
    #[link_name = "memcpy"]
    pub fn tic_memcpy(destination: i32, source: i32, length: i32);
    #[link_name = "memset"]
    pub fn tic_memset(address: i32, value: i32, length: i32);
    pub fn mget(x: i32, y: i32) -> i32;
    pub fn mset(x: i32, y: i32, value: i32);
    pub fn mouse(data: *mut MouseData);
    pub fn music(
        track: i32,
        frame: i32,
        row: i32,
        looping: bool,
        sustain: bool,
        tempo: i32,
        speed: i32,
    );
    pub fn peek(address: i32, bits: i8) -> i32;
    pub fn pix(x: i32, y: i32, color: i8) -> i32;
    pub fn pmem(index: i32, value: i64) -> u32;
    pub fn poke(address: i32, value: i8, bits: i8);
    pub fn print(
        text: *const u8,
        x: i32,
        y: i32,
        color: i8,
        fixed: i8,
        scale: i8,
        alternate_page: i8,
    ) -> i32;
    pub fn rect(x: i32, y: i32, width: i32, height: i32, color: i8);
    pub fn rectb(x: i32, y: i32, width: i32, height: i32, color: i8);
    pub fn sfx(
        id: i32,
        note: i32,
        octave: i32,
        duration: i32,
        channel: i32,
        left_volume: i32,
        right_volume: i32,
        speed: i32,
    );
    pub fn spr(
        id: i32,
        x: i32,
        y: i32,
        transparent_colors: *const u8,
        transparent_count: i8,
        scale: i32,
        flip: i32,
        rotate: i32,
        width: i32,
        height: i32,
    );
    pub fn sync(mask: i32, bank: i8, to_cart: i8);
    pub fn ttri(
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        u0: f32,
        v0: f32,
        u1: f32,
        v1: f32,
        u2: f32,
        v2: f32,
        use_tiles: i32,
        transparent_colors: *const u8,
        transparent_count: i8,
        z0: f32,
        z1: f32,
        z2: f32,
        depth: bool,
    );
    pub fn time() -> f32;
    pub fn trace(message: *const u8, color: i8);
    pub fn tri(x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32, color: i8);
    pub fn trib(x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32, color: i8);
    pub fn tstamp() -> u32;
}

#[cfg(not(target_arch = "wasm32"))]
pub use crate::host::primitives::*;
