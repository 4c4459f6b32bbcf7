#![no_std]

//! Rust bindings for the TIC-80 fantasy console's wasm API.
//!
//! Carts are built for `wasm32-unknown-unknown`; every function here packs its
//! arguments into the exact shape a host primitive expects (see [`sys`]) and
//! forwards the call. On any other target the primitives are served by the
//! in-process recorder in [`host`], which is what the tests run against.
//!
//! ```ignore
//! #![no_std]
//! use tic80::{cls, print, spr, SpriteOptions};
//!
//! fn tic() {
//!     cls(0);
//!     spr(1, 112, 64, Some(&SpriteOptions::new().add_transparent_color(0).set_scale(2)));
//!     print("HELLO", 96, 24, None);
//! }
//!
//! tic80::cart!(tic: tic);
//! ```

extern crate alloc;
#[cfg(not(target_arch = "wasm32"))]
extern crate std;

pub use types;

pub mod sys;
#[cfg(not(target_arch = "wasm32"))]
pub mod host;

pub mod buffer;
pub mod text;

#[macro_use]
pub mod log;
#[macro_use]
pub mod entrypoint;

pub mod allocator;
pub mod audio;
pub mod draw;
pub mod input;
pub mod memory;
pub mod panic;
pub mod state;
pub mod system;

pub use buffer::Projected;
pub use state::CartState;
pub use text::TextData;

pub use audio::{music, sfx};
pub use draw::{
    circ, circb, clip, clip_reset, cls, elli, ellib, fget, font, fset, line, map, mget, mset, pget,
    pix, print, print_args, rect, rectb, spr, tri, trib, ttri,
};
pub use input::{btn, btnp, key, keyp, mouse};
pub use memory::{
    memcpy, memset, peek, peek1, peek2, peek4, poke, poke1, poke2, poke4, MemoryWindow, FREE_RAM,
    IO_RAM,
};
pub use system::{exit, pmem, sync, time, trace, tstamp};

pub use types::{
    BitWidth, Button, FontOptions, Gamepad, Key, MapOptions, MouseState, MusicOptions, Note,
    OutOfRange, PaletteSet, Player, PrintOptions, SoundEffectOptions, SpriteOptions, SyncMask,
    TexturedTriangleOptions, TraceOptions,
};
