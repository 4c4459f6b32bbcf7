//! In-process stand-in for the TIC-80 runtime, used on every target except
//! wasm32.
//!
//! Every primitive call is appended to a per-thread log as a [`HostCall`]
//! with its arguments decoded the way the host would see them: text is read
//! back up to its terminator and transparency filters are read back from the
//! projected pointer and count. Alongside the log the recorder keeps a
//! simulated 256 KiB RAM, so `peek`/`poke`, `memcpy`/`memset`, `pix`,
//! `mget`/`mset`, `fget`/`fset` and the gamepad/keyboard registers all
//! observe the same bytes. Time, timestamp and mouse are set by the test.
//!
//! State is thread-local, so tests running in parallel never see each
//! other's calls.

use core::cell::RefCell;
use core::ffi::CStr;
use std::vec;
use std::vec::Vec;

use types::memory::{RAM_SIZE, layout};
use types::{BitWidth, Gamepad, Key, MouseState};

use crate::sys::MouseData;

/// One recorded primitive call.
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    Btn { id: i32 },
    Btnp { id: i32, hold: i32, period: i32 },
    Clip { x: i32, y: i32, width: i32, height: i32 },
    Cls { color: i8 },
    Circ { x: i32, y: i32, radius: i32, color: i8 },
    Circb { x: i32, y: i32, radius: i32, color: i8 },
    Elli { x: i32, y: i32, radius_x: i32, radius_y: i32, color: i8 },
    Ellib { x: i32, y: i32, radius_x: i32, radius_y: i32, color: i8 },
    Exit,
    Fget { sprite: i32, flag: i8 },
    Fset { sprite: i32, flag: i8, value: bool },
    Font {
        text: Vec<u8>,
        x: i32,
        y: i32,
        transparent: Option<Vec<u8>>,
        character_width: i8,
        character_height: i8,
        fixed: bool,
        scale: i8,
        alternate_page: bool,
    },
    Key { id: i32 },
    Keyp { id: i8, hold: i32, period: i32 },
    Line { x0: f32, y0: f32, x1: f32, y1: f32, color: i8 },
    Map {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        screen_x: i32,
        screen_y: i32,
        transparent: Option<Vec<u8>>,
        remap: i32,
    },
    Memcpy { destination: i32, source: i32, length: i32 },
    Memset { address: i32, value: i32, length: i32 },
    Mget { x: i32, y: i32 },
    Mset { x: i32, y: i32, value: i32 },
    Mouse,
    Music {
        track: i32,
        frame: i32,
        row: i32,
        looping: bool,
        sustain: bool,
        tempo: i32,
        speed: i32,
    },
    Peek { address: i32, bits: i8 },
    Pix { x: i32, y: i32, color: i8 },
    Pmem { index: i32, value: i64 },
    Poke { address: i32, value: i8, bits: i8 },
    Print {
        text: Vec<u8>,
        x: i32,
        y: i32,
        color: i8,
        fixed: i8,
        scale: i8,
        alternate_page: i8,
    },
    Rect { x: i32, y: i32, width: i32, height: i32, color: i8 },
    Rectb { x: i32, y: i32, width: i32, height: i32, color: i8 },
    Sfx {
        id: i32,
        note: i32,
        octave: i32,
        duration: i32,
        channel: i32,
        left_volume: i32,
        right_volume: i32,
        speed: i32,
    },
    Spr {
        id: i32,
        x: i32,
        y: i32,
        transparent: Option<Vec<u8>>,
        scale: i32,
        flip: i32,
        rotate: i32,
        width: i32,
        height: i32,
    },
    Sync { mask: i32, bank: i8, to_cart: i8 },
    Ttri {
        points: [f32; 6],
        texture: [f32; 6],
        use_tiles: i32,
        transparent: Option<Vec<u8>>,
        depths: [f32; 3],
        depth: bool,
    },
    Time,
    Trace { message: Vec<u8>, color: i8 },
    Tri { points: [f32; 6], color: i8 },
    Trib { points: [f32; 6], color: i8 },
    Tstamp,
}

/// Width in pixels of one system-font glyph as `print` lays it out.
pub const PRINT_GLYPH_WIDTH: i32 = 6;

struct HostState {
    calls: Vec<HostCall>,
    ram: Vec<u8>,
    pmem: [u32; layout::PMEM_SLOTS as usize],
    time: f32,
    tstamp: u32,
    mouse: MouseData,
    exited: bool,
}

impl HostState {
    fn new() -> Self {
        Self {
            calls: Vec::new(),
            ram: vec![0; RAM_SIZE as usize],
            pmem: [0; layout::PMEM_SLOTS as usize],
            time: 0.0,
            tstamp: 0,
            mouse: MouseData::default(),
            exited: false,
        }
    }

    fn peek(&self, address: i32, bits: i8) -> u8 {
        let Some(width) = bit_width(bits) else {
            return 0;
        };
        let Ok(address) = u32::try_from(address) else {
            return 0;
        };
        let per_byte = width.units_per_byte();
        match self.ram.get((address / per_byte) as usize) {
            Some(byte) => (byte >> ((address % per_byte) * bits as u32)) & width.mask(),
            None => 0,
        }
    }

    fn poke(&mut self, address: i32, value: u8, bits: i8) {
        let Some(width) = bit_width(bits) else {
            return;
        };
        let Ok(address) = u32::try_from(address) else {
            return;
        };
        let per_byte = width.units_per_byte();
        let shift = (address % per_byte) * bits as u32;
        if let Some(byte) = self.ram.get_mut((address / per_byte) as usize) {
            *byte = (*byte & !(width.mask() << shift)) | ((value & width.mask()) << shift);
        }
    }

    fn span(&self, address: i32, length: i32) -> Option<core::ops::Range<usize>> {
        let start = usize::try_from(address).ok()?;
        let end = start.checked_add(usize::try_from(length).ok()?)?;
        (end <= self.ram.len()).then_some(start..end)
    }

    fn key_slots(&mut self) -> &mut [u8] {
        let start = layout::KEYBOARD.base as usize;
        &mut self.ram[start..start + layout::KEYBOARD.size as usize]
    }
}

std::thread_local! {
    static HOST: RefCell<HostState> = RefCell::new(HostState::new());
}

fn with_host<R>(f: impl FnOnce(&mut HostState) -> R) -> R {
    HOST.with(|host| f(&mut host.borrow_mut()))
}

fn bit_width(bits: i8) -> Option<BitWidth> {
    match bits {
        1 => Some(BitWidth::One),
        2 => Some(BitWidth::Two),
        4 => Some(BitWidth::Four),
        8 => Some(BitWidth::Eight),
        _ => None,
    }
}

/// Nibble address of a screen pixel, if it is on screen.
fn screen_nibble(x: i32, y: i32) -> Option<i32> {
    let on_screen =
        (0..layout::SCREEN_WIDTH).contains(&x) && (0..layout::SCREEN_HEIGHT).contains(&y);
    on_screen.then(|| layout::SCREEN.base as i32 * 2 + y * layout::SCREEN_WIDTH + x)
}

fn map_cell(x: i32, y: i32) -> Option<i32> {
    let on_map = (0..layout::MAP_WIDTH).contains(&x) && (0..layout::MAP_HEIGHT).contains(&y);
    on_map.then(|| layout::MAP.base as i32 + y * layout::MAP_WIDTH + x)
}

fn flag_byte(sprite: i32) -> Option<i32> {
    (0..layout::SPRITE_COUNT)
        .contains(&sprite)
        .then(|| layout::SPRITE_FLAGS.base as i32 + sprite)
}

unsafe fn read_text(text: *const u8) -> Vec<u8> {
    if text.is_null() {
        return Vec::new();
    }
    unsafe { CStr::from_ptr(text.cast()) }.to_bytes().to_vec()
}

unsafe fn read_filter(colors: *const u8, count: i8) -> Option<Vec<u8>> {
    // A zero count leaves the address unused.
    let count = usize::try_from(count).unwrap_or(0);
    if colors.is_null() || count == 0 {
        return None;
    }
    Some(unsafe { core::slice::from_raw_parts(colors, count) }.to_vec())
}

/// Clears the log and every piece of simulated state.
pub fn reset() {
    with_host(|host| *host = HostState::new());
}

/// Copy of every call recorded so far.
pub fn calls() -> Vec<HostCall> {
    with_host(|host| host.calls.clone())
}

/// Drains the call log, leaving simulated state untouched.
pub fn take_calls() -> Vec<HostCall> {
    with_host(|host| core::mem::take(&mut host.calls))
}

pub fn set_time(milliseconds: f32) {
    with_host(|host| host.time = milliseconds);
}

pub fn set_tstamp(seconds: u32) {
    with_host(|host| host.tstamp = seconds);
}

/// Presses or releases a gamepad button in the GAMEPADS register.
pub fn set_button(button: impl Into<Gamepad>, pressed: bool) {
    let id = button.into().id();
    let address = layout::GAMEPADS.base as i32 * 8 + id;
    with_host(|host| host.poke(address, pressed as u8, 1));
}

/// Presses or releases a key. The KEYBOARD register holds up to four held
/// key codes; presses beyond that are dropped like on the real console.
pub fn set_key(key: Key, pressed: bool) {
    let code = key.id() as u8;
    with_host(|host| {
        let slots = host.key_slots();
        if pressed {
            if slots.contains(&code) {
                return;
            }
            if let Some(slot) = slots.iter_mut().find(|slot| **slot == 0) {
                *slot = code;
            }
        } else {
            slots.iter_mut().filter(|slot| **slot == code).for_each(|slot| *slot = 0);
        }
    });
}

pub fn set_mouse(state: MouseState) {
    with_host(|host| {
        host.mouse = MouseData {
            x: state.x as i16,
            y: state.y as i16,
            scroll_x: state.scroll_x as i8,
            scroll_y: state.scroll_y as i8,
            left: state.left,
            middle: state.middle,
            right: state.right,
        }
    });
}

/// Reads simulated RAM directly, without recording a call.
pub fn ram(address: u32, length: usize) -> Vec<u8> {
    with_host(|host| {
        let start = (address as usize).min(host.ram.len());
        let end = start.saturating_add(length).min(host.ram.len());
        host.ram[start..end].to_vec()
    })
}

/// Writes simulated RAM directly, without recording a call. Bytes past the
/// end of RAM are dropped.
pub fn set_ram(address: u32, bytes: &[u8]) {
    with_host(|host| {
        let start = (address as usize).min(host.ram.len());
        let end = start.saturating_add(bytes.len()).min(host.ram.len());
        host.ram[start..end].copy_from_slice(&bytes[..end - start]);
    });
}

pub fn persistent(index: usize) -> Option<u32> {
    with_host(|host| host.pmem.get(index).copied())
}

/// Whether the cart has called `exit` since the last reset.
pub fn exited() -> bool {
    with_host(|host| host.exited)
}

/// The recorder's implementations of the host primitives, signature for
/// signature the same as the wasm imports in [`crate::sys`].
#[allow(clippy::missing_safety_doc, clippy::too_many_arguments)]
pub mod primitives {
    use super::*;

    pub unsafe fn btn(id: i32) -> i32 {
        with_host(|host| {
            host.calls.push(HostCall::Btn { id });
            host.peek(layout::GAMEPADS.base as i32 * 8 + (id & 31), 1) as i32
        })
    }

    /// Reports the current level only; hold/repeat timing is not simulated.
    pub unsafe fn btnp(id: i32, hold: i32, period: i32) -> i32 {
        with_host(|host| {
            host.calls.push(HostCall::Btnp { id, hold, period });
            host.peek(layout::GAMEPADS.base as i32 * 8 + (id & 31), 1) as i32
        })
    }

    pub unsafe fn clip(x: i32, y: i32, width: i32, height: i32) {
        with_host(|host| host.calls.push(HostCall::Clip { x, y, width, height }));
    }

    pub unsafe fn cls(color: i8) {
        with_host(|host| host.calls.push(HostCall::Cls { color }));
    }

    pub unsafe fn circ(x: i32, y: i32, radius: i32, color: i8) {
        with_host(|host| host.calls.push(HostCall::Circ { x, y, radius, color }));
    }

    pub unsafe fn circb(x: i32, y: i32, radius: i32, color: i8) {
        with_host(|host| host.calls.push(HostCall::Circb { x, y, radius, color }));
    }

    pub unsafe fn elli(x: i32, y: i32, radius_x: i32, radius_y: i32, color: i8) {
        with_host(|host| {
            host.calls.push(HostCall::Elli { x, y, radius_x, radius_y, color })
        });
    }

    pub unsafe fn ellib(x: i32, y: i32, radius_x: i32, radius_y: i32, color: i8) {
        with_host(|host| {
            host.calls.push(HostCall::Ellib { x, y, radius_x, radius_y, color })
        });
    }

    pub unsafe fn exit() {
        with_host(|host| {
            host.calls.push(HostCall::Exit);
            host.exited = true;
        });
    }

    pub unsafe fn fget(sprite: i32, flag: i8) -> i32 {
        with_host(|host| {
            host.calls.push(HostCall::Fget { sprite, flag });
            match flag_byte(sprite) {
                Some(address) => host.peek(address * 8 + (flag as i32 & 7), 1) as i32,
                None => 0,
            }
        })
    }

    pub unsafe fn fset(sprite: i32, flag: i8, value: bool) {
        with_host(|host| {
            host.calls.push(HostCall::Fset { sprite, flag, value });
            if let Some(address) = flag_byte(sprite) {
                host.poke(address * 8 + (flag as i32 & 7), value as u8, 1);
            }
        });
    }

    /// Returns the width a fixed-pitch layout of the text would take.
    pub unsafe fn font(
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
    ) -> i32 {
        let text = unsafe { read_text(text) };
        let transparent = unsafe { read_filter(transparent_colors, transparent_count) };
        let width = text.len() as i32 * character_width as i32 * scale as i32;
        with_host(|host| {
            host.calls.push(HostCall::Font {
                text,
                x,
                y,
                transparent,
                character_width,
                character_height,
                fixed,
                scale,
                alternate_page,
            })
        });
        width
    }

    /// Id 0 asks whether any key is held.
    pub unsafe fn key(id: i32) -> i32 {
        with_host(|host| {
            host.calls.push(HostCall::Key { id });
            let slots = host.key_slots();
            let held = match id {
                0 => slots.iter().any(|slot| *slot != 0),
                _ => slots.contains(&(id as u8)),
            };
            held as i32
        })
    }

    pub unsafe fn keyp(id: i8, hold: i32, period: i32) -> i32 {
        with_host(|host| {
            host.calls.push(HostCall::Keyp { id, hold, period });
            let slots = host.key_slots();
            let held = match id {
                0 => slots.iter().any(|slot| *slot != 0),
                _ => slots.contains(&(id as u8)),
            };
            held as i32
        })
    }

    pub unsafe fn line(x0: f32, y0: f32, x1: f32, y1: f32, color: i8) {
        with_host(|host| host.calls.push(HostCall::Line { x0, y0, x1, y1, color }));
    }

    pub unsafe fn map(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        screen_x: i32,
        screen_y: i32,
        transparent_colors: *const u8,
        transparent_count: i8,
        remap: i32,
    ) {
        let transparent = unsafe { read_filter(transparent_colors, transparent_count) };
        with_host(|host| {
            host.calls.push(HostCall::Map {
                x,
                y,
                width,
                height,
                screen_x,
                screen_y,
                transparent,
                remap,
            })
        });
    }

    pub unsafe fn tic_memcpy(destination: i32, source: i32, length: i32) {
        with_host(|host| {
            host.calls.push(HostCall::Memcpy { destination, source, length });
            let spans = (host.span(source, length), host.span(destination, length));
            if let (Some(from), Some(to)) = spans {
                host.ram.copy_within(from, to.start);
            }
        });
    }

    pub unsafe fn tic_memset(address: i32, value: i32, length: i32) {
        with_host(|host| {
            host.calls.push(HostCall::Memset { address, value, length });
            if let Some(range) = host.span(address, length) {
                host.ram[range].fill(value as u8);
            }
        });
    }

    pub unsafe fn mget(x: i32, y: i32) -> i32 {
        with_host(|host| {
            host.calls.push(HostCall::Mget { x, y });
            map_cell(x, y).map_or(0, |address| host.peek(address, 8) as i32)
        })
    }

    pub unsafe fn mset(x: i32, y: i32, value: i32) {
        with_host(|host| {
            host.calls.push(HostCall::Mset { x, y, value });
            if let Some(address) = map_cell(x, y) {
                host.poke(address, value as u8, 8);
            }
        });
    }

    pub unsafe fn mouse(data: *mut MouseData) {
        let state = with_host(|host| {
            host.calls.push(HostCall::Mouse);
            host.mouse
        });
        if !data.is_null() {
            unsafe { data.write(state) };
        }
    }

    pub unsafe fn music(
        track: i32,
        frame: i32,
        row: i32,
        looping: bool,
        sustain: bool,
        tempo: i32,
        speed: i32,
    ) {
        with_host(|host| {
            host.calls.push(HostCall::Music {
                track,
                frame,
                row,
                looping,
                sustain,
                tempo,
                speed,
            })
        });
    }

    pub unsafe fn peek(address: i32, bits: i8) -> i32 {
        with_host(|host| {
            host.calls.push(HostCall::Peek { address, bits });
            host.peek(address, bits) as i32
        })
    }

    /// Writes the pixel when `color` is a palette index, then returns the
    /// color it held before. A negative color only reads.
    pub unsafe fn pix(x: i32, y: i32, color: i8) -> i32 {
        with_host(|host| {
            host.calls.push(HostCall::Pix { x, y, color });
            let Some(nibble) = screen_nibble(x, y) else {
                return 0;
            };
            let previous = host.peek(nibble, 4);
            if color >= 0 {
                host.poke(nibble, color as u8, 4);
            }
            previous as i32
        })
    }

    /// A negative value only reads the slot; anything else stores it and
    /// returns what the slot held before.
    pub unsafe fn pmem(index: i32, value: i64) -> u32 {
        with_host(|host| {
            host.calls.push(HostCall::Pmem { index, value });
            let Some(slot) = usize::try_from(index).ok().and_then(|i| host.pmem.get_mut(i)) else {
                return 0;
            };
            let previous = *slot;
            if value >= 0 {
                *slot = value as u32;
            }
            previous
        })
    }

    pub unsafe fn poke(address: i32, value: i8, bits: i8) {
        with_host(|host| {
            host.calls.push(HostCall::Poke { address, value, bits });
            host.poke(address, value as u8, bits);
        });
    }

    /// Returns the width of the text in the system font.
    pub unsafe fn print(
        text: *const u8,
        x: i32,
        y: i32,
        color: i8,
        fixed: i8,
        scale: i8,
        alternate_page: i8,
    ) -> i32 {
        let text = unsafe { read_text(text) };
        let width = text.len() as i32 * PRINT_GLYPH_WIDTH * scale as i32;
        with_host(|host| {
            host.calls.push(HostCall::Print {
                text,
                x,
                y,
                color,
                fixed,
                scale,
                alternate_page,
            })
        });
        width
    }

    pub unsafe fn rect(x: i32, y: i32, width: i32, height: i32, color: i8) {
        with_host(|host| host.calls.push(HostCall::Rect { x, y, width, height, color }));
    }

    pub unsafe fn rectb(x: i32, y: i32, width: i32, height: i32, color: i8) {
        with_host(|host| host.calls.push(HostCall::Rectb { x, y, width, height, color }));
    }

    pub unsafe fn sfx(
        id: i32,
        note: i32,
        octave: i32,
        duration: i32,
        channel: i32,
        left_volume: i32,
        right_volume: i32,
        speed: i32,
    ) {
        with_host(|host| {
            host.calls.push(HostCall::Sfx {
                id,
                note,
                octave,
                duration,
                channel,
                left_volume,
                right_volume,
                speed,
            })
        });
    }

    pub unsafe fn spr(
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
    ) {
        let transparent = unsafe { read_filter(transparent_colors, transparent_count) };
        with_host(|host| {
            host.calls.push(HostCall::Spr {
                id,
                x,
                y,
                transparent,
                scale,
                flip,
                rotate,
                width,
                height,
            })
        });
    }

    pub unsafe fn sync(mask: i32, bank: i8, to_cart: i8) {
        with_host(|host| host.calls.push(HostCall::Sync { mask, bank, to_cart }));
    }

    pub unsafe fn ttri(
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
    ) {
        let transparent = unsafe { read_filter(transparent_colors, transparent_count) };
        with_host(|host| {
            host.calls.push(HostCall::Ttri {
                points: [x0, y0, x1, y1, x2, y2],
                texture: [u0, v0, u1, v1, u2, v2],
                use_tiles,
                transparent,
                depths: [z0, z1, z2],
                depth,
            })
        });
    }

    pub unsafe fn time() -> f32 {
        with_host(|host| {
            host.calls.push(HostCall::Time);
            host.time
        })
    }

    pub unsafe fn trace(message: *const u8, color: i8) {
        let message = unsafe { read_text(message) };
        with_host(|host| host.calls.push(HostCall::Trace { message, color }));
    }

    pub unsafe fn tri(x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32, color: i8) {
        with_host(|host| {
            host.calls.push(HostCall::Tri {
                points: [x0, y0, x1, y1, x2, y2],
                color,
            })
        });
    }

    pub unsafe fn trib(x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32, color: i8) {
        with_host(|host| {
            host.calls.push(HostCall::Trib {
                points: [x0, y0, x1, y1, x2, y2],
                color,
            })
        });
    }

    pub unsafe fn tstamp() -> u32 {
        with_host(|host| {
            host.calls.push(HostCall::Tstamp);
            host.tstamp
        })
    }
}
