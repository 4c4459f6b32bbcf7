use types::{Gamepad, Key, MouseState};

use crate::sys::{self, MouseData};

/// Whether a gamepad button is held this frame.
pub fn btn(button: impl Into<Gamepad>) -> bool {
    unsafe { sys::btn(button.into().id()) > 0 }
}

/// Whether a button was just pressed. With a non-negative `hold` the press
/// repeats every `period` frames after it has been held `hold` frames.
pub fn btnp(button: impl Into<Gamepad>, hold: i32, period: i32) -> bool {
    unsafe { sys::btnp(button.into().id(), hold, period) != 0 }
}

pub fn key(key: Key) -> bool {
    unsafe { sys::key(key.id()) > 0 }
}

pub fn keyp(key: Key, hold: i32, period: i32) -> bool {
    unsafe { sys::keyp(key.id() as i8, hold, period) > 0 }
}

pub fn mouse() -> MouseState {
    let mut data = MouseData::default();
    unsafe { sys::mouse(&mut data) };
    MouseState {
        x: data.x as i32,
        y: data.y as i32,
        left: data.left,
        middle: data.middle,
        right: data.right,
        scroll_x: data.scroll_x as i32,
        scroll_y: data.scroll_y as i32,
    }
}
