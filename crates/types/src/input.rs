use crate::wrap;

/// Gamepad buttons, in host id order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Button {
    Up = 0,
    Down,
    Left,
    Right,
    A,
    B,
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Player {
    One = 0,
    Two,
    Three,
    Four,
}

/// A button on a specific player's gamepad. The host id is `player * 8 + button`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gamepad(i32);

impl Gamepad {
    pub const BUTTONS_PER_PLAYER: i32 = 8;
    pub const COUNT: i32 = 32;

    pub const fn new(player: Player, button: Button) -> Self {
        Self(player as i32 * Self::BUTTONS_PER_PLAYER + button as i32)
    }

    /// Builds a gamepad id from a raw host id, wrapping it into `0..32`.
    pub const fn from_id(id: i32) -> Self {
        Self(wrap(id, Self::COUNT))
    }

    pub const fn id(&self) -> i32 {
        self.0
    }
}

/// Player one's gamepad, which is what most carts read.
impl From<Button> for Gamepad {
    fn from(button: Button) -> Self {
        Gamepad::new(Player::One, button)
    }
}

/// Keyboard keys, in host id order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Key {
    A = 1,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Minus,
    Equals,
    LeftBracket,
    RightBracket,
    Backslash,
    Semicolon,
    Apostrophe,
    Grave,
    Comma,
    Period,
    Slash,
    Space,
    Tab,
    Return,
    Backspace,
    Delete,
    Insert,
    PageUp,
    PageDown,
    Home,
    End,
    Up,
    Down,
    Left,
    Right,
    CapsLock,
    Ctrl,
    Shift,
    Alt,
}

impl Key {
    pub const fn id(self) -> i32 {
        self as i32
    }
}

/// Mouse position, buttons and scroll delta for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseState {
    pub x: i32,
    pub y: i32,
    pub left: bool,
    pub middle: bool,
    pub right: bool,
    pub scroll_x: i32,
    pub scroll_y: i32,
}
