//! Cart state that survives between host callbacks.
//!
//! TIC-80 calls `BOOT` once and then `TIC`, `SCN`, `BDR`, `OVR` and `MENU`
//! from its own loop. Nothing of the cart stays on the stack between those
//! calls, so whatever a cart keeps from frame to frame lives in a `static`.

use core::cell::{Cell, UnsafeCell};

use crate::panic::cart_panic;

/// A `static` slot for the cart's game state.
///
/// Callbacks reach the state through [`CartState::with`], which hands out one
/// `&mut T` for the duration of a closure. A callback that reaches the same
/// state again from inside that closure (a scanline hook called from code
/// running under `TIC`, say) is refused instead of aliasing it.
///
/// ```ignore
/// static GAME: CartState<Game> = CartState::new(Game::new());
///
/// fn tic() {
///     GAME.with(|game| {
///         game.update();
///         game.draw();
///     });
/// }
/// ```
pub struct CartState<T> {
    value: UnsafeCell<T>,
    busy: Cell<bool>,
}

impl<T> CartState<T> {
    pub const fn new(value: T) -> Self {
        Self {
            value: UnsafeCell::new(value),
            busy: Cell::new(false),
        }
    }

    /// Runs `f` on the state, or returns `None` if the state is already in
    /// use further up the call stack.
    pub fn try_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        if self.busy.replace(true) {
            return None;
        }
        let _release = Release(&self.busy);
        Some(f(unsafe { &mut *self.value.get() }))
    }

    /// Runs `f` on the state. Nested access stops the cart.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        match self.try_with(f) {
            Some(result) => result,
            None => cart_panic("cart state borrowed twice"),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

struct Release<'a>(&'a Cell<bool>);

impl Drop for Release<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

// The host drives a cart from a single thread and the busy flag keeps
// callbacks from aliasing the value.
unsafe impl<T> Sync for CartState<T> {}
