#![cfg_attr(target_arch = "wasm32", no_std)]

//! Demo cart: a sprite bouncing around the screen, steered with the d-pad.
//!
//! Every wall hit plays a sound effect and counts towards a best run kept in
//! persistent memory. The scanline callback shifts the border color down the
//! screen and the game menu resets the run.

pub mod bouncer;

use tic80::memory::IO_RAM;
use tic80::types::memory::layout;
use tic80::{CartState, trace};

use bouncer::Bouncer;

static GAME: CartState<Bouncer> = CartState::new(Bouncer::new());

fn boot() {
    GAME.with(Bouncer::boot);
}

fn tic() {
    GAME.with(|game| {
        game.update();
        game.draw();
    });
}

fn scanline(line: i32) {
    let color = (line / 17) as u8 & 0x0f;
    if let Err(err) = IO_RAM.poke(layout::BORDER_COLOR.base, color) {
        trace!(color = 2; "{}", err);
    }
}

fn menu(index: i32) {
    if index == bouncer::MENU_RESET {
        GAME.with(Bouncer::reset);
    }
}

tic80::cart!(tic: tic, boot: boot, scanline: scanline, menu: menu);
