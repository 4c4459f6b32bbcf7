use crate::wrap;

use super::UNSPECIFIED;

pub const TRACKS: i32 = 8;
pub const FRAMES: i32 = 16;
pub const ROWS: i32 = 64;
pub const MIN_TEMPO: i32 = 40;
pub const MAX_TEMPO: i32 = 280;
pub const MIN_SPEED: i32 = 1;
pub const MAX_SPEED: i32 = 31;

/// Options for `music`.
///
/// Track, frame, row, tempo and speed default to [`UNSPECIFIED`] and are
/// passed through as `-1` for the host to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MusicOptions {
    track: i32,
    frame: i32,
    row: i32,
    looping: bool,
    sustain: bool,
    tempo: i32,
    speed: i32,
}

impl MusicOptions {
    pub const DEFAULT: Self = Self {
        track: UNSPECIFIED,
        frame: UNSPECIFIED,
        row: UNSPECIFIED,
        looping: true,
        sustain: false,
        tempo: UNSPECIFIED,
        speed: UNSPECIFIED,
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[must_use]
    pub fn set_track(mut self, track: i32) -> Self {
        self.track = wrap(track, TRACKS);
        self
    }

    #[must_use]
    pub fn set_frame(mut self, frame: i32) -> Self {
        self.frame = wrap(frame, FRAMES);
        self
    }

    #[must_use]
    pub fn set_row(mut self, row: i32) -> Self {
        self.row = wrap(row, ROWS);
        self
    }

    /// Beats per minute, wrapped into `40..=280`.
    #[must_use]
    pub fn set_tempo(mut self, tempo: i32) -> Self {
        self.tempo = wrap(tempo, MAX_TEMPO - MIN_TEMPO + 1) + MIN_TEMPO;
        self
    }

    /// Ticks per row, wrapped into `1..=31`.
    #[must_use]
    pub fn set_speed(mut self, speed: i32) -> Self {
        self.speed = wrap(speed, MAX_SPEED) + MIN_SPEED;
        self
    }

    #[must_use]
    pub fn toggle_looping(mut self) -> Self {
        self.looping = !self.looping;
        self
    }

    #[must_use]
    pub fn toggle_sustain(mut self) -> Self {
        self.sustain = !self.sustain;
        self
    }

    pub fn track(&self) -> i32 {
        self.track
    }

    pub fn frame(&self) -> i32 {
        self.frame
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn sustain(&self) -> bool {
        self.sustain
    }

    pub fn tempo(&self) -> i32 {
        self.tempo
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }
}

impl Default for MusicOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
