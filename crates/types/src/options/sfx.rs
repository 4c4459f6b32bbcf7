use crate::wrap;

use super::UNSPECIFIED;

pub const SOUND_EFFECTS: i32 = 64;
pub const NOTES: i32 = 12;
pub const OCTAVES: i32 = 9;
pub const CHANNELS: i32 = 4;
pub const VOLUME_LEVELS: i32 = 16;
pub const MIN_SPEED: i32 = -4;
pub const MAX_SPEED: i32 = 3;

/// A note within an octave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Note {
    C = 0,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Note {
    const ALL: [Note; NOTES as usize] = [
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
        Note::A,
        Note::ASharp,
        Note::B,
    ];

    /// Builds a note from a semitone index, wrapping it into one octave.
    pub const fn from_index(index: i32) -> Self {
        Self::ALL[wrap(index, NOTES) as usize]
    }

    pub const fn index(self) -> i32 {
        self as i32
    }
}

/// Options for `sfx`.
///
/// `id`, `note`, `octave` and `duration` default to [`UNSPECIFIED`]: the host
/// then plays the effect's own note for as long as the effect lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundEffectOptions {
    id: i32,
    note: i32,
    octave: i32,
    duration: i32,
    channel: i32,
    left_volume: i32,
    right_volume: i32,
    speed: i32,
}

impl SoundEffectOptions {
    pub const DEFAULT: Self = Self {
        id: UNSPECIFIED,
        note: UNSPECIFIED,
        octave: UNSPECIFIED,
        duration: UNSPECIFIED,
        channel: 0,
        left_volume: 15,
        right_volume: 15,
        speed: 0,
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[must_use]
    pub fn set_id(mut self, id: i32) -> Self {
        self.id = wrap(id, SOUND_EFFECTS);
        self
    }

    #[must_use]
    pub fn set_note(mut self, note: Note, octave: i32) -> Self {
        self.note = wrap(note.index(), NOTES);
        self.octave = wrap(octave, OCTAVES);
        self
    }

    /// Duration in frames.
    #[must_use]
    pub fn set_duration(mut self, duration: i32) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn set_channel(mut self, channel: i32) -> Self {
        self.channel = wrap(channel, CHANNELS);
        self
    }

    /// Playback speed. Out-of-range values saturate at `-4` or `3` rather than
    /// wrapping, since the sign is meaningful.
    #[must_use]
    pub fn set_speed(mut self, speed: i32) -> Self {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// Sets both speakers to the same level.
    #[must_use]
    pub fn set_volume(mut self, level: i32) -> Self {
        let level = wrap(level, VOLUME_LEVELS);
        self.left_volume = level;
        self.right_volume = level;
        self
    }

    #[must_use]
    pub fn set_stereo_volume(mut self, left: i32, right: i32) -> Self {
        self.left_volume = wrap(left, VOLUME_LEVELS);
        self.right_volume = wrap(right, VOLUME_LEVELS);
        self
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn note(&self) -> i32 {
        self.note
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn channel(&self) -> i32 {
        self.channel
    }

    pub fn left_volume(&self) -> i32 {
        self.left_volume
    }

    pub fn right_volume(&self) -> i32 {
        self.right_volume
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }
}

impl Default for SoundEffectOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
