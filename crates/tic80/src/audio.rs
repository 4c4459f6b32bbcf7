use types::{MusicOptions, SoundEffectOptions};

use crate::sys;

/// Plays a sound effect; `None` plays with every field left to the host.
pub fn sfx(options: Option<&SoundEffectOptions>) {
    let options = options.unwrap_or(&SoundEffectOptions::DEFAULT);
    unsafe {
        sys::sfx(
            options.id(),
            options.note(),
            options.octave(),
            options.duration(),
            options.channel(),
            options.left_volume(),
            options.right_volume(),
            options.speed(),
        )
    }
}

pub fn music(options: Option<&MusicOptions>) {
    let options = options.unwrap_or(&MusicOptions::DEFAULT);
    unsafe {
        sys::music(
            options.track(),
            options.frame(),
            options.row(),
            options.looping(),
            options.sustain(),
            options.tempo(),
            options.speed(),
        )
    }
}
