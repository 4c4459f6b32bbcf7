use tic80::types::memory::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
use tic80::{
    Button, MusicOptions, Note, PrintOptions, SoundEffectOptions, SpriteOptions, btn, cls, map,
    music, pmem, print_args, rectb, sfx, spr, trace,
};

pub const SPRITE_ID: i32 = 1;
pub const SCALE: i32 = 2;
/// On-screen size of the sprite in pixels.
pub const SIZE: i32 = 8 * SCALE;
/// Persistent memory slot holding the best run.
pub const BEST_SLOT: i32 = 0;
pub const MENU_RESET: i32 = 0;

const BOUNCE_SFX: i32 = 0;

pub struct Bouncer {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    bounces: u32,
    best: u32,
    sprite: SpriteOptions,
}

impl Bouncer {
    pub const fn new() -> Self {
        Self {
            x: (SCREEN_WIDTH - SIZE) / 2,
            y: (SCREEN_HEIGHT - SIZE) / 2,
            dx: 1,
            dy: 1,
            bounces: 0,
            best: 0,
            sprite: SpriteOptions::DEFAULT,
        }
    }

    pub fn boot(&mut self) {
        self.boot_sprite();
        self.best = pmem(BEST_SLOT, -1);
        music(Some(&MusicOptions::new().set_track(0).toggle_looping()));
        trace!("bouncer ready, best run {}", self.best);
    }

    pub fn reset(&mut self) {
        let best = self.best;
        *self = Self::new();
        self.best = best;
        self.boot_sprite();
    }

    pub fn update(&mut self) {
        if btn(Button::Left) {
            self.dx = -1;
        }
        if btn(Button::Right) {
            self.dx = 1;
        }
        if btn(Button::Up) {
            self.dy = -1;
        }
        if btn(Button::Down) {
            self.dy = 1;
        }

        self.x += self.dx;
        self.y += self.dy;

        let mut hit = false;
        if self.x <= 0 || self.x >= SCREEN_WIDTH - SIZE {
            self.x = self.x.clamp(0, SCREEN_WIDTH - SIZE);
            self.dx = -self.dx;
            self.sprite = self.sprite.flip_horizontally();
            hit = true;
        }
        if self.y <= 0 || self.y >= SCREEN_HEIGHT - SIZE {
            self.y = self.y.clamp(0, SCREEN_HEIGHT - SIZE);
            self.dy = -self.dy;
            self.sprite = self.sprite.flip_vertically();
            hit = true;
        }
        if hit {
            self.bounce();
        }
    }

    pub fn draw(&self) {
        cls(0);
        map(None);
        spr(SPRITE_ID, self.x, self.y, Some(&self.sprite));
        rectb(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT, 12);

        print_args(
            format_args!("BOUNCES {} BEST {}", self.bounces, self.best),
            4,
            4,
            Some(&PrintOptions::new().set_color(12).toggle_fixed()),
        );
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn bounces(&self) -> u32 {
        self.bounces
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn sprite(&self) -> SpriteOptions {
        self.sprite
    }

    fn bounce(&mut self) {
        self.bounces += 1;
        let note = Note::from_index(self.bounces as i32);
        sfx(Some(
            &SoundEffectOptions::new()
                .set_id(BOUNCE_SFX)
                .set_note(note, 4)
                .set_duration(10)
                .set_channel(3),
        ));
        if self.bounces > self.best {
            self.best = self.bounces;
            pmem(BEST_SLOT, self.best as i64);
        }
    }

    fn boot_sprite(&mut self) {
        self.sprite = SpriteOptions::new().add_transparent_color(0).set_scale(SCALE);
    }
}

impl Default for Bouncer {
    fn default() -> Self {
        Self::new()
    }
}
