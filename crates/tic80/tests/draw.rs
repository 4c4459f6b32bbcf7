use tic80::host::{self, HostCall};
use tic80::types::memory::layout;
use tic80::{FontOptions, MapOptions, PrintOptions, SpriteOptions, TexturedTriangleOptions};

#[test]
fn test_spr_without_options_sends_defaults() {
    println!("=== Testing spr: absent options resolve to the sprite default ===");
    host::reset();
    tic80::spr(1, 10, 20, None);

    assert_eq!(
        host::take_calls(),
        vec![HostCall::Spr {
            id: 1,
            x: 10,
            y: 20,
            transparent: None,
            scale: 1,
            flip: 0,
            rotate: 0,
            width: 1,
            height: 1,
        }]
    );
    println!("✓ Null filter, scale 1, no flip or rotation, 1x1");
}

#[test]
fn test_spr_transparency_is_sent_in_ascending_order() {
    println!("=== Testing spr: transparency filter projection ===");
    host::reset();
    let options = SpriteOptions::new()
        .add_transparent_color(14)
        .add_transparent_color(3)
        .add_transparent_color(19)
        .set_scale(3)
        .set_size(2, 2)
        .flip_horizontally()
        .rotate_90_cw();
    tic80::spr(256, -4, 130, Some(&options));

    let calls = host::take_calls();
    println!("Recorded: {:?}", calls);
    assert_eq!(
        calls,
        vec![HostCall::Spr {
            id: 256,
            x: -4,
            y: 130,
            transparent: Some(vec![3, 14]),
            scale: 3,
            flip: 1,
            rotate: 1,
            width: 2,
            height: 2,
        }]
    );
    println!("✓ 19 aliases 3, colors arrive sorted with count 2");
}

#[test]
fn test_map_packs_region_and_position() {
    host::reset();
    tic80::map(None);
    let options = MapOptions::new()
        .set_offset(60, 17)
        .set_size(10, 5)
        .set_position(8, 16)
        .add_transparent_color(0);
    tic80::map(Some(&options));

    assert_eq!(
        host::take_calls(),
        vec![
            HostCall::Map {
                x: 0,
                y: 0,
                width: 30,
                height: 17,
                screen_x: 0,
                screen_y: 0,
                transparent: None,
                remap: 0,
            },
            HostCall::Map {
                x: 60,
                y: 17,
                width: 10,
                height: 5,
                screen_x: 8,
                screen_y: 16,
                transparent: Some(vec![0]),
                remap: 0,
            },
        ]
    );
}

#[test]
fn test_font_encodes_text_and_narrows_options() {
    println!("=== Testing font: text encoding and option narrowing ===");
    host::reset();
    let options = FontOptions::new()
        .add_transparent_color(0)
        .set_character_size(4, 6)
        .toggle_fixed()
        .set_scale(2);
    let width = tic80::font("héllo", 12, 34, Some(&options));

    assert_eq!(width, 5 * 4 * 2);
    assert_eq!(
        host::take_calls(),
        vec![HostCall::Font {
            text: b"h?llo".to_vec(),
            x: 12,
            y: 34,
            transparent: Some(vec![0]),
            character_width: 4,
            character_height: 6,
            fixed: true,
            scale: 2,
            alternate_page: false,
        }]
    );
    println!("✓ Non-ASCII became '?', host width passed back");
}

#[test]
fn test_print_defaults_and_options() {
    host::reset();
    let width = tic80::print("SCORE 10", 1, 2, None);
    assert_eq!(width, 8 * host::PRINT_GLYPH_WIDTH);

    let options = PrintOptions::new().set_color(-1).set_scale(2).toggle_fixed().toggle_page();
    tic80::print("", 0, 0, Some(&options));

    assert_eq!(
        host::take_calls(),
        vec![
            HostCall::Print {
                text: b"SCORE 10".to_vec(),
                x: 1,
                y: 2,
                color: 15,
                fixed: 0,
                scale: 1,
                alternate_page: 0,
            },
            HostCall::Print {
                text: Vec::new(),
                x: 0,
                y: 0,
                color: 15,
                fixed: 1,
                scale: 2,
                alternate_page: 1,
            },
        ]
    );
}

#[test]
fn test_print_args_formats_without_allocating() {
    println!("=== Testing print_args ===");
    host::reset();
    let options = PrintOptions::new().set_color(12).toggle_fixed();
    let width = tic80::print_args(format_args!("BOUNCES {} BEST {}", 3, 7), 4, 4, Some(&options));
    assert_eq!(width, 16 * host::PRINT_GLYPH_WIDTH);

    tic80::print_args(format_args!("{}°", 21), 0, 8, None);

    assert_eq!(
        host::take_calls(),
        vec![
            HostCall::Print {
                text: b"BOUNCES 3 BEST 7".to_vec(),
                x: 4,
                y: 4,
                color: 12,
                fixed: 1,
                scale: 1,
                alternate_page: 0,
            },
            HostCall::Print {
                text: b"21?".to_vec(),
                x: 0,
                y: 8,
                color: 15,
                fixed: 0,
                scale: 1,
                alternate_page: 0,
            },
        ]
    );
    println!("✓ Formatted text encoded like print");
}

#[test]
fn test_shape_colors_wrap() {
    println!("=== Testing shapes: every color reduces mod 16 ===");
    host::reset();
    tic80::cls(17);
    tic80::rect(0, 0, 8, 8, -1);
    tic80::rectb(1, 2, 3, 4, 16);
    tic80::circ(120, 68, 10, 12);
    tic80::circb(120, 68, 11, 44);
    tic80::elli(50, 50, 6, 3, 7);
    tic80::ellib(50, 50, 7, 4, -9);
    tic80::line(0, 0, 239, 135, 18);
    tic80::tri([(0, 0), (10, 0), (5, 8)], 33);
    tic80::trib([(0, 0), (10, 0), (5, 8)], -16);

    let calls = host::take_calls();
    for call in &calls {
        println!("  {:?}", call);
    }
    assert_eq!(
        calls,
        vec![
            HostCall::Cls { color: 1 },
            HostCall::Rect { x: 0, y: 0, width: 8, height: 8, color: 15 },
            HostCall::Rectb { x: 1, y: 2, width: 3, height: 4, color: 0 },
            HostCall::Circ { x: 120, y: 68, radius: 10, color: 12 },
            HostCall::Circb { x: 120, y: 68, radius: 11, color: 12 },
            HostCall::Elli { x: 50, y: 50, radius_x: 6, radius_y: 3, color: 7 },
            HostCall::Ellib { x: 50, y: 50, radius_x: 7, radius_y: 4, color: 7 },
            HostCall::Line { x0: 0.0, y0: 0.0, x1: 239.0, y1: 135.0, color: 2 },
            HostCall::Tri { points: [0.0, 0.0, 10.0, 0.0, 5.0, 8.0], color: 1 },
            HostCall::Trib { points: [0.0, 0.0, 10.0, 0.0, 5.0, 8.0], color: 0 },
        ]
    );
    println!("✓ All colors landed in 0..16");
}

#[test]
fn test_ttri_packs_texture_and_depth() {
    host::reset();
    tic80::ttri([(0, 0), (32, 0), (0, 32)], [(0, 0), (8, 0), (0, 8)], None);
    let options = TexturedTriangleOptions::new()
        .set_texture_depth(1, 2, 3)
        .toggle_texture_source()
        .add_transparent_color(5);
    tic80::ttri([(0, 0), (32, 0), (0, 32)], [(0, 0), (8, 0), (0, 8)], Some(&options));

    let calls = host::take_calls();
    assert_eq!(
        calls[0],
        HostCall::Ttri {
            points: [0.0, 0.0, 32.0, 0.0, 0.0, 32.0],
            texture: [0.0, 0.0, 8.0, 0.0, 0.0, 8.0],
            use_tiles: 0,
            transparent: None,
            depths: [0.0, 0.0, 0.0],
            depth: false,
        }
    );
    assert_eq!(
        calls[1],
        HostCall::Ttri {
            points: [0.0, 0.0, 32.0, 0.0, 0.0, 32.0],
            texture: [0.0, 0.0, 8.0, 0.0, 0.0, 8.0],
            use_tiles: 1,
            transparent: Some(vec![5]),
            depths: [1.0, 2.0, 3.0],
            depth: true,
        }
    );
}

#[test]
fn test_pix_writes_screen_nibbles() {
    println!("=== Testing pix/pget against screen RAM ===");
    host::reset();
    assert_eq!(tic80::pix(3, 4, 7), 0);
    assert_eq!(tic80::pget(3, 4), 7);
    assert_eq!(tic80::pix(3, 4, 20), 7);
    assert_eq!(tic80::pget(3, 4), 4);

    // Pixel 963 is the high nibble of byte 481.
    assert_eq!(host::ram(481, 1), vec![0x40]);
    assert_eq!(tic80::pget(-1, 0), 0);
    println!("✓ pix returns the previous color, pget only reads");
}

#[test]
fn test_map_cells_and_sprite_flags() {
    println!("=== Testing mget/mset and fget/fset ===");
    host::reset();
    tic80::mset(5, 6, 42);
    assert_eq!(tic80::mget(5, 6), 42);
    assert_eq!(tic80::mget(-1, 0), 0);
    assert_eq!(host::ram(layout::MAP.base + 6 * 240 + 5, 1), vec![42]);

    tic80::fset(513, 9, true);
    assert!(tic80::fget(1, 1));
    assert!(!tic80::fget(1, 0));
    assert_eq!(host::ram(layout::SPRITE_FLAGS.base + 1, 1), vec![0b10]);

    let calls = host::take_calls();
    assert!(calls.contains(&HostCall::Fset { sprite: 1, flag: 1, value: true }));
    assert!(calls.contains(&HostCall::Fget { sprite: 1, flag: 1 }));
    println!("✓ Sprite 513 flag 9 lands on sprite 1 flag 1");
}

#[test]
fn test_clip_and_reset() {
    host::reset();
    tic80::clip(10, 10, 100, 50);
    tic80::clip_reset();
    assert_eq!(
        host::take_calls(),
        vec![
            HostCall::Clip { x: 10, y: 10, width: 100, height: 50 },
            HostCall::Clip { x: 0, y: 0, width: 240, height: 136 },
        ]
    );
}
