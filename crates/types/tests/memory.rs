use types::memory::layout;
use types::{BitWidth, Gamepad, Button, Key, OutOfRange, Player, Region, SyncMask, FREE_RAM, IO_RAM};

#[test]
fn test_regions_cover_ram_without_overlap() {
    println!("=== Testing memory map: IO_RAM followed by FREE_RAM ===");
    assert_eq!(IO_RAM.base, 0);
    assert_eq!(IO_RAM.end(), FREE_RAM.base);
    assert_eq!(FREE_RAM.end(), types::memory::RAM_SIZE);
    assert!(FREE_RAM.size > IO_RAM.size);
    println!("✓ IO_RAM 0x{:05x}..0x{:05x}, FREE_RAM 0x{:05x}..0x{:05x}",
        IO_RAM.base, IO_RAM.end(), FREE_RAM.base, FREE_RAM.end());
}

#[test]
fn test_checked_address() {
    assert_eq!(FREE_RAM.checked_address(0, 1), Ok(0x18000));
    assert_eq!(FREE_RAM.checked_address(0x27fff, 1), Ok(0x3ffff));
    assert_eq!(FREE_RAM.checked_address(0, FREE_RAM.size), Ok(0x18000));

    let err = FREE_RAM.checked_address(0x27fff, 2).unwrap_err();
    assert_eq!(err, OutOfRange { region: "FREE_RAM", offset: 0x27fff, len: 2 });
    assert_eq!(err.to_string(), "FREE_RAM: offset 0x27fff (+2) is outside the window");

    assert!(IO_RAM.checked_address(u32::MAX, 2).is_err());
}

#[test]
fn test_unit_addresses() {
    assert_eq!(IO_RAM.units(BitWidth::Four), 0x30000);
    assert_eq!(FREE_RAM.checked_unit_address(0, BitWidth::Four), Ok(0x30000));
    assert_eq!(FREE_RAM.checked_unit_address(3, BitWidth::One), Ok(0xc0003));
    assert!(IO_RAM.checked_unit_address(0x30000, BitWidth::Four).is_err());
    assert_eq!(IO_RAM.checked_unit_address(0x2ffff, BitWidth::Four), Ok(0x2ffff));
}

#[test]
fn test_bit_widths() {
    assert_eq!(BitWidth::One.mask(), 0b1);
    assert_eq!(BitWidth::Two.mask(), 0b11);
    assert_eq!(BitWidth::Four.mask(), 0b1111);
    assert_eq!(BitWidth::Eight.mask(), 0xff);
    assert_eq!(BitWidth::Two.units_per_byte(), 4);
    assert_eq!(BitWidth::Eight.bits(), 8);
}

#[test]
fn test_layout_areas_sit_inside_io_ram() {
    let areas: [Region; 16] = [
        layout::SCREEN,
        layout::PALETTE,
        layout::PALETTE_MAP,
        layout::BORDER_COLOR,
        layout::SCREEN_OFFSET,
        layout::MOUSE_CURSOR,
        layout::BLIT_SEGMENT,
        layout::TILES,
        layout::SPRITES,
        layout::MAP,
        layout::GAMEPADS,
        layout::MOUSE,
        layout::KEYBOARD,
        layout::PERSISTENT,
        layout::SPRITE_FLAGS,
        layout::SYSTEM_FONT,
    ];
    for pair in areas.windows(2) {
        assert!(pair[0].end() <= pair[1].base, "{} overlaps {}", pair[0].name, pair[1].name);
    }
    assert!(areas[15].end() <= IO_RAM.end());
    assert_eq!(layout::SCREEN.size as i32, layout::SCREEN_WIDTH * layout::SCREEN_HEIGHT / 2);
    assert_eq!(layout::MAP.size as i32, layout::MAP_WIDTH * layout::MAP_HEIGHT);
    assert_eq!(layout::PERSISTENT.size as i32, layout::PMEM_SLOTS * 4);
}

#[test]
fn test_gamepad_ids() {
    assert_eq!(Gamepad::new(Player::One, Button::Up).id(), 0);
    assert_eq!(Gamepad::new(Player::Two, Button::A).id(), 12);
    assert_eq!(Gamepad::new(Player::Four, Button::Y).id(), 31);
    assert_eq!(Gamepad::from(Button::B).id(), 5);
    assert_eq!(Gamepad::from_id(33).id(), 1);
    assert_eq!(Gamepad::from_id(-1).id(), 31);
}

#[test]
fn test_key_ids() {
    assert_eq!(Key::A.id(), 1);
    assert_eq!(Key::Z.id(), 26);
    assert_eq!(Key::Zero.id(), 27);
    assert_eq!(Key::Nine.id(), 36);
    assert_eq!(Key::Space.id(), 48);
    assert_eq!(Key::Alt.id(), 65);
}

#[test]
fn test_sync_mask() {
    let mask = SyncMask::SPRITES | SyncMask::MAP;
    assert_eq!(mask.bits(), 0b110);
    assert!(mask.contains(SyncMask::MAP));
    assert!(!mask.contains(SyncMask::TILES));
    assert_eq!(SyncMask::ALL.bits(), 0);
    assert_eq!(SyncMask::SCREEN.bits(), 128);

    let mut mask = SyncMask::default();
    mask |= SyncMask::PALETTE;
    assert_eq!(mask, SyncMask::PALETTE);
    assert_eq!(types::sync::bank_index(9), 1);
}
