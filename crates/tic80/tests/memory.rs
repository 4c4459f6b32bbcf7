use tic80::host::{self, HostCall};
use tic80::types::memory::layout;
use tic80::{BitWidth, FREE_RAM, IO_RAM, OutOfRange};

#[test]
fn test_raw_peek_poke() {
    println!("=== Testing unchecked peek/poke at every width ===");
    host::reset();
    tic80::poke(0x18000, 0xab);
    assert_eq!(tic80::peek(0x18000), 0xab);

    // Free RAM starts at nibble 0x30000.
    tic80::poke4(0x30002, 0xc);
    tic80::poke4(0x30003, 0x3);
    assert_eq!(host::ram(0x18001, 1), vec![0x3c]);
    assert_eq!(tic80::peek4(0x30003), 0x3);

    tic80::poke2(0x60008, 0b10);
    tic80::poke1(0xc0018 + 7, 1);
    assert_eq!(host::ram(0x18002, 2), vec![0b10, 0x80]);
    assert_eq!(tic80::peek2(0x60008), 0b10);
    assert_eq!(tic80::peek1(0xc0018 + 7), 1);

    let calls = host::take_calls();
    assert_eq!(calls[0], HostCall::Poke { address: 0x18000, value: 0xabu8 as i8, bits: 8 });
    assert_eq!(calls[1], HostCall::Peek { address: 0x18000, bits: 8 });
    println!("✓ Sub-byte addresses count units from address 0");
}

#[test]
fn test_window_bytes_round_trip_through_host_ram() {
    host::reset();
    FREE_RAM.write(0, b"TIC").unwrap();
    let mut buf = [0u8; 3];
    FREE_RAM.read(0, &mut buf).unwrap();

    assert_eq!(&buf, b"TIC");
    assert_eq!(host::ram(0x18000, 3), b"TIC".to_vec());
    assert_eq!(FREE_RAM.peek(2).unwrap(), b'C');

    IO_RAM.poke(layout::BORDER_COLOR.base, 3).unwrap();
    assert_eq!(host::ram(0x3ff8, 1), vec![3]);
}

#[test]
fn test_window_rejects_out_of_range_before_calling_host() {
    println!("=== Testing window bounds checks ===");
    host::reset();
    let err = IO_RAM.poke(0x18000, 1).unwrap_err();
    println!("Error: {}", err);
    assert_eq!(
        err,
        OutOfRange {
            region: "IO_RAM",
            offset: 0x18000,
            len: 1
        }
    );

    assert!(FREE_RAM.peek(0x28000).is_err());
    assert!(FREE_RAM.write(0x27ffe, b"abc").is_err());
    assert!(FREE_RAM.read(u32::MAX, &mut [0u8; 2]).is_err());
    assert!(FREE_RAM.fill(0x27fff, 0, 2).is_err());
    assert!(FREE_RAM.peek_bits(FREE_RAM.region().units(BitWidth::One), BitWidth::One).is_err());
    assert_eq!(FREE_RAM.copy_within(0, 0x27ffe, 4).unwrap_err().offset, 0x27ffe);

    assert!(host::calls().is_empty());
    println!("✓ No host call made for any rejected access");
}

#[test]
fn test_window_sub_byte_units() {
    host::reset();
    FREE_RAM.poke_bits(3, BitWidth::Two, 0b111).unwrap();
    assert_eq!(host::ram(0x18000, 1), vec![0xc0]);
    assert_eq!(FREE_RAM.peek_bits(3, BitWidth::Two).unwrap(), 0b11);

    IO_RAM.poke_bits(1, BitWidth::Four, 0x9).unwrap();
    assert_eq!(IO_RAM.peek_bits(1, BitWidth::Four).unwrap(), 0x9);
    assert_eq!(host::ram(0, 1), vec![0x90]);

    let calls = host::take_calls();
    assert_eq!(calls[0], HostCall::Poke { address: 0x60003, value: 0b11, bits: 2 });
}

#[test]
fn test_window_fill_and_copy_use_bulk_primitives() {
    println!("=== Testing fill/copy_within ===");
    host::reset();
    FREE_RAM.fill(16, 0x5a, 4).unwrap();
    FREE_RAM.write(0, &[1, 2, 3, 4]).unwrap();
    host::take_calls();

    FREE_RAM.copy_within(0, 8, 4).unwrap();
    assert_eq!(
        host::ram(0x18000, 20),
        vec![1, 2, 3, 4, 0, 0, 0, 0, 1, 2, 3, 4, 0, 0, 0, 0, 0x5a, 0x5a, 0x5a, 0x5a]
    );
    assert_eq!(
        host::take_calls(),
        vec![HostCall::Memcpy { destination: 0x18008, source: 0x18000, length: 4 }]
    );

    tic80::memset(0x18100, 7, 2);
    tic80::memcpy(0x18200, 0x18100, 2);
    assert_eq!(host::ram(0x18200, 2), vec![7, 7]);
    println!("✓ One memcpy/memset per bulk operation");
}

#[test]
fn test_window_addresses() {
    assert_eq!(IO_RAM.address(0x3ff8), Ok(0x3ff8));
    assert_eq!(FREE_RAM.address(0), Ok(0x18000));
    assert_eq!(FREE_RAM.address(0x27fff), Ok(0x3ffff));
    assert!(FREE_RAM.address(0x28000).is_err());
    assert_eq!(IO_RAM.name(), "IO_RAM");
    assert_eq!(FREE_RAM.base() + FREE_RAM.size(), 0x40000);
}

#[test]
fn test_window_dump_traces_hex_rows() {
    println!("=== Testing dump ===");
    host::reset();
    let bytes: Vec<u8> = (0..20).collect();
    FREE_RAM.write(0x100, &bytes).unwrap();
    host::take_calls();

    FREE_RAM.dump(0x100, 20).unwrap();
    let traces: Vec<HostCall> = host::take_calls()
        .into_iter()
        .filter(|call| matches!(call, HostCall::Trace { .. }))
        .collect();
    for trace in &traces {
        println!("  {:?}", trace);
    }
    assert_eq!(
        traces,
        vec![
            HostCall::Trace {
                message: b"FREE_RAM+00100: 000102030405060708090a0b0c0d0e0f".to_vec(),
                color: 13,
            },
            HostCall::Trace { message: b"FREE_RAM+00110: 10111213".to_vec(), color: 13 },
        ]
    );
    assert!(FREE_RAM.dump(0x27ff0, 32).is_err());
    println!("✓ 16 bytes per console line");
}
