use core::panic::Location;

use tic80::host::{self, HostCall};
use tic80::log::{self, ConsoleLine, LINE_CAPACITY};
use tic80::panic::{PANIC_COLOR, panic_line};

#[test]
fn test_trace_macro_formats_and_colors() {
    println!("=== Testing trace! ===");
    host::reset();
    let score = 42;
    tic80::trace!("score {}", score);
    tic80::trace!(color = 18; "x={} y={}", 1, 2);
    tic80::trace!("naïve {}", "ø");

    assert_eq!(
        host::take_calls(),
        vec![
            HostCall::Trace { message: b"score 42".to_vec(), color: 15 },
            HostCall::Trace { message: b"x=1 y=2".to_vec(), color: 2 },
            HostCall::Trace { message: b"na?ve ?".to_vec(), color: 15 },
        ]
    );
    println!("✓ Formatted, encoded and colored");
}

#[test]
fn test_long_lines_are_truncated() {
    host::reset();
    let long = "a".repeat(400);
    tic80::trace!("{}", long);

    match &host::take_calls()[0] {
        HostCall::Trace { message, .. } => {
            assert_eq!(message.len(), LINE_CAPACITY - 1);
            assert!(message.iter().all(|b| *b == b'a'));
        }
        other => panic!("expected a trace, got {:?}", other),
    }
}

#[test]
fn test_trace_hex() {
    host::reset();
    log::trace_hex("ROM", 0x10, &[0xde, 0xad, 0xbe, 0xef], 4);
    log::trace_hex("ROM", 0, &[], 4);
    assert_eq!(
        host::take_calls(),
        vec![HostCall::Trace { message: b"ROM+00010: deadbeef".to_vec(), color: 4 }]
    );

    let bytes: Vec<u8> = (0u8..18).collect();
    log::trace_hex("RAM", 0x100, &bytes, 13);
    let lines: Vec<Vec<u8>> = host::take_calls()
        .into_iter()
        .filter_map(|call| match call {
            HostCall::Trace { message, .. } => Some(message),
            _ => None,
        })
        .collect();
    assert_eq!(
        lines,
        vec![
            b"RAM+00100: 000102030405060708090a0b0c0d0e0f".to_vec(),
            b"RAM+00110: 1011".to_vec(),
        ]
    );
}

#[test]
fn test_console_line() {
    use core::fmt::Write;

    host::reset();
    let mut line = ConsoleLine::new();
    write!(line, "{}-{}", "tic", 80).unwrap();
    assert_eq!(line.as_bytes(), b"tic-80");
    assert!(!line.is_full());
    line.send(3);

    assert_eq!(
        host::take_calls(),
        vec![HostCall::Trace { message: b"tic-80".to_vec(), color: 3 }]
    );
}

#[test]
fn test_panic_report_format() {
    println!("=== Testing panic report formatting ===");
    let location = Location::caller();
    let line = panic_line(Some(location), &"out of tiles");
    let text = String::from_utf8(line.as_bytes().to_vec()).unwrap();
    println!("Report: {}", text);

    assert!(text.starts_with("panic at "));
    assert!(text.contains(location.file()));
    assert!(text.ends_with(": out of tiles"));

    let bare = panic_line(None, &format_args!("bad sprite {}", 600));
    assert_eq!(bare.as_bytes(), b"bad sprite 600");
    assert_eq!(PANIC_COLOR, 2);
    println!("✓ Location prefix and message");
}

#[test]
#[should_panic(expected = "cart_panic: out of tiles")]
fn test_cart_panic_on_host() {
    tic80::panic::cart_panic("out of tiles");
}
