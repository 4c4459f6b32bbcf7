use core::fmt::{self, Write};
use core::panic::Location;

use crate::log::ConsoleLine;

/// Console color for panic reports.
pub const PANIC_COLOR: i8 = 2;

/// Formats a panic report the way the guest panic handler prints it.
pub fn panic_line(location: Option<&Location<'_>>, message: &dyn fmt::Display) -> ConsoleLine {
    let mut line = ConsoleLine::new();
    if let Some(location) = location {
        let _ = write!(
            &mut line,
            "panic at {}:{}:{}: ",
            location.file(),
            location.line(),
            location.column()
        );
    }
    let _ = write!(&mut line, "{}", message);
    line
}

/// Reports `msg` on the console and stops the cart.
#[cfg(target_arch = "wasm32")]
pub fn cart_panic(msg: &str) -> ! {
    panic_line(None, &msg).send(PANIC_COLOR);
    unsafe { crate::sys::exit() };
    core::arch::wasm32::unreachable()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cart_panic(msg: &str) -> ! {
    panic!("cart_panic: {}", msg);
}

#[cfg(all(target_arch = "wasm32", feature = "guest_handlers"))]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    panic_line(info.location(), &info.message()).send(PANIC_COLOR);
    unsafe { crate::sys::exit() };
    core::arch::wasm32::unreachable()
}
