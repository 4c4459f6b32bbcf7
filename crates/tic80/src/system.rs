use types::sync::bank_index;
use types::{SyncMask, TraceOptions};

use crate::sys;
use crate::text::TextData;

/// Exchanges the banks named by `mask` between the cartridge and RAM.
/// `to_cart` writes RAM back into the cartridge; `bank` wraps into `0..8`.
pub fn sync(mask: SyncMask, bank: i32, to_cart: bool) {
    unsafe { sys::sync(mask.bits() as i32, bank_index(bank), to_cart as i8) }
}

/// Persistent memory slot access, passed through to the host unchanged.
pub fn pmem(index: i32, value: i64) -> u32 {
    unsafe { sys::pmem(index, value) }
}

/// Milliseconds since the cart started.
pub fn time() -> f32 {
    unsafe { sys::time() }
}

/// Seconds since the Unix epoch.
pub fn tstamp() -> u32 {
    unsafe { sys::tstamp() }
}

/// Writes `message` to the console. See also the `trace!` macro.
pub fn trace(message: &str, options: Option<&TraceOptions>) {
    let options = options.unwrap_or(&TraceOptions::DEFAULT);
    let message = TextData::encode(message);
    unsafe { sys::trace(message.as_ptr(), options.color()) }
}

/// Asks the host to stop the cart once the current frame returns.
pub fn exit() {
    unsafe { sys::exit() }
}
