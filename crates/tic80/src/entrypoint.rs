/// Exports the callbacks TIC-80 looks up in a cart.
///
/// `tic` runs once per frame and is required. The others are optional:
/// `boot` runs once at startup, `scanline` before each screen line, `border`
/// before each border row, `overlay` after the frame is drawn and `menu` when
/// a game menu item is picked.
///
/// ```ignore
/// fn frame() { tic80::cls(0) }
/// fn setup() { tic80::trace!("ready") }
/// fn raster(line: i32) { tic80::poke(0x3ff9, line as u8) }
///
/// tic80::cart!(tic: frame, boot: setup, scanline: raster);
/// ```
#[macro_export]
macro_rules! cart {
    (
        tic: $tic:path
        $(, boot: $boot:path)?
        $(, scanline: $scanline:path)?
        $(, border: $border:path)?
        $(, overlay: $overlay:path)?
        $(, menu: $menu:path)?
        $(,)?
    ) => {
        #[allow(non_snake_case)]
        #[unsafe(no_mangle)]
        pub extern "C" fn TIC() {
            $tic()
        }

        $(
            #[allow(non_snake_case)]
            #[unsafe(no_mangle)]
            pub extern "C" fn BOOT() {
                $boot()
            }
        )?

        $(
            #[allow(non_snake_case)]
            #[unsafe(no_mangle)]
            pub extern "C" fn SCN(line: i32) {
                $scanline(line)
            }
        )?

        $(
            #[allow(non_snake_case)]
            #[unsafe(no_mangle)]
            pub extern "C" fn BDR(row: i32) {
                $border(row)
            }
        )?

        $(
            #[allow(non_snake_case)]
            #[unsafe(no_mangle)]
            pub extern "C" fn OVR() {
                $overlay()
            }
        )?

        $(
            #[allow(non_snake_case)]
            #[unsafe(no_mangle)]
            pub extern "C" fn MENU(index: i32) {
                $menu(index)
            }
        )?
    };
}
