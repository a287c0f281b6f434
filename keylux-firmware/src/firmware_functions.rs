//! Functions specific to the firmware.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::CriticalSectionMutex;

pub type ResetFn = &'static (dyn Fn() + Sync);

static RESET: CriticalSectionMutex<RefCell<Option<ResetFn>>> =
    CriticalSectionMutex::new(RefCell::new(None));

pub fn reset() {
    RESET.lock(|r| {
        if let Some(f) = r.borrow_mut().take() {
            f();
        }
    });
}

/// Register the function that will reset the MCU when [reset] is called.
///
/// ```
/// use keylux_firmware::firmware_functions::handle_reset;
///
/// fn myreset() {
///     // cortex_m::peripheral::SCB::sys_reset()
/// }
///
/// handle_reset(Some(&myreset));
/// ```
pub fn handle_reset(value: Option<ResetFn>) {
    RESET.lock(|r| {
        *r.borrow_mut() = value;
    });
}

#[cfg(all(not(test), feature = "reset-on-panic", target_os = "none"))]
mod panic {
    #[panic_handler]
    fn panic(_info: &core::panic::PanicInfo) -> ! {
        super::reset();

        loop {}
    }
}
