#![no_std]
pub mod encoder;
pub mod firmware_functions;
pub mod frame_pool;
pub mod hid;
pub mod key_reporter;
pub mod key_scanner;
pub mod layout;
pub mod transmit;

#[cfg(any(test, feature = "test-utils"))]
pub mod led_bus_test_stub;
#[cfg(any(test, feature = "test-utils"))]
pub mod report_sink_test_stub;

#[macro_use]
mod macros;
