//! Input-report wire layout shared with host-side tools.
//!
//! Both reports are 8 bytes. The standard report follows the HID boot
//! keyboard shape: modifier bitmask, reserved byte, then up to six usage
//! codes in press order with 0 terminating the list. The extra report
//! carries the extended-key bitmask in byte 0 and the rotary accumulator in
//! byte 2; the remaining bytes are reserved.

/// Endpoint index for the standard boot-keyboard report.
pub const KEYBOARD_ENDPOINT: u8 = 0;
/// Endpoint index for the extra-keys/rotary report.
pub const EXTRA_ENDPOINT: u8 = 1;

pub const REPORT_LEN: usize = 8;

/// Rollover capacity of the standard report.
pub const KEY_SLOTS: usize = 6;

pub const MODIFIER_BYTE: usize = 0;
pub const FIRST_KEY_SLOT: usize = 2;

pub const EXTRA_KEYS_BYTE: usize = 0;
pub const WHEEL_BYTE: usize = 2;
