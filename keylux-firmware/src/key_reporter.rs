use heapless::Vec;
use keylux_common::{
    keycodes::{key_range, KeyClass},
    reports::{self, KEY_SLOTS, REPORT_LEN},
};

use crate::{
    encoder::Wheel,
    frame_pool::FramePool,
    hid::{ReportEndpoint, ReportSink},
    layout, warn,
};

/// Builds the standard and extra input reports and submits them once per
/// sweep.
///
/// The rollover list keeps press order; removal compacts the remaining
/// codes without reordering them.
pub struct Reporter<'a, S: ReportSink> {
    sink: S,
    wheel: &'a Wheel,
    keys: Vec<u8, KEY_SLOTS>,
    modifiers: u8,
    extra_keys: u8,
    overflow: bool,
}

impl<'a, S: ReportSink> Reporter<'a, S> {
    pub fn new(sink: S, wheel: &'a Wheel) -> Self {
        Self {
            sink,
            wheel,
            keys: Vec::new(),
            modifiers: 0,
            extra_keys: 0,
            overflow: false,
        }
    }

    pub fn key_down(&mut self, code: u8) {
        match KeyClass::of(code) {
            KeyClass::Unmapped => {}
            KeyClass::Basic => {
                if !self.keys.contains(&code) && self.keys.push(code).is_err() {
                    warn!("rollover overflow; reporting phantom state");
                    self.overflow = true;
                }
            }
            KeyClass::Modifier => self.modifiers |= 1 << (code & 7),
            KeyClass::Extra => self.extra_keys |= 1 << (code & 7),
        }
    }

    pub fn key_up(&mut self, code: u8) {
        match KeyClass::of(code) {
            KeyClass::Unmapped => {}
            KeyClass::Basic => {
                if let Some(i) = self.keys.iter().position(|k| *k == code) {
                    self.keys.remove(i);
                    // Any successful removal frees a slot; the flag does not
                    // wait for the specific key that overflowed.
                    self.overflow = false;
                }
            }
            KeyClass::Modifier => self.modifiers &= !(1 << (code & 7)),
            KeyClass::Extra => self.extra_keys &= !(1 << (code & 7)),
        }
    }

    /// Submit the standard and extra reports as one per-sweep pair.
    ///
    /// While the rollover list has overflowed, the standard report is
    /// replaced by the boot-protocol phantom pattern; the modifier byte is
    /// still live.
    pub fn flush(&mut self) {
        let mut report = [0u8; REPORT_LEN];
        report[reports::MODIFIER_BYTE] = self.modifiers;
        if self.overflow {
            report[reports::FIRST_KEY_SLOT..].fill(key_range::ERROR_ROLL_OVER);
        } else {
            report[reports::FIRST_KEY_SLOT..reports::FIRST_KEY_SLOT + self.keys.len()]
                .copy_from_slice(&self.keys);
        }
        self.sink.submit(ReportEndpoint::Keyboard, &report);

        let mut extra = [0u8; REPORT_LEN];
        extra[reports::EXTRA_KEYS_BYTE] = self.extra_keys;
        extra[reports::WHEEL_BYTE] = self.wheel.value();
        self.sink.submit(ReportEndpoint::Extra, &extra);
    }
}

/// Host output report: bits 0-3 drive the Num-Lock, Caps-Lock, Scroll-Lock
/// and Game-mode indicators, full white when set.
pub fn output_report(report: &[u8], lights: &FramePool) {
    static INDICATOR_LEDS: [u8; 4] = [
        layout::LED_NUM_LOCK,
        layout::LED_CAPS_LOCK,
        layout::LED_SCROLL_LOCK,
        layout::LED_GAME_MODE,
    ];

    let Some(mask) = report.first().copied() else {
        return;
    };
    for (i, id) in INDICATOR_LEDS.iter().enumerate() {
        if mask >> i & 1 == 1 {
            lights.set_led_rgb(*id, 0xff, 0xff, 0xff);
        } else {
            lights.set_led_rgb(*id, 0, 0, 0);
        }
    }
}

#[cfg(test)]
#[path = "key_reporter_test.rs"]
mod test;
