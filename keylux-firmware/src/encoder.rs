use core::sync::atomic;
use core::sync::atomic::Ordering::Relaxed;

use crate::{frame_pool::FramePool, key_scanner::Matrix, layout};

/// Free-running rotary accumulator, sampled into the extra report at each
/// sweep flush. Never reset; the host tracks it as a wrapping position.
pub struct Wheel(atomic::AtomicU8);

impl Wheel {
    pub const fn new() -> Self {
        Self(atomic::AtomicU8::new(0))
    }

    pub(crate) fn add(&self, delta: i8) {
        self.0.fetch_add(delta as u8, Relaxed);
    }

    pub fn value(&self) -> u8 {
        self.0.load(Relaxed)
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes the rotary control value into brightness adjustments or wheel
/// movement merged into the extra report.
pub struct Encoder<'a> {
    matrix: &'a Matrix,
    lights: &'a FramePool,
    wheel: &'a Wheel,
    last_value: u8,
}

impl<'a> Encoder<'a> {
    pub fn new(matrix: &'a Matrix, lights: &'a FramePool, wheel: &'a Wheel) -> Self {
        Self {
            matrix,
            lights,
            wheel,
            last_value: 0,
        }
    }

    /// One raw sample of the incrementing control value.
    ///
    /// The delta only reaches the host at the next sweep flush; encoder
    /// movement never triggers a report of its own.
    pub fn sample(&mut self, value: u8) {
        let delta = value.wrapping_sub(self.last_value) as i8;
        if delta == 0 {
            return;
        }
        self.last_value = value;
        self.matrix.mark_activity();

        if self.matrix.is_key_held(layout::LIGHT_KEY) {
            self.lights.adjust_brightness(delta as i16 * 2);
        } else {
            self.wheel.add(delta);
        }
    }
}

#[cfg(test)]
#[path = "encoder_test.rs"]
mod test;
