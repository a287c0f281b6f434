use core::sync::atomic;
use core::sync::atomic::Ordering::Relaxed;

use crate::{
    debug,
    frame_pool::{FramePool, Plane, PLANE_COUNT},
};

/// Words in a one-shot control burst.
pub const CONTROL_WORDS: usize = 16;

/// One transfer per transmission tick: a pixel page handed to the DMA
/// channel, or a pending control burst.
pub trait LedBus {
    fn stream_page(&mut self, words: &Plane);
    fn send_control(&mut self, packet: &[u16; CONTROL_WORDS]);
}

/// Per-tick streaming state machine: three pages per frame, buffer switch
/// at the frame boundary.
///
/// A requested control burst suspends pixel streaming for exactly one tick;
/// the page counter is untouched, so streaming resumes where it left off.
pub struct Transmitter {
    page: usize,
    /// Pending control word; zero means streaming mode.
    control: atomic::AtomicU16,
}

impl Transmitter {
    pub const fn new() -> Self {
        Self {
            page: 0,
            control: atomic::AtomicU16::new(0),
        }
    }

    /// Queue a start packet; the next tick sends it instead of a page.
    pub fn request_start_packet(&self, value: u16) {
        self.control.store(value << 4 | 0x8, Relaxed);
    }

    /// Invoked once per hardware tick.
    pub fn tick<B: LedBus>(&mut self, bus: &mut B, pool: &FramePool) {
        let control = self.control.swap(0, Relaxed);
        if control != 0 {
            debug!("led control burst {}", control);
            bus.send_control(&[control; CONTROL_WORDS]);
            return;
        }

        bus.stream_page(pool.plane(pool.current(), self.page));
        self.page += 1;
        if self.page >= PLANE_COUNT {
            self.page = 0;
            pool.advance();
        }
    }
}

impl Default for Transmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "transmit_test.rs"]
mod test;
