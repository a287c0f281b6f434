use core::sync::atomic;
use core::sync::atomic::Ordering::Relaxed;

use crate::{
    key_scanner::MatrixPos,
    layout::{self, KeyLed},
};

/// Words per DMA page; one color plane.
pub const PAGE_WORDS: usize = 256;
/// Color planes per frame.
pub const PLANE_COUNT: usize = 3;
/// Frame buffers in the pool; index 0 is the foreground buffer.
pub const BUFFER_COUNT: usize = 4;

/// Hardware floor; the LED chain misbehaves when driven darker.
pub const BRIGHTNESS_MIN: u8 = 25;
pub const BRIGHTNESS_MAX: u8 = 255;
const BRIGHTNESS_DEFAULT: u8 = 32;

/// One 256-word color plane.
///
/// Word writes are atomic: a pixel written while its buffer streams is
/// picked up a page or two late, never torn mid-word.
pub struct Plane([atomic::AtomicU16; PAGE_WORDS]);

impl Plane {
    const fn new() -> Self {
        const CLEAR: atomic::AtomicU16 = atomic::AtomicU16::new(0);
        Self([CLEAR; PAGE_WORDS])
    }

    pub fn load(&self, offset: usize) -> u16 {
        self.0[offset].load(Relaxed)
    }

    fn store(&self, offset: usize, word: u16) {
        self.0[offset].store(word, Relaxed);
    }
}

/// Protocol control words consumed by the LED driver chain, seeded into the
/// stride-16 slots of plane 0. Pixel offsets never land on a stride-16
/// slot, so pixel writes cannot clobber these.
const PLANE0_CONTROL: [u16; 16] = [
    0xa035, 0xa115, 0xa225, 0xa335, 0xa445, 0xa555, 0xa665, 0xa775, 0xa885, 0xa995, 0xa0a5, 0xa0b5,
    0xa0c5, 0xa0d5, 0x00e6, 0x0006,
];

struct FrameBuffer {
    planes: [Plane; PLANE_COUNT],
}

impl FrameBuffer {
    const fn new() -> Self {
        Self {
            planes: [Plane::new(), Plane::new(), Plane::new()],
        }
    }

    fn seed_control_words(&self) {
        for (i, word) in PLANE0_CONTROL.iter().enumerate() {
            self.planes[0].store(i << 4, *word);
        }
        self.planes[1].store(224, 0x00e5);
        self.planes[1].store(240, 0x0005);
        self.planes[2].store(224, 0x00e3);
        self.planes[2].store(240, 0x0003);
    }

    fn set_pixel(&self, offset: usize, words: [u16; PLANE_COUNT]) {
        for (plane, word) in self.planes.iter().zip(words) {
            plane.store(offset, word);
        }
    }
}

/// Word offset of an LED id within each plane. The low nibble of the result
/// is always at least 7, clear of the control slots.
const fn frame_offset(id: u8) -> usize {
    (((id & 0xf) as usize) << 4) + ((id >> 4) as usize) + 7
}

/// Four-buffer frame pool.
///
/// Buffer 0 always mirrors direct key/indicator state and is written at any
/// time, including while it streams. Buffers 1-3 hold whole effect frames
/// handed from a producer to the transmitter through the checkout/commit
/// protocol: neither side ever blocks, checkout rejects instead of waiting,
/// and the transmitter switches buffers only at frame boundaries.
pub struct FramePool {
    buffers: [FrameBuffer; BUFFER_COUNT],
    /// Buffer the transmitter is streaming.
    current: atomic::AtomicU8,
    /// Ready bits over buffers 1-3: frames queued for display.
    ready: atomic::AtomicU8,
    brightness: atomic::AtomicU8,
}

impl FramePool {
    pub const fn new() -> Self {
        Self {
            buffers: [
                FrameBuffer::new(),
                FrameBuffer::new(),
                FrameBuffer::new(),
                FrameBuffer::new(),
            ],
            current: atomic::AtomicU8::new(0),
            ready: atomic::AtomicU8::new(0),
            brightness: atomic::AtomicU8::new(BRIGHTNESS_DEFAULT),
        }
    }

    /// Seed the LED-chain control words into every buffer. Called once at
    /// bring-up, before streaming starts.
    pub fn seed_control_words(&self) {
        for buffer in &self.buffers {
            buffer.seed_control_words();
        }
    }

    pub fn current(&self) -> usize {
        self.current.load(Relaxed) as usize
    }

    pub fn plane(&self, buffer: usize, plane: usize) -> &Plane {
        &self.buffers[buffer].planes[plane]
    }

    pub fn brightness(&self) -> u8 {
        self.brightness.load(Relaxed)
    }

    /// Saturating brightness adjustment within the hardware range.
    pub fn adjust_brightness(&self, delta: i16) {
        let old = self.brightness.load(Relaxed);
        let new = (old as i32 + delta as i32).clamp(BRIGHTNESS_MIN as i32, BRIGHTNESS_MAX as i32);
        self.brightness.store(new as u8, Relaxed);
    }

    fn scale(&self, components: [u8; 3]) -> [u16; 3] {
        let brightness = self.brightness.load(Relaxed) as u16;
        components.map(|c| c as u16 * brightness)
    }

    /// Raw-order write into the foreground buffer, bypassing the channel
    /// remap; for indicators whose wiring the caller already knows.
    pub fn set_led(&self, id: u8, c0: u8, c1: u8, c2: u8) {
        if id > layout::LED_ID_MAX {
            return;
        }
        self.buffers[0].set_pixel(frame_offset(id), self.scale([c0, c1, c2]));
    }

    /// Channel-remapped write into the foreground buffer.
    pub fn set_led_rgb(&self, id: u8, r: u8, g: u8, b: u8) {
        if id > layout::LED_ID_MAX {
            return;
        }
        let components = layout::channel_order(id).arrange(r, g, b);
        self.buffers[0].set_pixel(frame_offset(id), self.scale(components));
    }

    /// Light every lamp tied to a key position; decorative positions no-op.
    pub fn set_key_rgb(&self, pos: MatrixPos, r: u8, g: u8, b: u8) {
        match layout::key_led(pos) {
            KeyLed::None => {}
            KeyLed::Single(id) => self.set_led_rgb(id, r, g, b),
            KeyLed::Group(ids) => {
                for id in ids {
                    self.set_led_rgb(*id, r, g, b);
                }
            }
        }
    }

    /// Borrow an effect buffer for writing.
    ///
    /// Returns `None` when no buffer distinct from `current` is free; the
    /// producer skips this frame and retries next cycle. Calling again
    /// without committing returns the same buffer, so a single producer can
    /// never hold two.
    pub fn checkout(&self) -> Option<EffectFrame<'_>> {
        let current = self.current.load(Relaxed) as usize;
        let mut ready = self.ready.load(Relaxed);

        if current != 0 && ready == 0 {
            // Wait for the previous effect to clear out.
            return None;
        }
        if current == 0 && ready == 0b1110 {
            // Wait for the effect to start before reusing buffers.
            return None;
        }

        // Prune ready bits at and behind `current` in display order: those
        // frames were shown, or superseded without ever being shown. We
        // never hand out `current` itself below, so clearing its bit is
        // safe.
        let mut slot = current;
        while ready & 1 << slot != 0 {
            ready &= !(1 << slot);
            slot = if slot == 1 { 3 } else { slot - 1 };
        }
        self.ready.store(ready, Relaxed);

        // First unused buffer after current, wrapping 3 -> 1.
        let mut slot = current;
        loop {
            slot = if slot >= 3 { 1 } else { slot + 1 };
            if ready & 1 << slot == 0 {
                break;
            }
        }
        if slot == current {
            // Only current itself is unused.
            return None;
        }
        Some(EffectFrame {
            pool: self,
            index: slot as u8,
        })
    }

    /// Drop every queued effect frame; the transmitter returns to the
    /// foreground buffer at the next frame boundary.
    pub fn clear_effects(&self) {
        self.ready.store(0, Relaxed);
    }

    /// Transmitter-side buffer switch at a full-frame boundary: nearest
    /// ready buffer forward of `current` (wrapping 3 -> 1), or the
    /// foreground buffer when nothing is queued. Never implicitly back to
    /// the foreground while frames are queued.
    pub(crate) fn advance(&self) {
        let ready = self.ready.load(Relaxed);
        if ready == 0 {
            self.current.store(0, Relaxed);
            return;
        }
        let mut slot = self.current.load(Relaxed) as usize;
        for _ in 0..BUFFER_COUNT - 1 {
            slot = if slot >= 3 { 1 } else { slot + 1 };
            if ready & 1 << slot != 0 {
                self.current.store(slot as u8, Relaxed);
                return;
            }
        }
    }
}

impl Default for FramePool {
    fn default() -> Self {
        Self::new()
    }
}

/// A checked-out working buffer. Commit queues it for display; dropping it
/// abandons the frame and leaves the buffer free.
pub struct EffectFrame<'a> {
    pool: &'a FramePool,
    index: u8,
}

impl EffectFrame<'_> {
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Write one LED column of the working frame. `rgb` holds 16 red
    /// values, then 16 green, then 16 blue, one per LED in the column.
    pub fn set_column(&self, column: u8, rgb: &[u8; 48]) {
        if column > layout::LED_COLUMN_MAX {
            return;
        }
        let buffer = &self.pool.buffers[self.index as usize];
        let brightness = self.pool.brightness.load(Relaxed) as u16;
        let mut offset = column as usize + 7;
        for i in 0..16 {
            let id = column << 4 | i as u8;
            let components = layout::channel_order(id).arrange(rgb[i], rgb[i + 16], rgb[i + 32]);
            buffer.set_pixel(offset, components.map(|c| c as u16 * brightness));
            offset += 16;
        }
    }

    /// Queue the frame for display. Does not block and does not itself
    /// switch the streamed buffer.
    pub fn commit(self) {
        self.pool.ready.fetch_or(1 << self.index, Relaxed);
    }
}

#[cfg(test)]
#[path = "frame_pool_test.rs"]
mod test;
