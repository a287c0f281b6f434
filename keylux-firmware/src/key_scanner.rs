use core::sync::atomic;
use core::sync::atomic::Ordering::Relaxed;

use crate::{frame_pool::FramePool, hid::ReportSink, key_reporter::Reporter, layout};

/// Encoded switch coordinate: low nibble column, high nibble row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixPos(u8);

impl MatrixPos {
    pub const fn new(column: u8, row: u8) -> Self {
        Self((column & 0xf) | (row << 4))
    }

    pub const fn column(self) -> usize {
        (self.0 & 0xf) as usize
    }

    pub const fn row(self) -> usize {
        (self.0 >> 4) as usize
    }

    /// Index into the layout tables.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Authoritative key-state snapshot plus the activity flip-flop pair.
///
/// Column masks are written only by the scan callback; the encoder callback
/// and foreground macro/idle logic read them. Every access is a single
/// atomic word, so the interleaving of the three interrupt sources never
/// needs a lock.
pub struct Matrix {
    columns: [atomic::AtomicU16; layout::COLUMN_COUNT],
    toggle_a: atomic::AtomicU8,
    toggle_b: atomic::AtomicU8,
}

impl Matrix {
    pub const fn new() -> Self {
        const CLEAR: atomic::AtomicU16 = atomic::AtomicU16::new(0);
        Self {
            columns: [CLEAR; layout::COLUMN_COUNT],
            toggle_a: atomic::AtomicU8::new(0),
            toggle_b: atomic::AtomicU8::new(0),
        }
    }

    /// Was this switch pressed as of the most recent sample of its column?
    pub fn is_key_held(&self, pos: MatrixPos) -> bool {
        let column = pos.column();
        column < layout::COLUMN_COUNT && self.columns[column].load(Relaxed) >> pos.row() & 1 == 1
    }

    /// Record that raw input happened. Bursts between polls collapse into
    /// one notification.
    pub(crate) fn mark_activity(&self) {
        self.toggle_b.store(!self.toggle_a.load(Relaxed), Relaxed);
    }

    /// Edge-triggered poll; true at most once per activity burst.
    pub fn check_recent_activity(&self) -> bool {
        let b = self.toggle_b.load(Relaxed);
        if self.toggle_a.load(Relaxed) == b {
            false
        } else {
            self.toggle_a.store(b, Relaxed);
            true
        }
    }

    pub(crate) fn column_mask(&self, column: usize) -> u16 {
        self.columns[column].load(Relaxed)
    }

    pub(crate) fn store_column(&self, column: usize, mask: u16) {
        self.columns[column].store(mask, Relaxed);
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumes raw per-column samples: detects press/release edges, mirrors
/// every edge into the foreground lighting, and flushes both input reports
/// once per full sweep.
pub struct KeyScanner<'a, S: ReportSink> {
    matrix: &'a Matrix,
    lights: &'a FramePool,
    reporter: Reporter<'a, S>,
}

impl<'a, S: ReportSink> KeyScanner<'a, S> {
    pub fn new(matrix: &'a Matrix, lights: &'a FramePool, reporter: Reporter<'a, S>) -> Self {
        Self {
            matrix,
            lights,
            reporter,
        }
    }

    /// One raw sample for one column, one call per column per sweep.
    ///
    /// Edits to the reports accumulate silently; the sample for the last
    /// column submits both as one consistent pair, so the host observes at
    /// most one report pair per sweep.
    pub fn sample(&mut self, column: u8, raw_mask: u16) {
        let column = column as usize;
        if column >= layout::COLUMN_COUNT {
            return;
        }
        if raw_mask != 0 {
            // Held state counts as activity, not just fresh edges.
            self.matrix.mark_activity();
        }

        let mut changed = raw_mask ^ self.matrix.column_mask(column);
        self.matrix.store_column(column, raw_mask);

        let mut row = 0;
        while changed != 0 {
            if changed & 1 != 0 {
                let pos = MatrixPos::new(column as u8, row);
                if raw_mask >> row & 1 == 1 {
                    self.key_down(pos);
                } else {
                    self.key_up(pos);
                }
            }
            changed >>= 1;
            row += 1;
        }

        if column == layout::COLUMN_COUNT - 1 {
            self.reporter.flush();
        }
    }

    fn key_down(&mut self, pos: MatrixPos) {
        if pos.index() > layout::POSITION_MAX as usize {
            return;
        }
        self.lights.set_key_rgb(pos, 0xff, 0xff, 0xff);
        self.reporter.key_down(layout::key_code(pos));
    }

    fn key_up(&mut self, pos: MatrixPos) {
        if pos.index() > layout::POSITION_MAX as usize {
            return;
        }
        self.lights.set_key_rgb(pos, 0, 0, 0);
        self.reporter.key_up(layout::key_code(pos));
    }
}

#[cfg(test)]
#[path = "key_scanner_test.rs"]
mod test;
