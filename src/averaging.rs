//! Per-channel smoothing of raw conversion codes.
//!
//! Each channel may carry a fixed-capacity ring of its most recent raw
//! codes. New codes overwrite the oldest slot and the reported value is the
//! arithmetic mean over every slot. Slots start at zero, so until `depth`
//! samples have been collected the mean is dragged toward zero; averages are
//! meaningful once the ring has warmed up.

use heapless::Vec;

/// Upper bound on the per-channel averaging depth. Requests beyond this are
/// clamped.
pub const MAX_AVERAGING_DEPTH: usize = 16;

/// Overwrite-oldest ring of the most recent raw codes for one channel.
///
/// A ring with fewer than two slots is disabled: reads pass through
/// unmodified.
#[derive(Debug, Default)]
pub(crate) struct AveragingBuffer {
    slots: Vec<u16, MAX_AVERAGING_DEPTH>,
    cursor: usize,
}

impl AveragingBuffer {
    /// Configured depth; 0 when disabled.
    pub fn depth(&self) -> usize {
        self.slots.len()
    }

    /// Whether reads should go through the ring.
    pub fn is_enabled(&self) -> bool {
        self.slots.len() > 1
    }

    /// Configure `depth` zero-initialized slots, clamped to
    /// [`MAX_AVERAGING_DEPTH`], and restart the write cursor.
    ///
    /// A depth of 0 or 1 means "no averaging" and leaves any existing ring
    /// untouched; use [`disable`](Self::disable) to actually release it.
    pub fn enable(&mut self, depth: usize) {
        if depth <= 1 {
            return;
        }
        let depth = if depth > MAX_AVERAGING_DEPTH {
            MAX_AVERAGING_DEPTH
        } else {
            depth
        };
        self.slots.clear();
        self.cursor = 0;
        // Cannot fail: depth was clamped to the backing capacity.
        let _ = self.slots.resize(depth, 0);
    }

    /// Release the ring. Idempotent: disabling a disabled ring does nothing.
    pub fn disable(&mut self) {
        if !self.is_enabled() {
            return;
        }
        self.slots.clear();
        self.cursor = 0;
    }

    /// Zero every slot without changing the configured depth.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = 0;
        }
    }

    /// Overwrite the oldest slot with `code`; the cursor wraps at depth.
    pub fn push(&mut self, code: u16) {
        if let Some(slot) = self.slots.get_mut(self.cursor) {
            *slot = code;
        }
        self.cursor += 1;
        if self.cursor >= self.slots.len() {
            self.cursor = 0;
        }
    }

    /// Arithmetic mean over every slot, zero-initialized slots included.
    pub fn mean(&self) -> f32 {
        if self.slots.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.slots.iter().map(|&code| u32::from(code)).sum();
        sum as f32 / self.slots.len() as f32
    }
}
