//! Full and empty detection from Gray-coded positions.

use crate::gray;
use core::sync::atomic::{AtomicBool, Ordering};

/// Consumer-side comparison: the buffer is empty when the consumer has
/// caught up with the last producer position the relay has delivered.
#[inline]
pub fn is_empty(local: usize, relayed: usize) -> bool {
    local == relayed
}

/// Producer-side comparison: the buffer is full when the position the next
/// write would land at sits a whole buffer ahead of the relayed consumer
/// position. Counters a full buffer apart differ by half the counter space,
/// which the encoding turns into a fixed flip of the top two code bits;
/// undoing that flip reduces the check to equality.
#[inline]
pub fn is_full(local: usize, relayed: usize, width: u32) -> bool {
    local == gray::wrap_offset(relayed, width)
}

/// Registered status flag of one side.
///
/// The owning side recomputes its condition on every step and latches the
/// result here; observers read the latch and never a transient
/// recomputation.
pub struct Flag(AtomicBool);

impl Flag {
    pub const fn new(init: bool) -> Self {
        Self(AtomicBool::new(init))
    }

    #[inline]
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// # Safety
    ///
    /// Only the owning side may latch, and never concurrently.
    #[inline]
    pub unsafe fn latch(&self, value: bool) {
        self.0.store(value, Ordering::Relaxed);
    }
}
