//! Per-side position counters.

use crate::gray;
use core::{
    num::NonZeroUsize,
    sync::atomic::{AtomicUsize, Ordering},
};
use crossbeam_utils::CachePadded;

/// Monotonic position counter of one side of the buffer.
///
/// Keeps the plain binary count and its Gray encoding in lock-step. The
/// counter runs modulo `2 * capacity`: the bit above the address bits tells
/// "one more lap" apart from "same lap", which is what lets both full and
/// empty reduce to a code comparison.
///
/// The owning side is the only writer. A remote reader observes nothing but
/// the Gray code, so the pair can never be seen mixed between two positions.
/// The code is published with `Release` ordering so that everything written
/// before an advance is visible to a remote `Acquire` sampler.
pub struct PosCounter {
    modulus: NonZeroUsize,
    bin: CachePadded<AtomicUsize>,
    gray: CachePadded<AtomicUsize>,
}

impl PosCounter {
    /// `modulus` is twice the buffer capacity and must be a power of two.
    pub fn new(modulus: NonZeroUsize) -> Self {
        debug_assert!(modulus.get().is_power_of_two());
        Self {
            modulus,
            bin: CachePadded::new(AtomicUsize::new(0)),
            gray: CachePadded::new(AtomicUsize::new(0)),
        }
    }

    #[inline]
    pub fn modulus(&self) -> NonZeroUsize {
        self.modulus
    }

    /// Binary position. Meaningful only on the owning side.
    #[inline]
    pub fn bin(&self) -> usize {
        self.bin.load(Ordering::Relaxed)
    }

    /// Published Gray code, safe to sample from the remote side.
    #[inline]
    pub fn gray(&self) -> usize {
        self.gray.load(Ordering::Acquire)
    }

    /// Gray code as read back by the owning side itself.
    #[inline]
    pub fn gray_local(&self) -> usize {
        self.gray.load(Ordering::Relaxed)
    }

    /// Moves the position one step forward and publishes the new code.
    ///
    /// The caller is responsible for refusing the advance while blocked;
    /// the counter itself never checks.
    ///
    /// # Safety
    ///
    /// Only the owning side may advance, and never concurrently.
    pub unsafe fn advance(&self) {
        let bin = (self.bin() + 1) & (self.modulus.get() - 1);
        self.bin.store(bin, Ordering::Relaxed);
        self.gray.store(gray::encode(bin), Ordering::Release);
    }

    /// Forces the position back to zero.
    ///
    /// # Safety
    ///
    /// Same constraint as [`advance`](Self::advance).
    pub unsafe fn reset(&self) {
        self.bin.store(0, Ordering::Relaxed);
        self.gray.store(0, Ordering::Release);
    }
}
