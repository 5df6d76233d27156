//! Two-stage relay for values crossing between execution contexts.

use core::sync::atomic::{AtomicUsize, Ordering};

/// Relays a word-wide value produced in one execution context into a form
/// safely observable in another.
///
/// The destination context drives the relay: each [`step`](Self::step)
/// shifts the chain by one stage and takes a fresh sample of the source
/// value. A change committed by the source becomes visible in the settled
/// [`output`](Self::output) after exactly two destination steps, never
/// fewer. The output is always a value the source actually held at some
/// point, possibly stale, never fabricated.
///
/// The relay is not specific to counters; any control signal that fits in a
/// machine word can cross a context boundary through it.
pub struct Relay {
    stages: [AtomicUsize; 2],
}

impl Relay {
    pub const fn new(init: usize) -> Self {
        Self {
            stages: [AtomicUsize::new(init), AtomicUsize::new(init)],
        }
    }

    /// Advances the chain by one destination step.
    ///
    /// Returns the settled output after the shift.
    ///
    /// # Safety
    ///
    /// Only the destination side may step the relay, and never concurrently.
    pub unsafe fn step(&self, sample: usize) -> usize {
        let settled = self.stages[0].load(Ordering::Relaxed);
        self.stages[1].store(settled, Ordering::Relaxed);
        self.stages[0].store(sample, Ordering::Relaxed);
        settled
    }

    /// The most recently settled value.
    #[inline]
    pub fn output(&self) -> usize {
        self.stages[1].load(Ordering::Relaxed)
    }

    /// Loads both stages with `value`.
    ///
    /// # Safety
    ///
    /// Same constraint as [`step`](Self::step).
    pub unsafe fn reset(&self, value: usize) {
        self.stages[0].store(value, Ordering::Relaxed);
        self.stages[1].store(value, Ordering::Relaxed);
    }
}
