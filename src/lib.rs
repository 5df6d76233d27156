//! Lock-free SPSC FIFO ring buffer for handoff between two free-running
//! execution contexts.
//!
//! Each side keeps a monotonic position counter in Gray code; the codes are
//! the only cross-context shared state and cross through a two-stage relay,
//! so neither side ever observes a torn status or blocks the other.
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod alias;
pub mod boundary;
pub mod counter;
pub mod gray;
pub mod halves;
pub mod rb;
pub mod relay;
pub mod storage;
pub mod traits;
mod utils;

#[cfg(test)]
mod tests;

pub use alias::*;
pub use rb::CrossRb;
