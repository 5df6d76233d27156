//! The buffer controller: counters, relays and flags around the storage.

use crate::{
    boundary::{self, Flag},
    counter::PosCounter,
    gray,
    halves::{Cons, Prod},
    relay::Relay,
    storage::{Container, Storage},
    traits::{Consumer, Observer, Producer, RingBuffer, Split, SplitRef},
    utils,
};
#[cfg(feature = "alloc")]
use alloc::sync::Arc;
use core::{
    num::NonZeroUsize,
    sync::atomic::{AtomicBool, Ordering},
};
use crossbeam_utils::CachePadded;

/// State of one side: its position counter, the inbound relay carrying the
/// other side's code, and its latched boundary flag.
struct Side {
    counter: PosCounter,
    relay: Relay,
    flag: Flag,
    held: AtomicBool,
}

impl Side {
    fn new(modulus: NonZeroUsize, blocked_at_reset: bool) -> Self {
        Self {
            counter: PosCounter::new(modulus),
            relay: Relay::new(0),
            flag: Flag::new(blocked_at_reset),
            held: AtomicBool::new(false),
        }
    }

    /// Runs the inbound relay through its two-step settling delay, taking a
    /// fresh sample of the remote side's published code at each step, and
    /// returns the settled value.
    ///
    /// # Safety
    ///
    /// Owning side only, never concurrently.
    unsafe fn settle(&self, remote: &PosCounter) -> usize {
        self.relay.step(remote.gray());
        self.relay.step(remote.gray())
    }

    /// # Safety
    ///
    /// Owning side only (or exclusive access), never concurrently.
    unsafe fn reset(&self, blocked: bool) {
        self.counter.reset();
        self.relay.reset(0);
        self.flag.latch(blocked);
    }
}

/// Bounded SPSC FIFO shared between two free-running execution contexts.
///
/// Capacity must be a power of two of at least 2: position counters run
/// modulo `2 * capacity` and the Gray wrap arithmetic is only exact when
/// that modulus is a power of two.
///
/// Note that there is no explicit requirement of `T: Send`. The buffer works
/// just fine with `T: !Send` until you try to send its producer or consumer
/// to another thread.
#[cfg_attr(
    feature = "std",
    doc = r##"
```
use crossrb::{HeapRb, traits::*};
use std::thread;

let rb = HeapRb::<i32>::new(256);
let (mut prod, mut cons) = rb.split();
thread::spawn(move || {
    prod.try_push(123).unwrap();
})
.join();
thread::spawn(move || {
    loop {
        if let Some(msg) = cons.try_pop() {
            assert_eq!(msg, 123);
            break;
        }
    }
})
.join();
```
"##
)]
pub struct CrossRb<T, C: Container<T>> {
    storage: Storage<T, C>,
    write: CachePadded<Side>,
    read: CachePadded<Side>,
}

impl<T, C: Container<T>> CrossRb<T, C> {
    /// Constructs the buffer over `container`, one slot per item.
    ///
    /// *Panics if the container length is not a power of two of at least 2.*
    pub fn from_container(container: C) -> Self {
        let storage = Storage::new(container);
        let len = storage.len().get();
        assert!(
            len.is_power_of_two() && len >= 2,
            "capacity must be a power of two of at least 2, got {}",
            len,
        );
        let modulus = unsafe { NonZeroUsize::new_unchecked(2 * len) };
        Self {
            storage,
            write: CachePadded::new(Side::new(modulus, false)),
            read: CachePadded::new(Side::new(modulus, true)),
        }
    }

    /// Counter width in bits: address bits plus the lap bit.
    #[inline]
    fn width(&self) -> u32 {
        self.write.counter.modulus().get().trailing_zeros()
    }

    #[inline]
    fn addr_mask(&self) -> usize {
        self.capacity().get() - 1
    }

    /// Drops all resident items. Positions are not rewound.
    pub fn clear(&mut self) {
        while unsafe { self.pop() }.is_some() {}
    }

    /// Forces the buffer back to its initial state: both counters at zero,
    /// empty latched `true`, full latched `false`. Resident items are
    /// dropped.
    pub fn reset(&mut self) {
        self.clear();
        unsafe {
            self.write.reset(false);
            self.read.reset(true);
        }
    }
}

impl<T, C: Container<T>> Observer for CrossRb<T, C> {
    type Item = T;

    #[inline]
    fn capacity(&self) -> NonZeroUsize {
        self.storage.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.read.flag.get()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.write.flag.get()
    }

    fn occupied_len(&self) -> usize {
        let modulus = self.write.counter.modulus().get();
        let wbin = gray::decode(self.write.counter.gray());
        let rbin = gray::decode(self.read.counter.gray());
        (modulus + wbin - rbin) & (modulus - 1)
    }

    #[inline]
    fn read_is_held(&self) -> bool {
        self.read.held.load(Ordering::Relaxed)
    }

    #[inline]
    fn write_is_held(&self) -> bool {
        self.write.held.load(Ordering::Relaxed)
    }
}

impl<T, C: Container<T>> RingBuffer for CrossRb<T, C> {
    unsafe fn push(&self, elem: T) -> Result<(), T> {
        let side = &self.write;
        let relayed = side.settle(&self.read.counter);
        let full = boundary::is_full(side.counter.gray_local(), relayed, self.width());
        if full {
            side.flag.latch(true);
            return Err(elem);
        }
        self.storage.write(side.counter.bin() & self.addr_mask(), elem, !full);
        side.counter.advance();
        // The flag registers together with the advance: it asserts exactly
        // as the filling push lands, one step before an overwrite could
        // occur. A stale relayed code can only make it assert early.
        side.flag.latch(boundary::is_full(side.counter.gray_local(), relayed, self.width()));
        Ok(())
    }

    unsafe fn pop(&self) -> Option<T> {
        let side = &self.read;
        let relayed = side.settle(&self.write.counter);
        let empty = boundary::is_empty(side.counter.gray_local(), relayed);
        if empty {
            side.flag.latch(true);
            return None;
        }
        let elem = self.storage.read(side.counter.bin() & self.addr_mask(), !empty);
        side.counter.advance();
        side.flag.latch(boundary::is_empty(side.counter.gray_local(), relayed));
        elem
    }

    #[inline]
    unsafe fn hold_write(&self, flag: bool) -> bool {
        self.write.held.swap(flag, Ordering::Relaxed)
    }

    #[inline]
    unsafe fn hold_read(&self, flag: bool) -> bool {
        self.read.held.swap(flag, Ordering::Relaxed)
    }
}

impl<T, C: Container<T>> Producer for CrossRb<T, C> {
    fn try_push(&mut self, elem: T) -> Result<(), T> {
        unsafe { self.push(elem) }
    }
}

impl<T, C: Container<T>> Consumer for CrossRb<T, C> {
    fn try_pop(&mut self) -> Option<T> {
        unsafe { self.pop() }
    }
}

impl<T, C: Container<T>> Drop for CrossRb<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(feature = "alloc")]
impl<T, C: Container<T>> Split for CrossRb<T, C> {
    type Prod = Prod<Arc<Self>>;
    type Cons = Cons<Arc<Self>>;

    fn split(self) -> (Self::Prod, Self::Cons) {
        let rc = Arc::new(self);
        unsafe { (Prod::new(rc.clone()), Cons::new(rc)) }
    }
}

impl<T, C: Container<T>> SplitRef for CrossRb<T, C> {
    type RefProd<'a> = Prod<&'a Self> where Self: 'a;
    type RefCons<'a> = Cons<&'a Self> where Self: 'a;

    fn split_ref(&mut self) -> (Self::RefProd<'_>, Self::RefCons<'_>) {
        unsafe { (Prod::new(&*self), Cons::new(&*self)) }
    }
}

impl<T, const N: usize> Default for CrossRb<T, crate::storage::Array<T, N>> {
    fn default() -> Self {
        Self::from_container(utils::uninit_array())
    }
}

#[cfg(feature = "alloc")]
impl<T> CrossRb<T, crate::storage::Heap<T>> {
    /// Creates a heap-backed buffer with `capacity` slots.
    ///
    /// *Panics if allocation failed or `capacity` is not a power of two of
    /// at least 2.*
    pub fn new(capacity: usize) -> Self {
        Self::from_container(utils::uninit_boxed_slice(capacity))
    }
}
