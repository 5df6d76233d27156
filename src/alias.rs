use crate::{
    halves::{Cons, Prod},
    rb::CrossRb,
    storage::Array,
};
#[cfg(feature = "alloc")]
use crate::storage::Heap;
#[cfg(feature = "alloc")]
use alloc::sync::Arc;

/// Stack-allocated buffer with static capacity.
///
/// *Capacity (`N`) must be a power of two of at least 2.*
pub type StaticRb<T, const N: usize> = CrossRb<T, Array<T, N>>;

/// Alias for [`StaticRb`] producer.
pub type StaticProd<'a, T, const N: usize> = Prod<&'a StaticRb<T, N>>;

/// Alias for [`StaticRb`] consumer.
pub type StaticCons<'a, T, const N: usize> = Cons<&'a StaticRb<T, N>>;

/// Heap-allocated buffer.
#[cfg(feature = "alloc")]
pub type HeapRb<T> = CrossRb<T, Heap<T>>;

#[cfg(feature = "alloc")]
/// Alias for [`HeapRb`] producer.
pub type HeapProd<T> = Prod<Arc<HeapRb<T>>>;

#[cfg(feature = "alloc")]
/// Alias for [`HeapRb`] consumer.
pub type HeapCons<T> = Cons<Arc<HeapRb<T>>>;
