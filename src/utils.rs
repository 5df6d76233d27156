use core::mem::MaybeUninit;

// TODO: Remove on `maybe_uninit_uninit_array` stabilization.
pub fn uninit_array<T, const N: usize>() -> [MaybeUninit<T>; N] {
    unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() }
}

#[cfg(feature = "alloc")]
pub fn uninit_boxed_slice<T>(len: usize) -> alloc::boxed::Box<[MaybeUninit<T>]> {
    let mut vec = alloc::vec::Vec::with_capacity(len);
    // Slots are `MaybeUninit`, so the length can be set without initialization.
    unsafe { vec.set_len(len) };
    vec.into_boxed_slice()
}
