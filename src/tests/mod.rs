mod gray;
#[cfg(feature = "std")]
mod shared;
