//! Authenticated encryption engines and packet helpers

pub mod gcm;

pub use gcm::{Aes128GcmContext, Aes256GcmContext, GcmContext};

#[cfg(feature = "alloc")]
mod seal;
#[cfg(feature = "alloc")]
pub use seal::{open, seal};
