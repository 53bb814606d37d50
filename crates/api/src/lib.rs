//! Public API traits and types for the srtp-aead library
//!
//! This crate provides the public API surface shared by the primitive and
//! engine crates: the error kinds, the per-packet data types, the
//! [`AeadEngine`] capability trait a host transport drives, and the primitive
//! strategy traits ([`BlockCipher`], [`GaloisHash`]) the engine is generic over.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::{CipherSuite, Direction, Tag};

// Re-export all traits from the traits module
pub use traits::{AeadEngine, BlockCipher, GaloisHash};
