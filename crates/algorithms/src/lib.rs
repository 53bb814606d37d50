//! Block cipher and universal hash primitives for the srtp-aead engine
//!
//! This crate provides the software strategies the GCM engine is generic
//! over: the AES block cipher (128 and 256 bit keys, encryption direction
//! only) and the GHASH universal hash. Both are constant-time with respect
//! to key and data, and zeroize their secret state on drop.
//!
//! The library is usable in both `std` and `no_std` environments.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Block cipher implementations
pub mod block;
pub use block::{Aes128, Aes256};

// Universal hash implementations
pub mod ghash;
pub use ghash::SoftGHash;

// Strategy traits the primitives implement
pub use srtp_aead_api::traits::{BlockCipher, GaloisHash, BLOCK_SIZE};

// Re-export security types from the common crate
pub use srtp_aead_common::security::SecretBuffer;
