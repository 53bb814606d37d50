//! Common implementations and shared functionality for the srtp-aead library
//!
//! Secret-holding containers used by the primitive and engine crates.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

pub use security::SecretBuffer;
