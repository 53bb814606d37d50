//! Internal utilities for the srtp-aead library
//!
//! Not part of the public API; the engine and type crates use these helpers
//! wherever secret-dependent data is compared.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice};
