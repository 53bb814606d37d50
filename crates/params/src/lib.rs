//! Constant values for the srtp-aead library
//!
//! Sizes, identifiers and limits shared by the primitive and engine crates.
//! Nothing in here depends on `std`.

#![no_std]

pub mod srtp;
pub mod utils;

pub use srtp::*;
pub use utils::symmetric::*;
