//! # srtp-aead
//!
//! AES-GCM authenticated encryption for secure real-time media transports.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! srtp-aead = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, `std::error::Error` on errors
//! - `alloc`: boxed engines, the cipher registry and the seal/open helpers
//!   without `std`
//! - `serde`: `Serialize`/`Deserialize` for suites, directions and engine
//!   configuration
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `srtp-aead-params`: sizes, identifiers and limits
//! - `srtp-aead-api`: errors, packet types and the `AeadEngine` trait
//! - `srtp-aead-algorithms`: AES and GHASH primitives
//! - `srtp-aead-symmetric`: the GCM engine, configuration and registry
//!
//! ## Example
//!
//! ```
//! use srtp_aead::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut engine = construct(28, 16)?;
//! engine.init_key(&[0x2a; 28])?;
//!
//! let mut payload = b"frame".to_vec();
//! seal(engine.as_mut(), &[7; 12], b"header", &mut payload)?;
//! open(engine.as_mut(), &[7; 12], b"header", &mut payload)?;
//! assert_eq!(payload, b"frame");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use srtp_aead_algorithms as algorithms;
pub use srtp_aead_api as api;
pub use srtp_aead_common as common;
pub use srtp_aead_internal as internal;
pub use srtp_aead_params as params;
pub use srtp_aead_symmetric as symmetric;

pub use zeroize;

/// Common imports for srtp-aead users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and packet types
    pub use crate::api::{AeadEngine, BlockCipher, CipherSuite, Direction, GaloisHash, Tag};

    // Re-export the engine and its configuration
    pub use crate::symmetric::{Aes128GcmContext, Aes256GcmContext, EngineConfig, GcmContext};

    #[cfg(feature = "alloc")]
    pub use crate::symmetric::{construct, open, seal, CipherRegistry};

    // Re-export security types
    pub use crate::common::SecretBuffer;
}
