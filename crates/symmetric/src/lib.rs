//! AES-GCM AEAD engine for SRTP transports
//!
//! This crate provides the multi-call cipher context a secure media
//! transport drives once per packet, built on the primitives in
//! `srtp-aead-algorithms` and the unified API error system.
//!
//! - [`GcmContext`] is the engine, generic over its block cipher and Galois
//!   hash; [`Aes128GcmContext`] and [`Aes256GcmContext`] are the software
//!   instantiations.
//! - [`construct`] and [`EngineConfig`] build a boxed [`AeadEngine`] from
//!   the host's key length and tag length.
//! - [`CipherRegistry`] maps cipher suites to engine constructors.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod aead;
pub mod config;
#[cfg(feature = "alloc")]
pub mod registry;

// Re-export main types for convenience
pub use aead::gcm::kat::{self, KnownAnswer};
pub use aead::{Aes128GcmContext, Aes256GcmContext, GcmContext};
#[cfg(feature = "alloc")]
pub use aead::{open, seal};
pub use config::EngineConfig;
#[cfg(feature = "alloc")]
pub use config::construct;
#[cfg(feature = "alloc")]
pub use registry::{CipherRegistry, EngineConstructor};

// Re-export the API error system and engine surface
pub use srtp_aead_api::error::{validate, Error, Result};
pub use srtp_aead_api::{AeadEngine, CipherSuite, Direction, Tag};
