//! Trait definitions for the AEAD engine and its primitives

pub mod aead;
pub mod primitive;

pub use aead::AeadEngine;
pub use primitive::{BlockCipher, GaloisHash, BLOCK_SIZE};
