//! Primitive strategy traits
//!
//! The engine never touches AES rounds or GF(2^128) arithmetic directly. It
//! drives a [`BlockCipher`] for key-schedule expansion and keystream blocks,
//! and a [`GaloisHash`] for the running authentication hash. Swapping either
//! implementation leaves the ordering and byte accounting untouched.

use zeroize::Zeroize;

use srtp_aead_params::GCM_BLOCK_SIZE;

use crate::error::Result;

/// Size of the blocks both primitives operate on
pub const BLOCK_SIZE: usize = GCM_BLOCK_SIZE;

/// A 128-bit block cipher used in the forward direction only
pub trait BlockCipher: Zeroize + Sized {
    /// Raw key size in bytes
    const KEY_SIZE: usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;

    /// Expand `key` into a key schedule
    ///
    /// Fails with `BadParameter` when `key.len() != KEY_SIZE`.
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]);
}

/// The GHASH universal hash, keyed by the subkey H = E_K(0^128)
pub trait GaloisHash: Zeroize + Sized {
    /// Create a hash keyed by `h` with a zero accumulator
    fn new(h: &[u8; BLOCK_SIZE]) -> Self;

    /// Fold one full block into the accumulator: Y = (Y ^ X) * H
    fn update_block(&mut self, block: &[u8; BLOCK_SIZE]);

    /// Reset the accumulator to zero, keeping H
    fn reset(&mut self);

    /// Current accumulator value
    fn state(&self) -> [u8; BLOCK_SIZE];
}
