//! GHASH universal hash for Galois/Counter Mode
//!
//! Implements the GF(2^128) polynomial hash defined in NIST SP 800-38D.
//! Blocks are absorbed one at a time; padding of partial blocks and the
//! final length block are the responsibility of the mode driving the hash.
//!
//! ## Constant-Time Guarantees
//!
//! - Multiplication walks every bit of the operand regardless of its value
//! - Conditional accumulation and reduction use masks rather than branches
//! - Memory barriers keep the compiler from short-circuiting the loops

use core::sync::atomic::{compiler_fence, Ordering};
use srtp_aead_api::traits::{GaloisHash, BLOCK_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Portable software GHASH.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SoftGHash {
    /// The hash subkey H = E_K(0^128).
    h: [u8; BLOCK_SIZE],
    /// The running accumulator Y.
    y: [u8; BLOCK_SIZE],
}

impl SoftGHash {
    /// Performs multiplication in GF(2^128) with GCM's reflected bit order.
    ///
    /// The most significant bit of byte 0 is the coefficient of x^0 and the
    /// reduction polynomial x^128 + x^7 + x^2 + x + 1 folds back as 0xE1.
    pub(crate) fn gf_multiply(x: &[u8; BLOCK_SIZE], y: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut z = [0u8; BLOCK_SIZE];
        let mut v = *y;

        for byte in x.iter() {
            for j in 0..8 {
                let bit = (byte >> (7 - j)) & 1;
                let mask = 0u8.wrapping_sub(bit);
                for k in 0..BLOCK_SIZE {
                    z[k] ^= v[k] & mask;
                }

                let lsb_mask = 0u8.wrapping_sub(v[BLOCK_SIZE - 1] & 1);

                let mut carry = 0u8;
                for b in v.iter_mut() {
                    let next_carry = *b & 1;
                    *b = (*b >> 1) | (carry << 7);
                    carry = next_carry;
                }

                v[0] ^= 0xE1 & lsb_mask;
            }
        }

        compiler_fence(Ordering::SeqCst);
        v.zeroize();
        z
    }
}

impl GaloisHash for SoftGHash {
    fn new(h: &[u8; BLOCK_SIZE]) -> Self {
        Self {
            h: *h,
            y: [0u8; BLOCK_SIZE],
        }
    }

    fn update_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        for (acc, b) in self.y.iter_mut().zip(block.iter()) {
            *acc ^= b;
        }
        self.y = Self::gf_multiply(&self.y, &self.h);
    }

    fn reset(&mut self) {
        self.y.zeroize();
    }

    fn state(&self) -> [u8; BLOCK_SIZE] {
        self.y
    }
}

impl core::fmt::Debug for SoftGHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SoftGHash").finish_non_exhaustive()
    }
}
