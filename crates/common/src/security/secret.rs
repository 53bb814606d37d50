//! Secret data types with guaranteed zeroization
//!
//! Every buffer that holds key-derived material (expanded AES round keys,
//! the GHASH subkey, counter and keystream blocks) lives in a
//! [`SecretBuffer`], so dropping its owner wipes it.

use core::fmt;
use core::convert::{AsRef, AsMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret buffer that guarantees zeroization
///
/// This type provides:
/// - Automatic zeroization on drop
/// - Redacted `Debug` output
/// - Type-safe size guarantees at compile time
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer with the given data
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the buffer is empty (always false for non-zero N)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrow the fixed-size array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }

    /// Mutably borrow the fixed-size array
    pub fn as_mut_array(&mut self) -> &mut [u8; N] {
        &mut self.data
    }

    /// Overwrite the contents with zeros without releasing the buffer
    pub fn clear(&mut self) {
        self.data.zeroize();
    }
}

impl<const N: usize> Default for SecretBuffer<N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}
