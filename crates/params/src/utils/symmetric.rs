//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES-128 round count
pub const AES128_ROUNDS: usize = 10;

/// AES-256 round count
pub const AES256_ROUNDS: usize = 14;

/// GCM block size in bytes (GHASH operates on 128-bit blocks)
pub const GCM_BLOCK_SIZE: usize = 16;

/// Recommended GCM nonce size in bytes (96 bits)
pub const GCM_NONCE_SIZE: usize = 12;

/// Full-length GCM authentication tag in bytes
pub const GCM_TAG_SIZE: usize = 16;

/// Truncated GCM authentication tag in bytes
pub const GCM_SHORT_TAG_SIZE: usize = 8;

/// Largest associated-data byte count whose bit length fits the 64-bit
/// GHASH length field
///
/// The final length block encodes `aad_len * 8` as a `u64`; 2^61 bytes
/// would overflow that product, so the bound stops one byte short.
pub const GCM_MAX_AAD_BYTES: u64 = (1 << 61) - 1;

/// Largest payload byte count for one nonce: 2^32 - 2 counter blocks
pub const GCM_MAX_PAYLOAD_BYTES: u64 = (1 << 36) - 32;
