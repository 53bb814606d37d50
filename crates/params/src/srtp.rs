//! SRTP cipher suite constants (RFC 7714)

use crate::utils::symmetric::{AES128_KEY_SIZE, AES256_KEY_SIZE};

/// SRTP AEAD salt length in bytes
pub const SRTP_AEAD_SALT_LEN: usize = 12;

/// AES-128-GCM key length including the SRTP salt
pub const SRTP_AES_GCM_128_KEY_LEN_WSALT: usize = AES128_KEY_SIZE + SRTP_AEAD_SALT_LEN;

/// AES-256-GCM key length including the SRTP salt
pub const SRTP_AES_GCM_256_KEY_LEN_WSALT: usize = AES256_KEY_SIZE + SRTP_AEAD_SALT_LEN;

/// Host cipher-type identifier for AES-128-GCM
pub const SRTP_AES_GCM_128: u32 = 6;

/// Host cipher-type identifier for AES-256-GCM
pub const SRTP_AES_GCM_256: u32 = 7;

/// Host direction value for encryption
pub const SRTP_DIRECTION_ENCRYPT: u32 = 0;

/// Host direction value for decryption
pub const SRTP_DIRECTION_DECRYPT: u32 = 1;

/// Host direction value meaning "either"; not valid for an AEAD context
pub const SRTP_DIRECTION_ANY: u32 = 2;

/// Host status codes returned alongside errors
pub mod status {
    /// Invalid argument
    pub const BAD_PARAM: u32 = 2;
    /// Authentication tag mismatch
    pub const AUTH_FAIL: u32 = 7;
    /// Cipher used out of order
    pub const CIPHER_FAIL: u32 = 8;
    /// Algorithm usage limit reached
    pub const ALGO_FAIL: u32 = 11;
}
