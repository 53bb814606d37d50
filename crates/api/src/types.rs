//! Core types shared by the engine and its host
//!
//! [`Direction`] and [`CipherSuite`] are the values a host passes across the
//! capability boundary; [`Tag`] is what finalize hands back.

use core::fmt;
use core::str::FromStr;
use zeroize::Zeroize;

use srtp_aead_internal::constant_time::ct_eq;
use srtp_aead_params::{
    AES128_KEY_SIZE, AES256_KEY_SIZE, GCM_TAG_SIZE, SRTP_AES_GCM_128,
    SRTP_AES_GCM_128_KEY_LEN_WSALT, SRTP_AES_GCM_256, SRTP_AES_GCM_256_KEY_LEN_WSALT,
    SRTP_DIRECTION_ANY, SRTP_DIRECTION_DECRYPT, SRTP_DIRECTION_ENCRYPT,
};

use crate::error::{validate, Error, Result};

/// Direction of the transform bound to the current nonce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Plaintext in, ciphertext out
    Encrypt,
    /// Ciphertext in, plaintext out
    Decrypt,
}

impl Direction {
    /// Host wire value for this direction
    pub fn as_u32(self) -> u32 {
        match self {
            Self::Encrypt => SRTP_DIRECTION_ENCRYPT,
            Self::Decrypt => SRTP_DIRECTION_DECRYPT,
        }
    }
}

impl TryFrom<u32> for Direction {
    type Error = Error;

    /// Only the two concrete directions are accepted; the host's "any"
    /// value and everything else is a bad parameter.
    fn try_from(value: u32) -> Result<Self> {
        match value {
            SRTP_DIRECTION_ENCRYPT => Ok(Self::Encrypt),
            SRTP_DIRECTION_DECRYPT => Ok(Self::Decrypt),
            SRTP_DIRECTION_ANY => Err(Error::bad_param(
                "direction",
                "an AEAD context needs a concrete direction",
            )),
            _ => Err(Error::bad_param("direction", "unsupported direction value")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("encrypt"),
            Self::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// AEAD cipher suites a host can select by identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CipherSuite {
    /// AES-128 in Galois/Counter Mode
    #[cfg_attr(feature = "serde", serde(rename = "AEAD_AES_128_GCM"))]
    AesGcm128,
    /// AES-256 in Galois/Counter Mode
    #[cfg_attr(feature = "serde", serde(rename = "AEAD_AES_256_GCM"))]
    AesGcm256,
}

impl CipherSuite {
    /// All suites, in identifier order
    pub const ALL: [CipherSuite; 2] = [CipherSuite::AesGcm128, CipherSuite::AesGcm256];

    /// Host cipher-type identifier
    pub fn id(self) -> u32 {
        match self {
            Self::AesGcm128 => SRTP_AES_GCM_128,
            Self::AesGcm256 => SRTP_AES_GCM_256,
        }
    }

    /// Look a suite up by host identifier
    pub fn from_id(id: u32) -> Result<Self> {
        match id {
            SRTP_AES_GCM_128 => Ok(Self::AesGcm128),
            SRTP_AES_GCM_256 => Ok(Self::AesGcm256),
            _ => Err(Error::bad_param("cipher suite", "unknown cipher identifier")),
        }
    }

    /// Map the host's key-plus-salt length onto a suite
    pub fn from_key_len_with_salt(key_len: usize) -> Result<Self> {
        match key_len {
            SRTP_AES_GCM_128_KEY_LEN_WSALT => Ok(Self::AesGcm128),
            SRTP_AES_GCM_256_KEY_LEN_WSALT => Ok(Self::AesGcm256),
            _ => Err(Error::bad_param("cipher suite", "unsupported key length")),
        }
    }

    /// Map a raw AES key size onto a suite
    pub fn from_key_size(key_size: usize) -> Result<Self> {
        match key_size {
            AES128_KEY_SIZE => Ok(Self::AesGcm128),
            AES256_KEY_SIZE => Ok(Self::AesGcm256),
            _ => Err(Error::bad_param("cipher suite", "unsupported key size")),
        }
    }

    /// Raw AES key size in bytes
    pub fn key_size(self) -> usize {
        match self {
            Self::AesGcm128 => AES128_KEY_SIZE,
            Self::AesGcm256 => AES256_KEY_SIZE,
        }
    }

    /// Key size in bits (128 or 256)
    pub fn key_size_bits(self) -> usize {
        self.key_size() * 8
    }

    /// Key length the host supplies, salt included
    pub fn key_len_with_salt(self) -> usize {
        match self {
            Self::AesGcm128 => SRTP_AES_GCM_128_KEY_LEN_WSALT,
            Self::AesGcm256 => SRTP_AES_GCM_256_KEY_LEN_WSALT,
        }
    }

    /// Canonical AEAD name
    pub fn name(self) -> &'static str {
        match self {
            Self::AesGcm128 => "AEAD_AES_128_GCM",
            Self::AesGcm256 => "AEAD_AES_256_GCM",
        }
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherSuite {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let name = match trimmed.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("SRTP_") => &trimmed[5..],
            _ => trimmed,
        };
        CipherSuite::ALL
            .iter()
            .copied()
            .find(|suite| suite.name().eq_ignore_ascii_case(name))
            .ok_or(Error::bad_param("cipher suite", "unknown cipher suite name"))
    }
}

/// An authentication tag of 1 to 16 bytes
///
/// Finalize always computes the full 16-byte GHASH output; the tag keeps the
/// first `len` bytes. Comparison against received bytes is constant time.
#[derive(Clone, Zeroize)]
pub struct Tag {
    data: [u8; GCM_TAG_SIZE],
    len: usize,
}

impl Tag {
    /// Truncate a full-length tag to `len` bytes
    pub fn new(full: [u8; GCM_TAG_SIZE], len: usize) -> Result<Self> {
        validate::parameter(
            len >= 1 && len <= GCM_TAG_SIZE,
            "tag",
            "tag length must be between 1 and 16 bytes",
        )?;
        let mut data = [0u8; GCM_TAG_SIZE];
        data[..len].copy_from_slice(&full[..len]);
        Ok(Self { data, len })
    }

    /// Copy a received tag
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::parameter(
            !slice.is_empty() && slice.len() <= GCM_TAG_SIZE,
            "tag",
            "tag length must be between 1 and 16 bytes",
        )?;
        let mut data = [0u8; GCM_TAG_SIZE];
        data[..slice.len()].copy_from_slice(slice);
        Ok(Self { data, len: slice.len() })
    }

    /// Tag length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// True only once the tag has been wiped
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Tag bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Constant-time comparison against received tag bytes
    pub fn verify(&self, received: &[u8]) -> bool {
        ct_eq(self.as_bytes(), received)
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.verify(other.as_bytes())
    }
}

impl Eq for Tag {}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag<{}>(", self.len)?;
        for byte in self.as_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        f.write_str(")")
    }
}
