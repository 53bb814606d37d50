//! Engine configuration
//!
//! A host picks a suite and a tag length at session setup. [`EngineConfig`]
//! validates the pair once and builds the matching engine.

use srtp_aead_api::error::{validate, Result};
use srtp_aead_api::types::CipherSuite;
use srtp_aead_params::{GCM_SHORT_TAG_SIZE, GCM_TAG_SIZE};

#[cfg(feature = "alloc")]
use alloc::boxed::Box;
#[cfg(feature = "alloc")]
use srtp_aead_api::traits::AeadEngine;
#[cfg(feature = "alloc")]
use crate::aead::{Aes128GcmContext, Aes256GcmContext};

/// Suite and tag length for one engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Cipher suite
    pub suite: CipherSuite,
    /// Tag length in bytes, 8 or 16
    pub tag_len: usize,
}

impl EngineConfig {
    /// Validated configuration
    pub fn new(suite: CipherSuite, tag_len: usize) -> Result<Self> {
        let config = Self { suite, tag_len };
        config.validate()?;
        Ok(config)
    }

    /// Configuration from the host's key-plus-salt length
    pub fn from_key_len(key_len_with_salt: usize, tag_len: usize) -> Result<Self> {
        let suite = CipherSuite::from_key_len_with_salt(key_len_with_salt)?;
        Self::new(suite, tag_len)
    }

    /// Check the tag length; needed after deserializing
    pub fn validate(&self) -> Result<()> {
        validate::parameter(
            self.tag_len == GCM_TAG_SIZE || self.tag_len == GCM_SHORT_TAG_SIZE,
            "engine config",
            "tag length must be 8 or 16 bytes",
        )
    }

    /// Build an unkeyed engine for this configuration
    #[cfg(feature = "alloc")]
    pub fn build(&self) -> Result<Box<dyn AeadEngine + Send>> {
        self.validate()?;
        let engine: Box<dyn AeadEngine + Send> = match self.suite {
            CipherSuite::AesGcm128 => Box::new(Aes128GcmContext::new(self.tag_len)?),
            CipherSuite::AesGcm256 => Box::new(Aes256GcmContext::new(self.tag_len)?),
        };
        Ok(engine)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            suite: CipherSuite::AesGcm128,
            tag_len: GCM_TAG_SIZE,
        }
    }
}

/// Construct an unkeyed engine from the host's key-plus-salt length
///
/// 28 selects AES-128-GCM and 44 selects AES-256-GCM; `tag_len` must be 8
/// or 16. Anything else is `BadParameter`.
#[cfg(feature = "alloc")]
pub fn construct(key_len_with_salt: usize, tag_len: usize) -> Result<Box<dyn AeadEngine + Send>> {
    EngineConfig::from_key_len(key_len_with_salt, tag_len)
        .map_err(|e| e.with_context("GCM construct"))?
        .build()
}
