//! Cipher registry
//!
//! Maps each cipher suite to the constructor that backs it. A host selects
//! an engine by suite (or by its numeric identifier) at session setup and
//! may swap in another implementation for a suite without touching callers.

use alloc::boxed::Box;
use tracing::debug;

use srtp_aead_api::error::{validate, Result};
use srtp_aead_api::traits::AeadEngine;
use srtp_aead_api::types::CipherSuite;

use crate::aead::gcm::kat;
use crate::aead::{Aes128GcmContext, Aes256GcmContext};
use srtp_aead_params::GCM_TAG_SIZE;

/// Builds an unkeyed engine with the given tag length
pub type EngineConstructor = fn(tag_len: usize) -> Result<Box<dyn AeadEngine + Send>>;

fn aes128_gcm(tag_len: usize) -> Result<Box<dyn AeadEngine + Send>> {
    Ok(Box::new(Aes128GcmContext::new(tag_len)?))
}

fn aes256_gcm(tag_len: usize) -> Result<Box<dyn AeadEngine + Send>> {
    Ok(Box::new(Aes256GcmContext::new(tag_len)?))
}

/// One constructor per supported suite
#[derive(Clone)]
pub struct CipherRegistry {
    entries: [EngineConstructor; 2],
}

fn slot(suite: CipherSuite) -> usize {
    match suite {
        CipherSuite::AesGcm128 => 0,
        CipherSuite::AesGcm256 => 1,
    }
}

impl CipherRegistry {
    /// Registry backed by the software AES-GCM engines
    pub fn new() -> Self {
        Self {
            entries: [aes128_gcm, aes256_gcm],
        }
    }

    /// Registered suites
    pub fn suites(&self) -> impl Iterator<Item = CipherSuite> {
        CipherSuite::ALL.into_iter()
    }

    /// Constructor currently backing `suite`
    pub fn constructor(&self, suite: CipherSuite) -> EngineConstructor {
        self.entries[slot(suite)]
    }

    /// Back `suite` with another implementation
    pub fn replace(&mut self, suite: CipherSuite, ctor: EngineConstructor) {
        self.entries[slot(suite)] = ctor;
        debug!(%suite, "replaced cipher implementation");
    }

    /// Build an unkeyed engine for `suite`
    ///
    /// `key_len_with_salt` must be the key-plus-salt length of `suite`.
    pub fn create(
        &self,
        suite: CipherSuite,
        key_len_with_salt: usize,
        tag_len: usize,
    ) -> Result<Box<dyn AeadEngine + Send>> {
        validate::parameter(
            key_len_with_salt == suite.key_len_with_salt(),
            "cipher registry",
            "key length does not match the cipher suite",
        )?;
        (self.constructor(suite))(tag_len)
    }

    /// Build an unkeyed engine by host cipher identifier
    pub fn create_by_id(
        &self,
        id: u32,
        key_len_with_salt: usize,
        tag_len: usize,
    ) -> Result<Box<dyn AeadEngine + Send>> {
        let suite = CipherSuite::from_id(id)?;
        self.create(suite, key_len_with_salt, tag_len)
    }

    /// Run the known-answer vector through every registered implementation
    pub fn self_test_all(&self) -> Result<()> {
        for suite in self.suites() {
            let mut engine = self.constructor(suite)(GCM_TAG_SIZE)?;
            validate::parameter(
                engine.suite() == suite,
                "cipher registry",
                "registered engine implements a different suite",
            )?;
            kat::run(engine.as_mut())?;
            debug!(%suite, name = engine.name(), "self test passed");
        }
        Ok(())
    }
}

impl Default for CipherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for CipherRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.suites()).finish()
    }
}
