//! AES-GCM authenticated encryption as a multi-call packet engine
//!
//! This module provides the Galois/Counter Mode engine defined in NIST
//! SP 800-38D, shaped for a real-time media transport: one [`GcmContext`]
//! per crypto session, keyed once, then driven once per packet through
//!
//! ```text
//! set_nonce -> update_aad* -> transform* -> finalize_tag | finalize_and_check_tag
//! ```
//!
//! Associated data and payload may arrive in any chunking; a trailing
//! partial block is carried across calls, so splitting the same bytes
//! differently never changes the ciphertext or the tag. Byte counts are
//! checked before any state is touched, so a rejected call leaves the
//! packet exactly as it was.
//!
//! The engine is generic over its primitives. The block cipher provides the
//! key schedule and keystream blocks; the Galois hash provides the running
//! authentication state. The concrete AES instantiations live in
//! [`aes128`] and [`aes256`].
//!
//! # Examples
//!
//! ```
//! use srtp_aead_symmetric::{Aes128GcmContext, AeadEngine, Direction, Result};
//!
//! fn example() -> Result<()> {
//!     let key = [0x42u8; 16];
//!     let nonce = [0x24u8; 12];
//!
//!     let mut ctx = Aes128GcmContext::new(16)?;
//!     ctx.init_key(&key)?;
//!
//!     // Sender
//!     let mut packet = b"header|payload bytes".to_vec();
//!     ctx.set_nonce(Direction::Encrypt, &nonce)?;
//!     ctx.update_aad(&packet[..7])?;
//!     let len = packet.len();
//!     ctx.encrypt(&mut packet[7..], len - 7)?;
//!     let tag = ctx.finalize_tag()?;
//!     packet.extend_from_slice(tag.as_bytes());
//!
//!     // Receiver
//!     ctx.set_nonce(Direction::Decrypt, &nonce)?;
//!     ctx.update_aad(&packet[..7])?;
//!     let len = packet.len();
//!     let plain_len = ctx.decrypt(&mut packet[7..], len - 7)?;
//!     assert_eq!(&packet[7..7 + plain_len], b"payload bytes");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use byteorder::{BigEndian, ByteOrder};
use tracing::{debug, trace, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use srtp_aead_api::error::{validate, Error, Result};
use srtp_aead_api::traits::{AeadEngine, BlockCipher, GaloisHash, BLOCK_SIZE};
use srtp_aead_api::types::{CipherSuite, Direction, Tag};
use srtp_aead_common::SecretBuffer;
use srtp_aead_params::{
    GCM_MAX_AAD_BYTES, GCM_MAX_PAYLOAD_BYTES, GCM_NONCE_SIZE, GCM_SHORT_TAG_SIZE, GCM_TAG_SIZE,
    SRTP_AEAD_SALT_LEN,
};

pub mod aes128;
pub mod aes256;
pub mod kat;

pub use aes128::Aes128GcmContext;
pub use aes256::Aes256GcmContext;

/// GCM engine state for one crypto session
///
/// Owns the expanded key schedule and every value derived from it. All of
/// it is wiped when the context is dropped or [destroyed](Self::destroy).
pub struct GcmContext<C: BlockCipher, H: GaloisHash> {
    suite: CipherSuite,
    tag_len: usize,
    cipher: Option<C>,
    hash: Option<H>,
    /// Current counter block; J0 right after `set_nonce`
    counter: SecretBuffer<BLOCK_SIZE>,
    /// E_K(J0), XORed onto the GHASH output at finalize
    tag_mask: SecretBuffer<BLOCK_SIZE>,
    /// Keystream for the payload block in progress
    keystream: SecretBuffer<BLOCK_SIZE>,
    /// Hash input not yet folded in: associated data before sealing,
    /// ciphertext afterwards
    pending: SecretBuffer<BLOCK_SIZE>,
    aad_len: u64,
    payload_len: u64,
    aad_partial: usize,
    payload_partial: usize,
    /// Bound by `set_nonce`, cleared by finalize
    direction: Option<Direction>,
}

impl<C: BlockCipher, H: GaloisHash> GcmContext<C, H> {
    /// Create an unkeyed context producing `tag_len`-byte tags
    ///
    /// `tag_len` must be 8 or 16.
    pub fn new(tag_len: usize) -> Result<Self> {
        validate::parameter(
            tag_len == GCM_TAG_SIZE || tag_len == GCM_SHORT_TAG_SIZE,
            "GCM construct",
            "tag length must be 8 or 16 bytes",
        )?;
        let suite = CipherSuite::from_key_size(C::KEY_SIZE)
            .map_err(|e| e.with_context("GCM construct"))?;

        debug!(cipher = C::name(), suite = %suite, tag_len, "constructed GCM context");

        Ok(Self {
            suite,
            tag_len,
            cipher: None,
            hash: None,
            counter: SecretBuffer::zeroed(),
            tag_mask: SecretBuffer::zeroed(),
            keystream: SecretBuffer::zeroed(),
            pending: SecretBuffer::zeroed(),
            aad_len: 0,
            payload_len: 0,
            aad_partial: 0,
            payload_partial: 0,
            direction: None,
        })
    }

    /// Wipe the context and release it
    pub fn destroy(mut self) {
        self.zeroize();
    }

    /// Associated-data bytes absorbed under the current nonce
    pub fn aad_len(&self) -> u64 {
        self.aad_len
    }

    /// Payload bytes transformed under the current nonce
    pub fn payload_len(&self) -> u64 {
        self.payload_len
    }

    /// Direction bound to the current nonce, if any
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Zero the per-packet counters, partial blocks and derived blocks
    fn reset_packet(&mut self) {
        self.counter.clear();
        self.tag_mask.clear();
        self.keystream.clear();
        self.pending.clear();
        self.aad_len = 0;
        self.payload_len = 0;
        self.aad_partial = 0;
        self.payload_partial = 0;
        self.direction = None;
    }

    /// Derive J0 from the nonce into `counter`, leaving the hash zeroed
    fn derive_j0(counter: &mut SecretBuffer<BLOCK_SIZE>, hash: &mut H, nonce: &[u8]) {
        let j0 = counter.as_mut_array();

        if nonce.len() == GCM_NONCE_SIZE {
            j0[..GCM_NONCE_SIZE].copy_from_slice(nonce);
            j0[BLOCK_SIZE - 1] = 1;
            return;
        }

        // J0 = GHASH(N || 0^s || 0^64 || [len(N)]_64)
        hash.reset();
        let mut block = [0u8; BLOCK_SIZE];
        for chunk in nonce.chunks(BLOCK_SIZE) {
            block[..chunk.len()].copy_from_slice(chunk);
            block[chunk.len()..].fill(0);
            hash.update_block(&block);
        }
        block.fill(0);
        BigEndian::write_u64(&mut block[8..], (nonce.len() as u64) * 8);
        hash.update_block(&block);

        *j0 = hash.state();
        hash.reset();
        block.zeroize();
    }

    /// Fold the pending block into the hash and clear it
    fn absorb_pending(hash: &mut H, pending: &mut SecretBuffer<BLOCK_SIZE>) {
        hash.update_block(pending.as_array());
        pending.clear();
    }

    /// Full 16-byte tag; ends the packet
    fn finalize_full(&mut self) -> Result<[u8; BLOCK_SIZE]> {
        validate::sequence(self.direction.is_some(), "GCM finalize", "no nonce set")?;
        let hash = self
            .hash
            .as_mut()
            .ok_or(Error::sequence("GCM finalize", "no key installed"))?;

        // At most one of these is non-zero: associated data is sealed as
        // soon as payload starts.
        if self.payload_partial > 0 || self.aad_partial > 0 {
            Self::absorb_pending(hash, &mut self.pending);
        }

        let mut lengths = [0u8; BLOCK_SIZE];
        BigEndian::write_u64(&mut lengths[..8], self.aad_len * 8);
        BigEndian::write_u64(&mut lengths[8..], self.payload_len * 8);
        hash.update_block(&lengths);

        let mut tag = hash.state();
        for (t, m) in tag.iter_mut().zip(self.tag_mask.as_array().iter()) {
            *t ^= m;
        }

        trace!(
            aad_len = self.aad_len,
            payload_len = self.payload_len,
            "finalized GCM packet"
        );

        hash.reset();
        self.reset_packet();
        Ok(tag)
    }
}

impl<C: BlockCipher, H: GaloisHash> AeadEngine for GcmContext<C, H> {
    fn name(&self) -> &'static str {
        self.suite.name()
    }

    fn suite(&self) -> CipherSuite {
        self.suite
    }

    fn key_size(&self) -> usize {
        C::KEY_SIZE
    }

    fn tag_len(&self) -> usize {
        self.tag_len
    }

    fn has_key(&self) -> bool {
        self.cipher.is_some()
    }

    fn has_nonce(&self) -> bool {
        self.direction.is_some()
    }

    fn init_key(&mut self, key: &[u8]) -> Result<()> {
        validate::parameter(
            key.len() == C::KEY_SIZE || key.len() == C::KEY_SIZE + SRTP_AEAD_SALT_LEN,
            "GCM init key",
            "key length does not match the cipher key size",
        )?;

        let cipher = C::new(&key[..C::KEY_SIZE]).map_err(|e| e.with_context("GCM init key"))?;

        // H = E_K(0^128)
        let mut h = [0u8; BLOCK_SIZE];
        cipher.encrypt_block(&mut h);
        let hash = H::new(&h);
        h.zeroize();

        if let Some(mut old) = self.cipher.replace(cipher) {
            old.zeroize();
        }
        if let Some(mut old) = self.hash.replace(hash) {
            old.zeroize();
        }
        self.reset_packet();

        debug!(suite = %self.suite, key_bits = C::KEY_SIZE * 8, "installed GCM key");
        Ok(())
    }

    fn set_nonce(&mut self, direction: Direction, nonce: &[u8]) -> Result<()> {
        validate::sequence(self.has_key(), "GCM set nonce", "no key installed")?;
        validate::parameter(!nonce.is_empty(), "GCM set nonce", "nonce must not be empty")?;

        self.reset_packet();

        let (cipher, hash) = match (self.cipher.as_ref(), self.hash.as_mut()) {
            (Some(c), Some(h)) => (c, h),
            _ => return Err(Error::sequence("GCM set nonce", "no key installed")),
        };
        hash.reset();
        Self::derive_j0(&mut self.counter, hash, nonce);

        let tag_mask = self.tag_mask.as_mut_array();
        tag_mask.copy_from_slice(self.counter.as_array());
        cipher.encrypt_block(tag_mask);

        self.direction = Some(direction);
        trace!(%direction, nonce_len = nonce.len(), "set GCM nonce");
        Ok(())
    }

    fn update_aad(&mut self, aad: &[u8]) -> Result<()> {
        validate::sequence(self.has_nonce(), "GCM update AAD", "no nonce set")?;
        validate::sequence(
            self.payload_len == 0,
            "GCM update AAD",
            "associated data after payload",
        )?;
        let total = validate::limit(self.aad_len, aad.len() as u64, GCM_MAX_AAD_BYTES, "GCM AAD")
            .map_err(|e| {
                warn!(aad_len = self.aad_len, add = aad.len(), "GCM AAD limit reached");
                e
            })?;
        let hash = self
            .hash
            .as_mut()
            .ok_or(Error::sequence("GCM update AAD", "no key installed"))?;

        let mut rest = aad;
        while !rest.is_empty() {
            let take = (BLOCK_SIZE - self.aad_partial).min(rest.len());
            let pending = self.pending.as_mut_array();
            for (p, b) in pending[self.aad_partial..self.aad_partial + take]
                .iter_mut()
                .zip(rest[..take].iter())
            {
                *p ^= b;
            }
            self.aad_partial += take;
            rest = &rest[take..];

            if self.aad_partial == BLOCK_SIZE {
                Self::absorb_pending(hash, &mut self.pending);
                self.aad_partial = 0;
            }
        }

        self.aad_len = total;
        Ok(())
    }

    fn transform(&mut self, direction: Direction, buf: &mut [u8], len: usize) -> Result<()> {
        validate::sequence(self.has_nonce(), "GCM transform", "no nonce set")?;
        validate::sequence(
            self.direction == Some(direction),
            "GCM transform",
            "direction does not match the nonce",
        )?;
        validate::parameter(len <= buf.len(), "GCM transform", "length exceeds buffer")?;
        if len == 0 {
            return Ok(());
        }
        let total = validate::limit(
            self.payload_len,
            len as u64,
            GCM_MAX_PAYLOAD_BYTES,
            "GCM payload",
        )
        .map_err(|e| {
            warn!(payload_len = self.payload_len, add = len, "GCM payload limit reached");
            e
        })?;

        let (cipher, hash) = match (self.cipher.as_ref(), self.hash.as_mut()) {
            (Some(c), Some(h)) => (c, h),
            _ => return Err(Error::sequence("GCM transform", "no key installed")),
        };

        // Seal associated data at the first payload byte
        if self.payload_len == 0 && self.aad_partial > 0 {
            Self::absorb_pending(hash, &mut self.pending);
            self.aad_partial = 0;
        }

        let encrypting = direction == Direction::Encrypt;
        let mut offset = 0;
        while offset < len {
            if self.payload_partial == 0 {
                // inc32 on the low 32 bits of the counter block
                let counter = self.counter.as_mut_array();
                let next = BigEndian::read_u32(&counter[12..]).wrapping_add(1);
                BigEndian::write_u32(&mut counter[12..], next);

                let keystream = self.keystream.as_mut_array();
                keystream.copy_from_slice(&counter[..]);
                cipher.encrypt_block(keystream);
            }

            let start = self.payload_partial;
            let take = (BLOCK_SIZE - start).min(len - offset);
            let keystream = self.keystream.as_array();
            let pending = self.pending.as_mut_array();
            for i in 0..take {
                let input = buf[offset + i];
                let output = input ^ keystream[start + i];
                buf[offset + i] = output;
                pending[start + i] = if encrypting { output } else { input };
            }
            self.payload_partial += take;
            offset += take;

            if self.payload_partial == BLOCK_SIZE {
                Self::absorb_pending(hash, &mut self.pending);
                self.payload_partial = 0;
            }
        }

        self.payload_len = total;
        Ok(())
    }

    fn finalize_tag(&mut self) -> Result<Tag> {
        let mut full = self.finalize_full()?;
        let tag = Tag::new(full, self.tag_len);
        full.zeroize();
        tag
    }

    fn finalize_and_check_tag(&mut self, received: &[u8]) -> Result<()> {
        let expected = self.finalize_tag()?;
        if expected.verify(received) {
            Ok(())
        } else {
            debug!(suite = %self.suite, "GCM tag mismatch");
            Err(Error::AuthenticationFailure { context: self.suite.name() })
        }
    }
}

impl<C: BlockCipher, H: GaloisHash> Zeroize for GcmContext<C, H> {
    fn zeroize(&mut self) {
        if let Some(mut cipher) = self.cipher.take() {
            cipher.zeroize();
        }
        if let Some(mut hash) = self.hash.take() {
            hash.zeroize();
        }
        self.reset_packet();
    }
}

impl<C: BlockCipher, H: GaloisHash> Drop for GcmContext<C, H> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<C: BlockCipher, H: GaloisHash> ZeroizeOnDrop for GcmContext<C, H> {}

impl<C: BlockCipher, H: GaloisHash> core::fmt::Debug for GcmContext<C, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GcmContext")
            .field("suite", &self.suite)
            .field("tag_len", &self.tag_len)
            .field("has_key", &self.cipher.is_some())
            .field("direction", &self.direction)
            .field("aad_len", &self.aad_len)
            .field("payload_len", &self.payload_len)
            .finish_non_exhaustive()
    }
}
