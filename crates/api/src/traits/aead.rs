//! The AEAD engine capability
//!
//! A host transport holds one engine per crypto context and drives it in a
//! fixed order:
//!
//! ```text
//! init_key -> ( set_nonce -> update_aad* -> transform* -> finalize )*
//! ```
//!
//! `encrypt` / `decrypt` are the packet entry points built on top of
//! `transform`. Engines are mutated through `&mut self` only; a context
//! shared between threads needs outside serialization.

use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::{CipherSuite, Direction, Tag};

/// Multi-call AEAD state machine
pub trait AeadEngine {
    /// Implementation name, for diagnostics
    fn name(&self) -> &'static str;

    /// Suite this engine implements
    fn suite(&self) -> CipherSuite;

    /// Raw key size in bytes
    fn key_size(&self) -> usize;

    /// Tag length fixed at construction (8 or 16)
    fn tag_len(&self) -> usize;

    /// True once a key has been installed
    fn has_key(&self) -> bool;

    /// True between `set_nonce` and finalize
    fn has_nonce(&self) -> bool;

    /// Install a key, discarding all state derived from any previous key
    fn init_key(&mut self, key: &[u8]) -> Result<()>;

    /// Start a packet: bind the direction and derive the counter and hash
    /// state from the nonce
    fn set_nonce(&mut self, direction: Direction, nonce: &[u8]) -> Result<()>;

    /// Authenticate associated data; every call must precede the first
    /// payload byte of the packet
    fn update_aad(&mut self, aad: &[u8]) -> Result<()>;

    /// Encrypt or decrypt `buf[..len]` in place
    fn transform(&mut self, direction: Direction, buf: &mut [u8], len: usize) -> Result<()>;

    /// Finish the packet and return the tag truncated to `tag_len`
    fn finalize_tag(&mut self) -> Result<Tag>;

    /// Finish the packet and compare the tag with `received` in constant time
    fn finalize_and_check_tag(&mut self, received: &[u8]) -> Result<()>;

    /// Encrypt `buf[..len]` in place; the caller appends `finalize_tag()`
    fn encrypt(&mut self, buf: &mut [u8], len: usize) -> Result<()> {
        self.transform(Direction::Encrypt, buf, len)
    }

    /// Decrypt and authenticate `buf[..len]`, where the last `tag_len` bytes
    /// are the received tag. Returns the plaintext length.
    ///
    /// Input shorter than the tag fails with `AuthenticationFailure` before
    /// any transform. On a tag mismatch the plaintext region is wiped.
    fn decrypt(&mut self, buf: &mut [u8], len: usize) -> Result<usize> {
        validate::parameter(len <= buf.len(), "AEAD decrypt", "length exceeds buffer")?;
        let tag_len = self.tag_len();
        validate::authentication(len >= tag_len, "AEAD decrypt")?;

        let body_len = len - tag_len;
        let (body, tail) = buf.split_at_mut(body_len);
        self.transform(Direction::Decrypt, body, body_len)?;

        match self.finalize_and_check_tag(&tail[..tag_len]) {
            Ok(()) => Ok(body_len),
            Err(err) => {
                body.zeroize();
                Err(err)
            }
        }
    }
}
