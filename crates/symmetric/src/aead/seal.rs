//! One-shot helpers over the packet lifecycle
//!
//! These only sequence the engine calls for a payload held in a `Vec`; they
//! do not frame packets.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use srtp_aead_api::error::Result;
use srtp_aead_api::traits::AeadEngine;
use srtp_aead_api::types::Direction;
use zeroize::Zeroize;

/// Encrypt `buf` in place under `nonce` and `aad`, then append the tag
pub fn seal(engine: &mut dyn AeadEngine, nonce: &[u8], aad: &[u8], buf: &mut Vec<u8>) -> Result<()> {
    engine.set_nonce(Direction::Encrypt, nonce)?;
    engine.update_aad(aad)?;
    let len = buf.len();
    engine.encrypt(buf, len)?;
    let tag = engine.finalize_tag()?;
    buf.extend_from_slice(tag.as_bytes());
    Ok(())
}

/// Verify and decrypt `buf` (ciphertext followed by the tag) in place,
/// truncating it to the plaintext
///
/// On any failure the whole buffer is wiped and left empty.
pub fn open(engine: &mut dyn AeadEngine, nonce: &[u8], aad: &[u8], buf: &mut Vec<u8>) -> Result<()> {
    match open_in_place(engine, nonce, aad, buf) {
        Ok(plain_len) => {
            buf.truncate(plain_len);
            Ok(())
        }
        Err(err) => {
            buf.zeroize();
            Err(err)
        }
    }
}

fn open_in_place(
    engine: &mut dyn AeadEngine,
    nonce: &[u8],
    aad: &[u8],
    buf: &mut [u8],
) -> Result<usize> {
    engine.set_nonce(Direction::Decrypt, nonce)?;
    engine.update_aad(aad)?;
    let len = buf.len();
    engine.decrypt(buf, len)
}
