//! Test vectors and shared helpers for the srtp-aead test suite
//!
//! The integration tests under `tests/` and the benchmarks under `benches/`
//! use the vector table and the chunked drivers defined here.

pub mod vectors;

use srtp_aead_api::{AeadEngine, Direction, Result, Tag};

/// Encrypt `plaintext` under `nonce` and `aad`, feeding both in pieces of
/// at most `chunk` bytes (0 means one call each)
pub fn encrypt_chunked(
    engine: &mut dyn AeadEngine,
    nonce: &[u8],
    aad: &[u8],
    plaintext: &[u8],
    chunk: usize,
) -> Result<(Vec<u8>, Tag)> {
    let step = |len: usize| if chunk == 0 { len.max(1) } else { chunk };

    engine.set_nonce(Direction::Encrypt, nonce)?;
    for piece in aad.chunks(step(aad.len())) {
        engine.update_aad(piece)?;
    }

    let mut buf = plaintext.to_vec();
    let step_len = step(buf.len());
    for piece in buf.chunks_mut(step_len) {
        let len = piece.len();
        engine.encrypt(piece, len)?;
    }

    let tag = engine.finalize_tag()?;
    Ok((buf, tag))
}

/// Decrypt and verify `packet` (ciphertext followed by the tag), feeding the
/// associated data and ciphertext in pieces of at most `chunk` bytes
///
/// Returns the plaintext on success.
pub fn decrypt_chunked(
    engine: &mut dyn AeadEngine,
    nonce: &[u8],
    aad: &[u8],
    packet: &[u8],
    chunk: usize,
) -> Result<Vec<u8>> {
    let step = |len: usize| if chunk == 0 { len.max(1) } else { chunk };
    let tag_len = engine.tag_len();

    engine.set_nonce(Direction::Decrypt, nonce)?;
    for piece in aad.chunks(step(aad.len())) {
        engine.update_aad(piece)?;
    }

    if packet.len() < tag_len {
        let mut buf = packet.to_vec();
        let len = buf.len();
        engine.decrypt(&mut buf, len)?;
        return Ok(buf);
    }

    let (body, tag) = packet.split_at(packet.len() - tag_len);
    let mut buf = body.to_vec();
    let step_len = step(buf.len());
    for piece in buf.chunks_mut(step_len) {
        let len = piece.len();
        engine.transform(Direction::Decrypt, piece, len)?;
    }
    engine.finalize_and_check_tag(tag)?;
    Ok(buf)
}
