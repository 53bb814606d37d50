//! AES block cipher implementations
//!
//! This module implements the forward direction of the Advanced Encryption
//! Standard (AES) block cipher as specified in FIPS 197, for 128- and 256-bit
//! keys.
//!
//! ## Constant-Time Guarantees
//!
//! This implementation mitigates timing side-channel attacks by:
//! - Using branchless arithmetic for GF(2^8) operations
//! - Computing the S-box from the field inverse instead of table lookups
//! - Keeping round keys in zeroize-on-drop storage

use core::sync::atomic::{compiler_fence, Ordering};
use zeroize::{Zeroize, ZeroizeOnDrop};

use srtp_aead_api::error::{validate, Result};
use srtp_aead_api::traits::primitive::BLOCK_SIZE;
use srtp_aead_api::traits::BlockCipher;
use srtp_aead_common::security::SecretBuffer;
use srtp_aead_params::{AES128_KEY_SIZE, AES128_ROUNDS, AES256_KEY_SIZE, AES256_ROUNDS};

/// Round constants for AES key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000,
    0x10000000, 0x20000000, 0x40000000, 0x80000000, 0x1b000000, 0x36000000,
];

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a >> 7;
        a <<= 1;
        // if hi was set, reduce by 0x1B
        a ^= hi.wrapping_neg() & 0x1B;
        b >>= 1;
    }
    p
}

/// Raise to the 254th power (b⁻¹ in GF(2⁸)); 0 maps to 0 without a branch
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    // x^254 = x^128 · x^64 · x^32 · x^16 · x^8 · x^4 · x^2
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    gf_mul(y, x2)
}

/// AES forward S-box: inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

/// Substitutes each byte in a big-endian word
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([sbox(b[0]), sbox(b[1]), sbox(b[2]), sbox(b[3])])
}

/// FIPS 197 key expansion into `out` (4 * (rounds + 1) words as bytes)
///
/// `nk` is the key length in words.
fn expand_key_into(key: &[u8], nk: usize, out: &mut [u8]) {
    let total_words = out.len() / 4;
    let mut words = [0u32; 60];

    for i in 0..nk {
        words[i] = u32::from_be_bytes([key[4 * i], key[4 * i + 1], key[4 * i + 2], key[4 * i + 3]]);
    }

    for i in nk..total_words {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        words[i] = words[i - nk] ^ temp;
    }

    for (chunk, word) in out.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    words.zeroize();
}

/// SubBytes step
#[inline(always)]
fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
    // ensure no reordering around our bit-ops
    compiler_fence(Ordering::SeqCst);
}

/// ShiftRows step (column-major state)
#[inline(always)]
fn shift_rows(state: &mut [u8; 16]) {
    let t = *state;
    state[1] = t[5];
    state[5] = t[9];
    state[9] = t[13];
    state[13] = t[1];
    state[2] = t[10];
    state[6] = t[14];
    state[10] = t[2];
    state[14] = t[6];
    state[3] = t[15];
    state[7] = t[3];
    state[11] = t[7];
    state[15] = t[11];
}

/// Multiply by 2 in GF(2^8)
#[inline(always)]
fn mul2(byte: u8) -> u8 {
    (byte << 1) ^ ((byte >> 7).wrapping_neg() & 0x1B)
}

/// MixColumns step
#[inline(always)]
fn mix_columns(state: &mut [u8; 16]) {
    for c in 0..4 {
        let i = c * 4;
        let s0 = state[i];
        let s1 = state[i + 1];
        let s2 = state[i + 2];
        let s3 = state[i + 3];
        state[i] = mul2(s0) ^ mul2(s1) ^ s1 ^ s2 ^ s3;
        state[i + 1] = s0 ^ mul2(s1) ^ mul2(s2) ^ s2 ^ s3;
        state[i + 2] = s0 ^ s1 ^ mul2(s2) ^ mul2(s3) ^ s3;
        state[i + 3] = mul2(s0) ^ s0 ^ s1 ^ s2 ^ mul2(s3);
    }
}

/// AddRoundKey step
#[inline(always)]
fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
    for (s, k) in state.iter_mut().zip(round_key.iter()) {
        *s ^= k;
    }
}

/// Run the cipher over `block` with an expanded key of `rounds + 1` round keys
fn encrypt_with_schedule(round_keys: &[u8], rounds: usize, block: &mut [u8; BLOCK_SIZE]) {
    let mut state = *block;

    add_round_key(&mut state, &round_keys[..16]);

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &round_keys[round * 16..(round + 1) * 16]);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[rounds * 16..(rounds + 1) * 16]);

    *block = state;
    state.zeroize();
}

/// AES-128 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: SecretBuffer<176>, // 11 rounds × 16 bytes
}

/// AES-256 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: SecretBuffer<240>, // 15 rounds × 16 bytes
}

impl BlockCipher for Aes128 {
    const KEY_SIZE: usize = AES128_KEY_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }

    fn new(key: &[u8]) -> Result<Self> {
        validate::parameter(key.len() == AES128_KEY_SIZE, "AES-128 key", "key must be 16 bytes")?;
        let mut round_keys = SecretBuffer::<176>::zeroed();
        expand_key_into(key, 4, round_keys.as_mut_array());
        Ok(Self { round_keys })
    }

    fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        encrypt_with_schedule(self.round_keys.as_array(), AES128_ROUNDS, block);
    }
}

impl BlockCipher for Aes256 {
    const KEY_SIZE: usize = AES256_KEY_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }

    fn new(key: &[u8]) -> Result<Self> {
        validate::parameter(key.len() == AES256_KEY_SIZE, "AES-256 key", "key must be 32 bytes")?;
        let mut round_keys = SecretBuffer::<240>::zeroed();
        expand_key_into(key, 8, round_keys.as_mut_array());
        Ok(Self { round_keys })
    }

    fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        encrypt_with_schedule(self.round_keys.as_array(), AES256_ROUNDS, block);
    }
}

impl core::fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Aes128 { .. }")
    }
}

impl core::fmt::Debug for Aes256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Aes256 { .. }")
    }
}
