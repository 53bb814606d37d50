//! Known-answer self tests
//!
//! Each suite carries one vector from the GCM submission's test set (case 4
//! for AES-128, case 16 for AES-256). Both use a 96-bit nonce, 20 bytes of
//! associated data and a 60-byte payload, so partial blocks on both sides
//! are exercised.

use srtp_aead_api::error::{validate, Result};
use srtp_aead_api::traits::AeadEngine;
use srtp_aead_api::types::{CipherSuite, Direction};
use zeroize::Zeroize;

/// One AEAD known-answer vector
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    /// Raw key
    pub key: &'static [u8],
    /// Nonce
    pub nonce: &'static [u8],
    /// Associated data
    pub aad: &'static [u8],
    /// Plaintext
    pub plaintext: &'static [u8],
    /// Expected ciphertext
    pub ciphertext: &'static [u8],
    /// Expected full-length tag
    pub tag: &'static [u8; 16],
}

const KEY_128: [u8; 16] = [
    0xfe, 0xff, 0xe9, 0x92, 0x86, 0x65, 0x73, 0x1c, 0x6d, 0x6a, 0x8f, 0x94,
    0x67, 0x30, 0x83, 0x08,
];

const KEY_256: [u8; 32] = [
    0xfe, 0xff, 0xe9, 0x92, 0x86, 0x65, 0x73, 0x1c, 0x6d, 0x6a, 0x8f, 0x94,
    0x67, 0x30, 0x83, 0x08, 0xfe, 0xff, 0xe9, 0x92, 0x86, 0x65, 0x73, 0x1c,
    0x6d, 0x6a, 0x8f, 0x94, 0x67, 0x30, 0x83, 0x08,
];

const NONCE: [u8; 12] = [
    0xca, 0xfe, 0xba, 0xbe, 0xfa, 0xce, 0xdb, 0xad, 0xde, 0xca, 0xf8, 0x88,
];

const AAD: [u8; 20] = [
    0xfe, 0xed, 0xfa, 0xce, 0xde, 0xad, 0xbe, 0xef, 0xfe, 0xed, 0xfa, 0xce,
    0xde, 0xad, 0xbe, 0xef, 0xab, 0xad, 0xda, 0xd2,
];

const PLAINTEXT: [u8; 60] = [
    0xd9, 0x31, 0x32, 0x25, 0xf8, 0x84, 0x06, 0xe5, 0xa5, 0x59, 0x09, 0xc5,
    0xaf, 0xf5, 0x26, 0x9a, 0x86, 0xa7, 0xa9, 0x53, 0x15, 0x34, 0xf7, 0xda,
    0x2e, 0x4c, 0x30, 0x3d, 0x8a, 0x31, 0x8a, 0x72, 0x1c, 0x3c, 0x0c, 0x95,
    0x95, 0x68, 0x09, 0x53, 0x2f, 0xcf, 0x0e, 0x24, 0x49, 0xa6, 0xb5, 0x25,
    0xb1, 0x6a, 0xed, 0xf5, 0xaa, 0x0d, 0xe6, 0x57, 0xba, 0x63, 0x7b, 0x39,
];

const CIPHERTEXT_128: [u8; 60] = [
    0x42, 0x83, 0x1e, 0xc2, 0x21, 0x77, 0x74, 0x24, 0x4b, 0x72, 0x21, 0xb7,
    0x84, 0xd0, 0xd4, 0x9c, 0xe3, 0xaa, 0x21, 0x2f, 0x2c, 0x02, 0xa4, 0xe0,
    0x35, 0xc1, 0x7e, 0x23, 0x29, 0xac, 0xa1, 0x2e, 0x21, 0xd5, 0x14, 0xb2,
    0x54, 0x66, 0x93, 0x1c, 0x7d, 0x8f, 0x6a, 0x5a, 0xac, 0x84, 0xaa, 0x05,
    0x1b, 0xa3, 0x0b, 0x39, 0x6a, 0x0a, 0xac, 0x97, 0x3d, 0x58, 0xe0, 0x91,
];

const TAG_128: [u8; 16] = [
    0x5b, 0xc9, 0x4f, 0xbc, 0x32, 0x21, 0xa5, 0xdb, 0x94, 0xfa, 0xe9, 0x5a,
    0xe7, 0x12, 0x1a, 0x47,
];

const CIPHERTEXT_256: [u8; 60] = [
    0x52, 0x2d, 0xc1, 0xf0, 0x99, 0x56, 0x7d, 0x07, 0xf4, 0x7f, 0x37, 0xa3,
    0x2a, 0x84, 0x42, 0x7d, 0x64, 0x3a, 0x8c, 0xdc, 0xbf, 0xe5, 0xc0, 0xc9,
    0x75, 0x98, 0xa2, 0xbd, 0x25, 0x55, 0xd1, 0xaa, 0x8c, 0xb0, 0x8e, 0x48,
    0x59, 0x0d, 0xbb, 0x3d, 0xa7, 0xb0, 0x8b, 0x10, 0x56, 0x82, 0x88, 0x38,
    0xc5, 0xf6, 0x1e, 0x63, 0x93, 0xba, 0x7a, 0x0a, 0xbc, 0xc9, 0xf6, 0x62,
];

const TAG_256: [u8; 16] = [
    0x76, 0xfc, 0x6e, 0xce, 0x0f, 0x4e, 0x17, 0x68, 0xcd, 0xdf, 0x88, 0x53,
    0xbb, 0x2d, 0x55, 0x1b,
];

/// AES-128-GCM, test case 4
pub const AES_128_GCM_KAT: KnownAnswer = KnownAnswer {
    key: &KEY_128,
    nonce: &NONCE,
    aad: &AAD,
    plaintext: &PLAINTEXT,
    ciphertext: &CIPHERTEXT_128,
    tag: &TAG_128,
};

/// AES-256-GCM, test case 16
pub const AES_256_GCM_KAT: KnownAnswer = KnownAnswer {
    key: &KEY_256,
    nonce: &NONCE,
    aad: &AAD,
    plaintext: &PLAINTEXT,
    ciphertext: &CIPHERTEXT_256,
    tag: &TAG_256,
};

/// Known-answer vector for a suite
pub fn for_suite(suite: CipherSuite) -> &'static KnownAnswer {
    match suite {
        CipherSuite::AesGcm128 => &AES_128_GCM_KAT,
        CipherSuite::AesGcm256 => &AES_256_GCM_KAT,
    }
}

/// Run the engine's suite vector through a full encrypt and decrypt
///
/// Installs the vector's key, replacing any key already in `engine`. Any
/// mismatch in ciphertext, tag or recovered plaintext is reported as
/// `AuthenticationFailure`.
pub fn run(engine: &mut dyn AeadEngine) -> Result<()> {
    const CONTEXT: &str = "GCM self test";

    let kat = for_suite(engine.suite());
    let tag_len = engine.tag_len();
    let len = kat.plaintext.len();
    let mut buf = [0u8; 80];

    engine.init_key(kat.key)?;

    // Encrypt, with the associated data and payload split mid-block
    buf[..len].copy_from_slice(kat.plaintext);
    engine.set_nonce(Direction::Encrypt, kat.nonce)?;
    engine.update_aad(&kat.aad[..7])?;
    engine.update_aad(&kat.aad[7..])?;
    engine.encrypt(&mut buf[..21], 21)?;
    engine.encrypt(&mut buf[21..len], len - 21)?;
    let tag = engine.finalize_tag()?;

    let ciphertext_ok = buf[..len] == *kat.ciphertext;
    let tag_ok = tag.verify(&kat.tag[..tag_len]);

    // Decrypt in one pass
    engine.set_nonce(Direction::Decrypt, kat.nonce)?;
    engine.update_aad(kat.aad)?;
    buf[len..len + tag_len].copy_from_slice(&kat.tag[..tag_len]);
    let plain_len = engine.decrypt(&mut buf[..len + tag_len], len + tag_len)?;
    let plaintext_ok = buf[..plain_len] == *kat.plaintext;

    buf.zeroize();
    validate::authentication(ciphertext_ok && tag_ok && plaintext_ok, CONTEXT)
}
