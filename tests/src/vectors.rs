//! AES-GCM known-answer vectors
//!
//! Test cases from the original GCM submission (McGrew and Viega), also
//! published with NIST SP 800-38D. Only cases with a 96-bit or 64-bit nonce
//! are included.

use srtp_aead_api::CipherSuite;

/// One hex-encoded vector
#[derive(Debug, Clone, Copy)]
pub struct GcmVector {
    pub name: &'static str,
    pub suite: CipherSuite,
    pub key: &'static str,
    pub nonce: &'static str,
    pub aad: &'static str,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
    pub tag: &'static str,
}

/// A vector with its fields decoded
#[derive(Debug, Clone)]
pub struct DecodedVector {
    pub name: &'static str,
    pub suite: CipherSuite,
    pub key: Vec<u8>,
    pub nonce: Vec<u8>,
    pub aad: Vec<u8>,
    pub plaintext: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
}

impl GcmVector {
    /// Decode every hex field
    pub fn decode(&self) -> DecodedVector {
        let field = |s: &str| hex::decode(s).unwrap_or_else(|e| panic!("{}: {}", self.name, e));
        DecodedVector {
            name: self.name,
            suite: self.suite,
            key: field(self.key),
            nonce: field(self.nonce),
            aad: field(self.aad),
            plaintext: field(self.plaintext),
            ciphertext: field(self.ciphertext),
            tag: field(self.tag),
        }
    }
}

const K_ZERO_128: &str = "00000000000000000000000000000000";
const K_ZERO_256: &str = "0000000000000000000000000000000000000000000000000000000000000000";
const K_FEFF_128: &str = "feffe9928665731c6d6a8f9467308308";
const K_FEFF_256: &str = "feffe9928665731c6d6a8f9467308308feffe9928665731c6d6a8f9467308308";
const IV_ZERO: &str = "000000000000000000000000";
const IV_CAFE: &str = "cafebabefacedbaddecaf888";
const AAD_FEED: &str = "feedfacedeadbeeffeedfacedeadbeefabaddad2";
const PT_64: &str = "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d8a318a72\
                     1c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657ba637b391aafd255";
const PT_60: &str = "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d8a318a72\
                     1c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657ba637b39";

/// All vectors, AES-128 first
pub const GCM_VECTORS: &[GcmVector] = &[
    GcmVector {
        name: "AES-128 test case 1",
        suite: CipherSuite::AesGcm128,
        key: K_ZERO_128,
        nonce: IV_ZERO,
        aad: "",
        plaintext: "",
        ciphertext: "",
        tag: "58e2fccefa7e3061367f1d57a4e7455a",
    },
    GcmVector {
        name: "AES-128 test case 2",
        suite: CipherSuite::AesGcm128,
        key: K_ZERO_128,
        nonce: IV_ZERO,
        aad: "",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "0388dace60b6a392f328c2b971b2fe78",
        tag: "ab6e47d42cec13bdf53a67b21257bddf",
    },
    GcmVector {
        name: "AES-128 test case 3",
        suite: CipherSuite::AesGcm128,
        key: K_FEFF_128,
        nonce: IV_CAFE,
        aad: "",
        plaintext: PT_64,
        ciphertext: "42831ec2217774244b7221b784d0d49ce3aa212f2c02a4e035c17e2329aca12e\
                     21d514b25466931c7d8f6a5aac84aa051ba30b396a0aac973d58e091473f5985",
        tag: "4d5c2af327cd64a62cf35abd2ba6fab4",
    },
    GcmVector {
        name: "AES-128 test case 4",
        suite: CipherSuite::AesGcm128,
        key: K_FEFF_128,
        nonce: IV_CAFE,
        aad: AAD_FEED,
        plaintext: PT_60,
        ciphertext: "42831ec2217774244b7221b784d0d49ce3aa212f2c02a4e035c17e2329aca12e\
                     21d514b25466931c7d8f6a5aac84aa051ba30b396a0aac973d58e091",
        tag: "5bc94fbc3221a5db94fae95ae7121a47",
    },
    GcmVector {
        name: "AES-128 test case 5",
        suite: CipherSuite::AesGcm128,
        key: K_FEFF_128,
        nonce: "cafebabefacedbad",
        aad: AAD_FEED,
        plaintext: PT_60,
        ciphertext: "61353b4c2806934a777ff51fa22a4755699b2a714fcdc6f83766e5f97b6c7423\
                     73806900e49f24b22b097544d4896b424989b5e1ebac0f07c23f4598",
        tag: "3612d2e79e3b0785561be14aaca2fccb",
    },
    GcmVector {
        name: "AES-256 test case 13",
        suite: CipherSuite::AesGcm256,
        key: K_ZERO_256,
        nonce: IV_ZERO,
        aad: "",
        plaintext: "",
        ciphertext: "",
        tag: "530f8afbc74536b9a963b4f1c4cb738b",
    },
    GcmVector {
        name: "AES-256 test case 14",
        suite: CipherSuite::AesGcm256,
        key: K_ZERO_256,
        nonce: IV_ZERO,
        aad: "",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "cea7403d4d606b6e074ec5d3baf39d18",
        tag: "d0d1c8a799996bf0265b98b5d48ab919",
    },
    GcmVector {
        name: "AES-256 test case 15",
        suite: CipherSuite::AesGcm256,
        key: K_FEFF_256,
        nonce: IV_CAFE,
        aad: "",
        plaintext: PT_64,
        ciphertext: "522dc1f099567d07f47f37a32a84427d643a8cdcbfe5c0c97598a2bd2555d1aa\
                     8cb08e48590dbb3da7b08b1056828838c5f61e6393ba7a0abcc9f662898015ad",
        tag: "b094dac5d93471bdec1a502270e3cc6c",
    },
    GcmVector {
        name: "AES-256 test case 16",
        suite: CipherSuite::AesGcm256,
        key: K_FEFF_256,
        nonce: IV_CAFE,
        aad: AAD_FEED,
        plaintext: PT_60,
        ciphertext: "522dc1f099567d07f47f37a32a84427d643a8cdcbfe5c0c97598a2bd2555d1aa\
                     8cb08e48590dbb3da7b08b1056828838c5f61e6393ba7a0abcc9f662",
        tag: "76fc6ece0f4e1768cddf8853bb2d551b",
    },
];
