//! Block cipher implementations
//!
//! GCM only ever runs its block cipher forward, so these types implement
//! encryption and key expansion and nothing else.

pub mod aes;

pub use aes::{Aes128, Aes256};
pub use srtp_aead_api::traits::BlockCipher;
