//! AES-256-GCM instantiation

use srtp_aead_algorithms::{Aes256, SoftGHash};
use srtp_aead_api::error::Result;

use super::{kat, GcmContext};

/// AES-256-GCM engine over the software primitives
pub type Aes256GcmContext = GcmContext<Aes256, SoftGHash>;

impl GcmContext<Aes256, SoftGHash> {
    /// Run the AES-256 known-answer vector on a fresh 16-byte-tag context
    pub fn self_test() -> Result<()> {
        let mut ctx = Self::new(16)?;
        kat::run(&mut ctx)
    }
}
