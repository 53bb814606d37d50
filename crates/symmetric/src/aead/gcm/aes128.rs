//! AES-128-GCM instantiation

use srtp_aead_algorithms::{Aes128, SoftGHash};
use srtp_aead_api::error::Result;

use super::{kat, GcmContext};

/// AES-128-GCM engine over the software primitives
pub type Aes128GcmContext = GcmContext<Aes128, SoftGHash>;

impl GcmContext<Aes128, SoftGHash> {
    /// Run the AES-128 known-answer vector on a fresh 16-byte-tag context
    pub fn self_test() -> Result<()> {
        let mut ctx = Self::new(16)?;
        kat::run(&mut ctx)
    }
}
