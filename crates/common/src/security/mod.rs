//! Security primitives for key schedules, hash subkeys and counter blocks.

pub mod secret;

pub use secret::SecretBuffer;
