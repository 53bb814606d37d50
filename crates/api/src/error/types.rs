//! Error type definitions for AEAD operations
//!
//! The four kinds mirror the status codes a host transport understands.
//! Variants carry only static context; no key, nonce, keystream or tag bytes
//! ever reach an error value.

use srtp_aead_params::status;

/// Primary error type for AEAD engine operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// Unsupported tag length or key size, malformed key or nonce, invalid
    /// direction value, or a logical length larger than its buffer
    #[cfg_attr(feature = "std", error("{context}: bad parameter: {reason}"))]
    BadParameter {
        context: &'static str,
        reason: &'static str,
    },

    /// Operation invoked outside the construct / key / nonce / data /
    /// finalize ordering
    #[cfg_attr(feature = "std", error("{context}: sequence error: {reason}"))]
    SequenceError {
        context: &'static str,
        reason: &'static str,
    },

    /// Associated-data or payload byte count would pass the algorithm limit
    /// or wrap its counter
    #[cfg_attr(feature = "std", error("{context}: algorithm limit of {limit} bytes exceeded"))]
    AlgorithmLimitExceeded {
        context: &'static str,
        limit: u64,
    },

    /// Tag mismatch or input shorter than the tag
    #[cfg_attr(feature = "std", error("{context}: authentication failed"))]
    AuthenticationFailure {
        context: &'static str,
    },
}

/// Result type for AEAD operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a BadParameter error
    pub fn bad_param(context: &'static str, reason: &'static str) -> Self {
        Self::BadParameter { context, reason }
    }

    /// Shorthand to create a SequenceError
    pub fn sequence(context: &'static str, reason: &'static str) -> Self {
        Self::SequenceError { context, reason }
    }

    /// Status code the host transport uses for this error kind
    pub fn code(&self) -> u32 {
        match self {
            Self::BadParameter { .. } => status::BAD_PARAM,
            Self::SequenceError { .. } => status::CIPHER_FAIL,
            Self::AlgorithmLimitExceeded { .. } => status::ALGO_FAIL,
            Self::AuthenticationFailure { .. } => status::AUTH_FAIL,
        }
    }

    /// Operation that produced the error
    pub fn context(&self) -> &'static str {
        match self {
            Self::BadParameter { context, .. }
            | Self::SequenceError { context, .. }
            | Self::AlgorithmLimitExceeded { context, .. }
            | Self::AuthenticationFailure { context } => context,
        }
    }

    /// Replace the operation context, keeping the kind and details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::BadParameter { reason, .. } => Self::BadParameter { context, reason },
            Self::SequenceError { reason, .. } => Self::SequenceError { context, reason },
            Self::AlgorithmLimitExceeded { limit, .. } => {
                Self::AlgorithmLimitExceeded { context, limit }
            }
            Self::AuthenticationFailure { .. } => Self::AuthenticationFailure { context },
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BadParameter { context, reason } => {
                write!(f, "{}: bad parameter: {}", context, reason)
            }
            Self::SequenceError { context, reason } => {
                write!(f, "{}: sequence error: {}", context, reason)
            }
            Self::AlgorithmLimitExceeded { context, limit } => {
                write!(f, "{}: algorithm limit of {} bytes exceeded", context, limit)
            }
            Self::AuthenticationFailure { context } => {
                write!(f, "{}: authentication failed", context)
            }
        }
    }
}
