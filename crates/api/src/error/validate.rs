//! Validation utilities used at every engine precondition

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::BadParameter { context, reason });
    }
    Ok(())
}

/// Validate that an operation is called in sequence
#[inline(always)]
pub fn sequence(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::SequenceError { context, reason });
    }
    Ok(())
}

/// Add `amount` to a running byte count, failing if the total would wrap
/// or pass `max`. Returns the new total; the caller stores it only on success.
#[inline(always)]
pub fn limit(current: u64, amount: u64, max: u64, context: &'static str) -> Result<u64> {
    match current.checked_add(amount) {
        Some(total) if total <= max => Ok(total),
        _ => Err(Error::AlgorithmLimitExceeded { context, limit: max }),
    }
}

/// Validate authentication
#[inline(always)]
pub fn authentication(is_valid: bool, context: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::AuthenticationFailure { context });
    }
    Ok(())
}
