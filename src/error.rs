//! Error type for the few operations that validate caller input.

use thiserror::Error;

/// Errors surfaced to the caller before any rewriting or drawing happens.
///
/// Rewriting and interpretation themselves are total: unknown symbols, empty
/// replacements and stack underflow are all valid input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LSystemError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl LSystemError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Converts a signed generation count from a host API into the `u32` the engine takes.
///
/// Negative counts are rejected rather than clamped.
pub fn generations_from_signed(generations: i64) -> Result<u32, LSystemError> {
    u32::try_from(generations).map_err(|_| {
        LSystemError::invalid(
            "generations",
            format!("expected a count in 0..={}, got {generations}", u32::MAX),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_generations_accept_zero_and_positive() {
        assert_eq!(generations_from_signed(0), Ok(0));
        assert_eq!(generations_from_signed(7), Ok(7));
    }

    #[test]
    fn negative_generations_are_invalid() {
        let err = generations_from_signed(-1).unwrap_err();
        assert!(matches!(
            err,
            LSystemError::InvalidArgument {
                name: "generations",
                ..
            }
        ));
        assert!(err.to_string().contains("got -1"));
    }
}
