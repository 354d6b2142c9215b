//! Error types for classification operations.

use std::fmt;

/// Result type for classification operations.
pub type HappyResult<T> = Result<T, HappyError>;

/// Errors that can occur when classifying candidates or building ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HappyError {
    /// The candidate was zero; classification is defined for n >= 1.
    ZeroCandidate,

    /// Range bounds violate `1 <= start <= end`.
    InvalidRange { start: u64, end: u64 },
}

impl fmt::Display for HappyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCandidate => {
                write!(f, "candidate must be a positive integer, got 0")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range [{start}, {end}]: need 1 <= start <= end")
            }
        }
    }
}

impl std::error::Error for HappyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_zero_candidate() {
        let msg = HappyError::ZeroCandidate.to_string();
        assert!(msg.contains("positive"), "should mention positivity");
    }

    #[test]
    fn error_display_invalid_range() {
        let err = HappyError::InvalidRange { start: 9, end: 3 };
        let msg = err.to_string();
        assert!(msg.contains('9'), "should mention start");
        assert!(msg.contains('3'), "should mention end");
    }

    #[test]
    fn error_equality() {
        let err1 = HappyError::InvalidRange { start: 0, end: 5 };
        let err2 = HappyError::InvalidRange { start: 0, end: 5 };
        let err3 = HappyError::ZeroCandidate;

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<HappyError>();
    }
}
