//! Validated inclusive candidate ranges.

use crate::error::{HappyError, HappyResult};

/// An inclusive range of positive candidates.
///
/// Invariant: `1 <= start <= end`. Immutable after construction, so every
/// candidate produced by [`Range::iter`] is a valid classifier input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: u64,
    end: u64,
}

impl Range {
    /// Creates an inclusive range over `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`HappyError::InvalidRange`] unless `1 <= start <= end`.
    pub const fn new(start: u64, end: u64) -> HappyResult<Self> {
        if start == 0 || end < start {
            return Err(HappyError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First candidate in the range.
    #[must_use]
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// Last candidate in the range (inclusive).
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.end
    }

    /// Number of candidates in the range.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// A validated range is never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the candidates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u64> {
        self.start..=self.end
    }
}
