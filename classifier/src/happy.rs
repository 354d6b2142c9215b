//! Digit-square-sum iteration and Floyd cycle detection.

use crate::error::{HappyError, HappyResult};
use crate::range::Range;

/// Maps `n` to the sum of the squares of its base-10 digits.
///
/// Total function; `digit_square_sum(0) == 0`. The result of one step is
/// bounded by `81 * digit_count(n)`, so iterated values never grow without
/// bound.
#[must_use]
pub const fn digit_square_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        let digit = n % 10;
        sum += digit * digit;
        n /= 10;
    }
    sum
}

/// Classifies `n` as happy or unhappy.
///
/// Runs Floyd cycle detection over the iterated digit-square-sum sequence:
/// the slow iterator advances one step per round, the fast iterator two.
/// The sequence is eventually periodic, so the iterators must meet; `n` is
/// happy exactly when the meeting value is the fixed point 1.
///
/// # Errors
///
/// Returns [`HappyError::ZeroCandidate`] for `n == 0`; classification is
/// defined for positive integers only.
pub fn is_happy(n: u64) -> HappyResult<bool> {
    if n == 0 {
        return Err(HappyError::ZeroCandidate);
    }
    Ok(reaches_one(n))
}

/// Counts the happy numbers in `range`, inclusive on both ends.
///
/// Linear scan; infallible because [`Range`] guarantees every candidate is
/// positive.
#[must_use]
pub fn count_happy(range: &Range) -> u64 {
    range.iter().filter(|&n| reaches_one(n)).count() as u64
}

fn reaches_one(n: u64) -> bool {
    let mut slow = n;
    let mut fast = n;
    loop {
        slow = digit_square_sum(slow);
        fast = digit_square_sum(digit_square_sum(fast));
        if slow == fast {
            return slow == 1;
        }
    }
}
