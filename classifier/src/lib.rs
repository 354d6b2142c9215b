//! Happy-number classification for the happybench fixture generator.
//!
//! This crate provides:
//!
//! - The digit-square-sum step function
//! - Floyd (tortoise/hare) happy-number classification
//! - Validated inclusive ranges and per-range happy counts
//!
//! # Design Principles
//!
//! - **Total where possible** - `digit_square_sum` is defined for all inputs;
//!   only the zero candidate and malformed ranges are rejected.
//! - **Constant space** - classification never allocates; cycle detection
//!   uses two iterators, not a seen-set.
//! - **No special cases** - `is_happy(1)` falls out of the general loop.

mod error;
mod happy;
mod range;

pub use error::{HappyError, HappyResult};
pub use happy::{count_happy, digit_square_sum, is_happy};
pub use range::Range;
