//! Benchmark fixture generation for happy-number counting.
//!
//! This crate provides:
//!
//! - Validated generation parameters with the reference defaults
//! - A seeded range generator pairing each drawn range with its happy count
//! - Declarative benchmark-line formatting and a JSON manifest record
//!
//! # Design Principles
//!
//! - **Self-consistent** - every emitted case carries a count that re-deriving
//!   from its own range reproduces; [`BenchmarkCase::verify`] makes that
//!   check callable.
//! - **Reproducible** - all draws flow from a single seed; equal seeds and
//!   parameters produce identical fixtures.
//! - **Index-ordered** - cases are produced and emitted in index order.

use std::fmt;

use classifier::{count_happy, Range};
use serde::Serialize;

/// Reference number of cases per run.
pub const DEFAULT_CASES: u32 = 10;

/// Reference upper bound (inclusive) for the range start draw.
pub const DEFAULT_START_BOUND: u64 = 10_000;

/// Reference upper bound (inclusive) for the range span draw.
pub const DEFAULT_SPAN_BOUND: u64 = 30;

/// Errors for invalid generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    /// Case count must be at least 1.
    ZeroCases,

    /// Start bound must be at least 1.
    ZeroStartBound,

    /// Span bound must be at least 1.
    ZeroSpanBound,
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Self::ZeroCases => "case count",
            Self::ZeroStartBound => "start bound",
            Self::ZeroSpanBound => "span bound",
        };
        write!(f, "{what} must be a positive integer")
    }
}

impl std::error::Error for GenError {}

/// Validated generation parameters.
///
/// Fields are private so every constructed value satisfies the positivity
/// preconditions; [`generate`] is infallible as a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenParams {
    cases: u32,
    start_bound: u64,
    span_bound: u64,
    seed: u64,
}

impl GenParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`GenError`] if the case count or either bound is zero.
    pub const fn new(
        cases: u32,
        start_bound: u64,
        span_bound: u64,
        seed: u64,
    ) -> Result<Self, GenError> {
        if cases == 0 {
            return Err(GenError::ZeroCases);
        }
        if start_bound == 0 {
            return Err(GenError::ZeroStartBound);
        }
        if span_bound == 0 {
            return Err(GenError::ZeroSpanBound);
        }
        Ok(Self {
            cases,
            start_bound,
            span_bound,
            seed,
        })
    }

    /// Parameters of the reference invocation: 10 cases, starts drawn from
    /// `[1, 10000]`, spans from `[1, 30]`.
    #[must_use]
    pub const fn reference(seed: u64) -> Self {
        Self {
            cases: DEFAULT_CASES,
            start_bound: DEFAULT_START_BOUND,
            span_bound: DEFAULT_SPAN_BOUND,
            seed,
        }
    }

    /// Number of cases to generate.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Upper bound (inclusive) for the range start draw.
    #[must_use]
    pub const fn start_bound(&self) -> u64 {
        self.start_bound
    }

    /// Upper bound (inclusive) for the range span draw.
    #[must_use]
    pub const fn span_bound(&self) -> u64 {
        self.span_bound
    }

    /// Seed driving all draws of the run.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

/// A generated fixture: an inclusive range and its happy-number count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchmarkCase {
    /// Zero-based case index within the run.
    pub index: u32,
    /// First candidate of the range.
    pub start: u64,
    /// Last candidate of the range (inclusive, always greater than `start`).
    pub end: u64,
    /// Number of happy numbers in `[start, end]`.
    pub happy_count: u64,
}

impl BenchmarkCase {
    /// Re-derives the happy count from the stored range and compares it to
    /// the stored count.
    #[must_use]
    pub fn verify(&self) -> bool {
        Range::new(self.start, self.end).is_ok_and(|range| count_happy(&range) == self.happy_count)
    }
}

impl fmt::Display for BenchmarkCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IBenchmark happyNumbersBenchmark{} = new CountingHappyNumbersBenchmark({}, {}, {});",
            self.index, self.start, self.end, self.happy_count
        )
    }
}

/// Serializable record of a full generation run.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub cases: u32,
    pub start_bound: u64,
    pub span_bound: u64,
    pub seed: u64,
    pub total_happy: u64,
    pub fixtures: Vec<BenchmarkCase>,
}

impl Manifest {
    /// Builds a manifest echoing the parameters that produced `fixtures`.
    #[must_use]
    pub fn new(params: &GenParams, fixtures: Vec<BenchmarkCase>) -> Self {
        let total_happy = fixtures.iter().map(|case| case.happy_count).sum();
        Self {
            cases: params.cases(),
            start_bound: params.start_bound(),
            span_bound: params.span_bound(),
            seed: params.seed(),
            total_happy,
            fixtures,
        }
    }
}

/// Generates the benchmark cases for `params`, in index order.
///
/// Per case: `start` is drawn from `[1, start_bound]`, the span from
/// `[1, span_bound]`, and `end = start + span`, so `end > start` always (the
/// reference generator never produces a single-element range). The count is
/// derived by classifying every candidate in the inclusive range.
#[must_use]
pub fn generate(params: &GenParams) -> Vec<BenchmarkCase> {
    let mut rng = Rng::new(params.seed());
    let mut fixtures = Vec::with_capacity(params.cases() as usize);
    for index in 0..params.cases() {
        let start = rng.range_u64(1, params.start_bound());
        let span = rng.range_u64(1, params.span_bound());
        let end = start + span;
        let range = Range::new(start, end).expect("drawn bounds must form a valid range");
        fixtures.push(BenchmarkCase {
            index,
            start,
            end,
            happy_count: count_happy(&range),
        });
    }
    fixtures
}

/// Small linear-congruential generator; enough for fixture draws and fully
/// deterministic given a seed.
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Creates a generator from `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 32 raw bits.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Uniform draw from `[min, max]`, inclusive on both ends.
    pub fn range_u64(&mut self, min: u64, max: u64) -> u64 {
        debug_assert!(min <= max);
        let span = max.wrapping_sub(min).wrapping_add(1);
        if span == 0 {
            return u64::from(self.next_u32()) << 32 | u64::from(self.next_u32());
        }
        min + u64::from(self.next_u32()) % span
    }
}
