//! Search space estimation logic.

use possibilities_types::{EstimateError, Result, Variant};
use serde::Serialize;
use tracing::{debug, trace};

use crate::model::BranchingModel;

/// Assumed evaluation throughput.
pub const EVALUATIONS_PER_SECOND: f64 = 1_000_000.0;

/// Each position's factor is halved before it is multiplied in.
const ELIMINATION_DIVISOR: f64 = 2.0;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Longest pattern the estimator accepts.
pub const MAX_LENGTH: usize = 100_000;

/// Rounds `value` to `decimals` places, ties to even.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals == 0 {
        return value.round_ties_even();
    }
    let scale = 10_f64.powi(decimals as i32);
    (value * scale).round_ties_even() / scale
}

/// Estimated search space for a single pattern length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    /// Model the estimate was computed with.
    pub variant: Variant,
    /// Number of positions estimated.
    pub length: usize,
    /// Total possibilities tested, unrounded.
    pub total: f64,
    /// Minutes to test every possibility, unrounded.
    pub minutes: f64,
}

impl Estimate {
    /// Returns the total rounded to the nearest integer.
    #[must_use]
    pub fn rounded_total(&self) -> f64 {
        round_to(self.total, 0)
    }

    /// Returns the minutes rounded to the variant's precision.
    #[must_use]
    pub fn rounded_minutes(&self) -> f64 {
        round_to(self.minutes, self.variant.minutes_precision())
    }
}

/// Search space and exhaustive search time estimator.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    model: BranchingModel,
}

impl Estimator {
    /// Creates a new estimator for the given model.
    #[must_use]
    pub const fn new(model: BranchingModel) -> Self {
        Self { model }
    }

    /// Estimates the search space for the variant's default length.
    ///
    /// # Errors
    ///
    /// Returns an error if the variant's default length is rejected.
    pub fn run_default(&self) -> Result<Estimate> {
        self.run(self.model.variant().default_length())
    }

    /// Estimates the search space for a pattern of `length` positions.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is zero or exceeds [`MAX_LENGTH`].
    pub fn run(&self, length: usize) -> Result<Estimate> {
        if length == 0 || length > MAX_LENGTH {
            return Err(EstimateError::InvalidLength {
                length,
                max: MAX_LENGTH,
            });
        }

        let mut possibilities = self.model.initial();
        for index in self.model.first_index()..length {
            let factor = self.model.factor(index);
            possibilities *= factor / ELIMINATION_DIVISOR;
            trace!(index, factor, possibilities, "applied position factor");
        }

        let minutes = possibilities / EVALUATIONS_PER_SECOND / SECONDS_PER_MINUTE;
        debug!(
            variant = %self.model.variant(),
            length,
            total = possibilities,
            minutes,
            "estimated search space"
        );

        Ok(Estimate {
            variant: self.model.variant(),
            length,
            total: possibilities,
            minutes,
        })
    }
}
