//! Search space size and exhaustive-search time estimation.
//!
//! This crate multiplies per-position branching factors into a search space
//! size and converts it into minutes at a fixed evaluation rate:
//!
//! - [`BranchingModel`] - Starting value and per-position formula for a [`Variant`]
//! - [`Estimator`] - Computes an [`Estimate`] for a pattern length
//! - [`Estimate`] - Unrounded total possibilities and minutes
//! - [`ReportFormatter`] - Writes the plain-text report
//!
//! [`Variant`]: possibilities_types::Variant

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/possibilities/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod model;
mod report;

pub use estimator::{EVALUATIONS_PER_SECOND, Estimate, Estimator, MAX_LENGTH, round_to};
pub use model::{BranchingModel, DEFAULT_ALPHABET_LENGTH, formula_a, formula_b};
pub use report::ReportFormatter;
