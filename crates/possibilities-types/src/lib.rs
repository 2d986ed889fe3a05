//! Core types for the possibilities search cost estimator.
//!
//! This crate provides the fundamental data structures shared by the workspace:
//!
//! - [`Variant`] - Branching model selecting the starting value and per-position formula
//! - [`EstimateError`] - Errors raised when an estimate cannot be computed
//! - [`Result`] - Result alias over [`EstimateError`]

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/possibilities/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod variant;

pub use error::{EstimateError, Result};
pub use variant::{Variant, VariantParseError};
