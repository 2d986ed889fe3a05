//! Search space size and brute-force time estimation.
//!
//! This is a facade crate that re-exports functionality from the possibilities
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use possibilities_lib::prelude::*;
//!
//! let estimator = Estimator::new(BranchingModel::new(Variant::Decay));
//! let estimate = estimator.run(13)?;
//! assert_eq!(estimate.rounded_total(), 11_201_899_998.0);
//!
//! let mut out = Vec::new();
//! ReportFormatter::new().write_report(&estimate, &mut out)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/possibilities/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use possibilities_types::*;

// Re-export estimation
pub use possibilities_estimate::{
    BranchingModel, DEFAULT_ALPHABET_LENGTH, EVALUATIONS_PER_SECOND, Estimate, Estimator,
    MAX_LENGTH, ReportFormatter, formula_a, formula_b, round_to,
};

/// Prelude module for convenient imports.
///
/// ```
/// use possibilities_lib::prelude::*;
/// ```
pub mod prelude {
    pub use possibilities_types::{EstimateError, Result, Variant};

    pub use possibilities_estimate::{BranchingModel, Estimate, Estimator, ReportFormatter};
}
