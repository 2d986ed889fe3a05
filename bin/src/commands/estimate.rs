//! Estimate command implementation.
//!
//! Builds the branching model from the CLI arguments, runs the estimator, and
//! writes the report to stdout.

use std::io;

use anyhow::{Context, Result};
use possibilities_lib::prelude::*;
use tracing::{info, warn};

/// Estimate the search space for `variant` and print the report.
pub(crate) fn estimate(
    variant: Variant,
    length: Option<usize>,
    alphabet: Option<u32>,
) -> Result<()> {
    let model = match alphabet {
        Some(alphabet) if variant == Variant::Decay => BranchingModel::decay(alphabet)
            .with_context(|| format!("Cannot build decay model with alphabet {alphabet}"))?,
        Some(alphabet) => {
            warn!(alphabet, %variant, "alphabet length ignored");
            BranchingModel::new(variant)
        }
        None => BranchingModel::new(variant),
    };
    let length = length.unwrap_or_else(|| variant.default_length());
    info!(%variant, length, "estimating search space");

    let estimate = Estimator::new(model)
        .run(length)
        .with_context(|| format!("Cannot estimate {variant} search space"))?;

    ReportFormatter::new()
        .write_report(&estimate, io::stdout().lock())
        .context("Failed to write report")?;

    Ok(())
}
