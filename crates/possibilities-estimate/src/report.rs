//! Plain-text estimate report.

use std::io::{self, Write};

use crate::estimator::Estimate;
use crate::model::BranchingModel;

/// Writes the two-line estimate report, followed by a factor dump for variants that have one.
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    /// Blank lines between the summary and the factor dump.
    separator_lines: usize,
}

impl ReportFormatter {
    /// Creates a new report formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self { separator_lines: 3 }
    }

    /// Writes the report for `estimate`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_report<W: Write>(&self, estimate: &Estimate, mut writer: W) -> io::Result<()> {
        writeln!(
            writer,
            "possibilities tested: {}",
            format_count(estimate.rounded_total())
        )?;
        writeln!(
            writer,
            "minutes: {}",
            format_rounded(
                estimate.rounded_minutes(),
                estimate.variant.minutes_precision()
            )
        )?;

        if estimate.variant.has_factor_dump() {
            for _ in 0..self.separator_lines {
                writeln!(writer)?;
            }
            let model = BranchingModel::from(estimate.variant);
            for index in 0..estimate.length {
                writeln!(writer, "{index}: {:?}", model.factor(index))?;
            }
        }

        writer.flush()
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats an already-rounded count without a decimal point.
fn format_count(value: f64) -> String {
    format!("{value:.0}")
}

/// Formats a rounded value: integers bare, fractional values in shortest form.
fn format_rounded(value: f64, decimals: u32) -> String {
    if decimals == 0 {
        format_count(value)
    } else {
        format!("{value:?}")
    }
}
