//! Benchmark utilities for possibilities.

use std::hint::black_box;
use std::time::{Duration, Instant};

use possibilities_lib::prelude::*;

/// Result of a single benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Name of the benchmark case.
    pub name: String,
    /// Total time spent estimating.
    pub duration: Duration,
    /// Number of estimates computed.
    pub runs: u64,
    /// Possibilities reported by the last run.
    pub total: f64,
}

impl BenchmarkResult {
    /// Calculate estimates per second.
    pub fn runs_per_sec(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.runs as f64 / secs
        } else {
            0.0
        }
    }
}

/// Configuration for a benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Branching model to estimate with.
    pub variant: Variant,
    /// Pattern length.
    pub length: usize,
}

impl BenchmarkConfig {
    /// Returns a short label such as `decay/13`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.variant, self.length)
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        let variant = Variant::default();
        Self {
            variant,
            length: variant.default_length(),
        }
    }
}

/// Benchmark configurations covering both variants at their default and longer lengths.
pub fn benchmark_configs() -> Vec<BenchmarkConfig> {
    Variant::all()
        .iter()
        .flat_map(|&variant| {
            [variant.default_length(), 64, 1024]
                .into_iter()
                .map(move |length| BenchmarkConfig { variant, length })
        })
        .collect()
}

/// Run the estimator `runs` times for `config`.
pub fn run_estimates(config: &BenchmarkConfig, runs: u64) -> BenchmarkResult {
    let estimator = Estimator::new(BranchingModel::new(config.variant));
    let mut total = 0.0;

    let start = Instant::now();
    for _ in 0..runs {
        if let Ok(estimate) = estimator.run(black_box(config.length)) {
            total = black_box(estimate.total);
        }
    }
    let duration = start.elapsed();

    BenchmarkResult {
        name: config.label(),
        duration,
        runs,
        total,
    }
}

/// Format duration for display.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.0}us", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else {
        format!("{:.2}s", secs)
    }
}
