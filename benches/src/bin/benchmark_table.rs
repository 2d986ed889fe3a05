//! Benchmark runner that outputs a markdown table for the README.
//!
//! Run with: `cargo run --package possibilities-bench --bin benchmark_table --release`

use possibilities_bench::{BenchmarkResult, benchmark_configs, format_duration, run_estimates};
use std::io::Write;

/// Number of estimates per case.
const RUNS: u64 = 100_000;

fn main() {
    println!("possibilities Estimator Benchmark");
    println!("=================================\n");

    let mut results: Vec<BenchmarkResult> = Vec::new();
    for config in benchmark_configs() {
        print!("Running {}...", config.label());
        let _ = std::io::stdout().flush();
        let result = run_estimates(&config, RUNS);
        println!(" {}", format_duration(result.duration));
        results.push(result);
    }

    println!("\n## Results\n");
    println!("| Case | Runs | Time | Estimates/s | Possibilities |");
    println!("|------|------|------|-------------|---------------|");
    for result in &results {
        println!(
            "| {} | {} | {} | {:.0} | {:.0} |",
            result.name,
            result.runs,
            format_duration(result.duration),
            result.runs_per_sec(),
            result.total,
        );
    }
}
