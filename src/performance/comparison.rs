use crate::error::Result;
use crate::graph::Edge;
use crate::streaming::{EstimatorStats, StreamEstimator, TriestConfig, Variant};
use rayon::prelude::*;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Outcome of one estimator run over a materialized stream
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub variant: Variant,
    pub capacity: usize,
    /// Capacity as a percentage of the stream length
    pub sample_percent: f64,
    pub estimate: f64,
    pub exact: Option<u64>,
    pub mape: Option<f64>,
    pub elapsed: Duration,
    pub throughput_edges_per_sec: f64,
    pub stats: EstimatorStats,
}

/// Absolute percentage error; 0 when the truth is 0.
pub fn mape(estimate: f64, truth: u64) -> f64 {
    if truth == 0 {
        return 0.0;
    }
    (estimate - truth as f64).abs() / truth as f64 * 100.0
}

/// Stream `edges` through a fresh estimator and time it.
pub fn run_once(edges: &[Edge], config: &TriestConfig, exact: Option<u64>) -> Result<RunReport> {
    let mut estimator = StreamEstimator::new(config.clone())?;

    let start = Instant::now();
    for edge in edges {
        estimator.process(*edge)?;
    }
    let elapsed = start.elapsed();

    let estimate = estimator.scaled_global_estimate();
    let throughput_edges_per_sec = if elapsed.as_secs_f64() > 0.0 {
        edges.len() as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };
    let sample_percent = if edges.is_empty() {
        100.0
    } else {
        config.capacity as f64 / edges.len() as f64 * 100.0
    };

    log::debug!(
        "TRIEST-{} M={} estimate={:.1} in {:?}",
        config.variant,
        config.capacity,
        estimate,
        elapsed
    );

    Ok(RunReport {
        variant: config.variant,
        capacity: config.capacity,
        sample_percent,
        estimate,
        exact,
        mape: exact.map(|truth| mape(estimate, truth)),
        elapsed,
        throughput_edges_per_sec,
        stats: estimator.stats(),
    })
}

/// Run both variants at every capacity. Runs are independent estimators and
/// execute in parallel; reports come back ordered by capacity, base first.
pub fn compare_variants(
    edges: &[Edge],
    capacities: &[usize],
    seed: Option<u64>,
    exact: Option<u64>,
) -> Result<Vec<RunReport>> {
    let configs: Vec<TriestConfig> = capacities
        .iter()
        .flat_map(|&capacity| {
            [Variant::Base, Variant::Improved].into_iter().map(move |variant| {
                let config = TriestConfig::new(capacity).with_variant(variant);
                match seed {
                    Some(seed) => config.with_seed(seed),
                    None => config,
                }
            })
        })
        .collect();

    configs
        .par_iter()
        .map(|config| run_once(edges, config, exact))
        .collect()
}

pub fn print_reports(reports: &[RunReport]) {
    println!("\n{:-<96}", "");
    println!(
        "{:<14} | {:<8} | {:<9} | {:<14} | {:<10} | {:<10} | {:<14}",
        "Algorithm", "M", "Sample %", "Estimate", "MAPE (%)", "Time (s)", "Edges/s"
    );
    println!("{:-<96}", "");

    for report in reports {
        let mape = report
            .mape
            .map(|m| format!("{:.2}", m))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<14} | {:<8} | {:<8.1}% | {:<14.1} | {:<10} | {:<10.4} | {:<14.0}",
            format!("TRIEST-{}", report.variant.as_str().to_uppercase()),
            report.capacity,
            report.sample_percent,
            report.estimate,
            mape,
            report.elapsed.as_secs_f64(),
            report.throughput_edges_per_sec
        );
    }

    println!("{:-<96}", "");
}
