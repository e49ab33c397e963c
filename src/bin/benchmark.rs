use std::time::Instant;
use triest_graph::performance::generate_clustered_edges;
use triest_graph::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("TRIEST Streaming Triangle Benchmark");
    println!("===================================");

    let start = Instant::now();
    let edges = generate_clustered_edges(200, 40, 0.3, 20_000, 42);
    println!("Generated stream of {} edges in {:?}", edges.len(), start.elapsed());

    let start = Instant::now();
    let exact = ExactTriangleCount::from_edges(&edges);
    println!(
        "Exact triangles: {} (transitivity {:.3}) in {:?}",
        exact.total(),
        exact.transitivity(),
        start.elapsed()
    );

    let capacities: Vec<usize> = [0.01, 0.05, 0.1, 0.25, 0.5]
        .iter()
        .map(|fraction| ((edges.len() as f64 * fraction) as usize).max(3))
        .collect();

    let reports = compare_variants(&edges, &capacities, Some(7), Some(exact.total()))?;
    print_reports(&reports);

    let total_edges: u64 = reports.iter().map(|r| r.stats.edges_seen).sum();
    let total_time: f64 = reports.iter().map(|r| r.elapsed.as_secs_f64()).sum();

    println!("\nSUMMARY:");
    println!("Runs: {}", reports.len());
    println!("Total streaming time: {:.3}s", total_time);
    println!("Mean throughput: {:.0} edges/s", total_edges as f64 / total_time.max(f64::EPSILON));

    Ok(())
}
