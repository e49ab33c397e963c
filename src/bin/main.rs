use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use triest_graph::prelude::*;

#[derive(Parser)]
#[command(name = "triest")]
#[command(about = "Streaming triangle estimation over fixed-memory edge samples")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Base,
    Impr,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Base => Variant::Base,
            VariantArg::Impr => Variant::Improved,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Stream an edge list through one estimator
    Estimate {
        #[arg(short, long)]
        edges: PathBuf,
        /// Sample capacity M (required unless given by --config)
        #[arg(short = 'm', long)]
        capacity: Option<usize>,
        #[arg(short, long, value_enum)]
        variant: Option<VariantArg>,
        #[arg(short, long)]
        seed: Option<u64>,
        /// JSON run configuration; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Report the local estimate of these vertices
        #[arg(long = "vertex")]
        vertices: Vec<VertexId>,
        /// Report the vertices with the largest local estimates
        #[arg(long)]
        top: Option<usize>,
        /// Also compute the exact count for comparison
        #[arg(long)]
        exact: bool,
        #[arg(long)]
        json: bool,
    },
    /// Compare both variants over several capacities
    Compare {
        #[arg(short, long)]
        edges: PathBuf,
        #[arg(short = 'm', long, value_delimiter = ',', default_values_t = vec![1000, 5000, 10000, 20000, 40000])]
        capacities: Vec<usize>,
        #[arg(short, long)]
        seed: Option<u64>,
        /// Skip the exact ground-truth count
        #[arg(long)]
        no_exact: bool,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            edges,
            capacity,
            variant,
            seed,
            config,
            vertices,
            top,
            exact,
            json,
        } => {
            let mut run_config = match (config, capacity) {
                (Some(path), _) => TriestConfig::from_json_file(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                (None, Some(capacity)) => TriestConfig::new(capacity),
                (None, None) => bail!("either --capacity or --config is required"),
            };
            if let Some(capacity) = capacity {
                run_config.capacity = capacity;
            }
            if let Some(variant) = variant {
                run_config.variant = variant.into();
            }
            if seed.is_some() {
                run_config.seed = seed;
            }

            let list = load_edge_list(&edges)
                .with_context(|| format!("failed to read edge list {}", edges.display()))?;
            if list.malformed > 0 {
                log::warn!("{} malformed lines dropped", list.malformed);
            }

            let mut estimator = StreamEstimator::new(run_config)?;
            let start = Instant::now();
            for edge in &list.edges {
                estimator.process(*edge)?;
            }
            let elapsed = start.elapsed();

            let truth = exact.then(|| ExactTriangleCount::from_edges(&list.edges).total());
            let locals: Vec<(VertexId, f64)> = vertices
                .iter()
                .map(|&v| (v, estimator.scaled_local_estimate(v)))
                .collect();
            let top_vertices = top.map(|k| estimator.top_local(k)).unwrap_or_default();

            if json {
                let output = serde_json::json!({
                    "config": estimator.config(),
                    "global_counter": estimator.global_estimate(),
                    "global_estimate": estimator.scaled_global_estimate(),
                    "exact": truth,
                    "local_estimates": locals,
                    "top_local_counters": top_vertices,
                    "stats": estimator.stats(),
                    "malformed_lines": list.malformed,
                    "self_loops": list.self_loops,
                    "elapsed_secs": elapsed.as_secs_f64(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                let stats = estimator.stats();
                println!("TRIEST-{} with M = {}", estimator.variant().as_str().to_uppercase(), estimator.capacity());
                println!("Edges processed: {} ({} malformed lines dropped)", stats.edges_seen, list.malformed);
                println!("Global estimate: {:.2}", estimator.scaled_global_estimate());
                if let Some(truth) = truth {
                    println!(
                        "Exact count:     {} (MAPE {:.2}%)",
                        truth,
                        triest_graph::performance::mape(estimator.scaled_global_estimate(), truth)
                    );
                }
                for (v, estimate) in &locals {
                    println!("  vertex {}: {:.2}", v, estimate);
                }
                if !top_vertices.is_empty() {
                    println!("Top local counters:");
                    for (v, counter) in &top_vertices {
                        println!("  vertex {}: {:.2}", v, counter);
                    }
                }
                println!(
                    "Time: {:.4}s ({:.0} edges/s)",
                    elapsed.as_secs_f64(),
                    stats.edges_seen as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
                );
            }
        }
        Commands::Compare {
            edges,
            capacities,
            seed,
            no_exact,
            json,
        } => {
            let list = load_edge_list(&edges)
                .with_context(|| format!("failed to read edge list {}", edges.display()))?;
            if !json {
                println!("Total edges: {}", list.len());
            }

            let truth = if no_exact {
                None
            } else {
                let start = Instant::now();
                let total = ExactTriangleCount::from_edges(&list.edges).total();
                if !json {
                    println!("Exact triangles: {} (computed in {:.4}s)", total, start.elapsed().as_secs_f64());
                }
                Some(total)
            };

            let reports = compare_variants(&list.edges, &capacities, seed, truth)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                print_reports(&reports);
            }
        }
    }

    Ok(())
}
