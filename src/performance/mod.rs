pub mod comparison;
pub mod generator;

pub use comparison::{compare_variants, mape, print_reports, run_once, RunReport};
pub use generator::{generate_clustered_edges, generate_random_edges};
