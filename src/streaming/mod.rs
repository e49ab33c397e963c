pub mod config;
pub mod counters;
pub mod estimator;
pub mod reservoir;
pub mod tests;

pub use config::{TriestConfig, Variant};
pub use counters::CounterStore;
pub use estimator::{EdgeOutcome, EstimatorStats, StreamEstimator, StreamState};
pub use reservoir::{base_scale, improved_weight, Decision, ReservoirPolicy};
