pub mod graph;
pub mod streaming;
pub mod algorithms;
pub mod error;
pub mod connectors; // Edge list readers
pub mod performance; // Variant comparison harness

pub use graph::{Edge, SampleGraph, VertexId};
pub use streaming::{
    CounterStore, Decision, EdgeOutcome, EstimatorStats, ReservoirPolicy, StreamEstimator, StreamState,
    TriestConfig, Variant,
};
pub use algorithms::{ExactTriangleCount, TriangleCounter};
pub use connectors::{load_edge_list, read_edge_list, EdgeList};
pub use performance::{compare_variants, run_once, RunReport};
pub use error::{GraphError, Result};

pub mod prelude {
    pub use crate::graph::{Edge, SampleGraph, VertexId};
    pub use crate::streaming::{EdgeOutcome, EstimatorStats, StreamEstimator, TriestConfig, Variant};
    pub use crate::algorithms::{ExactTriangleCount, TriangleCounter};
    pub use crate::connectors::{load_edge_list, EdgeList};
    pub use crate::performance::{compare_variants, print_reports, run_once, RunReport};
    pub use crate::error::{GraphError, Result};
}
