pub mod edge;
pub mod sample_graph;

pub use edge::{Edge, VertexId};
pub use sample_graph::SampleGraph;
