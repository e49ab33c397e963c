use crate::graph::VertexId;

/// Anything that can answer global and per-vertex triangle queries, exact
/// or estimated.
pub trait TriangleCounter {
    fn global_triangles(&self) -> f64;

    fn local_triangles(&self, vertex: VertexId) -> f64;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        "Triangle counter"
    }
}
