use crate::graph::VertexId;
use hashbrown::HashMap;

/// Global and per-vertex triangle accumulators.
///
/// Counters are real-valued because the improved variant weights each
/// observed triangle. Memory grows with the number of distinct vertices
/// touched by a counted triangle, not with stream length.
#[derive(Debug, Clone, Default)]
pub struct CounterStore {
    global: f64,
    local: HashMap<VertexId, f64>,
}

impl CounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` to the global counter and to the local counters of `u`,
    /// `v` and `w` for every third vertex `w`.
    pub fn apply_triangle_update(&mut self, u: VertexId, v: VertexId, third_vertices: &[VertexId], weight: f64) {
        self.accumulate(u, v, third_vertices, weight);
    }

    /// Mirror of [`apply_triangle_update`](Self::apply_triangle_update) that
    /// subtracts `weight`. Only the base variant decrements.
    pub fn apply_triangle_decrement(&mut self, u: VertexId, v: VertexId, third_vertices: &[VertexId], weight: f64) {
        self.accumulate(u, v, third_vertices, -weight);
    }

    fn accumulate(&mut self, u: VertexId, v: VertexId, third_vertices: &[VertexId], weight: f64) {
        if third_vertices.is_empty() {
            return;
        }

        let total = weight * third_vertices.len() as f64;
        self.global += total;
        *self.local.entry(u).or_insert(0.0) += total;
        *self.local.entry(v).or_insert(0.0) += total;
        for &w in third_vertices {
            *self.local.entry(w).or_insert(0.0) += weight;
        }
    }

    pub fn global_estimate(&self) -> f64 {
        self.global
    }

    /// Local counter of `vertex`, 0 if no counted triangle ever touched it.
    pub fn local_estimate(&self, vertex: VertexId) -> f64 {
        self.local.get(&vertex).copied().unwrap_or(0.0)
    }

    pub fn local_estimates(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.local.iter().map(|(&v, &c)| (v, c))
    }

    /// The `k` vertices with the largest local counters, ties broken by id.
    pub fn top_local(&self, k: usize) -> Vec<(VertexId, f64)> {
        let mut ranked: Vec<(VertexId, f64)> = self.local_estimates().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(k);
        ranked
    }

    /// Vertices holding a local counter
    pub fn tracked_vertices(&self) -> usize {
        self.local.len()
    }
}
