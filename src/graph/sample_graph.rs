use crate::error::{GraphError, Result};
use crate::graph::edge::{Edge, VertexId};
use hashbrown::{HashMap, HashSet};
use indexmap::IndexSet;
use rand::Rng;

/// Fixed-capacity undirected edge set with adjacency lookup.
///
/// This is the reservoir of the streaming estimators. Edges live in an
/// `IndexSet` so membership tests and uniform random picks are both O(1);
/// the adjacency map mirrors the edge set exactly and drops vertices whose
/// last incident edge is removed.
#[derive(Debug, Clone)]
pub struct SampleGraph {
    edges: IndexSet<Edge>,
    adjacency: HashMap<VertexId, HashSet<VertexId>>,
    capacity: usize,
}

impl SampleGraph {
    pub fn new(capacity: usize) -> Self {
        Self {
            edges: IndexSet::with_capacity(capacity),
            adjacency: HashMap::new(),
            capacity,
        }
    }

    /// Add an edge. The caller is responsible for evicting first when the
    /// sample is full.
    pub fn insert_edge(&mut self, edge: Edge) -> Result<()> {
        if self.edges.contains(&edge) {
            return Err(GraphError::DuplicateEdge(edge));
        }
        if self.edges.len() >= self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let (u, v) = edge.endpoints();
        self.edges.insert(edge);
        self.adjacency.entry(u).or_default().insert(v);
        self.adjacency.entry(v).or_default().insert(u);

        Ok(())
    }

    /// Remove an edge, failing with `EdgeNotFound` if it is not sampled.
    pub fn remove_edge(&mut self, edge: &Edge) -> Result<()> {
        if !self.edges.swap_remove(edge) {
            return Err(GraphError::EdgeNotFound(*edge));
        }

        let (u, v) = edge.endpoints();
        self.unlink(u, v);
        self.unlink(v, u);

        Ok(())
    }

    fn unlink(&mut self, from: VertexId, to: VertexId) {
        if let Some(neighbors) = self.adjacency.get_mut(&from) {
            neighbors.remove(&to);
            if neighbors.is_empty() {
                self.adjacency.remove(&from);
            }
        }
    }

    /// Vertices adjacent to both `u` and `v` in the current sample, i.e. the
    /// third vertices of every sampled triangle through `{u, v}`.
    /// Iterates the smaller neighborhood and probes the larger one.
    pub fn common_neighbors(&self, u: VertexId, v: VertexId) -> Vec<VertexId> {
        let (Some(nu), Some(nv)) = (self.adjacency.get(&u), self.adjacency.get(&v)) else {
            return Vec::new();
        };

        let (small, large) = if nu.len() <= nv.len() { (nu, nv) } else { (nv, nu) };
        small
            .iter()
            .filter(|w| large.contains(*w))
            .copied()
            .collect()
    }

    /// Pick a sampled edge uniformly at random.
    pub fn random_edge<R: Rng>(&self, rng: &mut R) -> Option<Edge> {
        if self.edges.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.edges.len());
        self.edges.get_index(index).copied()
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.edges.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn neighbors(&self, vertex: VertexId) -> Option<&HashSet<VertexId>> {
        self.adjacency.get(&vertex)
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(&vertex).map_or(0, |n| n.len())
    }

    /// Number of vertices with at least one sampled edge
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }
}
