use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex identifier as it appears in the input stream.
pub type VertexId = u64;

/// Undirected edge stored with its endpoints in ascending order, so
/// `{u, v}` and `{v, u}` hash and compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    u: VertexId,
    v: VertexId,
}

impl Edge {
    /// Build a normalized edge. Self-loops are rejected.
    pub fn new(a: VertexId, b: VertexId) -> Result<Self> {
        if a == b {
            return Err(GraphError::self_loop(a));
        }

        let (u, v) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { u, v })
    }

    /// Smaller endpoint
    pub fn u(&self) -> VertexId {
        self.u
    }

    /// Larger endpoint
    pub fn v(&self) -> VertexId {
        self.v
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.u, self.v)
    }

    pub fn touches(&self, vertex: VertexId) -> bool {
        self.u == vertex || self.v == vertex
    }
}

impl TryFrom<(VertexId, VertexId)> for Edge {
    type Error = GraphError;

    fn try_from((a, b): (VertexId, VertexId)) -> Result<Self> {
        Edge::new(a, b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}
