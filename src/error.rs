use crate::graph::{Edge, VertexId};

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Invalid edge ({u}, {v}): {reason}")]
    InvalidEdge {
        u: VertexId,
        v: VertexId,
        reason: String,
    },

    #[error("Sample capacity exceeded: {capacity} edges")]
    CapacityExceeded { capacity: usize },

    #[error("Duplicate edge: {0}")]
    DuplicateEdge(Edge),

    #[error("Edge not found: {0}")]
    EdgeNotFound(Edge),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GraphError {
    pub fn invalid_edge<S: Into<String>>(u: VertexId, v: VertexId, reason: S) -> Self {
        GraphError::InvalidEdge {
            u,
            v,
            reason: reason.into(),
        }
    }

    pub fn self_loop(vertex: VertexId) -> Self {
        Self::invalid_edge(vertex, vertex, "self-loops are not allowed")
    }

    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        GraphError::InvalidParameter(msg.into())
    }

    pub fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        GraphError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Whether the error signals a broken invariant rather than a bad record.
    /// Record-level errors are skipped by the stream driver.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GraphError::CapacityExceeded { .. }
                | GraphError::Io(_)
                | GraphError::Serialization(_)
                | GraphError::InvalidParameter(_)
        )
    }
}
