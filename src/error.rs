use crate::weighting::Weighting;

/// Errors reported by graph operations.
///
/// A failed operation never leaves the graph partially modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A weighted operation was called on an unweighted graph, or the reverse.
    #[error("{} operation used on {} graph", .graph.opposite(), .graph)]
    ModeMismatch { graph: Weighting },
    /// A referenced vertex is not in the graph.
    #[error("vertex not found")]
    VertexNotFound,
    /// The referenced arc does not exist.
    #[error("arc not found")]
    ArcNotFound,
    /// The referenced edge does not exist, i.e. at least one direction is missing.
    #[error("edge not found")]
    EdgeNotFound,
    /// The vertex key is already in use.
    #[error("vertex already exists")]
    DuplicateVertex,
    /// The arc already exists.
    #[error("arc already exists")]
    DuplicateArc,
    /// Both directions of the edge already exist.
    #[error("edge already exists")]
    DuplicateEdge,
    /// The source and destination of a relation are the same vertex.
    #[error("relations from a vertex to itself are not allowed")]
    SelfRelation,
    /// A fixed-capacity graph is full.
    #[error("graph is full (capacity {capacity})")]
    CapacityExhausted { capacity: usize },
    /// The two directions of an edge carry different weights.
    #[error("edge directions have different weights")]
    EdgeWeightMismatch,
}

/// Broad classification of a [`GraphError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ModeMismatch,
    NotFound,
    Duplicate,
    Malformed,
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::ModeMismatch { .. } => ErrorKind::ModeMismatch,
            GraphError::VertexNotFound | GraphError::ArcNotFound | GraphError::EdgeNotFound => {
                ErrorKind::NotFound
            }
            GraphError::DuplicateVertex | GraphError::DuplicateArc | GraphError::DuplicateEdge => {
                ErrorKind::Duplicate
            }
            GraphError::SelfRelation
            | GraphError::CapacityExhausted { .. }
            | GraphError::EdgeWeightMismatch => ErrorKind::Malformed,
        }
    }
}
