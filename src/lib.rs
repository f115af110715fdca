//! Directed and undirected relations between keyed vertices, optionally
//! weighted, stored either as adjacency lists or as a fixed-capacity
//! adjacency matrix.
pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod error;
pub mod graph;
pub mod search;
pub mod tracing_support;
pub mod weighting;

mod arena;

#[cfg(test)]
mod graph_tests;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use error::{ErrorKind, GraphError};
pub use graph::{Graph, GraphMut};
pub use weighting::{Weight, Weighting};
