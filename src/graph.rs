//! `Graph` and `GraphMut` are the capability contract shared by every graph
//! representation in this crate.  `Graph` provides queries and traversals,
//! while `GraphMut` extends it with methods that add, remove and reweight
//! vertices, arcs and edges.
//!
//! An *arc* is a one-directional relation `src -> dest`.  An *edge* is not
//! stored separately: it is the coexistence of the arcs `src -> dest` and
//! `dest -> src`.  Every graph is either weighted or unweighted, fixed at
//! construction; arcs of a weighted graph always carry a [`Weight`] and arcs
//! of an unweighted graph never do.
//!
//! Every mutation reports failure through [`GraphError`] and leaves the graph
//! unchanged when it fails.  Weight queries report absence through `None`.
use std::hash::Hash;

use crate::{
    error::GraphError,
    tracing_support::{debug, trace},
    weighting::{Weight, Weighting},
};

/// A trait representing a graph of arcs and edges between keyed vertices.
pub trait Graph {
    /// The caller-supplied key identifying a vertex.
    type Key: Eq + Hash + Clone;

    /// Iterator returned by [`Self::dfs`].
    type Dfs<'g>: Iterator<Item = &'g Self::Key>
    where
        Self: 'g;

    /// Iterator returned by [`Self::bfs`].
    type Bfs<'g>: Iterator<Item = &'g Self::Key>
    where
        Self: 'g;

    /// Whether arcs of this graph carry weights.
    fn weighting(&self) -> Weighting;

    fn is_weighted(&self) -> bool {
        self.weighting().is_weighted()
    }

    /// Gets the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    fn contains_vertex(&self, key: &Self::Key) -> bool;

    /// Gets an iterator over the keys of all vertices, in the representation's
    /// storage order.
    fn vertex_keys(&self) -> impl Iterator<Item = &Self::Key>;

    /// Looks up the arc `src -> dest`, returning its weight (always `None` in
    /// an unweighted graph).
    ///
    /// Fails with [`GraphError::SelfRelation`] when `src == dest`, with
    /// [`GraphError::VertexNotFound`] when either vertex is missing, and with
    /// [`GraphError::ArcNotFound`] when there is no such arc.
    fn arc(&self, src: &Self::Key, dest: &Self::Key) -> Result<Option<Weight>, GraphError>;

    /// Looks up the edge between `src` and `dest`, returning the weight of
    /// the `src -> dest` direction.  Fails like [`Self::arc`], except that a
    /// missing direction is reported as [`GraphError::EdgeNotFound`].
    fn edge(&self, src: &Self::Key, dest: &Self::Key) -> Result<Option<Weight>, GraphError> {
        let weight = self.arc(src, dest).map_err(edge_not_found)?;
        self.arc(dest, src).map_err(edge_not_found)?;
        Ok(weight)
    }

    fn has_arc(&self, src: &Self::Key, dest: &Self::Key) -> bool {
        self.arc(src, dest).is_ok()
    }

    fn has_edge(&self, src: &Self::Key, dest: &Self::Key) -> bool {
        self.edge(src, dest).is_ok()
    }

    /// Gets the weight of the arc `src -> dest`.  Returns `None` if the graph
    /// is unweighted or the arc does not exist.
    fn arc_weight(&self, src: &Self::Key, dest: &Self::Key) -> Option<Weight> {
        self.arc(src, dest).ok().flatten()
    }

    /// Gets the weight of the edge between `src` and `dest`.  Returns `None`
    /// if the graph is unweighted or either direction is missing.
    fn edge_weight(&self, src: &Self::Key, dest: &Self::Key) -> Option<Weight> {
        self.edge(src, dest).ok().flatten()
    }

    /// Gets the targets of all arcs leaving `key`, in the representation's
    /// neighbor order.
    fn successors(&self, key: &Self::Key) -> Result<Vec<&Self::Key>, GraphError>;

    /// Gets every arc in the graph as `(src, dest, weight)`.
    fn arcs(&self) -> Vec<(&Self::Key, &Self::Key, Option<Weight>)>;

    /// Gets the number of arcs in the graph.  An edge counts as two arcs.
    fn arc_count(&self) -> usize {
        self.arcs().len()
    }

    /// Starts a depth-first traversal at `start`.  The returned iterator
    /// yields each vertex reachable from `start` exactly once.
    fn dfs<'g>(&'g self, start: &Self::Key) -> Result<Self::Dfs<'g>, GraphError>;

    /// Starts a breadth-first traversal at `start`, yielding reachable
    /// vertices in level order.
    fn bfs<'g>(&'g self, start: &Self::Key) -> Result<Self::Bfs<'g>, GraphError>;
}

/// Mutating operations on a [`Graph`].
///
/// The methods taking an optional weight are the primitives; the
/// `add_*`/`add_weighted_*` pairs are the usual entry points.  Passing a
/// weight to an unweighted graph, or omitting it on a weighted graph, fails
/// with [`GraphError::ModeMismatch`].
pub trait GraphMut: Graph {
    /// Adds a vertex with no relations.  Fails if the key is already present.
    fn add_vertex(&mut self, key: Self::Key) -> Result<(), GraphError>;

    /// Removes a vertex together with every arc leaving or entering it.
    fn remove_vertex(&mut self, key: &Self::Key) -> Result<(), GraphError>;

    /// Adds the arc `src -> dest`.  Fails if the arc already exists.
    fn insert_arc(
        &mut self,
        src: &Self::Key,
        dest: &Self::Key,
        weight: Option<Weight>,
    ) -> Result<(), GraphError>;

    /// Adds an edge between `src` and `dest`.
    ///
    /// If neither direction exists, both arcs are created.  If exactly one
    /// exists, the missing direction is created and both directions take the
    /// new weight.  If both exist, the call fails with
    /// [`GraphError::DuplicateEdge`].
    fn insert_edge(
        &mut self,
        src: &Self::Key,
        dest: &Self::Key,
        weight: Option<Weight>,
    ) -> Result<(), GraphError>;

    /// Removes the arc `src -> dest`, leaving `dest -> src` untouched.
    fn remove_arc(&mut self, src: &Self::Key, dest: &Self::Key) -> Result<(), GraphError>;

    /// Removes both directions of an edge, or nothing if either is missing.
    fn remove_edge(&mut self, src: &Self::Key, dest: &Self::Key) -> Result<(), GraphError>;

    /// Replaces the weight of an existing arc.  Fails on unweighted graphs.
    fn update_arc(
        &mut self,
        src: &Self::Key,
        dest: &Self::Key,
        weight: Weight,
    ) -> Result<(), GraphError>;

    /// Replaces the weight of both directions of an existing edge.  Fails on
    /// unweighted graphs, and when the two directions currently hold
    /// different weights.
    fn update_edge(
        &mut self,
        src: &Self::Key,
        dest: &Self::Key,
        weight: Weight,
    ) -> Result<(), GraphError>;

    fn add_arc(&mut self, src: &Self::Key, dest: &Self::Key) -> Result<(), GraphError> {
        self.insert_arc(src, dest, None)
    }

    fn add_weighted_arc(
        &mut self,
        src: &Self::Key,
        dest: &Self::Key,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.insert_arc(src, dest, Some(weight))
    }

    fn add_edge(&mut self, src: &Self::Key, dest: &Self::Key) -> Result<(), GraphError> {
        self.insert_edge(src, dest, None)
    }

    fn add_weighted_edge(
        &mut self,
        src: &Self::Key,
        dest: &Self::Key,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.insert_edge(src, dest, Some(weight))
    }
}

fn edge_not_found(error: GraphError) -> GraphError {
    match error {
        GraphError::ArcNotFound => GraphError::EdgeNotFound,
        other => other,
    }
}

/// Fails unless the presence of `weight` matches the graph's weighting.
pub(crate) fn check_mode(graph: Weighting, weight: Option<Weight>) -> Result<(), GraphError> {
    if Weighting::of(weight) == graph {
        Ok(())
    } else {
        Err(GraphError::ModeMismatch { graph })
    }
}

/// Fails unless the graph is weighted.
pub(crate) fn check_weighted(graph: Weighting) -> Result<(), GraphError> {
    if graph.is_weighted() {
        Ok(())
    } else {
        Err(GraphError::ModeMismatch { graph })
    }
}

/// Fails if a relation would connect a vertex to itself.
pub(crate) fn check_distinct<K: Eq>(src: &K, dest: &K) -> Result<(), GraphError> {
    if src == dest {
        Err(GraphError::SelfRelation)
    } else {
        Ok(())
    }
}

/// Checks shared by every relation insertion, in the order they apply.
pub(crate) fn check_relation<K: Eq>(
    graph: Weighting,
    src: &K,
    dest: &K,
    weight: Option<Weight>,
) -> Result<(), GraphError> {
    check_mode(graph, weight)?;
    check_distinct(src, dest)
}

/// Logs the outcome of a mutation and passes it through.
pub(crate) fn logged(op: &'static str, result: Result<(), GraphError>) -> Result<(), GraphError> {
    match &result {
        Ok(()) => trace!(op, "graph updated"),
        Err(error) => debug!(op, %error, "graph operation rejected"),
    }
    result
}
