//! Contract tests shared by every graph representation.
//!
//! [`graph_tests!`](crate::graph_tests!) instantiates the suite for a graph
//! type.  Property tests replay random operation sequences against both the
//! graph under test and [`Model`], a deliberately naive reference
//! implementation, and compare every outcome.
use std::collections::{BTreeMap, BTreeSet};

use quickcheck::{Arbitrary, Gen};

use crate::{Graph, GraphMut, Weight, Weighting};

/// Number of distinct keys used by generated operations.
const KEY_SPACE: u8 = 6;

#[derive(Clone, Debug)]
pub enum Op {
    AddVertex(u8),
    RemoveVertex(u8),
    AddArc(u8, u8, Option<u8>),
    AddEdge(u8, u8, Option<u8>),
    RemoveArc(u8, u8),
    RemoveEdge(u8, u8),
    UpdateArc(u8, u8, u8),
    UpdateEdge(u8, u8, u8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        let key = |g: &mut Gen| u8::arbitrary(g) % KEY_SPACE;
        // Few distinct weights, so that equal-weight edges are common.
        let weight = |g: &mut Gen| u8::arbitrary(g) % 4;
        let maybe_weight = |g: &mut Gen| {
            if bool::arbitrary(g) {
                Some(weight(g))
            } else {
                None
            }
        };
        match u8::arbitrary(g) % 11 {
            0..=2 => Op::AddVertex(key(g)),
            3 => Op::RemoveVertex(key(g)),
            4 | 5 => Op::AddArc(key(g), key(g), maybe_weight(g)),
            6 => Op::AddEdge(key(g), key(g), maybe_weight(g)),
            7 => Op::RemoveArc(key(g), key(g)),
            8 => Op::RemoveEdge(key(g), key(g)),
            9 => Op::UpdateArc(key(g), key(g), weight(g)),
            _ => Op::UpdateEdge(key(g), key(g), weight(g)),
        }
    }
}

/// Applies `op` to `graph`, returning whether it succeeded.
pub fn apply<G: GraphMut<Key = u8>>(graph: &mut G, op: &Op) -> bool {
    let weight = |w: Option<u8>| w.map(Weight::from);
    match *op {
        Op::AddVertex(key) => graph.add_vertex(key),
        Op::RemoveVertex(key) => graph.remove_vertex(&key),
        Op::AddArc(src, dest, w) => graph.insert_arc(&src, &dest, weight(w)),
        Op::AddEdge(src, dest, w) => graph.insert_edge(&src, &dest, weight(w)),
        Op::RemoveArc(src, dest) => graph.remove_arc(&src, &dest),
        Op::RemoveEdge(src, dest) => graph.remove_edge(&src, &dest),
        Op::UpdateArc(src, dest, w) => graph.update_arc(&src, &dest, w.into()),
        Op::UpdateEdge(src, dest, w) => graph.update_edge(&src, &dest, w.into()),
    }
    .is_ok()
}

/// Gets every arc of `graph`, sorted by endpoints.
pub fn sorted_arcs<G: Graph<Key = u8>>(graph: &G) -> Vec<(u8, u8, Option<Weight>)> {
    let mut arcs = graph
        .arcs()
        .into_iter()
        .map(|(src, dest, weight)| (*src, *dest, weight))
        .collect::<Vec<_>>();
    arcs.sort_by_key(|&(src, dest, _)| (src, dest));
    arcs
}

/// Reference graph: a vertex set and a map of arcs.
pub struct Model {
    weighting: Weighting,
    vertices: BTreeSet<u8>,
    arcs: BTreeMap<(u8, u8), Option<Weight>>,
}

impl Model {
    pub fn new(weighting: Weighting) -> Self {
        Model {
            weighting,
            vertices: BTreeSet::new(),
            arcs: BTreeMap::new(),
        }
    }

    pub fn vertices(&self) -> impl Iterator<Item = u8> + '_ {
        self.vertices.iter().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn arcs(&self) -> Vec<(u8, u8, Option<Weight>)> {
        self.arcs
            .iter()
            .map(|(&(src, dest), &weight)| (src, dest, weight))
            .collect()
    }

    fn has(&self, src: u8, dest: u8) -> bool {
        self.arcs.contains_key(&(src, dest))
    }

    fn can_relate(&self, src: u8, dest: u8, weight: Option<Weight>) -> bool {
        Weighting::of(weight) == self.weighting
            && src != dest
            && self.vertices.contains(&src)
            && self.vertices.contains(&dest)
    }

    pub fn apply(&mut self, op: &Op) -> bool {
        match *op {
            Op::AddVertex(key) => self.vertices.insert(key),
            Op::RemoveVertex(key) => {
                if !self.vertices.remove(&key) {
                    return false;
                }
                self.arcs.retain(|&(src, dest), _| src != key && dest != key);
                true
            }
            Op::AddArc(src, dest, weight) => {
                let weight = weight.map(Weight::from);
                if !self.can_relate(src, dest, weight) || self.has(src, dest) {
                    return false;
                }
                self.arcs.insert((src, dest), weight);
                true
            }
            Op::AddEdge(src, dest, weight) => {
                let weight = weight.map(Weight::from);
                if !self.can_relate(src, dest, weight) || (self.has(src, dest) && self.has(dest, src))
                {
                    return false;
                }
                self.arcs.insert((src, dest), weight);
                self.arcs.insert((dest, src), weight);
                true
            }
            Op::RemoveArc(src, dest) => self.arcs.remove(&(src, dest)).is_some(),
            Op::RemoveEdge(src, dest) => {
                if !(self.has(src, dest) && self.has(dest, src)) {
                    return false;
                }
                self.arcs.remove(&(src, dest));
                self.arcs.remove(&(dest, src));
                true
            }
            Op::UpdateArc(src, dest, weight) => {
                if !self.weighting.is_weighted() {
                    return false;
                }
                match self.arcs.get_mut(&(src, dest)) {
                    Some(slot) => {
                        *slot = Some(weight.into());
                        true
                    }
                    None => false,
                }
            }
            Op::UpdateEdge(src, dest, weight) => {
                let (Some(&forward), Some(&backward)) =
                    (self.arcs.get(&(src, dest)), self.arcs.get(&(dest, src)))
                else {
                    return false;
                };
                if !self.weighting.is_weighted() || forward != backward {
                    return false;
                }
                self.arcs.insert((src, dest), Some(weight.into()));
                self.arcs.insert((dest, src), Some(weight.into()));
                true
            }
        }
    }

    /// Gets every vertex reachable from `start`, including `start`.
    pub fn reachable(&self, start: u8) -> BTreeSet<u8> {
        let mut seen = BTreeSet::from([start]);
        let mut pending = vec![start];
        while let Some(vertex) = pending.pop() {
            for &(_, dest) in self.arcs.keys().filter(|&&(src, _)| src == vertex) {
                if seen.insert(dest) {
                    pending.push(dest);
                }
            }
        }
        seen
    }
}

/// Replays `ops` on `graph` and a model, checking that every operation has
/// the same outcome and that both end with the same vertices and arcs.
pub fn matches_model<G: GraphMut<Key = u8>>(mut graph: G, ops: &[Op]) -> bool {
    let mut model = Model::new(graph.weighting());
    for op in ops {
        if apply(&mut graph, op) != model.apply(op) {
            return false;
        }
    }
    graph.vertex_count() == model.vertex_count()
        && model.vertices().all(|key| graph.contains_vertex(&key))
        && sorted_arcs(&graph) == model.arcs()
}

/// Replays `ops`, then checks that traversals from every vertex yield each
/// reachable vertex exactly once, starting with the start vertex.
pub fn traversals_cover_reachable<G: GraphMut<Key = u8>>(mut graph: G, ops: &[Op]) -> bool {
    let mut model = Model::new(graph.weighting());
    for op in ops {
        apply(&mut graph, op);
        model.apply(op);
    }
    model.vertices().all(|start| {
        let expected = model.reachable(start);
        let covers = |order: &[&u8]| {
            let visited = order.iter().map(|&&key| key).collect::<BTreeSet<_>>();
            visited.len() == order.len() && visited == expected && order.first() == Some(&&start)
        };
        let dfs = graph.dfs(&start).map(|iter| iter.collect::<Vec<_>>());
        let bfs = graph.bfs(&start).map(|iter| iter.collect::<Vec<_>>());
        dfs.is_ok_and(|order| covers(&order)) && bfs.is_ok_and(|order| covers(&order))
    })
}

/// Macro to generate the contract test suite for a graph type with `u8`
/// keys.  `$new` builds an empty graph from a [`Weighting`].
#[macro_export]
macro_rules! graph_tests {
    ($graph:ty, $new:expr) => {
        mod contract {
            use $crate::graph_tests::*;
            use $crate::{Graph, GraphError, GraphMut, Weighting};

            fn new_graph(weighting: Weighting) -> $graph {
                let new: fn(Weighting) -> $graph = $new;
                new(weighting)
            }

            fn with_vertices(weighting: Weighting, keys: &[u8]) -> $graph {
                let mut graph = new_graph(weighting);
                for &key in keys {
                    graph.add_vertex(key).unwrap();
                }
                graph
            }

            fn mismatch(graph: Weighting) -> Result<(), GraphError> {
                Err(GraphError::ModeMismatch { graph })
            }

            #[test]
            fn test_new_graph_is_empty() {
                let graph = new_graph(Weighting::Unweighted);
                assert_eq!(graph.vertex_count(), 0);
                assert!(graph.is_empty());
                assert!(!graph.is_weighted());
                assert_eq!(graph.arc_count(), 0);
                assert!(new_graph(Weighting::Weighted).is_weighted());
            }

            #[test]
            fn test_add_vertex_twice_fails() {
                let mut graph = new_graph(Weighting::Unweighted);
                assert_eq!(graph.add_vertex(1), Ok(()));
                assert_eq!(graph.add_vertex(1), Err(GraphError::DuplicateVertex));
                assert_eq!(graph.vertex_count(), 1);
                assert!(graph.contains_vertex(&1));
                assert!(!graph.contains_vertex(&2));
            }

            #[test]
            fn test_vertex_keys() {
                let graph = with_vertices(Weighting::Unweighted, &[3, 1, 2]);
                let mut keys = graph.vertex_keys().copied().collect::<Vec<_>>();
                keys.sort();
                assert_eq!(keys, vec![1, 2, 3]);
            }

            #[test]
            fn test_mode_mismatch_has_no_side_effects() {
                let mut graph = with_vertices(Weighting::Unweighted, &[1, 2]);
                let expected = mismatch(Weighting::Unweighted);
                assert_eq!(graph.add_weighted_arc(&1, &2, 1.0), expected);
                assert_eq!(graph.add_weighted_edge(&1, &2, 1.0), expected);
                assert_eq!(graph.update_arc(&1, &2, 1.0), expected);
                assert_eq!(graph.update_edge(&1, &2, 1.0), expected);
                assert_eq!(graph.arc_count(), 0);

                let mut graph = with_vertices(Weighting::Weighted, &[1, 2]);
                let expected = mismatch(Weighting::Weighted);
                assert_eq!(graph.add_arc(&1, &2), expected);
                assert_eq!(graph.add_edge(&1, &2), expected);
                assert_eq!(graph.arc_count(), 0);
            }

            #[test]
            fn test_self_relations_are_rejected() {
                let mut graph = with_vertices(Weighting::Unweighted, &[1]);
                assert_eq!(graph.add_arc(&1, &1), Err(GraphError::SelfRelation));
                assert_eq!(graph.add_edge(&1, &1), Err(GraphError::SelfRelation));
                assert_eq!(graph.remove_arc(&1, &1), Err(GraphError::SelfRelation));
                assert_eq!(graph.remove_edge(&1, &1), Err(GraphError::SelfRelation));
                assert!(!graph.has_arc(&1, &1));
                assert!(!graph.has_edge(&1, &1));
                assert_eq!(graph.successors(&1), Ok(vec![]));

                let mut graph = with_vertices(Weighting::Weighted, &[1]);
                assert_eq!(graph.arc_weight(&1, &1), None);
                assert_eq!(graph.update_arc(&1, &1, 2.0), Err(GraphError::SelfRelation));
                assert_eq!(graph.arc_count(), 0);
            }

            #[test]
            fn test_relations_need_both_vertices() {
                let mut graph = with_vertices(Weighting::Unweighted, &[1]);
                assert_eq!(graph.add_arc(&1, &2), Err(GraphError::VertexNotFound));
                assert_eq!(graph.add_edge(&3, &1), Err(GraphError::VertexNotFound));
                assert_eq!(graph.remove_arc(&1, &2), Err(GraphError::VertexNotFound));
                assert_eq!(graph.remove_edge(&2, &1), Err(GraphError::VertexNotFound));
                assert_eq!(graph.arc(&1, &2), Err(GraphError::VertexNotFound));
                assert_eq!(graph.successors(&2), Err(GraphError::VertexNotFound));
                assert_eq!(graph.arc_weight(&1, &2), None);
            }

            #[test]
            fn test_add_arc_twice_fails() {
                let mut graph = with_vertices(Weighting::Weighted, &[1, 2]);
                assert_eq!(graph.add_weighted_arc(&1, &2, 0.3), Ok(()));
                assert_eq!(
                    graph.add_weighted_arc(&1, &2, 1.2),
                    Err(GraphError::DuplicateArc)
                );
                assert_eq!(graph.arc_weight(&1, &2), Some(0.3));
                assert!(!graph.has_arc(&2, &1));
                assert!(!graph.has_edge(&1, &2));
                assert_eq!(graph.arc_count(), 1);
            }

            #[test]
            fn test_add_edge_creates_both_arcs() {
                let mut graph = with_vertices(Weighting::Unweighted, &[1, 2]);
                assert_eq!(graph.add_edge(&1, &2), Ok(()));
                assert!(graph.has_arc(&1, &2));
                assert!(graph.has_arc(&2, &1));
                assert!(graph.has_edge(&2, &1));
                assert_eq!(graph.edge(&1, &2), Ok(None));
                assert_eq!(graph.arc_count(), 2);
                assert_eq!(graph.add_edge(&1, &2), Err(GraphError::DuplicateEdge));
                assert_eq!(graph.add_edge(&2, &1), Err(GraphError::DuplicateEdge));
                assert_eq!(graph.add_arc(&2, &1), Err(GraphError::DuplicateArc));
            }

            #[test]
            fn test_add_edge_upgrades_existing_arc() {
                let mut graph = with_vertices(Weighting::Unweighted, &[1, 2]);
                graph.add_arc(&1, &2).unwrap();
                assert!(!graph.has_edge(&1, &2));
                assert_eq!(graph.add_edge(&1, &2), Ok(()));
                assert!(graph.has_edge(&1, &2));
                assert_eq!(graph.arc_count(), 2);

                let mut graph = with_vertices(Weighting::Weighted, &[1, 2, 3]);
                graph.add_weighted_arc(&1, &2, 1.0).unwrap();
                assert_eq!(graph.add_weighted_edge(&1, &2, 2.0), Ok(()));
                assert_eq!(graph.arc_weight(&1, &2), Some(2.0));
                assert_eq!(graph.arc_weight(&2, &1), Some(2.0));
                assert_eq!(graph.edge_weight(&1, &2), Some(2.0));

                // The existing arc points the other way.
                graph.add_weighted_arc(&3, &1, 1.0).unwrap();
                assert_eq!(graph.add_weighted_edge(&1, &3, 4.0), Ok(()));
                assert_eq!(graph.arc_weight(&1, &3), Some(4.0));
                assert_eq!(graph.arc_weight(&3, &1), Some(4.0));
                assert_eq!(graph.arc_count(), 4);
            }

            #[test]
            fn test_add_edge_over_two_arcs_fails() {
                let mut graph = with_vertices(Weighting::Unweighted, &[1, 2]);
                graph.add_arc(&1, &2).unwrap();
                graph.add_arc(&2, &1).unwrap();
                assert_eq!(graph.add_edge(&1, &2), Err(GraphError::DuplicateEdge));
                assert!(graph.has_edge(&1, &2));

                let mut graph = with_vertices(Weighting::Weighted, &[1, 2]);
                graph.add_weighted_arc(&2, &1, 1.4).unwrap();
                graph.add_weighted_arc(&1, &2, 1.5).unwrap();
                assert_eq!(
                    graph.add_weighted_edge(&1, &2, 9.0),
                    Err(GraphError::DuplicateEdge)
                );
                assert_eq!(graph.edge_weight(&1, &2), Some(1.5));
                assert_eq!(graph.edge_weight(&2, &1), Some(1.4));
            }

            #[test]
            fn test_remove_vertex_cascades() {
                let mut graph = with_vertices(Weighting::Weighted, &[1, 2, 3, 4]);
                graph.add_weighted_edge(&1, &2, 1.0).unwrap();
                graph.add_weighted_arc(&3, &2, 2.0).unwrap();
                graph.add_weighted_arc(&2, &4, 3.0).unwrap();
                graph.add_weighted_arc(&3, &4, 5.0).unwrap();

                assert_eq!(graph.remove_vertex(&2), Ok(()));
                assert_eq!(graph.vertex_count(), 3);
                assert!(!graph.contains_vertex(&2));
                assert_eq!(sorted_arcs(&graph), vec![(3, 4, Some(5.0))]);
                assert_eq!(graph.arc(&1, &2), Err(GraphError::VertexNotFound));
                assert_eq!(graph.successors(&1), Ok(vec![]));
                assert_eq!(graph.successors(&3), Ok(vec![&4]));

                assert_eq!(graph.remove_vertex(&2), Err(GraphError::VertexNotFound));
                assert_eq!(graph.vertex_count(), 3);
            }

            #[test]
            fn test_removed_key_can_be_added_again() {
                let mut graph = with_vertices(Weighting::Unweighted, &[1, 2]);
                graph.add_edge(&1, &2).unwrap();
                graph.remove_vertex(&2).unwrap();
                assert_eq!(graph.add_vertex(2), Ok(()));
                assert!(!graph.has_arc(&1, &2));
                assert!(!graph.has_arc(&2, &1));
                assert_eq!(graph.arc_count(), 0);
            }

            #[test]
            fn test_remove_arc_keeps_reverse() {
                let mut graph = with_vertices(Weighting::Unweighted, &[1, 2]);
                graph.add_edge(&1, &2).unwrap();
                assert_eq!(graph.remove_arc(&1, &2), Ok(()));
                assert!(!graph.has_arc(&1, &2));
                assert!(graph.has_arc(&2, &1));
                assert!(!graph.has_edge(&1, &2));
                assert_eq!(graph.remove_arc(&1, &2), Err(GraphError::ArcNotFound));
            }

            #[test]
            fn test_remove_edge_needs_both_directions() {
                let mut graph = with_vertices(Weighting::Unweighted, &[1, 2]);
                graph.add_arc(&1, &2).unwrap();
                assert_eq!(graph.remove_edge(&1, &2), Err(GraphError::EdgeNotFound));
                assert!(graph.has_arc(&1, &2));
                graph.add_arc(&2, &1).unwrap();
                assert_eq!(graph.remove_edge(&2, &1), Ok(()));
                assert_eq!(graph.arc_count(), 0);
                assert_eq!(graph.remove_edge(&2, &1), Err(GraphError::EdgeNotFound));
            }

            #[test]
            fn test_update_arc() {
                let mut graph = with_vertices(Weighting::Weighted, &[1, 2]);
                assert_eq!(graph.update_arc(&1, &2, 1.0), Err(GraphError::ArcNotFound));
                graph.add_weighted_arc(&1, &2, 1.0).unwrap();
                assert_eq!(graph.update_arc(&1, &2, 3.5), Ok(()));
                assert_eq!(graph.arc_weight(&1, &2), Some(3.5));
                assert_eq!(graph.arc_weight(&2, &1), None);
            }

            #[test]
            fn test_update_edge() {
                let mut graph = with_vertices(Weighting::Weighted, &[1, 2]);
                graph.add_weighted_arc(&1, &2, 1.0).unwrap();
                assert_eq!(graph.update_edge(&1, &2, 2.0), Err(GraphError::EdgeNotFound));
                graph.add_weighted_arc(&2, &1, 1.5).unwrap();
                assert_eq!(
                    graph.update_edge(&1, &2, 2.0),
                    Err(GraphError::EdgeWeightMismatch)
                );
                assert_eq!(graph.arc_weight(&1, &2), Some(1.0));
                assert_eq!(graph.arc_weight(&2, &1), Some(1.5));

                graph.update_arc(&2, &1, 1.0).unwrap();
                assert_eq!(graph.update_edge(&2, &1, 2.0), Ok(()));
                assert_eq!(graph.edge_weight(&1, &2), Some(2.0));
                assert_eq!(graph.edge_weight(&2, &1), Some(2.0));
            }

            #[test]
            fn test_update_edge_created_with_nan_weight() {
                let mut graph = with_vertices(Weighting::Weighted, &[1, 2]);
                graph.add_weighted_edge(&1, &2, f64::NAN).unwrap();
                assert_eq!(graph.update_edge(&2, &1, 1.0), Ok(()));
                assert_eq!(graph.edge_weight(&1, &2), Some(1.0));
                assert_eq!(graph.edge_weight(&2, &1), Some(1.0));

                graph.update_arc(&1, &2, f64::NAN).unwrap();
                assert_eq!(
                    graph.update_edge(&1, &2, 3.0),
                    Err(GraphError::EdgeWeightMismatch)
                );
            }

            #[test]
            fn test_weights_absent_on_unweighted_graph() {
                let mut graph = with_vertices(Weighting::Unweighted, &[1, 2]);
                graph.add_edge(&1, &2).unwrap();
                assert_eq!(graph.arc(&1, &2), Ok(None));
                assert_eq!(graph.arc_weight(&1, &2), None);
                assert_eq!(graph.edge_weight(&1, &2), None);
            }

            #[test]
            fn test_edge_weight_requires_both_directions() {
                let mut graph = with_vertices(Weighting::Weighted, &[1, 2]);
                graph.add_weighted_arc(&1, &2, 0.5).unwrap();
                assert_eq!(graph.arc_weight(&1, &2), Some(0.5));
                assert_eq!(graph.edge_weight(&1, &2), None);
                assert_eq!(graph.edge(&1, &2), Err(GraphError::EdgeNotFound));
            }

            #[test]
            fn test_traversal_from_missing_vertex_fails() {
                let graph = with_vertices(Weighting::Unweighted, &[1]);
                assert!(matches!(graph.dfs(&2), Err(GraphError::VertexNotFound)));
                assert!(matches!(graph.bfs(&2), Err(GraphError::VertexNotFound)));
            }

            #[test]
            fn test_traversals_visit_reachable_once() {
                let mut graph = with_vertices(Weighting::Unweighted, &[1, 2, 3, 4, 5, 6]);
                graph.add_edge(&1, &2).unwrap();
                graph.add_arc(&2, &3).unwrap();
                graph.add_arc(&3, &1).unwrap();
                graph.add_arc(&3, &4).unwrap();
                graph.add_arc(&5, &1).unwrap();

                for order in [
                    graph.dfs(&1).unwrap().copied().collect::<Vec<_>>(),
                    graph.bfs(&1).unwrap().copied().collect::<Vec<_>>(),
                ] {
                    assert_eq!(order[0], 1);
                    let mut sorted = order.clone();
                    sorted.sort();
                    assert_eq!(sorted, vec![1, 2, 3, 4]);
                }
                assert_eq!(graph.dfs(&6).unwrap().collect::<Vec<_>>(), vec![&6]);
                assert_eq!(graph.bfs(&4).unwrap().collect::<Vec<_>>(), vec![&4]);
            }

            #[test]
            fn test_repeated_traversals_agree() {
                let mut graph = with_vertices(Weighting::Unweighted, &[1, 2, 3]);
                graph.add_edge(&1, &2).unwrap();
                graph.add_edge(&2, &3).unwrap();
                let first = graph.dfs(&2).unwrap().collect::<Vec<_>>();
                let second = graph.dfs(&2).unwrap().collect::<Vec<_>>();
                assert_eq!(first, second);
                let first = graph.bfs(&3).unwrap().collect::<Vec<_>>();
                let second = graph.bfs(&3).unwrap().collect::<Vec<_>>();
                assert_eq!(first, second);
            }

            #[test]
            fn prop_matches_model() {
                $crate::tracing_support::init_tracing();
                fn prop(weighted: bool, ops: Vec<Op>) -> bool {
                    matches_model(new_graph(Weighting::from(weighted)), &ops)
                }
                quickcheck::quickcheck(prop as fn(bool, Vec<Op>) -> bool);
            }

            #[test]
            fn prop_traversals_cover_reachable() {
                fn prop(weighted: bool, ops: Vec<Op>) -> bool {
                    traversals_cover_reachable(new_graph(Weighting::from(weighted)), &ops)
                }
                quickcheck::quickcheck(prop as fn(bool, Vec<Op>) -> bool);
            }
        }
    };
}
