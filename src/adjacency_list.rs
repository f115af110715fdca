//! Sparse graph storage in which every vertex owns the ordered list of its
//! outgoing arcs.
use std::{collections::HashMap, fmt, hash::Hash};

use crate::{
    arena::{Arena, Handle},
    error::GraphError,
    graph::{Graph, GraphMut, check_distinct, check_relation, check_weighted, logged},
    search::{BfsIterator, DfsIterator, Slots},
    weighting::{Weight, Weighting, same_weight},
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Neighbor {
    target: Handle,
    weight: Option<Weight>,
}

#[derive(Clone, Debug)]
struct VertexRecord<K> {
    key: K,
    neighbors: Vec<Neighbor>,
}

impl<K> VertexRecord<K> {
    fn position(&self, target: Handle) -> Option<usize> {
        self.neighbors.iter().position(|neighbor| neighbor.target == target)
    }
}

/// A graph stored as one list of outgoing arcs per vertex.
///
/// Vertices are kept in an arena and named internally by stable handles, so
/// removing a vertex never renumbers the others.  Neighbor lists keep arcs in
/// insertion order, which is the order traversals follow.  Vertex and arc
/// iteration follow arena slot order; a slot freed by
/// [`remove_vertex`](GraphMut::remove_vertex) is reused by the next
/// [`add_vertex`](GraphMut::add_vertex).
#[derive(Clone, Debug)]
pub struct AdjacencyList<K> {
    weighting: Weighting,
    vertices: Arena<VertexRecord<K>>,
    handles: HashMap<K, Handle>,
}

impl<K: Eq + Hash + Clone> AdjacencyList<K> {
    pub fn new(weighting: Weighting) -> Self {
        AdjacencyList {
            weighting,
            vertices: Arena::new(),
            handles: HashMap::new(),
        }
    }

    pub fn weighted() -> Self {
        Self::new(Weighting::Weighted)
    }

    pub fn unweighted() -> Self {
        Self::new(Weighting::Unweighted)
    }

    fn handle(&self, key: &K) -> Result<Handle, GraphError> {
        self.handles.get(key).copied().ok_or(GraphError::VertexNotFound)
    }

    fn handle_pair(&self, src: &K, dest: &K) -> Result<(Handle, Handle), GraphError> {
        Ok((self.handle(src)?, self.handle(dest)?))
    }

    fn push_arc(&mut self, src: Handle, dest: Handle, weight: Option<Weight>) {
        self.vertices[src]
            .neighbors
            .push(Neighbor { target: dest, weight });
    }

    fn attach_vertex(&mut self, key: K) -> Result<(), GraphError> {
        if self.handles.contains_key(&key) {
            return Err(GraphError::DuplicateVertex);
        }
        let handle = self.vertices.insert(VertexRecord {
            key: key.clone(),
            neighbors: Vec::new(),
        });
        self.handles.insert(key, handle);
        Ok(())
    }

    fn detach_vertex(&mut self, key: &K) -> Result<(), GraphError> {
        let handle = self.handles.remove(key).ok_or(GraphError::VertexNotFound)?;
        for record in self.vertices.values_mut() {
            record.neighbors.retain(|neighbor| neighbor.target != handle);
        }
        self.vertices.remove(handle);
        Ok(())
    }

    fn link(&mut self, src: &K, dest: &K, weight: Option<Weight>) -> Result<(), GraphError> {
        check_relation(self.weighting, src, dest, weight)?;
        let (src, dest) = self.handle_pair(src, dest)?;
        if self.vertices[src].position(dest).is_some() {
            return Err(GraphError::DuplicateArc);
        }
        self.push_arc(src, dest, weight);
        Ok(())
    }

    fn link_both(&mut self, src: &K, dest: &K, weight: Option<Weight>) -> Result<(), GraphError> {
        check_relation(self.weighting, src, dest, weight)?;
        let (src, dest) = self.handle_pair(src, dest)?;
        match (
            self.vertices[src].position(dest),
            self.vertices[dest].position(src),
        ) {
            (Some(_), Some(_)) => return Err(GraphError::DuplicateEdge),
            (Some(forward), None) => {
                self.vertices[src].neighbors[forward].weight = weight;
                self.push_arc(dest, src, weight);
            }
            (None, Some(backward)) => {
                self.vertices[dest].neighbors[backward].weight = weight;
                self.push_arc(src, dest, weight);
            }
            (None, None) => {
                self.push_arc(src, dest, weight);
                self.push_arc(dest, src, weight);
            }
        }
        Ok(())
    }

    fn unlink(&mut self, src: &K, dest: &K) -> Result<(), GraphError> {
        check_distinct(src, dest)?;
        let (src, dest) = self.handle_pair(src, dest)?;
        let forward = self.vertices[src]
            .position(dest)
            .ok_or(GraphError::ArcNotFound)?;
        self.vertices[src].neighbors.remove(forward);
        Ok(())
    }

    fn unlink_both(&mut self, src: &K, dest: &K) -> Result<(), GraphError> {
        check_distinct(src, dest)?;
        let (src, dest) = self.handle_pair(src, dest)?;
        let (Some(forward), Some(backward)) = (
            self.vertices[src].position(dest),
            self.vertices[dest].position(src),
        ) else {
            return Err(GraphError::EdgeNotFound);
        };
        self.vertices[src].neighbors.remove(forward);
        self.vertices[dest].neighbors.remove(backward);
        Ok(())
    }

    fn reweight(&mut self, src: &K, dest: &K, weight: Weight) -> Result<(), GraphError> {
        check_weighted(self.weighting)?;
        check_distinct(src, dest)?;
        let (src, dest) = self.handle_pair(src, dest)?;
        let forward = self.vertices[src]
            .position(dest)
            .ok_or(GraphError::ArcNotFound)?;
        self.vertices[src].neighbors[forward].weight = Some(weight);
        Ok(())
    }

    fn reweight_both(&mut self, src: &K, dest: &K, weight: Weight) -> Result<(), GraphError> {
        check_weighted(self.weighting)?;
        check_distinct(src, dest)?;
        let (src, dest) = self.handle_pair(src, dest)?;
        let (Some(forward), Some(backward)) = (
            self.vertices[src].position(dest),
            self.vertices[dest].position(src),
        ) else {
            return Err(GraphError::EdgeNotFound);
        };
        if !same_weight(
            self.vertices[src].neighbors[forward].weight,
            self.vertices[dest].neighbors[backward].weight,
        ) {
            return Err(GraphError::EdgeWeightMismatch);
        }
        self.vertices[src].neighbors[forward].weight = Some(weight);
        self.vertices[dest].neighbors[backward].weight = Some(weight);
        Ok(())
    }
}

impl<K: Eq + Hash + Clone> Graph for AdjacencyList<K> {
    type Key = K;
    type Dfs<'g>
        = DfsIterator<'g, Self>
    where
        Self: 'g;
    type Bfs<'g>
        = BfsIterator<'g, Self>
    where
        Self: 'g;

    fn weighting(&self) -> Weighting {
        self.weighting
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, key: &K) -> bool {
        self.handles.contains_key(key)
    }

    fn vertex_keys(&self) -> impl Iterator<Item = &K> {
        self.vertices.iter().map(|(_, record)| &record.key)
    }

    fn arc(&self, src: &K, dest: &K) -> Result<Option<Weight>, GraphError> {
        check_distinct(src, dest)?;
        let (src, dest) = self.handle_pair(src, dest)?;
        let record = &self.vertices[src];
        record
            .position(dest)
            .map(|forward| record.neighbors[forward].weight)
            .ok_or(GraphError::ArcNotFound)
    }

    fn successors(&self, key: &K) -> Result<Vec<&K>, GraphError> {
        let handle = self.handle(key)?;
        Ok(self.vertices[handle]
            .neighbors
            .iter()
            .map(|neighbor| &self.vertices[neighbor.target].key)
            .collect())
    }

    fn arcs(&self) -> Vec<(&K, &K, Option<Weight>)> {
        self.vertices
            .iter()
            .flat_map(|(_, record)| {
                record.neighbors.iter().map(move |neighbor| {
                    (
                        &record.key,
                        &self.vertices[neighbor.target].key,
                        neighbor.weight,
                    )
                })
            })
            .collect()
    }

    fn dfs<'g>(&'g self, start: &K) -> Result<Self::Dfs<'g>, GraphError> {
        Ok(DfsIterator::new(self, self.handle(start)?.index()))
    }

    fn bfs<'g>(&'g self, start: &K) -> Result<Self::Bfs<'g>, GraphError> {
        Ok(BfsIterator::new(self, self.handle(start)?.index()))
    }
}

impl<K: Eq + Hash + Clone> GraphMut for AdjacencyList<K> {
    fn add_vertex(&mut self, key: K) -> Result<(), GraphError> {
        logged("add_vertex", self.attach_vertex(key))
    }

    fn remove_vertex(&mut self, key: &K) -> Result<(), GraphError> {
        logged("remove_vertex", self.detach_vertex(key))
    }

    fn insert_arc(&mut self, src: &K, dest: &K, weight: Option<Weight>) -> Result<(), GraphError> {
        logged("add_arc", self.link(src, dest, weight))
    }

    fn insert_edge(
        &mut self,
        src: &K,
        dest: &K,
        weight: Option<Weight>,
    ) -> Result<(), GraphError> {
        logged("add_edge", self.link_both(src, dest, weight))
    }

    fn remove_arc(&mut self, src: &K, dest: &K) -> Result<(), GraphError> {
        logged("remove_arc", self.unlink(src, dest))
    }

    fn remove_edge(&mut self, src: &K, dest: &K) -> Result<(), GraphError> {
        logged("remove_edge", self.unlink_both(src, dest))
    }

    fn update_arc(&mut self, src: &K, dest: &K, weight: Weight) -> Result<(), GraphError> {
        logged("update_arc", self.reweight(src, dest, weight))
    }

    fn update_edge(&mut self, src: &K, dest: &K, weight: Weight) -> Result<(), GraphError> {
        logged("update_edge", self.reweight_both(src, dest, weight))
    }
}

impl<K: Eq + Hash + Clone> Slots for AdjacencyList<K> {
    type Key = K;

    fn slot_bound(&self) -> usize {
        self.vertices.slot_bound()
    }

    fn key_at(&self, slot: usize) -> &K {
        &self.vertices[Handle::from_index(slot)].key
    }

    fn neighbor_slots(&self, slot: usize) -> impl Iterator<Item = usize> + '_ {
        self.vertices[Handle::from_index(slot)]
            .neighbors
            .iter()
            .map(|neighbor| neighbor.target.index())
    }
}

/// Renders one line per vertex, `key -> n1, n2`, with weights to two decimal
/// places in parentheses on weighted graphs.
impl<K: Eq + Hash + Clone + fmt::Display> fmt::Display for AdjacencyList<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Adjacency list:")?;
        for (_, record) in self.vertices.iter() {
            write!(f, "{} ->", record.key)?;
            for (i, neighbor) in record.neighbors.iter().enumerate() {
                f.write_str(if i == 0 { " " } else { ", " })?;
                write!(f, "{}", self.vertices[neighbor.target].key)?;
                if let Some(weight) = neighbor.weight {
                    write!(f, " ({weight:.2})")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
