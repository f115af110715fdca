//! Dense graph storage with a fixed vertex capacity.
mod cells;

use std::{fmt, hash::Hash};

use self::cells::Cells;
use crate::{
    error::GraphError,
    graph::{Graph, GraphMut, check_distinct, check_relation, check_weighted, logged},
    search::{BfsIterator, Slots, StackDfsIterator},
    weighting::{Weight, Weighting, same_weight},
};

/// A graph stored as a square matrix of cells, one row and one column per
/// vertex.
///
/// Vertices occupy a dense table whose positions double as row and column
/// indices.  The matrix is allocated for `capacity` vertices up front and
/// never grows; removing a vertex shifts every later vertex down one
/// position, keeping survivors in insertion order.  Successors, arcs and
/// traversals scan positions in ascending order.
#[derive(Clone, Debug)]
pub struct AdjacencyMatrix<K> {
    weighting: Weighting,
    vertices: Vec<K>,
    cells: Cells,
}

impl<K: Eq + Hash + Clone> AdjacencyMatrix<K> {
    pub fn new(capacity: usize, weighting: Weighting) -> Self {
        AdjacencyMatrix {
            weighting,
            vertices: Vec::with_capacity(capacity),
            cells: Cells::new(capacity, weighting),
        }
    }

    pub fn weighted(capacity: usize) -> Self {
        Self::new(capacity, Weighting::Weighted)
    }

    pub fn unweighted(capacity: usize) -> Self {
        Self::new(capacity, Weighting::Unweighted)
    }

    /// Gets the maximum number of vertices the matrix can hold.
    pub fn capacity(&self) -> usize {
        self.cells.size()
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() == self.capacity()
    }

    /// Gets the row and column index of a vertex.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.vertices.iter().position(|vertex| vertex == key)
    }

    fn index(&self, key: &K) -> Result<usize, GraphError> {
        self.position(key).ok_or(GraphError::VertexNotFound)
    }

    fn index_pair(&self, src: &K, dest: &K) -> Result<(usize, usize), GraphError> {
        Ok((self.index(src)?, self.index(dest)?))
    }

    fn attach_vertex(&mut self, key: K) -> Result<(), GraphError> {
        if self.is_full() {
            return Err(GraphError::CapacityExhausted {
                capacity: self.capacity(),
            });
        }
        if self.position(&key).is_some() {
            return Err(GraphError::DuplicateVertex);
        }
        self.vertices.push(key);
        Ok(())
    }

    fn detach_vertex(&mut self, key: &K) -> Result<(), GraphError> {
        let index = self.index(key)?;
        self.cells.remove_index(index, self.vertices.len());
        self.vertices.remove(index);
        Ok(())
    }

    fn link(&mut self, src: &K, dest: &K, weight: Option<Weight>) -> Result<(), GraphError> {
        check_relation(self.weighting, src, dest, weight)?;
        let (src, dest) = self.index_pair(src, dest)?;
        if self.cells.is_set(src, dest) {
            return Err(GraphError::DuplicateArc);
        }
        self.cells.set(src, dest, weight);
        Ok(())
    }

    fn link_both(&mut self, src: &K, dest: &K, weight: Option<Weight>) -> Result<(), GraphError> {
        check_relation(self.weighting, src, dest, weight)?;
        let (src, dest) = self.index_pair(src, dest)?;
        if self.cells.is_set(src, dest) && self.cells.is_set(dest, src) {
            return Err(GraphError::DuplicateEdge);
        }
        self.cells.set(src, dest, weight);
        self.cells.set(dest, src, weight);
        Ok(())
    }

    fn unlink(&mut self, src: &K, dest: &K) -> Result<(), GraphError> {
        check_distinct(src, dest)?;
        let (src, dest) = self.index_pair(src, dest)?;
        if !self.cells.is_set(src, dest) {
            return Err(GraphError::ArcNotFound);
        }
        self.cells.clear(src, dest);
        Ok(())
    }

    fn unlink_both(&mut self, src: &K, dest: &K) -> Result<(), GraphError> {
        check_distinct(src, dest)?;
        let (src, dest) = self.index_pair(src, dest)?;
        if !(self.cells.is_set(src, dest) && self.cells.is_set(dest, src)) {
            return Err(GraphError::EdgeNotFound);
        }
        self.cells.clear(src, dest);
        self.cells.clear(dest, src);
        Ok(())
    }

    fn reweight(&mut self, src: &K, dest: &K, weight: Weight) -> Result<(), GraphError> {
        check_weighted(self.weighting)?;
        check_distinct(src, dest)?;
        let (src, dest) = self.index_pair(src, dest)?;
        if !self.cells.is_set(src, dest) {
            return Err(GraphError::ArcNotFound);
        }
        self.cells.set(src, dest, Some(weight));
        Ok(())
    }

    fn reweight_both(&mut self, src: &K, dest: &K, weight: Weight) -> Result<(), GraphError> {
        check_weighted(self.weighting)?;
        check_distinct(src, dest)?;
        let (src, dest) = self.index_pair(src, dest)?;
        if !(self.cells.is_set(src, dest) && self.cells.is_set(dest, src)) {
            return Err(GraphError::EdgeNotFound);
        }
        if !same_weight(self.cells.weight(src, dest), self.cells.weight(dest, src)) {
            return Err(GraphError::EdgeWeightMismatch);
        }
        self.cells.set(src, dest, Some(weight));
        self.cells.set(dest, src, Some(weight));
        Ok(())
    }

    /// Gets the positions of every vertex `index` has an arc to.
    fn targets(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertices.len()).filter(move |&col| col != index && self.cells.is_set(index, col))
    }

    fn cell_text(&self, row: usize, col: usize) -> String {
        match self.weighting {
            Weighting::Unweighted => {
                String::from(if self.cells.is_set(row, col) { "T" } else { "F" })
            }
            Weighting::Weighted => match self.cells.weight(row, col) {
                Some(weight) => format!("{weight:.1}"),
                None => "null".to_string(),
            },
        }
    }
}

impl<K: Eq + Hash + Clone> Graph for AdjacencyMatrix<K> {
    type Key = K;
    type Dfs<'g>
        = StackDfsIterator<'g, Self>
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
        self.position(key).is_some()
    }

    fn vertex_keys(&self) -> impl Iterator<Item = &K> {
        self.vertices.iter()
    }

    fn arc(&self, src: &K, dest: &K) -> Result<Option<Weight>, GraphError> {
        check_distinct(src, dest)?;
        let (src, dest) = self.index_pair(src, dest)?;
        if self.cells.is_set(src, dest) {
            Ok(self.cells.weight(src, dest))
        } else {
            Err(GraphError::ArcNotFound)
        }
    }

    fn successors(&self, key: &K) -> Result<Vec<&K>, GraphError> {
        let index = self.index(key)?;
        Ok(self.targets(index).map(|col| &self.vertices[col]).collect())
    }

    fn arcs(&self) -> Vec<(&K, &K, Option<Weight>)> {
        (0..self.vertices.len())
            .flat_map(|row| {
                self.targets(row).map(move |col| {
                    (
                        &self.vertices[row],
                        &self.vertices[col],
                        self.cells.weight(row, col),
                    )
                })
            })
            .collect()
    }

    fn dfs<'g>(&'g self, start: &K) -> Result<Self::Dfs<'g>, GraphError> {
        Ok(StackDfsIterator::new(self, self.index(start)?))
    }

    fn bfs<'g>(&'g self, start: &K) -> Result<Self::Bfs<'g>, GraphError> {
        Ok(BfsIterator::new(self, self.index(start)?))
    }
}

impl<K: Eq + Hash + Clone> GraphMut for AdjacencyMatrix<K> {
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

impl<K: Eq + Hash + Clone> Slots for AdjacencyMatrix<K> {
    type Key = K;

    fn slot_bound(&self) -> usize {
        self.vertices.len()
    }

    fn key_at(&self, slot: usize) -> &K {
        &self.vertices[slot]
    }

    fn neighbor_slots(&self, slot: usize) -> impl Iterator<Item = usize> + '_ {
        self.targets(slot)
    }
}

/// Renders a grid with a header row of keys and one row per vertex.  Cells
/// show `T`/`F` on unweighted graphs and the weight to one decimal place, or
/// `null`, on weighted ones.  The diagonal is shown as stored.
impl<K: Eq + Hash + Clone + fmt::Display> fmt::Display for AdjacencyMatrix<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.vertices.len();
        let labels = self.vertices.iter().map(ToString::to_string).collect::<Vec<_>>();
        let rows = (0..len)
            .map(|row| (0..len).map(|col| self.cell_text(row, col)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let label_width = labels.iter().map(|label| width(label)).max().unwrap_or(0);
        let cell_width = rows
            .iter()
            .flatten()
            .chain(&labels)
            .map(|text| width(text))
            .max()
            .unwrap_or(0);

        let mut header = " ".repeat(label_width);
        for label in &labels {
            header.push_str(&format!(" {label:<cell_width$}"));
        }
        writeln!(f, "{}", header.trim_end())?;
        for (label, cells) in labels.iter().zip(&rows) {
            let mut line = format!("{label:<label_width$}");
            for cell in cells {
                line.push_str(&format!(" {cell:<cell_width$}"));
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Width of `text` as counted by `{:<width$}` padding, which is in chars.
fn width(text: &str) -> usize {
    text.chars().count()
}
