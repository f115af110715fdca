//! Lazy graph traversals over slot-indexed storage.
//!
//! Every traversal owns a fresh visited set sized to the graph's slot bound,
//! so markers never leak from one traversal into the next.  Iterators borrow
//! the graph immutably and cannot be restarted; start a new traversal to walk
//! the graph again.
//!
//! Traversals are started only through [`Graph::dfs`](crate::Graph::dfs) and
//! [`Graph::bfs`](crate::Graph::bfs), which resolve the start key first.
//! Slot numbers never cross the public API:
//!
//! ```compile_fail
//! use arcedge::{AdjacencyList, search::DfsIterator};
//!
//! let graph = AdjacencyList::<u8>::unweighted();
//! DfsIterator::new(&graph, 3).count();
//! ```
//!
//! ```compile_fail
//! use arcedge::search::Slots;
//! ```
use std::collections::VecDeque;

use bitvec::vec::BitVec;
use derivative::Derivative;

pub(crate) use self::slots::Slots;

mod slots {
    /// A view of a graph's vertices as dense slot numbers.  Slots are the
    /// positions traversals mark as visited.  Public only so it can bound the
    /// iterator types; it cannot be named outside the crate.
    pub trait Slots {
        type Key;

        /// An exclusive upper bound on every slot in use.
        fn slot_bound(&self) -> usize;

        /// Gets the key of the vertex occupying `slot`.  Panics if the slot
        /// is not in use.
        fn key_at(&self, slot: usize) -> &Self::Key;

        /// Gets the slots of the targets of every arc leaving `slot`, in
        /// neighbor order.  Never yields `slot` itself.
        fn neighbor_slots(&self, slot: usize) -> impl Iterator<Item = usize> + '_;
    }
}

fn new_visited(bound: usize) -> BitVec {
    BitVec::repeat(false, bound)
}

/// Depth-first traversal in recursive pre-order: after a vertex is yielded,
/// its unvisited neighbors are explored in neighbor order, each to full
/// depth before the next.  Vertices are marked when they are yielded.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct DfsIterator<'g, G: Slots> {
    #[derivative(Debug = "ignore")]
    graph: &'g G,
    visited: BitVec,
    stack: Vec<usize>,
}

impl<'g, G: Slots> DfsIterator<'g, G> {
    pub(crate) fn new(graph: &'g G, start: usize) -> Self {
        Self {
            graph,
            visited: new_visited(graph.slot_bound()),
            stack: vec![start],
        }
    }
}

impl<'g, G: Slots> Iterator for DfsIterator<'g, G> {
    type Item = &'g G::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Some(slot) = self.stack.pop() {
            if self.visited[slot] {
                continue;
            }
            self.visited.set(slot, true);
            let successors = graph
                .neighbor_slots(slot)
                .filter(|&next| !self.visited[next])
                .collect::<Vec<_>>();
            self.stack.extend(successors.into_iter().rev());
            return Some(graph.key_at(slot));
        }
        None
    }
}

/// Depth-first traversal driven by an explicit stack in which vertices are
/// marked when pushed.  All unvisited neighbors of a vertex are pushed in
/// neighbor order when it is yielded, so the last of them is explored first.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct StackDfsIterator<'g, G: Slots> {
    #[derivative(Debug = "ignore")]
    graph: &'g G,
    visited: BitVec,
    stack: Vec<usize>,
}

impl<'g, G: Slots> StackDfsIterator<'g, G> {
    pub(crate) fn new(graph: &'g G, start: usize) -> Self {
        let mut visited = new_visited(graph.slot_bound());
        visited.set(start, true);
        Self {
            graph,
            visited,
            stack: vec![start],
        }
    }
}

impl<'g, G: Slots> Iterator for StackDfsIterator<'g, G> {
    type Item = &'g G::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let slot = self.stack.pop()?;
        for next in graph.neighbor_slots(slot) {
            if !self.visited[next] {
                self.visited.set(next, true);
                self.stack.push(next);
            }
        }
        Some(graph.key_at(slot))
    }
}

/// Breadth-first traversal.  Vertices are marked when enqueued, so each
/// enters the queue at most once.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct BfsIterator<'g, G: Slots> {
    #[derivative(Debug = "ignore")]
    graph: &'g G,
    visited: BitVec,
    queue: VecDeque<usize>,
}

impl<'g, G: Slots> BfsIterator<'g, G> {
    pub(crate) fn new(graph: &'g G, start: usize) -> Self {
        let mut visited = new_visited(graph.slot_bound());
        visited.set(start, true);
        Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        }
    }
}

impl<'g, G: Slots> Iterator for BfsIterator<'g, G> {
    type Item = &'g G::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let slot = self.queue.pop_front()?;
        for next in graph.neighbor_slots(slot) {
            if !self.visited[next] {
                self.visited.set(next, true);
                self.queue.push_back(next);
            }
        }
        Some(graph.key_at(slot))
    }
}
