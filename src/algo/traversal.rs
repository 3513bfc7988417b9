/*!
Graph traversal algorithms.

This module provides:
- A generic traversal iterator (`TraversalSearch`) that becomes a BFS or a DFS depending on the
  frontier container.
- Topological ordering for directed graphs.
- A high-level `Traversal` trait that exposes traversal algorithms directly as methods on
  graph data structures.

Traversals only follow edges in their stored direction, ie. `u -> v` iff `weight(u, v) != 0`.
*/

use super::*;
use std::collections::VecDeque;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// nodes during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and
/// a bitset of nodes that were already discovered.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    stop_at: Option<Node>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
///
/// Note that nodes are marked on discovery, so this is *not* a DFS in the sense of
/// back-edge classification. Use [`CycleDetection`](super::CycleDetection) for that.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.get_bit(v) {
                    self.sequencer.push(v);
                    self.visited.set_bit(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(start),
            stop_at: None,
        }
    }

    /// Returns the set of nodes discovered so far.
    /// Once the iterator is exhausted, these are exactly the nodes reachable from the start(s).
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Checks if a given node `u` has already been discovered.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.graph.vertices_range().find(|&u| !self.visited.get_bit(u)) {
            None => false,
            Some(x) => {
                self.visited.set_bit(x);
                self.sequencer.push(x);
                true
            }
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }
}

/// Iterator implementing topological ordering over a directed acyclic graph (DAG).
///
/// Uses a variant of Kahn's algorithm:
/// - Initializes with all nodes of in-degree 0.
/// - Repeatedly removes a node, decreasing in-degrees of its successors,
///   and enqueues new nodes of in-degree 0.
/// - Stops once all nodes are output or a cycle prevents further progress.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    stack: Vec<Node>,
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.stack.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.graph.len()))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let mut in_degs: Vec<NumNodes> = vec![0; graph.len()];
        for Edge(_, v) in graph.edges(false) {
            in_degs[v as usize] += 1;
        }

        let stack: Vec<Node> = in_degs
            .iter()
            .enumerate()
            .filter_map(|(i, d)| (*d == 0).then_some(i as Node))
            .collect();

        Self {
            graph,
            in_degs,
            stack,
        }
    }
}

/// Provides convenient traversal methods (BFS, DFS, topological order)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_from([[0, 1, 1], [0, 0, 0], [0, 0, 0]]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// using a stack as frontier.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_from([[0, 1, 1], [0, 0, 0], [0, 0, 0]]).unwrap();
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 2, 1]);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns an iterator yielding nodes in a valid **topological order**.
    /// Terminates early if the graph contains a cycle.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_from([[0, 1, 0], [0, 0, 1], [0, 0, 0]]).unwrap();
    /// let order: Vec<_> = g.topo_search().collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Returns `true` if the directed graph is **acyclic**.
    ///
    /// Implementation: runs a topological search and checks whether
    /// all nodes were output.
    fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.len()
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;

    //  / 2 --- \
    // 1         4 - 3
    //  \ 0 - 5 /
    fn sample() -> MatrixGraph {
        MatrixGraph::from_weighted_edges(
            6,
            [(1, 2, 1), (1, 0, 1), (4, 3, 1), (0, 5, 1), (2, 4, 1), (5, 4, 1)],
        )
        .unwrap()
    }

    #[test]
    fn bfs_order() {
        let graph = sample();

        assert_eq!(graph.bfs(1).collect_vec(), vec![1, 0, 2, 5, 4, 3]);
        assert_eq!(BFS::new(&graph, 5).collect_vec(), vec![5, 4, 3]);
    }

    #[test]
    fn dfs_order() {
        let graph = sample();

        let order = graph.dfs(1).collect_vec();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);
        assert_eq!(graph.dfs(5).collect_vec(), vec![5, 4, 3]);
    }

    #[test]
    fn visited_after_exhaustion() {
        let graph = sample();
        let mut bfs = graph.bfs(2);
        bfs.by_ref().for_each(drop);

        assert_eq!(bfs.visited().iter_set_bits().collect_vec(), vec![2, 3, 4]);
        assert!(!bfs.did_visit_node(0));

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.collect_vec(), vec![0, 5]);
    }

    #[test]
    fn test_stopper() {
        let graph =
            MatrixGraph::from_weighted_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.bfs(0).stop_at(1).collect_vec(), vec![0, 1]);
    }

    #[test]
    fn topology_rank() {
        let mut matrix = MatrixGraph::from_weighted_edges(
            7,
            [(2, 0, 1), (1, 0, 1), (0, 3, 1), (0, 4, 1), (0, 5, 1), (3, 6, 1)],
        )
        .unwrap()
        .into_matrix();

        {
            let graph = MatrixGraph::from_matrix(matrix.clone()).unwrap();
            let order = graph.topo_search().collect_vec();
            assert_eq!(order.len(), graph.len());

            let mut ranks = vec![0; graph.len()];
            for (rank, &u) in order.iter().enumerate() {
                ranks[u as usize] = rank;
            }
            for Edge(u, v) in graph.edges(false) {
                assert!(ranks[u as usize] < ranks[v as usize]);
            }
            assert!(graph.is_acyclic());
        }

        matrix[6][2] = 1; // introduce cycle
        let graph = MatrixGraph::from_matrix(matrix).unwrap();
        assert!(graph.topo_search().count() < graph.len());
        assert!(!graph.is_acyclic());
    }
}
