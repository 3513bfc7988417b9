/*!
# Bellman-Ford Shortest Paths

Single-source shortest paths that tolerate negative edge weights.

[`BellmanFord`] relaxes every edge up to `n - 1` times and afterwards performs one additional
pass. An edge that still relaxes in that pass proves a negative cycle reachable from the start.
Every node reachable from such an edge has no well-defined distance (it can be made arbitrarily
small) and is reported as *unbounded*: it gets neither a distance nor a path.

The result of a run is a [`ShortestPathTree`]. Runs take `O(n^3)` time on a matrix graph.
*/

use tracing::{debug, trace};

use super::*;

/// Configurable Bellman-Ford run from a single start node.
///
/// # Examples
/// ```
/// use mgraphs::{prelude::*, algo::*};
///
/// let g = MatrixGraph::from_weighted_edges(3, [(0, 1, 4), (1, 2, -2), (0, 2, 3)]).unwrap();
/// let tree = BellmanFord::new(&g, 0).run();
///
/// assert_eq!(tree.distance_to(2), Some(2));
/// assert_eq!(tree.path_to(2), vec![0, 1, 2]);
/// assert!(!tree.has_negative_cycle());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BellmanFord<'a, G> {
    graph: &'a G,
    start: Node,
    early_termination: bool,
}

impl<'a, G> BellmanFord<'a, G>
where
    G: WeightedAdjacency,
{
    /// Creates a new run starting at `start` with early termination enabled.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(
            start < graph.number_of_nodes(),
            "start node {start} is not in a graph with {} nodes",
            graph.number_of_nodes()
        );
        Self {
            graph,
            start,
            early_termination: true,
        }
    }

    /// If enabled (default), relaxation stops after the first pass that did not improve any distance.
    /// Disabling it always performs all `n - 1` passes; the result is the same.
    pub fn set_early_termination(&mut self, enabled: bool) {
        self.early_termination = enabled;
    }

    /// Builder-variant of [`BellmanFord::set_early_termination`]
    pub fn early_termination(mut self, enabled: bool) -> Self {
        self.set_early_termination(enabled);
        self
    }

    /// Performs a single pass over all edges. If `dirty` is given, every node whose
    /// distance improved is marked in it. Returns the last node that improved.
    fn relax(
        &self,
        distances: &mut [Option<Distance>],
        predecessors: &mut [Option<OptionalNode>],
        mut dirty: Option<&mut NodeBitSet>,
    ) -> Option<Node> {
        let mut last_relaxed = None;

        for WeightedEdge {
            edge: Edge(u, v),
            weight,
        } in self.graph.weighted_edges()
        {
            let Some(du) = distances[u as usize] else {
                continue;
            };

            let candidate = du + Distance::from(weight);
            if distances[v as usize].is_none_or(|dv| candidate < dv) {
                distances[v as usize] = Some(candidate);
                predecessors[v as usize] = OptionalNode::new(u);
                last_relaxed = Some(v);

                if let Some(dirty) = dirty.as_deref_mut() {
                    dirty.set_bit(v);
                }
            }
        }

        last_relaxed
    }

    /// Runs the algorithm and returns the resulting shortest path tree
    pub fn run(&self) -> ShortestPathTree {
        let n = self.graph.len();
        let mut distances: Vec<Option<Distance>> = vec![None; n];
        let mut predecessors: Vec<Option<OptionalNode>> = vec![None; n];
        distances[self.start as usize] = Some(0);

        let mut passes = 0;
        let mut converged = false;
        for _ in 1..n {
            passes += 1;
            let improved = self.relax(&mut distances, &mut predecessors, None).is_some();
            if !improved && self.early_termination {
                converged = true;
                break;
            }
        }

        let mut unbounded = self.graph.vertex_bitset_unset();
        let mut cycle_witness = None;

        if !converged {
            let mut dirty = self.graph.vertex_bitset_unset();
            cycle_witness = self.relax(&mut distances, &mut predecessors, Some(&mut dirty));

            // Everything reachable from an edge that still relaxes is affected by a negative cycle
            for u in dirty.iter_set_bits() {
                if unbounded.get_bit(u) {
                    continue;
                }
                for v in self.graph.bfs(u) {
                    unbounded.set_bit(v);
                }
            }

            for v in unbounded.iter_set_bits() {
                distances[v as usize] = None;
            }
        }

        trace!(
            start = self.start,
            passes,
            converged,
            negative_cycle = cycle_witness.is_some(),
            "bellman-ford finished"
        );
        if cycle_witness.is_some() {
            debug!(
                start = self.start,
                unbounded = unbounded.cardinality(),
                "negative cycle reachable from start"
            );
        }

        ShortestPathTree {
            start: self.start,
            distances,
            predecessors,
            unbounded,
            cycle_witness,
        }
    }
}

/// Result of a [`BellmanFord`] run.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    start: Node,
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<OptionalNode>>,
    unbounded: NodeBitSet,
    cycle_witness: Option<Node>,
}

impl ShortestPathTree {
    /// The node the run started at
    pub fn start(&self) -> Node {
        self.start
    }

    /// Returns *true* if a negative cycle is reachable from the start node
    pub fn has_negative_cycle(&self) -> bool {
        self.cycle_witness.is_some()
    }

    /// Returns the length of a shortest path from the start to `v`, or `None` if `v` is
    /// unreachable or its distance is unbounded because of a negative cycle.
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Option<Distance> {
        self.distances[v as usize]
    }

    /// Returns *true* if `v` is reachable from the start node (unbounded nodes included)
    /// ** Panics if `v >= n` **
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distances[v as usize].is_some() || self.unbounded.get_bit(v)
    }

    /// Returns *true* if `v` can be reached via a negative cycle
    /// ** Panics if `v >= n` **
    pub fn is_unbounded(&self, v: Node) -> bool {
        self.unbounded.get_bit(v)
    }

    /// Returns the node preceding `v` on its shortest path. `None` for the start node,
    /// unreachable nodes and unbounded nodes.
    /// ** Panics if `v >= n` **
    pub fn predecessor_of(&self, v: Node) -> Option<Node> {
        if self.unbounded.get_bit(v) {
            return None;
        }
        self.predecessors[v as usize].map(|p| p.get())
    }

    /// Returns the nodes of a shortest path from the start to `v` (both inclusive), or an empty
    /// path if `v` is unreachable or unbounded.
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Vec<Node> {
        if self.distances[v as usize].is_none() {
            if self.unbounded.get_bit(v) {
                debug!(start = self.start, end = v, "no shortest path: distance is unbounded");
            }
            return Vec::new();
        }

        let mut path = vec![v];
        let mut node = v;
        while node != self.start {
            match self.predecessor_of(node) {
                Some(p) if path.len() < self.distances.len() => {
                    path.push(p);
                    node = p;
                }
                _ => return Vec::new(),
            }
        }

        path.reverse();
        path
    }

    /// Returns the nodes of a negative cycle reachable from the start in edge order,
    /// or `None` if there is no such cycle.
    pub fn negative_cycle(&self) -> Option<Vec<Node>> {
        let n = self.predecessors.len();
        let pred = |u: Node| self.predecessors[u as usize].map(|p| p.get());

        // After `n` steps backwards we must be on the cycle
        let mut on_cycle = self.cycle_witness?;
        for _ in 0..n {
            on_cycle = pred(on_cycle)?;
        }

        let mut cycle = vec![on_cycle];
        let mut node = pred(on_cycle)?;
        while node != on_cycle {
            if cycle.len() > n {
                return None;
            }
            cycle.push(node);
            node = pred(node)?;
        }

        cycle.reverse();
        Some(cycle)
    }
}

/// Shortest path queries on weighted graphs (negative weights allowed)
pub trait ShortestPath: WeightedAdjacency + Sized {
    /// Runs [`BellmanFord`] from `start` with the default configuration.
    /// ** Panics if `start >= n` **
    fn shortest_path_tree(&self, start: Node) -> ShortestPathTree {
        BellmanFord::new(self, start).run()
    }

    /// Returns the nodes of a minimum-weight path from `start` to `end`, both inclusive.
    ///
    /// - `start == end` always yields `[start]`.
    /// - The path is empty if `end` is unreachable, or if a negative cycle reachable from
    ///   `start` leads to `end` (the shortest distance is then undefined).
    ///
    /// ** Panics if `start >= n || end >= n` **
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::from_weighted_edges(3, [(0, 1, 1), (1, 2, 1), (0, 2, 5)]).unwrap();
    /// assert_eq!(g.shortest_path(0, 2), vec![0, 1, 2]);
    /// assert_eq!(g.shortest_path(2, 0), Vec::<Node>::new());
    /// assert_eq!(g.shortest_path(1, 1), vec![1]);
    /// ```
    fn shortest_path(&self, start: Node, end: Node) -> Vec<Node> {
        assert!(end < self.number_of_nodes());
        if start == end {
            assert!(start < self.number_of_nodes());
            return vec![start];
        }

        self.shortest_path_tree(start).path_to(end)
    }

    /// Returns the total weight of a shortest path from `start` to `end`, or `None` if
    /// there is no path or the distance is unbounded.
    /// ** Panics if `start >= n || end >= n` **
    fn shortest_distance(&self, start: Node, end: Node) -> Option<Distance> {
        assert!(end < self.number_of_nodes());
        self.shortest_path_tree(start).distance_to(end)
    }
}

impl<G> ShortestPath for G where G: WeightedAdjacency + Sized {}
