/*!
# Graph Operations

Read-only traits every graph representation of this crate implements.
Algorithms in [`crate::algo`] are written against these traits only, so they never depend on the
concrete storage of the adjacency matrix.
*/

use std::ops::Range;

use crate::{error::*, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the range `0..n` of all nodes.
    /// The range does not borrow `self`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns full bitset with one entry per node
    fn vertex_bitset_set(&self) -> NodeBitSet {
        NodeBitSet::new_all_set(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// In a matrix graph every non-zero entry is one (directed) edge.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the out-neighbors of a given vertex in increasing order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns the maximum out-degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices_range()
            .map(|u| self.degree_of(u))
            .max()
            .unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph in row-major order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }
}

/// Access to incoming edges
pub trait DirectedAdjacencyList: AdjacencyList {
    /// Returns an iterator over nodes `v` with edges `(v, u)` in increasing order
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of incoming neighbors of a given vertex
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_neighbors_of(u).count() as NumNodes
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }

    /// Returns *true* if there exists an edge (u,v) or (v,u) in the graph, ie. if `u` and `v`
    /// are adjacent when ignoring edge directions.
    /// ** Panics if `u >= n || v >= n` **
    fn has_undirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) || self.has_edge(v, u)
    }
}

/// Access to edge weights.
///
/// An edge `(u, v)` exists iff `weight(u, v) != 0`; its cost is exactly that weight.
pub trait WeightedAdjacency: AdjacencyList + AdjacencyTest {
    /// Returns the weight of the entry `(u, v)`, `0` if there is no such edge.
    /// ** Panics if `u >= n || v >= n` **
    fn weight(&self, u: Node, v: Node) -> Weight;

    /// Returns the weight of the entry `(u, v)` or [`GraphError::IndexOutOfBounds`]
    /// if either index is not a node of the graph.
    fn try_weight(&self, u: Node, v: Node) -> Result<Weight> {
        let n = self.number_of_nodes();
        if u >= n || v >= n {
            return Err(GraphError::IndexOutOfBounds {
                u,
                v,
                n: n as usize,
            });
        }
        Ok(self.weight(u, v))
    }

    /// Returns an iterator over all outgoing edges of `u` with their weights.
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.neighbors_of(u)
            .map(move |v| WeightedEdge::new(u, v, self.weight(u, v)))
    }

    /// Returns an iterator over all edges of the graph with their weights in row-major order.
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.weighted_edges_of(u))
    }
}
