use super::*;

/// Reachability queries.
///
/// Edges are followed in their stored direction only. Consequently [`Connectivity::is_connected`]
/// answers whether every node is reachable **from node `0`**, which for a directed matrix is weaker
/// than strong connectivity (see [`Connectivity::is_strongly_connected`]).
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns *true* if every node can be reached from node `0` by following edges.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// // 0 -> 1 -> 2, but nothing leads back to 0
    /// let g = MatrixGraph::try_from([[0, 1, 0], [0, 0, 1], [0, 0, 0]]).unwrap();
    /// assert!(g.is_connected());
    /// assert!(!g.is_strongly_connected());
    /// ```
    fn is_connected(&self) -> bool {
        self.bfs(0).count() == self.len()
    }

    /// Returns the set of all nodes reachable from `u` (including `u` itself).
    /// ** Panics if `u >= n` **
    fn reachable_from(&self, u: Node) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(self.number_of_nodes(), self.bfs(u))
    }

    /// Returns *true* if there exists a directed path from `u` to `v`.
    /// ** Panics if `u >= n || v >= n` **
    fn has_path(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.bfs(u).stop_at(v).any(|x| x == v)
    }

    /// Returns *true* if every node can reach every other node.
    fn is_strongly_connected(&self) -> bool
    where
        Self: DirectedAdjacencyList,
    {
        self.is_connected() && Transposed(self).bfs(0).count() == self.len()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// View on a graph with all edges reversed
struct Transposed<'a, G>(&'a G);

impl<G: GraphNodeOrder> GraphNodeOrder for Transposed<'_, G> {
    fn number_of_nodes(&self) -> NumNodes {
        self.0.number_of_nodes()
    }
}

impl<G: DirectedAdjacencyList> AdjacencyList for Transposed<'_, G> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.0.in_neighbors_of(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;

    #[test]
    fn single_node_is_connected() {
        assert!(MatrixGraph::try_from([[0]]).unwrap().is_connected());
        assert!(MatrixGraph::try_from([[-3]]).unwrap().is_connected());
        assert!(MatrixGraph::try_from([[0]]).unwrap().is_strongly_connected());
    }

    #[test]
    fn cycle_through_all_nodes() {
        for n in 2..8 {
            let graph = MatrixGraph::from_weighted_edges(n, cycle_edges(0..n, 1)).unwrap();
            assert!(graph.is_connected());
            assert!(graph.is_strongly_connected());
        }
    }

    #[test]
    fn disjoint_components() {
        // {0, 1, 2} and {3, 4, 5}, both undirected triangles
        let mut edges = cycle_edges([0, 1, 2], 1);
        edges.extend(cycle_edges([2, 1, 0], 1));
        edges.extend(cycle_edges([3, 4, 5], 1));
        edges.extend(cycle_edges([5, 4, 3], 1));
        let graph = MatrixGraph::from_weighted_edges(6, edges).unwrap();

        assert!(!graph.is_connected());
        assert!(!graph.is_strongly_connected());
        assert_eq!(graph.reachable_from(4).iter_set_bits().collect_vec(), vec![3, 4, 5]);
        assert!(graph.has_path(0, 2));
        assert!(!graph.has_path(0, 3));
    }

    #[test]
    fn edgeless_graph() {
        let graph = MatrixGraph::from_matrix(vec![vec![0; 4]; 4]).unwrap();
        assert!(!graph.is_connected());
        for u in graph.vertices_range() {
            assert_eq!(graph.reachable_from(u).cardinality(), 1);
        }
    }

    #[test]
    fn reachability_is_directed() {
        // everything points towards node 0
        let graph = MatrixGraph::try_from([[0, 0, 0], [1, 0, 0], [0, 1, 0]]).unwrap();
        assert!(!graph.is_connected());
        assert!(graph.has_path(2, 0));
        assert!(!graph.has_path(0, 2));

        // reversing the edges makes 0 the root of everything
        let graph = MatrixGraph::try_from([[0, 1, 0], [0, 0, 1], [0, 0, 0]]).unwrap();
        assert!(graph.is_connected());
        assert!(!graph.is_strongly_connected());
    }

    #[test]
    fn negative_weights_are_edges() {
        let graph = MatrixGraph::try_from([[0, -1], [-4, 0]]).unwrap();
        assert!(graph.is_connected());
        assert!(graph.is_strongly_connected());
    }

    #[test]
    fn idempotent() {
        let graph = MatrixGraph::try_from([[0, 1, 0], [0, 0, 0], [1, 0, 0]]).unwrap();
        assert_eq!(graph.is_connected(), graph.is_connected());
        assert_eq!(graph.reachable_from(2), graph.reachable_from(2));
    }
}
