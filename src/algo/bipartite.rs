/*!
# Bipartite Graph Algorithms

Bipartiteness ignores edge directions and weights: nodes `u` and `v` are adjacent if
`weight(u, v) != 0` **or** `weight(v, u) != 0`. A self-loop therefore makes a graph
non-bipartite.

Functionality includes:
- Testing whether a graph is bipartite
- Computing a valid bipartition if one exists
- Verifying a candidate bipartition
*/

use std::collections::VecDeque;

use super::*;

/// A bipartition of the node set stored as a bitset.
///
/// - Nodes in the set are considered to be on the **right** (1) side
/// - Nodes not in the set are considered to be on the **left** (0) side
pub trait Bipartition {
    /// Returns `true` if the node is on the left (0) side of the partition.
    fn is_on_left_side(&self, u: Node) -> bool;

    /// Returns `true` if the node is on the right (1) side of the partition.
    fn is_on_right_side(&self, u: Node) -> bool {
        !self.is_on_left_side(u)
    }

    /// Returns all nodes on the left side in increasing order
    fn left_side(&self) -> Vec<Node>;

    /// Returns all nodes on the right side in increasing order
    fn right_side(&self) -> Vec<Node>;
}

impl Bipartition for NodeBitSet {
    #[inline]
    fn is_on_left_side(&self, u: Node) -> bool {
        !self.get_bit(u)
    }

    fn left_side(&self) -> Vec<Node> {
        self.iter_cleared_bits().collect()
    }

    fn right_side(&self) -> Vec<Node> {
        self.iter_set_bits().collect()
    }
}

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest {
    /// Tests whether the given candidate partition is a valid bipartition,
    /// ie. no edge connects two nodes on the same side.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_from([[0, 1, 0], [0, 0, 1], [0, 0, 0]]).unwrap();
    ///
    /// assert!(g.is_bipartition(&NodeBitSet::new_with_bits_set(3, [1 as Node])));
    /// assert!(!g.is_bipartition(&NodeBitSet::new_with_bits_set(3, [2 as Node])));
    /// ```
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition;

    /// Computes a valid bipartition of the graph, if one exists.
    /// The smallest node of every connected component is placed on the left side.
    /// Returns `None` if the graph is not bipartite.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// // 4-cycle 0 - 1 - 2 - 3 - 0
    /// let g = MatrixGraph::try_from([[0, 1, 0, 1], [1, 0, 1, 0], [0, 1, 0, 1], [1, 0, 1, 0]]).unwrap();
    ///
    /// let bip = g.compute_bipartition().unwrap();
    /// assert_eq!(bip.left_side(), vec![0, 2]);
    /// assert_eq!(bip.right_side(), vec![1, 3]);
    /// ```
    fn compute_bipartition(&self) -> Option<NodeBitSet>;

    /// Tests whether the graph is bipartite.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let triangle = MatrixGraph::try_from([[0, 1, 0], [0, 0, 1], [1, 0, 0]]).unwrap();
    /// assert!(!triangle.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G
where
    G: AdjacencyList + AdjacencyTest,
{
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition,
    {
        self.edges(false)
            .all(|Edge(u, v)| bipartition.is_on_left_side(u) != bipartition.is_on_left_side(v))
    }

    fn compute_bipartition(&self) -> Option<NodeBitSet> {
        let mut colored = self.vertex_bitset_unset();
        let mut right = self.vertex_bitset_unset();
        let mut queue = VecDeque::new();

        for root in self.vertices_range() {
            if colored.get_bit(root) {
                continue;
            }

            colored.set_bit(root);
            queue.push_back(root);

            while let Some(u) = queue.pop_front() {
                let u_is_right = right.get_bit(u);

                for v in self.vertices_range() {
                    if !self.has_undirected_edge(u, v) {
                        continue;
                    }

                    if !colored.get_bit(v) {
                        colored.set_bit(v);
                        if !u_is_right {
                            right.set_bit(v);
                        }
                        queue.push_back(v);
                    } else if right.get_bit(v) == u_is_right {
                        return None;
                    }
                }
            }
        }

        Some(right)
    }
}
