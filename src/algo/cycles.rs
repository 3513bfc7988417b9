/*!
# Directed Cycle Detection

Depth-first search that distinguishes nodes that were *ever* visited from nodes that are
currently *on the search path*. An edge into a node on the path closes a cycle.

The search does not recurse: every "call" is a frame on an explicit stack holding the node's
remaining neighbor iterator, so arbitrarily long paths cannot overflow the native stack.
*/

use super::*;

pub trait CycleDetection: AdjacencyList + Sized {
    /// Returns *true* if the graph contains a directed cycle (self-loops included).
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = MatrixGraph::try_from([[0, 1, 0], [0, 0, 1], [0, 0, 0]]).unwrap();
    /// assert!(!g.contains_cycle());
    ///
    /// g.load(vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]]).unwrap();
    /// assert!(g.contains_cycle());
    /// ```
    fn contains_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// Returns the nodes of some directed cycle `[v0, v1, ..., vk]` such that all edges
    /// `(v0, v1), ..., (vk-1, vk), (vk, v0)` exist, or `None` if the graph is acyclic.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_from([[0, 1, 0, 0], [0, 0, 1, 0], [0, 1, 0, 1], [0, 0, 0, 0]]).unwrap();
    /// assert_eq!(g.find_cycle(), Some(vec![1, 2]));
    /// ```
    fn find_cycle(&self) -> Option<Vec<Node>>;
}

impl<G> CycleDetection for G
where
    G: AdjacencyList + Sized,
{
    fn find_cycle(&self) -> Option<Vec<Node>> {
        let mut visited = self.vertex_bitset_unset();
        let mut on_path = self.vertex_bitset_unset();

        // `path[i]` is the node whose remaining neighbors are `call_stack[i]`
        let mut path: Vec<Node> = Vec::new();
        let mut call_stack = Vec::new();

        for root in self.vertices_range() {
            if visited.get_bit(root) {
                continue;
            }

            visited.set_bit(root);
            on_path.set_bit(root);
            path.push(root);
            call_stack.push(self.neighbors_of(root));

            while let Some(neighbors) = call_stack.last_mut() {
                match neighbors.next() {
                    Some(v) if on_path.get_bit(v) => {
                        let first = path.iter().rposition(|&u| u == v)?;
                        return Some(path.split_off(first));
                    }
                    Some(v) => {
                        if !visited.get_bit(v) {
                            visited.set_bit(v);
                            on_path.set_bit(v);
                            path.push(v);
                            call_stack.push(self.neighbors_of(v));
                        }
                    }
                    None => {
                        call_stack.pop();
                        if let Some(u) = path.pop() {
                            on_path.clear_bit(u);
                        }
                    }
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn assert_is_cycle(graph: &MatrixGraph, cycle: &[Node]) {
        assert!(!cycle.is_empty());
        assert!(cycle.iter().all_unique());
        for (&u, &v) in cycle.iter().circular_tuple_windows() {
            assert!(graph.has_edge(u, v), "missing edge ({u},{v}) in {cycle:?}");
        }
    }

    #[test]
    fn path_is_acyclic() {
        let graph = MatrixGraph::from_weighted_edges(3, path_edges([0, 1, 2], 1)).unwrap();
        assert!(!graph.contains_cycle());
        assert_eq!(graph.find_cycle(), None);
    }

    #[test]
    fn back_edge_closes_cycle() {
        let graph =
            MatrixGraph::from_weighted_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]).unwrap();
        assert!(graph.contains_cycle());
        assert_eq!(graph.find_cycle(), Some(vec![0, 1, 2]));
    }

    #[test]
    fn self_loop_is_cycle() {
        let graph = MatrixGraph::try_from([[0, 1], [0, 7]]).unwrap();
        assert_eq!(graph.find_cycle(), Some(vec![1]));
    }

    #[test]
    fn edgeless_and_single_node() {
        assert!(!MatrixGraph::try_from([[0]]).unwrap().contains_cycle());
        assert!(
            !MatrixGraph::from_matrix(vec![vec![0; 5]; 5])
                .unwrap()
                .contains_cycle()
        );
    }

    #[test]
    fn cross_edges_are_not_cycles() {
        // diamond 0 -> {1, 2} -> 3: node 3 is visited twice but never while on the path
        let graph =
            MatrixGraph::from_weighted_edges(4, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)])
                .unwrap();
        assert!(!graph.contains_cycle());
    }

    #[test]
    fn cycle_in_later_component() {
        let mut edges = path_edges([0, 1, 2], 1);
        edges.extend(cycle_edges([3, 4, 5, 6], -2));
        let graph = MatrixGraph::from_weighted_edges(7, edges).unwrap();

        let cycle = graph.find_cycle().unwrap();
        assert_is_cycle(&graph, &cycle);
        assert_eq!(cycle.len(), 4);
    }

    #[test]
    fn long_path_does_not_recurse() {
        let n = 2_000;
        let graph = MatrixGraph::from_weighted_edges(n, path_edges(0..n, 1)).unwrap();
        assert!(!graph.contains_cycle());
    }

    #[test]
    fn agrees_with_topological_sort() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [1, 2, 5, 10, 20] {
            for p in [0.05, 0.1, 0.3] {
                for _ in 0..20 {
                    let graph = random_graph(rng, n, p, -3..=5);
                    assert_eq!(graph.contains_cycle(), !graph.is_acyclic());
                    if let Some(cycle) = graph.find_cycle() {
                        assert_is_cycle(&graph, &cycle);
                    }
                    assert_eq!(graph.find_cycle(), graph.find_cycle());
                }
            }
        }
    }
}
