use super::*;

/// Detection of cycles whose total weight is negative, anywhere in the graph.
pub trait NegativeCycleDetection: WeightedAdjacency + Sized {
    /// Returns *true* if the graph contains a directed cycle of negative total weight.
    /// A negative self-loop counts as such a cycle.
    ///
    /// Unlike [`ShortestPathTree::has_negative_cycle`] this is independent of any start node:
    /// a [`BellmanFord`] run is performed from every node until a cycle is found.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::try_from([[0, 1, 0], [0, 0, -1], [-1, 0, 0]]).unwrap();
    /// assert!(g.has_negative_cycle());
    ///
    /// let g = MatrixGraph::try_from([[0, 1, 0], [0, 0, 1], [1, 0, 0]]).unwrap();
    /// assert!(!g.has_negative_cycle());
    /// ```
    fn has_negative_cycle(&self) -> bool {
        self.vertices_range()
            .any(|s| BellmanFord::new(self, s).run().has_negative_cycle())
    }

    /// Returns the nodes `[v0, ..., vk]` of some negative cycle in edge order, ie. the edges
    /// `(v0, v1), ..., (vk, v0)` exist and their weights sum up to a negative value.
    /// Returns `None` if no such cycle exists.
    fn find_negative_cycle(&self) -> Option<Vec<Node>> {
        self.vertices_range()
            .find_map(|s| BellmanFord::new(self, s).run().negative_cycle())
    }
}

impl<G> NegativeCycleDetection for G where G: WeightedAdjacency + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn cycle_weight(graph: &MatrixGraph, cycle: &[Node]) -> Distance {
        cycle
            .iter()
            .circular_tuple_windows()
            .map(|(&u, &v)| {
                assert!(graph.has_edge(u, v));
                Distance::from(graph.weight(u, v))
            })
            .sum()
    }

    #[test]
    fn negative_triangle() {
        let graph = MatrixGraph::from_weighted_edges(3, cycle_edges([0, 1, 2], -1)).unwrap();
        assert!(graph.has_negative_cycle());

        let cycle = graph.find_negative_cycle().unwrap();
        assert_eq!(cycle.len(), 3);
        assert_eq!(cycle_weight(&graph, &cycle), -3);
    }

    #[test]
    fn positive_and_zero_sum_cycles() {
        let graph = MatrixGraph::from_weighted_edges(3, cycle_edges([0, 1, 2], 4)).unwrap();
        assert!(!graph.has_negative_cycle());
        assert_eq!(graph.find_negative_cycle(), None);

        // -2 + 1 + 1 == 0 is not negative
        let graph =
            MatrixGraph::from_weighted_edges(3, [(0, 1, -2), (1, 2, 1), (2, 0, 1)]).unwrap();
        assert!(!graph.has_negative_cycle());
    }

    #[test]
    fn cycle_unreachable_from_first_node() {
        // 0 is isolated, the cycle lives on {2, 3}
        let graph = MatrixGraph::from_weighted_edges(4, [(1, 2, 5), (2, 3, -3), (3, 2, 1)])
            .unwrap();
        assert!(!graph.shortest_path_tree(0).has_negative_cycle());
        assert!(graph.has_negative_cycle());
        assert_eq!(
            graph.find_negative_cycle().map(|c| c.into_iter().sorted().collect_vec()),
            Some(vec![2, 3])
        );
    }

    #[test]
    fn negative_self_loop() {
        let graph = MatrixGraph::try_from([[0, 3], [0, -1]]).unwrap();
        assert!(graph.has_negative_cycle());
        assert_eq!(graph.find_negative_cycle(), Some(vec![1]));

        assert!(!MatrixGraph::try_from([[2]]).unwrap().has_negative_cycle());
        assert!(MatrixGraph::try_from([[-2]]).unwrap().has_negative_cycle());
    }

    #[test]
    fn negative_edges_without_cycle() {
        let graph = MatrixGraph::from_weighted_edges(5, path_edges(0..5, -7)).unwrap();
        assert!(!graph.has_negative_cycle());
    }

    #[test]
    fn agrees_with_floyd_warshall() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for n in [1, 3, 6, 9] {
            for _ in 0..40 {
                let graph = random_graph(rng, n, 0.3, -3..=6);
                let reference = floyd_warshall(&graph);
                let expected = graph
                    .vertices_range()
                    .any(|u| reference[u as usize][u as usize].is_some_and(|d| d < 0));

                assert_eq!(graph.has_negative_cycle(), expected);
                match graph.find_negative_cycle() {
                    Some(cycle) => assert!(cycle_weight(&graph, &cycle) < 0, "{cycle:?}"),
                    None => assert!(!expected),
                }
            }
        }
    }
}
