//! Helpers shared by the unit tests of several modules

use std::ops::RangeInclusive;

use rand::Rng;

use crate::{gens::*, prelude::*};

/// Creates a random weighted `G(n,p)` graph with weights from `weights` (zero excluded)
pub(crate) fn random_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    p: f64,
    weights: RangeInclusive<Weight>,
) -> MatrixGraph {
    WeightedGnp::new()
        .nodes(n)
        .prob(p)
        .weights(weights)
        .generate(rng)
}

/// All-pairs shortest distances as a reference for single-source algorithms.
/// `dist[u][v]` is `None` if `v` is not reachable from `u`. The diagonal starts at `0`
/// (or a smaller self-loop weight), so `dist[u][u] < 0` iff `u` lies on a negative cycle.
/// Values are meaningless for pairs affected by negative cycles.
pub(crate) fn floyd_warshall(graph: &MatrixGraph) -> Vec<Vec<Option<Distance>>> {
    let n = graph.len();
    let mut dist = vec![vec![None; n]; n];

    for WeightedEdge {
        edge: Edge(u, v),
        weight,
    } in graph.weighted_edges()
    {
        dist[u as usize][v as usize] = Some(Distance::from(weight));
    }
    for (u, row) in dist.iter_mut().enumerate() {
        row[u] = Some(row[u].map_or(0, |w: Distance| w.min(0)));
    }

    for k in 0..n {
        for i in 0..n {
            let Some(dik) = dist[i][k] else {
                continue;
            };
            for j in 0..n {
                if let Some(dkj) = dist[k][j] {
                    let candidate = dik + dkj;
                    if dist[i][j].is_none_or(|dij| candidate < dij) {
                        dist[i][j] = Some(candidate);
                    }
                }
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floyd_warshall_small() {
        let graph =
            MatrixGraph::from_weighted_edges(4, [(0, 1, 3), (1, 2, -1), (0, 2, 5), (3, 3, -2)])
                .unwrap();
        let dist = floyd_warshall(&graph);

        assert_eq!(dist[0], vec![Some(0), Some(3), Some(2), None]);
        assert_eq!(dist[2][0], None);
        assert!(dist[3][3].is_some_and(|d| d < 0));
    }
}
