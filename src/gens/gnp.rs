use std::ops::RangeInclusive;

use super::*;

/// Weighted `G(n,p)` graphs contain every ordered pair `(u, v)` (self-loops included) as an edge
/// with probability `p` independent from each other. Each edge receives a weight drawn uniformly
/// from the non-zero values of a weight range.
///
/// # Examples
/// ```
/// use mgraphs::{prelude::*, gens::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(1);
/// let g = WeightedGnp::new().nodes(10).prob(0.3).weights(-2..=5).generate(rng);
///
/// assert_eq!(g.number_of_nodes(), 10);
/// assert!(g.weighted_edges().all(|e| e.weight != 0 && (-2..=5).contains(&e.weight)));
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGnp {
    n: NumNodes,
    p: Option<f64>,
    weights: RangeInclusive<Weight>,
}

impl Default for WeightedGnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: None,
            weights: 1..=1,
        }
    }
}

impl WeightedGnp {
    /// Creates a new generator with unit weights and no probability set
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "{prob} is not a probability");
        self.p = Some(prob);
        self
    }

    /// Updates the range weights are drawn from. Zero is skipped as it encodes a missing edge.
    /// ** Panics if the range contains no non-zero value **
    pub fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        assert!(
            weights.clone().any(|w| w != 0),
            "weight range {weights:?} has no non-zero value"
        );
        self.weights = weights;
        self
    }

    /// Creates a streaming generator over random weighted edges in row-major order
    pub fn stream<'a, R: Rng>(&'a self, rng: &'a mut R) -> impl Iterator<Item = WeightedEdge> + 'a {
        assert!(self.n > 0, "At least one node must be generated!");
        let Some(p) = self.p else {
            panic!("Probability of WeightedGnp was not set!");
        };

        let n = self.n;
        (0..n)
            .flat_map(move |u| (0..n).map(move |v| (u, v)))
            .filter_map(move |(u, v)| {
                if !rng.random_bool(p) {
                    return None;
                }

                let weight = loop {
                    let w = rng.random_range(self.weights.clone());
                    if w != 0 {
                        break w;
                    }
                };
                Some(WeightedEdge::new(u, v, weight))
            })
    }

    /// Generates a random [`MatrixGraph`]
    pub fn generate<R: Rng>(&self, rng: &mut R) -> MatrixGraph {
        let mut graph = MatrixGraph::new(self.n);
        for e in self.stream(rng) {
            graph.set_weight(e.source(), e.target(), e.weight);
        }
        graph
    }
}

impl NumNodesGen for WeightedGnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}
