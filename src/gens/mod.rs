/*!
# Graph Generators

Builders for graphs that tests and callers need over and over again.

Generators follow a builder-style pattern. The typical usage workflow is:

1. Create a generator instance (e.g., `WeightedGnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p).weights(-3..=5)`).
3. Generate a graph via `generate()` or the edges via `stream()`.

Supported models include:
- Weighted G(n,p): every ordered pair is an edge with independent probability `p`
- Paths and cycles with uniform weights (see [`path_edges`] and [`cycle_edges`])
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}
