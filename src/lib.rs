/*!
`mgraphs` is a small library for **dense, directed, weighted** graphs stored as an adjacency matrix.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; together with its weight it
becomes a [`WeightedEdge`].

The only storage backend is [`MatrixGraph`](crate::repr::MatrixGraph): a `n x n` table of signed
weights where entry `(u, v)` is the weight of the edge `u -> v` and `0` means *no edge*. Self-loops
and negative weights are regular edges. Matrices are validated on construction (non-empty and
square) and invalid input is reported as a [`GraphError`](crate::error::GraphError).

# Design

All algorithms are implemented as traits on the graph itself (e.g. `graph.is_bipartite()`),
making them usable without configuring anything beforehand. Algorithms with knobs such as
[`BellmanFord`](crate::algo::BellmanFord) are additionally provided as configurable structs
using the *Builder* / *Setter* pattern.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and the matrix representation,
- [`algo`] includes algorithm traits such as BFS/DFS, reachability, cycle detection, bipartiteness, shortest paths and negative cycle detection,
- [`gens`] includes a random weighted `G(n,p)` generator and deterministic substructures such as paths and cycles.

In most use-cases, `use mgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use mgraphs::{prelude::*, algo::*};

let g = MatrixGraph::from_matrix(vec![
    vec![0, 1, 5],
    vec![0, 0, 1],
    vec![0, 0, 0],
])
.unwrap();

assert!(g.is_connected());
assert!(!g.contains_cycle());
assert!(!g.is_bipartite());
assert_eq!(g.shortest_path(0, 2), vec![0, 1, 2]);
assert!(!g.has_negative_cycle());
```

# Logging

Noteworthy events (rejected matrices, negative cycles, unbounded shortest paths) are emitted as
[`tracing`] events on the `debug` and `trace` levels. The crate never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
mod testing;

pub use edge::*;
pub use node::*;

/// `mgraphs::prelude` includes definitions for nodes and edges, errors, all basic graph operation traits as well as the matrix representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
