/*!
# Substructure Generators

Deterministic **paths** and **cycles** with a fixed weight on every edge, either as edge lists for
[`MatrixGraph::from_weighted_edges`] or inserted into an existing [`MatrixGraph`].

# Example

```rust
use mgraphs::{prelude::*, gens::*};

let mut g = MatrixGraph::new(5);
g.connect_path([0, 1, 2], 3);
g.connect_cycle([2, 3, 4], -1);

assert_eq!(
    g.weighted_edges().map(|e| e.to_string()).collect::<Vec<_>>(),
    vec!["(0,1)[3]", "(1,2)[3]", "(2,3)[-1]", "(3,4)[-1]", "(4,2)[-1]"]
);
```
*/

use itertools::Itertools;

use super::*;

/// Returns the edges `(v0, v1), (v1, v2), ...` of a path through the given nodes, all with weight `weight`.
/// Fewer than two nodes yield no edges.
pub fn path_edges<P>(nodes_on_path: P, weight: Weight) -> Vec<WeightedEdge>
where
    P: IntoIterator<Item = Node>,
{
    nodes_on_path
        .into_iter()
        .tuple_windows()
        .map(|(u, v)| WeightedEdge::new(u, v, weight))
        .collect()
}

/// Returns the edges of a path through the given nodes that is closed by an edge from the last node
/// back to the first. A single node yields a self-loop.
pub fn cycle_edges<C>(nodes_in_cycle: C, weight: Weight) -> Vec<WeightedEdge>
where
    C: IntoIterator<Item = Node>,
{
    let mut iter = nodes_in_cycle.into_iter();
    let mut edges = Vec::new();

    // we use a rather tedious implementation to avoid needing to clone the iterator
    if let Some(first) = iter.next() {
        let mut prev = first;
        for cur in iter {
            edges.push(WeightedEdge::new(prev, cur, weight));
            prev = cur;
        }

        edges.push(WeightedEdge::new(prev, first, weight));
    }

    edges
}

/// Inserts paths and cycles into an existing graph. Existing weights on the affected pairs are overwritten.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a path of weight-`weight` edges.
    /// ** Panics if a node is out of range **
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a cycle of weight-`weight` edges.
    /// ** Panics if a node is out of range **
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight)
    where
        C: IntoIterator<Item = Node>;
}

impl GeneratorSubstructures for MatrixGraph {
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight)
    where
        P: IntoIterator<Item = Node>,
    {
        for e in path_edges(nodes_on_path, weight) {
            self.set_weight(e.source(), e.target(), e.weight);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight)
    where
        C: IntoIterator<Item = Node>,
    {
        for e in cycle_edges(nodes_in_cycle, weight) {
            self.set_weight(e.source(), e.target(), e.weight);
        }
    }
}
