/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the operations in [`crate::ops`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use mgraphs::algo::*;
```
and gain access to traversal, reachability, cycle detection, bipartiteness, shortest paths and negative cycle detection.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod bellman_ford;
mod bipartite;
mod connectivity;
mod cycles;
mod negative_cycle;
mod traversal;

use crate::prelude::*;

pub use bellman_ford::*;
pub use bipartite::*;
pub use connectivity::*;
pub use cycles::*;
pub use negative_cycle::*;
pub use traversal::*;
