/*!
# Dense Weighted Adjacency Matrix

[`MatrixGraph`] stores a `V x V` table of [`Weight`]s where entry `(u, v)` is the weight of the
directed edge `u -> v` and `0` means that there is no such edge. Self-loops and negative weights
are regular entries.

A `MatrixGraph` can only be obtained from a validated matrix, ie. a non-empty table whose rows all
have as many entries as there are rows. Loading a new matrix either replaces the whole graph or
leaves it untouched.
*/

use tracing::debug;

use super::*;

/// Directed, weighted graph backed by a dense adjacency matrix.
///
/// # Examples
/// ```
/// use mgraphs::prelude::*;
///
/// let g = MatrixGraph::from_matrix(vec![vec![0, 4], vec![0, 0]]).unwrap();
/// assert_eq!(g.number_of_nodes(), 2);
/// assert_eq!(g.number_of_edges(), 1);
/// assert_eq!(g.weight(0, 1), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatrixGraph {
    matrix: Vec<Vec<Weight>>,
    num_edges: NumEdges,
}

/// Checks that `matrix` is a non-empty square table
fn validate(matrix: &[Vec<Weight>]) -> Result<()> {
    let expected = matrix.len();
    let defect = if expected == 0 {
        Some(MatrixDefect::Empty)
    } else {
        matrix
            .iter()
            .position(|row| row.len() != expected)
            .map(|row| MatrixDefect::NotSquare {
                row,
                len: matrix[row].len(),
                expected,
            })
    };

    match defect {
        None => Ok(()),
        Some(defect) => {
            debug!(%defect, "rejected adjacency matrix");
            Err(GraphError::InvalidMatrix(defect))
        }
    }
}

/// Counts all non-zero entries of the matrix
fn count_edges(matrix: &[Vec<Weight>]) -> NumEdges {
    matrix
        .iter()
        .map(|row| row.iter().filter(|&&w| w != 0).count() as NumEdges)
        .sum()
}

impl MatrixGraph {
    /// Creates an edgeless graph with `n` nodes.
    /// ** Panics if `n == 0` **
    pub fn new(n: NumNodes) -> Self {
        assert!(n > 0, "a graph needs at least one node");
        Self {
            matrix: vec![vec![0; n as usize]; n as usize],
            num_edges: 0,
        }
    }

    /// Creates a graph from an adjacency matrix.
    /// Fails with [`GraphError::InvalidMatrix`] if the matrix is empty or not square.
    pub fn from_matrix(matrix: Vec<Vec<Weight>>) -> Result<Self> {
        validate(&matrix)?;
        let num_edges = count_edges(&matrix);
        Ok(Self { matrix, num_edges })
    }

    /// Replaces the adjacency matrix of this graph.
    ///
    /// On failure ([`GraphError::InvalidMatrix`]) the graph keeps its previous matrix and edge count.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::prelude::*;
    ///
    /// let mut g = MatrixGraph::from_matrix(vec![vec![1]]).unwrap();
    /// assert!(g.load(vec![vec![0, 1, 2], vec![3, 4, 5]]).is_err());
    /// assert_eq!(g.as_rows(), &[vec![1]]);
    ///
    /// g.load(vec![vec![0, 1], vec![1, 0]]).unwrap();
    /// assert_eq!(g.number_of_edges(), 2);
    /// ```
    pub fn load(&mut self, matrix: Vec<Vec<Weight>>) -> Result<()> {
        *self = Self::from_matrix(matrix)?;
        Ok(())
    }

    /// Creates a graph with `n` nodes from a list of weighted edges.
    ///
    /// As a matrix holds a single weight per ordered pair, a later edge `(u, v)` overwrites an earlier one.
    /// Fails with [`GraphError::InvalidMatrix`] if `n == 0` and with [`GraphError::IndexOutOfBounds`]
    /// if an endpoint is not in `0..n`.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::prelude::*;
    ///
    /// let g = MatrixGraph::from_weighted_edges(3, [(0, 1, 2), (1, 2, -1)]).unwrap();
    /// assert_eq!(g.weight(1, 2), -1);
    /// assert_eq!(g.number_of_edges(), 2);
    /// ```
    pub fn from_weighted_edges<I>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge>,
    {
        let mut matrix = vec![vec![0; n as usize]; n as usize];
        for WeightedEdge {
            edge: Edge(u, v),
            weight,
        } in edges.into_iter().map(Into::into)
        {
            if u >= n || v >= n {
                return Err(GraphError::IndexOutOfBounds {
                    u,
                    v,
                    n: n as usize,
                });
            }
            matrix[u as usize][v as usize] = weight;
        }

        Self::from_matrix(matrix)
    }

    /// Returns a read-only view on the rows of the matrix
    pub fn as_rows(&self) -> &[Vec<Weight>] {
        &self.matrix
    }

    /// Returns row `u`, ie. the weights of all edges leaving `u`
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Weight] {
        &self.matrix[u as usize]
    }

    /// Sets the weight of `(u, v)` and returns the previous weight.
    /// Setting `0` removes the edge.
    /// ** Panics if `u >= n || v >= n` **
    pub fn set_weight(&mut self, u: Node, v: Node, weight: Weight) -> Weight {
        let entry = &mut self.matrix[u as usize][v as usize];
        let prev = std::mem::replace(entry, weight);
        match (prev != 0, weight != 0) {
            (false, true) => self.num_edges += 1,
            (true, false) => self.num_edges -= 1,
            _ => {}
        }
        prev
    }

    /// Consumes the graph and returns its adjacency matrix
    pub fn into_matrix(self) -> Vec<Vec<Weight>> {
        self.matrix
    }
}

impl TryFrom<Vec<Vec<Weight>>> for MatrixGraph {
    type Error = GraphError;

    fn try_from(matrix: Vec<Vec<Weight>>) -> Result<Self> {
        Self::from_matrix(matrix)
    }
}

impl<const N: usize> TryFrom<[[Weight; N]; N]> for MatrixGraph {
    type Error = GraphError;

    fn try_from(matrix: [[Weight; N]; N]) -> Result<Self> {
        Self::from_matrix(matrix.into_iter().map(Vec::from).collect())
    }
}

impl GraphNodeOrder for MatrixGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.matrix.len() as NumNodes
    }
}

impl GraphEdgeOrder for MatrixGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for MatrixGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.matrix[u as usize]
            .iter()
            .enumerate()
            .filter_map(|(v, &w)| (w != 0).then_some(v as Node))
    }
}

impl DirectedAdjacencyList for MatrixGraph {
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        assert!(u < self.number_of_nodes());
        self.matrix
            .iter()
            .enumerate()
            .filter_map(move |(v, row)| (row[u as usize] != 0).then_some(v as Node))
    }
}

impl AdjacencyTest for MatrixGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.matrix[u as usize][v as usize] != 0
    }
}

impl WeightedAdjacency for MatrixGraph {
    fn weight(&self, u: Node, v: Node) -> Weight {
        self.matrix[u as usize][v as usize]
    }

    // Avoid a second lookup per entry
    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.matrix[u as usize]
            .iter()
            .enumerate()
            .filter_map(move |(v, &w)| (w != 0).then(|| WeightedEdge::new(u, v as Node, w)))
    }
}
