use crate::Node;

/// Structural defect that makes a table of weights unusable as an adjacency matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixDefect {
    /// The matrix has no rows
    Empty,
    /// A row does not have as many entries as there are rows
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
}

impl std::fmt::Display for MatrixDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixDefect::Empty => write!(f, "matrix has no rows"),
            MatrixDefect::NotSquare { row, len, expected } => {
                write!(f, "row {row} has {len} entries but {expected} are required")
            }
        }
    }
}

/// Graph error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The input is not a non-empty square matrix.
    #[error("Invalid adjacency matrix: {0}")]
    InvalidMatrix(MatrixDefect),

    /// A node index outside of `0..n` was used.
    #[error("Index ({u}, {v}) out of bounds for a graph with {n} nodes")]
    IndexOutOfBounds { u: Node, v: Node, n: usize },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
