//! Error types for centrality computations.
//!
//! Every variant is an argument error: it is detected before any iteration
//! starts. Degenerate inputs (empty graphs, zero-norm iterates) and
//! non-convergence are reported through the result types instead.

/// Errors returned by the centrality engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CentralityError {
    /// Damping factor outside the open interval `(0, 1)`.
    #[error("damping factor must be strictly between 0 and 1, got {0}")]
    InvalidDamping(f64),

    /// Iteration cap of zero.
    #[error("maximum iterations must be a positive integer")]
    ZeroIterations,

    /// Convergence tolerance that is zero, negative, or not finite.
    #[error("convergence tolerance must be a positive finite number, got {0}")]
    InvalidTolerance(f64),

    /// Eigenvector iteration shift that is negative or not finite.
    #[error("eigenvector shift must be a non-negative finite number, got {0}")]
    InvalidShift(f64),

    /// An adjacency list references a node that is not a key of the mapping.
    #[error("node {node} lists neighbor {neighbor}, which is not a node of the graph")]
    UnknownNeighbor {
        /// Debug rendering of the node whose list is malformed.
        node: String,
        /// Debug rendering of the missing neighbor.
        neighbor: String,
    },

    /// Two nodes share one identifier.
    #[error("node {0} appears more than once")]
    DuplicateNode(String),

    /// An edge weight is negative, NaN, or infinite.
    #[error("edge weight for {from} -> {to} must be finite and non-negative, got {weight}")]
    InvalidWeight {
        /// Debug rendering of the edge tail.
        from: String,
        /// Debug rendering of the edge head.
        to: String,
        /// The offending weight.
        weight: f64,
    },

    /// Eigenvector centrality needs a square adjacency matrix.
    #[error("adjacency matrix must be square, got {rows}x{cols}")]
    NonSquareMatrix {
        /// Row count of the supplied matrix.
        rows: usize,
        /// Column count of the supplied matrix.
        cols: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CentralityError>;

#[cfg(test)]
mod tests {
    use super::CentralityError;

    #[test]
    fn messages_name_the_offending_value() {
        let err = CentralityError::InvalidDamping(1.5);
        assert!(err.to_string().contains("1.5"));

        let err = CentralityError::UnknownNeighbor {
            node: "\"a\"".to_string(),
            neighbor: "\"z\"".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"a\"") && msg.contains("\"z\""), "{msg}");

        let err = CentralityError::NonSquareMatrix { rows: 2, cols: 3 };
        assert_eq!(err.to_string(), "adjacency matrix must be square, got 2x3");
    }
}
