//! Error types for Grover circuit construction.

use skinfaxi_ir::IrError;
use thiserror::Error;

/// Errors that can occur while building Grover search circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GroverError {
    /// No marked states were provided.
    #[error("At least one marked state is required")]
    EmptyMarkedStates,

    /// Marked states disagree on length.
    #[error("Marked state '{state}' has {got} bits, expected {expected}")]
    LengthMismatch {
        /// The offending state.
        state: String,
        /// Bit length of the first marked state.
        expected: usize,
        /// Bit length of the offending state.
        got: usize,
    },

    /// A marked state contains characters other than '0' and '1'.
    #[error("Marked state '{state}' is not a bit string")]
    InvalidBitString {
        /// The offending state.
        state: String,
    },

    /// The iteration formula is undefined for these inputs.
    #[error(
        "Iteration count undefined for {num_marked} marked states in a search space of {search_space}"
    )]
    IterationDomain {
        /// Number of marked states.
        num_marked: u64,
        /// Search space size (2^num_qubits).
        search_space: u64,
    },

    /// Underlying circuit construction failed.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for Grover operations.
pub type GroverResult<T> = Result<T, GroverError>;
