//! Grover search circuit construction.
//!
//! Grover's algorithm finds marked items in an unstructured search space
//! of size N with O(√N) oracle queries, compared to O(N) classically.
//! This crate builds the pieces as [`skinfaxi_ir::Circuit`]s:
//!
//! - [`grover_oracle`]: phase oracle flipping the sign of the marked
//!   basis states (open-controlled multi-controlled Z)
//! - [`GroverOperator`]: one iteration, oracle plus diffusion reflection
//! - [`optimal_iterations`]: floor(π / (4·arcsin(√(k/2^N))))
//! - [`grover_circuit`]: superposition, iterations, measurement
//! - [`search_noise_profile`]: the fixed depolarizing demonstration
//!   profile (reset 0.03, x 0.03, cx 0.05)
//!
//! # Example
//!
//! ```rust
//! use skinfaxi_grover::{grover_circuit, optimal_iterations};
//!
//! // Two marked states in a 3-qubit space: one iteration is optimal.
//! assert_eq!(optimal_iterations(3, 2).unwrap(), 1);
//!
//! let circuit = grover_circuit(&["011", "100"], None).unwrap();
//! assert_eq!(circuit.num_qubits(), 3);
//! ```

pub mod error;
pub mod operator;
pub mod oracle;
pub mod search;

pub use error::{GroverError, GroverResult};
pub use operator::GroverOperator;
pub use oracle::grover_oracle;
pub use search::{grover_circuit, optimal_iterations, search_noise_profile};
