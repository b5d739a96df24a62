//! Skinfaxi Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Skinfaxi. It is the foundation the search algorithm, the
//! transpiler, and the backends all build on.
//!
//! # Overview
//!
//! Circuits are a validated linear sequence of [`Instruction`]s over
//! registered qubits and classical bits. The high-level [`Circuit`] API
//! provides a fluent builder for constructing them.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical registers
//! - **Gates**: [`StandardGate`] for built-in gates (H, X, CX, the
//!   variable-arity MCZ, etc.)
//! - **Noise**: [`NoiseModel`] channels and per-gate [`NoiseProfile`]s
//! - **Instructions**: [`Instruction`] combining operations with their operands
//! - **Circuit**: [`Circuit`] high-level builder API
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use skinfaxi_ir::{Circuit, QubitId};
//!
//! // Create a new circuit with 2 qubits and 2 classical bits
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//!
//! // Build the Bell state: |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! // Add measurement
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
//! ```
//!
//! # Bit order
//!
//! Measured outcomes render the most-significant qubit first: qubit N−1 is
//! the leftmost character of a result bitstring. A marked-state string fed
//! to the search oracle and the bitstring it produces in the counts read
//! identically.

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod noise;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use noise::{NoiseModel, NoiseProfile};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
