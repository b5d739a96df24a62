//! Local statevector simulator backend.
//!
//! Implements the [`Backend`](skinfaxi_hal::Backend) trait with an
//! in-process statevector simulation. Noise channel instructions are
//! unravelled stochastically: each shot draws its own Pauli trajectory,
//! so a noisy circuit produces the mixed-state statistics of the channel
//! without density matrices.

pub mod simulator;
pub mod statevector;

pub use simulator::SimulatorBackend;
pub use statevector::Statevector;
