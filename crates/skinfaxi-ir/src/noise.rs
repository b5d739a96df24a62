//! Noise channel types for the Skinfaxi IR.
//!
//! Noise is a first-class concept in the IR: the transpiler injects
//! [`NoiseModel`] channels as ordinary instructions, and shot-based
//! backends unravel them stochastically per trajectory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A noise channel model.
///
/// Represents the physical noise process applied to a single qubit.
/// Kept deliberately lean — only channels a shot-based statevector
/// simulator can unravel as stochastic Pauli trajectories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NoiseModel {
    /// Depolarizing channel: with probability `p`, applies a uniformly
    /// random Pauli (X, Y, or Z) to the qubit.
    Depolarizing {
        /// Error probability (0.0 to 1.0).
        p: f64,
    },

    /// Bit-flip channel: applies X with probability `p`.
    BitFlip {
        /// Flip probability (0.0 to 1.0).
        p: f64,
    },

    /// Phase-flip channel: applies Z with probability `p`.
    PhaseFlip {
        /// Flip probability (0.0 to 1.0).
        p: f64,
    },

    /// Readout error: the sampled classical bit is flipped with
    /// probability `p`.
    ReadoutError {
        /// Misclassification probability (0.0 to 1.0).
        p: f64,
    },
}

impl NoiseModel {
    /// Get a human-readable name for this noise model.
    pub fn name(&self) -> &str {
        match self {
            NoiseModel::Depolarizing { .. } => "depolarizing",
            NoiseModel::BitFlip { .. } => "bit_flip",
            NoiseModel::PhaseFlip { .. } => "phase_flip",
            NoiseModel::ReadoutError { .. } => "readout_error",
        }
    }

    /// Get the primary error parameter of this noise model.
    pub fn error_param(&self) -> f64 {
        match self {
            NoiseModel::Depolarizing { p }
            | NoiseModel::BitFlip { p }
            | NoiseModel::PhaseFlip { p }
            | NoiseModel::ReadoutError { p } => *p,
        }
    }
}

impl std::fmt::Display for NoiseModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoiseModel::Depolarizing { p } => write!(f, "depolarizing(p={p:.4})"),
            NoiseModel::BitFlip { p } => write!(f, "bit_flip(p={p:.4})"),
            NoiseModel::PhaseFlip { p } => write!(f, "phase_flip(p={p:.4})"),
            NoiseModel::ReadoutError { p } => write!(f, "readout_error(p={p:.4})"),
        }
    }
}

/// Per-gate noise profile attached to a backend or injected at compile time.
///
/// Lives in skinfaxi-ir (not skinfaxi-hal) so that both the HAL and the
/// transpiler can use it without circular dependencies.
///
/// Error rates are keyed by gate name and attach to every instruction with
/// that name, one single-qubit channel per operand, regardless of the
/// gate's arity. A `"cx"` entry therefore yields two single-qubit channels
/// per CX, each at the listed probability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoiseProfile {
    /// Per-gate depolarizing error rates, keyed by gate name
    /// (e.g., "cx" → 0.05).
    #[serde(default)]
    pub gate_errors: BTreeMap<String, f64>,

    /// Readout error probability per qubit.
    #[serde(default)]
    pub readout_errors: Option<Vec<f64>>,
}

impl NoiseProfile {
    /// Create a new empty noise profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile from (gate name, error rate) pairs.
    pub fn from_gate_errors<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            gate_errors: errors.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            readout_errors: None,
        }
    }

    /// Set per-qubit readout error probabilities.
    #[must_use]
    pub fn with_readout_errors(mut self, errors: Vec<f64>) -> Self {
        self.readout_errors = Some(errors);
        self
    }

    /// Get the error rate for a specific gate, if known.
    pub fn gate_error(&self, gate_name: &str) -> Option<f64> {
        self.gate_errors.get(gate_name).copied()
    }

    /// Get the readout error for a specific qubit, if known.
    pub fn qubit_readout_error(&self, qubit_index: usize) -> Option<f64> {
        self.readout_errors
            .as_ref()
            .and_then(|v| v.get(qubit_index))
            .copied()
    }

    /// Check if this profile has any noise data at all.
    pub fn is_empty(&self) -> bool {
        self.gate_errors.is_empty() && self.readout_errors.is_none()
    }
}
