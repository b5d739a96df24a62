//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// Standard gates with known semantics.
///
/// Rotation angles are concrete `f64` radians. `Mcz` is the one
/// variable-arity gate: a multi-controlled Z that phase-flips the
/// all-ones basis state of its operand qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    // Single-qubit Pauli gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    // Single-qubit Clifford gates
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,

    // Single-qubit rotation gates
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// Phase gate.
    P(f64),

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// Controlled phase gate.
    CP(f64),
    /// SWAP gate.
    Swap,

    // Three-qubit gates
    /// Toffoli gate (CCX).
    CCX,

    // Variable-arity gates
    /// Multi-controlled Z over `num_qubits` qubits. The symmetric
    /// phase-flip at the heart of oracle and diffusion constructions;
    /// `Mcz { num_qubits: 1 }` is Z, `Mcz { num_qubits: 2 }` is CZ.
    Mcz {
        /// Total operand count, controls plus target (>= 1).
        num_qubits: u32,
    },
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::P(_) => "p",
            StandardGate::CX => "cx",
            StandardGate::CY => "cy",
            StandardGate::CZ => "cz",
            StandardGate::CP(_) => "cp",
            StandardGate::Swap => "swap",
            StandardGate::CCX => "ccx",
            StandardGate::Mcz { .. } => "mcz",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg
            | StandardGate::Rx(_)
            | StandardGate::Ry(_)
            | StandardGate::Rz(_)
            | StandardGate::P(_) => 1,

            StandardGate::CX
            | StandardGate::CY
            | StandardGate::CZ
            | StandardGate::CP(_)
            | StandardGate::Swap => 2,

            StandardGate::CCX => 3,

            StandardGate::Mcz { num_qubits } => *num_qubits,
        }
    }
}

impl std::fmt::Display for StandardGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StandardGate::Rx(theta) => write!(f, "rx({theta:.4})"),
            StandardGate::Ry(theta) => write!(f, "ry({theta:.4})"),
            StandardGate::Rz(theta) => write!(f, "rz({theta:.4})"),
            StandardGate::P(theta) => write!(f, "p({theta:.4})"),
            StandardGate::CP(theta) => write!(f, "cp({theta:.4})"),
            StandardGate::Mcz { num_qubits } => write!(f, "mcz[{num_qubits}]"),
            other => write!(f, "{}", other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_standard_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(StandardGate::CCX.num_qubits(), 3);
        assert_eq!(StandardGate::Mcz { num_qubits: 5 }.num_qubits(), 5);

        assert_eq!(StandardGate::H.name(), "h");
        assert_eq!(StandardGate::Mcz { num_qubits: 3 }.name(), "mcz");
        assert_eq!(StandardGate::Rx(PI).name(), "rx");
    }

    #[test]
    fn test_gate_display() {
        assert_eq!(format!("{}", StandardGate::CX), "cx");
        assert_eq!(format!("{}", StandardGate::Mcz { num_qubits: 3 }), "mcz[3]");
        assert_eq!(format!("{}", StandardGate::P(0.5)), "p(0.5000)");
    }
}
