//! The Grover iteration operator: oracle followed by diffusion.

use skinfaxi_ir::{Circuit, IrResult, QubitId};

use crate::error::GroverResult;
use crate::oracle::grover_oracle;

/// One Grover iteration: the phase oracle followed by the diffusion
/// reflection about the uniform superposition.
#[derive(Debug, Clone)]
pub struct GroverOperator {
    oracle: Circuit,
    num_qubits: usize,
}

impl GroverOperator {
    /// Build the operator for a set of marked bit strings.
    pub fn new(marked_states: &[impl AsRef<str>]) -> GroverResult<Self> {
        let oracle = grover_oracle(marked_states)?;
        let num_qubits = oracle.num_qubits();
        Ok(Self { oracle, num_qubits })
    }

    /// Number of qubits the operator acts on.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The oracle part of the operator.
    pub fn oracle(&self) -> &Circuit {
        &self.oracle
    }

    /// One iteration as a standalone circuit.
    pub fn circuit(&self) -> GroverResult<Circuit> {
        self.power(1)
    }

    /// `k` iterations as a standalone circuit.
    pub fn power(&self, k: u32) -> GroverResult<Circuit> {
        let mut circuit = Circuit::with_size("grover_op", self.num_qubits as u32, 0);
        for _ in 0..k {
            circuit.compose(&self.oracle)?;
            apply_diffusion(&mut circuit)?;
        }
        Ok(circuit)
    }
}

/// Apply the diffusion operator (2|s⟩⟨s| − I) over all qubits:
/// H on all, X on all, multi-controlled Z, X on all, H on all.
fn apply_diffusion(circuit: &mut Circuit) -> IrResult<()> {
    let qubits: Vec<QubitId> = (0..circuit.num_qubits()).map(QubitId::from).collect();

    for &q in &qubits {
        circuit.h(q)?;
    }
    for &q in &qubits {
        circuit.x(q)?;
    }
    circuit.mcz(qubits.iter().copied())?;
    for &q in &qubits {
        circuit.x(q)?;
    }
    for &q in &qubits {
        circuit.h(q)?;
    }
    Ok(())
}
