//! Decompose multi-controlled Z gates into the standard basis.
//!
//! A multi-controlled Z over `n` qubits flips the phase of the all-ones
//! basis state. For small arities it has exact rewrites:
//!
//! - 1 qubit: `Z`
//! - 2 qubits: `CZ`
//! - 3 qubits: `H · CCX · H` on the last operand
//!
//! Larger arities would need ancilla-based ladders and are rejected.

use skinfaxi_ir::{Instruction, StandardGate};

use crate::error::{CompileError, CompileResult};
use crate::pass::{Pass, PassKind};
use crate::property::PropertySet;

/// Rewrites `mcz` gates when the target basis does not support them.
#[derive(Debug, Default)]
pub struct DecomposeMczPass;

impl DecomposeMczPass {
    /// Create a new decomposition pass.
    pub fn new() -> Self {
        Self
    }
}

impl Pass for DecomposeMczPass {
    fn name(&self) -> &str {
        "decompose-mcz"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn should_run(&self, properties: &PropertySet) -> bool {
        properties
            .basis_gates
            .as_ref()
            .is_some_and(|basis| !basis.contains("mcz"))
    }

    fn run(
        &self,
        circuit: &mut skinfaxi_ir::Circuit,
        _properties: &mut PropertySet,
    ) -> CompileResult<()> {
        // Rewrite into a scratch list first; the circuit is only touched
        // once every mcz has a known lowering, so a failed pass leaves
        // its input intact.
        let mut rewritten: Vec<Instruction> = Vec::with_capacity(circuit.instructions().len());

        for inst in circuit.instructions() {
            let num_qubits = match inst.as_gate() {
                Some(&StandardGate::Mcz { num_qubits }) => num_qubits,
                _ => {
                    rewritten.push(inst.clone());
                    continue;
                }
            };

            match num_qubits {
                1 => {
                    rewritten.push(Instruction::single_qubit_gate(
                        StandardGate::Z,
                        inst.qubits[0],
                    ));
                }
                2 => {
                    rewritten.push(Instruction::two_qubit_gate(
                        StandardGate::CZ,
                        inst.qubits[0],
                        inst.qubits[1],
                    ));
                }
                3 => {
                    // H on the target conjugates CCX into CCZ.
                    let target = inst.qubits[2];
                    rewritten.push(Instruction::single_qubit_gate(StandardGate::H, target));
                    rewritten.push(Instruction::gate(
                        StandardGate::CCX,
                        [inst.qubits[0], inst.qubits[1], target],
                    ));
                    rewritten.push(Instruction::single_qubit_gate(StandardGate::H, target));
                }
                n => {
                    return Err(CompileError::Unsupported(format!(
                        "mcz over {n} qubits requires ancilla-based decomposition"
                    )));
                }
            }
        }

        circuit.take_instructions();
        for inst in rewritten {
            circuit.apply(inst)?;
        }

        Ok(())
    }
}
