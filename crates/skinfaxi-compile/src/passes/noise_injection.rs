//! Inject noise channels from a noise profile.
//!
//! For every gate or reset whose name appears in the profile, a
//! single-qubit depolarizing channel is inserted after the instruction on
//! each operand. Multi-qubit gates therefore pick up one channel per
//! operand at the gate's error rate. Readout errors become flip channels
//! placed immediately before each measurement.

use skinfaxi_ir::{Instruction, NoiseModel, NoiseProfile};

use crate::error::CompileResult;
use crate::pass::{Pass, PassKind};
use crate::property::PropertySet;

/// Inserts noise channel instructions according to a [`NoiseProfile`]
/// stored in the property set.
#[derive(Debug, Default)]
pub struct NoiseInjectionPass;

impl NoiseInjectionPass {
    /// Create a new noise injection pass.
    pub fn new() -> Self {
        Self
    }
}

impl Pass for NoiseInjectionPass {
    fn name(&self) -> &str {
        "noise-injection"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn should_run(&self, properties: &PropertySet) -> bool {
        properties
            .get::<NoiseProfile>()
            .is_some_and(|profile| !profile.is_empty())
    }

    fn run(
        &self,
        circuit: &mut skinfaxi_ir::Circuit,
        properties: &mut PropertySet,
    ) -> CompileResult<()> {
        let profile = match properties.get::<NoiseProfile>() {
            Some(profile) if !profile.is_empty() => profile.clone(),
            _ => return Ok(()),
        };

        let instructions = circuit.take_instructions();

        for inst in instructions {
            if inst.is_measure() {
                for &qubit in &inst.qubits {
                    if let Some(p) = profile.qubit_readout_error(qubit.index()) {
                        if p > 0.0 {
                            circuit.apply(Instruction::noise_channel(
                                NoiseModel::ReadoutError { p },
                                qubit,
                            ))?;
                        }
                    }
                }
                circuit.apply(inst)?;
                continue;
            }

            let error_rate = if inst.is_gate() || inst.is_reset() {
                profile.gate_error(inst.name()).filter(|&p| p > 0.0)
            } else {
                None
            };

            let qubits = inst.qubits.clone();
            circuit.apply(inst)?;

            if let Some(p) = error_rate {
                for qubit in qubits {
                    circuit.apply(Instruction::noise_channel(
                        NoiseModel::Depolarizing { p },
                        qubit,
                    ))?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinfaxi_ir::{Circuit, InstructionKind, QubitId};

    fn props_with_profile(profile: NoiseProfile) -> PropertySet {
        let mut props = PropertySet::new();
        props.insert(profile);
        props
    }

    #[test]
    fn test_skips_without_profile() {
        let pass = NoiseInjectionPass::new();
        assert!(!pass.should_run(&PropertySet::new()));
        assert!(!pass.should_run(&props_with_profile(NoiseProfile::new())));
    }

    #[test]
    fn test_single_qubit_gate_noise() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        circuit.x(QubitId(0)).unwrap();

        let pass = NoiseInjectionPass::new();
        let mut props = props_with_profile(NoiseProfile::from_gate_errors([("x", 0.03)]));
        assert!(pass.should_run(&props));
        pass.run(&mut circuit, &mut props).unwrap();

        let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["x", "noise"]);
        assert_eq!(
            circuit.instructions()[1].kind,
            InstructionKind::NoiseChannel {
                model: NoiseModel::Depolarizing { p: 0.03 }
            }
        );
    }

    #[test]
    fn test_two_qubit_gate_gets_channel_per_operand() {
        // A two-qubit gate rate attaches a single-qubit channel to each
        // operand at the full rate.
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.cx(QubitId(0), QubitId(1)).unwrap();

        let pass = NoiseInjectionPass::new();
        let mut props = props_with_profile(NoiseProfile::from_gate_errors([("cx", 0.05)]));
        pass.run(&mut circuit, &mut props).unwrap();

        let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["cx", "noise", "noise"]);
        assert_eq!(circuit.instructions()[1].qubits, vec![QubitId(0)]);
        assert_eq!(circuit.instructions()[2].qubits, vec![QubitId(1)]);
        for inst in &circuit.instructions()[1..] {
            assert_eq!(
                inst.kind,
                InstructionKind::NoiseChannel {
                    model: NoiseModel::Depolarizing { p: 0.05 }
                }
            );
        }
    }

    #[test]
    fn test_reset_noise() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        circuit.reset(QubitId(0)).unwrap();

        let pass = NoiseInjectionPass::new();
        let mut props = props_with_profile(NoiseProfile::from_gate_errors([("reset", 0.03)]));
        pass.run(&mut circuit, &mut props).unwrap();

        let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["reset", "noise"]);
    }

    #[test]
    fn test_unlisted_gates_untouched() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        circuit.h(QubitId(0)).unwrap();

        let pass = NoiseInjectionPass::new();
        let mut props = props_with_profile(NoiseProfile::from_gate_errors([("x", 0.03)]));
        pass.run(&mut circuit, &mut props).unwrap();

        assert_eq!(circuit.num_ops(), 1);
    }

    #[test]
    fn test_readout_error_before_measure() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit.h(QubitId(0)).unwrap();
        circuit.measure_all().unwrap();

        let profile = NoiseProfile::new().with_readout_errors(vec![0.02, 0.0]);
        let pass = NoiseInjectionPass::new();
        let mut props = props_with_profile(profile);
        pass.run(&mut circuit, &mut props).unwrap();

        let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["h", "noise", "measure"]);
        assert_eq!(
            circuit.instructions()[1].kind,
            InstructionKind::NoiseChannel {
                model: NoiseModel::ReadoutError { p: 0.02 }
            }
        );
        assert_eq!(circuit.instructions()[1].qubits, vec![QubitId(0)]);
    }
}
