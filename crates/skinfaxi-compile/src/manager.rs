//! Pass manager for running compilation pipelines.

use tracing::{debug, info};

use skinfaxi_ir::{Circuit, NoiseProfile};

use crate::error::CompileResult;
use crate::pass::Pass;
use crate::passes::{DecomposeMczPass, NoiseInjectionPass};
use crate::property::{BasisGates, PropertySet};

/// Runs a sequence of passes over a circuit.
#[derive(Default)]
pub struct PassManager {
    passes: Vec<Box<dyn Pass>>,
}

impl PassManager {
    /// Create an empty pass manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pass to the pipeline.
    pub fn add_pass(&mut self, pass: Box<dyn Pass>) -> &mut Self {
        self.passes.push(pass);
        self
    }

    /// Number of passes in the pipeline.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Check if the pipeline has no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Run all passes over the circuit in order.
    ///
    /// Passes whose `should_run` returns `false` are skipped.
    pub fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()> {
        info!(
            passes = self.passes.len(),
            circuit = circuit.name(),
            "running compilation pipeline"
        );

        for pass in &self.passes {
            if !pass.should_run(properties) {
                debug!(pass = pass.name(), "skipping pass");
                continue;
            }
            debug!(pass = pass.name(), kind = ?pass.kind(), "running pass");
            pass.run(circuit, properties)?;
        }

        Ok(())
    }
}

/// Builder for the standard compilation pipeline.
///
/// ```rust
/// use skinfaxi_compile::{BasisGates, PassManagerBuilder};
/// use skinfaxi_ir::NoiseProfile;
///
/// let (manager, mut properties) = PassManagerBuilder::new()
///     .with_basis_gates(BasisGates::universal())
///     .with_noise_profile(NoiseProfile::from_gate_errors([("cx", 0.05)]))
///     .build();
/// # let _ = (manager, &mut properties);
/// ```
#[derive(Default)]
pub struct PassManagerBuilder {
    basis_gates: Option<BasisGates>,
    noise_profile: Option<NoiseProfile>,
}

impl PassManagerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the output to a target basis.
    #[must_use]
    pub fn with_basis_gates(mut self, basis: BasisGates) -> Self {
        self.basis_gates = Some(basis);
        self
    }

    /// Inject noise channels according to a profile.
    #[must_use]
    pub fn with_noise_profile(mut self, profile: NoiseProfile) -> Self {
        self.noise_profile = Some(profile);
        self
    }

    /// Build the pass manager and its initial property set.
    ///
    /// Decomposition runs before noise injection so that error rates
    /// attach to the gates the backend will actually execute.
    pub fn build(self) -> (PassManager, PropertySet) {
        let mut manager = PassManager::new();
        let mut properties = PropertySet::new();

        if let Some(basis) = self.basis_gates {
            properties.basis_gates = Some(basis);
            manager.add_pass(Box::new(DecomposeMczPass::new()));
        }

        if let Some(profile) = self.noise_profile {
            properties.insert(profile);
        }
        manager.add_pass(Box::new(NoiseInjectionPass::new()));

        (manager, properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinfaxi_grover::{grover_circuit, search_noise_profile};
    use skinfaxi_ir::QubitId;

    #[test]
    fn test_empty_pipeline() {
        let manager = PassManager::new();
        assert!(manager.is_empty());

        let mut circuit = Circuit::bell().unwrap();
        let before = circuit.clone();
        manager.run(&mut circuit, &mut PropertySet::new()).unwrap();
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_builder_noiseless_universal_is_identity() {
        let (manager, mut properties) = PassManagerBuilder::new()
            .with_basis_gates(BasisGates::universal())
            .build();

        let mut circuit = grover_circuit(&["011", "100"], None).unwrap();
        let before = circuit.clone();
        manager.run(&mut circuit, &mut properties).unwrap();
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_builder_decomposes_then_injects() {
        let (manager, mut properties) = PassManagerBuilder::new()
            .with_basis_gates(BasisGates::new(["h", "x", "z", "cz", "ccx", "measure"]))
            .with_noise_profile(NoiseProfile::from_gate_errors([("ccx", 0.05)]))
            .build();
        assert_eq!(manager.len(), 2);

        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit
            .mcz([QubitId(0), QubitId(1), QubitId(2)])
            .unwrap();
        manager.run(&mut circuit, &mut properties).unwrap();

        // mcz became h ccx h, then the ccx picked up one channel per operand.
        let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["h", "ccx", "noise", "noise", "noise", "h"]);
    }

    #[test]
    fn test_search_profile_channel_counts() {
        let (manager, mut properties) = PassManagerBuilder::new()
            .with_basis_gates(BasisGates::universal())
            .with_noise_profile(search_noise_profile())
            .build();

        let mut circuit = grover_circuit(&["011", "100"], Some(1)).unwrap();
        let x_gates = circuit
            .instructions()
            .iter()
            .filter(|i| i.name() == "x")
            .count();
        manager.run(&mut circuit, &mut properties).unwrap();

        // The profile lists x, cx, and reset; the circuit has no cx or
        // reset, so every channel comes from an x gate.
        let channels = circuit
            .instructions()
            .iter()
            .filter(|i| i.is_noise_channel())
            .count();
        assert_eq!(channels, x_gates);
    }
}
