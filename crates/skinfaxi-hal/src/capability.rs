//! Backend capability introspection.
//!
//! These types describe what a quantum backend can do: qubit count,
//! supported gates, shot limits, and noise characteristics. The
//! transpiler uses them to decide what to decompose; callers use them
//! to pick a backend.

use serde::{Deserialize, Serialize};
use skinfaxi_ir::NoiseProfile;

/// Hardware capabilities of a quantum backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Supported gate set (OpenQASM 3 naming convention).
    pub gate_set: GateSet,
    /// Maximum number of shots per job.
    pub max_shots: u32,
    /// Whether this is a simulator (`true`) vs real hardware (`false`).
    pub is_simulator: bool,
    /// Additional capability flags, e.g. `"statevector"`,
    /// `"noise_trajectories"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// Device noise profile, if the backend models one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_profile: Option<NoiseProfile>,
}

impl Capabilities {
    /// Create capabilities for a statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            num_qubits,
            gate_set: GateSet::universal(),
            max_shots: 100_000,
            is_simulator: true,
            features: vec!["statevector".into(), "noise_trajectories".into()],
            noise_profile: None,
        }
    }

    /// Attach a noise profile to these capabilities.
    #[must_use]
    pub fn with_noise_profile(mut self, profile: NoiseProfile) -> Self {
        self.noise_profile = Some(profile);
        self
    }
}

/// Gate set supported by a backend.
///
/// Gate names follow the OpenQASM 3 naming convention (lowercase):
/// `h`, `cx`, `rz`, etc.
///
/// The `native` list identifies gates that execute without decomposition.
/// If `native` is empty, all supported gates are considered native
/// (typical for simulators).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateSet {
    /// Single-qubit gates supported.
    pub single_qubit: Vec<String>,
    /// Two-qubit gates supported.
    pub two_qubit: Vec<String>,
    /// Three-qubit gates supported.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub three_qubit: Vec<String>,
    /// Variable-arity gates supported (e.g. `mcz`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub multi_qubit: Vec<String>,
    /// Native gates (execute without decomposition on this backend).
    pub native: Vec<String>,
}

impl GateSet {
    /// Create the universal gate set, including the variable-arity `mcz`.
    pub fn universal() -> Self {
        Self {
            single_qubit: vec![
                "id".into(),
                "x".into(),
                "y".into(),
                "z".into(),
                "h".into(),
                "s".into(),
                "sdg".into(),
                "t".into(),
                "tdg".into(),
                "rx".into(),
                "ry".into(),
                "rz".into(),
                "p".into(),
            ],
            two_qubit: vec![
                "cx".into(),
                "cy".into(),
                "cz".into(),
                "cp".into(),
                "swap".into(),
            ],
            three_qubit: vec!["ccx".into()],
            multi_qubit: vec!["mcz".into()],
            native: vec![],
        }
    }

    /// Create a gate set from explicit gate lists.
    pub fn new(
        single_qubit: Vec<String>,
        two_qubit: Vec<String>,
        three_qubit: Vec<String>,
        multi_qubit: Vec<String>,
    ) -> Self {
        Self {
            single_qubit,
            two_qubit,
            three_qubit,
            multi_qubit,
            native: vec![],
        }
    }

    /// Check if a gate is supported.
    pub fn contains(&self, gate: &str) -> bool {
        self.single_qubit.iter().any(|g| g == gate)
            || self.two_qubit.iter().any(|g| g == gate)
            || self.three_qubit.iter().any(|g| g == gate)
            || self.multi_qubit.iter().any(|g| g == gate)
    }

    /// Check if a gate is native (executes without decomposition).
    ///
    /// If the `native` list is empty, all supported gates are considered
    /// native — this is the typical case for simulators.
    pub fn is_native(&self, gate: &str) -> bool {
        if self.native.is_empty() {
            self.contains(gate)
        } else {
            self.native.iter().any(|g| g == gate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_capabilities() {
        let caps = Capabilities::simulator(20);
        assert_eq!(caps.num_qubits, 20);
        assert!(caps.is_simulator);
        assert_eq!(caps.max_shots, 100_000);
        assert!(caps.noise_profile.is_none());
    }

    #[test]
    fn test_universal_gate_set() {
        let gates = GateSet::universal();
        assert!(gates.contains("h"));
        assert!(gates.contains("cx"));
        assert!(gates.contains("ccx"));
        assert!(gates.contains("mcz"));
        assert!(!gates.contains("ecr"));

        // Empty native list: every supported gate is native.
        assert!(gates.is_native("mcz"));
        assert!(!gates.is_native("ecr"));
    }

    #[test]
    fn test_capabilities_with_noise_profile() {
        let profile = NoiseProfile::from_gate_errors([("cx", 0.05)]);
        let caps = Capabilities::simulator(5).with_noise_profile(profile);
        assert!(caps.noise_profile.is_some());
    }
}
