//! End-to-end Grover search circuit construction.

use std::f64::consts::PI;

use skinfaxi_ir::{Circuit, NoiseProfile, QubitId};

use crate::error::{GroverError, GroverResult};
use crate::operator::GroverOperator;
use crate::oracle::validate_marked_states;

/// Calculate the optimal number of Grover iterations for `num_marked`
/// marked states over `num_qubits` qubits.
///
/// floor(π / (4·arcsin(√(k/2^N)))). The rotation angle per iteration is
/// 2·arcsin(√(k/2^N)); this lands the state as close to the marked
/// subspace as an integer number of iterations allows.
///
/// `num_marked` must lie in 1..=2^N, otherwise the formula is undefined
/// and an [`GroverError::IterationDomain`] error is returned.
pub fn optimal_iterations(num_qubits: u32, num_marked: u64) -> GroverResult<u32> {
    let search_space = 1u64
        .checked_shl(num_qubits)
        .ok_or(GroverError::IterationDomain {
            num_marked,
            search_space: u64::MAX,
        })?;

    if num_marked == 0 || num_marked > search_space {
        return Err(GroverError::IterationDomain {
            num_marked,
            search_space,
        });
    }

    let ratio = num_marked as f64 / search_space as f64;
    let theta = ratio.sqrt().asin();
    Ok((PI / (4.0 * theta)).floor() as u32)
}

/// Build the full Grover search circuit for a set of marked bit strings.
///
/// Uniform superposition over all qubits, then the Grover operator
/// applied `iterations` times (the optimal count when `None`), then
/// measurement of every qubit.
pub fn grover_circuit(
    marked_states: &[impl AsRef<str>],
    iterations: Option<u32>,
) -> GroverResult<Circuit> {
    let num_qubits = validate_marked_states(marked_states)?;
    let iterations = match iterations {
        Some(k) => k,
        None => optimal_iterations(num_qubits as u32, marked_states.len() as u64)?,
    };

    let operator = GroverOperator::new(marked_states)?;
    let mut circuit = Circuit::with_size("grover", num_qubits as u32, num_qubits as u32);

    for i in 0..num_qubits {
        circuit.h(QubitId::from(i))?;
    }
    circuit.compose(&operator.power(iterations)?)?;
    circuit.measure_all()?;

    Ok(circuit)
}

/// The fixed demonstration noise profile: single-qubit depolarizing
/// error rates of 0.03 on `reset`, 0.03 on `x`, and 0.05 on `cx`.
///
/// The rates attach to gate names regardless of arity. In particular
/// the `cx` entry produces a single-qubit channel on each of the two
/// operands rather than a two-qubit channel; that asymmetry is part of
/// the demonstration's definition and is kept as-is.
pub fn search_noise_profile() -> NoiseProfile {
    NoiseProfile::from_gate_errors([("reset", 0.03), ("x", 0.03), ("cx", 0.05)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_iterations_two_of_eight() {
        // N = 3, k = 2: asin(sqrt(1/4)) = π/6, π/(4·π/6) = 1.5 → 1.
        assert_eq!(optimal_iterations(3, 2).unwrap(), 1);
    }

    #[test]
    fn test_optimal_iterations_single_marked() {
        // N = 3, k = 1: asin(sqrt(1/8)) ≈ 0.3614, π/(4·0.3614) ≈ 2.17 → 2.
        assert_eq!(optimal_iterations(3, 1).unwrap(), 2);
        // N = 4, k = 1 → 3.
        assert_eq!(optimal_iterations(4, 1).unwrap(), 3);
    }

    #[test]
    fn test_optimal_iterations_domain_errors() {
        assert!(matches!(
            optimal_iterations(3, 0),
            Err(GroverError::IterationDomain { .. })
        ));
        assert!(matches!(
            optimal_iterations(3, 9),
            Err(GroverError::IterationDomain { .. })
        ));
    }

    #[test]
    fn test_optimal_iterations_full_space() {
        // k = 2^N is on the domain boundary: θ = π/2, floor(1/2) = 0.
        assert_eq!(optimal_iterations(2, 4).unwrap(), 0);
    }

    #[test]
    fn test_grover_circuit_shape() {
        let circuit = grover_circuit(&["011", "100"], None).unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 3);

        // Optimal count is 1 iteration: three mcz (two oracle, one diffusion).
        let mcz_count = circuit
            .instructions()
            .iter()
            .filter(|i| i.name() == "mcz")
            .count();
        assert_eq!(mcz_count, 3);
        assert!(circuit.instructions().last().unwrap().is_measure());
    }

    #[test]
    fn test_grover_circuit_explicit_iterations() {
        let one = grover_circuit(&["101"], Some(1)).unwrap();
        let two = grover_circuit(&["101"], Some(2)).unwrap();
        assert!(two.num_ops() > one.num_ops());
    }

    #[test]
    fn test_search_noise_profile_rates() {
        let profile = search_noise_profile();
        assert_eq!(profile.gate_error("reset"), Some(0.03));
        assert_eq!(profile.gate_error("x"), Some(0.03));
        assert_eq!(profile.gate_error("cx"), Some(0.05));
        assert_eq!(profile.gate_error("h"), None);
        assert!(profile.readout_errors.is_none());
    }
}
