//! End-to-end pipeline tests for the CLI's run flow.
//!
//! The CLI is a binary crate, so these tests exercise the same sequence
//! the `run` command drives: build the search circuit, transpile with the
//! device noise profile, and execute on the local simulator.

use skinfaxi_adapter_sim::SimulatorBackend;
use skinfaxi_compile::{BasisGates, PassManagerBuilder};
use skinfaxi_grover::{grover_circuit, optimal_iterations, search_noise_profile};
use skinfaxi_hal::Backend;

/// Equivalent to the iteration resolution in the run command.
fn resolve_iterations(marked: &[&str], requested: u32) -> anyhow::Result<u32> {
    if requested != 0 {
        return Ok(requested);
    }
    let num_qubits = marked.first().map_or(0, |s| s.len()) as u32;
    Ok(optimal_iterations(num_qubits, marked.len() as u64)?)
}

#[test]
fn test_iteration_resolution() {
    assert_eq!(resolve_iterations(&["011", "100"], 0).unwrap(), 1);
    assert_eq!(resolve_iterations(&["0000"], 0).unwrap(), 3);
    assert_eq!(resolve_iterations(&["011", "100"], 5).unwrap(), 5);
}

#[test]
fn test_iteration_resolution_rejects_empty() {
    assert!(resolve_iterations(&[], 0).is_err());
}

#[tokio::test]
async fn test_run_pipeline_noiseless() {
    let circuit = grover_circuit(&["011", "100"], None).unwrap();

    let backend = SimulatorBackend::new();
    let job_id = backend.submit(&circuit, 256).await.unwrap();
    let result = backend.wait(&job_id).await.unwrap();

    assert_eq!(result.counts.get("011") + result.counts.get("100"), 256);
}

#[tokio::test]
async fn test_run_pipeline_with_noise_profile() {
    let mut circuit = grover_circuit(&["011", "100"], None).unwrap();

    let (pm, mut props) = PassManagerBuilder::new()
        .with_basis_gates(BasisGates::universal())
        .with_noise_profile(search_noise_profile())
        .build();
    pm.run(&mut circuit, &mut props).unwrap();

    let backend = SimulatorBackend::new().with_seed(7);
    let job_id = backend.submit(&circuit, 1024).await.unwrap();
    let result = backend.wait(&job_id).await.unwrap();

    assert_eq!(result.counts.total_shots(), 1024);
    let (top, _) = result.counts.most_frequent().unwrap();
    assert!(top == "011" || top == "100");
}
