//! End-to-end Grover search on the simulator.

use num_complex::Complex64;

use skinfaxi_adapter_sim::{SimulatorBackend, Statevector};
use skinfaxi_compile::{BasisGates, PassManagerBuilder};
use skinfaxi_grover::{grover_circuit, grover_oracle, search_noise_profile};
use skinfaxi_hal::Backend;
use skinfaxi_ir::QubitId;

#[test]
fn oracle_flips_phase_of_marked_state_only() {
    let oracle = grover_oracle(&["011"]).unwrap();

    // Prepare |011⟩: qubits 0 and 1 set.
    let mut sv = Statevector::new(3);
    let mut rng = rand::thread_rng();
    let mut prep = skinfaxi_ir::Circuit::with_size("prep", 3, 0);
    prep.x(QubitId(0)).unwrap().x(QubitId(1)).unwrap();
    for inst in prep.instructions() {
        sv.apply(inst, &mut rng);
    }

    for inst in oracle.instructions() {
        sv.apply(inst, &mut rng);
    }

    assert!((sv.amplitude(0b011) - Complex64::new(-1.0, 0.0)).norm() < 1e-10);
    for i in 0..8 {
        if i != 0b011 {
            assert!(sv.amplitude(i).norm() < 1e-10);
        }
    }
}

#[tokio::test]
async fn noiseless_search_finds_only_marked_states() {
    // Two marked states out of eight: one iteration is optimal and the
    // success amplitude is exactly 1, so every shot lands on a marked state.
    let circuit = grover_circuit(&["011", "100"], None).unwrap();

    let backend = SimulatorBackend::new();
    let job_id = backend.submit(&circuit, 1024).await.unwrap();
    let result = backend.wait(&job_id).await.unwrap();

    let counts = &result.counts;
    assert_eq!(counts.get("011") + counts.get("100"), 1024);
    assert!(counts.get("011") > 0);
    assert!(counts.get("100") > 0);
}

#[tokio::test]
async fn noisy_search_still_favors_marked_states() {
    let mut circuit = grover_circuit(&["011", "100"], None).unwrap();

    let (manager, mut properties) = PassManagerBuilder::new()
        .with_basis_gates(BasisGates::universal())
        .with_noise_profile(search_noise_profile())
        .build();
    manager.run(&mut circuit, &mut properties).unwrap();

    let shots = 4096;
    let backend = SimulatorBackend::new().with_seed(1234);
    let job_id = backend.submit(&circuit, shots).await.unwrap();
    let result = backend.wait(&job_id).await.unwrap();

    let counts = &result.counts;
    assert_eq!(counts.total_shots(), u64::from(shots));

    // Depolarizing errors leak probability to unmarked states, but the
    // marked states still dominate.
    let marked = counts.get("011") + counts.get("100");
    assert!(
        marked > u64::from(shots) / 2,
        "marked states got {marked} of {shots} shots"
    );
}

#[tokio::test]
async fn noisy_search_is_reproducible_with_seed() {
    let mut circuit = grover_circuit(&["011", "100"], Some(1)).unwrap();

    let (manager, mut properties) = PassManagerBuilder::new()
        .with_basis_gates(BasisGates::universal())
        .with_noise_profile(search_noise_profile())
        .build();
    manager.run(&mut circuit, &mut properties).unwrap();

    let first = SimulatorBackend::new().with_seed(99);
    let job = first.submit(&circuit, 512).await.unwrap();
    let counts_a = first.result(&job).await.unwrap().counts;

    let second = SimulatorBackend::new().with_seed(99);
    let job = second.submit(&circuit, 512).await.unwrap();
    let counts_b = second.result(&job).await.unwrap().counts;

    assert_eq!(counts_a, counts_b);
}
