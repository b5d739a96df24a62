//! Run command implementation.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use skinfaxi_adapter_sim::SimulatorBackend;
use skinfaxi_compile::{BasisGates, PassManagerBuilder};
use skinfaxi_grover::{grover_circuit, optimal_iterations, search_noise_profile};
use skinfaxi_hal::Backend;

use super::common::print_results;

/// Execute the run command.
pub async fn execute(
    marked: &[String],
    shots: u32,
    iterations: u32,
    noiseless: bool,
    seed: Option<u64>,
) -> Result<()> {
    println!(
        "{} Grover search for {} ({} shots)",
        style("→").cyan().bold(),
        style(marked.join(", ")).green(),
        shots
    );

    let num_qubits = marked.first().map_or(0, |s| s.len()) as u32;
    let iterations = if iterations == 0 {
        optimal_iterations(num_qubits, marked.len() as u64)?
    } else {
        iterations
    };

    let mut circuit = grover_circuit(marked, Some(iterations))?;
    println!(
        "  Circuit: {} qubits, {} iterations, depth {}",
        circuit.num_qubits(),
        iterations,
        circuit.depth()
    );

    // Transpile for the simulator and inject the device noise profile
    let mut builder = PassManagerBuilder::new().with_basis_gates(BasisGates::universal());
    if noiseless {
        println!("  Noise: {}", style("disabled").yellow());
    } else {
        let profile = search_noise_profile();
        println!(
            "  Noise: {} gate error rates",
            profile.gate_errors.len()
        );
        builder = builder.with_noise_profile(profile);
    }
    let (pm, mut props) = builder.build();
    pm.run(&mut circuit, &mut props)?;

    let backend = match seed {
        Some(seed) => SimulatorBackend::new().with_seed(seed),
        None => SimulatorBackend::new(),
    };

    // Check availability
    let avail = backend.availability().await?;
    if !avail.is_available {
        anyhow::bail!("Backend '{}' is not available", backend.name());
    }

    // Submit job
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Submitting job...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let job_id = backend.submit(&circuit, shots).await?;
    spinner.set_message(format!("Running job {job_id}..."));

    // Wait for result
    let result = backend.wait(&job_id).await?;
    spinner.finish_and_clear();

    print_results(&result);

    if let Some((bitstring, count)) = result.counts.most_frequent() {
        println!(
            "\n  Most likely state: {} ({} of {} shots)",
            style(bitstring).cyan().bold(),
            count,
            shots
        );
    }

    Ok(())
}
