//! Backends command implementation.

use anyhow::Result;
use console::style;

use skinfaxi_adapter_sim::SimulatorBackend;
use skinfaxi_hal::Backend;

/// Execute the backends command.
pub async fn execute() -> Result<()> {
    println!("{} Available backends:\n", style("Skinfaxi").cyan().bold());

    let sim = SimulatorBackend::new();
    let caps = sim.capabilities();
    let available = sim.availability().await?.is_available;

    println!(
        "  {} {} {}",
        if available {
            style("●").green()
        } else {
            style("○").red()
        },
        style("simulator").bold(),
        if caps.is_simulator { "(local)" } else { "" }
    );
    println!("    Qubits: {}", caps.num_qubits);
    println!("    Max shots: {}", caps.max_shots);
    println!(
        "    Gates: {}, {}, {}, {}",
        caps.gate_set.single_qubit.join(", "),
        caps.gate_set.two_qubit.join(", "),
        caps.gate_set.three_qubit.join(", "),
        caps.gate_set.multi_qubit.join(", ")
    );
    println!("    Features: {}", caps.features.join(", "));

    Ok(())
}
