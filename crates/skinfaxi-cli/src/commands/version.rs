//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - Grover search over noisy simulated quantum hardware",
        style("Skinfaxi").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  skinfaxi-ir           Circuit intermediate representation");
    println!("  skinfaxi-grover       Oracle and diffusion circuit construction");
    println!("  skinfaxi-compile      Transpilation and noise injection");
    println!("  skinfaxi-hal          Hardware abstraction layer");
    println!("  skinfaxi-adapter-sim  Local statevector simulator");
    println!("  skinfaxi-cli          Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/hiq-lab/skinfaxi").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
