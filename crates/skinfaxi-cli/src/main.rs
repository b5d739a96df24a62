//! Skinfaxi Command-Line Interface
//!
//! The main entry point for the Skinfaxi CLI tool.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{backends, run, version};

/// Skinfaxi - Grover search over noisy simulated quantum hardware
#[derive(Parser)]
#[command(name = "skinfaxi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run Grover's search for one or more marked states
    Run {
        /// Marked bitstring, repeatable (e.g. -m 011 -m 100)
        #[arg(short, long = "marked", required = true)]
        marked: Vec<String>,

        /// Number of shots
        #[arg(short, long, default_value = "1024")]
        shots: u32,

        /// Grover iterations (0 picks the optimal count)
        #[arg(short, long, default_value = "0")]
        iterations: u32,

        /// Disable the device noise profile
        #[arg(long)]
        noiseless: bool,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List available backends
    Backends,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Run {
            marked,
            shots,
            iterations,
            noiseless,
            seed,
        } => run::execute(&marked, shots, iterations, noiseless, seed).await,

        Commands::Backends => backends::execute().await,

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
