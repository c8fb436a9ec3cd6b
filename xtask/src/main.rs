// Desktop tooling crate: unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod check;
mod doc;
mod runner;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Bare-metal target used to prove the library crates stay `no_std`.
const DEFAULT_NO_STD_TARGET: &str = "thumbv7em-none-eabihf";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Radio controls development tasks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check no_std builds (with and without defmt), clippy and formatting
    Check {
        /// Bare-metal target triple for the no_std builds
        #[arg(long, default_value = DEFAULT_NO_STD_TARGET)]
        target: String,
    },
    /// Run unit, integration and doc tests on the host
    Test {
        /// Run only unit tests
        #[arg(long)]
        unit: bool,
        /// Run only integration tests (crates/*/tests)
        #[arg(long)]
        integration: bool,
        /// Override the number of proptest cases per property
        #[arg(long)]
        proptest_cases: Option<u32>,
    },
    /// Build and optionally open documentation
    Doc {
        /// Open documentation in browser
        #[arg(long)]
        open: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { target } => check::run(&target),
        Commands::Test {
            unit,
            integration,
            proptest_cases,
        } => test::run(unit, integration, proptest_cases),
        Commands::Doc { open } => doc::run(open),
    }
}
