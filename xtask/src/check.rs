use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::runner::{cargo, finish, Severity};

/// Library crates that must build without `std`.
const NO_STD_CRATES: [&str; 3] = ["platform", "ui", "controls"];

pub fn run(target: &str) -> Result<()> {
    println!();
    println!("{}", format!("🔍 Checking builds for {target}...").cyan().bold());
    println!();

    let start = Instant::now();

    for krate in NO_STD_CRATES {
        cargo(
            &format!("{krate} (no_std)"),
            &["check", "-p", krate, "--target", target, "--no-default-features"],
            &[],
            Severity::Fatal,
        )?;
        cargo(
            &format!("{krate} (no_std + defmt)"),
            &["check", "-p", krate, "--target", target, "--features", "defmt"],
            &[],
            Severity::Fatal,
        )?;
    }

    cargo(
        "Clippy (host, all targets)",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        &[],
        Severity::Advisory,
    )?;

    if cargo("Formatting", &["fmt", "--all", "--check"], &[], Severity::Advisory)?.is_none() {
        eprintln!("     Run 'cargo fmt --all' to fix");
    }

    finish("All checks", start);
    Ok(())
}
