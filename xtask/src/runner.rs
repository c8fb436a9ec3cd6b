//! Runs one cargo invocation as a reported step.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::{Command, Output};
use std::time::Instant;

/// How a failing step affects the overall task.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Abort the task.
    Fatal,
    /// Report and continue.
    Advisory,
}

/// Run `cargo <args>` with `envs`, print a one-line verdict and return the
/// captured output. Fatal failures print the captured output and bail.
pub fn cargo(
    label: &str,
    args: &[&str],
    envs: &[(&str, String)],
    severity: Severity,
) -> Result<Option<Output>> {
    cargo_with_report(label, args, envs, severity, |_| {})
}

/// As [`cargo`], calling `report` with the output after the verdict line,
/// on failure as well as success.
pub fn cargo_with_report(
    label: &str,
    args: &[&str],
    envs: &[(&str, String)],
    severity: Severity,
    report: impl FnOnce(&Output),
) -> Result<Option<Output>> {
    println!("{}", format!("  {label}...").cyan());
    let start = Instant::now();

    let output = Command::new("cargo")
        .args(args)
        .envs(envs.iter().map(|(k, v)| (*k, v.as_str())))
        .output()
        .with_context(|| format!("Failed to spawn cargo for: {label}"))?;

    let secs = start.elapsed().as_secs_f64();
    if output.status.success() {
        println!("{}", format!("  ✓ {label} passed in {secs:.2}s").green());
        report(&output);
        println!();
        return Ok(Some(output));
    }

    match severity {
        Severity::Fatal => {
            eprintln!("{}", format!("  ✗ {label} failed").red().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stdout));
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            report(&output);
            anyhow::bail!("{label} failed");
        }
        Severity::Advisory => {
            eprintln!("{}", format!("  ⚠ {label} reported problems").yellow().bold());
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            report(&output);
            println!();
            Ok(None)
        }
    }
}

/// Print the closing line of a task.
pub fn finish(what: &str, start: Instant) {
    println!(
        "{}",
        format!("✓ {what} completed in {:.2}s", start.elapsed().as_secs_f64())
            .green()
            .bold()
    );
    println!();
}
