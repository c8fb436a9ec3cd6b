use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::runner::{cargo, finish, Severity};

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building documentation...".cyan().bold());
    println!();

    let start = Instant::now();

    let mut args = vec!["doc", "--workspace", "--no-deps", "--exclude", "xtask"];
    if open {
        args.push("--open");
    }
    cargo("Documentation", &args, &[], Severity::Fatal)?;

    if !open {
        println!(
            "   {}",
            "Open target/doc/controls/index.html in your browser".dimmed()
        );
        println!("   {}", "Or run 'cargo run -p xtask -- doc --open'".dimmed());
        println!();
    }

    finish("Documentation", start);
    Ok(())
}
