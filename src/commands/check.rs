//! Check system requirements

use colored::*;
use eyre::Result;
use which::which;

use crate::installer;
use crate::manifest::Manifest;

pub fn run() -> Result<()> {
    println!("{}", "Lumi-Kit System Check".bold());
    println!("{}", "═".repeat(50));
    println!();

    let mut issues = 0;

    // git, for project integration
    match which("git") {
        Ok(path) => println!("{} git: {}", "✓".green(), path.display()),
        Err(_) => {
            println!("{} git: not found", "⚠".yellow());
            issues += 1;
        }
    }

    // Home directory, for log and data paths
    match dirs::home_dir() {
        Some(home) => println!("{} home directory: {}", "✓".green(), home.display()),
        None => {
            println!("{} home directory could not be determined", "✗".red());
            issues += 1;
        }
    }

    // Embedded registry
    let manifest = Manifest::parse(installer::REGISTRY);
    println!(
        "{} registry: {} module(s), {} platform(s)",
        "✓".green(),
        manifest.modules.len(),
        manifest.platforms.len()
    );
    if manifest.platforms.is_empty() {
        println!("{} registry defines no platforms", "✗".red());
        issues += 1;
    }

    println!();
    if issues == 0 {
        println!("{} All checks passed! Ready to use lumi-kit.", "✓".green().bold());
    } else {
        println!("{} {} issue(s) found", "⚠".yellow().bold(), issues);
    }

    Ok(())
}
