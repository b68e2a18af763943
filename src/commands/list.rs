//! List registry modules and platforms

use colored::*;
use eyre::{Context, Result};

use crate::cli::OutputFormat;
use crate::installer;
use crate::manifest::Manifest;

pub fn run(format: OutputFormat) -> Result<()> {
    let manifest = Manifest::parse(installer::REGISTRY);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&manifest).context("Failed to serialize registry")?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&manifest).context("Failed to serialize registry")?);
        }
        OutputFormat::Text => {
            println!("{}", "Modules:".bold());
            for module in &manifest.modules {
                println!("  {} {} - {}", "•".dimmed(), module.code.cyan(), module.name);
            }
            println!();
            println!("{}", "Platforms:".bold());
            for (key, platform) in &manifest.platforms {
                println!(
                    "  {} {} - {} ({}lumi-<module>{})",
                    "•".dimmed(),
                    key.cyan(),
                    platform.name,
                    platform.folder,
                    platform.extension
                );
            }
        }
    }

    Ok(())
}
