//! Initialize lumi-kit in a project
//!
//! Resolves the target directory, the platform(s), and the modules to
//! install, then drives the installer once per platform and records the
//! run in `_lumi/config.yaml`.

use colored::*;
use dialoguer::{Confirm, MultiSelect, Select};
use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::installer::{self, FsSink, FsSource, Installer, TextSink, record::RunRecord};
use crate::manifest::Manifest;

pub struct InitOptions {
    pub path: PathBuf,
    pub yes: bool,
    pub platform: Option<String>,
    pub all: bool,
    pub modules: Vec<String>,
    pub modules_dir: Option<PathBuf>,
}

pub fn run(opts: InitOptions) -> Result<()> {
    let target = resolve_dir(&opts.path)?;

    println!("{} Initializing lumi-kit in {}", "→".blue(), target.display());

    let manifest = Manifest::parse(installer::REGISTRY);
    if manifest.platforms.is_empty() {
        eyre::bail!("embedded registry defines no platforms");
    }

    if !opts.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Initialize lumi-kit in {}?", target.display()))
            .default(true)
            .interact()
            .context("Failed to get user input")?;
        if !confirmed {
            println!("{} Initialization cancelled", "⚠".yellow());
            return Ok(());
        }
    }

    let codes = resolve_modules(&opts, &manifest)?;
    if codes.is_empty() {
        println!("{} No modules selected. At least one module is required.", "⚠".yellow());
        return Ok(());
    }

    let platforms = resolve_platforms(&opts, &manifest)?;

    // Module paths in the registry are relative to the source root
    // (they carry their own `modules/` prefix).
    let source_root = opts
        .modules_dir
        .map(|dir| resolve_dir(&dir))
        .transpose()?
        .or_else(|| std::env::var("LUMI_MODULES").ok().map(PathBuf::from))
        .unwrap_or_else(|| target.clone());

    fs::create_dir_all(&target).with_context(|| format!("Failed to create {}", target.display()))?;

    let source = FsSource::new(source_root);
    let sink = FsSink::new(target.clone());
    let installer = Installer::new(&manifest, &source, &sink);

    let mut installed = 0;
    for key in &platforms {
        let name = manifest.platform(key).map(|p| p.name.clone()).unwrap_or_else(|| key.clone());
        println!();
        println!("{} Installing {} module(s) for {}...", "→".blue(), codes.len(), name);

        match installer.install(&codes, key) {
            Ok(report) => {
                installed += report.written.len();
                for code in &report.skipped {
                    println!("  {} Skipped {} (nothing to install)", "⚠".yellow(), code);
                }
            }
            Err(err) => {
                // One failing platform must not abort the others.
                log::error!("install failed for platform '{}': {:#}", key, err);
                println!("  {} Install failed for {}: {}", "✗".red(), key, err);
            }
        }
    }

    let record = RunRecord::new(platforms.clone(), codes.clone());
    sink.write(Path::new(installer::record::RUN_RECORD_PATH), &record.to_yaml()?)
        .context("Failed to write run record")?;
    println!();
    println!("  {} Created {}", "✓".green(), installer::record::RUN_RECORD_PATH);

    println!();
    println!("{} Lumi-kit initialized! ({} file(s) written)", "✓".green().bold(), installed);
    println!();
    println!("Available agents:");
    for code in &codes {
        println!("  {} /lumi-{}", "•".dimmed(), code);
    }
    println!();
    println!("Platforms:");
    for key in &platforms {
        if let Some(platform) = manifest.platform(key) {
            println!("  {} {} → {}", "•".dimmed(), platform.name, platform.folder);
        }
    }

    Ok(())
}

/// Expand `~`/env vars in a user-supplied path and anchor it to the
/// current directory.
fn resolve_dir(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw).unwrap_or_else(|_| raw.clone());
    let expanded = PathBuf::from(expanded.as_ref());
    if expanded.is_absolute() {
        return Ok(expanded);
    }
    Ok(std::env::current_dir().context("Failed to resolve current directory")?.join(expanded))
}

fn resolve_modules(opts: &InitOptions, manifest: &Manifest) -> Result<Vec<String>> {
    if !opts.modules.is_empty() {
        for code in &opts.modules {
            if manifest.module(code).is_none() {
                log::warn!("module '{}' is not in the registry", code);
            }
        }
        return Ok(opts.modules.clone());
    }

    let all_codes: Vec<String> = manifest.modules.iter().map(|m| m.code.clone()).collect();
    if opts.yes {
        return Ok(all_codes);
    }

    let labels: Vec<String> = manifest
        .modules
        .iter()
        .map(|m| format!("{} - {}", m.code, m.name))
        .collect();
    let defaults = vec![true; labels.len()];
    let picked = MultiSelect::new()
        .with_prompt("Select modules to install")
        .items(&labels)
        .defaults(&defaults)
        .interact()
        .context("Failed to get user input")?;

    Ok(picked.into_iter().map(|idx| all_codes[idx].clone()).collect())
}

fn resolve_platforms(opts: &InitOptions, manifest: &Manifest) -> Result<Vec<String>> {
    if opts.all {
        return Ok(manifest.platforms.keys().cloned().collect());
    }

    if let Some(ref key) = opts.platform {
        if manifest.platform(key).is_none() {
            let available: Vec<&str> = manifest.platforms.keys().map(String::as_str).collect();
            eyre::bail!("unknown platform: {} (available: {})", key, available.join(", "));
        }
        return Ok(vec![key.clone()]);
    }

    if opts.yes {
        // Non-interactive without an explicit choice: take the first
        // registry platform.
        let first = manifest.platforms.keys().next().expect("registry has platforms");
        return Ok(vec![first.clone()]);
    }

    let keys: Vec<&String> = manifest.platforms.keys().collect();
    let names: Vec<&str> = manifest.platforms.values().map(|p| p.name.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Select your AI platform")
        .items(&names)
        .default(0)
        .interact()
        .context("Failed to get user input")?;

    Ok(vec![keys[selection].clone()])
}
