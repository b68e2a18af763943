//! Install orchestration
//!
//! Wires the manifest registry, the definition extractor, and the
//! renderers together: resolve records, read agent text through the
//! source collaborator, produce the platform document, persist it
//! through the sink. The core transformations stay pure; everything
//! touching the filesystem lives behind the `TextSource`/`TextSink`
//! seams.

pub mod defaults;
pub mod record;

use colored::*;
use eyre::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::agent::extractor;
use crate::manifest::{Manifest, PlatformRecord};
use crate::render::{self, RenderError, frontmatter};

/// Embedded registry of installable modules and target platforms.
pub const REGISTRY: &str = include_str!("registry.yaml");

/// Read-path collaborator: resolve a logical path to raw text.
/// Absence is signalled through `io::ErrorKind::NotFound`.
pub trait TextSource {
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Write-path collaborator: persist text to a destination path.
pub trait TextSink {
    fn write(&self, path: &Path, text: &str) -> io::Result<()>;
}

/// Filesystem source rooted at the modules directory.
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl TextSource for FsSource {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.root.join(path))
    }
}

/// Filesystem sink rooted at the target project directory. Creates
/// destination directories as needed; the core never does.
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl TextSink for FsSink {
    fn write(&self, path: &Path, text: &str) -> io::Result<()> {
        let dest = self.root.join(path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(dest, text)
    }
}

/// What one install pass produced.
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Destination paths written, in install order.
    pub written: Vec<PathBuf>,
    /// Module codes that had nothing to install.
    pub skipped: Vec<String>,
}

pub struct Installer<'a> {
    manifest: &'a Manifest,
    source: &'a dyn TextSource,
    sink: &'a dyn TextSink,
}

impl<'a> Installer<'a> {
    pub fn new(manifest: &'a Manifest, source: &'a dyn TextSource, sink: &'a dyn TextSink) -> Self {
        Self { manifest, source, sink }
    }

    /// Install the given modules for one platform. Every artifact is a
    /// fresh, full replacement of the destination file.
    pub fn install(&self, codes: &[String], platform_key: &str) -> Result<InstallReport> {
        let Some(platform) = self.manifest.platform(platform_key) else {
            eyre::bail!("unknown platform: {platform_key}");
        };

        let mut report = InstallReport::default();
        for code in codes {
            match self.install_module(code, platform)? {
                Some(path) => {
                    println!("  {} Created {}", "✓".green(), path.display());
                    report.written.push(path);
                }
                None => report.skipped.push(code.clone()),
            }
        }
        Ok(report)
    }

    /// Install one module for one platform. Returns the destination
    /// path on success, `None` when the module had nothing to install.
    fn install_module(&self, code: &str, platform: &PlatformRecord) -> Result<Option<PathBuf>> {
        let Some(module) = self.manifest.module(code) else {
            log::warn!("unknown module '{}', skipping", code);
            return Ok(None);
        };

        let agents_dir = PathBuf::from(&module.path).join("agents");
        let definition_path = agents_dir.join(format!("{code}.agent.yaml"));

        let document = match self.source.read(&definition_path) {
            Ok(text) => {
                let definition = extractor::extract(&text);
                let rendered = match render::render(&definition, platform) {
                    Ok(rendered) => rendered,
                    Err(RenderError::UnsupportedFormat(tag)) => {
                        log::warn!(
                            "platform '{}' has unsupported format '{}', skipping module '{}'",
                            platform.key,
                            tag,
                            code
                        );
                        return Ok(None);
                    }
                };
                // Keep a verbatim copy of the authored definition next
                // to the run record.
                let copy_path = Path::new("_lumi/agents").join(format!("{code}.agent.yaml"));
                self.sink
                    .write(&copy_path, &text)
                    .with_context(|| format!("Failed to write {}", copy_path.display()))?;
                rendered
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => match self.pre_authored(code, &agents_dir)? {
                Some(text) => {
                    let requirement = frontmatter::SchemaRequirement::for_platform(&platform.key);
                    frontmatter::adapt(&text, requirement, code, defaults::agent_description(code))
                }
                None => {
                    log::warn!("module '{}' has no agent definition and no built-in template", code);
                    return Ok(None);
                }
            },
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read agent definition: {}", definition_path.display()));
            }
        };

        let dest = PathBuf::from(&platform.folder).join(format!("lumi-{}{}", code, platform.extension));
        self.sink
            .write(&dest, &document)
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        Ok(Some(dest))
    }

    /// Resolve the pre-authored fallback for a module: a hand-written
    /// markdown document shipped alongside the module, or the built-in
    /// template for recognized agent codes.
    fn pre_authored(&self, code: &str, agents_dir: &Path) -> Result<Option<String>> {
        let authored_path = agents_dir.join(format!("{code}.md"));
        match self.source.read(&authored_path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Ok(defaults::agent_template(code).map(str::to_string))
            }
            Err(err) => {
                Err(err).with_context(|| format!("Failed to read agent document: {}", authored_path.display()))
            }
        }
    }
}
