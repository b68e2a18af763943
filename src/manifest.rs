//! Manifest registry parsing
//!
//! The registry document lists installable modules and target platforms:
//!
//! ```yaml
//! modules:
//!   - code: docs
//!     name: "Documentation Generator"
//!     path: "modules/docs"
//!
//! platforms:
//!   claude:
//!     name: "Claude Code"
//!     folder: ".claude/commands/"
//!     extension: ".md"
//!     format: markdown
//! ```
//!
//! Parsing is tolerant by design: a missing or malformed section yields
//! an empty collection, and per-record fields fall back to documented
//! defaults, so a partially broken registry still installs the entries
//! that are well-formed.

use indexmap::IndexMap;
use lazy_regex::regex_captures;
use serde::Serialize;

use crate::scan::{self, Sections};

/// The static registry of installable modules and target platforms.
/// Read-only once parsed.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub modules: Vec<ModuleRecord>,
    pub platforms: IndexMap<String, PlatformRecord>,
}

/// One installable module from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRecord {
    pub code: String,
    pub name: String,
    /// Module source directory, relative to the modules root.
    pub path: String,
}

/// One target platform from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformRecord {
    pub key: String,
    pub name: String,
    /// Destination directory, relative to the project root.
    pub folder: String,
    pub extension: String,
    /// Raw format tag; resolved by the renderer.
    pub format: String,
}

impl Manifest {
    /// Parse the registry text. Never fails: malformed sections come
    /// back empty rather than aborting.
    pub fn parse(text: &str) -> Self {
        let sections = Sections::parse(text);
        Self {
            modules: parse_modules(sections.span("modules")),
            platforms: parse_platforms(sections.span("platforms")),
        }
    }

    /// Look up a module by code. Absence is a normal outcome.
    pub fn module(&self, code: &str) -> Option<&ModuleRecord> {
        self.modules.iter().find(|m| m.code == code)
    }

    /// Look up a platform by key. Absence is a normal outcome.
    pub fn platform(&self, key: &str) -> Option<&PlatformRecord> {
        self.platforms.get(key)
    }
}

/// Module records are opened by `- code:` list-marker lines. Records
/// without a code are dropped; duplicate codes keep the first record.
fn parse_modules(span: &[&str]) -> Vec<ModuleRecord> {
    let mut modules: Vec<ModuleRecord> = Vec::new();

    for block in scan::blocks(span, "code") {
        let code = match block.lead.split_whitespace().next() {
            Some(token) => token.to_string(),
            None => continue,
        };
        if modules.iter().any(|m| m.code == code) {
            log::debug!("duplicate module code '{}' ignored", code);
            continue;
        }
        modules.push(ModuleRecord {
            name: scan::scalar(&block.lines, "name").unwrap_or_else(|| code.clone()),
            path: scan::scalar(&block.lines, "path").unwrap_or_else(|| format!("modules/{code}")),
            code,
        });
    }

    modules
}

/// Platform records are opened by indented `key:` header lines sitting
/// at the shallowest header indentation in the span. Duplicate keys
/// keep the first record.
fn parse_platforms(span: &[&str]) -> IndexMap<String, PlatformRecord> {
    let mut platforms = IndexMap::new();

    let header_indent = span
        .iter()
        .filter_map(|&line| platform_header(line).map(|(indent, _)| indent))
        .min();
    let Some(header_indent) = header_indent else {
        return platforms;
    };

    let mut current: Option<(String, Vec<&str>)> = None;
    for &line in span {
        if let Some((indent, key)) = platform_header(line)
            && indent == header_indent
        {
            if let Some((key, lines)) = current.take() {
                insert_platform(&mut platforms, key, &lines);
            }
            current = Some((key.to_string(), Vec::new()));
            continue;
        }
        if let Some((_, lines)) = current.as_mut() {
            lines.push(line);
        }
    }
    if let Some((key, lines)) = current.take() {
        insert_platform(&mut platforms, key, &lines);
    }

    platforms
}

/// Match an indented bare `key:` line, returning (indent width, key).
fn platform_header(line: &str) -> Option<(usize, &str)> {
    regex_captures!(r"^(\s+)([A-Za-z_][A-Za-z0-9_-]*):\s*$", line).map(|(_, ws, key)| (ws.len(), key))
}

fn insert_platform(platforms: &mut IndexMap<String, PlatformRecord>, key: String, lines: &[&str]) {
    if platforms.contains_key(&key) {
        log::debug!("duplicate platform key '{}' ignored", key);
        return;
    }
    let record = PlatformRecord {
        name: scan::scalar(lines, "name").unwrap_or_else(|| key.clone()),
        folder: scan::scalar(lines, "folder").unwrap_or_else(|| format!(".{key}/commands/")),
        extension: scan::scalar(lines, "extension").unwrap_or_else(|| ".md".to_string()),
        format: scan::scalar(lines, "format").unwrap_or_else(|| "markdown".to_string()),
        key: key.clone(),
    };
    platforms.insert(key, record);
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: &str = r#"
modules:
  - code: docs
    name: "Documentation Generator"
    path: "modules/docs"
  - code: git
  - code: docs
    name: "Duplicate entry"

platforms:
  claude:
    name: "Claude Code"
    folder: ".claude/commands/"
    extension: ".md"
    format: markdown
  gemini:
    name: "Gemini CLI"
    folder: ".gemini/commands/"
    extension: ".toml"
    format: toml
  sparse:
"#;

    #[test]
    fn test_parse_modules() {
        let manifest = Manifest::parse(REGISTRY);
        assert_eq!(manifest.modules.len(), 2);
        assert_eq!(manifest.modules[0].code, "docs");
        assert_eq!(manifest.modules[0].name, "Documentation Generator");
        assert_eq!(manifest.modules[0].path, "modules/docs");
    }

    #[test]
    fn test_module_field_defaults() {
        let manifest = Manifest::parse(REGISTRY);
        let git = manifest.module("git").unwrap();
        assert_eq!(git.name, "git");
        assert_eq!(git.path, "modules/git");
    }

    #[test]
    fn test_duplicate_module_code_first_wins() {
        let manifest = Manifest::parse(REGISTRY);
        assert_eq!(manifest.module("docs").unwrap().name, "Documentation Generator");
    }

    #[test]
    fn test_parse_platforms() {
        let manifest = Manifest::parse(REGISTRY);
        assert_eq!(manifest.platforms.len(), 3);
        let claude = manifest.platform("claude").unwrap();
        assert_eq!(claude.key, "claude");
        assert_eq!(claude.name, "Claude Code");
        assert_eq!(claude.folder, ".claude/commands/");
        assert_eq!(claude.extension, ".md");
        assert_eq!(claude.format, "markdown");
        assert_eq!(manifest.platform("gemini").unwrap().format, "toml");
    }

    #[test]
    fn test_platform_field_defaults() {
        let manifest = Manifest::parse(REGISTRY);
        let sparse = manifest.platform("sparse").unwrap();
        assert_eq!(sparse.name, "sparse");
        assert_eq!(sparse.folder, ".sparse/commands/");
        assert_eq!(sparse.extension, ".md");
        assert_eq!(sparse.format, "markdown");
    }

    #[test]
    fn test_platform_order_preserved() {
        let manifest = Manifest::parse(REGISTRY);
        let keys: Vec<_> = manifest.platforms.keys().collect();
        assert_eq!(keys, vec!["claude", "gemini", "sparse"]);
    }

    #[test]
    fn test_unknown_platform_lookup_is_none() {
        let manifest = Manifest::parse(REGISTRY);
        assert!(manifest.platform("cursor").is_none());
    }

    #[test]
    fn test_unknown_module_lookup_is_none() {
        let manifest = Manifest::parse(REGISTRY);
        assert!(manifest.module("missing").is_none());
    }

    #[test]
    fn test_missing_sections_yield_empty_collections() {
        let manifest = Manifest::parse("modules:\n  - code: docs\n");
        assert_eq!(manifest.modules.len(), 1);
        assert!(manifest.platforms.is_empty());

        let manifest = Manifest::parse("platforms:\n  claude:\n");
        assert!(manifest.modules.is_empty());
        assert_eq!(manifest.platforms.len(), 1);
    }

    #[test]
    fn test_garbage_input_never_fails() {
        let manifest = Manifest::parse("::: not a manifest\n\t\tat all");
        assert!(manifest.modules.is_empty());
        assert!(manifest.platforms.is_empty());

        let manifest = Manifest::parse("");
        assert!(manifest.modules.is_empty());
        assert!(manifest.platforms.is_empty());
    }
}
