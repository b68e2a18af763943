//! Platform rendering
//!
//! Turns a structured agent definition into the document a platform
//! expects. Rendering is a pure function of (definition, platform):
//! no timestamps, no unstable ordering, no randomness, so re-running
//! an install with unchanged inputs reproduces byte-identical output.

pub mod frontmatter;
mod markdown;
mod toml;

use thiserror::Error;

use crate::agent::AgentDefinition;
use crate::manifest::PlatformRecord;

/// Output formats the renderer knows how to produce. Adding a format
/// means extending this enum and every match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFormat {
    Markdown,
    Toml,
}

impl PlatformFormat {
    /// Resolve a manifest format tag. An unknown tag is an error scoped
    /// to the one platform carrying it; other platforms in the same run
    /// are unaffected.
    pub fn from_tag(tag: &str) -> Result<Self, RenderError> {
        match tag {
            "markdown" => Ok(Self::Markdown),
            "toml" => Ok(Self::Toml),
            other => Err(RenderError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unsupported platform format: {0}")]
    UnsupportedFormat(String),
}

/// Render a definition as the installable document for one platform.
pub fn render(definition: &AgentDefinition, platform: &PlatformRecord) -> Result<String, RenderError> {
    match PlatformFormat::from_tag(&platform.format)? {
        PlatformFormat::Markdown => Ok(markdown::render(definition)),
        PlatformFormat::Toml => Ok(toml::render(definition)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{MenuItem, Metadata, Persona};

    fn docs_helper() -> AgentDefinition {
        AgentDefinition {
            metadata: Metadata {
                name: "Docs Helper".to_string(),
                title: "Docs Helper".to_string(),
                icon: "🌟".to_string(),
            },
            persona: Persona {
                role: "Documentation Specialist".to_string(),
                identity: "I document things.".to_string(),
                principles: vec!["Be concise".to_string(), "Cite sources".to_string()],
            },
            menu: vec![MenuItem {
                trigger: "summarize".to_string(),
                description: "Summarize the repo".to_string(),
            }],
        }
    }

    fn platform(format: &str) -> PlatformRecord {
        PlatformRecord {
            key: "test".to_string(),
            name: "Test".to_string(),
            folder: ".test/commands/".to_string(),
            extension: ".md".to_string(),
            format: format.to_string(),
        }
    }

    #[test]
    fn test_markdown_end_to_end() {
        let output = render(&docs_helper(), &platform("markdown")).unwrap();
        assert!(output.starts_with("---\n"));
        assert!(output.contains("trigger: \"docs-helper\" | \"lumi docs-helper\""));
        assert!(output.contains("You are a **Documentation Specialist**."));

        let principles = output.find("## PRINCIPLES").unwrap();
        let concise = output.find("- Be concise").unwrap();
        let cite = output.find("- Cite sources").unwrap();
        assert!(principles < concise && concise < cite);

        assert!(output.contains("## COMMANDS"));
        assert!(output.contains("| `summarize` | Summarize the repo |"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let definition = docs_helper();
        let platform = platform("markdown");
        let first = render(&definition, &platform).unwrap();
        let second = render(&definition, &platform).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_toml_omits_principles_and_menu() {
        let definition = docs_helper();
        assert!(!definition.persona.principles.is_empty());
        assert!(!definition.menu.is_empty());

        let output = render(&definition, &platform("toml")).unwrap();
        assert!(output.contains("description = \"🌟 Docs Helper\""));
        assert!(output.contains("You are a **Documentation Specialist**."));
        assert!(!output.contains("PRINCIPLES"));
        assert!(!output.contains("Be concise"));
        assert!(!output.contains("summarize"));
    }

    #[test]
    fn test_unsupported_format_is_scoped_error() {
        let err = render(&docs_helper(), &platform("xml")).unwrap_err();
        assert_eq!(err, RenderError::UnsupportedFormat("xml".to_string()));
    }

    #[test]
    fn test_format_tag_resolution() {
        assert_eq!(PlatformFormat::from_tag("markdown").unwrap(), PlatformFormat::Markdown);
        assert_eq!(PlatformFormat::from_tag("toml").unwrap(), PlatformFormat::Toml);
        assert!(PlatformFormat::from_tag("Markdown").is_err());
    }
}
