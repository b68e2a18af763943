//! Agent definition model
//!
//! An agent definition document carries three top-level sections:
//! `metadata:` (name/title/icon), `persona:` (role/identity/principles),
//! and `menu:` (trigger/description command entries). The extractor
//! turns that text into the structured form the renderers consume.

pub mod extractor;

/// Placeholder icon for definitions that do not declare one.
pub const DEFAULT_ICON: &str = "🌟";
pub const DEFAULT_NAME: &str = "Lumi Agent";
pub const DEFAULT_ROLE: &str = "AI Assistant";

/// The structured result of extracting one agent document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDefinition {
    pub metadata: Metadata,
    pub persona: Persona,
    pub menu: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub name: String,
    pub title: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub role: String,
    pub identity: String,
    /// Kept in document order.
    pub principles: Vec<String>,
}

/// One command entry. Triggers are unique within a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub trigger: String,
    pub description: String,
}

impl Default for AgentDefinition {
    fn default() -> Self {
        Self {
            metadata: Metadata {
                name: DEFAULT_NAME.to_string(),
                title: DEFAULT_NAME.to_string(),
                icon: DEFAULT_ICON.to_string(),
            },
            persona: Persona {
                role: DEFAULT_ROLE.to_string(),
                identity: String::new(),
                principles: Vec::new(),
            },
            menu: Vec::new(),
        }
    }
}

impl AgentDefinition {
    /// Invocation slug: the agent name lower-cased with spaces
    /// hyphenated.
    pub fn trigger_slug(&self) -> String {
        self.metadata.name.to_lowercase().replace(' ', "-")
    }
}
