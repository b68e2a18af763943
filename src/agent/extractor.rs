//! Agent definition extraction
//!
//! Two-phase extraction over an agent document: segment the top-level
//! sections, then pull scalar and list fields out of each span.
//! Extraction never fails; anything missing falls back to its default,
//! so a sparse or partially malformed definition still installs.

use crate::scan::{self, Sections};

use super::{AgentDefinition, DEFAULT_ICON, DEFAULT_NAME, DEFAULT_ROLE, Metadata, MenuItem, Persona};

/// Extract a structured definition from raw agent text.
pub fn extract(text: &str) -> AgentDefinition {
    let sections = Sections::parse(text);
    let metadata = sections.span("metadata");
    let persona = sections.span("persona");
    let menu = sections.span("menu");

    let name = scan::scalar(metadata, "name").unwrap_or_else(|| DEFAULT_NAME.to_string());
    let title = scan::scalar(metadata, "title").unwrap_or_else(|| name.clone());
    let icon = scan::scalar(metadata, "icon").unwrap_or_else(|| DEFAULT_ICON.to_string());

    AgentDefinition {
        metadata: Metadata { name, title, icon },
        persona: Persona {
            role: scan::scalar(persona, "role").unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            identity: scan::scalar(persona, "identity").unwrap_or_default(),
            principles: scan::list(persona, "principles"),
        },
        menu: parse_menu(menu),
    }
}

/// Parse the menu span. Each `- trigger:` marker opens one item whose
/// span runs to the next marker; the description is the first
/// `description:` scalar inside that span, defaulting to the trigger.
/// Content before the first marker has no item to belong to and is
/// dropped. Duplicate triggers keep the first item.
fn parse_menu(span: &[&str]) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = Vec::new();

    for block in scan::blocks(span, "trigger") {
        let trigger = match block.lead.split_whitespace().next() {
            Some(token) => token.to_string(),
            None => continue,
        };
        if items.iter().any(|item| item.trigger == trigger) {
            log::debug!("duplicate menu trigger '{}' ignored", trigger);
            continue;
        }
        let description = scan::scalar(&block.lines, "description").unwrap_or_else(|| trigger.clone());
        items.push(MenuItem { trigger, description });
    }

    if items.is_empty() && span.iter().any(|line| !line.trim().is_empty()) {
        log::debug!("menu section present but no `- trigger:` entries found");
    }

    items
}
