//! TOML-style output
//!
//! Carries only the description scalar and a role/identity prompt
//! block. Principles and menu entries have no representation in this
//! format; that is a deliberate format limitation, not a rendering gap.

use crate::agent::AgentDefinition;

pub fn render(definition: &AgentDefinition) -> String {
    let metadata = &definition.metadata;
    let persona = &definition.persona;

    let mut prompt = format!(
        "# {name}\n\n## YOUR ROLE\nYou are a **{role}**.\n\n",
        name = metadata.name,
        role = persona.role,
    );
    if !persona.identity.is_empty() {
        prompt.push_str(&persona.identity);
        prompt.push_str("\n\n");
    }

    format!(
        "description = \"{icon} {title}\"\n\nprompt = \"\"\"\n{prompt}\"\"\"\n",
        icon = metadata.icon,
        title = metadata.title,
        prompt = prompt,
    )
}
