//! Markdown + frontmatter output
//!
//! The default document shape: a frontmatter block carrying the
//! description and invocation triggers, then the persona body with
//! optional PRINCIPLES and COMMANDS sections.

use crate::agent::AgentDefinition;

pub fn render(definition: &AgentDefinition) -> String {
    let metadata = &definition.metadata;
    let persona = &definition.persona;
    let slug = definition.trigger_slug();

    let mut out = format!(
        "---\n\
         description: {description}\n\
         trigger: \"{slug}\" | \"lumi {slug}\"\n\
         ---\n\
         \n\
         # {icon} {name}\n\
         \n\
         ## YOUR ROLE\n\
         You are a **{role}**.\n\
         \n\
         {identity}\n\
         \n",
        description = metadata.title,
        slug = slug,
        icon = metadata.icon,
        name = metadata.name,
        role = persona.role,
        identity = persona.identity,
    );

    if !persona.principles.is_empty() {
        out.push_str("## PRINCIPLES\n");
        for principle in &persona.principles {
            out.push_str("- ");
            out.push_str(principle);
            out.push('\n');
        }
        out.push('\n');
    }

    if !definition.menu.is_empty() {
        out.push_str("## COMMANDS\n");
        out.push_str("| Trigger | Description |\n");
        out.push_str("|---------|-------------|\n");
        for item in &definition.menu {
            out.push_str(&format!("| `{}` | {} |\n", item.trigger, item.description));
        }
        out.push('\n');
    }

    out
}
