//! Frontmatter adaptation for pre-authored documents
//!
//! Hand-authored agent documents skip the extract/render cycle; they
//! only need the target platform's minimum frontmatter schema patched
//! in. The adapter preserves the author's prose verbatim and is
//! idempotent: reapplying it to its own output returns the text
//! unchanged.

/// Frontmatter delimiter line.
const DELIMITER: &str = "---";

/// Minimum frontmatter schema a platform imposes on installed
/// documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaRequirement {
    /// Document must open with a frontmatter block (.mdc rules).
    FrontmatterBlock,
    /// Existing frontmatter must carry a `trigger:` field (skills).
    TriggerField,
    /// Plain markdown, nothing to patch.
    None,
}

impl SchemaRequirement {
    /// The schema requirement a platform key imposes.
    pub fn for_platform(key: &str) -> Self {
        match key {
            "cursor" => Self::FrontmatterBlock,
            "antigravity" => Self::TriggerField,
            _ => Self::None,
        }
    }
}

/// Patch a pre-authored document to satisfy a platform's schema,
/// leaving the body untouched. Structurally unrecognized input is a
/// no-op, not an error.
pub fn adapt(doc: &str, requirement: SchemaRequirement, agent: &str, description: &str) -> String {
    match requirement {
        SchemaRequirement::FrontmatterBlock => ensure_frontmatter(doc, description),
        SchemaRequirement::TriggerField => ensure_trigger(doc, agent),
        SchemaRequirement::None => doc.to_string(),
    }
}

/// Prepend a minimal frontmatter block unless the document already
/// opens with one.
fn ensure_frontmatter(doc: &str, description: &str) -> String {
    if doc.starts_with(DELIMITER) {
        return doc.to_string();
    }
    format!("---\ndescription: {description}\nglobs: \nalwaysApply: false\n---\n\n{doc}")
}

/// Insert a `trigger:` line immediately before the closing delimiter of
/// an existing frontmatter block, as a new line sequence. A document
/// whose first line is not the opening delimiter, or whose block never
/// closes, comes back unchanged.
fn ensure_trigger(doc: &str, agent: &str) -> String {
    let lines: Vec<&str> = doc.lines().collect();
    if lines.first() != Some(&DELIMITER) {
        return doc.to_string();
    }
    let Some(close) = lines[1..].iter().position(|line| *line == DELIMITER).map(|i| i + 1) else {
        return doc.to_string();
    };
    if lines[1..close].iter().any(|line| line.starts_with("trigger:")) {
        return doc.to_string();
    }

    let trigger = format!("trigger: \"{agent}\" | \"lumi {agent}\"");
    let mut patched: Vec<&str> = Vec::with_capacity(lines.len() + 1);
    patched.extend_from_slice(&lines[..close]);
    patched.push(&trigger);
    patched.extend_from_slice(&lines[close..]);

    let mut out = patched.join("\n");
    if doc.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHORED: &str = "# Docs Agent\n\nAnalyze the codebase and write documentation.\n";

    const WITH_FRONTMATTER: &str = "\
---
description: Docs agent
---

# Docs Agent

Analyze the codebase.
";

    #[test]
    fn test_requirement_for_platform() {
        assert_eq!(SchemaRequirement::for_platform("cursor"), SchemaRequirement::FrontmatterBlock);
        assert_eq!(
            SchemaRequirement::for_platform("antigravity"),
            SchemaRequirement::TriggerField
        );
        assert_eq!(SchemaRequirement::for_platform("claude"), SchemaRequirement::None);
        assert_eq!(SchemaRequirement::for_platform("codex"), SchemaRequirement::None);
    }

    #[test]
    fn test_no_requirement_returns_input_unchanged() {
        assert_eq!(adapt(AUTHORED, SchemaRequirement::None, "docs", "Docs agent"), AUTHORED);
    }

    #[test]
    fn test_prepends_frontmatter_when_missing() {
        let adapted = adapt(AUTHORED, SchemaRequirement::FrontmatterBlock, "docs", "Docs agent");
        assert!(adapted.starts_with("---\ndescription: Docs agent\n"));
        assert!(adapted.contains("alwaysApply: false"));
        assert!(adapted.ends_with(AUTHORED));
    }

    #[test]
    fn test_existing_frontmatter_left_alone() {
        let adapted = adapt(WITH_FRONTMATTER, SchemaRequirement::FrontmatterBlock, "docs", "other");
        assert_eq!(adapted, WITH_FRONTMATTER);
    }

    #[test]
    fn test_inserts_trigger_before_closing_delimiter() {
        let adapted = adapt(WITH_FRONTMATTER, SchemaRequirement::TriggerField, "docs", "");
        let lines: Vec<&str> = adapted.lines().collect();
        assert_eq!(lines[0], "---");
        assert_eq!(lines[1], "description: Docs agent");
        assert_eq!(lines[2], "trigger: \"docs\" | \"lumi docs\"");
        assert_eq!(lines[3], "---");
        // Body preserved verbatim.
        assert!(adapted.ends_with("# Docs Agent\n\nAnalyze the codebase.\n"));
    }

    #[test]
    fn test_existing_trigger_left_alone() {
        let doc = "---\ntrigger: \"x\" | \"lumi x\"\n---\nbody\n";
        assert_eq!(adapt(doc, SchemaRequirement::TriggerField, "docs", ""), doc);
    }

    #[test]
    fn test_unrecognized_structure_is_noop() {
        // Opening delimiter is not the first line.
        let doc = "# Heading first\n---\ndescription: x\n---\n";
        assert_eq!(adapt(doc, SchemaRequirement::TriggerField, "docs", ""), doc);

        // No closing delimiter.
        let unclosed = "---\ndescription: x\nbody without close\n";
        assert_eq!(adapt(unclosed, SchemaRequirement::TriggerField, "docs", ""), unclosed);

        // Plain prose with no frontmatter at all.
        assert_eq!(adapt(AUTHORED, SchemaRequirement::TriggerField, "docs", ""), AUTHORED);
    }

    #[test]
    fn test_adapt_is_idempotent_for_every_requirement() {
        let requirements = [
            SchemaRequirement::FrontmatterBlock,
            SchemaRequirement::TriggerField,
            SchemaRequirement::None,
        ];
        for requirement in requirements {
            for doc in [AUTHORED, WITH_FRONTMATTER, "", "---\n"] {
                let once = adapt(doc, requirement, "docs", "Docs agent");
                let twice = adapt(&once, requirement, "docs", "Docs agent");
                assert_eq!(once, twice, "adapt not idempotent for {requirement:?} on {doc:?}");
            }
        }
    }

    #[test]
    fn test_trailing_newline_preserved() {
        let adapted = adapt(WITH_FRONTMATTER, SchemaRequirement::TriggerField, "docs", "");
        assert!(adapted.ends_with('\n'));

        let no_newline = "---\ndescription: x\n---";
        let adapted = adapt(no_newline, SchemaRequirement::TriggerField, "docs", "");
        assert!(!adapted.ends_with('\n'));
        assert_eq!(adapted, "---\ndescription: x\ntrigger: \"docs\" | \"lumi docs\"\n---");
    }
}
