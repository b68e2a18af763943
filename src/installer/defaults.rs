//! Built-in agent documents
//!
//! Pre-authored fallbacks for the recognized agent codes, used when a
//! module ships no agent definition of its own. Held in a read-only
//! table built once at process start; the installer only ever reads it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

struct BuiltinAgent {
    description: &'static str,
    template: &'static str,
}

static BUILTINS: Lazy<HashMap<&'static str, BuiltinAgent>> = Lazy::new(|| {
    HashMap::from([
        (
            "docs",
            BuiltinAgent {
                description: "Generate technical documentation for the codebase",
                template: DOCS_TEMPLATE,
            },
        ),
        (
            "git",
            BuiltinAgent {
                description: "Git workflow helper with semantic commits",
                template: GIT_TEMPLATE,
            },
        ),
        (
            "review",
            BuiltinAgent {
                description: "Code review assistant with best practices",
                template: REVIEW_TEMPLATE,
            },
        ),
    ])
});

/// The built-in document for a recognized agent code.
pub fn agent_template(code: &str) -> Option<&'static str> {
    BUILTINS.get(code).map(|builtin| builtin.template)
}

/// Short description for a recognized agent code, with a generic
/// fallback for everything else.
pub fn agent_description(code: &str) -> &'static str {
    BUILTINS.get(code).map(|builtin| builtin.description).unwrap_or("Lumi Agent")
}

const DOCS_TEMPLATE: &str = r#"---
description: Generate technical documentation for the codebase
trigger: "generate docs" | "document this" | "create documentation"
---

# Lumi Agent - Documentation Generator

## Purpose
Analyze the codebase and generate comprehensive technical documentation.

## Instructions

1. **Scan Project Structure**
   - List all source files
   - Identify tech stack and frameworks
   - Map dependencies

2. **Generate Documentation**
   - Create architecture overview
   - Document each component
   - Generate API documentation
   - Create flow diagrams (Mermaid)

3. **Output**
   - Save docs to `docs/` folder
   - Include README updates
   - Generate table of contents
"#;

const GIT_TEMPLATE: &str = r#"---
description: Git workflow helper with semantic commits
trigger: "commit" | "create pr" | "git help"
---

# Lumi Agent - Git Workflow

## Purpose
Assist with Git operations using best practices.

## Instructions

### Semantic Commits
Generate commit messages following conventional commits:
- `feat:` New feature
- `fix:` Bug fix
- `docs:` Documentation
- `style:` Formatting
- `refactor:` Code restructuring
- `test:` Adding tests
- `chore:` Maintenance

### PR Description
Generate detailed PR descriptions with:
- Summary of changes
- Related issues
- Testing performed
- Screenshots (if UI)
"#;

const REVIEW_TEMPLATE: &str = r#"---
description: Code review assistant with best practices
trigger: "review code" | "check this" | "code review"
---

# Lumi Agent - Code Review

## Purpose
Perform thorough code reviews following best practices.

## Review Checklist

### 1. Code Quality
- [ ] Clean, readable code
- [ ] Proper naming conventions
- [ ] No code duplication
- [ ] Appropriate comments

### 2. Security
- [ ] Input validation
- [ ] No hardcoded secrets
- [ ] Proper authentication
- [ ] SQL injection prevention

### 3. Performance
- [ ] No N+1 queries
- [ ] Efficient algorithms
- [ ] Proper caching
- [ ] Memory management

### 4. Testing
- [ ] Unit tests included
- [ ] Edge cases covered
- [ ] Integration tests
"#;
