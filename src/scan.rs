//! Tolerant line scanner for loosely structured documents
//!
//! The manifest registry and agent definition files share a small
//! YAML-shaped subset: unindented `identifier:` headers open top-level
//! sections, and a section body is indented `key: value` scalars,
//! `key:` lists, or `- item` entries. Scanning is two-phase: segment
//! the document by headers first, then classify lines inside a span.
//!
//! Nothing here ever fails. Missing structure degrades to empty spans
//! and absent fields so that one broken record cannot block the rest.

use indexmap::IndexMap;
use lazy_regex::regex_captures;
use std::ops::Range;

/// A document segmented into top-level named sections.
pub struct Sections<'a> {
    lines: Vec<&'a str>,
    spans: IndexMap<&'a str, Range<usize>>,
}

impl<'a> Sections<'a> {
    /// Segment a document by unindented `identifier:` header lines.
    ///
    /// A section's span runs from just after its header up to the next
    /// header or end of document. The first occurrence of a header name
    /// wins; later duplicates are ignored.
    pub fn parse(text: &'a str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let mut spans: IndexMap<&str, Range<usize>> = IndexMap::new();
        let mut open: Option<(&str, usize)> = None;

        for (idx, line) in lines.iter().copied().enumerate() {
            if let Some((_, name)) = regex_captures!(r"^([A-Za-z_][A-Za-z0-9_-]*):\s*$", line) {
                if let Some((prev, start)) = open.take() {
                    spans.entry(prev).or_insert(start..idx);
                }
                open = Some((name, idx + 1));
            }
        }
        if let Some((prev, start)) = open {
            spans.entry(prev).or_insert(start..lines.len());
        }

        Self { lines, spans }
    }

    /// The lines belonging to a section, or an empty slice if the
    /// section is absent from the document.
    pub fn span(&self, name: &str) -> &[&'a str] {
        self.spans
            .get(name)
            .map(|range| &self.lines[range.clone()])
            .unwrap_or(&[])
    }
}

/// Extract the first `key: value` scalar in a span.
///
/// Values may be single- or double-quoted; quotes are stripped. The
/// value capture ends at the first colon or quote, so a quoted value
/// containing a colon comes back truncated at that colon. Bare `key:`
/// lines open lists and are not scalar matches.
pub fn scalar(span: &[&str], key: &str) -> Option<String> {
    for &line in span {
        let Some((_, found, rest)) = field_line(line) else {
            continue;
        };
        if found != key {
            continue;
        }
        let value = scalar_value(rest);
        if !value.is_empty() {
            return Some(value);
        }
    }
    None
}

/// Extract a `key:` list: the `- item` lines following a bare `key:`
/// line, up to the next field line in the span. Item quotes are
/// stripped; blank lines do not close the list.
pub fn list(span: &[&str], key: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut in_list = false;

    for &line in span {
        if let Some((_, item)) = regex_captures!(r"^\s*-\s*(.*)$", line) {
            if in_list {
                let value = strip_quotes(item.trim());
                if !value.is_empty() {
                    items.push(value.to_string());
                }
            }
            continue;
        }
        if let Some((_, found, rest)) = field_line(line) {
            if in_list {
                break;
            }
            in_list = found == key && rest.trim().is_empty();
        }
    }

    items
}

/// One block of a span opened by a `- marker:` list-item line.
pub struct Block<'a> {
    /// Scalar value carried on the marker line itself.
    pub lead: String,
    /// Lines after the marker, up to the next marker or end of span.
    pub lines: Vec<&'a str>,
}

/// Split a span into blocks opened by `- marker:` list-item lines.
/// Lines before the first marker have no block to belong to and are
/// dropped.
pub fn blocks<'a>(span: &[&'a str], marker: &str) -> Vec<Block<'a>> {
    let mut out: Vec<Block<'a>> = Vec::new();

    for &line in span {
        if let Some((_, found, rest)) =
            regex_captures!(r"^\s*-\s*([A-Za-z_][A-Za-z0-9_-]*):\s*(.*)$", line)
            && found == marker
        {
            out.push(Block {
                lead: scalar_value(rest),
                lines: Vec::new(),
            });
            continue;
        }
        if let Some(block) = out.last_mut() {
            block.lines.push(line);
        }
    }

    out
}

/// Match a `key:` or `key: value` field line, returning key and raw rest.
fn field_line<'a>(line: &'a str) -> Option<(&'a str, &'a str, &'a str)> {
    regex_captures!(r"^\s*([A-Za-z_][A-Za-z0-9_-]*):\s*(.*)$", line)
}

/// Clean a raw scalar: trim, drop a leading quote, capture up to the
/// first colon or quote.
fn scalar_value(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw
        .strip_prefix('"')
        .or_else(|| raw.strip_prefix('\''))
        .unwrap_or(raw);
    let end = raw.find([':', '"', '\'']).unwrap_or(raw.len());
    raw[..end].trim().to_string()
}

/// Strip one layer of surrounding single or double quotes.
pub fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix('"').or_else(|| s.strip_prefix('\'')).unwrap_or(s);
    s.strip_suffix('"').or_else(|| s.strip_suffix('\'')).unwrap_or(s)
}
