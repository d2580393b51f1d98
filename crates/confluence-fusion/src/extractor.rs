//! CapabilityExtractor: structural facts from a raw analysis → capability tags.
//!
//! Every tag is `<facet>_<value>`. The facet prefix is fixed per category, so
//! facts from different categories never collide. Within a category, values
//! are normalized (lowercase, runs of non-alphanumerics collapsed to `_`), so
//! `"Event-Driven"` and `"event driven"` are the same fact.
//!
//! | Facet            | Raw analysis path                    |
//! |------------------|--------------------------------------|
//! | `filetype_`      | `file_structure.file_types`          |
//! | `pattern_`       | `code_patterns`                      |
//! | `arch_`          | `architecture.components`            |
//! | `style_`         | `architecture.style`                 |
//! | `dep_`           | `dependencies`                       |
//! | `integration_`   | `integration_points`                 |
//!
//! Collections may be JSON objects (keys are the facts) or arrays of strings.

use std::collections::BTreeSet;

use serde_json::Value;

use confluence_core::models::{ArchitectureSummary, RawAnalysis, Subsystem};

pub const FILETYPE_PREFIX: &str = "filetype";
pub const PATTERN_PREFIX: &str = "pattern";
pub const ARCH_PREFIX: &str = "arch";
pub const STYLE_PREFIX: &str = "style";
pub const DEP_PREFIX: &str = "dep";
pub const INTEGRATION_PREFIX: &str = "integration";

/// Stateless; kept as a type so the engine can hold one and tests can name it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapabilityExtractor;

impl CapabilityExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Capability tags for one subsystem. Reads `raw_analysis` only.
    pub fn extract(&self, subsystem: &Subsystem) -> BTreeSet<String> {
        self.extract_from(&subsystem.raw_analysis)
    }

    pub fn extract_from(&self, raw: &RawAnalysis) -> BTreeSet<String> {
        let mut tags = BTreeSet::new();

        let file_types = raw.get("file_structure").and_then(|fs| fs.get("file_types"));
        add_facet(&mut tags, FILETYPE_PREFIX, facts(file_types));
        add_facet(&mut tags, PATTERN_PREFIX, facts(raw.get("code_patterns")));

        let architecture = raw.get("architecture");
        add_facet(
            &mut tags,
            ARCH_PREFIX,
            facts(architecture.and_then(|a| a.get("components"))),
        );
        add_facet(&mut tags, STYLE_PREFIX, style_of(architecture));

        add_facet(&mut tags, DEP_PREFIX, facts(raw.get("dependencies")));
        add_facet(
            &mut tags,
            INTEGRATION_PREFIX,
            facts(raw.get("integration_points")),
        );
        tags
    }

    /// Fill `capability_set` (and an empty `architecture_summary`) from the
    /// subsystem's raw analysis.
    pub fn populate(&self, subsystem: &mut Subsystem) {
        subsystem.capability_set = self.extract(subsystem);
        if subsystem.architecture_summary == ArchitectureSummary::default() {
            subsystem.architecture_summary = self.summarize_architecture(&subsystem.raw_analysis);
        }
    }

    /// Style, component count, languages and interfaces from the same raw
    /// analysis the tags come from. Values are normalized like tag values.
    pub fn summarize_architecture(&self, raw: &RawAnalysis) -> ArchitectureSummary {
        let architecture = raw.get("architecture");
        let components = facts(architecture.and_then(|a| a.get("components")));

        let file_types = raw.get("file_structure").and_then(|fs| fs.get("file_types"));
        let languages = facts(file_types)
            .into_iter()
            .chain(facts(raw.get("languages")))
            .filter_map(|l| normalize(&l))
            .collect();

        ArchitectureSummary {
            style: style_of(architecture).into_iter().find_map(|s| normalize(&s)),
            component_count: components.iter().filter_map(|c| normalize(c)).count(),
            languages,
            interfaces: facts(raw.get("integration_points"))
                .into_iter()
                .filter_map(|i| normalize(&i))
                .collect(),
        }
    }
}

/// Lowercase, collapse each run of separators to one `_`, trim `_`.
/// Other symbols are spelled out in place (`C++` → `cplusplus`, `C#` →
/// `csharp`) so they never fold onto the bare name. `None` when nothing
/// but separators is left.
pub fn normalize(value: &str) -> Option<String> {
    let mut out = String::with_capacity(value.len());
    let mut pending_sep = false;
    for ch in value.chars() {
        if is_separator(ch) {
            pending_sep = true;
            continue;
        }
        if pending_sep && !out.is_empty() {
            out.push('_');
        }
        pending_sep = false;
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
        } else {
            push_symbol(&mut out, ch);
        }
    }
    (!out.is_empty()).then_some(out)
}

/// Characters that only separate words; spellings differing in these are
/// the same fact.
fn is_separator(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            '-' | '_' | '/' | '\\' | '.' | ',' | ':' | ';' | '|' | '(' | ')' | '[' | ']' | '{' | '}'
                | '\'' | '"'
        )
}

fn push_symbol(out: &mut String, ch: char) {
    let word = match ch {
        '+' => "plus",
        '#' => "sharp",
        '*' => "star",
        '@' => "at",
        '&' => "and",
        '%' => "percent",
        '$' => "dollar",
        '!' => "bang",
        '=' => "eq",
        '<' => "lt",
        '>' => "gt",
        '?' => "q",
        '^' => "caret",
        '~' => "tilde",
        _ => {
            out.push_str(&format!("u{:x}", ch as u32));
            return;
        }
    };
    out.push_str(word);
}

fn add_facet(tags: &mut BTreeSet<String>, prefix: &str, values: Vec<String>) {
    tags.extend(
        values
            .iter()
            .filter_map(|v| normalize(v))
            .map(|v| format!("{prefix}_{v}")),
    );
}

fn facts(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                // `{ "name": "..." }` entries
                Value::Object(obj) => obj.get("name").and_then(Value::as_str).map(str::to_string),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn style_of(architecture: Option<&Value>) -> Vec<String> {
    architecture
        .and_then(|a| a.get("style"))
        .and_then(Value::as_str)
        .map(|s| vec![s.to_string()])
        .unwrap_or_default()
}
