//! Catalog doctor — diagnostics for module definitions
//!
//! Lints a raw `modules.toml` definition and reports every problem at once,
//! unlike loading, which stops at the first invariant violation. Findings
//! are grouped as errors (catalog will not load), warnings (navigation
//! will misbehave) and info (suggestions).

use std::collections::HashMap;

use crate::catalog::ModuleRecord;

/// Descriptions longer than this get cut off on navigation cards
const MAX_CARD_DESCRIPTION: usize = 160;

/// Severity level for a diagnostic finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Must fix — the catalog will not load
    Error,
    /// Should fix — widgets will render poorly
    Warning,
    /// Suggestion — informational improvement
    Info,
}

/// A single diagnostic finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Severity of the finding
    pub severity: Severity,
    /// Short code for the finding (e.g., "M001")
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Suggested fix (optional)
    pub suggestion: Option<String>,
}

impl Finding {
    fn new(severity: Severity, code: &str, message: String, suggestion: Option<String>) -> Self {
        Self {
            severity,
            code: code.to_string(),
            message,
            suggestion,
        }
    }
}

/// Diagnostic report from `modnav doctor`
#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    /// All findings, in order of severity (errors first)
    pub findings: Vec<Finding>,
}

impl DiagnosticReport {
    /// Returns true if the report has no findings at all
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns the number of errors
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Returns the number of warnings
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Returns the number of info items
    #[must_use]
    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }
}

/// Run all diagnostic checks and return a report.
#[must_use]
pub fn diagnose(modules: &[ModuleRecord]) -> DiagnosticReport {
    let mut findings = Vec::new();

    check_required_fields(modules, &mut findings);
    check_link_format(modules, &mut findings);
    check_duplicates(modules, &mut findings);
    check_catalog_size(modules, &mut findings);
    check_descriptions(modules, &mut findings);

    // Stable sort keeps definition order within a severity
    findings.sort_by_key(|f| f.severity);

    DiagnosticReport { findings }
}

/// Label for a record in messages, falling back to its position
fn label(index: usize, module: &ModuleRecord) -> String {
    if module.name.trim().is_empty() {
        format!("#{}", index + 1)
    } else {
        format!("'{}'", module.name)
    }
}

/// M001: Every field must be filled in
fn check_required_fields(modules: &[ModuleRecord], findings: &mut Vec<Finding>) {
    for (index, module) in modules.iter().enumerate() {
        let missing: Vec<&str> = [
            ("name", &module.name),
            ("description", &module.description),
            ("link", &module.link),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect();

        if !missing.is_empty() {
            findings.push(Finding::new(
                Severity::Error,
                "M001",
                format!(
                    "Module {} is missing: {}",
                    label(index, module),
                    missing.join(", ")
                ),
                Some("Fill in name, description and link for every [[module]]".to_string()),
            ));
        }
    }
}

/// M002/M003: Links must be paths, and should be canonical
fn check_link_format(modules: &[ModuleRecord], findings: &mut Vec<Finding>) {
    for (index, module) in modules.iter().enumerate() {
        let link = module.link.as_str();
        if link.trim().is_empty() {
            continue;
        }

        if !link.starts_with('/') {
            findings.push(Finding::new(
                Severity::Error,
                "M002",
                format!("Module {} has link '{link}' which is not a path", label(index, module)),
                Some(format!("Use '/{}'", link.trim_start_matches('/'))),
            ));
            continue;
        }

        let trailing_slash = link.len() > 1 && link.ends_with('/');
        let uppercase = link.chars().any(|c| c.is_ascii_uppercase());
        let whitespace = link.chars().any(char::is_whitespace);
        if trailing_slash || uppercase || whitespace {
            let canonical = link
                .trim_end_matches('/')
                .to_ascii_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-");
            findings.push(Finding::new(
                Severity::Warning,
                "M003",
                format!(
                    "Module {} has non-canonical link '{link}'; pages reference links verbatim",
                    label(index, module)
                ),
                Some(format!("Use '{canonical}'")),
            ));
        }
    }
}

/// M004/M005/M006: Links and names must be unique
fn check_duplicates(modules: &[ModuleRecord], findings: &mut Vec<Finding>) {
    let mut links: HashMap<&str, usize> = HashMap::new();
    let mut names: HashMap<&str, usize> = HashMap::new();
    let mut folded_names: HashMap<String, &str> = HashMap::new();

    for module in modules {
        if !module.link.trim().is_empty() {
            *links.entry(module.link.as_str()).or_insert(0) += 1;
        }
        if !module.name.trim().is_empty() {
            *names.entry(module.name.as_str()).or_insert(0) += 1;
        }
    }

    // Report in definition order, once per value
    for module in modules {
        if let Some(count) = links.remove(module.link.as_str()).filter(|&c| c > 1) {
            findings.push(Finding::new(
                Severity::Error,
                "M004",
                format!("Link '{}' is used by {count} modules", module.link),
                Some("Give every module its own link".to_string()),
            ));
        }

        if let Some(count) = names.remove(module.name.as_str()).filter(|&c| c > 1) {
            findings.push(Finding::new(
                Severity::Error,
                "M005",
                format!("Name '{}' is used by {count} modules", module.name),
                Some("Give every module its own display name".to_string()),
            ));
        }

        if module.name.trim().is_empty() {
            continue;
        }
        let folded = module.name.to_lowercase();
        match folded_names.get(&folded) {
            Some(&first) if first != module.name => {
                findings.push(Finding::new(
                    Severity::Warning,
                    "M006",
                    format!(
                        "Names '{first}' and '{}' differ only by case",
                        module.name
                    ),
                    Some("Visitors will see two cards that look identical".to_string()),
                ));
            }
            Some(_) => {}
            None => {
                folded_names.insert(folded, module.name.as_str());
            }
        }
    }
}

/// M007: Random widgets exclude the current page, so they need two modules
fn check_catalog_size(modules: &[ModuleRecord], findings: &mut Vec<Finding>) {
    if modules.len() < 2 {
        findings.push(Finding::new(
            Severity::Warning,
            "M007",
            format!(
                "Catalog has {} module(s); related-module widgets will be empty",
                modules.len()
            ),
            Some("Define at least two [[module]] entries".to_string()),
        ));
    }
}

/// M008: Long descriptions get truncated on cards
fn check_descriptions(modules: &[ModuleRecord], findings: &mut Vec<Finding>) {
    for (index, module) in modules.iter().enumerate() {
        let length = module.description.chars().count();
        if length > MAX_CARD_DESCRIPTION {
            findings.push(Finding::new(
                Severity::Info,
                "M008",
                format!(
                    "Module {} has a {length}-character description",
                    label(index, module)
                ),
                Some(format!(
                    "Keep card copy under {MAX_CARD_DESCRIPTION} characters"
                )),
            ));
        }
    }
}
