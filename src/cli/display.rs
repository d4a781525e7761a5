//! Terminal display for catalog commands
//!
//! Module cards go to stdout so they can be piped; notices and diagnostic
//! reports go to stderr.

use colored::Colorize;

use crate::catalog::ModuleRecord;
use crate::doctor::{DiagnosticReport, Severity};
use crate::select::Selection;

/// Width of the rule printed under headers
const RULE_WIDTH: usize = 50;

/// Descriptions are cut to this many characters on a card
const CARD_DESCRIPTION_LIMIT: usize = 120;

/// Format one module as a two-line card.
///
/// `position` is 1-based and shown as the card's number.
#[must_use]
pub fn format_card(position: usize, module: &ModuleRecord) -> String {
    format!(
        "{:>3}. {} {}\n     {}",
        position,
        module.name.bold(),
        module.link.dimmed(),
        truncate(&module.description, CARD_DESCRIPTION_LIMIT)
    )
}

/// Print a titled list of module cards to stdout
pub fn print_modules(title: &str, modules: &[&ModuleRecord]) {
    println!("{}", title.bold().cyan());
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
    if modules.is_empty() {
        println!("  {}", "(no modules)".dimmed());
        return;
    }
    for (i, module) in modules.iter().enumerate() {
        println!("{}", format_card(i + 1, module));
    }
}

/// Print a selection, warning on stderr when it came from the fallback
pub fn print_selection(title: &str, current_link: &str, selection: &Selection<'_>) {
    if selection.is_fallback() {
        eprintln!(
            "{} '{}' is not in the catalog; showing a random selection instead",
            "⚠".yellow().bold(),
            current_link
        );
    }
    print_modules(title, &selection.modules);
}

/// Print a diagnostic report to stderr
pub fn render_diagnostic_report(report: &DiagnosticReport) {
    eprintln!("\n{}", "=== Catalog doctor".bold().cyan());
    eprintln!("{}", "─".repeat(RULE_WIDTH).dimmed());

    if report.is_clean() {
        eprintln!("  {} No issues found", "✓".green().bold());
        return;
    }

    for finding in &report.findings {
        let tag = match finding.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info".blue().bold(),
        };
        eprintln!("  {tag} [{}] {}", finding.code, finding.message);
        if let Some(ref suggestion) = finding.suggestion {
            eprintln!("      {} {}", "fix:".dimmed(), suggestion);
        }
    }

    eprintln!("{}", "─".repeat(RULE_WIDTH).dimmed());
    eprintln!(
        "  {} error(s), {} warning(s), {} info",
        report.error_count(),
        report.warning_count(),
        report.info_count()
    );
}

/// Cut `text` to at most `limit` characters, marking the cut with "..."
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let kept: String = text.chars().take(limit.saturating_sub(3)).collect();
    format!("{kept}...")
}
