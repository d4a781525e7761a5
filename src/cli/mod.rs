//! CLI output formatting
//!
//! Provides human-readable terminal display for catalog listings,
//! selections and diagnostic reports.

pub mod display;

pub use display::format_card;
pub use display::print_modules;
pub use display::print_selection;
pub use display::render_diagnostic_report;
