//! Formatting functions for terminal output.
//!
//! Each `format_*` function builds the line without printing it so it can be
//! tested; the matching `display_*` function prints it.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::Version;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// Two-line summary of the bump, e.g. "From: v1.2.0" / "To:   v1.3.0".
pub fn format_proposed_tag(previous: Version, next: &str) -> String {
    format!(
        "{}\n  From: {}\n  To:   {}",
        style("Proposed Tag Change:").bold(),
        style(previous).red(),
        style(next).green()
    )
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{}", format_status(message));
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}

/// Display the proposed tag change.
pub fn display_proposed_tag(previous: Version, next: &str) {
    println!("\n{}", format_proposed_tag(previous, next));
}

/// Display manual push instruction for a tag created but not pushed.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "\n{} To push this tag later, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {} {}", remote, tag)).cyan()
    );
}
