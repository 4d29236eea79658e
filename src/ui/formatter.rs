//! Pure formatting functions for UI output.
//!
//! `format_*` functions build strings and are testable; `display_*` print them.

use crate::domain::{ParsedCommit, Version, VersionBump};
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow on stderr.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// One-line summary of a classified commit.
///
/// Breaking commits carry a `!` after the type, like the header they came from:
/// `feat(api)!: drop v1 endpoints`.
pub fn format_commit(commit: &ParsedCommit) -> String {
    let mut line = commit.r#type.to_string();
    if !commit.scope.is_empty() {
        line.push('(');
        line.push_str(&commit.scope);
        line.push(')');
    }
    if commit.is_breaking_change {
        line.push('!');
    }
    line.push_str(": ");
    line.push_str(&commit.description);
    line
}

/// Print classified commits, one per line, with the type highlighted.
pub fn display_commits(commits: &[ParsedCommit]) {
    for commit in commits {
        let line = format_commit(commit);
        if commit.is_breaking_change {
            println!("{}", style(line).red().bold());
        } else {
            println!("{}", line);
        }
    }
}

/// Describe a bump decision, e.g. `1.2.3 -> 1.3.0 (minor)`.
pub fn format_next_version(current: Option<Version>, next: Version, bump: VersionBump) -> String {
    match current {
        Some(current) => format!("{} -> {} ({})", current, next, bump),
        None => format!("{} (initial release)", next),
    }
}
