//! Command workflows
//!
//! Each subcommand reads its input, calls into the library and renders the
//! result. Reading from stdin is kept apart from splitting the input so the
//! splitting rules can be tested without a terminal.

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::analyzer::{CommitMessage, VersionAnalyzer};
use crate::cli::{Cli, Command};
use crate::config::{self, Config, OutputFormat};
use crate::domain::{detect_release, ParsedCommit, Version, VersionBump};
use crate::ui;

/// Result of the `bump` command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BumpReport {
    /// Version the analysis started from, if known
    pub current: Option<Version>,
    /// Number of commits newer than the last release marker
    pub unreleased: usize,
    pub bump: Option<VersionBump>,
    pub next: Option<Version>,
}

/// Run the parsed command line
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = config::load_config(cli.config.as_deref()).context("Error loading config")?;
    let format = cli.format.unwrap_or(config.output.format);

    match cli.command {
        Command::Classify { message, null } => {
            let messages = collect_messages(message, null)?;
            classify_command(&messages, null, format)
        }
        Command::Release {
            message,
            merge,
            no_merge,
        } => {
            let message = collect_messages(message, false)?
                .into_iter()
                .next()
                .unwrap_or_default();
            release_command(&message, merge_mode(merge, no_merge, &config), format)
        }
        Command::Bump {
            current,
            null,
            merge,
            no_merge,
        } => {
            let current = current
                .map(|raw| Version::parse(&raw))
                .transpose()
                .context("Invalid --current version")?;
            let messages = collect_messages(None, null)?;
            let report = bump_report(
                &config,
                current,
                &messages,
                merge_mode(merge, no_merge, &config),
            )
            .context("Cannot compute the next version")?;
            ui::emit(format, &report, |report| match (report.next, report.bump) {
                (Some(next), Some(bump)) => {
                    ui::display_success(&ui::format_next_version(report.current, next, bump))
                }
                _ => ui::display_status("No releasable commits since the last release"),
            })?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// `--merge` and `--no-merge` win over the configured default
fn merge_mode(merge: bool, no_merge: bool, config: &Config) -> bool {
    if merge {
        true
    } else if no_merge {
        false
    } else {
        config.release.merge_commits
    }
}

fn classify_command(messages: &[String], many: bool, format: OutputFormat) -> Result<ExitCode> {
    let commits: Vec<ParsedCommit> = messages.iter().map(|m| ParsedCommit::parse(m)).collect();
    debug!(count = commits.len(), "classified messages");

    match (many, commits.first()) {
        (false, Some(commit)) => ui::emit(format, commit, |commit| {
            ui::display_commits(std::slice::from_ref(commit))
        })?,
        _ => ui::emit(format, commits.as_slice(), ui::display_commits)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn release_command(message: &str, merge: bool, format: OutputFormat) -> Result<ExitCode> {
    let version = detect_release(message, merge);
    ui::emit(format, &version, |version| {
        if let Some(version) = version {
            println!("{}", version);
        }
    })?;

    Ok(if version.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Analyze newest-first messages up to the last release marker.
///
/// An explicit `current` version wins over the marker's version.
pub fn bump_report(
    config: &Config,
    current: Option<Version>,
    messages: &[String],
    merge: bool,
) -> crate::Result<BumpReport> {
    let history: Vec<CommitMessage> = messages
        .iter()
        .map(|message| CommitMessage {
            message: message.clone(),
            is_merge: merge,
        })
        .collect();

    let analyzer = VersionAnalyzer::new(config.analysis);
    let boundary = analyzer.find_last_release(&history);
    let unreleased: Vec<&str> = analyzer
        .unreleased(&history)
        .iter()
        .map(|commit| commit.message.as_str())
        .collect();

    let current = current.or(boundary.map(|b| b.version));
    let bump = analyzer.analyze_messages(&unreleased);
    let next = analyzer.next_version(current, &unreleased)?;

    Ok(BumpReport {
        current,
        unreleased: unreleased.len(),
        bump,
        next,
    })
}

fn collect_messages(message: Option<String>, nul_separated: bool) -> Result<Vec<String>> {
    if let Some(message) = message {
        return Ok(vec![message]);
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read commit messages from stdin")?;
    Ok(split_messages(&input, nul_separated))
}

/// Split raw input into messages.
///
/// Surrounding newlines are dropped from each message, as added by `echo` or
/// `git log --format=%B`. NUL-separated input skips blank entries.
pub fn split_messages(input: &str, nul_separated: bool) -> Vec<String> {
    if !nul_separated {
        return vec![input.trim_matches('\n').to_string()];
    }

    input
        .split('\0')
        .map(|message| message.trim_matches('\n'))
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_single_message() {
        assert_eq!(
            split_messages("Release v1.0.0\n", false),
            strings(&["Release v1.0.0"])
        );
    }

    #[test]
    fn test_split_nul_separated() {
        let input = "feat: a\n\nbody\n\0fix: b\n\0\n\0";
        assert_eq!(
            split_messages(input, true),
            strings(&["feat: a\n\nbody", "fix: b"])
        );
    }

    #[test]
    fn test_bump_report_stops_at_release() {
        let messages = strings(&["fix: newest", "Release v1.4.0", "feat: already released"]);
        let report = bump_report(&Config::default(), None, &messages, false).unwrap();

        assert_eq!(report.current, Some(Version::new(1, 4, 0)));
        assert_eq!(report.unreleased, 1);
        assert_eq!(report.bump, Some(VersionBump::Patch));
        assert_eq!(report.next, Some(Version::new(1, 4, 1)));
    }

    #[test]
    fn test_bump_report_explicit_current_wins() {
        let messages = strings(&["feat: new", "Release v1.4.0"]);
        let report = bump_report(
            &Config::default(),
            Some(Version::new(2, 0, 0)),
            &messages,
            false,
        )
        .unwrap();
        assert_eq!(report.next, Some(Version::new(2, 1, 0)));
    }

    #[test]
    fn test_bump_report_without_history_uses_initial() {
        let messages = strings(&["feat: first"]);
        let report = bump_report(&Config::default(), None, &messages, false).unwrap();
        assert_eq!(report.current, None);
        assert_eq!(report.next, Some(Version::new(0, 1, 0)));
    }

    #[test]
    fn test_bump_report_overflow_is_error() {
        let messages = strings(&["feat!: break", "Release v18446744073709551615.0.0"]);
        let result = bump_report(&Config::default(), None, &messages, false);
        assert!(result.unwrap_err().to_string().contains("out of range"));
    }

    #[test]
    fn test_merge_flags_override_config() {
        let mut config = Config::default();
        assert!(!merge_mode(false, false, &config));
        assert!(merge_mode(true, false, &config));

        config.release.merge_commits = true;
        assert!(merge_mode(false, false, &config));
        assert!(!merge_mode(false, true, &config));
    }

    #[test]
    fn test_bump_report_nothing_to_release() {
        let messages = strings(&["docs: readme", "Release v1.0.0"]);
        let report = bump_report(&Config::default(), None, &messages, false).unwrap();
        assert_eq!(report.bump, None);
        assert_eq!(report.next, None);
    }
}
