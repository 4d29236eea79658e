use crate::config::AnalysisConfig;
use crate::domain::{detect_release, CommitType, ParsedCommit, ReleaseVersion, Version, VersionBump};
use crate::error::Result;
use std::collections::BTreeMap;
use tracing::debug;

/// Raw commit message as supplied by a history reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub message: String,
    pub is_merge: bool,
}

impl CommitMessage {
    /// A regular, single-parent commit
    pub fn new(message: impl Into<String>) -> Self {
        CommitMessage {
            message: message.into(),
            is_merge: false,
        }
    }

    /// A merge commit whose lines may carry several subjects
    pub fn merge(message: impl Into<String>) -> Self {
        CommitMessage {
            message: message.into(),
            is_merge: true,
        }
    }
}

/// The most recent release marker in a history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseBoundary {
    /// Position of the release commit in the newest-first history
    pub index: usize,
    pub version: ReleaseVersion,
}

/// Analyzes commits to determine version bump type
pub struct VersionAnalyzer {
    config: AnalysisConfig,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(config: AnalysisConfig) -> Self {
        VersionAnalyzer { config }
    }

    /// Highest bump warranted by the messages, `None` if nothing is releasable
    pub fn analyze_messages<S: AsRef<str>>(&self, messages: &[S]) -> Option<VersionBump> {
        let mut bump = None;

        for message in messages {
            let parsed = ParsedCommit::parse(message.as_ref());
            bump = bump.max(VersionBump::for_commit(&parsed));

            // Nothing outranks a breaking change
            if bump == Some(VersionBump::Major) {
                break;
            }
        }

        bump
    }

    /// Find the newest release marker in a newest-first history
    pub fn find_last_release(&self, commits: &[CommitMessage]) -> Option<ReleaseBoundary> {
        commits.iter().enumerate().find_map(|(index, commit)| {
            detect_release(&commit.message, commit.is_merge)
                .map(|version| ReleaseBoundary { index, version })
        })
    }

    /// Commits newer than the last release marker, or the whole history if none
    pub fn unreleased<'a>(&self, commits: &'a [CommitMessage]) -> &'a [CommitMessage] {
        match self.find_last_release(commits) {
            Some(boundary) => &commits[..boundary.index],
            None => commits,
        }
    }

    /// Version that should follow `current` given the new messages.
    ///
    /// Without a current version the configured initial version is used for
    /// the first release. Returns `None` when nothing warrants a release, and
    /// an error when the bump would overflow a version component.
    pub fn next_version<S: AsRef<str>>(
        &self,
        current: Option<Version>,
        messages: &[S],
    ) -> Result<Option<Version>> {
        let Some(bump) = self.analyze_messages(messages) else {
            return Ok(None);
        };
        let next = match current {
            Some(version) => version.bump(&bump)?,
            None => self.config.initial_version,
        };
        debug!(?current, %bump, %next, "computed next version");
        Ok(Some(next))
    }
}

impl Default for VersionAnalyzer {
    fn default() -> Self {
        VersionAnalyzer::new(AnalysisConfig::default())
    }
}

/// Group commits by category, keyed in classification table order
pub fn group_by_type(commits: &[ParsedCommit]) -> BTreeMap<CommitType, Vec<&ParsedCommit>> {
    let mut groups: BTreeMap<CommitType, Vec<&ParsedCommit>> = BTreeMap::new();
    for commit in commits {
        groups.entry(commit.r#type).or_default().push(commit);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_major() {
        let analyzer = VersionAnalyzer::default();
        let messages = ["feat: new feature", "fix(api)!: breaking change"];
        assert_eq!(analyzer.analyze_messages(&messages), Some(VersionBump::Major));
    }

    #[test]
    fn test_analyze_minor() {
        let analyzer = VersionAnalyzer::default();
        let messages = ["feat: new feature", "fix: bug fix"];
        assert_eq!(analyzer.analyze_messages(&messages), Some(VersionBump::Minor));
    }

    #[test]
    fn test_analyze_patch() {
        let analyzer = VersionAnalyzer::default();
        let messages = ["fix: bug fix", "refactor: code cleanup"];
        assert_eq!(analyzer.analyze_messages(&messages), Some(VersionBump::Patch));
    }

    #[test]
    fn test_analyze_nothing_releasable() {
        let analyzer = VersionAnalyzer::default();
        let messages = ["docs: update readme", "chore: bump deps", "Updated stuff"];
        assert_eq!(analyzer.analyze_messages(&messages), None);
    }

    #[test]
    fn test_analyze_breaking_change_via_footer() {
        let analyzer = VersionAnalyzer::default();
        let messages =
            vec!["fix: rename API field\n\nBREAKING CHANGE: field changed from X to Y".to_string()];
        assert_eq!(analyzer.analyze_messages(&messages), Some(VersionBump::Major));
    }

    #[test]
    fn test_analyze_empty() {
        let analyzer = VersionAnalyzer::default();
        let messages: [&str; 0] = [];
        assert_eq!(analyzer.analyze_messages(&messages), None);
    }

    #[test]
    fn test_find_last_release() {
        let analyzer = VersionAnalyzer::default();
        let history = vec![
            CommitMessage::new("feat: newest"),
            CommitMessage::new("fix: second"),
            CommitMessage::new("Release v1.4.0"),
            CommitMessage::new("Release v1.3.0"),
        ];

        let boundary = analyzer.find_last_release(&history).unwrap();
        assert_eq!(boundary.index, 2);
        assert_eq!(boundary.version, Version::new(1, 4, 0));
        assert_eq!(analyzer.unreleased(&history).len(), 2);
    }

    #[test]
    fn test_find_last_release_in_merge_commit() {
        let analyzer = VersionAnalyzer::default();
        let history = vec![
            CommitMessage::new("fix: after merge"),
            CommitMessage::merge("Merge branch 'release'\nRelease v2.0.0"),
        ];

        let boundary = analyzer.find_last_release(&history).unwrap();
        assert_eq!(boundary.index, 1);
        assert_eq!(boundary.version, Version::new(2, 0, 0));
    }

    #[test]
    fn test_no_release_means_everything_unreleased() {
        let analyzer = VersionAnalyzer::default();
        let history = vec![CommitMessage::new("feat: a"), CommitMessage::new("fix: b")];
        assert_eq!(analyzer.find_last_release(&history), None);
        assert_eq!(analyzer.unreleased(&history), history.as_slice());
    }

    #[test]
    fn test_next_version() {
        let analyzer = VersionAnalyzer::default();
        assert_eq!(
            analyzer
                .next_version(Some(Version::new(1, 2, 3)), &["feat: x"])
                .unwrap(),
            Some(Version::new(1, 3, 0))
        );
        assert_eq!(
            analyzer
                .next_version(Some(Version::new(1, 2, 3)), &["docs: x"])
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_next_version_without_current_uses_initial() {
        let analyzer = VersionAnalyzer::new(AnalysisConfig {
            initial_version: Version::new(1, 0, 0),
        });
        assert_eq!(
            analyzer.next_version(None, &["fix: x"]).unwrap(),
            Some(Version::new(1, 0, 0))
        );
    }

    #[test]
    fn test_next_version_overflow_is_error() {
        let analyzer = VersionAnalyzer::default();
        let current = Some(Version::new(u64::MAX, 0, 0));
        assert!(analyzer.next_version(current, &["feat!: x"]).is_err());
        // Nothing to release means nothing to bump, so no overflow either
        assert_eq!(analyzer.next_version(current, &["docs: x"]).unwrap(), None);
    }

    #[test]
    fn test_non_ascii_digits_are_not_a_boundary() {
        let analyzer = VersionAnalyzer::default();
        let history = vec![
            CommitMessage::new("feat: x"),
            CommitMessage::new("Release v\u{0661}.\u{0662}.\u{0663}"),
            CommitMessage::new("fix: y"),
        ];
        assert_eq!(analyzer.find_last_release(&history), None);
        assert_eq!(analyzer.unreleased(&history).len(), 3);
    }

    #[test]
    fn test_group_by_type() {
        let commits: Vec<ParsedCommit> = ["feat: a", "fix: b", "feat(x): c", "hello"]
            .iter()
            .map(|m| ParsedCommit::parse(m))
            .collect();

        let groups = group_by_type(&commits);
        let keys: Vec<CommitType> = groups.keys().copied().collect();
        assert_eq!(
            keys,
            vec![CommitType::Fix, CommitType::Feature, CommitType::Other]
        );
        assert_eq!(groups[&CommitType::Feature].len(), 2);
        assert_eq!(groups[&CommitType::Feature][1].scope, "x");
    }
}
