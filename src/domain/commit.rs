use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use tracing::trace;

/// Header of a conventional commit: type, `(scope)` or `[scope]`, `!`, description.
///
/// Every group is optional so the pattern matches any input at offset 0.
/// Separators are ASCII whitespace only; other spaces belong to the description.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z]*)[\t\n\f\r ]*([\(\[]([^\]\)]*)[\]\)])?[\t\n\f\r ]*?(!?):?[\t\n\f\r ]*(.*)")
        .expect("header pattern is valid")
});

const BREAKING_CHANGE_FOOTER: &str = "BREAKING CHANGE:";

/// Classification category of a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Fix,
    #[serde(rename = "feat")]
    Feature,
    Test,
    Chore,
    Ops,
    Docs,
    Perf,
    Refactor,
    Security,
    Other,
}

/// Type prefixes checked in order; the first prefix of the lower-cased type wins.
const TYPE_PREFIXES: &[(&str, CommitType)] = &[
    ("fix", CommitType::Fix),
    ("bug", CommitType::Fix),
    ("feat", CommitType::Feature),
    ("test", CommitType::Test),
    ("chore", CommitType::Chore),
    ("update", CommitType::Chore),
    ("ops", CommitType::Ops),
    ("ci", CommitType::Ops),
    ("cd", CommitType::Ops),
    ("build", CommitType::Ops),
    ("doc", CommitType::Docs),
    ("perf", CommitType::Perf),
    ("refactor", CommitType::Refactor),
    ("rework", CommitType::Refactor),
    ("sec", CommitType::Security),
];

impl CommitType {
    /// All categories in table order, `Other` last
    pub const ALL: [CommitType; 10] = [
        CommitType::Fix,
        CommitType::Feature,
        CommitType::Test,
        CommitType::Chore,
        CommitType::Ops,
        CommitType::Docs,
        CommitType::Perf,
        CommitType::Refactor,
        CommitType::Security,
        CommitType::Other,
    ];

    /// Map a lower-cased header token to a category by prefix.
    ///
    /// An empty token never matches a prefix and yields `Other`.
    pub fn from_prefix(token: &str) -> CommitType {
        TYPE_PREFIXES
            .iter()
            .find(|(prefix, _)| token.starts_with(prefix))
            .map(|(_, commit_type)| *commit_type)
            .unwrap_or(CommitType::Other)
    }

    /// Short lowercase name, e.g. `feat` or `security`
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Fix => "fix",
            CommitType::Feature => "feat",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Ops => "ops",
            CommitType::Docs => "docs",
            CommitType::Perf => "perf",
            CommitType::Refactor => "refactor",
            CommitType::Security => "security",
            CommitType::Other => "other",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured classification of one commit message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommit {
    pub r#type: CommitType,
    pub scope: String,
    pub description: String,
    pub is_breaking_change: bool,
}

impl ParsedCommit {
    /// Classify a raw commit message.
    ///
    /// Never fails: messages without a recognizable type become
    /// [`CommitType::Other`] with an empty scope and the first non-empty line
    /// of the whole message as description. A line starting with
    /// `BREAKING CHANGE:` anywhere in the message marks the commit as breaking.
    pub fn parse(message: &str) -> Self {
        let (mut token, mut scope, mut description, mut is_breaking_change) =
            match HEADER_PATTERN.captures(message) {
                Some(captures) => {
                    let group = |i| captures.get(i).map(|m| m.as_str()).unwrap_or_default();
                    (
                        group(1).to_lowercase(),
                        group(3).to_lowercase(),
                        group(5).trim(),
                        group(4) == "!",
                    )
                }
                None => (String::new(), String::new(), "", false),
            };

        if description.is_empty() {
            token.clear();
        }

        let r#type = CommitType::from_prefix(&token);
        if r#type == CommitType::Other {
            trace!(token = %token, "no type prefix matched, keeping full message");
            scope.clear();
            description = message;
        }

        if message
            .split('\n')
            .any(|line| line.starts_with(BREAKING_CHANGE_FOOTER))
        {
            is_breaking_change = true;
        }

        ParsedCommit {
            r#type,
            scope: scope.trim().to_string(),
            description: first_line(description).to_string(),
            is_breaking_change,
        }
    }
}

/// First non-empty trimmed line, or `""` when every line is blank
fn first_line(text: &str) -> &str {
    text.split('\n')
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
}

/// Classify a commit message; shorthand for [`ParsedCommit::parse`]
pub fn classify(message: &str) -> ParsedCommit {
    ParsedCommit::parse(message)
}
