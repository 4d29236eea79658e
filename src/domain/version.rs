use crate::domain::commit::{CommitType, ParsedCommit};
use crate::error::{ClassifyError, Result};
use serde::Serialize;
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Version recorded by a release marker commit
pub type ReleaseVersion = Version;

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse version from a tag string (e.g., "v1.2.3" -> Version(1,2,3))
    ///
    /// Pre-release and build metadata are rejected.
    pub fn parse(tag: &str) -> Result<Self> {
        let clean_tag = tag.trim().trim_start_matches('v').trim_start_matches('V');

        let parsed = semver::Version::parse(clean_tag).map_err(|e| {
            ClassifyError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z ({})",
                tag, e
            ))
        })?;

        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(ClassifyError::version(format!(
                "Unsupported pre-release or build metadata in '{}'",
                tag
            )));
        }

        Ok(Version::new(parsed.major, parsed.minor, parsed.patch))
    }

    /// Bump version according to bump type
    ///
    /// Fails when the bumped component would overflow.
    pub fn bump(&self, bump_type: &VersionBump) -> Result<Self> {
        let increment = |value: u64, name: &str| {
            value.checked_add(1).ok_or_else(|| {
                ClassifyError::version(format!(
                    "Cannot bump {} version of {}: out of range",
                    name, self
                ))
            })
        };

        Ok(match bump_type {
            VersionBump::Major => Version::new(increment(self.major, "major")?, 0, 0),
            VersionBump::Minor => {
                Version::new(self.major, increment(self.minor, "minor")?, 0)
            }
            VersionBump::Patch => {
                Version::new(self.major, self.minor, increment(self.patch, "patch")?)
            }
        })
    }

    /// Components as a tuple, `(0, 0, 0)` for the zero version
    pub fn as_triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<Version> for semver::Version {
    fn from(version: Version) -> Self {
        semver::Version::new(version.major, version.minor, version.patch)
    }
}

/// Version bump type decision, ordered from smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
}

impl VersionBump {
    /// Bump warranted by a single commit, if any.
    ///
    /// Breaking changes are major, features minor, and fixes, performance,
    /// refactoring and security changes patch. Everything else is not released.
    pub fn for_commit(commit: &ParsedCommit) -> Option<VersionBump> {
        if commit.is_breaking_change {
            return Some(VersionBump::Major);
        }

        match commit.r#type {
            CommitType::Feature => Some(VersionBump::Minor),
            CommitType::Fix | CommitType::Perf | CommitType::Refactor | CommitType::Security => {
                Some(VersionBump::Patch)
            }
            _ => None,
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        };
        f.write_str(name)
    }
}
