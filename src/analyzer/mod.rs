//! Analysis over commit histories: version bumps, release boundaries, grouping

pub mod version_analyzer;

pub use version_analyzer::{group_by_type, CommitMessage, ReleaseBoundary, VersionAnalyzer};
