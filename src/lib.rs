//! Conventional commit classification and release commit detection.
//!
//! ```
//! use commit_classify::{classify, detect_release, CommitType, ReleaseVersion};
//!
//! let commit = classify("fix(parser): handle empty input");
//! assert_eq!(commit.r#type, CommitType::Fix);
//! assert_eq!(commit.scope, "parser");
//!
//! assert_eq!(
//!     detect_release("Release v2.10.4 (hotfix)", false),
//!     Some(ReleaseVersion::new(2, 10, 4))
//! );
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{
    classify, detect_release, release_triple, CommitType, ParsedCommit, ReleaseVersion, Version,
    VersionBump,
};
pub use error::{ClassifyError, Result};
