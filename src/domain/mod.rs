//! Domain logic - pure classification rules with no I/O

pub mod commit;
pub mod release;
pub mod version;

pub use commit::{classify, CommitType, ParsedCommit};
pub use release::{detect_release, release_triple};
pub use version::{ReleaseVersion, Version, VersionBump};
