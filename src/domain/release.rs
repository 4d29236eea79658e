//! Detection of release marker commits such as `Release v1.2.3 (hotfix)`.

use crate::domain::version::ReleaseVersion;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

static RELEASE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Release v([0-9]+)\.([0-9]+)\.([0-9]+)( \(.*\))?$").expect("release pattern is valid")
});

/// Detect the version recorded by a release marker commit.
///
/// For a regular commit only the subject, the text before the first blank
/// line, is tested. A merge commit can bundle several subjects, so each of
/// its lines is tested in order and the first match wins. The whole line must
/// match; a marker embedded in other text is ignored.
pub fn detect_release(message: &str, is_merge_commit: bool) -> Option<ReleaseVersion> {
    let version = candidates(message, is_merge_commit)
        .find_map(|candidate| RELEASE_PATTERN.captures(candidate))
        .map(|captures| {
            ReleaseVersion::new(
                component(&captures, 1),
                component(&captures, 2),
                component(&captures, 3),
            )
        });

    if let Some(version) = version {
        debug!(%version, is_merge_commit, "release marker found");
    }
    version
}

/// Release detection with the `(0, 0, 0)` "no release" sentinel.
///
/// A literal `Release v0.0.0` is indistinguishable from no marker here; use
/// [`detect_release`] when that matters.
pub fn release_triple(message: &str, is_merge_commit: bool) -> (u64, u64, u64) {
    detect_release(message, is_merge_commit)
        .map(|version| version.as_triple())
        .unwrap_or((0, 0, 0))
}

fn candidates(message: &str, is_merge_commit: bool) -> Box<dyn Iterator<Item = &str> + '_> {
    if is_merge_commit {
        Box::new(message.split('\n'))
    } else {
        let subject = message
            .split_once("\n\n")
            .map_or(message, |(subject, _)| subject);
        Box::new(std::iter::once(subject))
    }
}

/// Digit group as a number; a value too large for `u64` counts as 0.
fn component(captures: &Captures<'_>, index: usize) -> u64 {
    captures
        .get(index)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
