//! Changelog entry rendering and insertion.
//!
//! The changelog is treated as opaque Markdown. The only structure the tool
//! relies on is the `## [Unreleased]` marker: new entries go directly after
//! it, and everything else in the document is preserved byte-for-byte.
use chrono::NaiveDate;

use crate::{image::ImageType, version::Version};

/// Document used when the changelog file does not exist yet.
pub const DEFAULT_HEADER: &str = "# Changelog\n";

/// Heading for changes that have not been tagged yet.
pub const UNRELEASED_MARKER: &str = "## [Unreleased]";

/// Render the dated section for a release.
pub fn render_entry(
    image: ImageType,
    version: &Version,
    date: NaiveDate,
    changes: &str,
) -> String {
    format!(
        "\n## [{version}] - {}\n\n### {} Image\n{changes}\n",
        date.format("%Y-%m-%d"),
        image.title(),
    )
}

/// Insert `entry` into `document`.
///
/// When an unreleased marker is present the output is the text before the
/// marker, a re-emitted marker, the entry, then whatever followed the
/// marker line. Without a marker the entry is appended.
pub fn insert_entry(document: &str, entry: &str) -> String {
    let Some(position) = document.find(UNRELEASED_MARKER) else {
        return format!("{document}{entry}");
    };

    let (before, from_marker) = document.split_at(position);
    let after_marker = &from_marker[UNRELEASED_MARKER.len()..];
    let remainder = after_marker
        .strip_prefix("\r\n")
        .or_else(|| after_marker.strip_prefix('\n'))
        .unwrap_or(after_marker);

    format!("{before}{UNRELEASED_MARKER}\n\n{entry}{remainder}")
}

#[cfg(test)]
#[path = "./changelog_tests.rs"]
mod tests;
