//! The backward-compatibility version list: a YAML-ish file with one `  - "1.2.3"` entry per
//! released version that compatibility tests run against.

use crate::version::Version;
use regex::Regex;

/// Terminator written after each appended entry.
const ENTRY_TERMINATOR: &str = "\r\n";

/// The outcome of adding a version to the list.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ListUpdate {
    /// The entry was missing and has been appended. Holds the full new contents.
    Appended(String),

    /// The entry is already in the list. Nothing needs to be written.
    UpToDate,
}

/// Returns the list entry line for `version`, without its terminator.
pub fn list_entry(version: &Version) -> String {
    format!("  - \"{version}\"")
}

/// Appends an entry for `previous` to the end of `contents` unless that exact entry is already
/// present.
///
/// Re-running with the same version is safe: the second call returns [ListUpdate::UpToDate].
pub fn append_previous_version(contents: &str, previous: &Version) -> ListUpdate {
    let entry = list_entry(previous);
    // literal match: the entry holds `.` and quotes
    let already_listed = Regex::new(&regex::escape(&entry))
        .map(|re| re.is_match(contents))
        .unwrap_or_else(|_| contents.contains(&entry));
    if already_listed {
        return ListUpdate::UpToDate;
    }

    let mut appended =
        String::with_capacity(contents.len() + entry.len() + 2 * ENTRY_TERMINATOR.len());
    appended.push_str(contents);
    if !contents.is_empty() && !contents.ends_with('\n') {
        appended.push_str(ENTRY_TERMINATOR);
    }
    appended.push_str(&entry);
    appended.push_str(ENTRY_TERMINATOR);
    ListUpdate::Appended(appended)
}
