//! Locating version declaration lines in a declaration file.
//!
//! A declaration line binds a version to its numeric id and to the version of the bundled Lucene
//! library it ships with:
//!
//! ```text
//!     public static final Version V_1_2_3 = new Version(1020399, org.apache.lucene.util.Version.LUCENE_9_8_0);
//! ```
//!
//! The Lucene token is versioned independently, so it is only ever copied from an existing line.

use crate::version::Version;
use regex::Regex;
use std::{ops::Range, sync::LazyLock};

/// Prefix of every version declaration, up to the underscored version.
const DECLARATION_PREFIX: &str = "public static final Version V_";

/// Prefix of the line that points at the current version.
const CURRENT_PREFIX: &str = "public static final Version CURRENT = V_";

static DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{}(?<version>\d+_\d+_\d+) = new Version\(\d+, org\.apache\.lucene\.util\.Version\.LUCENE_(?<lucene>\d+_\d+_\d+)\);",
        regex::escape(DECLARATION_PREFIX)
    ))
    .expect("declaration pattern is valid")
});

static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bV_(?<version>\d+_\d+_\d+)\b").expect("mention pattern is valid")
});

static CURRENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{}(?<version>\d+_\d+_\d+);",
        regex::escape(CURRENT_PREFIX)
    ))
    .expect("current pattern is valid")
});

/// A declaration line found in a file's contents.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DeclarationLine<'c> {
    /// The matched declaration text, from `public` through the closing `;`.
    pub text: &'c str,

    /// The embedded Lucene version token, e.g. `9_8_0`.
    pub lucene: &'c str,

    /// Byte offset just past the end of the line holding the match, including its terminator.
    /// Equal to the contents' length if the match is on an unterminated last line.
    pub line_end: usize,

    /// The terminator of that line: `"\r\n"`, `"\n"`, or `""` for an unterminated last line.
    pub terminator: &'c str,
}

impl<'c> DeclarationLine<'c> {
    /// Renders a declaration for `version` that carries over this line's Lucene token.
    pub fn derive(&self, version: &Version) -> String {
        format!(
            "{DECLARATION_PREFIX}{} = new Version({}, org.apache.lucene.util.Version.LUCENE_{});",
            version.underscored(),
            version.id(),
            self.lucene
        )
    }
}

/// Finds the first declaration line for `version`.
pub fn find_declaration_line<'c>(
    contents: &'c str,
    version: &Version,
) -> Option<DeclarationLine<'c>> {
    let underscored = version.underscored();
    let caps = DECLARATION_RE
        .captures_iter(contents)
        .find(|caps| &caps["version"] == underscored)?;

    let whole = caps.get(0)?;
    let lucene = caps.name("lucene")?.as_str();
    let (line_end, terminator) = match contents[whole.end()..].find('\n') {
        Some(offset) => {
            let newline = whole.end() + offset;
            let terminator_start = if contents[..newline].ends_with('\r') {
                newline - 1
            } else {
                newline
            };
            (newline + 1, &contents[terminator_start..newline + 1])
        }
        None => (contents.len(), ""),
    };

    Some(DeclarationLine {
        text: whole.as_str(),
        lucene,
        line_end,
        terminator,
    })
}

/// Returns true if `V_<underscored>` for `version` appears anywhere in `contents` as a whole
/// token, whether or not it is a well-formed declaration.
pub fn has_declaration_for(contents: &str, version: &Version) -> bool {
    let underscored = version.underscored();
    MENTION_RE
        .captures_iter(contents)
        .any(|caps| caps["version"] == underscored)
}

/// Returns the byte range of the underscored version in the first current-version pointer line,
/// if there is one.
pub fn find_current_pointer(contents: &str) -> Option<Range<usize>> {
    CURRENT_RE
        .captures(contents)
        .and_then(|caps| caps.name("version"))
        .map(|version| version.range())
}
