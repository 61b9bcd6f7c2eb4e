use crate::error::VersionError;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// A release version made of exactly three numeric parts: `major.minor.revision`.
///
/// Versions are immutable once parsed and can be rendered three ways:
///
/// - [dotted](Version::to_string): `1.2.3`
/// - [underscored](Version::underscored): `1_2_3`, the form used in declaration identifiers
/// - [id](Version::id): `1020399`, the numeric id stored alongside each declaration
///
/// Versions order lexicographically by `(major, minor, revision)`, and so do their ids.
///
/// # Example
///
/// ```
/// use bwcbump::Version;
///
/// let version: Version = "1.2.3".parse().unwrap();
/// assert_eq!("1.2.3", version.to_string());
/// assert_eq!("1_2_3", version.underscored());
/// assert_eq!(1020399, version.id());
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    revision: u32,
}

impl Version {
    /// Returns a version from its three parts.
    pub fn new(major: u32, minor: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }

    /// Parses a version string of the form `major.minor.revision`.
    ///
    /// Each part must be a non-empty run of ASCII digits that fits in a `u32`. Signs, whitespace
    /// and any other number of parts are rejected.
    ///
    /// # Errors
    ///
    /// - Returns a [VersionError::Unparseable] carrying `version_str` if it does not have that
    ///   shape.
    pub fn parse(version_str: &str) -> Result<Self, VersionError> {
        let unparseable = || VersionError::Unparseable {
            input: version_str.to_owned(),
        };

        let mut parts = version_str.split('.').map(parse_part);
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Some(major)), Some(Some(minor)), Some(Some(revision)), None) => {
                Ok(Self::new(major, minor, revision))
            }
            _ => Err(unparseable()),
        }
    }

    /// The major part.
    pub fn major(&self) -> u32 {
        self.major
    }

    /// The minor part.
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// The revision part.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Returns the parts joined with underscores, e.g. `1_2_3`.
    pub fn underscored(&self) -> String {
        format!("{}_{}_{}", self.major, self.minor, self.revision)
    }

    /// Returns the numeric id of this version: `major * 1_000_000 + minor * 10_000 +
    /// revision * 100 + 99`.
    pub fn id(&self) -> u64 {
        u64::from(self.major) * 1_000_000
            + u64::from(self.minor) * 10_000
            + u64::from(self.revision) * 100
            + 99
    }
}

fn parse_part(part: &str) -> Option<u32> {
    // u32::from_str would also take a leading `+`
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Version {
    /// Displays the dotted form, e.g. `1.2.3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}
