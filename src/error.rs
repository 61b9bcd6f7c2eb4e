use std::{io, path::PathBuf};

/// Errors from parsing a version string.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum VersionError {
    /// The string is not exactly three dot-separated non-negative integers.
    #[error("Unable to parse version from `{input}`, it should be in a format \"1.2.3\"")]
    Unparseable {
        /// The text that was given
        input: String,
    },
}

/// Errors from patching the contents of a declaration file.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum PatchError {
    /// No declaration line exists for the previous version, so there is nothing to copy the
    /// embedded library version from.
    #[error("Unable to find previous version {version}")]
    MissingPreviousVersion {
        /// Dotted form of the previous version
        version: String,
    },

    /// The new version is already declared. Patching again would duplicate it.
    #[error("Unable to add version {version}, it was already found")]
    DuplicateVersion {
        /// Dotted form of the new version
        version: String,
    },
}

/// Errors that abort a bump run.
#[derive(thiserror::Error, Debug)]
pub enum BumpError {
    /// Either version argument could not be parsed.
    #[error("{0}")]
    Version(#[from] VersionError),

    /// None of the candidate declaration file paths exist.
    #[error("Could not find a version declaration file, looked in: {candidates}")]
    FileNotFound {
        /// Comma-separated list of the paths that were probed
        candidates: String,
    },

    /// The declaration file could not be patched.
    #[error("{source} in {}", .path.display())]
    Patch {
        /// The declaration file
        path: PathBuf,
        /// Why patching failed
        source: PatchError,
    },

    /// A file could not be read.
    #[error("Unable to read {}: {source}", .path.display())]
    Read {
        /// The file being read
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },

    /// A file could not be written.
    #[error("Unable to write {}: {source}", .path.display())]
    Write {
        /// The file being written
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },
}
