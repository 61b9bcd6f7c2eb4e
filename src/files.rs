use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Declaration file locations, probed in order. The file moved between releases.
pub const DEFAULT_VERSION_FILES: [&str; 2] = [
    "server/src/main/java/org/opensearch/Version.java",
    "libs/core/src/main/java/org/opensearch/Version.java",
];

/// Location of the backward-compatibility version list.
pub const DEFAULT_BWC_FILE: &str = ".ci/bwcVersions";

/// Access to the files of a repository checkout, by repository-relative path.
pub trait Files {
    /// Returns true if `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the whole of `path` as UTF-8.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Replaces the whole of `path` with `contents`.
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

/// [Files] on disk, relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsFiles {
    root: PathBuf,
}

impl FsFiles {
    /// Returns files rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Files for FsFiles {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.resolve(path))
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(self.resolve(path), contents)
    }
}

/// Where the files to update live in a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    /// Candidate declaration file paths. The first that exists is used.
    pub version_files: Vec<PathBuf>,

    /// The backward-compatibility version list.
    pub bwc_file: PathBuf,
}

impl Default for RepoLayout {
    fn default() -> Self {
        Self {
            version_files: DEFAULT_VERSION_FILES.iter().map(PathBuf::from).collect(),
            bwc_file: PathBuf::from(DEFAULT_BWC_FILE),
        }
    }
}

impl RepoLayout {
    /// Returns the first candidate declaration file that exists in `files`.
    pub fn find_version_file<F: Files + ?Sized>(&self, files: &F) -> Option<&Path> {
        self.version_files
            .iter()
            .map(PathBuf::as_path)
            .find(|path| files.exists(path))
    }
}
