//! # bwcbump
//!
//! Adds a new release version to a repository that declares its versions in source.
//!
//! A bump takes the *previous* version (the latest one already declared) and the *new* version,
//! both in `major.minor.revision` form, and:
//!
//! 1. Inserts a declaration for the new version right after the previous version's declaration,
//!    carrying over the Lucene version the previous one ships with:
//!
//!    ```text
//!        public static final Version V_1_2_3 = new Version(1020399, org.apache.lucene.util.Version.LUCENE_9_8_0);
//!        public static final Version V_1_3_0 = new Version(1030099, org.apache.lucene.util.Version.LUCENE_9_8_0);
//!    ```
//!
//! 2. Optionally points `CURRENT` at the new version.
//!
//! 3. Appends the previous version to the backward-compatibility version list, unless it is
//!    already there.
//!
//! Every step is safe to re-run: bumping to a version that is already declared is an error that
//! writes nothing, and a version already in the list is left alone.
//!
//! ## Examples
//!
//! Patch file contents directly:
//!
//! ```
//! use bwcbump::prelude::*;
//!
//! let contents = "    public static final Version V_1_2_3 = new Version(1020399, org.apache.lucene.util.Version.LUCENE_9_8_0);\n";
//! let previous: Version = "1.2.3".parse().unwrap();
//! let new: Version = "1.3.0".parse().unwrap();
//!
//! let patched = patch_declarations(contents, &previous, &new, false).unwrap();
//! assert!(patched.contents.contains("V_1_3_0 = new Version(1030099, org.apache.lucene.util.Version.LUCENE_9_8_0);"));
//!
//! let list = "BWC_VERSION:\r\n";
//! assert_eq!(
//!     ListUpdate::Appended("BWC_VERSION:\r\n  - \"1.2.3\"\r\n".to_string()),
//!     append_previous_version(list, &previous),
//! );
//! ```
//!
//! Or run a whole bump against a checkout:
//!
//! ```no_run
//! use bwcbump::prelude::*;
//!
//! let request = BumpRequest { previous: "1.2.3", new: "1.3.0", update_current: true };
//! run(&request, &RepoLayout::default(), &mut FsFiles::new("."), &mut LogReporter::new()).unwrap();
//! ```
#![warn(missing_docs)]

mod bump;
mod bwc;
mod error;
mod files;
mod matcher;
mod patch;
mod report;
mod version;

pub use crate::bump::{run, BumpRequest};
pub use crate::bwc::{append_previous_version, list_entry, ListUpdate};
pub use crate::error::{BumpError, PatchError, VersionError};
pub use crate::files::{Files, FsFiles, RepoLayout, DEFAULT_BWC_FILE, DEFAULT_VERSION_FILES};
pub use crate::matcher::{
    find_current_pointer, find_declaration_line, has_declaration_for, DeclarationLine,
};
pub use crate::patch::{patch_declarations, PatchedDeclarations};
pub use crate::report::{LogReporter, Reporter, WorkflowReporter};
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use bwcbump::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::append_previous_version;
    #[doc(no_inline)]
    pub use crate::patch_declarations;
    #[doc(no_inline)]
    pub use crate::run;
    #[doc(no_inline)]
    pub use crate::BumpError;
    #[doc(no_inline)]
    pub use crate::BumpRequest;
    #[doc(no_inline)]
    pub use crate::Files;
    #[doc(no_inline)]
    pub use crate::FsFiles;
    #[doc(no_inline)]
    pub use crate::ListUpdate;
    #[doc(no_inline)]
    pub use crate::LogReporter;
    #[doc(no_inline)]
    pub use crate::PatchError;
    #[doc(no_inline)]
    pub use crate::RepoLayout;
    #[doc(no_inline)]
    pub use crate::Reporter;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
    #[doc(no_inline)]
    pub use crate::WorkflowReporter;
}
