use crate::{
    bwc::{append_previous_version, ListUpdate},
    error::BumpError,
    files::{Files, RepoLayout},
    patch::patch_declarations,
    report::Reporter,
    version::Version,
};
use std::path::Path;

/// What to bump, before the versions are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpRequest<'a> {
    /// The latest version already declared.
    pub previous: &'a str,

    /// The version to add.
    pub new: &'a str,

    /// Also point the current version at `new`.
    pub update_current: bool,
}

/// Adds `request.new` to a repository's declaration file, then adds `request.previous` to its
/// backward-compatibility version list.
///
/// Both versions are parsed before any file is touched. The first error aborts the run, and a
/// file is only written once its new contents have been fully computed. Re-running after a
/// successful run fails with a duplicate version error and writes nothing.
///
/// # Errors
///
/// - [BumpError::Version] if either version does not parse.
/// - [BumpError::FileNotFound] if no declaration file exists.
/// - [BumpError::Patch] if the previous version is not declared or the new one already is.
/// - [BumpError::Read]/[BumpError::Write] on I/O failure.
pub fn run<F, R>(
    request: &BumpRequest<'_>,
    layout: &RepoLayout,
    files: &mut F,
    reporter: &mut R,
) -> Result<(), BumpError>
where
    F: Files + ?Sized,
    R: Reporter + ?Sized,
{
    let previous = Version::parse(request.previous)?;
    let new = Version::parse(request.new)?;

    reporter.start_group("Updating version declaration file");
    let declarations = update_declarations(
        &previous,
        &new,
        request.update_current,
        layout,
        files,
        reporter,
    );
    reporter.end_group();
    declarations?;

    reporter.start_group("Updating bwcVersions file");
    let bwc = update_bwc_versions(&previous, layout, files, reporter);
    reporter.end_group();
    bwc
}

fn update_declarations<F, R>(
    previous: &Version,
    new: &Version,
    update_current: bool,
    layout: &RepoLayout,
    files: &mut F,
    reporter: &mut R,
) -> Result<(), BumpError>
where
    F: Files + ?Sized,
    R: Reporter + ?Sized,
{
    let path = layout
        .find_version_file(files)
        .ok_or_else(|| BumpError::FileNotFound {
            candidates: layout
                .version_files
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })?;
    reporter.info(&format!("Found version declarations at {}", path.display()));

    let contents = read(files, path)?;
    let patched = patch_declarations(&contents, previous, new, update_current).map_err(|source| {
        BumpError::Patch {
            path: path.to_path_buf(),
            source,
        }
    })?;
    reporter.info(&format!(
        "Found Lucene version for previous version {previous} is {}",
        patched.lucene
    ));
    if patched.current_updated {
        reporter.info(&format!("Current version now points at {new}"));
    } else if update_current {
        reporter.info("No current version declaration found, leaving it as is");
    }

    write(files, path, &patched.contents)?;
    reporter.info(&format!("{} has been updated.", path.display()));
    Ok(())
}

fn update_bwc_versions<F, R>(
    previous: &Version,
    layout: &RepoLayout,
    files: &mut F,
    reporter: &mut R,
) -> Result<(), BumpError>
where
    F: Files + ?Sized,
    R: Reporter + ?Sized,
{
    let path = layout.bwc_file.as_path();
    let contents = read(files, path)?;

    match append_previous_version(&contents, previous) {
        ListUpdate::UpToDate => {
            reporter.notice(&format!(
                "Version {previous} was already found in {}",
                path.display()
            ));
            reporter.info(&format!("{} is up-to-date.", path.display()));
        }
        ListUpdate::Appended(appended) => {
            write(files, path, &appended)?;
            reporter.info(&format!("{} has been updated.", path.display()));
        }
    }
    Ok(())
}

fn read<F: Files + ?Sized>(files: &F, path: &Path) -> Result<String, BumpError> {
    files.read(path).map_err(|source| BumpError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write<F: Files + ?Sized>(files: &mut F, path: &Path, contents: &str) -> Result<(), BumpError> {
    files.write(path, contents).map_err(|source| BumpError::Write {
        path: path.to_path_buf(),
        source,
    })
}
