use crate::{
    error::PatchError,
    matcher::{find_current_pointer, find_declaration_line, has_declaration_for},
    version::Version,
};

/// Indentation of a newly inserted declaration line.
const DECLARATION_INDENT: &str = "    ";

/// The result of a successful declaration patch.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PatchedDeclarations {
    /// The full new file contents.
    pub contents: String,

    /// The Lucene version token carried over from the previous version's declaration.
    pub lucene: String,

    /// Whether the current-version pointer was rewritten. False when it was not requested or the
    /// pointer line does not exist.
    pub current_updated: bool,
}

/// Adds a declaration for `new` right after the declaration of `previous`, and optionally points
/// the current version at `new`.
///
/// The new declaration copies the previous one's Lucene version. All other bytes of `contents`
/// are kept as they are. A missing current-version pointer is not an error.
///
/// # Errors
///
/// - Returns a [PatchError::MissingPreviousVersion] if `previous` has no declaration line.
/// - Returns a [PatchError::DuplicateVersion] if `new` is already mentioned anywhere, so patching
///   the same contents twice fails instead of declaring the version twice.
pub fn patch_declarations(
    contents: &str,
    previous: &Version,
    new: &Version,
    update_current: bool,
) -> Result<PatchedDeclarations, PatchError> {
    let previous_line = find_declaration_line(contents, previous).ok_or_else(|| {
        PatchError::MissingPreviousVersion {
            version: previous.to_string(),
        }
    })?;

    if has_declaration_for(contents, new) {
        return Err(PatchError::DuplicateVersion {
            version: new.to_string(),
        });
    }

    let new_line = previous_line.derive(new);
    let insert_at = previous_line.line_end;
    let (leading, trailing) = match previous_line.terminator {
        // unterminated last line: the new line becomes the last one
        "" => ("\n", ""),
        terminator => ("", terminator),
    };

    let mut patched = String::with_capacity(contents.len() + new_line.len() + 8);
    patched.push_str(&contents[..insert_at]);
    patched.push_str(leading);
    patched.push_str(DECLARATION_INDENT);
    patched.push_str(&new_line);
    patched.push_str(trailing);
    patched.push_str(&contents[insert_at..]);

    let mut current_updated = false;
    if update_current {
        if let Some(range) = find_current_pointer(&patched) {
            patched.replace_range(range, &new.underscored());
            current_updated = true;
        }
    }

    Ok(PatchedDeclarations {
        contents: patched,
        lucene: previous_line.lucene.to_owned(),
        current_updated,
    })
}
