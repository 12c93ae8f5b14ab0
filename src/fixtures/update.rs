//! Update-gist fixtures
//!
//! All update fixtures assume the gist was created from
//! `create::valid_public_gist` (single file `public-gist.txt`) unless stated
//! otherwise.

use crate::gist::GistPayload;

/// Replace the description and the file content
pub fn description_and_content() -> GistPayload {
    GistPayload::new("Updated Public Gist", true)
        .file("public-gist.txt", "This is a updated test public gist.")
}

/// Rename: add the file under its new name and null out the old name
pub fn rename_file() -> GistPayload {
    GistPayload::new("Public Gist", true)
        .file("new-public-gist.txt", "This is a test public gist.")
        .remove_file("public-gist.txt")
}

/// Delete the file via the null marker
pub fn delete_file() -> GistPayload {
    GistPayload::new("Public Gist", true).remove_file("public-gist.txt")
}

/// Update both files of `create::multiple_files`
pub fn multiple_files() -> GistPayload {
    GistPayload::new("Updated Public Gist", true)
        .file("public-gist-1.txt", "This is a updated test public gist 1.")
        .file("public-gist-2.txt", "This is a updated test public gist 2.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_carries_marker_and_replacement() {
        let payload = rename_file();
        assert!(payload.files["public-gist.txt"].is_null());
        assert_eq!(
            payload.files["new-public-gist.txt"]["content"],
            "This is a test public gist."
        );
    }

    #[test]
    fn test_delete_fixture_is_marker_only() {
        let payload = delete_file();
        assert_eq!(payload.files.len(), 1);
        assert!(payload.files["public-gist.txt"].is_null());
    }
}
