//! Create-gist fixtures

use crate::gist::GistPayload;

/// A valid public gist with one text file
pub fn valid_public_gist() -> GistPayload {
    GistPayload::new("Public Gist", true).file("public-gist.txt", "This is a test public gist.")
}

/// A valid private gist with one text file
pub fn valid_private_gist() -> GistPayload {
    GistPayload::new("Private Gist", false).file("private-gist.txt", "This is a test private gist.")
}

/// Empty description is accepted by the service
pub fn empty_description() -> GistPayload {
    GistPayload::new("", true).file("empty-desc.txt", "This is a valid gist.")
}

/// No files at all: rejected with 422 missing_field
pub fn no_files() -> GistPayload {
    GistPayload::new("Missing file", true)
}

/// Empty file content: rejected with 422 missing_field
pub fn empty_file_content() -> GistPayload {
    GistPayload::new("Empty file content", true).file("empty.txt", "")
}

/// Two files, declared in a fixed order
pub fn multiple_files() -> GistPayload {
    GistPayload::new("Public Gist", true)
        .file("public-gist-1.txt", "This is a test public gist 1.")
        .file("public-gist-2.txt", "This is a test public gist 2.")
}
