//! Gist payload and resource types
//!
//! File mappings use `serde_json::Map`, which preserves insertion order with
//! the `preserve_order` feature enabled. Order matters: the suite asserts
//! that a created gist reports its files in the same order the payload
//! declared them.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Request body for create and update operations.
///
/// A `null` file value is the delete-this-file marker, valid only in update
/// requests. The remote service rejects create requests whose file map is
/// empty or whose every file has empty content.
#[derive(Clone, Debug, Serialize)]
pub struct GistPayload {
    pub description: String,
    pub public: bool,
    pub files: Map<String, Value>,
}

impl GistPayload {
    pub fn new(description: impl Into<String>, public: bool) -> Self {
        Self {
            description: description.into(),
            public,
            files: Map::new(),
        }
    }

    /// Add a file with the given content
    pub fn file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files
            .insert(name.into(), json!({ "content": content.into() }));
        self
    }

    /// Mark a file for deletion (update requests only)
    pub fn remove_file(mut self, name: impl Into<String>) -> Self {
        self.files.insert(name.into(), Value::Null);
        self
    }

    /// File names in insertion order
    pub fn file_names(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("payload serialization cannot fail")
    }
}

/// A gist resource as returned by the service
#[derive(Clone, Debug, Deserialize)]
pub struct Gist {
    pub id: String,
    pub description: Option<String>,
    pub public: bool,
    pub url: String,
    pub html_url: String,
    pub git_pull_url: String,
    pub git_push_url: String,
    pub forks_url: String,
    pub commits_url: String,
    pub comments_url: String,
    #[serde(default)]
    pub truncated: bool,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub comments_enabled: bool,
    #[serde(default)]
    pub files: Map<String, Value>,
}

impl Gist {
    /// File names in the order the service reported them
    pub fn file_names(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    /// Per-file metadata, if the file exists on the resource
    pub fn file(&self, name: &str) -> Option<GistFileInfo> {
        self.files
            .get(name)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }
}

/// Per-file metadata on a gist resource
#[derive(Clone, Debug, Deserialize)]
pub struct GistFileInfo {
    pub filename: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub language: Option<String>,
    pub raw_url: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub truncated: bool,
    pub content: Option<String>,
}

/// Structured error body returned on 4xx responses
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

/// One entry of a validation error body
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub resource: Option<String>,
    pub code: String,
    #[serde(default)]
    pub field: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serializes_files_in_insertion_order() {
        let payload = GistPayload::new("Public Gist", true)
            .file("public-gist-1.txt", "This is a test public gist 1.")
            .file("public-gist-2.txt", "This is a test public gist 2.");

        assert_eq!(
            payload.file_names(),
            vec!["public-gist-1.txt", "public-gist-2.txt"]
        );

        let json = payload.to_json();
        let idx1 = json.find("public-gist-1.txt").unwrap();
        let idx2 = json.find("public-gist-2.txt").unwrap();
        assert!(idx1 < idx2);
    }

    #[test]
    fn test_payload_delete_marker_is_null() {
        let payload = GistPayload::new("Public Gist", true).remove_file("public-gist.txt");

        let value: Value = serde_json::from_str(&payload.to_json()).unwrap();
        assert!(value["files"]["public-gist.txt"].is_null());
    }

    #[test]
    fn test_gist_deserializes_file_metadata() {
        let body = r#"{
            "id": "abc123",
            "description": "Public Gist",
            "public": true,
            "url": "https://api.github.com/gists/abc123",
            "html_url": "https://gist.github.com/abc123",
            "git_pull_url": "https://gist.github.com/abc123.git",
            "git_push_url": "https://gist.github.com/abc123.git",
            "forks_url": "https://api.github.com/gists/abc123/forks",
            "commits_url": "https://api.github.com/gists/abc123/commits",
            "comments_url": "https://api.github.com/gists/abc123/comments",
            "truncated": false,
            "comments": 0,
            "comments_enabled": true,
            "files": {
                "public-gist.txt": {
                    "filename": "public-gist.txt",
                    "type": "text/plain",
                    "language": "Text",
                    "raw_url": "https://gist.github.com/raw/abc123/public-gist.txt",
                    "size": 27,
                    "content": "This is a test public gist."
                }
            }
        }"#;

        let gist: Gist = serde_json::from_str(body).unwrap();
        assert_eq!(gist.id, "abc123");
        assert_eq!(gist.file_names(), vec!["public-gist.txt"]);

        let file = gist.file("public-gist.txt").unwrap();
        assert_eq!(file.content_type, "text/plain");
        assert_eq!(file.language.as_deref(), Some("Text"));
        assert!(file.raw_url.contains("abc123"));
    }

    #[test]
    fn test_error_body_parses_validation_failure() {
        let body = r#"{
            "message": "Validation Failed",
            "errors": [{"resource": "Gist", "code": "missing_field", "field": "files"}],
            "status": "422"
        }"#;

        let error: ApiErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(error.message, "Validation Failed");
        assert_eq!(error.status.as_deref(), Some("422"));
        assert_eq!(error.errors[0].code, "missing_field");
        assert_eq!(error.errors[0].field.as_deref(), Some("files"));
    }

    #[test]
    fn test_error_body_parses_bare_message() {
        let error: ApiErrorBody =
            serde_json::from_str(r#"{"message": "Bad credentials", "status": "401"}"#).unwrap();
        assert_eq!(error.message, "Bad credentials");
        assert!(error.errors.is_empty());
    }
}
