//! Conformance scenario implementations
//!
//! Scenarios are grouped into four suites mirroring the operations they
//! exercise:
//!
//! - Create scenarios (1-7)
//! - Update scenarios (8-12)
//! - Delete scenarios (13-16)
//! - Lifecycle scenarios (17-18)
//!
//! Each scenario issues its calls strictly sequentially and creates its own
//! gist when it needs one; the created id is passed along by return value so
//! scenarios stay independently runnable.

mod create;
mod delete;
mod lifecycle;
mod update;

pub use create::CreateSuite;
pub use delete::DeleteSuite;
pub use lifecycle::LifecycleSuite;
pub use update::UpdateSuite;

use anyhow::Result;
use std::fmt::Debug;
use std::time::Instant;

use crate::config::SuiteConfig;
use crate::gist::{Gist, GistPayload};
use crate::models::{Scenario, ScenarioResult, ScenarioStatus};

/// Run a single scenario against the configured endpoint
pub async fn run_scenario(scenario: Scenario, config: &SuiteConfig) -> Result<ScenarioResult> {
    match scenario {
        Scenario::CreatePublicGist
        | Scenario::CreatePrivateGist
        | Scenario::CreateEmptyDescription
        | Scenario::CreateNoFiles
        | Scenario::CreateEmptyFileContent
        | Scenario::CreateBadCredentials
        | Scenario::CreateMultipleFiles => CreateSuite::new(config)?.run_one(scenario).await,
        Scenario::UpdateDescriptionAndContent
        | Scenario::UpdateRenameFile
        | Scenario::UpdateRemoveFile
        | Scenario::UpdateUnknownId
        | Scenario::UpdateMultipleFiles => UpdateSuite::new(config)?.run_one(scenario).await,
        Scenario::DeleteExisting
        | Scenario::DeleteUnknownId
        | Scenario::DeleteBadCredentials
        | Scenario::DeleteTwice => DeleteSuite::new(config)?.run_one(scenario).await,
        Scenario::FullLifecycle | Scenario::ListGists => {
            LifecycleSuite::new(config)?.run_one(scenario).await
        }
    }
}

/// Run every scenario in order
pub async fn run_all(config: &SuiteConfig) -> Result<Vec<ScenarioResult>> {
    let mut results = Vec::new();

    results.extend(CreateSuite::new(config)?.run_all().await?);
    results.extend(UpdateSuite::new(config)?.run_all().await?);
    results.extend(DeleteSuite::new(config)?.run_all().await?);
    results.extend(LifecycleSuite::new(config)?.run_all().await?);

    Ok(results)
}

/// Check collector for one scenario run
///
/// Accumulates ✓/✗ detail lines the same way the runner reports them, then
/// folds into a `ScenarioResult`.
pub(crate) struct Checks {
    scenario: Scenario,
    start: Instant,
    all_passed: bool,
    details: Vec<String>,
}

impl Checks {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            start: Instant::now(),
            all_passed: true,
            details: Vec::new(),
        }
    }

    pub fn check(&mut self, label: &str, passed: bool) {
        if passed {
            self.details.push(format!("✓ {label}"));
        } else {
            self.all_passed = false;
            self.details.push(format!("✗ {label}"));
        }
    }

    pub fn check_eq<T: PartialEq + Debug>(&mut self, label: &str, actual: T, expected: T) {
        if actual == expected {
            self.details.push(format!("✓ {label}"));
        } else {
            self.all_passed = false;
            self.details
                .push(format!("✗ {label}: expected {expected:?} but got {actual:?}"));
        }
    }

    pub fn check_status(&mut self, label: &str, actual: u16, expected: u16) {
        self.check_eq(label, actual, expected);
    }

    pub fn finish(self) -> ScenarioResult {
        ScenarioResult {
            scenario: self.scenario,
            status: if self.all_passed {
                ScenarioStatus::Pass
            } else {
                ScenarioStatus::Fail
            },
            duration_ms: self.start.elapsed().as_millis() as u64,
            message: Some(self.details.join("\n")),
        }
    }
}

/// Shared assertions over a returned gist resource
///
/// Verifies the echoed description and public flag, the ordered file key
/// set, per-file metadata for text files, and the derived resource URLs.
pub(crate) fn verify_gist_resource(
    checks: &mut Checks,
    gist: &Gist,
    payload: &GistPayload,
    endpoint: &str,
) {
    checks.check_eq(
        "description echoed",
        gist.description.as_deref().unwrap_or(""),
        payload.description.as_str(),
    );
    checks.check_eq("public flag echoed", gist.public, payload.public);

    let expected_names: Vec<&str> = payload
        .files
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, _)| k.as_str())
        .collect();
    checks.check_eq("file keys match payload order", gist.file_names(), expected_names);

    for name in gist.file_names() {
        match gist.file(name) {
            Some(file) => {
                checks.check_eq(
                    &format!("{name} content type"),
                    file.content_type.as_str(),
                    "text/plain",
                );
                checks.check_eq(
                    &format!("{name} language"),
                    file.language.as_deref(),
                    Some("Text"),
                );
                checks.check(
                    &format!("{name} raw_url contains gist id"),
                    file.raw_url.contains(&gist.id),
                );
            }
            None => checks.check(&format!("{name} metadata parseable"), false),
        }
    }

    let base = endpoint.trim_end_matches('/');
    checks.check_eq(
        "resource url",
        gist.url.as_str(),
        format!("{base}/gists/{}", gist.id).as_str(),
    );
    checks.check(
        "forks_url derived",
        gist.forks_url.contains(&format!("/gists/{}/forks", gist.id)),
    );
    checks.check(
        "commits_url derived",
        gist.commits_url.contains(&format!("/gists/{}/commits", gist.id)),
    );
    checks.check(
        "comments_url derived",
        gist.comments_url.contains(&format!("/gists/{}/comments", gist.id)),
    );
    checks.check("git_pull_url contains gist id", gist.git_pull_url.contains(&gist.id));
    checks.check("git_push_url contains gist id", gist.git_push_url.contains(&gist.id));
    checks.check("html_url contains gist id", gist.html_url.contains(&gist.id));

    checks.check_eq("not truncated", gist.truncated, false);
    checks.check_eq("no comments yet", gist.comments, 0);
}
