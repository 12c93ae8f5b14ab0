//! Scenario and result models
//!
//! Defines the 18 conformance scenarios, their execution status and the
//! result/summary types produced by the runner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// All 18 conformance scenarios
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    // Create scenarios (1-7)
    CreatePublicGist,
    CreatePrivateGist,
    CreateEmptyDescription,
    CreateNoFiles,
    CreateEmptyFileContent,
    CreateBadCredentials,
    CreateMultipleFiles,

    // Update scenarios (8-12)
    UpdateDescriptionAndContent,
    UpdateRenameFile,
    UpdateRemoveFile,
    UpdateUnknownId,
    UpdateMultipleFiles,

    // Delete scenarios (13-16)
    DeleteExisting,
    DeleteUnknownId,
    DeleteBadCredentials,
    DeleteTwice,

    // Lifecycle scenarios (17-18)
    FullLifecycle,
    ListGists,
}

impl Scenario {
    /// Get scenario number (1-18)
    pub fn number(&self) -> u8 {
        match self {
            Scenario::CreatePublicGist => 1,
            Scenario::CreatePrivateGist => 2,
            Scenario::CreateEmptyDescription => 3,
            Scenario::CreateNoFiles => 4,
            Scenario::CreateEmptyFileContent => 5,
            Scenario::CreateBadCredentials => 6,
            Scenario::CreateMultipleFiles => 7,
            Scenario::UpdateDescriptionAndContent => 8,
            Scenario::UpdateRenameFile => 9,
            Scenario::UpdateRemoveFile => 10,
            Scenario::UpdateUnknownId => 11,
            Scenario::UpdateMultipleFiles => 12,
            Scenario::DeleteExisting => 13,
            Scenario::DeleteUnknownId => 14,
            Scenario::DeleteBadCredentials => 15,
            Scenario::DeleteTwice => 16,
            Scenario::FullLifecycle => 17,
            Scenario::ListGists => 18,
        }
    }

    /// Get scenario name
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::CreatePublicGist => "Create Public Gist",
            Scenario::CreatePrivateGist => "Create Private Gist",
            Scenario::CreateEmptyDescription => "Create Empty Description",
            Scenario::CreateNoFiles => "Create No Files",
            Scenario::CreateEmptyFileContent => "Create Empty File Content",
            Scenario::CreateBadCredentials => "Create Bad Credentials",
            Scenario::CreateMultipleFiles => "Create Multiple Files",
            Scenario::UpdateDescriptionAndContent => "Update Description & Content",
            Scenario::UpdateRenameFile => "Update Rename File",
            Scenario::UpdateRemoveFile => "Update Remove File",
            Scenario::UpdateUnknownId => "Update Unknown Id",
            Scenario::UpdateMultipleFiles => "Update Multiple Files",
            Scenario::DeleteExisting => "Delete Existing Gist",
            Scenario::DeleteUnknownId => "Delete Unknown Id",
            Scenario::DeleteBadCredentials => "Delete Bad Credentials",
            Scenario::DeleteTwice => "Delete Twice",
            Scenario::FullLifecycle => "Full Lifecycle",
            Scenario::ListGists => "List Gists",
        }
    }

    /// Get scenario category
    pub fn category(&self) -> &'static str {
        match self {
            Scenario::CreatePublicGist
            | Scenario::CreatePrivateGist
            | Scenario::CreateEmptyDescription
            | Scenario::CreateNoFiles
            | Scenario::CreateEmptyFileContent
            | Scenario::CreateBadCredentials
            | Scenario::CreateMultipleFiles => "Create",
            Scenario::UpdateDescriptionAndContent
            | Scenario::UpdateRenameFile
            | Scenario::UpdateRemoveFile
            | Scenario::UpdateUnknownId
            | Scenario::UpdateMultipleFiles => "Update",
            Scenario::DeleteExisting
            | Scenario::DeleteUnknownId
            | Scenario::DeleteBadCredentials
            | Scenario::DeleteTwice => "Delete",
            _ => "Lifecycle",
        }
    }

    /// Get all scenarios in execution order
    pub fn all() -> Vec<Scenario> {
        vec![
            Scenario::CreatePublicGist,
            Scenario::CreatePrivateGist,
            Scenario::CreateEmptyDescription,
            Scenario::CreateNoFiles,
            Scenario::CreateEmptyFileContent,
            Scenario::CreateBadCredentials,
            Scenario::CreateMultipleFiles,
            Scenario::UpdateDescriptionAndContent,
            Scenario::UpdateRenameFile,
            Scenario::UpdateRemoveFile,
            Scenario::UpdateUnknownId,
            Scenario::UpdateMultipleFiles,
            Scenario::DeleteExisting,
            Scenario::DeleteUnknownId,
            Scenario::DeleteBadCredentials,
            Scenario::DeleteTwice,
            Scenario::FullLifecycle,
            Scenario::ListGists,
        ]
    }

    /// Parse from scenario number
    pub fn from_number(n: u8) -> Option<Scenario> {
        Scenario::all().into_iter().find(|s| s.number() == n)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scenario {}: {}", self.number(), self.name())
    }
}

/// Scenario execution status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioStatus {
    Pass,
    Fail,
    Skip,
    Error,
}

impl ScenarioStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            ScenarioStatus::Pass => "✓",
            ScenarioStatus::Fail => "✗",
            ScenarioStatus::Skip => "○",
            ScenarioStatus::Error => "!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ScenarioStatus::Pass)
    }
}

impl fmt::Display for ScenarioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioStatus::Pass => write!(f, "PASS"),
            ScenarioStatus::Fail => write!(f, "FAIL"),
            ScenarioStatus::Skip => write!(f, "SKIP"),
            ScenarioStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of a single scenario execution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub status: ScenarioStatus,
    pub duration_ms: u64,
    pub message: Option<String>,
}

impl ScenarioResult {
    pub fn pass(scenario: Scenario, duration_ms: u64) -> Self {
        Self {
            scenario,
            status: ScenarioStatus::Pass,
            duration_ms,
            message: None,
        }
    }

    pub fn fail(scenario: Scenario, duration_ms: u64, message: impl Into<String>) -> Self {
        Self {
            scenario,
            status: ScenarioStatus::Fail,
            duration_ms,
            message: Some(message.into()),
        }
    }

    pub fn skip(scenario: Scenario, reason: impl Into<String>) -> Self {
        Self {
            scenario,
            status: ScenarioStatus::Skip,
            duration_ms: 0,
            message: Some(reason.into()),
        }
    }

    pub fn error(scenario: Scenario, error: impl Into<String>) -> Self {
        Self {
            scenario,
            status: ScenarioStatus::Error,
            duration_ms: 0,
            message: Some(error.into()),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for ScenarioResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms]",
            self.status.symbol(),
            self.scenario,
            self.duration_ms
        )?;
        if let Some(msg) = &self.message {
            write!(f, " - {msg}")?;
        }
        Ok(())
    }
}

/// Summary of one full suite run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub round: u32,
    pub endpoint: String,
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub total_duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

impl RunSummary {
    pub fn new(round: u32, endpoint: impl Into<String>, results: Vec<ScenarioResult>) -> Self {
        let total = results.len();
        let passed = results
            .iter()
            .filter(|r| r.status == ScenarioStatus::Pass)
            .count();
        let failed = results
            .iter()
            .filter(|r| r.status == ScenarioStatus::Fail)
            .count();
        let skipped = results
            .iter()
            .filter(|r| r.status == ScenarioStatus::Skip)
            .count();
        let errors = results
            .iter()
            .filter(|r| r.status == ScenarioStatus::Error)
            .count();
        let total_duration_ms = results.iter().map(|r| r.duration_ms).sum();

        Self {
            round,
            endpoint: endpoint.into(),
            started_at: Utc::now(),
            total,
            passed,
            failed,
            skipped,
            errors,
            total_duration_ms,
            results,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}
