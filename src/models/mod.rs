//! Data models for the conformance suite
//!
//! Scenario identifiers, execution status and result/summary types.

mod scenario;

pub use scenario::{RunSummary, Scenario, ScenarioResult, ScenarioStatus};
