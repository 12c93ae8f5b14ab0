//! Gist API conformance suite
//!
//! A library and CLI tool for validating a GitHub-style Gist REST API:
//! create, read, update, delete, star/unstar and list operations, each
//! exercised by scenarios that assert on literal status codes and response
//! fields.
//!
//! ## Layers
//!
//! - `fixtures` - named, immutable request payloads and expected error
//!   fragments
//! - `gist` - data model and the stateless `GistClient` (one HTTP call per
//!   operation, raw response returned for the caller to assert on)
//! - `scenarios` - assertion sequences grouped into create, update, delete
//!   and lifecycle suites
//! - `runner` - sequential scenario execution with round support
//!
//! The client layer never retries, never transforms responses and holds no
//! state across calls; a created gist id is threaded through a scenario by
//! return value only.

pub mod auth;
pub mod cleanup;
pub mod cli;
pub mod config;
pub mod fixtures;
pub mod gist;
pub mod http;
pub mod models;
pub mod output;
pub mod runner;
pub mod scenarios;

pub use config::SuiteConfig;
pub use gist::GistClient;
pub use models::{RunSummary, Scenario, ScenarioResult, ScenarioStatus};
pub use runner::SuiteRunner;
