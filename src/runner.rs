//! Suite execution runner
//!
//! Sequential by design: every call inside a scenario is awaited to
//! completion before the next one starts, and scenarios run one after the
//! other. Transport-level failures surface as `Error` results instead of
//! aborting the run.

use anyhow::Result;
use std::time::Instant;
use tracing::{error, info};

use crate::config::SuiteConfig;
use crate::models::{RunSummary, Scenario, ScenarioResult};
use crate::scenarios;

/// Runs conformance scenarios against one endpoint
pub struct SuiteRunner {
    config: SuiteConfig,
    skip: Vec<u8>,
}

impl SuiteRunner {
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            config,
            skip: Vec::new(),
        }
    }

    /// Scenario numbers to skip
    pub fn with_skip(mut self, skip: Vec<u8>) -> Self {
        self.skip = skip;
        self
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Run a single scenario, mapping failures to a result
    pub async fn run_scenario(&self, scenario: Scenario) -> ScenarioResult {
        if self.skip.contains(&scenario.number()) {
            return ScenarioResult::skip(scenario, "Skipped by configuration");
        }

        // The suite logs the scenario start; only outcomes are logged here.
        match scenarios::run_scenario(scenario, &self.config).await {
            Ok(result) => result,
            Err(e) => {
                error!("{scenario} failed with error: {e:#}");
                ScenarioResult::error(scenario, format!("{e:#}"))
            }
        }
    }

    /// Run all scenarios sequentially
    pub async fn run_all(&self) -> Result<RunSummary> {
        info!("Starting suite run against {}", self.config.endpoint);

        let start = Instant::now();
        let mut results = Vec::new();

        for scenario in Scenario::all() {
            let result = self.run_scenario(scenario).await;
            info!("  {result}");
            results.push(result);
        }

        let summary = RunSummary::new(1, &self.config.endpoint, results);

        info!(
            "Suite run completed in {}ms - Pass: {}/{} ({:.1}%)",
            start.elapsed().as_millis(),
            summary.passed,
            summary.total,
            summary.pass_rate()
        );

        Ok(summary)
    }

    /// Run multiple rounds of the full suite
    pub async fn run_rounds(&self, num_rounds: u32) -> Result<Vec<RunSummary>> {
        info!("Running {num_rounds} rounds against {}", self.config.endpoint);

        let mut summaries = Vec::new();

        for round in 1..=num_rounds {
            info!("=== Round {round}/{num_rounds} ===");

            let mut results = Vec::new();
            for scenario in Scenario::all() {
                results.push(self.run_scenario(scenario).await);
            }

            summaries.push(RunSummary::new(round, &self.config.endpoint, results));
        }

        Ok(summaries)
    }
}
