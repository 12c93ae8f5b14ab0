//! Delete scenarios (13-16)
//!
//! Deletion of an existing gist, the two not-found paths (unknown id,
//! already deleted) and deletion with rejected credentials.

use anyhow::Result;
use tracing::info;

use crate::config::SuiteConfig;
use crate::fixtures::{create as create_fixtures, BAD_CREDENTIALS_MESSAGE, NOT_FOUND_MESSAGE};
use crate::gist::{ApiErrorBody, Gist, GistClient};
use crate::models::{Scenario, ScenarioResult};
use crate::scenarios::Checks;

/// Delete scenario suite
pub struct DeleteSuite {
    client: GistClient,
}

impl DeleteSuite {
    pub fn new(config: &SuiteConfig) -> Result<Self> {
        Ok(Self {
            client: GistClient::new(config)?,
        })
    }

    pub async fn run_one(&self, scenario: Scenario) -> Result<ScenarioResult> {
        info!("Running {scenario}");
        match scenario {
            Scenario::DeleteExisting => self.delete_existing().await,
            Scenario::DeleteUnknownId => self.delete_unknown_id().await,
            Scenario::DeleteBadCredentials => self.delete_bad_credentials().await,
            Scenario::DeleteTwice => self.delete_twice().await,
            other => anyhow::bail!("{other} is not a delete scenario"),
        }
    }

    pub async fn run_all(&self) -> Result<Vec<ScenarioResult>> {
        let mut results = Vec::new();
        results.push(self.delete_existing().await?);
        results.push(self.delete_unknown_id().await?);
        results.push(self.delete_bad_credentials().await?);
        results.push(self.delete_twice().await?);
        Ok(results)
    }

    async fn setup_gist(&self) -> Result<Gist> {
        let response = self.client.create(&create_fixtures::valid_public_gist()).await?;
        anyhow::ensure!(
            response.status_code == 201,
            "setup create returned {} instead of 201",
            response.status_code
        );
        response.parse()
    }

    pub async fn delete_existing(&self) -> Result<ScenarioResult> {
        let mut checks = Checks::new(Scenario::DeleteExisting);

        let created = self.setup_gist().await?;
        let response = self.client.delete(&created.id).await?;
        checks.check_status("delete returns 204", response.status_code, 204);

        Ok(checks.finish())
    }

    pub async fn delete_unknown_id(&self) -> Result<ScenarioResult> {
        let mut checks = Checks::new(Scenario::DeleteUnknownId);

        let response = self.client.delete("non-existing-id").await?;
        checks.check_status("delete returns 404", response.status_code, 404);
        checks.check(
            "error body names Not Found",
            response.body_contains(NOT_FOUND_MESSAGE),
        );

        Ok(checks.finish())
    }

    pub async fn delete_bad_credentials(&self) -> Result<ScenarioResult> {
        let mut checks = Checks::new(Scenario::DeleteBadCredentials);

        let created = self.setup_gist().await?;

        let response = self.client.as_invalid().delete(&created.id).await?;
        checks.check_status("delete returns 401", response.status_code, 401);

        let error: ApiErrorBody = response.parse()?;
        checks.check_eq(
            "error message",
            error.message.as_str(),
            BAD_CREDENTIALS_MESSAGE,
        );
        checks.check_eq("error status", error.status.as_deref(), Some("401"));

        // The gist survived the rejected delete; clean it up for real.
        self.client.delete(&created.id).await?;

        Ok(checks.finish())
    }

    /// Idempotent-failure, not idempotent-success: 204 then 404.
    pub async fn delete_twice(&self) -> Result<ScenarioResult> {
        let mut checks = Checks::new(Scenario::DeleteTwice);

        let created = self.setup_gist().await?;

        let first = self.client.delete(&created.id).await?;
        checks.check_status("first delete returns 204", first.status_code, 204);

        let second = self.client.delete(&created.id).await?;
        checks.check_status("second delete returns 404", second.status_code, 404);

        let error: ApiErrorBody = second.parse()?;
        checks.check(
            "error message names Not Found",
            error.message.contains(NOT_FOUND_MESSAGE),
        );

        Ok(checks.finish())
    }
}
