//! Create scenarios (1-7)
//!
//! Valid public/private/multi-file creation, the two validation failures
//! (no files, empty file content) and the authentication failure path.

use anyhow::Result;
use tracing::info;

use crate::config::SuiteConfig;
use crate::fixtures::{
    create as create_fixtures, BAD_CREDENTIALS_MESSAGE, FILES_FIELD, MISSING_FIELD_CODE,
    VALIDATION_FAILED_MESSAGE,
};
use crate::gist::{ApiErrorBody, Gist, GistClient, GistPayload};
use crate::models::{Scenario, ScenarioResult};
use crate::scenarios::{verify_gist_resource, Checks};

/// Create scenario suite
pub struct CreateSuite {
    client: GistClient,
    endpoint: String,
}

impl CreateSuite {
    pub fn new(config: &SuiteConfig) -> Result<Self> {
        Ok(Self {
            client: GistClient::new(config)?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub async fn run_one(&self, scenario: Scenario) -> Result<ScenarioResult> {
        info!("Running {scenario}");
        match scenario {
            Scenario::CreatePublicGist => self.create_public_gist().await,
            Scenario::CreatePrivateGist => self.create_private_gist().await,
            Scenario::CreateEmptyDescription => self.create_empty_description().await,
            Scenario::CreateNoFiles => self.create_no_files().await,
            Scenario::CreateEmptyFileContent => self.create_empty_file_content().await,
            Scenario::CreateBadCredentials => self.create_bad_credentials().await,
            Scenario::CreateMultipleFiles => self.create_multiple_files().await,
            other => anyhow::bail!("{other} is not a create scenario"),
        }
    }

    pub async fn run_all(&self) -> Result<Vec<ScenarioResult>> {
        let mut results = Vec::new();
        results.push(self.create_public_gist().await?);
        results.push(self.create_private_gist().await?);
        results.push(self.create_empty_description().await?);
        results.push(self.create_no_files().await?);
        results.push(self.create_empty_file_content().await?);
        results.push(self.create_bad_credentials().await?);
        results.push(self.create_multiple_files().await?);
        Ok(results)
    }

    /// Valid creation: assert 201 and a fully-formed resource, then clean up.
    async fn create_and_verify(
        &self,
        scenario: Scenario,
        payload: GistPayload,
    ) -> Result<ScenarioResult> {
        let mut checks = Checks::new(scenario);

        let response = self.client.create(&payload).await?;
        checks.check_status("create returns 201", response.status_code, 201);

        if response.status_code == 201 {
            let gist: Gist = response.parse()?;
            verify_gist_resource(&mut checks, &gist, &payload, &self.endpoint);
            checks.check_eq("comments enabled", gist.comments_enabled, true);

            self.client.delete(&gist.id).await?;
        }

        Ok(checks.finish())
    }

    /// Validation failure: assert 422 and the structured error body.
    async fn create_and_expect_validation_failure(
        &self,
        scenario: Scenario,
        payload: GistPayload,
    ) -> Result<ScenarioResult> {
        let mut checks = Checks::new(scenario);

        let response = self.client.create(&payload).await?;
        checks.check_status("create returns 422", response.status_code, 422);

        let error: ApiErrorBody = response.parse()?;
        checks.check_eq("error message", error.message.as_str(), VALIDATION_FAILED_MESSAGE);
        checks.check_eq("error status", error.status.as_deref(), Some("422"));
        match error.errors.first() {
            Some(detail) => {
                checks.check_eq("error code", detail.code.as_str(), MISSING_FIELD_CODE);
                checks.check_eq("error field", detail.field.as_deref(), Some(FILES_FIELD));
            }
            None => checks.check("error detail present", false),
        }

        Ok(checks.finish())
    }

    pub async fn create_public_gist(&self) -> Result<ScenarioResult> {
        self.create_and_verify(
            Scenario::CreatePublicGist,
            create_fixtures::valid_public_gist(),
        )
        .await
    }

    pub async fn create_private_gist(&self) -> Result<ScenarioResult> {
        self.create_and_verify(
            Scenario::CreatePrivateGist,
            create_fixtures::valid_private_gist(),
        )
        .await
    }

    pub async fn create_empty_description(&self) -> Result<ScenarioResult> {
        self.create_and_verify(
            Scenario::CreateEmptyDescription,
            create_fixtures::empty_description(),
        )
        .await
    }

    pub async fn create_no_files(&self) -> Result<ScenarioResult> {
        self.create_and_expect_validation_failure(Scenario::CreateNoFiles, create_fixtures::no_files())
            .await
    }

    pub async fn create_empty_file_content(&self) -> Result<ScenarioResult> {
        self.create_and_expect_validation_failure(
            Scenario::CreateEmptyFileContent,
            create_fixtures::empty_file_content(),
        )
        .await
    }

    /// A valid payload sent with the invalid credential set must 401.
    pub async fn create_bad_credentials(&self) -> Result<ScenarioResult> {
        let mut checks = Checks::new(Scenario::CreateBadCredentials);

        let response = self
            .client
            .as_invalid()
            .create(&create_fixtures::valid_public_gist())
            .await?;
        checks.check_status("create returns 401", response.status_code, 401);

        let error: ApiErrorBody = response.parse()?;
        checks.check_eq(
            "error message",
            error.message.as_str(),
            BAD_CREDENTIALS_MESSAGE,
        );
        checks.check_eq("error status", error.status.as_deref(), Some("401"));

        Ok(checks.finish())
    }

    pub async fn create_multiple_files(&self) -> Result<ScenarioResult> {
        self.create_and_verify(
            Scenario::CreateMultipleFiles,
            create_fixtures::multiple_files(),
        )
        .await
    }
}
