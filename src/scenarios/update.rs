//! Update scenarios (8-12)
//!
//! Each scenario creates its own gist first so that runs never race on a
//! shared identifier; the created id travels by return value only.

use anyhow::Result;
use tracing::info;

use crate::config::SuiteConfig;
use crate::fixtures::{create as create_fixtures, update as update_fixtures, NOT_FOUND_MESSAGE};
use crate::gist::{ApiErrorBody, Gist, GistClient, GistPayload};
use crate::models::{Scenario, ScenarioResult};
use crate::scenarios::{verify_gist_resource, Checks};

/// Update scenario suite
pub struct UpdateSuite {
    client: GistClient,
    endpoint: String,
}

impl UpdateSuite {
    pub fn new(config: &SuiteConfig) -> Result<Self> {
        Ok(Self {
            client: GistClient::new(config)?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub async fn run_one(&self, scenario: Scenario) -> Result<ScenarioResult> {
        info!("Running {scenario}");
        match scenario {
            Scenario::UpdateDescriptionAndContent => self.update_description_and_content().await,
            Scenario::UpdateRenameFile => self.update_rename_file().await,
            Scenario::UpdateRemoveFile => self.update_remove_file().await,
            Scenario::UpdateUnknownId => self.update_unknown_id().await,
            Scenario::UpdateMultipleFiles => self.update_multiple_files().await,
            other => anyhow::bail!("{other} is not an update scenario"),
        }
    }

    pub async fn run_all(&self) -> Result<Vec<ScenarioResult>> {
        let mut results = Vec::new();
        results.push(self.update_description_and_content().await?);
        results.push(self.update_rename_file().await?);
        results.push(self.update_remove_file().await?);
        results.push(self.update_unknown_id().await?);
        results.push(self.update_multiple_files().await?);
        Ok(results)
    }

    /// Create the setup gist this scenario will update
    async fn setup_gist(&self, payload: &GistPayload) -> Result<Gist> {
        let response = self.client.create(payload).await?;
        anyhow::ensure!(
            response.status_code == 201,
            "setup create returned {} instead of 201",
            response.status_code
        );
        response.parse()
    }

    async fn update_and_verify(
        &self,
        scenario: Scenario,
        setup: GistPayload,
        update: GistPayload,
    ) -> Result<ScenarioResult> {
        let mut checks = Checks::new(scenario);

        let created = self.setup_gist(&setup).await?;

        let response = self.client.update(&created.id, &update).await?;
        checks.check_status("update returns 200", response.status_code, 200);

        if response.status_code == 200 {
            let gist: Gist = response.parse()?;
            verify_gist_resource(&mut checks, &gist, &update, &self.endpoint);
        }

        self.client.delete(&created.id).await?;

        Ok(checks.finish())
    }

    pub async fn update_description_and_content(&self) -> Result<ScenarioResult> {
        self.update_and_verify(
            Scenario::UpdateDescriptionAndContent,
            create_fixtures::valid_public_gist(),
            update_fixtures::description_and_content(),
        )
        .await
    }

    pub async fn update_rename_file(&self) -> Result<ScenarioResult> {
        let mut checks = Checks::new(Scenario::UpdateRenameFile);

        let created = self.setup_gist(&create_fixtures::valid_public_gist()).await?;

        let payload = update_fixtures::rename_file();
        let response = self.client.update(&created.id, &payload).await?;
        checks.check_status("update returns 200", response.status_code, 200);

        if response.status_code == 200 {
            let gist: Gist = response.parse()?;
            checks.check_eq("renamed file present", gist.file_names(), vec!["new-public-gist.txt"]);
            checks.check("old name removed", !gist.has_file("public-gist.txt"));
            match gist.file("new-public-gist.txt") {
                Some(file) => {
                    checks.check_eq(
                        "content carried over",
                        file.content.as_deref(),
                        Some("This is a test public gist."),
                    );
                }
                None => checks.check("renamed file metadata parseable", false),
            }
        }

        self.client.delete(&created.id).await?;

        Ok(checks.finish())
    }

    pub async fn update_remove_file(&self) -> Result<ScenarioResult> {
        let mut checks = Checks::new(Scenario::UpdateRemoveFile);

        let created = self.setup_gist(&create_fixtures::valid_public_gist()).await?;

        let response = self
            .client
            .update(&created.id, &update_fixtures::delete_file())
            .await?;
        checks.check_status("update returns 200", response.status_code, 200);

        if response.status_code == 200 {
            let gist: Gist = response.parse()?;
            checks.check(
                "deleted file omitted from resource",
                !gist.has_file("public-gist.txt"),
            );
        }

        self.client.delete(&created.id).await?;

        Ok(checks.finish())
    }

    pub async fn update_unknown_id(&self) -> Result<ScenarioResult> {
        let mut checks = Checks::new(Scenario::UpdateUnknownId);

        let response = self
            .client
            .update("invalid-gist-id", &update_fixtures::delete_file())
            .await?;
        checks.check_status("update returns 404", response.status_code, 404);

        let error: ApiErrorBody = response.parse()?;
        checks.check_eq("error message", error.message.as_str(), NOT_FOUND_MESSAGE);
        checks.check_eq("error status", error.status.as_deref(), Some("404"));

        Ok(checks.finish())
    }

    pub async fn update_multiple_files(&self) -> Result<ScenarioResult> {
        self.update_and_verify(
            Scenario::UpdateMultipleFiles,
            create_fixtures::multiple_files(),
            update_fixtures::multiple_files(),
        )
        .await
    }
}
