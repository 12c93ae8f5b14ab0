//! Lifecycle scenarios (17-18)
//!
//! The full create → read → update → star → unstar → delete round trip, and
//! the list operation.

use anyhow::Result;
use tracing::info;

use crate::config::SuiteConfig;
use crate::fixtures::{create as create_fixtures, update as update_fixtures};
use crate::gist::{Gist, GistClient};
use crate::models::{Scenario, ScenarioResult};
use crate::scenarios::Checks;

/// Lifecycle scenario suite
pub struct LifecycleSuite {
    client: GistClient,
}

impl LifecycleSuite {
    pub fn new(config: &SuiteConfig) -> Result<Self> {
        Ok(Self {
            client: GistClient::new(config)?,
        })
    }

    pub async fn run_one(&self, scenario: Scenario) -> Result<ScenarioResult> {
        info!("Running {scenario}");
        match scenario {
            Scenario::FullLifecycle => self.full_lifecycle().await,
            Scenario::ListGists => self.list_gists().await,
            other => anyhow::bail!("{other} is not a lifecycle scenario"),
        }
    }

    pub async fn run_all(&self) -> Result<Vec<ScenarioResult>> {
        let mut results = Vec::new();
        results.push(self.full_lifecycle().await?);
        results.push(self.list_gists().await?);
        Ok(results)
    }

    /// Create, read back, update, toggle the star and delete one gist,
    /// checking every status transition along the way.
    pub async fn full_lifecycle(&self) -> Result<ScenarioResult> {
        let mut checks = Checks::new(Scenario::FullLifecycle);

        // 1. Create
        let payload = create_fixtures::valid_public_gist();
        let response = self.client.create(&payload).await?;
        checks.check_status("create returns 201", response.status_code, 201);
        if response.status_code != 201 {
            return Ok(checks.finish());
        }
        let created: Gist = response.parse()?;
        checks.check_eq(
            "created description",
            created.description.as_deref(),
            Some(payload.description.as_str()),
        );
        checks.check_eq("created file keys", created.file_names(), payload.file_names());
        checks.check_eq("created public flag", created.public, true);

        // 2. Read back
        let response = self.client.get(&created.id).await?;
        checks.check_status("get returns 200", response.status_code, 200);
        if response.status_code == 200 {
            let fetched: Gist = response.parse()?;
            checks.check_eq(
                "fetched description",
                fetched.description.as_deref(),
                Some(payload.description.as_str()),
            );
            checks.check_eq("fetched file keys", fetched.file_names(), payload.file_names());
        }

        // 3. Update
        let update = update_fixtures::description_and_content();
        let response = self.client.update(&created.id, &update).await?;
        checks.check_status("update returns 200", response.status_code, 200);
        if response.status_code == 200 {
            let updated: Gist = response.parse()?;
            checks.check_eq(
                "updated description",
                updated.description.as_deref(),
                Some(update.description.as_str()),
            );
            checks.check_eq("updated file keys", updated.file_names(), update.file_names());
        }

        // 4. Star and verify
        let response = self.client.star(&created.id).await?;
        checks.check_status("star returns 204", response.status_code, 204);
        let response = self.client.is_starred(&created.id).await?;
        checks.check_status("is_starred returns 204 after star", response.status_code, 204);

        // 5. Unstar and verify
        let response = self.client.unstar(&created.id).await?;
        checks.check_status("unstar returns 204", response.status_code, 204);
        let response = self.client.is_starred(&created.id).await?;
        checks.check_status("is_starred returns 404 after unstar", response.status_code, 404);

        // 6. Delete
        let response = self.client.delete(&created.id).await?;
        checks.check_status("delete returns 204", response.status_code, 204);

        // 7. Confirm gone
        let response = self.client.get(&created.id).await?;
        checks.check_status("get after delete returns 404", response.status_code, 404);

        Ok(checks.finish())
    }

    /// Listing must include a freshly created gist.
    pub async fn list_gists(&self) -> Result<ScenarioResult> {
        let mut checks = Checks::new(Scenario::ListGists);

        let response = self.client.create(&create_fixtures::valid_public_gist()).await?;
        anyhow::ensure!(
            response.status_code == 201,
            "setup create returned {} instead of 201",
            response.status_code
        );
        let created: Gist = response.parse()?;

        let response = self.client.list().await?;
        checks.check_status("list returns 200", response.status_code, 200);

        if response.status_code == 200 {
            let gists: Vec<Gist> = response.parse()?;
            checks.check("list is non-empty", !gists.is_empty());
            checks.check(
                "list contains the created gist",
                gists.iter().any(|g| g.id == created.id),
            );
        }

        self.client.delete(&created.id).await?;

        Ok(checks.finish())
    }
}
