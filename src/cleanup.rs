//! Account cleanup utility
//!
//! Deletes every gist the token can list, bounded by a hard cap so a
//! misconfigured account can never turn this into an unbounded sweep. The
//! CLI only reaches this behind an explicit `--yes` confirmation.

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use crate::gist::{Gist, GistClient};

/// Upper bound on deletions per invocation
pub const MAX_DELETIONS: usize = 100;

/// Outcome of a cleanup pass
#[derive(Clone, Debug, Serialize)]
pub struct PurgeReport {
    pub deleted: usize,
    pub failed: usize,
    pub remaining: usize,
}

/// Delete listed gists until the account is empty or the cap is reached.
///
/// Idempotent: a gist deleted by a concurrent actor between list and delete
/// counts as already gone, not as a failure.
pub async fn purge_account(client: &GistClient, max_deletions: usize) -> Result<PurgeReport> {
    let cap = max_deletions.min(MAX_DELETIONS);
    let mut deleted = 0;
    let mut failed = 0;

    loop {
        let response = client.list().await?;
        anyhow::ensure!(
            response.status_code == 200,
            "list returned {} instead of 200",
            response.status_code
        );

        let gists: Vec<Gist> = response.parse()?;
        if gists.is_empty() {
            return Ok(PurgeReport {
                deleted,
                failed,
                remaining: 0,
            });
        }

        for gist in &gists {
            if deleted + failed >= cap {
                warn!("Cleanup cap of {cap} reached with gists remaining");
                let remaining = client
                    .list()
                    .await?
                    .parse::<Vec<Gist>>()
                    .map(|g| g.len())
                    .unwrap_or(0);
                return Ok(PurgeReport {
                    deleted,
                    failed,
                    remaining,
                });
            }

            let response = client.delete(&gist.id).await?;
            match response.status_code {
                // 404: already gone, still counts as cleaned up
                204 | 404 => {
                    info!("Deleted gist {}", gist.id);
                    deleted += 1;
                }
                status => {
                    warn!("Failed to delete gist {}: status {status}", gist.id);
                    failed += 1;
                }
            }
        }

        // A full page of failures means another pass cannot make progress
        if deleted == 0 && failed > 0 {
            let remaining = gists.len().saturating_sub(deleted);
            return Ok(PurgeReport {
                deleted,
                failed,
                remaining,
            });
        }
    }
}
