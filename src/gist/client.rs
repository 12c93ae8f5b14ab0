//! Gist API client
//!
//! One method per Gist operation, each issuing exactly one HTTP call against
//! the configured endpoint and returning the raw response. No retries, no
//! response transformation, no state retained between calls. The credential
//! set is fixed at construction; scenarios that provoke 401s build a second
//! client around `CredentialSet::invalid()`.

use anyhow::Result;
use tracing::debug;

use crate::auth::CredentialSet;
use crate::config::SuiteConfig;
use crate::gist::GistPayload;
use crate::http::{HttpClient, HttpRequest, HttpResponse};

/// Stateless client for the Gist API
#[derive(Clone)]
pub struct GistClient {
    http: HttpClient,
    credentials: CredentialSet,
}

impl GistClient {
    /// Client using the valid credential set from the configuration
    pub fn new(config: &SuiteConfig) -> Result<Self> {
        Self::with_credentials(config, CredentialSet::valid(&config.token))
    }

    /// Client using an explicit credential set
    pub fn with_credentials(config: &SuiteConfig, credentials: CredentialSet) -> Result<Self> {
        let http = HttpClient::with_timeout(config.timeout_secs)?.base_url(&config.endpoint);
        Ok(Self { http, credentials })
    }

    /// Same endpoint and timeout, invalid credentials
    pub fn as_invalid(&self) -> Self {
        Self {
            http: self.http.clone(),
            credentials: CredentialSet::invalid(),
        }
    }

    fn authed(&self, request: HttpRequest) -> HttpRequest {
        request.headers(self.credentials.headers())
    }

    /// POST /gists - create a gist (201, or 422 on invalid payload)
    pub async fn create(&self, payload: &GistPayload) -> Result<HttpResponse> {
        debug!("Creating gist: {}", payload.description);
        self.http
            .send(self.authed(HttpRequest::post("/gists").body(payload.to_json())))
            .await
    }

    /// PATCH /gists/{id} - update a gist (200, or 404/422)
    pub async fn update(&self, gist_id: &str, payload: &GistPayload) -> Result<HttpResponse> {
        debug!("Updating gist {gist_id}");
        self.http
            .send(self.authed(HttpRequest::patch(format!("/gists/{gist_id}")).body(payload.to_json())))
            .await
    }

    /// DELETE /gists/{id} - delete a gist (204, or 404)
    pub async fn delete(&self, gist_id: &str) -> Result<HttpResponse> {
        debug!("Deleting gist {gist_id}");
        self.http
            .send(self.authed(HttpRequest::delete(format!("/gists/{gist_id}"))))
            .await
    }

    /// GET /gists/{id} - fetch a gist (200, or 404)
    pub async fn get(&self, gist_id: &str) -> Result<HttpResponse> {
        self.http
            .send(self.authed(HttpRequest::get(format!("/gists/{gist_id}"))))
            .await
    }

    /// GET /gists - list the authenticated user's gists (200)
    pub async fn list(&self) -> Result<HttpResponse> {
        self.http.send(self.authed(HttpRequest::get("/gists"))).await
    }

    /// PUT /gists/{id}/star - star a gist (204)
    pub async fn star(&self, gist_id: &str) -> Result<HttpResponse> {
        self.http
            .send(self.authed(HttpRequest::put(format!("/gists/{gist_id}/star"))))
            .await
    }

    /// DELETE /gists/{id}/star - unstar a gist (204)
    pub async fn unstar(&self, gist_id: &str) -> Result<HttpResponse> {
        self.http
            .send(self.authed(HttpRequest::delete(format!("/gists/{gist_id}/star"))))
            .await
    }

    /// GET /gists/{id}/star - 204 if starred, 404 if not
    pub async fn is_starred(&self, gist_id: &str) -> Result<HttpResponse> {
        self.http
            .send(self.authed(HttpRequest::get(format!("/gists/{gist_id}/star"))))
            .await
    }
}
