//! Update operation tests against the mock Gist service.

mod support;

use gist_suite::fixtures::{self, create as create_fixtures, update as update_fixtures};
use gist_suite::gist::{ApiErrorBody, Gist, GistClient, GistPayload};
use gist_suite::scenarios::UpdateSuite;
use gist_suite::SuiteConfig;

async fn create_gist(client: &GistClient, payload: &GistPayload) -> Gist {
    let response = client.create(payload).await.unwrap();
    assert_eq!(response.status_code, 201);
    response.parse().unwrap()
}

async fn setup() -> (SuiteConfig, GistClient) {
    let config = support::spawn_mock().await;
    let client = GistClient::new(&config).unwrap();
    (config, client)
}

#[tokio::test]
async fn update_description_and_content() {
    let (_config, client) = setup().await;
    let created = create_gist(&client, &create_fixtures::valid_public_gist()).await;

    let payload = update_fixtures::description_and_content();
    let response = client.update(&created.id, &payload).await.unwrap();
    assert_eq!(response.status_code, 200);

    let gist: Gist = response.parse().unwrap();
    assert_eq!(gist.description.as_deref(), Some("Updated Public Gist"));
    assert_eq!(gist.file_names(), vec!["public-gist.txt"]);

    let file = gist.file("public-gist.txt").unwrap();
    assert_eq!(
        file.content.as_deref(),
        Some("This is a updated test public gist.")
    );
    assert_eq!(file.content_type, "text/plain");
    assert_eq!(file.language.as_deref(), Some("Text"));
}

#[tokio::test]
async fn rename_file_in_gist() {
    let (_config, client) = setup().await;
    let created = create_gist(&client, &create_fixtures::valid_public_gist()).await;

    let response = client
        .update(&created.id, &update_fixtures::rename_file())
        .await
        .unwrap();
    assert_eq!(response.status_code, 200);

    let gist: Gist = response.parse().unwrap();
    assert!(gist.has_file("new-public-gist.txt"));
    assert!(!gist.has_file("public-gist.txt"));

    let file = gist.file("new-public-gist.txt").unwrap();
    assert_eq!(file.content.as_deref(), Some("This is a test public gist."));
}

#[tokio::test]
async fn delete_file_from_gist_via_null_marker() {
    let (_config, client) = setup().await;
    let created = create_gist(&client, &create_fixtures::valid_public_gist()).await;

    let response = client
        .update(&created.id, &update_fixtures::delete_file())
        .await
        .unwrap();
    assert_eq!(response.status_code, 200);

    let gist: Gist = response.parse().unwrap();
    assert!(!gist.has_file("public-gist.txt"));
    assert!(gist.file_names().is_empty());
}

#[tokio::test]
async fn update_unknown_gist_id_returns_not_found() {
    let (_config, client) = setup().await;

    let response = client
        .update("invalid-gist-id", &update_fixtures::delete_file())
        .await
        .unwrap();
    assert_eq!(response.status_code, 404);

    let error: ApiErrorBody = response.parse().unwrap();
    assert_eq!(error.message, fixtures::NOT_FOUND_MESSAGE);
    assert_eq!(error.status.as_deref(), Some("404"));
}

#[tokio::test]
async fn update_with_empty_content_fails_validation() {
    let (_config, client) = setup().await;
    let created = create_gist(&client, &create_fixtures::valid_public_gist()).await;

    let payload = GistPayload::new("Public Gist", true).file("public-gist.txt", "");
    let response = client.update(&created.id, &payload).await.unwrap();
    assert_eq!(response.status_code, 422);

    let error: ApiErrorBody = response.parse().unwrap();
    assert_eq!(error.message, fixtures::VALIDATION_FAILED_MESSAGE);
}

#[tokio::test]
async fn update_multiple_files_at_once() {
    let (_config, client) = setup().await;
    let created = create_gist(&client, &create_fixtures::multiple_files()).await;

    let response = client
        .update(&created.id, &update_fixtures::multiple_files())
        .await
        .unwrap();
    assert_eq!(response.status_code, 200);

    let gist: Gist = response.parse().unwrap();
    assert_eq!(
        gist.file_names(),
        vec!["public-gist-1.txt", "public-gist-2.txt"]
    );
    assert_eq!(
        gist.file("public-gist-1.txt").unwrap().content.as_deref(),
        Some("This is a updated test public gist 1.")
    );
    assert_eq!(
        gist.file("public-gist-2.txt").unwrap().content.as_deref(),
        Some("This is a updated test public gist 2.")
    );
}

#[tokio::test]
async fn update_suite_passes_end_to_end() {
    let config = support::spawn_mock().await;
    let suite = UpdateSuite::new(&config).unwrap();

    for result in suite.run_all().await.unwrap() {
        assert!(
            result.status.is_success(),
            "{} failed:\n{}",
            result.scenario,
            result.message.unwrap_or_default()
        );
    }
}
