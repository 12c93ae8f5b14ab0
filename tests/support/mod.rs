//! In-process mock Gist service for integration tests
//!
//! Implements the subset of the Gist API the suite exercises, with the same
//! status codes and error bodies the real service produces: 201/200/204 on
//! success, 422 with a `missing_field` detail for invalid payloads, 401
//! `Bad credentials` for a rejected token and 404 `Not Found` otherwise.
//! File order is kept as declared by the request payload.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

use gist_suite::SuiteConfig;

/// Token the mock accepts as valid
pub const TEST_TOKEN: &str = "test-token";

#[derive(Clone)]
struct AppState {
    base_url: String,
    expected_auth: String,
    db: Arc<RwLock<Db>>,
}

#[derive(Default)]
struct Db {
    gists: HashMap<String, StoredGist>,
    starred: HashSet<String>,
}

#[derive(Clone)]
struct StoredGist {
    description: String,
    public: bool,
    // Vec keeps files in payload declaration order
    files: Vec<(String, String)>,
}

/// Bind an ephemeral port, serve the mock and return suite configuration
/// pointing at it.
pub async fn spawn_mock() -> SuiteConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");

    let state = AppState {
        base_url: base_url.clone(),
        expected_auth: format!("Bearer {TEST_TOKEN}"),
        db: Arc::new(RwLock::new(Db::default())),
    };

    let app = Router::new()
        .route("/gists", get(list_gists).post(create_gist))
        .route(
            "/gists/{id}",
            get(get_gist).patch(update_gist).delete(delete_gist),
        )
        .route(
            "/gists/{id}/star",
            get(is_starred).put(star_gist).delete(unstar_gist),
        )
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    SuiteConfig::default()
        .with_endpoint(base_url)
        .with_token(TEST_TOKEN)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Bad credentials", "status": "401"})),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "Not Found", "status": "404"})),
    )
        .into_response()
}

fn validation_failed() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "message": "Validation Failed",
            "errors": [{"resource": "Gist", "code": "missing_field", "field": "files"}],
            "status": "422"
        })),
    )
        .into_response()
}

fn check_auth(state: &AppState, headers: &HeaderMap) -> Result<(), Response> {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == state.expected_auth)
        .unwrap_or(false);
    if authorized {
        Ok(())
    } else {
        Err(unauthorized())
    }
}

fn render(state: &AppState, id: &str, gist: &StoredGist) -> Value {
    let base = &state.base_url;
    let mut files = Map::new();
    for (name, content) in &gist.files {
        files.insert(
            name.clone(),
            json!({
                "filename": name,
                "type": "text/plain",
                "language": "Text",
                "raw_url": format!("{base}/raw/{id}/{name}"),
                "size": content.len(),
                "truncated": false,
                "content": content
            }),
        );
    }

    json!({
        "id": id,
        "description": gist.description,
        "public": gist.public,
        "url": format!("{base}/gists/{id}"),
        "html_url": format!("{base}/{id}"),
        "git_pull_url": format!("{base}/{id}.git"),
        "git_push_url": format!("{base}/{id}.git"),
        "forks_url": format!("{base}/gists/{id}/forks"),
        "commits_url": format!("{base}/gists/{id}/commits"),
        "comments_url": format!("{base}/gists/{id}/comments"),
        "truncated": false,
        "comments": 0,
        "comments_enabled": true,
        "files": Value::Object(files)
    })
}

/// Extract `(name, content)` pairs from a payload files object; `Err` means
/// the payload is invalid for a create request.
fn parse_create_files(payload: &Value) -> Result<Vec<(String, String)>, ()> {
    let files = payload.get("files").and_then(Value::as_object).ok_or(())?;
    if files.is_empty() {
        return Err(());
    }

    let mut parsed = Vec::new();
    for (name, value) in files {
        let content = value
            .get("content")
            .and_then(Value::as_str)
            .ok_or(())?
            .to_string();
        if content.is_empty() {
            return Err(());
        }
        parsed.push((name.clone(), content));
    }
    Ok(parsed)
}

async fn create_gist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }

    let files = match parse_create_files(&payload) {
        Ok(files) => files,
        Err(()) => return validation_failed(),
    };

    let gist = StoredGist {
        description: payload
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        public: payload.get("public").and_then(Value::as_bool).unwrap_or(false),
        files,
    };

    let id = Uuid::new_v4().simple().to_string();
    let body = render(&state, &id, &gist);
    state.db.write().await.gists.insert(id, gist);

    (StatusCode::CREATED, Json(body)).into_response()
}

async fn list_gists(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }

    let db = state.db.read().await;
    let gists: Vec<Value> = db
        .gists
        .iter()
        .map(|(id, gist)| render(&state, id, gist))
        .collect();
    Json(gists).into_response()
}

async fn get_gist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }

    let db = state.db.read().await;
    match db.gists.get(&id) {
        Some(gist) => Json(render(&state, &id, gist)).into_response(),
        None => not_found(),
    }
}

async fn update_gist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }

    let mut db = state.db.write().await;
    let Some(gist) = db.gists.get_mut(&id) else {
        return not_found();
    };

    if let Some(description) = payload.get("description").and_then(Value::as_str) {
        gist.description = description.to_string();
    }

    if let Some(files) = payload.get("files").and_then(Value::as_object) {
        for (name, value) in files {
            if value.is_null() {
                gist.files.retain(|(n, _)| n != name);
                continue;
            }

            let content = value.get("content").and_then(Value::as_str).unwrap_or("");
            if content.is_empty() {
                return validation_failed();
            }

            match gist.files.iter_mut().find(|(n, _)| n == name) {
                Some((_, existing)) => *existing = content.to_string(),
                None => gist.files.push((name.clone(), content.to_string())),
            }
        }
    }

    Json(render(&state, &id, gist)).into_response()
}

async fn delete_gist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }

    let mut db = state.db.write().await;
    match db.gists.remove(&id) {
        Some(_) => {
            db.starred.remove(&id);
            StatusCode::NO_CONTENT.into_response()
        }
        None => not_found(),
    }
}

async fn star_gist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }

    let mut db = state.db.write().await;
    if !db.gists.contains_key(&id) {
        return not_found();
    }
    db.starred.insert(id);
    StatusCode::NO_CONTENT.into_response()
}

async fn unstar_gist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }

    let mut db = state.db.write().await;
    if !db.gists.contains_key(&id) {
        return not_found();
    }
    db.starred.remove(&id);
    StatusCode::NO_CONTENT.into_response()
}

async fn is_starred(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }

    let db = state.db.read().await;
    if db.starred.contains(&id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found()
    }
}
