//! Shared harness for client integration tests.
//!
//! Spins up an in-process axum server that imitates the marketplace
//! backend (`GET /projects`, `POST /projects/{id}/apply`) on an ephemeral
//! port, plus recording implementations of the UI collaborator traits.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use talentboard_client::{
    CatalogStore, ClientConfig, MarketplaceApi, NavigationTarget, Navigator, NotificationLevel,
    Notifier, SessionTokenProvider, StaticTokenProvider, SubmissionFlow,
};
use talentboard_core::{Id, Project};

pub const TEST_TOKEN: &str = "test-token";

// ---------------------------------------------------------------------------
// Fake backend
// ---------------------------------------------------------------------------

/// Canned answer for `POST /projects/{id}/apply`.
#[derive(Debug, Clone)]
pub enum ApplyReply {
    /// 201 and the project flips to `PENDING` with one more applicant.
    Accept,
    /// 403 `{ "error": "EMAIL_NOT_VERIFIED", "email": ... }`.
    EmailNotVerified(String),
    /// Arbitrary status with a JSON body.
    Status(u16, Value),
}

struct BackendState {
    projects: Mutex<Vec<Value>>,
    apply_reply: Mutex<ApplyReply>,
    list_status: Mutex<u16>,
    apply_delay: Mutex<Duration>,
    applications: Mutex<Vec<(String, Value)>>,
    list_hits: AtomicUsize,
    apply_hits: AtomicUsize,
}

pub struct FakeBackend {
    pub url: String,
    state: Arc<BackendState>,
}

impl FakeBackend {
    pub async fn start(projects: Vec<Value>) -> Self {
        let state = Arc::new(BackendState {
            projects: Mutex::new(projects),
            apply_reply: Mutex::new(ApplyReply::Accept),
            list_status: Mutex::new(200),
            apply_delay: Mutex::new(Duration::ZERO),
            applications: Mutex::new(Vec::new()),
            list_hits: AtomicUsize::new(0),
            apply_hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/projects", get(list_projects))
            .route("/projects/{id}/apply", post(apply))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}"),
            state,
        }
    }

    pub fn set_apply_reply(&self, reply: ApplyReply) {
        *self.state.apply_reply.lock().unwrap() = reply;
    }

    pub fn set_list_status(&self, status: u16) {
        *self.state.list_status.lock().unwrap() = status;
    }

    pub fn set_apply_delay(&self, delay: Duration) {
        *self.state.apply_delay.lock().unwrap() = delay;
    }

    pub fn list_hits(&self) -> usize {
        self.state.list_hits.load(Ordering::SeqCst)
    }

    pub fn apply_hits(&self) -> usize {
        self.state.apply_hits.load(Ordering::SeqCst)
    }

    /// `(project_id, body)` of every application the backend received.
    pub fn applications(&self) -> Vec<(String, Value)> {
        self.state.applications.lock().unwrap().clone()
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
        == Some(format!("Bearer {TEST_TOKEN}").as_str())
}

async fn list_projects(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    state.list_hits.fetch_add(1, Ordering::SeqCst);

    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" }))).into_response();
    }

    let status = *state.list_status.lock().unwrap();
    if status != 200 {
        let code = StatusCode::from_u16(status).unwrap();
        return (code, Json(json!({ "error": "catalog unavailable" }))).into_response();
    }

    let projects = state.projects.lock().unwrap().clone();
    Json(json!({ "data": projects })).into_response()
}

async fn apply(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.apply_hits.fetch_add(1, Ordering::SeqCst);

    let delay = *state.apply_delay.lock().unwrap();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" }))).into_response();
    }

    state.applications.lock().unwrap().push((id.clone(), body));

    let reply = state.apply_reply.lock().unwrap().clone();
    match reply {
        ApplyReply::Accept => {
            for project in state.projects.lock().unwrap().iter_mut() {
                if project["id"].to_string().trim_matches('"') == id {
                    project["myApplicationStatus"] = json!("PENDING");
                    let count = project["applicantCount"].as_u64().unwrap_or(0);
                    project["applicantCount"] = json!(count + 1);
                }
            }
            (StatusCode::CREATED, Json(json!({ "message": "Applied" }))).into_response()
        }
        ApplyReply::EmailNotVerified(email) => (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "EMAIL_NOT_VERIFIED", "email": email })),
        )
            .into_response(),
        ApplyReply::Status(status, body) => {
            (StatusCode::from_u16(status).unwrap(), Json(body)).into_response()
        }
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn project_json(id: i64, applicants: u64, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Project {id}"),
        "description": "Looking for a student developer",
        "category": "Web",
        "budget": 1000000,
        "deadline": "31 Dec 2024",
        "complexity": "BEGINNER",
        "requiredSkills": "Rust, SQL",
        "applicantCount": applicants,
        "owner": { "id": 100, "nama": "PT Contoh", "averageRating": 4.8 },
        "status": "OPEN",
        "myApplicationStatus": "NONE",
        "createdAt": created_at
    })
}

/// The three-project catalog that ranks to `[3, 2, 1]`.
pub fn scenario_catalog() -> Vec<Value> {
    vec![
        project_json(1, 2, "2024-01-01"),
        project_json(2, 5, "2024-02-01"),
        project_json(3, 5, "2024-03-01"),
    ]
}

// ---------------------------------------------------------------------------
// Recording collaborators
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(NotificationLevel, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(NotificationLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn levels(&self) -> Vec<NotificationLevel> {
        self.messages().into_iter().map(|(level, _)| level).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    targets: Mutex<Vec<NavigationTarget>>,
}

impl RecordingNavigator {
    pub fn targets(&self) -> Vec<NavigationTarget> {
        self.targets.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: NavigationTarget) {
        self.targets.lock().unwrap().push(target);
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

pub struct Harness {
    pub backend: FakeBackend,
    pub catalog: Arc<CatalogStore>,
    pub flow: SubmissionFlow,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub async fn start(projects: Vec<Value>) -> Self {
        Self::start_with_session(projects, StaticTokenProvider::new(TEST_TOKEN)).await
    }

    pub async fn start_with_session(projects: Vec<Value>, session: StaticTokenProvider) -> Self {
        let backend = FakeBackend::start(projects).await;
        let api = Arc::new(MarketplaceApi::new(&ClientConfig::new(backend.url.clone())).unwrap());
        Self::assemble(backend, api, Arc::new(session))
    }

    /// Wire the client against an arbitrary API, keeping `backend` for counters.
    pub fn assemble(
        backend: FakeBackend,
        api: Arc<MarketplaceApi>,
        session: Arc<dyn SessionTokenProvider>,
    ) -> Self {
        let catalog = Arc::new(CatalogStore::new(api.clone(), session.clone()));
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let flow = SubmissionFlow::new(
            api,
            session,
            catalog.clone(),
            navigator.clone(),
            notifier.clone(),
        );

        Self {
            backend,
            catalog,
            flow,
            notifier,
            navigator,
        }
    }

    /// Fetch the catalog and return the current copy of project `id`.
    pub async fn loaded_project(&self, id: i64) -> Project {
        self.catalog.refresh().await.unwrap();
        self.catalog.find(&Id::from(id)).await.unwrap()
    }
}
