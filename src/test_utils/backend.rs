//! A tiny in-process stand-in for the backend donation API.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tokio::net::TcpListener;

/// What the fake backend remembers about one request.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub(crate) path: String,
    pub(crate) authorization: Option<String>,
    pub(crate) bypass_header: Option<String>,
}

#[derive(Clone)]
struct BackendState {
    responses: Arc<HashMap<String, Value>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A real HTTP server on an OS-assigned port that returns canned JSON and
/// records the requests it saw. Unknown paths return 404.
pub(crate) struct FakeBackend {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeBackend {
    pub(crate) async fn spawn(responses: &[(&str, Value)]) -> Self {
        let responses: HashMap<String, Value> = responses
            .iter()
            .map(|(path, value)| ((*path).to_owned(), value.clone()))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = BackendState {
            responses: Arc::new(responses),
            requests: requests.clone(),
        };

        let router = Router::new().fallback(respond).with_state(state);
        let base_url = serve(router).await;

        Self { base_url, requests }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// A backend that answers every request with `status` and an empty body.
pub(crate) async fn respond_with_status(status: StatusCode) -> FakeBackend {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new().fallback(move || async move { status });
    let base_url = serve(router).await;

    FakeBackend { base_url, requests }
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test listener");
    let address = listener
        .local_addr()
        .expect("Could not read listener address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Fake backend crashed");
    });

    format!("http://{address}/")
}

async fn respond(State(state): State<BackendState>, request: Request) -> Response {
    let path = request.uri().path().to_owned();
    let header_text = |name: &str| {
        request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        authorization: header_text("authorization"),
        bypass_header: header_text("ngrok-skip-browser-warning"),
    });

    match state.responses.get(&path) {
        Some(value) => Json(value.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
