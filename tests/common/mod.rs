#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::to_bytes,
    extract::{Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use spotcli::{config::Credentials, request::Requestor, spotify::SpotifyClient};

pub const TOKEN_BODY: &str =
    r#"{"access_token":"test-token","token_type":"Bearer","expires_in":3600}"#;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

struct Route {
    method: &'static str,
    path: String,
    status: u16,
    body: String,
}

#[derive(Default)]
struct MockState {
    routes: Vec<Route>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Builder for a local HTTP server that answers fixed JSON bodies.
#[derive(Default)]
pub struct MockServerBuilder {
    routes: Vec<Route>,
}

impl MockServerBuilder {
    pub fn route(mut self, method: &'static str, path: &str, status: u16, body: &str) -> Self {
        self.routes.push(Route {
            method,
            path: path.to_string(),
            status,
            body: body.to_string(),
        });
        self
    }

    /// Adds the token endpoint answering with [`TOKEN_BODY`].
    pub fn with_token(self) -> Self {
        self.route("POST", "/api/token", 200, TOKEN_BODY)
    }

    pub async fn start(self) -> MockServer {
        let state = Arc::new(MockState {
            routes: self.routes,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockServer {
            base: format!("http://{}", addr),
            state,
        }
    }
}

pub struct MockServer {
    pub base: String,
    state: Arc<MockState>,
}

impl MockServer {
    pub fn builder() -> MockServerBuilder {
        MockServerBuilder::default()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn client(&self) -> SpotifyClient {
        SpotifyClient::with_endpoints(
            Credentials::new("my-id", "my-secret").unwrap(),
            self.url("/v1"),
            self.url("/api/token"),
        )
        .with_requestor(local_requestor())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

/// A requestor that ignores proxy settings from the environment.
pub fn local_requestor() -> Requestor {
    Requestor::with_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

async fn handle(State(state): State<Arc<MockState>>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let header_value = |name: header::HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let recorded = RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().unwrap_or_default().to_string(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: String::from_utf8_lossy(&body).to_string(),
    };
    state.requests.lock().unwrap().push(recorded.clone());

    match state
        .routes
        .iter()
        .find(|r| r.method == recorded.method && r.path == recorded.path)
    {
        Some(route) => (
            StatusCode::from_u16(route.status).unwrap(),
            [(header::CONTENT_TYPE, "application/json")],
            route.body.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"error":{"status":404,"message":"Service not found"}}"#.to_string(),
        )
            .into_response(),
    }
}
