use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use reqwest::Client;
use serde_json::{json, Value};

use formgate::config::Config;

/// Which response the fake Notion upstream returns.
#[derive(Clone, Copy)]
pub enum Upstream {
    Success,
    DatabaseMissing,
    Unauthorized,
    Failing,
}

pub const FAKE_PAGE_ID: &str = "11111111-2222-3333-4444-555555555555";

/// A stand-in Notion API server recording every create-page request body.
pub struct FakeNotion {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl FakeNotion {
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Value {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no upstream request recorded")
    }
}

pub async fn spawn_fake_notion(mode: Upstream) -> FakeNotion {
    let requests: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    let app = Router::new().route(
        "/v1/pages",
        post(move |Json(body): Json<Value>| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(body);
                match mode {
                    Upstream::Success => (
                        StatusCode::OK,
                        Json(json!({ "object": "page", "id": FAKE_PAGE_ID })),
                    ),
                    Upstream::DatabaseMissing => (
                        StatusCode::NOT_FOUND,
                        Json(json!({
                            "object": "error",
                            "status": 404,
                            "code": "object_not_found",
                            "message": "Could not find database with ID: db-123.",
                        })),
                    ),
                    Upstream::Unauthorized => (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({
                            "object": "error",
                            "status": 401,
                            "code": "unauthorized",
                            "message": "API token is invalid.",
                        })),
                    ),
                    Upstream::Failing => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "object": "error",
                            "status": 500,
                            "code": "internal_server_error",
                            "message": "An unexpected error occurred.",
                        })),
                    ),
                }
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake Notion server");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake Notion server failed");
    });

    FakeNotion {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// A running gateway instance wired to a fake Notion upstream.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub notion: FakeNotion,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON submission, optionally with an Origin header.
    pub async fn submit_json(
        &self,
        path: &str,
        origin: Option<&str>,
        body: &Value,
    ) -> (Value, reqwest::StatusCode) {
        let mut req = self.client.post(self.url(path)).json(body);
        if let Some(origin) = origin {
            req = req.header("Origin", origin);
        }
        let resp = req.send().await.expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a form-urlencoded submission with an Origin header.
    pub async fn submit_form(
        &self,
        origin: &str,
        fields: &[(&str, &str)],
    ) -> (Value, reqwest::StatusCode) {
        let resp = self
            .client
            .post(self.url("/gpu-requests"))
            .header("Origin", origin)
            .form(fields)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// A complete valid submission body.
pub fn valid_submission() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "gpuType": "H100",
        "quantity": 4,
        "message": "Needed for a training run",
    })
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(Upstream::Success).await
}

pub async fn spawn_app_with(mode: Upstream) -> TestApp {
    let notion = spawn_fake_notion(mode).await;

    let config = Config {
        notion_token: "secret_test_token".to_string(),
        notion_database_id: "db-123".to_string(),
        notion_api_base: notion.base_url.clone(),
        allowed_domains: vec!["example.com".to_string(), "localhost".to_string()],
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    };

    let app = formgate::build_app(config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        notion,
    }
}
