#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::extract::RawQuery;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::routing;
use axum::Router;
use booksearch_service::models::storage::MemoryUserStore;
use booksearch_service::services::auth::TokenService;
use booksearch_service::services::catalog::CatalogClient;
use booksearch_service::state::AppState;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

pub const SECRET: &str = "integration-secret-0123456789abcdef";

/// A stand-in catalog that answers every `/volumes` request with a fixed
/// status and body, and records what it was asked.
pub struct MockCatalog {
    pub url: String,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl MockCatalog {
    pub async fn spawn(status: StatusCode, body: Value) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let last_query = Arc::new(Mutex::new(None));
        let body = Arc::new(body);

        let app = Router::new().route(
            "/volumes",
            routing::get({
                let hits = Arc::clone(&hits);
                let last_query = Arc::clone(&last_query);
                move |RawQuery(query): RawQuery| {
                    let hits = Arc::clone(&hits);
                    let last_query = Arc::clone(&last_query);
                    let body = Arc::clone(&body);
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        *last_query.lock().expect("query lock") = query;
                        (status, axum::Json((*body).clone()))
                    }
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock catalog");
        let addr = listener.local_addr().expect("mock catalog addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock catalog");
        });

        Self {
            url: format!("http://{addr}/volumes"),
            hits,
            last_query,
            handle,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().expect("query lock").clone()
    }
}

impl Drop for MockCatalog {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// An address nothing listens on.
pub async fn dead_catalog_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind unused port");
    let addr = listener.local_addr().expect("unused port addr");
    drop(listener);
    format!("http://{addr}/volumes")
}

pub fn test_state(catalog_url: &str) -> AppState {
    AppState {
        catalog: CatalogClient::new(catalog_url, None, Duration::from_secs(5))
            .expect("catalog client"),
        tokens: TokenService::new(SECRET, chrono::Duration::minutes(30)),
        users: Arc::new(MemoryUserStore::new()),
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("response")
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::empty()).expect("request")).await
}

pub async fn post_json(app: Router, uri: &str, payload: Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request");
    send(app, request).await
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).expect("json body")
}
