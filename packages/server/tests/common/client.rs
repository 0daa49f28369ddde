//! In-process HTTP client for the router.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so no socket is bound.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use ideas_core::kernel::{BaseStore, MemoryStore, ServerDeps};
use ideas_core::server::build_app;
use serde_json::Value;
use site_metadata::{MetadataExtractor, MockFetcher};
use tower::ServiceExt;

/// Router wired to an in-memory store and a mock fetcher.
pub struct TestApp {
    router: Router,
    /// Same store the router writes to
    pub store: Arc<MemoryStore>,
    /// Same fetcher the router scrapes with; add pages before requesting
    pub fetcher: MockFetcher,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let fetcher = MockFetcher::new();
        let router = router_with(store.clone(), fetcher.clone());
        Self {
            router,
            store,
            fetcher,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        send(&self.router, Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        send(&self.router, Method::POST, uri, Some(body.to_string())).await
    }

    /// POST a body verbatim, for malformed JSON.
    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        send(&self.router, Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        send(&self.router, Method::PATCH, uri, Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        send(&self.router, Method::DELETE, uri, None).await
    }
}

/// Router over any store, e.g. [`crate::common::FailingStore`].
pub fn router_with(store: Arc<dyn BaseStore>, fetcher: MockFetcher) -> Router {
    let extractor = MetadataExtractor::new(Arc::new(fetcher));
    build_app(ServerDeps::new(store, extractor), &[])
}

/// Send one request and decode the JSON body (`Value::Null` when empty).
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body)),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}
