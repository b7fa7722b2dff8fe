// Shared test helpers: a scriptable resolver and request plumbing for the router.
#![allow(dead_code)] // Not every test file uses every helper

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use ns_provider::dns::NsLookup;
use ns_provider::server::{router, AppState};
use ns_provider::{ProviderTable, ResolutionError};

/// Resolver answering from a fixed map. Unknown names fail with an
/// `ENOTFOUND`-style message; names can be given an artificial delay.
#[derive(Default)]
pub struct FakeResolver {
    answers: HashMap<String, Vec<String>>,
    delays: HashMap<String, Duration>,
}

impl FakeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, domain: &str, nameservers: &[&str]) -> Self {
        self.answers.insert(
            domain.to_string(),
            nameservers.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn delay(mut self, domain: &str, millis: u64) -> Self {
        self.delays
            .insert(domain.to_string(), Duration::from_millis(millis));
        self
    }
}

#[async_trait]
impl NsLookup for FakeResolver {
    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, ResolutionError> {
        if let Some(delay) = self.delays.get(domain) {
            tokio::time::sleep(*delay).await;
        }
        self.answers
            .get(domain)
            .cloned()
            .ok_or_else(|| ResolutionError::Lookup(format!("queryNs ENOTFOUND {domain}")))
    }
}

/// Router over `resolver` and the built-in provider table.
pub fn app(resolver: FakeResolver) -> axum::Router {
    app_with_table(resolver, ProviderTable::builtin())
}

pub fn app_with_table(resolver: FakeResolver, table: ProviderTable) -> axum::Router {
    router(AppState::new(Arc::new(resolver), Arc::new(table)))
}

/// Router that resolves at most `limit` domains of a request at once.
pub fn app_bounded(resolver: FakeResolver, limit: usize) -> axum::Router {
    let state = AppState::new(Arc::new(resolver), Arc::new(ProviderTable::builtin()))
        .with_max_concurrency(Some(limit));
    router(state)
}

/// POSTs `body` to `uri` and returns the status and raw response body.
pub async fn post(app: axum::Router, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    send(app, request).await
}

/// GETs `uri`.
pub async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    send(app, request).await
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.expect("Router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    (status, bytes.to_vec())
}

/// POSTs to the JSON endpoint and parses the response.
pub async fn post_json(app: axum::Router, body: &str) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = post(app, "/api/analyze-domains", body).await;
    let json = serde_json::from_slice(&bytes).expect("Response is not JSON");
    (status, json)
}
