//! Server state and wire types.

use std::sync::Arc;

use serde::Serialize;

use crate::dns::NsLookup;
use crate::models::DomainResult;
use crate::providers::ProviderTable;

/// Shared state handed to every request.
///
/// Both fields are read-only for the life of the process.
#[derive(Clone)]
pub struct AppState {
    /// NS resolver shared by all requests
    pub resolver: Arc<dyn NsLookup>,
    /// Provider table loaded at start-up
    pub providers: Arc<ProviderTable>,
    /// Cap on in-flight lookups per request; `None` resolves every domain at once
    pub max_concurrency: Option<usize>,
}

impl AppState {
    /// State with unbounded per-request fan-out.
    pub fn new(resolver: Arc<dyn NsLookup>, providers: Arc<ProviderTable>) -> Self {
        Self {
            resolver,
            providers,
            max_concurrency: None,
        }
    }

    /// Caps in-flight lookups per request.
    pub fn with_max_concurrency(mut self, limit: Option<usize>) -> Self {
        self.max_concurrency = limit;
        self
    }
}

/// 200 response body.
#[derive(Serialize)]
pub struct AnalyzeResponse {
    /// One entry per submitted domain, in submission order
    pub results: Vec<DomainResult>,
}

/// 400 response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Always "Invalid input"
    pub error: String,
}
