//! Delegate interfaces for the remote platform APIs
//!
//! The search helpers own no transport. All network work happens behind
//! these traits, implemented by the embedding client (or by fakes in
//! tests) and injected into [`SearchClient`](crate::SearchClient) at
//! construction time.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::{GptJob, SerpRequest};

/// ChatGPT dataset-scrape delegate
#[async_trait]
pub trait ChatGptApi: Send + Sync {
    /// Submit a scrape job to the dataset endpoint
    ///
    /// # Returns
    /// The result payload for a sync job, or a snapshot identifier/dict
    /// for an async one, exactly as the remote API returned it.
    ///
    /// # Errors
    /// Transient faults must be reported as `Api` errors for the
    /// caller's retry loop to attempt them again; implementations can
    /// map retryable transport faults with
    /// [`SearchError::from_transport`](crate::SearchError::from_transport).
    async fn scrape_chatgpt(&self, job: &GptJob) -> Result<Value>;
}

/// Search-engine-results (SERP) delegate
#[async_trait]
pub trait SerpApi: Send + Sync {
    /// Run a search request; retries, if any, are this delegate's concern
    async fn search(&self, request: &SerpRequest) -> Result<Value>;
}

/// LinkedIn search namespace
///
/// Opaque to this crate. Each helper takes the endpoint's parameters as
/// a JSON object and returns whatever the delegate returns.
#[async_trait]
pub trait LinkedInApi: Send + Sync {
    /// Search LinkedIn posts
    async fn posts(&self, params: Value) -> Result<Value>;

    /// Search LinkedIn job listings
    async fn jobs(&self, params: Value) -> Result<Value>;

    /// Search LinkedIn profiles
    async fn profiles(&self, params: Value) -> Result<Value>;
}
