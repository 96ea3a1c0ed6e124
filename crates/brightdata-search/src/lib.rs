//! Bright Data Search Helpers
//!
//! Validating, broadcasting front-end for a data-collection platform's
//! search APIs. This crate owns no transport: network work happens
//! behind the [`ChatGptApi`], [`SerpApi`], and [`LinkedInApi`] delegate
//! traits, implemented by the embedding client and injected into
//! [`SearchClient`].
//!
//! # Overview
//!
//! What this crate does before handing off to a delegate:
//! - normalizes "string or list of strings" prompt/query inputs
//! - broadcasts scalar-or-list companion parameters against the prompt
//!   count ([`Broadcast`]), rejecting length mismatches
//! - validates country codes, timeouts, and query shapes
//! - wraps the ChatGPT scrape call in a bounded retry loop (3 attempts,
//!   fixed 2 second delay) for transient API failures
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use brightdata_search::{
//!     ChatGptApi, GptJob, GptOptions, LinkedInApi, Result, SearchClient, SerpApi, SerpRequest,
//! };
//! use serde_json::{Value, json};
//!
//! // The embedding client supplies real HTTP-backed delegates; any
//! // implementation of the three traits will do.
//! struct PlatformApi;
//!
//! #[async_trait]
//! impl ChatGptApi for PlatformApi {
//!     async fn scrape_chatgpt(&self, job: &GptJob) -> Result<Value> {
//!         // POST the job to the dataset endpoint here
//!         Ok(json!({"answers": job.prompts.len()}))
//!     }
//! }
//!
//! #[async_trait]
//! impl SerpApi for PlatformApi {
//!     async fn search(&self, request: &SerpRequest) -> Result<Value> {
//!         Ok(json!({"zone": request.zone}))
//!     }
//! }
//!
//! #[async_trait]
//! impl LinkedInApi for PlatformApi {
//!     async fn posts(&self, params: Value) -> Result<Value> { Ok(params) }
//!     async fn jobs(&self, params: Value) -> Result<Value> { Ok(params) }
//!     async fn profiles(&self, params: Value) -> Result<Value> { Ok(params) }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let api = Arc::new(PlatformApi);
//!     let client = SearchClient::new(api.clone(), api.clone(), api);
//!
//!     // One country for both prompts, web search per prompt
//!     let result = client
//!         .gpt(
//!             vec!["hi", "bye"],
//!             GptOptions {
//!                 country: Some("US".into()),
//!                 web_search: vec![true, false].into(),
//!                 ..GptOptions::default()
//!             },
//!         )
//!         .await?;
//!     println!("{result}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors and retries
//!
//! All validation happens before any delegate call; a malformed input
//! never consumes retry budget. Only the remote API's own
//! [`SearchError::Api`] signal is retried, with a fixed delay and no
//! backoff; everything else propagates to the caller unchanged.
//! Delegate implementations that want retryable transport faults
//! (timeout, connection error, 5xx) to re-enter the loop classify them
//! with [`SearchError::from_transport`].

mod api;
mod broadcast;
mod error;
mod search;
mod types;

// Re-export delegate traits
pub use api::{ChatGptApi, LinkedInApi, SerpApi};

// Re-export broadcasting helpers
pub use broadcast::{Broadcast, resolve_optional};

// Re-export error types
pub use error::{Result, SearchError};

// Re-export the client API
pub use search::{
    DEFAULT_ASYNC_TIMEOUT_SECS, DEFAULT_SYNC_TIMEOUT_SECS, GptOptions, SearchClient, SearchConfig,
    WebOptions,
};

// Re-export input and wire types
pub use types::{GptJob, Prompts, Query, SerpRequest};
