//! High-level search API
//!
//! Provides [`SearchClient`], which validates and normalizes parameters
//! before delegating to the injected platform APIs: the ChatGPT scrape
//! endpoint (with a bounded fixed-delay retry loop), the SERP search
//! endpoint, and the forwarded LinkedIn namespace.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use regex::Regex;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::api::{ChatGptApi, LinkedInApi, SerpApi};
use crate::broadcast::{Broadcast, resolve_optional};
use crate::error::{Result, SearchError};
use crate::types::{GptJob, Prompts, Query, SerpRequest};

/// Default timeout for sync GPT scrapes, in seconds
pub const DEFAULT_SYNC_TIMEOUT_SECS: u64 = 65;

/// Default timeout for async (snapshot) GPT scrapes, in seconds
pub const DEFAULT_ASYNC_TIMEOUT_SECS: u64 = 30;

static COUNTRY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("country code pattern is valid"));

/// Configuration for the search client
///
/// Defaults reproduce the platform constants; the retry fields exist so
/// tests can run the loop without real delays.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Zone used for SERP requests when the caller passes none
    pub serp_zone: String,
    /// Worker count for batched SERP queries when the caller passes none
    pub default_max_workers: usize,
    /// Total GPT scrape attempts, including the first (default: 3)
    pub max_retries: u32,
    /// Fixed delay between GPT scrape attempts (default: 2s, no backoff)
    pub retry_delay: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            serp_zone: "serp".to_string(),
            default_max_workers: 10,
            max_retries: 3,
            retry_delay: Duration::from_secs(2),
        }
    }
}

/// Options for [`SearchClient::gpt`]
///
/// `country`, `secondary_prompt`, and `web_search` are broadcast against
/// the prompt list: pass a scalar to apply it to every prompt, or a list
/// with exactly one entry per prompt.
#[derive(Debug, Clone)]
pub struct GptOptions {
    /// Two-uppercase-letter ISO country code(s), e.g. "US"
    pub country: Option<Broadcast<String>>,
    /// Follow-up prompt(s) sent after the main prompt
    pub secondary_prompt: Option<Broadcast<String>>,
    /// Enable ChatGPT web search (default: false for every prompt)
    pub web_search: Broadcast<bool>,
    /// Wait for results (default) or request a snapshot to poll later
    pub sync: bool,
    /// Timeout in seconds; defaults to 65 (sync) or 30 (async)
    pub timeout: Option<u64>,
}

impl Default for GptOptions {
    fn default() -> Self {
        Self {
            country: None,
            secondary_prompt: None,
            web_search: Broadcast::One(false),
            sync: true,
            timeout: None,
        }
    }
}

impl GptOptions {
    /// Build options from an untyped JSON object
    ///
    /// Dynamic call sites pass companion parameters with no static
    /// types; this constructor reproduces the runtime rejections typed
    /// call sites get from the compiler. Missing keys take the same
    /// defaults as [`GptOptions::default`]; unknown keys are ignored.
    ///
    /// # Errors
    /// `Validation` — the uniform GPT-path kind — if the value is not
    /// an object, `country` or `secondary_prompt` is not a string or a
    /// list of strings, `web_search` is not a strict boolean or a list
    /// of strict booleans, `sync` is not a boolean, or `timeout` is not
    /// a positive integer.
    ///
    /// # Example
    /// ```
    /// use brightdata_search::GptOptions;
    /// use serde_json::json;
    ///
    /// let options = GptOptions::from_json(&json!({
    ///     "country": "US",
    ///     "web_search": [true, false],
    /// }))
    /// .unwrap();
    /// assert!(options.sync);
    ///
    /// // Truthy values are not booleans
    /// assert!(GptOptions::from_json(&json!({"web_search": 1})).is_err());
    /// ```
    pub fn from_json(value: &Value) -> Result<Self> {
        let Some(object) = value.as_object() else {
            return Err(SearchError::Validation(
                "GPT options must be an object".to_string(),
            ));
        };

        let defaults = GptOptions::default();
        let country = match object.get("country") {
            None => None,
            Some(value) => Broadcast::string_from_json(value, "country")?,
        };
        let secondary_prompt = match object.get("secondary_prompt") {
            None => None,
            Some(value) => Broadcast::string_from_json(value, "secondary_prompt")?,
        };
        let web_search = match object.get("web_search") {
            None => defaults.web_search,
            Some(value) => Broadcast::bool_from_json(value, "web_search")?,
        };
        let sync = match object.get("sync") {
            None => defaults.sync,
            Some(Value::Bool(sync)) => *sync,
            Some(_) => {
                return Err(SearchError::Validation("sync must be a boolean".to_string()));
            }
        };
        let timeout = match object.get("timeout") {
            None | Some(Value::Null) => None,
            Some(value) => match value.as_u64() {
                Some(timeout) if timeout > 0 => Some(timeout),
                _ => {
                    return Err(SearchError::Validation(
                        "Timeout must be a positive integer".to_string(),
                    ));
                }
            },
        };

        Ok(Self {
            country,
            secondary_prompt,
            web_search,
            sync,
            timeout,
        })
    }
}

/// Options for [`SearchClient::web`]
///
/// These apply uniformly to the whole query set; there is no per-query
/// broadcasting on this path.
#[derive(Debug, Clone)]
pub struct WebOptions {
    /// Search engine name (default: "google")
    pub search_engine: String,
    /// Zone override; defaults to the configured SERP zone
    pub zone: Option<String>,
    /// Response format (default: "raw")
    pub response_format: String,
    /// HTTP method (default: "GET")
    pub method: String,
    /// Country applied to every query (default: empty)
    pub country: String,
    /// Data format (default: "html")
    pub data_format: String,
    /// Request a snapshot instead of waiting (default: false)
    pub async_request: bool,
    /// Worker count override; defaults to the configured value
    pub max_workers: Option<usize>,
    /// Timeout in seconds, forwarded as-is
    pub timeout: Option<u64>,
    /// Ask the endpoint to parse results (default: false)
    pub parse: bool,
}

impl Default for WebOptions {
    fn default() -> Self {
        Self {
            search_engine: "google".to_string(),
            zone: None,
            response_format: "raw".to_string(),
            method: "GET".to_string(),
            country: String::new(),
            data_format: "html".to_string(),
            async_request: false,
            max_workers: None,
            timeout: None,
            parse: false,
        }
    }
}

/// Validating front-end for the platform's search APIs
///
/// Holds the injected delegates and shared configuration; all per-call
/// data is local, so a client can be shared freely across tasks.
pub struct SearchClient {
    chatgpt_api: Arc<dyn ChatGptApi>,
    serp_api: Arc<dyn SerpApi>,
    linkedin_api: Arc<dyn LinkedInApi>,
    config: SearchConfig,
}

impl SearchClient {
    /// Create a client with default configuration
    pub fn new(
        chatgpt_api: Arc<dyn ChatGptApi>,
        serp_api: Arc<dyn SerpApi>,
        linkedin_api: Arc<dyn LinkedInApi>,
    ) -> Self {
        Self::with_config(chatgpt_api, serp_api, linkedin_api, SearchConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(
        chatgpt_api: Arc<dyn ChatGptApi>,
        serp_api: Arc<dyn SerpApi>,
        linkedin_api: Arc<dyn LinkedInApi>,
        config: SearchConfig,
    ) -> Self {
        Self {
            chatgpt_api,
            serp_api,
            linkedin_api,
            config,
        }
    }

    /// Query ChatGPT through the platform's dataset endpoint
    ///
    /// Normalizes the prompt set, broadcasts the companion options
    /// against it, validates formats, then calls the scrape delegate
    /// with a bounded retry: up to 3 attempts total, sleeping a fixed
    /// 2 seconds between them on transient failures.
    ///
    /// # Arguments
    /// * `prompt` - One prompt or a batch (`&str`, `String`, or `Vec`)
    /// * `options` - Broadcastable companions, sync flag, and timeout
    ///
    /// # Returns
    /// The delegate's payload unmodified: a result dict in sync mode, or
    /// a snapshot identifier/dict in async mode.
    ///
    /// # Errors
    /// - `Validation` for any malformed input, raised before any
    ///   delegate call and never retried
    /// - the delegate's own error, re-raised unchanged once attempts
    ///   are exhausted (transient) or immediately (everything else)
    ///
    /// # Example
    /// ```no_run
    /// # async fn example(client: brightdata_search::SearchClient)
    /// #     -> brightdata_search::Result<()> {
    /// use brightdata_search::GptOptions;
    ///
    /// let result = client
    ///     .gpt(
    ///         vec!["hi", "bye"],
    ///         GptOptions {
    ///             country: Some("US".into()),
    ///             web_search: vec![true, false].into(),
    ///             ..GptOptions::default()
    ///         },
    ///     )
    ///     .await?;
    /// println!("{result}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn gpt(&self, prompt: impl Into<Prompts>, options: GptOptions) -> Result<Value> {
        let prompts = prompt.into().into_vec()?;
        let prompt_count = prompts.len();

        let countries = resolve_optional(options.country, prompt_count, "country")?;
        let additional_prompts =
            resolve_optional(options.secondary_prompt, prompt_count, "secondary_prompt")?;
        let web_searches = options.web_search.resolve(prompt_count, "web_search")?;

        validate_country_codes(&countries)?;

        if let Some(timeout) = options.timeout
            && timeout == 0
        {
            return Err(SearchError::Validation(
                "Timeout must be a positive integer".to_string(),
            ));
        }
        let timeout_secs = options.timeout.unwrap_or(if options.sync {
            DEFAULT_SYNC_TIMEOUT_SECS
        } else {
            DEFAULT_ASYNC_TIMEOUT_SECS
        });

        let job = GptJob {
            prompts,
            countries,
            additional_prompts,
            web_searches,
            sync: options.sync,
            timeout_secs,
        };

        let mut attempt = 1;
        loop {
            debug!(attempt, prompts = job.prompts.len(), "dispatching ChatGPT scrape job");
            match self.chatgpt_api.scrape_chatgpt(&job).await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    warn!(attempt, error = %e, "transient API failure, retrying");
                    sleep(self.config.retry_delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Run a SERP search through the platform's search endpoint
    ///
    /// Validates the query set, fills in the configured zone and worker
    /// count where the caller passed none, and forwards everything else
    /// verbatim. No retry wrapping here; that is the delegate's concern.
    ///
    /// # Arguments
    /// * `query` - One query or a batch (`&str`, `String`, or `Vec`)
    /// * `options` - Engine, zone, formats, and the async/parse flags
    ///
    /// # Errors
    /// - `EmptyQuery` if the query (or list) is empty or whitespace
    /// - `InvalidQueryList` if a list element is empty or whitespace
    /// - the delegate's error, unmodified
    pub async fn web(&self, query: impl Into<Query>, options: WebOptions) -> Result<Value> {
        let query = query.into();
        query.validate()?;

        let zone = options
            .zone
            .unwrap_or_else(|| self.config.serp_zone.clone());
        let max_workers = options.max_workers.unwrap_or(self.config.default_max_workers);

        let request = SerpRequest {
            query,
            search_engine: options.search_engine,
            zone,
            response_format: options.response_format,
            method: options.method,
            country: options.country,
            data_format: options.data_format,
            async_request: options.async_request,
            max_workers,
            timeout_secs: options.timeout,
            parse: options.parse,
        };

        debug!(engine = %request.search_engine, zone = %request.zone, "dispatching SERP search");
        self.serp_api.search(&request).await
    }

    /// LinkedIn search helpers (posts / jobs / profiles)
    ///
    /// Pure forwarding to the injected delegate; no logic of its own.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example(client: brightdata_search::SearchClient)
    /// #     -> brightdata_search::Result<()> {
    /// use serde_json::json;
    /// let posts = client.linkedin().posts(json!({"keyword": "rust"})).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn linkedin(&self) -> &dyn LinkedInApi {
        self.linkedin_api.as_ref()
    }

    /// Get the active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Validate that every present, non-empty country code is two uppercase letters
fn validate_country_codes(countries: &[Option<String>]) -> Result<()> {
    for country in countries.iter().flatten() {
        if !country.is_empty() && !COUNTRY_CODE.is_match(country) {
            return Err(SearchError::Validation(format!(
                "Invalid country code '{country}'. Must be 2 uppercase letters"
            )));
        }
    }
    Ok(())
}
