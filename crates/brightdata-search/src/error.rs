//! Error types for the search API helpers
//!
//! Provides a single error enum covering input validation, the web-path
//! invalid-argument kinds, and delegate failures, with human-readable
//! messages and string serialization for embedding in JSON payloads.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all search API operations
///
/// The GPT path reports every malformed input through the single
/// [`Validation`](SearchError::Validation) variant. The web path keeps
/// three distinct invalid-argument kinds, matching the upstream API
/// surface: empty query, wrong query shape, and bad list elements.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Malformed, missing, mis-lengthed, or mistyped GPT parameter
    #[error("Invalid argument: {0}")]
    Validation(String),

    /// The 'query' parameter was None, empty, or whitespace only
    #[error("The 'query' parameter cannot be None or empty")]
    EmptyQuery,

    /// The 'query' parameter was neither a string nor a list of strings
    #[error("The 'query' parameter must be a string or a list of strings, got {0}")]
    InvalidQueryType(String),

    /// A query list contained an empty or non-string element
    #[error("All queries in the list must be non-empty strings: {0}")]
    InvalidQueryList(String),

    /// Transient failure reported by the remote API
    #[error("API request failed: {0}")]
    Api(String),

    /// Transport-level failure from a delegate implementation; never
    /// retried (delegates map retryable faults to `Api` instead)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl SearchError {
    /// Whether the GPT retry loop may attempt the call again
    ///
    /// Only the remote API's own `Api` signal is transient. Everything
    /// else — validation failures, query errors, transport faults a
    /// delegate chose not to classify — propagates immediately.
    pub fn is_transient(&self) -> bool {
        matches!(self, SearchError::Api(_))
    }

    /// Classify a transport fault at the delegate boundary
    ///
    /// Timeouts, connection errors, and 5xx responses become the `Api`
    /// transient signal, so the GPT retry loop will attempt them again;
    /// anything else stays a plain `Http` error and propagates.
    pub fn from_transport(error: reqwest::Error) -> Self {
        let retryable = error.is_timeout()
            || error.is_connect()
            || error.status().map(|s| s.is_server_error()).unwrap_or(false);
        if retryable {
            SearchError::Api(error.to_string())
        } else {
            SearchError::Http(error)
        }
    }
}

impl Serialize for SearchError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for search API operations
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let error = SearchError::Validation("country list must have the same length as prompts".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid argument: country list must have the same length as prompts"
        );
    }

    #[test]
    fn test_error_display_empty_query() {
        let error = SearchError::EmptyQuery;
        assert_eq!(error.to_string(), "The 'query' parameter cannot be None or empty");
    }

    #[test]
    fn test_error_display_invalid_query_type() {
        let error = SearchError::InvalidQueryType("number".to_string());
        assert_eq!(
            error.to_string(),
            "The 'query' parameter must be a string or a list of strings, got number"
        );
    }

    #[test]
    fn test_error_display_invalid_query_list() {
        let error = SearchError::InvalidQueryList("element 1 is empty".to_string());
        assert_eq!(
            error.to_string(),
            "All queries in the list must be non-empty strings: element 1 is empty"
        );
    }

    #[test]
    fn test_error_display_api() {
        let error = SearchError::Api("snapshot quota exceeded".to_string());
        assert_eq!(error.to_string(), "API request failed: snapshot quota exceeded");
    }

    #[test]
    fn test_api_error_is_transient() {
        let error = SearchError::Api("upstream hiccup".to_string());
        assert!(error.is_transient());
    }

    #[test]
    fn test_validation_error_is_not_transient() {
        let error = SearchError::Validation("bad country".to_string());
        assert!(!error.is_transient());
    }

    #[test]
    fn test_query_errors_are_not_transient() {
        assert!(!SearchError::EmptyQuery.is_transient());
        assert!(!SearchError::InvalidQueryType("null".to_string()).is_transient());
        assert!(!SearchError::InvalidQueryList("bad".to_string()).is_transient());
    }

    #[test]
    fn test_error_serialize() {
        let error = SearchError::EmptyQuery;
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"The 'query' parameter cannot be None or empty\"");
    }

    #[test]
    fn test_error_serialize_with_message() {
        let error = SearchError::Api("quota".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"API request failed: quota\"");
    }
}
