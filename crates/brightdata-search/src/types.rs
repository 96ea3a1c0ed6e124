//! Input and wire types for the search API helpers
//!
//! [`Prompts`] and [`Query`] model the "string or list of strings" inputs
//! accepted by the GPT and web operations, including constructors from
//! untyped JSON for dynamic call sites. [`GptJob`] and [`SerpRequest`]
//! are the fully-resolved argument structs handed to the delegates; both
//! serialize so implementations can post them as-is.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SearchError};

/// Prompt input for the GPT operation: one prompt or a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompts {
    One(String),
    Many(Vec<String>),
}

impl Prompts {
    /// Resolve into the prompt list that everything else broadcasts against
    ///
    /// # Errors
    /// `Validation` if the batch is empty or any prompt is empty/whitespace
    pub fn into_vec(self) -> Result<Vec<String>> {
        let prompts = match self {
            Prompts::One(prompt) => vec![prompt],
            Prompts::Many(prompts) => prompts,
        };
        if prompts.is_empty() {
            return Err(SearchError::Validation("At least one prompt is required".to_string()));
        }
        if prompts.iter().any(|p| p.trim().is_empty()) {
            return Err(SearchError::Validation(
                "Invalid prompt input: must be a non-empty string or list of strings".to_string(),
            ));
        }
        Ok(prompts)
    }

    /// Build from untyped JSON: a string or a list of strings
    ///
    /// Any other shape, including a list with non-string elements, is the
    /// same uniform `Validation` error the rest of the GPT path raises.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Prompts::One(s.clone())),
            Value::Array(items) => {
                let mut prompts = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => prompts.push(s.clone()),
                        _ => {
                            return Err(SearchError::Validation(
                                "Invalid prompt input: must be a non-empty string or list of strings"
                                    .to_string(),
                            ));
                        }
                    }
                }
                Ok(Prompts::Many(prompts))
            }
            _ => Err(SearchError::Validation(
                "Invalid prompt input: must be a non-empty string or list of strings".to_string(),
            )),
        }
    }
}

impl From<&str> for Prompts {
    fn from(prompt: &str) -> Self {
        Prompts::One(prompt.to_string())
    }
}

impl From<String> for Prompts {
    fn from(prompt: String) -> Self {
        Prompts::One(prompt)
    }
}

impl From<Vec<String>> for Prompts {
    fn from(prompts: Vec<String>) -> Self {
        Prompts::Many(prompts)
    }
}

impl From<Vec<&str>> for Prompts {
    fn from(prompts: Vec<&str>) -> Self {
        Prompts::Many(prompts.into_iter().map(str::to_string).collect())
    }
}

/// Query input for the web (SERP) operation: one query or a batch
///
/// Serializes untagged, so a `One` becomes a JSON string and a `Many`
/// becomes a JSON array, matching the remote search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Query {
    One(String),
    Many(Vec<String>),
}

impl Query {
    /// Validate the query set before delegation
    ///
    /// # Errors
    /// - `EmptyQuery` if the query (or the whole list) is empty or whitespace
    /// - `InvalidQueryList` if any list element is empty or whitespace
    pub fn validate(&self) -> Result<()> {
        match self {
            Query::One(query) => {
                if query.trim().is_empty() {
                    return Err(SearchError::EmptyQuery);
                }
            }
            Query::Many(queries) => {
                if queries.is_empty() {
                    return Err(SearchError::EmptyQuery);
                }
                for (index, query) in queries.iter().enumerate() {
                    if query.trim().is_empty() {
                        return Err(SearchError::InvalidQueryList(format!(
                            "element {index} is empty or whitespace"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Build from untyped JSON, keeping the three web-path error kinds apart
    ///
    /// # Errors
    /// - `EmptyQuery` for JSON null
    /// - `InvalidQueryList` for a list with a non-string element
    /// - `InvalidQueryType` for any other non-string, non-list shape
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Err(SearchError::EmptyQuery),
            Value::String(s) => Ok(Query::One(s.clone())),
            Value::Array(items) => {
                let mut queries = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    match item {
                        Value::String(s) => queries.push(s.clone()),
                        other => {
                            return Err(SearchError::InvalidQueryList(format!(
                                "element {index} is a {}",
                                json_type_name(other)
                            )));
                        }
                    }
                }
                Ok(Query::Many(queries))
            }
            other => Err(SearchError::InvalidQueryType(json_type_name(other).to_string())),
        }
    }
}

impl From<&str> for Query {
    fn from(query: &str) -> Self {
        Query::One(query.to_string())
    }
}

impl From<String> for Query {
    fn from(query: String) -> Self {
        Query::One(query)
    }
}

impl From<Vec<String>> for Query {
    fn from(queries: Vec<String>) -> Self {
        Query::Many(queries)
    }
}

impl From<Vec<&str>> for Query {
    fn from(queries: Vec<&str>) -> Self {
        Query::Many(queries.into_iter().map(str::to_string).collect())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Fully-broadcast, validated arguments for a ChatGPT scrape job
///
/// All four lists have the same length; `countries` and
/// `additional_prompts` keep nullable slots for prompts without a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GptJob {
    /// Prompts to send, one scrape per entry
    pub prompts: Vec<String>,

    /// Two-uppercase-letter country code per prompt, if any
    pub countries: Vec<Option<String>>,

    /// Follow-up prompt per entry, if any
    pub additional_prompts: Vec<Option<String>>,

    /// Whether ChatGPT web search is enabled, per prompt
    pub web_searches: Vec<bool>,

    /// Wait for results (`true`) or request a snapshot handle (`false`)
    pub sync: bool,

    /// Timeout forwarded to the delegate, in seconds
    pub timeout_secs: u64,
}

/// Arguments for a SERP search call, defaults already applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerpRequest {
    /// One query or a batch, forwarded verbatim
    pub query: Query,

    /// Search engine name (e.g., "google")
    pub search_engine: String,

    /// Zone identifier on the remote platform
    pub zone: String,

    /// Response format requested from the endpoint (e.g., "raw")
    pub response_format: String,

    /// HTTP method the endpoint should use
    pub method: String,

    /// Country applied uniformly to the whole query set; may be empty
    pub country: String,

    /// Data format requested (e.g., "html")
    pub data_format: String,

    /// Request a snapshot instead of waiting for results
    pub async_request: bool,

    /// Worker count for batched queries
    pub max_workers: usize,

    /// Timeout forwarded to the delegate, in seconds, if any
    pub timeout_secs: Option<u64>,

    /// Ask the endpoint to parse results server-side
    pub parse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompts_single_string() {
        let prompts = Prompts::from("hello").into_vec().unwrap();
        assert_eq!(prompts, vec!["hello".to_string()]);
    }

    #[test]
    fn test_prompts_list_passes_through() {
        let prompts = Prompts::from(vec!["hi", "bye"]).into_vec().unwrap();
        assert_eq!(prompts, vec!["hi".to_string(), "bye".to_string()]);
    }

    #[test]
    fn test_prompts_empty_list_fails() {
        let result = Prompts::Many(vec![]).into_vec();
        match result {
            Err(SearchError::Validation(msg)) => assert!(msg.contains("At least one prompt")),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_prompts_blank_entry_fails() {
        let result = Prompts::from(vec!["ok", "   "]).into_vec();
        assert!(matches!(result, Err(SearchError::Validation(_))));
    }

    #[test]
    fn test_prompts_from_json_string() {
        let prompts = Prompts::from_json(&json!("hello")).unwrap();
        assert_eq!(prompts, Prompts::One("hello".to_string()));
    }

    #[test]
    fn test_prompts_from_json_list() {
        let prompts = Prompts::from_json(&json!(["a", "b"])).unwrap();
        assert_eq!(prompts, Prompts::Many(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_prompts_from_json_wrong_shape_fails() {
        assert!(matches!(Prompts::from_json(&json!(42)), Err(SearchError::Validation(_))));
        assert!(matches!(
            Prompts::from_json(&json!({"prompt": "hi"})),
            Err(SearchError::Validation(_))
        ));
    }

    #[test]
    fn test_prompts_from_json_list_with_non_string_fails() {
        let result = Prompts::from_json(&json!(["ok", 7]));
        assert!(matches!(result, Err(SearchError::Validation(_))));
    }

    #[test]
    fn test_query_single_valid() {
        assert!(Query::from("pizza").validate().is_ok());
    }

    #[test]
    fn test_query_empty_string_fails() {
        assert!(matches!(Query::from("").validate(), Err(SearchError::EmptyQuery)));
    }

    #[test]
    fn test_query_whitespace_string_fails() {
        assert!(matches!(Query::from("   ").validate(), Err(SearchError::EmptyQuery)));
    }

    #[test]
    fn test_query_empty_list_fails() {
        assert!(matches!(
            Query::Many(vec![]).validate(),
            Err(SearchError::EmptyQuery)
        ));
    }

    #[test]
    fn test_query_list_with_blank_element_fails() {
        let result = Query::from(vec!["", "ok"]).validate();
        match result {
            Err(SearchError::InvalidQueryList(msg)) => assert!(msg.contains("element 0")),
            _ => panic!("Expected InvalidQueryList error"),
        }
    }

    #[test]
    fn test_query_valid_list_passes() {
        assert!(Query::from(vec!["a", "b"]).validate().is_ok());
    }

    #[test]
    fn test_query_from_json_null_is_empty_kind() {
        assert!(matches!(Query::from_json(&json!(null)), Err(SearchError::EmptyQuery)));
    }

    #[test]
    fn test_query_from_json_number_is_type_kind() {
        match Query::from_json(&json!(123)) {
            Err(SearchError::InvalidQueryType(kind)) => assert_eq!(kind, "number"),
            _ => panic!("Expected InvalidQueryType error"),
        }
    }

    #[test]
    fn test_query_from_json_list_with_number_is_list_kind() {
        match Query::from_json(&json!(["ok", 5])) {
            Err(SearchError::InvalidQueryList(msg)) => assert!(msg.contains("element 1")),
            _ => panic!("Expected InvalidQueryList error"),
        }
    }

    #[test]
    fn test_query_serializes_untagged() {
        let single = serde_json::to_value(Query::from("pizza")).unwrap();
        assert_eq!(single, json!("pizza"));

        let many = serde_json::to_value(Query::from(vec!["a", "b"])).unwrap();
        assert_eq!(many, json!(["a", "b"]));
    }

    #[test]
    fn test_gpt_job_serialization_round_trip() {
        let job = GptJob {
            prompts: vec!["hi".to_string(), "bye".to_string()],
            countries: vec![Some("US".to_string()), None],
            additional_prompts: vec![None, Some("and then?".to_string())],
            web_searches: vec![true, false],
            sync: true,
            timeout_secs: 65,
        };

        let json = serde_json::to_string(&job).expect("Serialization should succeed");
        let deserialized: GptJob =
            serde_json::from_str(&json).expect("Deserialization should succeed");

        assert_eq!(job, deserialized);
    }

    #[test]
    fn test_serp_request_serialization() {
        let request = SerpRequest {
            query: Query::from("pizza"),
            search_engine: "google".to_string(),
            zone: "serp".to_string(),
            response_format: "raw".to_string(),
            method: "GET".to_string(),
            country: String::new(),
            data_format: "html".to_string(),
            async_request: false,
            max_workers: 10,
            timeout_secs: None,
            parse: false,
        };

        let value = serde_json::to_value(&request).expect("Serialization should succeed");
        assert_eq!(value["query"], json!("pizza"));
        assert_eq!(value["search_engine"], json!("google"));
        assert_eq!(value["max_workers"], json!(10));
    }
}
