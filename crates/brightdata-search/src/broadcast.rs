//! Scalar-or-list parameter broadcasting
//!
//! GPT companion parameters (country, secondary prompt, web search flag)
//! accept either one value applied to every prompt, or one value per
//! prompt. [`Broadcast`] captures that shape and resolves it against the
//! prompt count in one place instead of per-parameter branching.

use serde_json::Value;

use crate::error::{Result, SearchError};

/// A parameter given either once for all prompts or once per prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Broadcast<T> {
    /// Single value, replicated to the prompt count
    One(T),
    /// Per-prompt values; length must equal the prompt count exactly
    Each(Vec<T>),
}

impl<T: Clone> Broadcast<T> {
    /// Resolve to a list of exactly `len` values
    ///
    /// # Arguments
    /// * `len` - Number of prompts the parameter is broadcast against
    /// * `name` - Parameter name used in the error message
    ///
    /// # Errors
    /// `Validation` if this is an `Each` list whose length differs from `len`
    ///
    /// # Example
    /// ```
    /// use brightdata_search::Broadcast;
    /// let flags = Broadcast::One(false).resolve(3, "web_search").unwrap();
    /// assert_eq!(flags, vec![false, false, false]);
    ///
    /// let per_prompt = Broadcast::Each(vec![true, false]).resolve(2, "web_search").unwrap();
    /// assert_eq!(per_prompt, vec![true, false]);
    ///
    /// assert!(Broadcast::Each(vec![true]).resolve(2, "web_search").is_err());
    /// ```
    pub fn resolve(self, len: usize, name: &str) -> Result<Vec<T>> {
        match self {
            Broadcast::One(value) => Ok(vec![value; len]),
            Broadcast::Each(values) => {
                if values.len() != len {
                    return Err(SearchError::Validation(format!(
                        "{name} list must have the same length as prompts ({} != {len})",
                        values.len()
                    )));
                }
                Ok(values)
            }
        }
    }
}

impl Broadcast<String> {
    /// Build a string-valued companion from untyped JSON
    ///
    /// Dynamic call sites pass companions with no static types. A JSON
    /// string maps to `One`, a list of strings to `Each`, and `null` to
    /// an absent parameter. Anything else — including a list with a
    /// non-string element — is the uniform `Validation` error the rest
    /// of the GPT path raises.
    ///
    /// # Arguments
    /// * `value` - Untyped parameter value
    /// * `name` - Parameter name used in the error message
    ///
    /// # Example
    /// ```
    /// use brightdata_search::Broadcast;
    /// use serde_json::json;
    ///
    /// let one = Broadcast::string_from_json(&json!("US"), "country").unwrap();
    /// assert_eq!(one, Some(Broadcast::One("US".to_string())));
    ///
    /// assert_eq!(Broadcast::string_from_json(&json!(null), "country").unwrap(), None);
    /// assert!(Broadcast::string_from_json(&json!(5), "country").is_err());
    /// ```
    pub fn string_from_json(value: &Value, name: &str) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(Broadcast::One(s.clone()))),
            Value::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => values.push(s.clone()),
                        _ => {
                            return Err(SearchError::Validation(format!(
                                "{name} entries must be strings"
                            )));
                        }
                    }
                }
                Ok(Some(Broadcast::Each(values)))
            }
            _ => Err(SearchError::Validation(format!(
                "{name} must be a string or a list of strings"
            ))),
        }
    }
}

impl Broadcast<bool> {
    /// Build a flag-valued companion from untyped JSON
    ///
    /// Flags are strict booleans: `true`/`false` map to `One`, a list
    /// of booleans to `Each`, and everything else — `null`, numbers,
    /// truthy strings like `"true"` — is a `Validation` error.
    ///
    /// # Example
    /// ```
    /// use brightdata_search::Broadcast;
    /// use serde_json::json;
    ///
    /// let per_prompt = Broadcast::bool_from_json(&json!([true, false]), "web_search").unwrap();
    /// assert_eq!(per_prompt, Broadcast::Each(vec![true, false]));
    ///
    /// assert!(Broadcast::bool_from_json(&json!("true"), "web_search").is_err());
    /// assert!(Broadcast::bool_from_json(&json!(1), "web_search").is_err());
    /// ```
    pub fn bool_from_json(value: &Value, name: &str) -> Result<Self> {
        match value {
            Value::Bool(flag) => Ok(Broadcast::One(*flag)),
            Value::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::Bool(flag) => values.push(*flag),
                        _ => {
                            return Err(SearchError::Validation(format!(
                                "{name} flags must be boolean"
                            )));
                        }
                    }
                }
                Ok(Broadcast::Each(values))
            }
            _ => Err(SearchError::Validation(format!("{name} flags must be boolean"))),
        }
    }
}

/// Resolve an optional companion parameter to `len` nullable slots
///
/// An absent parameter broadcasts to all-`None`; a present one resolves
/// through [`Broadcast::resolve`] and wraps every entry in `Some`.
///
/// # Example
/// ```
/// use brightdata_search::{Broadcast, resolve_optional};
/// let none = resolve_optional::<String>(None, 2, "country").unwrap();
/// assert_eq!(none, vec![None, None]);
///
/// let us = resolve_optional(Some(Broadcast::One("US".to_string())), 2, "country").unwrap();
/// assert_eq!(us, vec![Some("US".to_string()), Some("US".to_string())]);
/// ```
pub fn resolve_optional<T: Clone>(
    param: Option<Broadcast<T>>,
    len: usize,
    name: &str,
) -> Result<Vec<Option<T>>> {
    match param {
        None => Ok(vec![None; len]),
        Some(broadcast) => Ok(broadcast.resolve(len, name)?.into_iter().map(Some).collect()),
    }
}

impl From<&str> for Broadcast<String> {
    fn from(value: &str) -> Self {
        Broadcast::One(value.to_string())
    }
}

impl From<String> for Broadcast<String> {
    fn from(value: String) -> Self {
        Broadcast::One(value)
    }
}

impl From<bool> for Broadcast<bool> {
    fn from(value: bool) -> Self {
        Broadcast::One(value)
    }
}

impl<T> From<Vec<T>> for Broadcast<T> {
    fn from(values: Vec<T>) -> Self {
        Broadcast::Each(values)
    }
}

impl From<Vec<&str>> for Broadcast<String> {
    fn from(values: Vec<&str>) -> Self {
        Broadcast::Each(values.into_iter().map(str::to_string).collect())
    }
}
