//! Path parameter and query string containers.
//!
//! This module provides the two value types a snapshot is made of:
//!
//! - [`RouteParams`] — path parameters produced by the host router's matcher
//!   (e.g. `:id` in `/users/:id`). Single-valued, with typed access via
//!   [`get_as`](RouteParams::get_as).
//! - [`QueryParams`] — query string parameters parsed from the `?key=value&...`
//!   portion of a URL. Supports multi-valued keys (e.g. `?tag=a&tag=b`), typed
//!   access, and round-trip serialization.
//!
//! This crate never matches paths itself — it only copies these containers in
//! and out of snapshots. Construction from raw strings is provided so hosts
//! and tests can build them conveniently.
//!
//! # Example
//!
//! ```
//! use route_history::{RouteParams, QueryParams};
//!
//! // Path parameters from /users/42
//! let mut params = RouteParams::new();
//! params.set("id".to_string(), "42".to_string());
//! assert_eq!(params.get_as::<u32>("id"), Some(42));
//!
//! // Query parameters from ?page=3&sort=name
//! let query = QueryParams::from_query_string("page=3&sort=name");
//! assert_eq!(query.get_as::<u32>("page"), Some(3));
//! assert_eq!(query.get("sort"), Some(&"name".to_string()));
//! ```

use std::collections::HashMap;

/// Path parameters extracted by the host router from dynamic segments.
///
/// # Example
///
/// ```
/// use route_history::RouteParams;
///
/// // Route pattern: /users/:id
/// // Matched path: /users/123
/// let mut params = RouteParams::new();
/// params.insert("id".to_string(), "123".to_string());
///
/// assert_eq!(params.get("id"), Some(&"123".to_string()));
/// assert_eq!(params.get_as::<i32>("id"), Some(123));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// Create empty route parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing `HashMap`.
    pub fn from_map(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Get a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Get a parameter and parse it as a specific type.
    ///
    /// Returns `None` if the parameter doesn't exist or cannot be parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, key: String, value: String) {
        self.params.insert(key, value);
    }

    /// Set a parameter (alias for [`insert`](Self::insert)).
    pub fn set(&mut self, key: String, value: String) {
        self.params.insert(key, value);
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Get a reference to the underlying parameter map.
    pub fn all(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Iterate over all `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.params.iter()
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters parsed from a URL query string.
///
/// Supports multiple values for the same key.
///
/// # Example
///
/// ```
/// use route_history::QueryParams;
///
/// let query = QueryParams::from_query_string("page=1&sort=name&tag=rust&tag=ui");
///
/// assert_eq!(query.get("page"), Some(&"1".to_string()));
/// assert_eq!(query.get_as::<i32>("page"), Some(1));
/// assert_eq!(query.get_all("tag").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    params: HashMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create empty query parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a query string (without the leading `?`).
    ///
    /// # Example
    ///
    /// ```
    /// use route_history::QueryParams;
    ///
    /// let query = QueryParams::from_query_string("page=1&sort=name");
    /// assert_eq!(query.get("page"), Some(&"1".to_string()));
    /// ```
    pub fn from_query_string(query: &str) -> Self {
        let mut params = HashMap::new();

        for pair in query.split('&') {
            if let Some((key, value)) = pair.split_once('=') {
                let key = decode_uri_component(key);
                let value = decode_uri_component(value);

                params.entry(key).or_insert_with(Vec::new).push(value);
            }
        }

        Self { params }
    }

    /// Create from an existing multi-value map.
    pub fn from_map(params: HashMap<String, Vec<String>>) -> Self {
        Self { params }
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)?.first()
    }

    /// Get all values for a key.
    ///
    /// Useful for parameters that can appear multiple times (e.g. `?tag=a&tag=b`).
    pub fn get_all(&self, key: &str) -> Option<&Vec<String>> {
        self.params.get(key)
    }

    /// Get the first value for a key, parsed as type `T`.
    ///
    /// Returns `None` if the key is missing or the value cannot be parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.get(key)?.parse().ok()
    }

    /// Append a value for the given key.
    ///
    /// If the key already exists, the new value is added to the list (not replaced).
    pub fn insert(&mut self, key: String, value: String) {
        self.params.entry(key).or_default().push(value);
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Serialize back into a query string.
    ///
    /// # Example
    ///
    /// ```
    /// use route_history::QueryParams;
    ///
    /// let mut query = QueryParams::new();
    /// query.insert("page".to_string(), "1".to_string());
    /// let s = query.to_query_string();
    /// assert!(s.contains("page=1"));
    /// ```
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<String> = self
            .params
            .iter()
            .flat_map(|(key, values)| {
                values.iter().map(move |value| {
                    format!(
                        "{}={}",
                        encode_uri_component(key),
                        encode_uri_component(value)
                    )
                })
            })
            .collect();

        pairs.join("&")
    }

    /// Iterate over all `(key, values)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.params.iter()
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of unique parameter keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }
}

/// Simple URI component encoding (encode special characters)
fn encode_uri_component(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => c.to_string(),
            ' ' => "%20".to_string(),
            _ => format!("%{:02X}", c as u8),
        })
        .collect()
}

/// Simple URI component decoding
fn decode_uri_component(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                result.push(byte as char);
            } else {
                result.push('%');
                result.push_str(&hex);
            }
        } else if c == '+' {
            result.push(' ');
        } else {
            result.push(c);
        }
    }

    result
}

// ============================================================================
// Tests
// ============================================================================
