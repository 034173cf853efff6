// src/fetcher/request.rs
// =============================================================================
// What to fetch: an endpoint plus options (method, headers, body).
//
// The options are never interpreted by the fetcher. They are handed to the
// transport exactly as the caller wrote them.
// =============================================================================

use anyhow::{anyhow, Result};

/// Method used when the caller did not pick one
pub const DEFAULT_METHOD: &str = "GET";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// HTTP method, e.g. "POST". None means GET
    pub method: Option<String>,
    /// Headers in the order the caller gave them
    pub headers: Vec<(String, String)>,
    /// Raw request body
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn method(&self) -> &str {
        self.method.as_deref().unwrap_or(DEFAULT_METHOD)
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// An endpoint and the options to call it with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub endpoint: String,
    pub options: RequestOptions,
}

impl RequestDescriptor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            options: RequestOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }
}

// Parses a curl-style header argument
//
// Example:
//   "Accept: application/json" -> ("Accept", "application/json")
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("Header must look like 'Name: value', got '{}'", raw))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Header name is empty in '{}'", raw));
    }

    Ok((name.to_string(), value.trim().to_string()))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is `impl Into<String>`?
//    - Accepts anything that converts into a String: &str, String, ...
//    - Callers write .with_header("Accept", "text/plain") without .to_string()
//
// 2. Why `mut self` in the builder methods?
//    - The method takes ownership, changes one field and hands it back
//    - This lets calls chain: RequestOptions::default().with_method("POST")
//
// 3. What does split_once do?
//    - Splits at the first ':' only, so "X-Time: 12:30" keeps "12:30" whole
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_method_is_get() {
        let request = RequestDescriptor::new("https://api.example.com/posts");
        assert_eq!(request.options.method(), "GET");
    }

    #[test]
    fn test_builder_keeps_header_order() {
        let options = RequestOptions::default()
            .with_method("POST")
            .with_header("B", "2")
            .with_header("A", "1")
            .with_body("{}");
        assert_eq!(options.method(), "POST");
        assert_eq!(
            options.headers,
            vec![("B".to_string(), "2".to_string()), ("A".to_string(), "1".to_string())]
        );
        assert_eq!(options.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_parse_header() {
        let (name, value) = parse_header("Accept: application/json").unwrap();
        assert_eq!(name, "Accept");
        assert_eq!(value, "application/json");
    }

    #[test]
    fn test_parse_header_value_with_colon() {
        let (name, value) = parse_header("X-Time: 12:30").unwrap();
        assert_eq!(name, "X-Time");
        assert_eq!(value, "12:30");
    }

    #[test]
    fn test_parse_header_rejects_missing_colon() {
        assert!(parse_header("Accept application/json").is_err());
        assert!(parse_header(": value").is_err());
    }
}
