// src/transport/http.rs
// =============================================================================
// Transport backed by reqwest.
//
// Key functionality:
// - Builds the request from the descriptor's method, headers and body
// - Sends it and reads the whole body as bytes
// - Categorizes reqwest errors into invalid-request vs connection problems
//
// No timeout is configured: a request waits as long as the server does.
// Redirects follow reqwest's default policy.
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Method};

use super::{Transport, TransportError, TransportResponse};
use crate::fetcher::RequestDescriptor;

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    // Client is a reference-counted handle, so cloning the transport is cheap
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already configured reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RequestDescriptor) -> Result<TransportResponse, TransportError> {
        let options = &request.options;

        let method = Method::from_bytes(options.method().as_bytes()).map_err(|_| {
            TransportError::InvalidRequest(format!("bad method '{}'", options.method()))
        })?;

        let mut builder = self.client.request(method, &request.endpoint);

        for (name, value) in &options.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| TransportError::InvalidRequest(format!("bad header name '{}'", name)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| TransportError::InvalidRequest(format!("bad value for header '{}'", name)))?;
            builder = builder.header(header_name, header_value);
        }

        if let Some(body) = &options.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(categorize_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(categorize_error)?;

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

// Sorts reqwest errors into our two buckets
//
// Builder errors (e.g. an endpoint that is not a URL) are the caller's fault.
// Everything else happened on the wire.
fn categorize_error(error: reqwest::Error) -> TransportError {
    if error.is_builder() {
        TransportError::InvalidRequest(error.to_string())
    } else if error.is_timeout() {
        TransportError::Connection("Request timed out".to_string())
    } else if error.is_redirect() {
        TransportError::Connection("Too many redirects".to_string())
    } else if error.is_connect() {
        TransportError::Connection(format!("Connection failed: {}", error))
    } else {
        TransportError::Connection(error.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[async_trait] do?
//    - Trait methods cannot be async and still be used as `dyn Transport`
//    - The macro rewrites each async fn to return a boxed future
//
// 2. Why map_err everywhere?
//    - reqwest and http have their own error types
//    - map_err turns each one into our TransportError so ? can propagate it
//
// 3. Why read the body as bytes?
//    - The transport does not know the body is JSON
//    - Parsing happens later, where a failure counts as a parse failure
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::RequestOptions;

    #[tokio::test]
    async fn test_bad_method_is_invalid_request() {
        let transport = HttpTransport::new();
        let request = RequestDescriptor::new("http://127.0.0.1:9/")
            .with_options(RequestOptions::default().with_method("NOT A METHOD"));

        let result = transport.send(&request).await;
        assert!(matches!(result, Err(TransportError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_bad_header_is_invalid_request() {
        let transport = HttpTransport::new();
        let request = RequestDescriptor::new("http://127.0.0.1:9/")
            .with_options(RequestOptions::default().with_header("bad header", "x"));

        let result = transport.send(&request).await;
        assert!(matches!(result, Err(TransportError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_endpoint_that_is_not_a_url() {
        let transport = HttpTransport::new();
        let result = transport.send(&RequestDescriptor::new("not a url")).await;
        assert!(matches!(result, Err(TransportError::InvalidRequest(_))));
    }
}
