//! Error types for the GitHub search client.
//!
//! # Design
//! Every failure a call can produce reaches the caller as exactly one
//! `ClientError` variant: the transport could not complete the exchange, the
//! payload did not match the expected schema, or the server rejected the
//! request with a well-formed error body. Each variant wraps the underlying
//! cause so diagnostics survive the mapping.

use std::error::Error;
use std::fmt;

use serde::Deserialize;

/// Opaque failure raised by an [`HttpTransport`](crate::transport::HttpTransport).
///
/// Name resolution, connection refusal, timeouts, and TLS faults all collapse
/// into this one type; callers treat them uniformly as "the exchange did not
/// complete". The original fault stays reachable through [`Error::source`].
#[derive(Debug)]
pub struct TransportError {
    inner: Box<dyn Error + Send + Sync>,
}

impl TransportError {
    pub fn new(inner: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self {
            inner: inner.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport failed: {}", self.inner)
    }
}

impl Error for TransportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

/// A single field-level validation failure inside an [`ApiError`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiErrorDetail {
    pub resource: String,
    pub field: String,
    pub code: String,
}

/// Error body returned by the GitHub API for non-2xx responses.
///
/// A domain-level rejection (e.g. a failed validation), not a transport
/// fault: the request completed and the server answered with a well-formed
/// error payload. Some rejections carry only a message, so the detail list
/// defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for error in &self.errors {
            write!(f, "; {} {}: {}", error.resource, error.field, error.code)?;
        }
        Ok(())
    }
}

impl Error for ApiError {}

/// Errors returned by [`GitHubClient::send`](crate::client::GitHubClient::send).
#[derive(Debug)]
pub enum ClientError {
    /// The transport could not complete the exchange (DNS, TCP, TLS, timeout).
    Connection(TransportError),

    /// A success body did not match the expected schema, or an error body was
    /// itself malformed.
    ResponseParse(serde_json::Error),

    /// The server explicitly rejected the request with a well-formed error
    /// body. An expected outcome for invalid input, not a client/server bug.
    Api(ApiError),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Connection(error) => write!(f, "connection failed: {error}"),
            ClientError::ResponseParse(error) => write!(f, "response parsing failed: {error}"),
            ClientError::Api(error) => write!(f, "API error: {error}"),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClientError::Connection(error) => Some(error),
            ClientError::ResponseParse(error) => Some(error),
            ClientError::Api(error) => Some(error),
        }
    }
}
