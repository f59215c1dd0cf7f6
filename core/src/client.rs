//! Generic request/response orchestration for the GitHub search API.
//!
//! # Design
//! `GitHubClient` composes the pure pieces around the one suspension point:
//! build the envelope, hand it to the injected transport, interpret whatever
//! comes back. Each call is a strictly linear pipeline with exactly one
//! terminal outcome. No retries, no cancellation, and no state shared
//! between concurrent calls.

use tracing::{debug, warn};

use crate::error::ClientError;
use crate::request::{build_request, ApiRequest};
use crate::response::parse_response;
use crate::transport::HttpTransport;

/// Base origin used unless overridden with [`GitHubClient::base_url`].
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Asynchronous client for the GitHub search API, generic over its transport.
///
/// The transport is injected at construction and shared read-only across
/// calls, so one client serves any number of concurrent requests without
/// locking.
#[derive(Debug, Clone)]
pub struct GitHubClient<T> {
    base_url: String,
    transport: T,
}

impl<T: HttpTransport> GitHubClient<T> {
    /// Create a client addressing the public GitHub API.
    pub fn new(transport: T) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            transport,
        }
    }

    /// Override the base origin (for tests or GitHub Enterprise hosts).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Send `request` and decode the response into its declared type.
    ///
    /// Exactly one of the four outcomes is produced per call: the typed
    /// value, a connection error, a parse error, or an API rejection.
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ClientError> {
        let envelope = build_request(&self.base_url, request);
        debug!(method = envelope.method.as_str(), url = %envelope.url, "sending request");

        let raw = match self.transport.send(envelope).await {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "transport failed");
                return Err(ClientError::Connection(error));
            }
        };

        debug!(status = raw.status, bytes = raw.body.len(), "response received");
        parse_response(&raw)
    }
}
