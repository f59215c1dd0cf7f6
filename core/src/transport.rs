//! Transport abstraction and its two realizations.
//!
//! # Design
//! [`HttpTransport`] is the only seam that performs I/O. The production
//! adapter delegates to a shared [`reqwest::Client`]; the stub returns a
//! canned result after a fixed delay, keeping tests deterministic while
//! preserving the asynchronous completion contract. Either one is injected
//! into [`GitHubClient`](crate::client::GitHubClient) at construction.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP exchange for a fully-addressed request.
///
/// Implementations complete each call exactly once — a response or a
/// [`TransportError`], never both — and must not retain per-call state
/// between invocations: a single transport instance is shared read-only by
/// all concurrent calls of a client.
#[async_trait]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by [`reqwest`].
///
/// Deadlines are the client's concern: pass a preconfigured
/// [`reqwest::Client`] through [`ReqwestTransport::with_client`] to apply
/// timeouts, and a fired timeout surfaces as an ordinary [`TransportError`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a default [`reqwest::Client`].
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a transport from a preconfigured client (timeouts, proxies).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(method_of(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(TransportError::new)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().await.map_err(TransportError::new)?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn method_of(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Head => reqwest::Method::HEAD,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Patch => reqwest::Method::PATCH,
    }
}

const STUB_DELAY: Duration = Duration::from_millis(10);

/// Canned-result transport for tests.
///
/// Holds one fixed outcome, shared read-only by every call, and delivers it
/// after a fixed delay so completion is always asynchronous with respect to
/// the caller.
#[derive(Debug, Clone)]
pub struct StubTransport {
    result: Result<HttpResponse, String>,
    delay: Duration,
}

impl StubTransport {
    /// Stub that completes every call with the given response.
    pub fn respond_with(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            result: Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.into(),
            }),
            delay: STUB_DELAY,
        }
    }

    /// Stub that fails every call with a transport-level error.
    pub fn fail_with(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
            delay: STUB_DELAY,
        }
    }

    /// Override the completion delay.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        tokio::time::sleep(self.delay).await;
        match &self.result {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(TransportError::new(message.clone())),
        }
    }
}
