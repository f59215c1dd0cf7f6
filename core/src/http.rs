//! HTTP envelope types shared by the builder, the transports, and the
//! response interpreter.
//!
//! # Design
//! Requests and responses are plain data. The builder produces `HttpRequest`
//! values and the interpreter consumes `HttpResponse` values without touching
//! the network; only an `HttpTransport` implementation performs I/O. This
//! separation keeps request construction and response interpretation
//! deterministic and easy to test.
//!
//! All fields use owned types (`String`, `Vec`) so envelopes can move across
//! task boundaries without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Head,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Wire name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Head => "HEAD",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

/// A fully-addressed HTTP request described as plain data.
///
/// Built by [`build_request`](crate::request::build_request) from a request
/// descriptor, owned by the client for the duration of one call, and handed
/// to the transport for execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL, including the encoded query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by a transport after executing an `HttpRequest`, then passed
/// to [`parse_response`](crate::response::parse_response) for decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    /// Raw body bytes; JSON payloads are decoded with `serde_json::from_slice`.
    pub body: Vec<u8>,
}
