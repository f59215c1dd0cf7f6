//! Asynchronous, transport-agnostic client for the GitHub search API.
//!
//! # Overview
//! Typed request descriptors declare an endpoint and the shape of its
//! successful response. The client turns a descriptor into an HTTP envelope,
//! hands it to an injected transport, and interprets the raw result into
//! either the descriptor's response type or one unified error.
//!
//! # Design
//! - Building and interpreting are pure functions; the transport is the only
//!   place I/O happens, and the only suspension point of a call.
//! - The transport seam ([`HttpTransport`]) has a `reqwest` production
//!   adapter and a canned-result stub, so the full pipeline runs in tests
//!   without real sockets.
//! - All failures reach the caller through [`ClientError`]: connection,
//!   response parse, or API rejection, each wrapping its cause.
//!
//! # Example
//! ```no_run
//! use github_search::{GitHubClient, ReqwestTransport, SearchRepositories};
//!
//! # async fn run() -> Result<(), github_search::ClientError> {
//! let client = GitHubClient::new(ReqwestTransport::new());
//! let response = client.send(&SearchRepositories::new("rust")).await?;
//! for repository in &response.items {
//!     println!("{}", repository.full_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

pub use api::{SearchRepositories, SearchUsers};
pub use client::{GitHubClient, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiErrorDetail, ClientError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use request::{build_request, ApiRequest};
pub use response::parse_response;
pub use transport::{HttpTransport, ReqwestTransport, StubTransport};
pub use types::{Repository, SearchResponse, User};
