//! Interpretation of raw HTTP responses into typed outcomes.
//!
//! # Design
//! The status code alone picks the schema: 2xx bodies decode as the expected
//! response type, everything else decodes as an [`ApiError`] body. There is
//! no fallback to the other schema — a 2xx body that fails to decode is a
//! parse error even if it happens to look like an error payload, and vice
//! versa.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, ClientError};
use crate::http::HttpResponse;

/// Decode `response` into the expected type `T` or the matching error.
///
/// Pure function of the response status and bytes: yields the typed value,
/// a [`ClientError::Api`] rejection, or a [`ClientError::ResponseParse`].
pub fn parse_response<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ClientError> {
    if (200..300).contains(&response.status) {
        serde_json::from_slice(&response.body).map_err(ClientError::ResponseParse)
    } else {
        match serde_json::from_slice::<ApiError>(&response.body) {
            Ok(error) => Err(ClientError::Api(error)),
            Err(error) => Err(ClientError::ResponseParse(error)),
        }
    }
}
