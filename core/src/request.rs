//! Request descriptors and their mapping to HTTP envelopes.
//!
//! # Design
//! Each API operation is a value implementing [`ApiRequest`]: a fixed method
//! and path, query pairs derived from its fields, and the type a successful
//! response decodes into. [`build_request`] is the only place an absolute URL
//! is assembled; it is a pure function of the descriptor and the base origin.

use serde::de::DeserializeOwned;

use crate::http::{HttpMethod, HttpRequest};

/// A typed descriptor for one API operation.
///
/// The associated `Response` type ties the descriptor to the shape of its
/// successful payload, so [`GitHubClient::send`](crate::client::GitHubClient::send)
/// returns a fully typed result for any operation.
pub trait ApiRequest {
    /// Expected shape of a successful (2xx) response body.
    type Response: DeserializeOwned;

    fn method(&self) -> HttpMethod;

    /// Path relative to the client's base origin, starting with `/`.
    fn path(&self) -> &str;

    /// Query pairs, in the order they appear in the URL.
    fn query(&self) -> Vec<(String, String)>;
}

/// Assemble the transport envelope for `request`.
///
/// Joins the base origin and path, then attaches the percent-encoded query
/// string for GET requests.
///
/// # Panics
///
/// Panics for any method other than GET: no body-encoding path exists, so a
/// descriptor declaring one is a programming error rather than a runtime
/// condition.
pub fn build_request<R: ApiRequest>(base_url: &str, request: &R) -> HttpRequest {
    let mut url = format!("{}{}", base_url.trim_end_matches('/'), request.path());

    match request.method() {
        HttpMethod::Get => {
            let query = request.query();
            if !query.is_empty() {
                let encoded = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(&query)
                    .finish();
                url.push('?');
                url.push_str(&encoded);
            }
        }
        method => panic!("unsupported method {method:?}: request bodies are not encoded"),
    }

    HttpRequest {
        method: request.method(),
        url,
        headers: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{SearchRepositories, SearchUsers};

    const BASE_URL: &str = "https://api.github.com";

    #[test]
    fn get_request_carries_encoded_query() {
        let built = build_request(BASE_URL, &SearchRepositories::new("swift"));
        assert_eq!(built.method, HttpMethod::Get);
        assert_eq!(built.url, "https://api.github.com/search/repositories?q=swift");
        assert!(built.headers.is_empty());
    }

    #[test]
    fn spaces_are_form_encoded() {
        let built = build_request(BASE_URL, &SearchRepositories::new("swift language"));
        assert_eq!(
            built.url,
            "https://api.github.com/search/repositories?q=swift+language"
        );
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let built = build_request(BASE_URL, &SearchRepositories::new("c&c++"));
        assert_eq!(
            built.url,
            "https://api.github.com/search/repositories?q=c%26c%2B%2B"
        );
    }

    #[test]
    fn empty_keyword_is_passed_through() {
        let built = build_request(BASE_URL, &SearchRepositories::new(""));
        assert_eq!(built.url, "https://api.github.com/search/repositories?q=");
    }

    #[test]
    fn trailing_slash_on_base_url_is_stripped() {
        let built = build_request("https://api.github.com/", &SearchUsers::new("apple"));
        assert_eq!(built.url, "https://api.github.com/search/users?q=apple");
    }

    #[test]
    fn descriptor_without_query_has_no_query_string() {
        struct RateLimit;
        impl ApiRequest for RateLimit {
            type Response = serde_json::Value;

            fn method(&self) -> HttpMethod {
                HttpMethod::Get
            }

            fn path(&self) -> &str {
                "/rate_limit"
            }

            fn query(&self) -> Vec<(String, String)> {
                Vec::new()
            }
        }

        let built = build_request(BASE_URL, &RateLimit);
        assert_eq!(built.url, "https://api.github.com/rate_limit");
    }

    #[test]
    #[should_panic(expected = "unsupported method")]
    fn non_get_methods_are_rejected() {
        struct Publish;
        impl ApiRequest for Publish {
            type Response = serde_json::Value;

            fn method(&self) -> HttpMethod {
                HttpMethod::Post
            }

            fn path(&self) -> &str {
                "/publish"
            }

            fn query(&self) -> Vec<(String, String)> {
                Vec::new()
            }
        }

        build_request(BASE_URL, &Publish);
    }
}
