//! Ready-made descriptors for the GitHub search endpoints.

use crate::http::HttpMethod;
use crate::request::ApiRequest;
use crate::types::{Repository, SearchResponse, User};

/// `GET /search/repositories` — repositories matching a keyword.
///
/// The keyword is passed through as-is; an invalid keyword (e.g. empty) is
/// rejected server-side and surfaces as an API error.
#[derive(Debug, Clone)]
pub struct SearchRepositories {
    pub keyword: String,
}

impl SearchRepositories {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }
}

impl ApiRequest for SearchRepositories {
    type Response = SearchResponse<Repository>;

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn path(&self) -> &str {
        "/search/repositories"
    }

    fn query(&self) -> Vec<(String, String)> {
        vec![("q".to_string(), self.keyword.clone())]
    }
}

/// `GET /search/users` — users matching a keyword.
#[derive(Debug, Clone)]
pub struct SearchUsers {
    pub keyword: String,
}

impl SearchUsers {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }
}

impl ApiRequest for SearchUsers {
    type Response = SearchResponse<User>;

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn path(&self) -> &str {
        "/search/users"
    }

    fn query(&self) -> Vec<(String, String)> {
        vec![("q".to_string(), self.keyword.clone())]
    }
}
