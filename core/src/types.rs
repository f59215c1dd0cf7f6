//! Domain models decoded from GitHub search responses.
//!
//! # Design
//! Wire payloads use snake_case keys, which map directly onto Rust field
//! names through serde's derive. The one key that cannot (`type`, a Rust
//! keyword) is declared with an explicit rename. Every search endpoint
//! shares the `{total_count, items}` envelope, so the paginated wrapper is
//! generic over its element type.

use serde::Deserialize;

/// A GitHub account, as returned by the user search endpoint and embedded as
/// a repository owner.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub login: String,
    /// Account kind (`"User"` or `"Organization"`). The wire key `type` is a
    /// Rust keyword, so the mapping is declared explicitly. Absent in some
    /// embedded owner objects.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A repository returned by the repository search endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: User,
}

/// Paginated result envelope shared by every search endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchResponse<Item> {
    pub total_count: u64,
    pub items: Vec<Item>,
}
