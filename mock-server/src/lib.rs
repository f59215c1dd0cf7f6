use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: User,
}

#[derive(Serialize)]
pub struct SearchResponse<T> {
    pub total_count: usize,
    pub items: Vec<T>,
}

#[derive(Serialize)]
pub struct ValidationErrorDetail {
    pub resource: String,
    pub field: String,
    pub code: String,
}

#[derive(Serialize)]
pub struct ValidationError {
    pub message: String,
    pub errors: Vec<ValidationErrorDetail>,
}

/// Seeded dataset the search endpoints filter over.
pub struct Dataset {
    pub repositories: Vec<Repository>,
    pub users: Vec<User>,
}

pub type Db = Arc<Dataset>;

pub fn app() -> Router {
    let db: Db = Arc::new(seed());
    Router::new()
        .route("/search/repositories", get(search_repositories))
        .route("/search/users", get(search_users))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub fn seed() -> Dataset {
    let apple = User {
        id: 10639145,
        login: "apple".to_string(),
        kind: "Organization".to_string(),
    };
    let openstack = User {
        id: 324574,
        login: "openstack".to_string(),
        kind: "Organization".to_string(),
    };
    let ipader = User {
        id: 575016,
        login: "ipader".to_string(),
        kind: "User".to_string(),
    };

    Dataset {
        repositories: vec![
            Repository {
                id: 44838949,
                name: "swift".to_string(),
                full_name: "apple/swift".to_string(),
                owner: apple.clone(),
            },
            Repository {
                id: 790019,
                name: "swift".to_string(),
                full_name: "openstack/swift".to_string(),
                owner: openstack.clone(),
            },
            Repository {
                id: 20822291,
                name: "swiftGuide".to_string(),
                full_name: "ipader/SwiftGuide".to_string(),
                owner: ipader.clone(),
            },
        ],
        users: vec![apple, openstack, ipader],
    }
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// The rejection GitHub sends when the `q` parameter is missing or empty.
pub fn missing_keyword() -> (StatusCode, Json<ValidationError>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationError {
            message: "Validation Failed".to_string(),
            errors: vec![ValidationErrorDetail {
                resource: "Search".to_string(),
                field: "q".to_string(),
                code: "missing".to_string(),
            }],
        }),
    )
}

fn keyword(params: SearchParams) -> Result<String, (StatusCode, Json<ValidationError>)> {
    match params.q.as_deref() {
        Some(q) if !q.is_empty() => Ok(q.to_lowercase()),
        _ => Err(missing_keyword()),
    }
}

async fn search_repositories(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse<Repository>>, (StatusCode, Json<ValidationError>)> {
    let keyword = keyword(params)?;
    let items: Vec<Repository> = db
        .repositories
        .iter()
        .filter(|repository| {
            repository.name.to_lowercase().contains(&keyword)
                || repository.full_name.to_lowercase().contains(&keyword)
        })
        .cloned()
        .collect();

    Ok(Json(SearchResponse {
        total_count: items.len(),
        items,
    }))
}

async fn search_users(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse<User>>, (StatusCode, Json<ValidationError>)> {
    let keyword = keyword(params)?;
    let items: Vec<User> = db
        .users
        .iter()
        .filter(|user| user.login.to_lowercase().contains(&keyword))
        .cloned()
        .collect();

    Ok(Json(SearchResponse {
        total_count: items.len(),
        items,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_serializes_with_snake_case_keys() {
        let dataset = seed();
        let json = serde_json::to_value(&dataset.repositories[0]).unwrap();
        assert_eq!(json["full_name"], "apple/swift");
        assert_eq!(json["owner"]["login"], "apple");
    }

    #[test]
    fn user_kind_serializes_under_the_type_key() {
        let dataset = seed();
        let json = serde_json::to_value(&dataset.users[0]).unwrap();
        assert_eq!(json["type"], "Organization");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn validation_error_matches_the_github_shape() {
        let (status, Json(body)) = missing_keyword();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Validation Failed");
        assert_eq!(json["errors"][0]["resource"], "Search");
        assert_eq!(json["errors"][0]["field"], "q");
        assert_eq!(json["errors"][0]["code"], "missing");
    }

    #[test]
    fn seed_contains_the_fixture_records() {
        let dataset = seed();
        assert_eq!(dataset.repositories.len(), 3);
        assert_eq!(dataset.repositories[0].id, 44838949);
        assert_eq!(dataset.users.len(), 3);
        assert_eq!(dataset.users[0].login, "apple");
    }
}
