//! Verify descriptor building and response parsing against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each vector describes a keyword, the request it must build, a simulated
//! response, and the expected parse outcome. Parsed results are compared as
//! decoded models rather than raw strings to stay independent of field order.

use github_search::{
    build_request, parse_response, ApiRequest, ClientError, HttpMethod, HttpResponse, Repository,
    SearchRepositories, SearchResponse, SearchUsers, User,
};

const BASE_URL: &str = "https://api.github.com";

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().as_bytes().to_vec(),
    }
}

fn check_request<R: ApiRequest>(case: &serde_json::Value, request: &R) {
    let name = case["name"].as_str().unwrap();
    let expected = &case["expected_request"];
    let built = build_request(BASE_URL, request);
    assert_eq!(
        built.method,
        parse_method(expected["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(built.url, expected["url"].as_str().unwrap(), "{name}: url");
}

fn check_error(name: &str, expected: &str, error: ClientError) {
    match expected {
        "api" => assert!(
            matches!(error, ClientError::Api(_)),
            "{name}: expected Api, got {error:?}"
        ),
        "parse" => assert!(
            matches!(error, ClientError::ResponseParse(_)),
            "{name}: expected ResponseParse, got {error:?}"
        ),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

#[test]
fn search_repositories_vectors() {
    let raw = include_str!("../../test-vectors/search_repositories.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let request = SearchRepositories::new(case["keyword"].as_str().unwrap());
        check_request(case, &request);

        let response = simulated_response(case);
        let result = parse_response::<SearchResponse<Repository>>(&response);
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, expected_error.as_str().unwrap(), result.unwrap_err());
        } else {
            let parsed = result.unwrap();
            let expected: SearchResponse<Repository> =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(parsed, expected, "{name}: parsed result");
        }
    }
}

#[test]
fn search_users_vectors() {
    let raw = include_str!("../../test-vectors/search_users.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let request = SearchUsers::new(case["keyword"].as_str().unwrap());
        check_request(case, &request);

        let response = simulated_response(case);
        let result = parse_response::<SearchResponse<User>>(&response);
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, expected_error.as_str().unwrap(), result.unwrap_err());
        } else {
            let parsed = result.unwrap();
            let expected: SearchResponse<User> =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(parsed, expected, "{name}: parsed result");
        }
    }
}
