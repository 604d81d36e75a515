//! Integration tests for the GitHub API client
//!
//! Exercises GitHubClient against a wiremock server; no network access and
//! no real credentials involved.

use autorepo_projects::github::GitHubClient;
use autorepo_projects::Error;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::with_api_url("test-token", server.uri()).unwrap()
}

#[tokio::test]
async fn test_authenticated_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"login": "octocat"})))
        .mount(&server)
        .await;

    let user = client_for(&server).authenticated_user().await.unwrap();

    assert_eq!(user.login, "octocat");
}

#[tokio::test]
async fn test_create_repository() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({"name": "demo123"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "demo123",
            "html_url": "https://github.com/octocat/demo123",
            "clone_url": "https://github.com/octocat/demo123.git",
            "default_branch": "main"
        })))
        .mount(&server)
        .await;

    let repo = client_for(&server).create_repository("demo123").await.unwrap();

    assert_eq!(repo.name, "demo123");
    assert_eq!(repo.html_url, "https://github.com/octocat/demo123");
    assert_eq!(repo.clone_url, "https://github.com/octocat/demo123.git");
    assert_eq!(repo.default_branch.as_deref(), Some("main"));
}

#[tokio::test]
async fn test_bad_credentials_map_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Bad credentials"})))
        .mount(&server)
        .await;

    let err = client_for(&server).authenticated_user().await.unwrap_err();

    match err {
        Error::GitHubAuth { message } => assert_eq!(message, "Bad credentials"),
        other => panic!("expected GitHubAuth, got: {other}"),
    }
}

#[tokio::test]
async fn test_name_collision_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Repository creation failed.",
            "errors": [{"field": "name", "message": "name already exists on this account"}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).create_repository("demo123").await.unwrap_err();

    match err {
        Error::GitHubApi { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Repository creation failed.");
        }
        other => panic!("expected GitHubApi, got: {other}"),
    }
}

#[tokio::test]
async fn test_error_without_json_body_uses_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream broke"))
        .mount(&server)
        .await;

    let err = client_for(&server).authenticated_user().await.unwrap_err();

    assert!(matches!(err, Error::GitHubApi { status: 500, .. }));
}
