//! Integration tests for the typed clients against a mock gateway.

use roster_core::{NewUser, UserUpdate};
use roster_http::{AuthenticatedRosterClient, ClientBuilder, ClientError, PublicRosterClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authed(server: &MockServer) -> AuthenticatedRosterClient {
    ClientBuilder::new()
        .base_url(server.uri())
        .build_authenticated("test-token")
        .unwrap()
}

fn public(server: &MockServer) -> PublicRosterClient {
    ClientBuilder::new()
        .base_url(server.uri())
        .build_public()
        .unwrap()
}

fn sample_user(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "Sessions": [],
        "Devices": []
    })
}

#[tokio::test]
async fn test_builder_requires_base_url() {
    let err = ClientBuilder::new().build_public().unwrap_err();
    assert!(matches!(err, ClientError::Configuration(_)));
}

#[tokio::test]
async fn test_list_users_sends_query_params_and_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getallusers"))
        .and(query_param("page", "3"))
        .and(query_param("size", "10"))
        .and(query_param("search", "ada"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [sample_user("u-1")],
            "totalUsers": 21
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = authed(&server)
        .list_users(Some(3), Some(10), Some("ada"))
        .await
        .unwrap();
    assert_eq!(page.total_users, 21);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].first_name, "Ada");
}

#[tokio::test]
async fn test_list_users_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getallusers"))
        .and(query_param("page", "1"))
        .and(query_param("size", "5"))
        .and(query_param("search", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "totalUsers": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = authed(&server).list_users(None, None, None).await.unwrap();
    assert_eq!(page.total_users, 0);
}

#[tokio::test]
async fn test_create_user_posts_body() {
    let server = MockServer::start().await;
    let new_user = NewUser {
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        email: "grace@example.com".into(),
        password: "cobol1".into(),
    };
    Mock::given(method("POST"))
        .and(path("/create"))
        .and(body_json(&new_user))
        .respond_with(ResponseTemplate::new(201).set_body_json(sample_user("u-2")))
        .expect(1)
        .mount(&server)
        .await;

    let created = authed(&server).create_user(&new_user).await.unwrap();
    assert_eq!(created.id, "u-2");
}

#[tokio::test]
async fn test_update_user_sends_only_set_fields() {
    let server = MockServer::start().await;
    let update = UserUpdate {
        email: Some("new@example.com".into()),
        ..UserUpdate::default()
    };
    Mock::given(method("PUT"))
        .and(path("/update/u-1"))
        .and(body_json(json!({ "email": "new@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_user("u-1")))
        .expect(1)
        .mount(&server)
        .await;

    authed(&server).update_user("u-1", &update).await.unwrap();
}

#[tokio::test]
async fn test_delete_user_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/delete/u-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    authed(&server).delete_user("u-1").await.unwrap();
}

#[tokio::test]
async fn test_error_message_taken_from_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getuser/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "no such user" })),
        )
        .mount(&server)
        .await;

    let err = authed(&server).get_user("missing").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
    assert_eq!(err.to_string(), "no such user");
}

#[tokio::test]
async fn test_error_falls_back_when_body_is_opaque() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getuser/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>not found</html>"))
        .mount(&server)
        .await;

    let err = authed(&server).get_user("missing").await.unwrap_err();
    assert_eq!(err.to_string(), "User not Found");
}

#[tokio::test]
async fn test_server_error_uses_operation_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getallusers"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = authed(&server).list_users(None, None, None).await.unwrap_err();
    assert!(matches!(err, ClientError::ServerError { status: 500, .. }));
    assert_eq!(err.to_string(), "Failed to fetch users");
}

#[tokio::test]
async fn test_network_failure_surfaces_fallback_message() {
    // Point at a server that is no longer listening. Use a non-pooled
    // server so dropping it actually closes the listener; pooled servers
    // from `MockServer::start()` keep the port open for reuse.
    let server = MockServer::builder().start().await;
    let client = authed(&server);
    drop(server);

    let err = client.delete_user("u-1").await.unwrap_err();
    assert!(matches!(err, ClientError::Request { .. }));
    assert_eq!(err.to_string(), "Failed to Delete User");
}

#[tokio::test]
async fn test_login_returns_profile_and_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u-1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "token": "tok-abc"
        })))
        .mount(&server)
        .await;

    let response = public(&server)
        .login("ada@example.com", "secret")
        .await
        .unwrap();
    assert_eq!(response.token, "tok-abc");
    assert_eq!(response.first_name, "Ada");
}

#[tokio::test]
async fn test_login_rejection_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let err = public(&server)
        .login("ada@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_signup_accepts_created_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let signup = roster_http::types::SignupRequest {
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        email: "grace@example.com".into(),
        password: "cobol1".into(),
    };
    public(&server).signup(&signup).await.unwrap();
}

#[tokio::test]
async fn test_verify_token_sends_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/verify-token"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    authed(&server).verify_token().await.unwrap();
}

#[tokio::test]
async fn test_verify_token_rejection_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/verify-token"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = authed(&server).verify_token().await.unwrap_err();
    assert!(err.is_auth_error());
}
