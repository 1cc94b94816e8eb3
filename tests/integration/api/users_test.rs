//! User API integration tests
//!
//! CRUD over `/users` and the admin gate on DELETE.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use user_service::backend::auth::password::verify_password;
use user_service::backend::users::{CreateUser, Role, UserRepository, UserService};

use crate::assert_error_body;
use crate::common::{TestApp, TEST_BCRYPT_COST};

#[tokio::test]
async fn test_login_then_list_hides_password_hash() {
    let app = TestApp::new();
    let (_, token) = app.user_with_token("alice@example.com", Role::User).await;
    app.seed_user("bob@example.com", "password123", Role::User).await;

    let (status, body) = app.send(Method::GET, "/users", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        let object = user.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["createdAt", "email", "id", "name"]);
    }
    assert_eq!(users[0]["email"], "alice@example.com");
}

#[tokio::test]
async fn test_created_user_logs_in_and_appears_in_listing() {
    let app = TestApp::new();
    let users = UserService::new(Arc::new(app.repo.clone()), TEST_BCRYPT_COST);
    let created = users
        .create(CreateUser {
            name: String::new(),
            email: "a@b.com".to_string(),
            password: "pw1".to_string(),
            role: Role::User,
        })
        .await
        .unwrap();

    let token = app.login("a@b.com", "pw1").await;
    assert!(!token.is_empty());

    let (status, body) = app.send(Method::GET, "/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let listed = body
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == created.id)
        .expect("created user missing from listing");
    assert_eq!(listed["email"], "a@b.com");
    assert!(listed.get("password").is_none());
    assert!(listed.get("password_hash").is_none());
}

#[tokio::test]
async fn test_create_user() {
    let app = TestApp::new();
    let (_, token) = app.user_with_token("creator@example.com", Role::User).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/users",
            Some(&token),
            Some(json!({ "name": "New", "email": "new@example.com", "password": "pw-123" })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "new@example.com");
    assert_eq!(body["name"], "New");
    assert!(body.get("password_hash").is_none());

    let stored = app.repo.get_by_email("new@example.com").await.unwrap();
    assert_eq!(stored.role, Role::User);
    assert_ne!(stored.password_hash, "pw-123");
    assert!(verify_password("pw-123", &stored.password_hash).await.unwrap());

    // The new account can log in right away
    app.login("new@example.com", "pw-123").await;
}

#[tokio::test]
async fn test_create_duplicate_email_is_bad_request() {
    let app = TestApp::new();
    let (_, token) = app.user_with_token("dup@example.com", Role::User).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/users",
            Some(&token),
            Some(json!({ "email": "dup@example.com", "password": "pw" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body!(body, StatusCode::BAD_REQUEST, "email already exists");
}

#[tokio::test]
async fn test_create_validation_errors() {
    let app = TestApp::new();
    let (_, token) = app.user_with_token("v@example.com", Role::User).await;

    for payload in [
        json!({ "email": "not-an-email", "password": "pw" }),
        json!({ "email": "ok@example.com", "password": "" }),
        json!({ "email": "ok@example.com" }),
    ] {
        let (status, body) = app
            .send(Method::POST, "/users", Some(&token), Some(payload.clone()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
        assert_error_body!(body, StatusCode::BAD_REQUEST);
    }
    assert_eq!(app.repo.len().await, 1);
}

#[tokio::test]
async fn test_create_requires_authentication() {
    let app = TestApp::new();
    let (status, _) = app
        .send(
            Method::POST,
            "/users",
            None,
            Some(json!({ "email": "x@example.com", "password": "pw" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(app.repo.is_empty().await);
}

#[tokio::test]
async fn test_get_user_and_missing_user() {
    let app = TestApp::new();
    let (me, token) = app.user_with_token("me@example.com", Role::User).await;

    let (status, body) = app
        .send(Method::GET, &format!("/users/{}", me.id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], me.id);
    assert_eq!(body["email"], "me@example.com");

    let (status, body) = app.send(Method::GET, "/users/9999", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body!(body, StatusCode::NOT_FOUND, "user not found");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = TestApp::new();
    let (_, token) = app.user_with_token("me@example.com", Role::User).await;

    let (status, body) = app.send(Method::GET, "/users/abc", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body!(body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user_partial() {
    let app = TestApp::new();
    let (me, token) = app.user_with_token("me@example.com", Role::User).await;

    let (status, body) = app
        .send(
            Method::PUT,
            &format!("/users/{}", me.id),
            Some(&token),
            Some(json!({ "name": "Renamed", "email": "" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Renamed");
    assert_eq!(body["email"], "me@example.com");

    // Password unchanged: the old one still works
    app.login("me@example.com", "password123").await;
}

#[tokio::test]
async fn test_update_password_is_rehashed() {
    let app = TestApp::new();
    let (me, token) = app.user_with_token("me@example.com", Role::User).await;

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/users/{}", me.id),
            Some(&token),
            Some(json!({ "password": "changed-pw" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let stored = app.repo.get_by_id(me.id).await.unwrap();
    assert!(verify_password("changed-pw", &stored.password_hash).await.unwrap());
    app.login("me@example.com", "changed-pw").await;
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let app = TestApp::new();
    let (_, token) = app.user_with_token("me@example.com", Role::User).await;

    let (status, _) = app
        .send(Method::PUT, "/users/4242", Some(&token), Some(json!({ "name": "x" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_malformed_body() {
    let app = TestApp::new();
    let (me, token) = app.user_with_token("me@example.com", Role::User).await;

    let request = Request::builder()
        .method(Method::PUT)
        .uri(format!("/users/{}", me.id))
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("[1, 2"))
        .unwrap();

    let (status, body) = app.send_request(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body!(body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_as_non_admin_is_forbidden() {
    let app = TestApp::new();
    let (me, token) = app.user_with_token("me@example.com", Role::User).await;

    let (status, body) = app
        .send(Method::DELETE, &format!("/users/{}", me.id), Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error_body!(body, StatusCode::FORBIDDEN, "access denied, admin role required");
    assert!(app.repo.get_by_id(me.id).await.is_ok());
}

#[tokio::test]
async fn test_delete_without_token_is_unauthorized() {
    let app = TestApp::new();
    let victim = app.seed_user("victim@example.com", "password123", Role::User).await;

    let (status, _) = app
        .send(Method::DELETE, &format!("/users/{}", victim.id), None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_deletes_user() {
    let app = TestApp::new();
    let (_, admin_token) = app.user_with_token("admin@example.com", Role::Admin).await;
    let victim = app.seed_user("victim@example.com", "password123", Role::User).await;
    let uri = format!("/users/{}", victim.id);

    let (status, body) = app.send(Method::DELETE, &uri, Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = app.send(Method::GET, &uri, Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send(Method::DELETE, &uri, Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
