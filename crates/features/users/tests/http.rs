mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{app, basic_auth, seeded_record};
use rollcall_users::Role;
use tower::ServiceExt;

fn roster() -> Vec<rollcall_users::UserRecord> {
    vec![
        seeded_record(1, "admin", Some("admin@example.com"), "admin-pass", Role::Admin),
        seeded_record(2, "user1", Some("user1@example.com"), "password1", Role::User),
    ]
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn get_all_users_as_admin_returns_the_roster() {
    let response = app(roster())
        .oneshot(
            Request::builder()
                .uri("/api/user/all")
                .header(header::AUTHORIZATION, basic_auth("admin", "admin-pass"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let list = json.as_array().expect("array");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["username"], "admin");
    assert_eq!(list[1]["userRole"], "ROLE_USER");
    assert!(list[0].get("password").is_none(), "hashes must never be serialized");
}

#[tokio::test]
async fn get_all_users_as_regular_user_is_forbidden() {
    let response = app(roster())
        .oneshot(
            Request::builder()
                .uri("/api/user/all")
                .header(header::AUTHORIZATION, basic_auth("user1", "password1"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn missing_credentials_are_challenged() {
    let response = app(roster())
        .oneshot(Request::builder().uri("/api/user/id/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let response = app(roster())
        .oneshot(
            Request::builder()
                .uri("/api/user/id/1")
                .header(header::AUTHORIZATION, basic_auth("user1", "nope"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn delete_as_admin_succeeds_and_as_user_is_forbidden() {
    let app = app(roster());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/user/id/2")
                .header(header::AUTHORIZATION, basic_auth("user1", "password1"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/user/id/2")
                .header(header::AUTHORIZATION, basic_auth("admin", "admin-pass"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn get_user_by_id_returns_the_record() {
    let response = app(roster())
        .oneshot(
            Request::builder()
                .uri("/api/user/id/2")
                .header(header::AUTHORIZATION, basic_auth("user1", "password1"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 2);
    assert_eq!(json["username"], "user1");
    assert_eq!(json["email"], "user1@example.com");
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let response = app(roster())
        .oneshot(
            Request::builder()
                .uri("/api/user/id/99")
                .header(header::AUTHORIZATION, basic_auth("user1", "password1"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lookup_by_username_and_email_ignore_case() {
    let app = app(roster());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/user/username/USER1")
                .header(header::AUTHORIZATION, basic_auth("user1", "password1"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], 2);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/user/email/User1@Example.com")
                .header(header::AUTHORIZATION, basic_auth("user1", "password1"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], 2);
}

#[tokio::test]
async fn create_user_returns_the_stored_record_without_the_password() {
    let response = app(roster())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/user")
                .header(header::AUTHORIZATION, basic_auth("user1", "password1"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{ "username": "newbie", "email": "new@example.com", "password": "pw" }"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 3);
    assert_eq!(json["username"], "newbie");
    assert_eq!(json["userRole"], "ROLE_USER");
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn create_with_taken_username_conflicts() {
    let response = app(roster())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/user")
                .header(header::AUTHORIZATION, basic_auth("user1", "password1"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{ "username": "ADMIN" }"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_user_by_id_applies_the_draft() {
    let response = app(roster())
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/user/id/2")
                .header(header::AUTHORIZATION, basic_auth("user1", "password1"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{ "username": "user1", "email": "renamed@example.com" }"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "renamed@example.com");
}

#[tokio::test]
async fn drafts_with_unknown_fields_are_rejected() {
    let response = app(roster())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/user")
                .header(header::AUTHORIZATION, basic_auth("user1", "password1"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{ "username": "x", "isAdmin": true }"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
