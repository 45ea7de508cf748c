//! 用户 REST API 集成测试
//!
//! 直接用 tower 的 oneshot 驱动路由，不起真实监听端口。

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use rust_user_crud::app::users::{
    handler::{router, AppState},
    service::UserService,
};

fn app() -> Router {
    router(AppState {
        user_service: UserService::new(),
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn list_returns_ten_seed_users() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 10);
    assert_eq!(users[0]["id"], 1);
    assert_eq!(users[0]["name"], "Alice Johnson");
    assert_eq!(users[9]["id"], 10);
}

#[tokio::test]
async fn get_returns_single_user() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/users/3", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);
    assert_eq!(body["name"], "Charlie Kim");
    assert_eq!(body["email"], "charlie@example.com");
    assert_eq!(body["age"], 41);
    assert_eq!(body["role"], "Manager");
}

#[tokio::test]
async fn get_missing_user_returns_404() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/users/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "User not found"}));
}

#[tokio::test]
async fn create_assigns_next_id_and_appends() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"name": "Zed", "email": "z@z.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 11);
    assert_eq!(body["age"], Value::Null);
    assert_eq!(body["role"], "User");

    // 新记录追加在列表末尾
    let (_, list) = send(&app, Method::GET, "/users", None).await;
    let users = list.as_array().unwrap();
    assert_eq!(users.len(), 11);
    assert_eq!(users[10]["id"], 11);
    assert_eq!(users[10]["name"], "Zed");
}

#[tokio::test]
async fn create_without_name_or_email_returns_400() {
    let app = app();

    let cases = [
        json!({}),
        json!({"name": "Zed"}),
        json!({"email": "z@z.com"}),
        json!({"name": "", "email": "z@z.com"}),
        json!({"name": "Zed", "email": ""}),
    ];
    for case in cases {
        let (status, body) = send(&app, Method::POST, "/users", Some(case)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Name and email are required"}));
    }

    // 失败的创建不改变集合
    let (_, list) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(list.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn update_changes_only_given_fields() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/users/3",
        Some(json!({"role": "Manager"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "Manager");
    assert_eq!(body["name"], "Charlie Kim");
    assert_eq!(body["email"], "charlie@example.com");
    assert_eq!(body["age"], 41);
}

#[tokio::test]
async fn update_with_empty_body_is_accepted_noop() {
    let app = app();
    let (before_status, before) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(before_status, StatusCode::OK);

    let (status, after) = send(&app, Method::PUT, "/users/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(before, after);
}

#[tokio::test]
async fn update_missing_user_returns_404() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/users/99",
        Some(json!({"name": "Ghost"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "User not found"}));
}

#[tokio::test]
async fn delete_removes_record_and_returns_confirmation() {
    let app = app();
    let (status, body) = send(&app, Method::DELETE, "/users/5", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted");
    assert_eq!(body["user"]["id"], 5);
    assert_eq!(body["user"]["name"], "Ethan Brown");

    let (_, list) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(list.as_array().unwrap().len(), 9);

    let (status, _) = send(&app, Method::GET, "/users/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_user_returns_404() {
    let app = app();
    let (status, body) = send(&app, Method::DELETE, "/users/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "User not found"}));
}

#[tokio::test]
async fn deleted_max_id_is_not_reused() {
    let app = app();
    send(&app, Method::DELETE, "/users/10", None).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"name": "Zed", "email": "z@z.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 11);
}

#[tokio::test]
async fn health_reports_user_count() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["users_count"], 10);
}

/// 完整场景：新建 -> 部分更新 -> 删除 -> 404
#[tokio::test]
async fn end_to_end_scenario() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"name": "Zed", "email": "z@z.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 11);
    assert_eq!(created["age"], Value::Null);
    assert_eq!(created["role"], "User");

    let (status, updated) = send(&app, Method::PUT, "/users/11", Some(json!({"age": 40}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["age"], 40);
    assert_eq!(updated["name"], "Zed");
    assert_eq!(updated["email"], "z@z.com");
    assert_eq!(updated["role"], "User");

    let (status, deleted) = send(&app, Method::DELETE, "/users/11", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "User deleted");
    assert_eq!(deleted["user"]["id"], 11);

    let (status, body) = send(&app, Method::GET, "/users/11", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "User not found"}));
}
