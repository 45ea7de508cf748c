//! 用户路由处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{
    model::{CreateUser, UpdateUser, User},
    service::UserService,
};
use crate::core::{error::CoreError, middleware::request_logging_middleware};

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

/// 删除确认响应
#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub user: User,
}

/// 组装路由（CORS + trace + 请求日志中间件）
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/health", get(health_check))
        .layer(axum::middleware::from_fn(request_logging_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 获取所有用户
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_service.list())
}

/// 获取特定用户
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<User>, CoreError> {
    let user = state.user_service.get(id)?;
    Ok(Json(user))
}

/// 创建新用户
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>), CoreError> {
    let user = state.user_service.create(payload)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// 更新用户
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateUser>,
) -> Result<Json<User>, CoreError> {
    let user = state.user_service.update(id, payload)?;
    Ok(Json(user))
}

/// 删除用户
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>, CoreError> {
    let user = state.user_service.delete(id)?;
    Ok(Json(DeleteResponse {
        message: "User deleted".to_string(),
        user,
    }))
}

/// 健康检查
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "database": {
            "type": "in-memory",
            "users_count": state.user_service.count()
        }
    }))
}
