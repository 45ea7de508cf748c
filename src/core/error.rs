//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// 核心错误类型
///
/// 接口约定只有两类业务错误：创建时缺少必填字段（400），
/// 以及按 id 查不到用户（404）。
#[derive(Debug, PartialEq)]
pub enum CoreError {
    BadRequest(String),
    NotFound(String),
}

impl CoreError {
    /// get/update/delete 共用的 404 错误
    pub fn user_not_found() -> Self {
        CoreError::NotFound("User not found".to_string())
    }
}

/// 错误响应结构（接口约定为裸 `{message}`，无信封字段）
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, axum::Json(ErrorResponse { message })).into_response()
    }
}
