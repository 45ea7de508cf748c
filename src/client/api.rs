//! 用户服务 HTTP 客户端

use serde::Deserialize;
use thiserror::Error;

use crate::app::users::model::{CreateUser, UpdateUser, User};

/// 客户端错误类型
#[derive(Debug, Error)]
pub enum ApiError {
    /// 服务端返回的业务错误（400/404）
    #[error("{message}")]
    Api { status: u16, message: String },
    /// 网络或协议层错误
    #[error("请求失败: {0}")]
    Network(#[from] reqwest::Error),
}

/// 服务端错误响应体
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// 删除确认响应
#[derive(Debug, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
    pub user: User,
}

/// 固定 base URL 的 API 客户端，每个方法对应一个 HTTP 操作
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let resp = self
            .http
            .get(format!("{}/users", self.base_url))
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        let resp = self
            .http
            .get(format!("{}/users/{}", self.base_url, id))
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn create_user(&self, req: &CreateUser) -> Result<User, ApiError> {
        let resp = self
            .http
            .post(format!("{}/users", self.base_url))
            .json(req)
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn update_user(&self, id: u64, req: &UpdateUser) -> Result<User, ApiError> {
        let resp = self
            .http
            .put(format!("{}/users/{}", self.base_url, id))
            .json(req)
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn delete_user(&self, id: u64) -> Result<DeleteConfirmation, ApiError> {
        let resp = self
            .http
            .delete(format!("{}/users/{}", self.base_url, id))
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// 成功时按 JSON 解码，失败时读取 `{message}` 错误体
    async fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("HTTP {}", status.as_u16()),
        };
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:3000/");
        assert_eq!(client.base_url, "http://127.0.0.1:3000");
    }
}
