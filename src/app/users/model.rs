//! 用户数据模型

use serde::{Deserialize, Serialize};

/// 用户记录
///
/// JSON 形状与接口约定一致：`{id, name, email, age, role}`，
/// `age` 缺省时序列化为 null。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    pub role: String,
}

/// 创建用户请求
///
/// `name` 和 `email` 在类型上是可选的，缺失时由服务层统一
/// 返回 400，而不是让 JSON 反序列化直接拒绝请求。
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// 更新用户请求
///
/// 按键更新：请求里给出的字段覆盖存量值，没给出的保持不变。
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
