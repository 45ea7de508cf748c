//! # 用户管理 CRUD Demo
//!
//! 前后端配对的用户管理示例，包括：
//! - 基于 axum 的用户存储服务（内存集合 + REST API）
//! - 基于 reqwest 的终端客户端（列表渲染 + 增删改）

pub mod app;
pub mod client;
pub mod core;
pub mod infrastructure;
