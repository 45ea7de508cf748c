//! 终端客户端模块

pub mod api;
pub mod view;
