//! 基础设施模块

pub mod logger;
