//! 用户列表渲染
//!
//! 纯字符串拼装，不做任何 IO，便于单元测试。
//! 提示文案沿用前端页面的写法。

use crate::app::users::model::User;

/// 加载中的提示
pub const LOADING: &str = "Loading users...";

/// 列表加载失败时替代列表展示的提示
pub const LOAD_ERROR: &str = "Error loading users 😢";

/// 取名字首字符的大写形式作为头像字符，空名字用 "?"
pub fn avatar(name: &str) -> String {
    match name.chars().next() {
        Some(c) => c.to_uppercase().to_string(),
        None => "?".to_string(),
    }
}

/// 渲染单个用户行
pub fn render_row(user: &User) -> String {
    let age = match user.age {
        Some(age) => age.to_string(),
        None => "-".to_string(),
    };
    format!(
        "[{}] #{:<3} {} — {} ({}, age {})",
        avatar(&user.name),
        user.id,
        user.name,
        user.email,
        user.role,
        age
    )
}

/// 渲染整个用户列表，每条记录一行
pub fn render_users(users: &[User]) -> String {
    let mut out = String::from("All Users\n");
    if users.is_empty() {
        out.push_str("No users found.\n");
        return out;
    }

    for user in users {
        out.push_str(&render_row(user));
        out.push('\n');
    }
    out
}
