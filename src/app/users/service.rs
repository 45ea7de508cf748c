//! 用户存储服务
//!
//! 进程内唯一的用户集合持有者。集合是插入有序的 Vec，
//! 顺序即展示顺序；每个操作在一次锁内完整执行，
//! 等价于单线程逐请求处理的并发模型。

use std::sync::{Arc, Mutex};

use super::model::{CreateUser, UpdateUser, User};
use crate::core::error::CoreError;

/// 存储内部状态
///
/// `high_water` 记录历史上分配过的最大 id，保证删除最大 id
/// 的记录之后，新建也不会复用已删除的 id。
struct Store {
    users: Vec<User>,
    high_water: u64,
}

#[derive(Clone)]
pub struct UserService {
    store: Arc<Mutex<Store>>,
}

impl UserService {
    /// 创建带十条种子数据的存储（不落盘，进程重启即重置）
    pub fn new() -> Self {
        let users = seed_users();
        let high_water = users.iter().map(|u| u.id).max().unwrap_or(0);
        Self {
            store: Arc::new(Mutex::new(Store { users, high_water })),
        }
    }

    /// 创建空存储
    pub fn empty() -> Self {
        Self {
            store: Arc::new(Mutex::new(Store {
                users: Vec::new(),
                high_water: 0,
            })),
        }
    }

    /// 返回全量用户，按插入顺序
    pub fn list(&self) -> Vec<User> {
        self.store.lock().unwrap().users.clone()
    }

    pub fn get(&self, id: u64) -> Result<User, CoreError> {
        let store = self.store.lock().unwrap();
        store
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(CoreError::user_not_found)
    }

    /// 创建用户：name/email 必填，age 缺省为 null，role 缺省为 "User"
    pub fn create(&self, req: CreateUser) -> Result<User, CoreError> {
        let name = req.name.unwrap_or_default();
        let email = req.email.unwrap_or_default();
        if name.is_empty() || email.is_empty() {
            return Err(CoreError::BadRequest(
                "Name and email are required".to_string(),
            ));
        }

        let mut store = self.store.lock().unwrap();
        let user = User {
            id: next_id(&store.users).max(store.high_water + 1),
            name,
            email,
            age: req.age,
            role: req
                .role
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| "User".to_string()),
        };
        store.high_water = user.id;
        store.users.push(user.clone());
        Ok(user)
    }

    /// 按键更新：请求里给出的字段覆盖，没给出的保持不变；
    /// 空字符串的 name/email 视为未提供。全空请求是合法的 no-op。
    pub fn update(&self, id: u64, req: UpdateUser) -> Result<User, CoreError> {
        let mut store = self.store.lock().unwrap();
        let user = store
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(CoreError::user_not_found)?;

        if let Some(name) = req.name.filter(|n| !n.is_empty()) {
            user.name = name;
        }
        if let Some(email) = req.email.filter(|e| !e.is_empty()) {
            user.email = email;
        }
        if let Some(age) = req.age {
            user.age = Some(age);
        }
        if let Some(role) = req.role.filter(|r| !r.is_empty()) {
            user.role = role;
        }

        Ok(user.clone())
    }

    /// 删除用户并返回被删除的记录
    pub fn delete(&self, id: u64) -> Result<User, CoreError> {
        let mut store = self.store.lock().unwrap();
        let index = store
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(CoreError::user_not_found)?;
        Ok(store.users.remove(index))
    }

    pub fn count(&self) -> usize {
        self.store.lock().unwrap().users.len()
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}

/// 取当前集合最大 id + 1，空集合为 1
///
/// O(n) 扫描，数据集始终很小所以够用；数据量上去之后
/// 应该换成独立计数器而不是每次扫集合。
fn next_id(users: &[User]) -> u64 {
    users.iter().map(|u| u.id).max().map_or(1, |max| max + 1)
}

/// 十条种子数据，对应接口约定里 id 1-10 的初始集合
fn seed_users() -> Vec<User> {
    let rows = [
        (1, "Alice Johnson", "alice@example.com", 28, "Designer"),
        (2, "Bob Smith", "bob@example.com", 34, "Developer"),
        (3, "Charlie Kim", "charlie@example.com", 41, "Manager"),
        (4, "Diana Lee", "diana@example.com", 25, "Engineer"),
        (5, "Ethan Brown", "ethan@example.com", 30, "Support"),
        (6, "Fiona Davis", "fiona@example.com", 27, "HR"),
        (7, "George Harris", "george@example.com", 38, "Architect"),
        (8, "Hannah White", "hannah@example.com", 32, "Product Owner"),
        (9, "Ian Black", "ian@example.com", 29, "QA"),
        (10, "Julia Green", "julia@example.com", 35, "Marketing"),
    ];

    rows.iter()
        .map(|&(id, name, email, age, role)| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            age: Some(age),
            role: role.to_string(),
        })
        .collect()
}
