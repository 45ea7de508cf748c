//! 用户列表终端客户端
//!
//! 行为等价于 React 前端：拉取列表渲染，每次变更成功后
//! 重新拉取一遍列表保持一致。

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use rust_user_crud::app::users::model::{CreateUser, UpdateUser};
use rust_user_crud::client::{api::ApiClient, view};

#[derive(Parser)]
#[command(name = "user_cli", about = "用户管理终端客户端")]
struct Cli {
    /// 用户服务地址
    #[arg(long, env = "USER_API_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 显示用户列表
    List,
    /// 查看单个用户
    Get { id: u64 },
    /// 新增用户
    Add {
        name: String,
        email: String,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        role: Option<String>,
    },
    /// 编辑用户，只提交给出的字段
    Edit {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        role: Option<String>,
    },
    /// 删除用户（交互确认，--yes 跳过）
    Delete {
        id: u64,
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.base_url);

    match cli.command {
        Command::List => show_users(&client).await,
        Command::Get { id } => {
            let user = client.get_user(id).await?;
            println!("{}", view::render_row(&user));
            Ok(())
        }
        Command::Add {
            name,
            email,
            age,
            role,
        } => {
            // 提交前本地校验：name/email 为空直接拒绝，不发请求
            if name.trim().is_empty() || email.trim().is_empty() {
                bail!("姓名和邮箱不能为空");
            }
            let created = client
                .create_user(&CreateUser {
                    name: Some(name),
                    email: Some(email),
                    age,
                    role,
                })
                .await?;
            println!("✅ 已创建用户 #{} {}", created.id, created.name);
            show_users(&client).await
        }
        Command::Edit {
            id,
            name,
            email,
            age,
            role,
        } => {
            if name.as_deref().is_some_and(|n| n.trim().is_empty())
                || email.as_deref().is_some_and(|e| e.trim().is_empty())
            {
                bail!("姓名和邮箱不能为空");
            }
            let updated = client
                .update_user(
                    id,
                    &UpdateUser {
                        name,
                        email,
                        age,
                        role,
                    },
                )
                .await?;
            println!("✅ 已更新用户 #{} {}", updated.id, updated.name);
            show_users(&client).await
        }
        Command::Delete { id, yes } => {
            if !yes && !confirm(&format!("确认删除用户 #{}? [y/N] ", id))? {
                println!("已取消");
                return Ok(());
            }
            let confirmation = client.delete_user(id).await?;
            println!(
                "🗑️  {}: #{} {}",
                confirmation.message, confirmation.user.id, confirmation.user.name
            );
            show_users(&client).await
        }
    }
}

/// 拉取并渲染列表；失败时用错误提示替代列表
async fn show_users(client: &ApiClient) -> Result<()> {
    println!("{}", view::LOADING);
    match client.list_users().await {
        Ok(users) => {
            print!("{}", view::render_users(&users));
            Ok(())
        }
        Err(err) => {
            println!("{}", view::LOAD_ERROR);
            Err(err).context("获取用户列表失败")
        }
    }
}

/// 从标准输入读取 y/N 确认
fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
