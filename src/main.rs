//! 用户存储服务入口
//!
//! 内存用户集合 + REST API，进程重启即回到种子数据。

use std::env;

use tokio::net::TcpListener;
use tracing::{info, Level};

use rust_user_crud::app::users::{
    handler::{router, AppState},
    service::UserService,
};
use rust_user_crud::infrastructure::logger::Logger;

#[tokio::main]
async fn main() {
    Logger::init(Level::INFO);

    let state = AppState {
        user_service: UserService::new(),
    };
    info!("✅ 已初始化 {} 个种子用户", state.user_service.count());

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = format!("127.0.0.1:{}", port);
    let listener = TcpListener::bind(&addr).await.expect("无法绑定监听地址");

    info!("🚀 用户存储服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /users      - 获取所有用户");
    info!("   POST   /users      - 创建新用户");
    info!("   GET    /users/:id  - 获取特定用户");
    info!("   PUT    /users/:id  - 更新用户");
    info!("   DELETE /users/:id  - 删除用户");
    info!("   GET    /health     - 健康检查");

    axum::serve(listener, app).await.expect("服务器启动失败");
}
