//! Bistro Server - 员工与菜单管理 REST API
//!
//! # 模块结构
//!
//! ```text
//! bistro-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由汇总 + 中间件
//! ├── middleware/    # 请求日志
//! ├── db/            # SQLite 连接池和仓储层
//! └── utils/         # 错误、校验、日志
//! ```
//!
//! All endpoints live under `/api`: employees (with nested timesheets) and
//! menus (with nested menu items).

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use routes::build_app;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 按配置初始化日志 (生产环境输出 JSON)
pub fn setup_environment(config: &Config) {
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.is_production()),
        config.log_dir.as_deref(),
    );
}
