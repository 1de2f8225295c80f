use std::time::Instant;

use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态 - 所有处理器共享
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
/// | started_at | Instant | 启动时间 (健康检查用) |
///
/// Clone 只复制连接池句柄，成本很低。
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务
    pub db: DbService,
    /// 启动时间
    pub started_at: Instant,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            config,
            db,
            started_at: Instant::now(),
        }
    }

    /// 打开数据库并构造状态
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path, config.db_max_connections).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// 连接池引用
    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.db.pool
    }
}
