use thiserror::Error;

use crate::utils::AppError;

/// 启动和运行期错误 (非请求级)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库初始化失败: {0}")]
    Database(#[from] AppError),

    #[error("端口绑定失败: {0}")]
    Bind(#[from] std::io::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
