use bistro_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载 .env 和配置
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    // 2. 日志
    setup_environment(&config);
    tracing::info!("Bistro server starting (env: {})", config.environment);

    // 3. 初始化服务器状态 (打开数据库 + 迁移)
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    let server = Server::new(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
