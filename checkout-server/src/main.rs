use checkout_server::core::Result;
use checkout_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    print_banner();

    tracing::info!(
        environment = %config.environment,
        tariff_path = %config.tariff_path,
        "🦀 Checkout Server starting..."
    );

    // 2. 初始化服务器状态 (加载资费设置)
    let state = ServerState::initialize(&config)
        .inspect_err(|e| tracing::error!("Startup failed: {}", e))?;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    server
        .run()
        .await
        .inspect_err(|e| tracing::error!("Server error: {}", e))
}
