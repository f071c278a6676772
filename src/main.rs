use std::env;
use std::path::PathBuf;

use anyhow::Context;
use product_api::{
    config::load_config, create_router_with_timeout, infrastructure::Logger, ProductService,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个命令行参数可指定配置文件路径
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref()).context("加载配置失败")?;
    config.validate()?;

    let _log_guard = Logger::init(&config.logging)?;

    info!("启动产品服务...");

    let service = ProductService::new();
    info!("✅ 已初始化 {} 个示例产品", service.len());

    let app = create_router_with_timeout(service, config.request_timeout());

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /products - 获取所有产品");
    info!("   POST   /products - 追加产品");
    info!("   GET    /health   - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("监听退出信号失败: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭...");
}
