//! Kitchen Ops - 服务入口

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use kitchen_ops::domain::clock::{Clock, SystemClock};
use kitchen_ops::infrastructure::gateway::build_gateway;
use kitchen_ops::{AppState, build_router};
use mise_bootstrap::{init_runtime, shutdown_signal};
use mise_config::AppConfig;
use mise_telemetry::init_metrics;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load("config").context("Failed to load configuration")?;
    init_runtime(&config);

    let metrics = match init_metrics() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!(error = %e, "Metrics disabled");
            None
        }
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::from_offset_minutes(
        config.business.utc_offset_minutes,
    ));
    let gateway = build_gateway(&config, clock.today())?;
    let state = AppState::new(&config, gateway, clock)?;

    // 启动时加载一次目录；失败不阻止启动，/ready 会报告未就绪
    if let Err(e) = state.catalog.reload().await {
        warn!(error = %e, "Initial catalog load failed");
    }

    let app = build_router(state, metrics);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Kitchen Ops listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
