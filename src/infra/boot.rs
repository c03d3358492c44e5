use crate::infra::config::{AppConfig, Config, RunMode};
use std::net::SocketAddr;

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::from_env();
    let app_cfg = AppConfig::from_env_and_toml()?;
    tracing::info!(
        mode = cfg.mode.as_str(),
        port = cfg.port,
        rpc_enabled = cfg.rpc_enabled,
        nws_base = %app_cfg.nws.base_url,
        "BOOT nws-alerts-mcp"
    );

    if cfg.mode == RunMode::Stdio {
        tracing::info!("Weather MCP Server running on stdio");
        let factory = crate::tools::alerts::tool_router::factory_from_config(app_cfg.nws);
        crate::infra::runtime::mcp_transport::serve_stdio(factory)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = if cfg.rpc_enabled {
        let registry = crate::tools::registry::build_registry(&app_cfg.nws);
        crate::infra::http_app::build_app_with_rpc(app_cfg.nws, registry)
    } else {
        crate::infra::http_app::build_app_default(app_cfg.nws)
    };

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
