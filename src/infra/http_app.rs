use axum::{
    routing::{any_service, get, post},
    Router,
};
use std::sync::Arc;

use crate::infra::config::NwsConfig;
use crate::infra::runtime::mcp_transport::{make_streamable_http_service, LocalSessionManager};
use crate::tools::alerts::tool_router::factory_from_config;
use crate::tools::registry::ToolRegistry;

/// `/healthz` + streamable MCP at `/mcp`.
pub fn build_app_default(nws: NwsConfig) -> Router {
    let session_mgr = Arc::new(LocalSessionManager::default());
    let mcp_service = make_streamable_http_service(factory_from_config(nws), session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}

/// Default app **plus** plain JSON-RPC over the tool registry at `/rpc`.
pub fn build_app_with_rpc(nws: NwsConfig, registry: ToolRegistry) -> Router {
    build_app_default(nws).merge(
        Router::new()
            .route("/rpc", post(crate::api::rpc::http))
            .with_state(registry),
    )
}
