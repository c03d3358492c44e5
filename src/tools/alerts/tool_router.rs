use std::future::Future;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Implementation, JsonObject, ServerCapabilities, ServerInfo};

use super::AlertsTool;
use crate::core::mcp::SERVER_NAME;
use crate::infra::config::NwsConfig;
use crate::infra::runtime::mcp_transport::ServerHandler;

/// MCP handler exposing `get_alerts` through rmcp's tool router.
#[derive(Clone)]
pub struct WeatherSvc {
    pub alerts: AlertsTool,
}

impl ServerHandler for WeatherSvc {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Active weather alerts for US states from the National Weather Service API.".to_string(),
            ),
            ..Default::default()
        }
    }
}

#[rmcp::tool_router]
impl WeatherSvc {
    #[rmcp::tool(
        name = "get_alerts",
        description = "Get weather alerts for a given US state (e.g. CA, NY). Argument: {\"state\": \"<two-letter code>\"}"
    )]
    async fn get_alerts(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        tracing::debug!(params = ?params.0, "get_alerts invoked over MCP");
        let state = params
            .0
            .get("state")
            .and_then(|v| v.as_str())
            .ok_or_else(|| rmcp::ErrorData::invalid_params("missing required field: state", None))?
            .to_owned();
        Ok(self.alerts.get_alerts(&state).await.into())
    }
}

pub type WeatherRouter = ToolRouter<WeatherSvc>;

impl WeatherSvc {
    pub fn new(alerts: AlertsTool) -> Self {
        Self { alerts }
    }

    pub fn router() -> WeatherRouter {
        // Wrapper to expose the macro-generated private tool_router
        Self::tool_router()
    }
}

/// Factory required by rmcp Streamable HTTP & stdio transports:
/// must return a `(handler, ToolRouter<handler>)` pair.
pub fn factory_from_config(
    cfg: NwsConfig,
) -> impl Fn() -> (WeatherSvc, WeatherRouter) + Clone + Send + Sync + 'static {
    move || (WeatherSvc::new(AlertsTool::from_config(&cfg)), WeatherSvc::router())
}
