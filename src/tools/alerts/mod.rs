//! `get_alerts`: fetch active NWS alerts for a state and render them as text.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::clients::nws::{AlertSource, FetchOutcome, NwsRemote};
use crate::core::content::ToolResponse;
use crate::core::error::GatewayError;
use crate::core::tool::{Tool, ToolSpec};
use crate::domain::RegionCode;
use crate::infra::config::NwsConfig;

pub mod format;
pub mod tool_router;

pub use format::format_alert;

pub const TOOL_NAME: &str = "get_alerts";
pub const TOOL_DESCRIPTION: &str = "Get weather alerts for a given US state (e.g. CA, NY).";
pub const FETCH_FAILED: &str = "Failed to retrieve alerts data";

#[derive(Clone)]
pub struct AlertsTool {
    source: Arc<dyn AlertSource>,
}

impl AlertsTool {
    pub fn new(source: Arc<dyn AlertSource>) -> Self {
        Self { source }
    }

    pub fn from_config(cfg: &NwsConfig) -> Self {
        Self::new(Arc::new(NwsRemote::from_config(cfg)))
    }

    /// Never fails: every upstream problem becomes text in the envelope.
    pub async fn get_alerts(&self, state: &str) -> ToolResponse {
        let region = RegionCode::normalize(state);
        tracing::info!(state = %region, "get_alerts invoked");
        let outcome = self.source.fetch_alerts(&region).await;
        render_alerts(&region, &outcome)
    }
}

/// Pure half of `get_alerts`.
pub fn render_alerts(region: &RegionCode, outcome: &FetchOutcome) -> ToolResponse {
    let doc = match outcome {
        Ok(doc) => doc,
        Err(_) => return ToolResponse::text(FETCH_FAILED),
    };
    if doc.features.is_empty() {
        return ToolResponse::text(format!("No active alerts for {region}"));
    }
    let alerts = doc
        .features
        .iter()
        .map(format_alert)
        .collect::<Vec<_>>()
        .join("\n");
    ToolResponse::text(format!("Active alerts for {region}:\n\n{alerts}"))
}

impl ToolSpec for AlertsTool {
    fn name(&self) -> &'static str {
        TOOL_NAME
    }
    fn description(&self) -> &'static str {
        TOOL_DESCRIPTION
    }
    fn input_schema(&self) -> serde_json::Value {
        json!({
          "type": "object",
          "properties": {
            "state": { "type": "string", "description": "Two-letter state code (e.g. CA, NY)" }
          },
          "required": ["state"]
        })
    }
}

#[async_trait]
impl Tool for AlertsTool {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, GatewayError> {
        let state = match arguments.get("state") {
            None | Some(serde_json::Value::Null) => return Err(GatewayError::MissingArgument("state")),
            Some(v) => v.as_str().ok_or(GatewayError::InvalidArgument("state"))?,
        };
        let resp = self.get_alerts(state).await;
        serde_json::to_value(resp).map_err(|e| GatewayError::Message(e.to_string()))
    }
}
