use async_trait::async_trait;

use crate::core::error::GatewayError;

/// What `tools/list` reports for a registered tool.
pub trait ToolSpec {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> serde_json::Value;
}

/// A registry entry. `call` takes the `arguments` object from `tools/call` as-is
/// and returns the serialized content envelope; `Err` is reserved for bad arguments,
/// never for upstream trouble.
#[async_trait]
pub trait Tool: ToolSpec + Send + Sync {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    /// Wraps the `region` argument in a text envelope.
    struct Shout;

    impl ToolSpec for Shout {
        fn name(&self) -> &'static str {
            "shout"
        }
        fn description(&self) -> &'static str {
            "uppercases a region"
        }
        fn input_schema(&self) -> serde_json::Value {
            json!({"type": "object", "required": ["region"]})
        }
    }

    #[async_trait]
    impl Tool for Shout {
        async fn call(&self, args: &serde_json::Value) -> Result<serde_json::Value, GatewayError> {
            let region = args
                .get("region")
                .and_then(|v| v.as_str())
                .ok_or(GatewayError::MissingArgument("region"))?;
            Ok(json!({"content": [{"type": "text", "text": region.to_uppercase()}]}))
        }
    }

    #[tokio::test]
    async fn call_returns_envelope_or_argument_error() {
        let t = Shout;
        let out = t.call(&json!({"region": "ca"})).await.unwrap();
        assert_eq!(out["content"][0]["text"], "CA");
        assert!(matches!(t.call(&json!({})).await, Err(GatewayError::MissingArgument("region"))));
    }
}
