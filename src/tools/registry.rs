use std::collections::HashMap;
use std::sync::Arc;

use crate::core::error::GatewayError;
use crate::core::tool::{Tool, ToolSpec};
use crate::infra::config::NwsConfig;
use crate::tools::alerts::AlertsTool;

/// Tool name -> handler lookup owned by the hosting process.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    by_name: Arc<HashMap<&'static str, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tools<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = Arc<T>>,
        T: Tool + 'static,
    {
        let mut reg = Self::new();
        for t in iter {
            reg.register(t);
        }
        reg
    }

    /// Later registrations under the same name replace earlier ones.
    pub fn register<T: Tool + 'static>(&mut self, tool: Arc<T>) {
        Arc::make_mut(&mut self.by_name).insert(tool.name(), tool);
    }

    pub fn list(&self) -> Vec<ToolMeta> {
        let mut metas: Vec<ToolMeta> = self
            .by_name
            .values()
            .map(|t| ToolMeta {
                name: t.name(),
                description: t.description(),
                input_schema: t.input_schema(),
            })
            .collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    pub async fn call(&self, name: &str, args: &serde_json::Value) -> Result<serde_json::Value, GatewayError> {
        let t = self
            .by_name
            .get(name)
            .ok_or_else(|| GatewayError::UnknownTool(name.to_string()))?;
        t.call(args).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

/// Registry with every tool this server exposes.
pub fn build_registry(cfg: &NwsConfig) -> ToolRegistry {
    ToolRegistry::with_tools([Arc::new(AlertsTool::from_config(cfg))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Echo;

    impl ToolSpec for Echo {
        fn name(&self) -> &'static str { "test.echo" }
        fn description(&self) -> &'static str { "echo tool" }
        fn input_schema(&self) -> serde_json::Value { serde_json::json!({"type":"object"}) }
    }

    #[async_trait]
    impl Tool for Echo {
        async fn call(&self, args: &serde_json::Value) -> Result<serde_json::Value, GatewayError> {
            Ok(args.clone())
        }
    }

    #[tokio::test]
    async fn registry_registers_lists_and_calls() {
        let reg = ToolRegistry::with_tools([Arc::new(Echo)]);
        let metas = reg.list();
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].name, "test.echo");
        let out = reg.call("test.echo", &serde_json::json!({"x": 2})).await.unwrap();
        assert_eq!(out["x"], 2);
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error() {
        let reg = ToolRegistry::new();
        let err = reg.call("nope", &serde_json::Value::Null).await.unwrap_err();
        assert!(matches!(err, GatewayError::UnknownTool(ref n) if n == "nope"));
    }

    #[test]
    fn register_after_clone_leaves_clone_untouched() {
        let mut reg = ToolRegistry::new();
        let snapshot = reg.clone();
        reg.register(Arc::new(Echo));
        assert_eq!(reg.list().len(), 1);
        assert!(snapshot.list().is_empty());
    }

    #[test]
    fn default_registry_exposes_get_alerts() {
        let reg = build_registry(&NwsConfig::default());
        let metas = reg.list();
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].name, "get_alerts");
        assert_eq!(metas[0].input_schema["required"][0], "state");
    }
}
