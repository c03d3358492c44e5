use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::core::error::GatewayError;

pub const DEFAULT_NWS_BASE_URL: &str = "https://api.weather.gov";
pub const DEFAULT_USER_AGENT: &str = "weather-app/1.0";

/// How the process hosts the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Stdio,
    Server,
}

impl RunMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "stdio" => Some(RunMode::Stdio),
            "server" => Some(RunMode::Server),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Stdio => "stdio",
            RunMode::Server => "server",
        }
    }
}

/// Process-level settings read straight from the environment.
pub struct Config {
    pub mode: RunMode,
    pub port: u16,
    pub rpc_enabled: bool,
}

impl Config {
    /// Unknown `MODE` values fall back to stdio; `config --validate` reports them.
    pub fn from_env() -> Self {
        let mode = std::env::var("MODE")
            .ok()
            .and_then(|m| RunMode::parse(&m))
            .unwrap_or(RunMode::Stdio);
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        let rpc_enabled = std::env::var("DISABLE_RPC")
            .map(|v| v.is_empty())
            .unwrap_or(true);

        Self {
            mode,
            port,
            rpc_enabled,
        }
    }
}

/// Upstream NWS settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NwsConfig {
    pub base_url: String,
    pub user_agent: String,
    /// `None` leaves reqwest's default (no overall timeout).
    pub timeout_secs: Option<u64>,
}

impl Default for NwsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NWS_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

impl NwsConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub nws: NwsConfig,
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, GatewayError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, GatewayError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GatewayError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    /// TOML file named by `NWS_CONFIG` (optional), then `NWS_API_BASE` / `NWS_USER_AGENT`.
    pub fn from_env_and_toml() -> Result<Self, GatewayError> {
        let mut cfg = match std::env::var("NWS_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_toml_file(path.trim())?,
            _ => Self::default(),
        };
        if let Some(base) = non_empty_env("NWS_API_BASE") {
            cfg.nws.base_url = base;
        }
        if let Some(agent) = non_empty_env("NWS_USER_AGENT") {
            cfg.nws.user_agent = agent;
        }
        Ok(cfg)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
