use thiserror::Error;

/// Errors a registry tool call can raise; `/rpc` maps them all to one JSON-RPC code.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Message(String),
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("missing '{0}'")]
    MissingArgument(&'static str),
    #[error("'{0}' must be a string")]
    InvalidArgument(&'static str),
    #[error("config: {0}")]
    Config(String),
}

impl From<toml::de::Error> for GatewayError {
    fn from(e: toml::de::Error) -> Self {
        GatewayError::Config(e.to_string())
    }
}
