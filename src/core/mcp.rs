//! JSON-RPC 2.0 envelope used by the `/rpc` surface.

use serde::{Deserialize, Serialize};
use serde_json::Value as J;

pub const METHOD_NOT_FOUND: i32 = -32601;
pub const APPLICATION_ERROR: i32 = -32000;

/// Name reported to clients in `initialize` on every surface.
pub const SERVER_NAME: &str = "weather";

#[derive(Deserialize, Debug)]
pub struct RpcReq {
    pub jsonrpc: String,
    pub id: J,
    pub method: String,
    #[serde(default)]
    pub params: J,
}

#[derive(Serialize, Debug, Clone)]
pub struct RpcResp {
    pub jsonrpc: &'static str,
    pub id: J,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<J>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErr>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RpcErr {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<J>,
}

pub fn ok(id: J, result: J) -> RpcResp {
    RpcResp { jsonrpc: "2.0", id, result: Some(result), error: None }
}

pub fn err(id: J, code: i32, msg: impl Into<String>, data: Option<J>) -> RpcResp {
    RpcResp { jsonrpc: "2.0", id, result: None, error: Some(RpcErr { code, message: msg.into(), data }) }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub server_info: ServerInfo,
    pub capabilities: J,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl InitializeResult {
    pub fn current() -> Self {
        Self {
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: serde_json::json!({ "tools": {} }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_serializes_initialize_result_in_camel_case() {
        let v = serde_json::to_value(InitializeResult::current()).unwrap();
        assert_eq!(v["serverInfo"]["name"], "weather");
        assert!(v["capabilities"]["tools"].is_object());
    }

    #[test]
    fn it_omits_absent_result_and_error() {
        let s = serde_json::to_string(&ok(J::from(1), J::Null)).unwrap();
        assert!(!s.contains("\"error\""));
        let s = serde_json::to_string(&err(J::from(1), METHOD_NOT_FOUND, "nope", None)).unwrap();
        assert!(!s.contains("\"result\""));
        assert!(!s.contains("\"data\""));
    }
}
