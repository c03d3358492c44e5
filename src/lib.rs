//! MCP server exposing active National Weather Service alerts as a single tool.

pub mod api;
pub mod cli;
pub mod clients;
pub mod core;
pub mod domain;
pub mod infra;
pub mod tools;
