//! Model Context Protocol endpoint.
//!
//! Exposes the ledger operations as MCP tools over JSON-RPC 2.0, served by `POST /mcp`.

pub mod protocol;
pub mod server;
pub mod tools;
