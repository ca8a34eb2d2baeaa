//! Data transfer objects shared by the HTTP API and the MCP endpoint.

pub mod api;
pub mod progress;
pub mod student;
pub mod team;
