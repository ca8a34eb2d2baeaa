//! HTTP controller endpoints for the ledger web API.
//!
//! This module contains Axum handlers for the student, team and MCP routes. Controllers
//! resolve the caller from the access proxy headers, turn malformed input into validation
//! errors, call the ledger service and return JSON responses. Every REST handler carries a
//! utoipa annotation for the OpenAPI document.

pub mod mcp;
pub mod student;
pub mod team;
pub mod util;
