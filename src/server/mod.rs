//! Server application core modules.
//!
//! This module contains all server-side functionality for the ledger, including HTTP routing,
//! the MCP JSON-RPC endpoint, identity resolution, the ledger service with its validation
//! rules, and the SeaORM repositories backing it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod mcp;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
