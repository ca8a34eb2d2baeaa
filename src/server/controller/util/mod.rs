//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers used across controllers: resolving the caller's
//! identity from the access proxy headers, looking up the matching ledger user, and
//! converting axum extractor rejections into ledger validation errors.

pub mod get_user;
pub mod identity;
pub mod rejection;
