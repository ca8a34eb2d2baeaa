//! Shared test utilities for the ledger workspace.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and catalog
//! fixtures a test needs, then the resulting [`TestContext`] exposes the in-memory
//! SQLite database along with fixture helpers for per-user state.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EMAIL, TEST_PROVIDER, TEST_SUBJECT},
        fixtures::{auth::jwt_assertion, catalog::mock_student, user::mock_progress},
        TestBuilder, TestContext, TestError,
    };
}
