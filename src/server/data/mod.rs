//! Data access layer repositories.
//!
//! Repositories are thin SeaORM wrappers generic over [`sea_orm::ConnectionTrait`], so the
//! same repository runs against the connection pool or inside a transaction.

pub mod progress;
pub mod progress_cap;
pub mod student;
pub mod team;
pub mod team_member;
pub mod team_mode_rule;
pub mod user;
