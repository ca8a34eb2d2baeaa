//! Fixture helpers for inserting test data.
//!
//! - `auth` - identity header values
//! - `catalog` - students, progress caps and team mode rules
//! - `user` - users, teams, team members and progress rows

pub mod auth;
pub mod catalog;
pub mod user;
