//! SeaORM entities for the ledger schema.
//!
//! Tables mirror the migrations in the `migration` crate. Catalog tables (`students`,
//! `team_mode_rules`, `progress_caps`) are reference data; the remaining tables hold
//! per-user state.

pub mod prelude;

pub mod progress_cap;
pub mod student;
pub mod team;
pub mod team_member;
pub mod team_mode_rule;
pub mod user;
pub mod user_student_progress;
