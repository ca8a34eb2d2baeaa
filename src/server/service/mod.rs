//! Service layer for business logic.
//!
//! Services implement the ledger's rules on top of the repositories: progress merging and
//! validation, team member replacement, and resolution of external identities to users.
//! Retry logic for transient store failures lives here as well and is applied by the write
//! handlers.

pub mod ledger;
pub mod retry;
pub mod user;
