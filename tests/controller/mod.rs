//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments where that is enough, and
//! through the full router when extraction, status codes or error bodies matter.

mod students;
mod teams;

use ledger_test_utils::prelude::*;

use crate::util::*;
