
use ledger_test_utils::prelude::*;

use super::*;
use crate::server::error::{ledger::LedgerError, Error};

/// Build a ledger with caps, mode rules, three catalog students and one user.
///
/// Returns the context and the user's ID.
async fn setup() -> Result<(TestContext, i32), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_progress_caps()
        .with_mode_rules()
        .with_student("10000", "Hoshino")
        .with_student("10001", "Shiroko")
        .with_student("10002", "Serika")
        .build()
        .await?;
    let user = test.user().insert_user(TEST_SUBJECT).await?;

    Ok((test, user.id))
}
