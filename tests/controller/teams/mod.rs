//! Tests for team controller endpoints.

mod get_team;
mod list_teams;
mod replace_team_members;

use super::*;

/// Build the standard ledger with the test user owning one raid team.
///
/// Returns the context and the team's ID.
async fn ledger_with_team() -> Result<(TestContext, i32), TestError> {
    let test = ledger().await?;
    let user = test.user().insert_user(TEST_SUBJECT).await?;
    let team = test.user().insert_team(user.id, "raid", "Binah").await?;

    Ok((test, team.id))
}
