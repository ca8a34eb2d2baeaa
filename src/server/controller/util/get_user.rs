use axum::http::HeaderMap;

use crate::server::{
    controller::util::identity::resolve_external_identity, error::Error,
    model::app::AppState, service::user::UserService,
};

/// Resolves the caller's identity and returns the matching ledger user ID
///
/// The user row is created on the identity's first request.
///
/// # Arguments
/// - `state`: Application state with the database connection
/// - `headers`: Request headers set by the access proxy
///
/// # Returns
/// - `Ok(i32)`: ID of the existing or newly created user
/// - `Err(Error::AuthError)`: No identity present in the headers
/// - `Err(Error)`: Internal errors (database query failures)
pub async fn get_user_id(state: &AppState, headers: &HeaderMap) -> Result<i32, Error> {
    let identity = resolve_external_identity(headers)?;

    let user = UserService::new(&state.db)
        .get_or_create_user(&identity)
        .await?;

    Ok(user.id)
}
