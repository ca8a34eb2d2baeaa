use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        team::{ReplaceTeamMembersDto, TeamDetailDto, TeamListDto, TeamListQuery},
    },
    server::{
        controller::util::get_user::get_user_id,
        error::Error,
        model::app::AppState,
        service::{ledger::LedgerService, retry::RetryContext},
    },
};

pub static TEAM_TAG: &str = "team";

/// List the caller's teams, most recently updated first
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    params(TeamListQuery),
    responses(
        (status = 200, description = "Teams with member counts", body = TeamListDto),
        (status = 400, description = "Unknown mode", body = ErrorDto),
        (status = 401, description = "No identity in request headers", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<TeamListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query?;
    let user_id = get_user_id(&state, &headers).await?;

    let teams = LedgerService::new(&state.db)
        .list_teams(user_id, query.mode)
        .await?;

    Ok((StatusCode::OK, Json(TeamListDto { teams })))
}

/// Get one of the caller's teams with its members ordered by position
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(("team_id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team found", body = TeamDetailDto),
        (status = 400, description = "Team ID is not an integer", body = ErrorDto),
        (status = 401, description = "No identity in request headers", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    team_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(team_id) = team_id?;
    let user_id = get_user_id(&state, &headers).await?;

    let team = LedgerService::new(&state.db)
        .get_team(user_id, team_id)
        .await?;

    Ok((StatusCode::OK, Json(team)))
}

/// Replace every member of one of the caller's teams
///
/// The member list is validated against the slot count of the team's mode and the student
/// catalog. On any failure the stored members are left unchanged.
#[utoipa::path(
    put,
    path = "/api/teams/{team_id}/members",
    tag = TEAM_TAG,
    params(("team_id" = i32, Path, description = "Team ID")),
    request_body = ReplaceTeamMembersDto,
    responses(
        (status = 200, description = "Members replaced", body = TeamDetailDto),
        (status = 400, description = "Malformed body, too many members or unknown students", body = ErrorDto),
        (status = 401, description = "No identity in request headers", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Duplicate position or student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_team_members(
    State(state): State<AppState>,
    headers: HeaderMap,
    team_id: Result<Path<i32>, PathRejection>,
    body: Result<Json<ReplaceTeamMembersDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(team_id) = team_id?;
    let Json(body) = body?;

    let state = &state;
    let headers = &headers;
    let members = body.members.as_slice();

    let team = RetryContext::new(&state.retry)
        .execute_with_retry("team member replace", || {
            Box::pin(async move {
                let user_id = get_user_id(state, headers).await?;

                LedgerService::new(&state.db)
                    .replace_team_members(user_id, team_id, members)
                    .await
            })
        })
        .await?;

    Ok((StatusCode::OK, Json(team)))
}
