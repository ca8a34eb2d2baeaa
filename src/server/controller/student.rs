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
        progress::ProgressPatchDto,
        student::{StudentDetailDto, StudentFilter, StudentListDto},
    },
    server::{
        controller::util::get_user::get_user_id,
        error::Error,
        model::app::AppState,
        service::{ledger::LedgerService, retry::RetryContext},
    },
};

pub static STUDENT_TAG: &str = "student";

/// List catalog students with the caller's progress summary
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(StudentFilter),
    responses(
        (status = 200, description = "Students ordered by student ID", body = StudentListDto),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 401, description = "No identity in request headers", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    filter: Result<Query<StudentFilter>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(filter) = filter?;
    let user_id = get_user_id(&state, &headers).await?;

    let students = LedgerService::new(&state.db)
        .list_students(user_id, &filter)
        .await?;

    Ok((StatusCode::OK, Json(StudentListDto { students })))
}

/// Get a catalog student with the caller's full progress
#[utoipa::path(
    get,
    path = "/api/students/{student_id}",
    tag = STUDENT_TAG,
    params(("student_id" = String, Path, description = "Catalog student ID")),
    responses(
        (status = 200, description = "Student found", body = StudentDetailDto),
        (status = 401, description = "No identity in request headers", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    student_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(student_id) = student_id?;
    let user_id = get_user_id(&state, &headers).await?;

    let student = LedgerService::new(&state.db)
        .get_student_detail(user_id, &student_id)
        .await?;

    Ok((StatusCode::OK, Json(student)))
}

/// Apply a partial progress update for a student
///
/// Fields absent from the body keep their stored value, or the baseline value when the
/// caller has no progress for the student yet. The merged progress is validated in full.
#[utoipa::path(
    put,
    path = "/api/students/{student_id}/progress",
    tag = STUDENT_TAG,
    params(("student_id" = String, Path, description = "Catalog student ID")),
    request_body = ProgressPatchDto,
    responses(
        (status = 200, description = "Progress saved", body = StudentDetailDto),
        (status = 400, description = "Malformed body or progress outside its caps", body = ErrorDto),
        (status = 401, description = "No identity in request headers", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_student_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    student_id: Result<Path<String>, PathRejection>,
    patch: Result<Json<ProgressPatchDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(student_id) = student_id?;
    let Json(patch) = patch?;

    let state = &state;
    let headers = &headers;
    let student_id = student_id.as_str();
    let patch = &patch;

    let student = RetryContext::new(&state.retry)
        .execute_with_retry("progress upsert", || {
            Box::pin(async move {
                let user_id = get_user_id(state, headers).await?;

                LedgerService::new(&state.db)
                    .upsert_student_progress(user_id, student_id, patch)
                    .await
            })
        })
        .await?;

    Ok((StatusCode::OK, Json(student)))
}
