//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/students` - List catalog students with the caller's progress
/// - `GET /api/students/{student_id}` - Get a student with the caller's full progress
/// - `PUT /api/students/{student_id}/progress` - Partially update the caller's progress
/// - `GET /api/teams` - List the caller's teams
/// - `GET /api/teams/{team_id}` - Get a team with its members
/// - `PUT /api/teams/{team_id}/members` - Replace a team's members
/// - `POST /mcp` - MCP JSON-RPC endpoint
///
/// The OpenAPI document is served at `/api/docs/openapi.json` and Swagger UI at `/api/docs`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, retry: config.retry };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Schale Ledger", description = "Schale Ledger API"), tags(
        (name = controller::student::STUDENT_TAG, description = "Student catalog and progress routes"),
        (name = controller::team::TEAM_TAG, description = "Team composition routes"),
        (name = controller::mcp::MCP_TAG, description = "Model Context Protocol endpoint"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::student::list_students))
        .routes(routes!(controller::student::get_student))
        .routes(routes!(controller::student::upsert_student_progress))
        .routes(routes!(controller::team::list_teams))
        .routes(routes!(controller::team::get_team))
        .routes(routes!(controller::team::replace_team_members))
        .routes(routes!(controller::mcp::mcp))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
