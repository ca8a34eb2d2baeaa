//! Ledger rule violations and lookup failures.
//!
//! Every variant belongs to one [`ErrorCode`] category and carries the structured context
//! reported to clients in the `details` field of the error body.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::{
    model::api::{ErrorCode, ErrorDto},
    server::error::status_for,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Request body, query string, path or tool arguments could not be parsed.
    #[error("Request is invalid: {reason}")]
    InvalidInput { reason: String },
    /// MCP tool name that does not exist.
    #[error("Unknown tool name: {name}")]
    UnknownTool { name: String },
    /// Progress field outside the inclusive range of its cap.
    #[error("Value {value} for {field} is outside the allowed range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        key: &'static str,
        min: i32,
        max: i32,
        value: i32,
    },
    #[error("Shards used ({shards_used}) cannot exceed shards owned ({shards_owned})")]
    ShardsExceedOwned { shards_owned: i32, shards_used: i32 },
    #[error("Memo must be at most {max_length} characters")]
    MemoTooLong { max_length: usize },
    #[error("Team has {count} members but only {slot_count} slots")]
    TooManyMembers { slot_count: i32, count: usize },
    #[error("Position {position_index} is outside the team's {slot_count} slots")]
    PositionOutOfRange { position_index: i32, slot_count: i32 },
    #[error("Position {position_index} is used by more than one member")]
    DuplicatePosition { position_index: i32 },
    #[error("Student {student_id} is placed in more than one slot")]
    DuplicateStudent { student_id: String },
    #[error("Unknown student ids: {missing_student_ids:?}")]
    UnknownStudents { missing_student_ids: Vec<String> },
    #[error("Student {student_id} not found")]
    StudentNotFound { student_id: String },
    #[error("Team {team_id} not found")]
    TeamNotFound { team_id: i32 },
    /// No slot capacity rule is configured for the team's mode.
    #[error("No slot rule configured for team mode {mode}")]
    MissingModeRule { mode: String },
    /// No cap row is configured for a progress field's cap key.
    #[error("No progress cap configured for key {key}")]
    MissingProgressCap { key: &'static str },
    /// A stored team member references a student absent from the catalog.
    #[error("Member of team {team_id} references missing student {student_id}")]
    DanglingTeamMember { team_id: i32, student_id: String },
    /// A stored team has a mode outside the known set.
    #[error("Team {team_id} has unknown mode {mode}")]
    UnknownTeamMode { team_id: i32, mode: String },
}

impl LedgerError {
    /// Category of the error on the wire
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { .. }
            | Self::UnknownTool { .. }
            | Self::OutOfRange { .. }
            | Self::ShardsExceedOwned { .. }
            | Self::MemoTooLong { .. }
            | Self::TooManyMembers { .. }
            | Self::PositionOutOfRange { .. }
            | Self::UnknownStudents { .. } => ErrorCode::ValidationError,
            Self::DuplicatePosition { .. } | Self::DuplicateStudent { .. } => ErrorCode::Conflict,
            Self::StudentNotFound { .. } | Self::TeamNotFound { .. } => ErrorCode::NotFound,
            Self::MissingModeRule { .. }
            | Self::MissingProgressCap { .. }
            | Self::DanglingTeamMember { .. }
            | Self::UnknownTeamMode { .. } => ErrorCode::InternalError,
        }
    }

    /// Structured context of the error
    pub fn details(&self) -> Value {
        match self {
            Self::InvalidInput { reason } => json!({ "reason": reason }),
            Self::UnknownTool { name } => json!({ "toolName": name }),
            Self::OutOfRange {
                field,
                key,
                min,
                max,
                value,
            } => json!({
                "field": field,
                "key": key,
                "min": min,
                "max": max,
                "value": value,
            }),
            Self::ShardsExceedOwned {
                shards_owned,
                shards_used,
            } => json!({ "shardsOwned": shards_owned, "shardsUsed": shards_used }),
            Self::MemoTooLong { max_length } => json!({ "maxLength": max_length }),
            Self::TooManyMembers { slot_count, count } => {
                json!({ "slotCount": slot_count, "count": count })
            }
            Self::PositionOutOfRange {
                position_index,
                slot_count,
            } => json!({ "positionIndex": position_index, "slotCount": slot_count }),
            Self::DuplicatePosition { position_index } => {
                json!({ "positionIndex": position_index })
            }
            Self::DuplicateStudent { student_id } => json!({ "studentId": student_id }),
            Self::UnknownStudents {
                missing_student_ids,
            } => json!({ "missingStudentIds": missing_student_ids }),
            Self::StudentNotFound { student_id } => json!({ "studentId": student_id }),
            Self::TeamNotFound { team_id } => json!({ "teamId": team_id }),
            Self::MissingModeRule { mode } => json!({ "mode": mode }),
            Self::MissingProgressCap { key } => json!({ "key": key }),
            Self::DanglingTeamMember {
                team_id,
                student_id,
            } => json!({ "teamId": team_id, "studentId": student_id }),
            Self::UnknownTeamMode { team_id, mode } => json!({ "teamId": team_id, "mode": mode }),
        }
    }

    pub fn to_error_dto(&self) -> ErrorDto {
        ErrorDto {
            code: self.code(),
            message: self.to_string(),
            details: Some(self.details()),
        }
    }
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        let code = self.code();
        match code {
            ErrorCode::InternalError => tracing::error!("{}", self),
            _ => tracing::debug!("{}", self),
        }

        (status_for(code), Json(self.to_error_dto())).into_response()
    }
}
