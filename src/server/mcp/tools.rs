//! MCP tool catalogue and dispatch onto the ledger service.
//!
//! Each tool's arguments are decoded into a typed struct before anything runs, so a
//! malformed call fails with a validation error without touching the store.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    model::{
        api::ErrorDto,
        progress::ProgressPatchDto,
        student::{StudentFilter, StudentListDto},
        team::{TeamListDto, TeamListQuery, TeamMemberInputDto},
    },
    server::{
        error::{ledger::LedgerError, Error},
        service::ledger::LedgerService,
    },
};

pub const STUDENTS_LIST: &str = "students.list";
pub const STUDENTS_GET: &str = "students.get";
pub const STUDENTS_PROGRESS_UPSERT: &str = "students.progress.upsert";
pub const TEAMS_LIST: &str = "teams.list";
pub const TEAMS_GET: &str = "teams.get";
pub const TEAMS_MEMBERS_REPLACE: &str = "teams.members.replace";

/// Tool schema definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,
    pub title: String,
    pub description: String,
    /// JSON Schema for the tool's arguments
    pub input_schema: Value,
}

/// Every tool exposed by the endpoint
pub fn list_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: STUDENTS_LIST.to_string(),
            title: "List students".to_string(),
            description: "List catalog students with the caller's progress summary".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "q": { "type": "string" },
                    "school": { "type": "string" },
                    "role": { "type": "string" },
                    "position": { "type": "string" },
                    "attackType": { "type": "string" },
                    "defenseType": { "type": "string" },
                    "isLimited": { "type": "boolean" }
                }
            }),
        },
        Tool {
            name: STUDENTS_GET.to_string(),
            title: "Get student".to_string(),
            description: "Get a catalog student with the caller's full progress".to_string(),
            input_schema: json!({
                "type": "object",
                "required": ["studentId"],
                "properties": {
                    "studentId": { "type": "string" }
                }
            }),
        },
        Tool {
            name: STUDENTS_PROGRESS_UPSERT.to_string(),
            title: "Update student progress".to_string(),
            description: "Partially update the caller's progress for a student".to_string(),
            input_schema: json!({
                "type": "object",
                "required": ["studentId", "patch"],
                "properties": {
                    "studentId": { "type": "string" },
                    "patch": { "type": "object" }
                }
            }),
        },
        Tool {
            name: TEAMS_LIST.to_string(),
            title: "List teams".to_string(),
            description: "List the caller's teams, most recently updated first".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "mode": { "type": "string", "enum": ["raid", "jfd"] }
                }
            }),
        },
        Tool {
            name: TEAMS_GET.to_string(),
            title: "Get team".to_string(),
            description: "Get one of the caller's teams with its members".to_string(),
            input_schema: json!({
                "type": "object",
                "required": ["teamId"],
                "properties": {
                    "teamId": { "type": "integer" }
                }
            }),
        },
        Tool {
            name: TEAMS_MEMBERS_REPLACE.to_string(),
            title: "Replace team members".to_string(),
            description: "Replace every member of one of the caller's teams".to_string(),
            input_schema: json!({
                "type": "object",
                "required": ["teamId", "members"],
                "properties": {
                    "teamId": { "type": "integer" },
                    "members": { "type": "array" }
                }
            }),
        },
    ]
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StudentArgs {
    student_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProgressUpsertArgs {
    student_id: String,
    patch: ProgressPatchDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamArgs {
    team_id: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MembersReplaceArgs {
    team_id: i32,
    members: Vec<TeamMemberInputDto>,
}

/// A tool call with decoded arguments
#[derive(Debug)]
pub enum ToolCall {
    StudentsList(StudentFilter),
    StudentsGet {
        student_id: String,
    },
    StudentsProgressUpsert {
        student_id: String,
        patch: ProgressPatchDto,
    },
    TeamsList(TeamListQuery),
    TeamsGet {
        team_id: i32,
    },
    TeamsMembersReplace {
        team_id: i32,
        members: Vec<TeamMemberInputDto>,
    },
}

fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, LedgerError> {
    serde_json::from_value(arguments).map_err(|e| LedgerError::InvalidInput {
        reason: format!("Invalid arguments for {}: {}", tool, e),
    })
}

fn require_student_id(student_id: String) -> Result<String, LedgerError> {
    if student_id.is_empty() {
        return Err(LedgerError::InvalidInput {
            reason: "studentId must not be empty".to_string(),
        });
    }

    Ok(student_id)
}

impl ToolCall {
    /// Decodes the arguments of the named tool.
    ///
    /// Missing or `null` arguments are treated as an empty object.
    ///
    /// # Returns
    /// - `Ok(ToolCall)` - Known tool with well-formed arguments
    /// - `Err(LedgerError::UnknownTool)` - No tool with this name
    /// - `Err(LedgerError::InvalidInput)` - Arguments do not match the tool's schema
    pub fn parse(name: &str, arguments: Option<Value>) -> Result<Self, LedgerError> {
        let arguments = match arguments {
            None | Some(Value::Null) => json!({}),
            Some(arguments) => arguments,
        };

        let call = match name {
            STUDENTS_LIST => Self::StudentsList(parse_args(name, arguments)?),
            STUDENTS_GET => {
                let args: StudentArgs = parse_args(name, arguments)?;
                Self::StudentsGet {
                    student_id: require_student_id(args.student_id)?,
                }
            }
            STUDENTS_PROGRESS_UPSERT => {
                let args: ProgressUpsertArgs = parse_args(name, arguments)?;
                Self::StudentsProgressUpsert {
                    student_id: require_student_id(args.student_id)?,
                    patch: args.patch,
                }
            }
            TEAMS_LIST => Self::TeamsList(parse_args(name, arguments)?),
            TEAMS_GET => {
                let args: TeamArgs = parse_args(name, arguments)?;
                Self::TeamsGet {
                    team_id: args.team_id,
                }
            }
            TEAMS_MEMBERS_REPLACE => {
                let args: MembersReplaceArgs = parse_args(name, arguments)?;
                Self::TeamsMembersReplace {
                    team_id: args.team_id,
                    members: args.members,
                }
            }
            _ => {
                return Err(LedgerError::UnknownTool {
                    name: name.to_string(),
                })
            }
        };

        Ok(call)
    }

    /// Name of the tool, used in log messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::StudentsList(_) => STUDENTS_LIST,
            Self::StudentsGet { .. } => STUDENTS_GET,
            Self::StudentsProgressUpsert { .. } => STUDENTS_PROGRESS_UPSERT,
            Self::TeamsList(_) => TEAMS_LIST,
            Self::TeamsGet { .. } => TEAMS_GET,
            Self::TeamsMembersReplace { .. } => TEAMS_MEMBERS_REPLACE,
        }
    }

    /// True for tools that write to the store
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Self::StudentsProgressUpsert { .. } | Self::TeamsMembersReplace { .. }
        )
    }

    /// Runs the call for a user and returns the serialized payload
    pub async fn execute(&self, service: &LedgerService<'_>, user_id: i32) -> Result<Value, Error> {
        let payload = match self {
            Self::StudentsList(filter) => {
                let students = service.list_students(user_id, filter).await?;
                serde_json::to_value(StudentListDto { students })
            }
            Self::StudentsGet { student_id } => {
                let student = service.get_student_detail(user_id, student_id).await?;
                serde_json::to_value(student)
            }
            Self::StudentsProgressUpsert { student_id, patch } => {
                let student = service
                    .upsert_student_progress(user_id, student_id, patch)
                    .await?;
                serde_json::to_value(student)
            }
            Self::TeamsList(query) => {
                let teams = service.list_teams(user_id, query.mode).await?;
                serde_json::to_value(TeamListDto { teams })
            }
            Self::TeamsGet { team_id } => {
                let team = service.get_team(user_id, *team_id).await?;
                serde_json::to_value(team)
            }
            Self::TeamsMembersReplace { team_id, members } => {
                let team = service
                    .replace_team_members(user_id, *team_id, members)
                    .await?;
                serde_json::to_value(team)
            }
        };

        payload.map_err(|e| Error::InternalError(format!("Failed to serialize tool result: {}", e)))
    }
}

/// Wraps a tool payload as an MCP tool result
pub fn tool_result(payload: Value) -> Value {
    let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());

    json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": payload,
    })
}

/// Wraps an application error as an MCP tool result flagged with `isError`
pub fn tool_error_result(error: &ErrorDto) -> Value {
    json!({
        "isError": true,
        "content": [{ "type": "text", "text": error.message }],
        "structuredContent": { "error": error },
    })
}
