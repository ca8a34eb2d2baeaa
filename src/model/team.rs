use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::progress::ProgressSummaryDto;

/// Content a team is built for; each mode has its own slot capacity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TeamMode {
    Raid,
    Jfd,
}

impl TeamMode {
    /// Key used for the mode in storage and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Raid => "raid",
            Self::Jfd => "jfd",
        }
    }
}

impl fmt::Display for TeamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raid" => Ok(Self::Raid),
            "jfd" => Ok(Self::Jfd),
            other => Err(format!("unknown team mode {:?}", other)),
        }
    }
}

/// Query string of `GET /api/teams` and arguments of the `teams.list` tool
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeamListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TeamMode>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummaryDto {
    pub team_id: i32,
    pub name: String,
    pub mode: TeamMode,
    pub memo: String,
    pub member_count: i64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamListDto {
    pub teams: Vec<TeamSummaryDto>,
}

/// A proposed team slot
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TeamMemberInputDto {
    pub student_id: String,
    pub position_index: i32,
    /// Defaults to `false`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_support: Option<bool>,
}

/// Body of `PUT /api/teams/{team_id}/members`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ReplaceTeamMembersDto {
    pub members: Vec<TeamMemberInputDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDetailDto {
    pub student_id: String,
    pub position_index: i32,
    pub is_support: bool,
    pub student_name: String,
    /// The user's progress for this student, `null` when never recorded
    pub progress: Option<ProgressSummaryDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetailDto {
    pub team_id: i32,
    pub name: String,
    pub mode: TeamMode,
    pub memo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Members ordered by position
    pub members: Vec<TeamMemberDetailDto>,
}
