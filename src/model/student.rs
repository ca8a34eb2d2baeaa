use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::progress::{ProgressDetailDto, ProgressSummaryDto};

/// Catalog filter for student listings.
///
/// `q` matches a case-insensitive substring of the student name or id, every other field is
/// an exact match. Used as the query string of `GET /api/students` and as the arguments of
/// the `students.list` tool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StudentFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense_type: Option<String>,
    /// Must be `true` or `false` when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_limited: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummaryDto {
    pub student_id: String,
    pub name: String,
    pub role: String,
    pub position: String,
    pub attack_type: String,
    pub defense_type: String,
    pub rarity_base: i32,
    pub is_limited: bool,
    /// The user's progress, `null` when never recorded
    pub progress: Option<ProgressSummaryDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetailDto {
    pub student_id: String,
    pub name: String,
    pub school: String,
    pub role: String,
    pub position: String,
    pub attack_type: String,
    pub defense_type: String,
    pub rarity_base: i32,
    pub is_limited: bool,
    /// The user's progress, `null` when never recorded
    pub progress: Option<ProgressDetailDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentListDto {
    pub students: Vec<StudentSummaryDto>,
}
