use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Maximum memo length, counted in Unicode scalar values (`str::chars`)
pub const MEMO_MAX_LENGTH: usize = 1000;

/// Abbreviated progress shown in student and team listings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummaryDto {
    pub level: i32,
    pub rarity: i32,
    pub unique_weapon_rank: i32,
}

/// Full upgrade progress of one student for one user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDetailDto {
    pub level: i32,
    pub rarity: i32,
    pub bond_level: i32,
    pub ex_skill_level: i32,
    pub normal_skill_level: i32,
    pub passive_skill_level: i32,
    pub sub_skill_level: i32,
    pub equipment1_tier: i32,
    pub equipment2_tier: i32,
    pub equipment3_tier: i32,
    pub unique_weapon_rank: i32,
    pub unique_weapon_level: i32,
    pub shards_owned: i32,
    pub shards_used: i32,
    pub favorite_gifts: i32,
    pub memo: String,
}

/// Progress of a student the user has never recorded.
impl Default for ProgressDetailDto {
    fn default() -> Self {
        Self {
            level: 1,
            rarity: 1,
            bond_level: 1,
            ex_skill_level: 1,
            normal_skill_level: 1,
            passive_skill_level: 1,
            sub_skill_level: 1,
            equipment1_tier: 0,
            equipment2_tier: 0,
            equipment3_tier: 0,
            unique_weapon_rank: 0,
            unique_weapon_level: 0,
            shards_owned: 0,
            shards_used: 0,
            favorite_gifts: 0,
            memo: String::new(),
        }
    }
}

impl ProgressDetailDto {
    /// Overlay every field present in `patch`, keeping the current value for absent ones.
    pub fn apply(self, patch: &ProgressPatchDto) -> Self {
        Self {
            level: patch.level.unwrap_or(self.level),
            rarity: patch.rarity.unwrap_or(self.rarity),
            bond_level: patch.bond_level.unwrap_or(self.bond_level),
            ex_skill_level: patch.ex_skill_level.unwrap_or(self.ex_skill_level),
            normal_skill_level: patch.normal_skill_level.unwrap_or(self.normal_skill_level),
            passive_skill_level: patch.passive_skill_level.unwrap_or(self.passive_skill_level),
            sub_skill_level: patch.sub_skill_level.unwrap_or(self.sub_skill_level),
            equipment1_tier: patch.equipment1_tier.unwrap_or(self.equipment1_tier),
            equipment2_tier: patch.equipment2_tier.unwrap_or(self.equipment2_tier),
            equipment3_tier: patch.equipment3_tier.unwrap_or(self.equipment3_tier),
            unique_weapon_rank: patch.unique_weapon_rank.unwrap_or(self.unique_weapon_rank),
            unique_weapon_level: patch.unique_weapon_level.unwrap_or(self.unique_weapon_level),
            shards_owned: patch.shards_owned.unwrap_or(self.shards_owned),
            shards_used: patch.shards_used.unwrap_or(self.shards_used),
            favorite_gifts: patch.favorite_gifts.unwrap_or(self.favorite_gifts),
            memo: patch.memo.clone().unwrap_or(self.memo),
        }
    }
}

impl From<entity::user_student_progress::Model> for ProgressDetailDto {
    fn from(progress: entity::user_student_progress::Model) -> Self {
        Self {
            level: progress.level,
            rarity: progress.rarity,
            bond_level: progress.bond_level,
            ex_skill_level: progress.ex_skill_level,
            normal_skill_level: progress.normal_skill_level,
            passive_skill_level: progress.passive_skill_level,
            sub_skill_level: progress.sub_skill_level,
            equipment1_tier: progress.equipment1_tier,
            equipment2_tier: progress.equipment2_tier,
            equipment3_tier: progress.equipment3_tier,
            unique_weapon_rank: progress.unique_weapon_rank,
            unique_weapon_level: progress.unique_weapon_level,
            shards_owned: progress.shards_owned,
            shards_used: progress.shards_used,
            favorite_gifts: progress.favorite_gifts,
            memo: progress.memo,
        }
    }
}

impl From<&entity::user_student_progress::Model> for ProgressSummaryDto {
    fn from(progress: &entity::user_student_progress::Model) -> Self {
        Self {
            level: progress.level,
            rarity: progress.rarity,
            unique_weapon_rank: progress.unique_weapon_rank,
        }
    }
}

/// Partial progress update; absent fields keep their stored value
///
/// A field may be omitted but not sent as `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProgressPatchDto {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub rarity: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub bond_level: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub ex_skill_level: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub normal_skill_level: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub passive_skill_level: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_skill_level: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub equipment1_tier: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub equipment2_tier: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub equipment3_tier: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub unique_weapon_rank: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub unique_weapon_level: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub shards_owned: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub shards_used: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub favorite_gifts: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub memo: Option<String>,
}

/// Deserializes a patch field that is present, rejecting an explicit `null`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
