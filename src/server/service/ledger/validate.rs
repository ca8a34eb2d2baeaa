//! Pure validation rules for progress records and team member lists.
//!
//! Both validators fail fast: the first violation found is returned and later checks are
//! skipped.

use std::collections::{HashMap, HashSet};

use crate::{
    model::{
        progress::{ProgressDetailDto, MEMO_MAX_LENGTH},
        team::TeamMemberInputDto,
    },
    server::error::ledger::LedgerError,
};

/// Numeric progress fields, each bounded by a row of `progress_caps`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressField {
    Level,
    Rarity,
    BondLevel,
    ExSkillLevel,
    NormalSkillLevel,
    PassiveSkillLevel,
    SubSkillLevel,
    Equipment1Tier,
    Equipment2Tier,
    Equipment3Tier,
    UniqueWeaponRank,
    UniqueWeaponLevel,
    ShardsOwned,
    ShardsUsed,
    FavoriteGifts,
}

impl ProgressField {
    /// Every field in the order it is checked
    pub const ALL: [ProgressField; 15] = [
        Self::Level,
        Self::Rarity,
        Self::BondLevel,
        Self::UniqueWeaponRank,
        Self::UniqueWeaponLevel,
        Self::ShardsOwned,
        Self::ShardsUsed,
        Self::FavoriteGifts,
        Self::ExSkillLevel,
        Self::NormalSkillLevel,
        Self::PassiveSkillLevel,
        Self::SubSkillLevel,
        Self::Equipment1Tier,
        Self::Equipment2Tier,
        Self::Equipment3Tier,
    ];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Rarity => "rarity",
            Self::BondLevel => "bondLevel",
            Self::ExSkillLevel => "exSkillLevel",
            Self::NormalSkillLevel => "normalSkillLevel",
            Self::PassiveSkillLevel => "passiveSkillLevel",
            Self::SubSkillLevel => "subSkillLevel",
            Self::Equipment1Tier => "equipment1Tier",
            Self::Equipment2Tier => "equipment2Tier",
            Self::Equipment3Tier => "equipment3Tier",
            Self::UniqueWeaponRank => "uniqueWeaponRank",
            Self::UniqueWeaponLevel => "uniqueWeaponLevel",
            Self::ShardsOwned => "shardsOwned",
            Self::ShardsUsed => "shardsUsed",
            Self::FavoriteGifts => "favoriteGifts",
        }
    }

    /// Key of the cap row bounding the field.
    ///
    /// The three equipment tiers share `equipmentTier` and both shard counts share `shards`.
    pub fn cap_key(&self) -> &'static str {
        match self {
            Self::Equipment1Tier | Self::Equipment2Tier | Self::Equipment3Tier => "equipmentTier",
            Self::ShardsOwned | Self::ShardsUsed => "shards",
            other => other.name(),
        }
    }

    pub fn value(&self, progress: &ProgressDetailDto) -> i32 {
        match self {
            Self::Level => progress.level,
            Self::Rarity => progress.rarity,
            Self::BondLevel => progress.bond_level,
            Self::ExSkillLevel => progress.ex_skill_level,
            Self::NormalSkillLevel => progress.normal_skill_level,
            Self::PassiveSkillLevel => progress.passive_skill_level,
            Self::SubSkillLevel => progress.sub_skill_level,
            Self::Equipment1Tier => progress.equipment1_tier,
            Self::Equipment2Tier => progress.equipment2_tier,
            Self::Equipment3Tier => progress.equipment3_tier,
            Self::UniqueWeaponRank => progress.unique_weapon_rank,
            Self::UniqueWeaponLevel => progress.unique_weapon_level,
            Self::ShardsOwned => progress.shards_owned,
            Self::ShardsUsed => progress.shards_used,
            Self::FavoriteGifts => progress.favorite_gifts,
        }
    }
}

/// Checks a complete progress record against the configured caps.
///
/// # Returns
/// - `Ok(())` - Every field is within its cap, shards used do not exceed shards owned and
///   the memo is short enough
/// - `Err(LedgerError::MissingProgressCap)` - A field's cap key has no row in `caps`
/// - `Err(LedgerError::OutOfRange)` - A field is outside its cap
/// - `Err(LedgerError::ShardsExceedOwned)` - More shards used than owned
/// - `Err(LedgerError::MemoTooLong)` - Memo longer than [`MEMO_MAX_LENGTH`] characters
pub fn validate_progress(
    progress: &ProgressDetailDto,
    caps: &[entity::progress_cap::Model],
) -> Result<(), LedgerError> {
    let caps: HashMap<&str, &entity::progress_cap::Model> =
        caps.iter().map(|cap| (cap.key.as_str(), cap)).collect();

    for field in ProgressField::ALL {
        let key = field.cap_key();
        let cap = caps
            .get(key)
            .ok_or(LedgerError::MissingProgressCap { key })?;

        let value = field.value(progress);
        if value < cap.min_value || value > cap.max_value {
            return Err(LedgerError::OutOfRange {
                field: field.name(),
                key,
                min: cap.min_value,
                max: cap.max_value,
                value,
            });
        }
    }

    if progress.shards_used > progress.shards_owned {
        return Err(LedgerError::ShardsExceedOwned {
            shards_owned: progress.shards_owned,
            shards_used: progress.shards_used,
        });
    }

    if progress.memo.chars().count() > MEMO_MAX_LENGTH {
        return Err(LedgerError::MemoTooLong {
            max_length: MEMO_MAX_LENGTH,
        });
    }

    Ok(())
}

/// Checks a proposed member list against a team's slot count.
///
/// Members are checked in input order, the first offending member decides the error.
///
/// # Returns
/// - `Ok(())` - The list fits the team
/// - `Err(LedgerError::TooManyMembers)` - More members than slots
/// - `Err(LedgerError::PositionOutOfRange)` - Position outside `0..slot_count`
/// - `Err(LedgerError::DuplicatePosition)` - Position already taken by an earlier member
/// - `Err(LedgerError::DuplicateStudent)` - Student already placed by an earlier member
pub fn validate_team_members(
    members: &[TeamMemberInputDto],
    slot_count: i32,
) -> Result<(), LedgerError> {
    if members.len() > usize::try_from(slot_count).unwrap_or(0) {
        return Err(LedgerError::TooManyMembers {
            slot_count,
            count: members.len(),
        });
    }

    let mut positions = HashSet::new();
    let mut student_ids = HashSet::new();

    for member in members {
        if member.position_index < 0 || member.position_index >= slot_count {
            return Err(LedgerError::PositionOutOfRange {
                position_index: member.position_index,
                slot_count,
            });
        }

        if !positions.insert(member.position_index) {
            return Err(LedgerError::DuplicatePosition {
                position_index: member.position_index,
            });
        }

        if !student_ids.insert(member.student_id.as_str()) {
            return Err(LedgerError::DuplicateStudent {
                student_id: member.student_id.clone(),
            });
        }
    }

    Ok(())
}
