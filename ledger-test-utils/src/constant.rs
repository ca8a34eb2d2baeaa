pub static TEST_PROVIDER: &str = "cloudflare_access";
pub static TEST_SUBJECT: &str = "test-subject";
pub static TEST_EMAIL: &str = "sensei@example.com";

/// Progress caps used by tests as `(key, min, max)`.
pub const TEST_PROGRESS_CAPS: [(&str, i32, i32); 12] = [
    ("level", 1, 100),
    ("rarity", 1, 8),
    ("bondLevel", 1, 100),
    ("exSkillLevel", 1, 10),
    ("normalSkillLevel", 1, 10),
    ("passiveSkillLevel", 1, 10),
    ("subSkillLevel", 1, 10),
    ("equipmentTier", 0, 10),
    ("uniqueWeaponRank", 0, 5),
    ("uniqueWeaponLevel", 0, 100),
    ("shards", 0, 9999),
    ("favoriteGifts", 0, 999),
];

/// Team slot capacities used by tests as `(mode, slot_count)`.
pub const TEST_MODE_RULES: [(&str, i32); 2] = [("raid", 6), ("jfd", 6)];
