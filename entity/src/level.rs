//! Trainer levels and the XP thresholds between them.

use serde::Serialize;

/// One trainer level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Level {
    pub level: u8,
    /// Total XP at which the level is reached.
    pub total_xp: u64,
    /// XP needed to advance to the next level. `None` at the level cap.
    pub xp_required: Option<u64>,
}

const fn lvl(level: u8, total_xp: u64, xp_required: u64) -> Level {
    Level {
        level,
        total_xp,
        xp_required: Some(xp_required),
    }
}

/// Highest attainable level.
pub const MAX_LEVEL: u8 = 50;

/// Every level from 1 to [`MAX_LEVEL`].
pub static LEVELS: [Level; 50] = [
    lvl(1, 0, 1_000),
    lvl(2, 1_000, 2_000),
    lvl(3, 3_000, 3_000),
    lvl(4, 6_000, 4_000),
    lvl(5, 10_000, 5_000),
    lvl(6, 15_000, 6_000),
    lvl(7, 21_000, 7_000),
    lvl(8, 28_000, 8_000),
    lvl(9, 36_000, 9_000),
    lvl(10, 45_000, 10_000),
    lvl(11, 55_000, 10_000),
    lvl(12, 65_000, 10_000),
    lvl(13, 75_000, 10_000),
    lvl(14, 85_000, 15_000),
    lvl(15, 100_000, 20_000),
    lvl(16, 120_000, 20_000),
    lvl(17, 140_000, 20_000),
    lvl(18, 160_000, 25_000),
    lvl(19, 185_000, 25_000),
    lvl(20, 210_000, 50_000),
    lvl(21, 260_000, 75_000),
    lvl(22, 335_000, 100_000),
    lvl(23, 435_000, 125_000),
    lvl(24, 560_000, 150_000),
    lvl(25, 710_000, 190_000),
    lvl(26, 900_000, 200_000),
    lvl(27, 1_100_000, 250_000),
    lvl(28, 1_350_000, 300_000),
    lvl(29, 1_650_000, 350_000),
    lvl(30, 2_000_000, 500_000),
    lvl(31, 2_500_000, 500_000),
    lvl(32, 3_000_000, 750_000),
    lvl(33, 3_750_000, 1_000_000),
    lvl(34, 4_750_000, 1_250_000),
    lvl(35, 6_000_000, 1_500_000),
    lvl(36, 7_500_000, 2_000_000),
    lvl(37, 9_500_000, 2_500_000),
    lvl(38, 12_000_000, 3_000_000),
    lvl(39, 15_000_000, 5_000_000),
    lvl(40, 20_000_000, 6_000_000),
    lvl(41, 26_000_000, 7_500_000),
    lvl(42, 33_500_000, 9_000_000),
    lvl(43, 42_500_000, 11_000_000),
    lvl(44, 53_500_000, 13_000_000),
    lvl(45, 66_500_000, 15_500_000),
    lvl(46, 82_000_000, 18_000_000),
    lvl(47, 100_000_000, 21_000_000),
    lvl(48, 121_000_000, 25_000_000),
    lvl(49, 146_000_000, 30_000_000),
    Level {
        level: 50,
        total_xp: 176_000_000,
        xp_required: None,
    },
];

// Above this total the level can no longer be derived from XP alone; level-up
// tasks gate progress past 40.
const TASK_GATED_XP: u64 = 26_000_000;
const LEVEL_40_XP: u64 = 20_000_000;

/// Looks up a level by number.
///
/// # Returns
/// - `Some(Level)` - For levels 1 through [`MAX_LEVEL`]
/// - `None` - For any other number
pub fn level(number: u8) -> Option<Level> {
    LEVELS.get(usize::from(number).checked_sub(1)?).copied()
}

/// Levels a trainer with `total_xp` could be at.
///
/// Below 26,000,000 XP the level is unambiguous and exactly one level is returned.
/// From there on a trainer may hold XP without having completed the tasks for the
/// next level, so every level from 40 up to the highest one the XP allows is
/// possible.
///
/// # Arguments
/// - `total_xp` - Lifetime XP
///
/// # Returns
/// Matching levels in ascending order
pub fn possible_levels(total_xp: u64) -> Vec<Level> {
    if total_xp < TASK_GATED_XP {
        return LEVELS
            .iter()
            .filter(|level| {
                level.total_xp <= total_xp
                    && level
                        .xp_required
                        .is_none_or(|required| total_xp < level.total_xp + required)
            })
            .copied()
            .collect();
    }

    LEVELS
        .iter()
        .filter(|level| level.total_xp >= LEVEL_40_XP && level.total_xp <= total_xp)
        .copied()
        .collect()
}

impl Level {
    /// Whether this is the level cap.
    pub fn is_max(&self) -> bool {
        self.xp_required.is_none()
    }
}
