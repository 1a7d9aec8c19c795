//! Attribute totals and the level bonus.

use serde::{Deserialize, Serialize};

use crate::value_objects::{AttributeSet, AttributeSets};

/// Character levels per point of attribute bonus.
pub const LEVELS_PER_BONUS: u32 = 5;

/// Flat bonus added to every attribute: one point per five levels.
pub fn level_bonus(level: u32) -> u32 {
    level / LEVELS_PER_BONUS
}

/// The next level at which [`level_bonus`] goes up.
pub fn next_bonus_at_level(level: u32) -> u64 {
    let step = u64::from(LEVELS_PER_BONUS);
    (u64::from(level) + 1).div_ceil(step) * step
}

/// Calculated attribute block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeTotals {
    /// race + class + level bonus, per attribute
    pub totals: AttributeSet,
    pub level_bonus: u32,
    pub next_bonus_at_level: u64,
}

pub fn compute_attribute_totals(attributes: &AttributeSets, level: u32) -> AttributeTotals {
    let bonus = level_bonus(level);
    let totals = AttributeSet::from_fn(|name| {
        attributes.race.get(name) + attributes.class.get(name) + f64::from(bonus)
    });

    AttributeTotals {
        totals,
        level_bonus: bonus,
        next_bonus_at_level: next_bonus_at_level(level),
    }
}
