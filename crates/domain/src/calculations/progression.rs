//! Experience progression.

use serde::{Deserialize, Serialize};

use super::round_half_up;
use crate::error::DomainWarning;
use crate::value_objects::ProgressionPolicy;

/// XP needed to reach a level, per level.
pub const XP_PER_LEVEL: u64 = 10;

/// XP needed to reach `level`.
pub fn xp_for_level(level: u64) -> u64 {
    level.saturating_mul(XP_PER_LEVEL)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub current_level: u32,
    pub next_level: u64,
    pub xp_current: u64,
    pub xp_for_next: u64,
    /// Percent of the way to the next level
    pub xp_progress: i64,
}

pub fn compute_progression(
    current_level: u32,
    current_xp: u64,
    stored_next_level_xp: u64,
    policy: ProgressionPolicy,
) -> Progression {
    let next_level = u64::from(current_level) + 1;
    let xp_for_next = match policy {
        ProgressionPolicy::Recomputed => xp_for_level(next_level),
        ProgressionPolicy::TrustStored => stored_next_level_xp,
    };
    let xp_progress = if xp_for_next > 0 {
        round_half_up(current_xp as f64 / xp_for_next as f64 * 100.0)
    } else {
        0
    };

    Progression {
        current_level,
        next_level,
        xp_current: current_xp,
        xp_for_next,
        xp_progress,
    }
}

/// Warn when the stored threshold is ignored and disagrees with the recomputed one.
pub fn stale_threshold_warning(
    progression: &Progression,
    stored_next_level_xp: u64,
    policy: ProgressionPolicy,
) -> Option<DomainWarning> {
    match policy {
        ProgressionPolicy::Recomputed if stored_next_level_xp != progression.xp_for_next => {
            Some(DomainWarning::StaleNextLevelXp {
                stored: stored_next_level_xp,
                expected: progression.xp_for_next,
            })
        }
        _ => None,
    }
}
