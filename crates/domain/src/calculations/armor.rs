//! Armor condition classifier.

use serde::Serialize;

use super::round_half_up;
use crate::error::DomainWarning;
use crate::value_objects::{Armor, ArmorStatus, DAMAGED_FRACTION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorCondition {
    pub durability_percentage: i64,
    pub status: ArmorStatus,
}

/// Classify armor from its vitality.
///
/// Defined for every input, including negative `current` and `current` above
/// `total`. A zero total yields 0% durability rather than an error.
pub fn classify_armor(vitality_total: f64, vitality_current: f64) -> ArmorCondition {
    let durability_percentage = if vitality_total > 0.0 {
        round_half_up(vitality_current / vitality_total * 100.0)
    } else {
        0
    };

    let status = if vitality_current <= 0.0 {
        ArmorStatus::Broken
    } else if vitality_current < vitality_total * DAMAGED_FRACTION {
        ArmorStatus::Damaged
    } else {
        ArmorStatus::Good
    };

    ArmorCondition {
        durability_percentage,
        status,
    }
}

/// Armor with its condition. Sheet fields pass through as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedArmor {
    #[serde(flatten)]
    pub armor: Armor,
    #[serde(flatten)]
    pub condition: ArmorCondition,
}

pub fn compute_armor(armor: &Armor, warnings: &mut Vec<DomainWarning>) -> CalculatedArmor {
    if armor.vitality_current < 0.0 {
        warnings.push(DomainWarning::NegativeArmorVitality {
            vitality_current: armor.vitality_current,
        });
    } else if armor.vitality_current > armor.vitality_total {
        warnings.push(DomainWarning::ArmorVitalityAboveTotal {
            vitality_current: armor.vitality_current,
            vitality_total: armor.vitality_total,
        });
    }

    CalculatedArmor {
        armor: armor.clone(),
        condition: classify_armor(armor.vitality_total, armor.vitality_current),
    }
}
