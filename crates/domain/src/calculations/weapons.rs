//! Weapon accuracy.

use serde::Serialize;

use crate::error::DomainWarning;
use crate::value_objects::{Weapon, WeaponSlot, Weapons, MAX_WEAPON_PERCENTAGE};

/// `min(100, basePercentage + level)`.
pub fn compute_weapon_accuracy(base_percentage: f64, level: u32) -> f64 {
    (base_percentage + f64::from(level)).min(MAX_WEAPON_PERCENTAGE)
}

/// A weapon with its level-adjusted accuracy. Sheet fields pass through as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedWeapon {
    #[serde(flatten)]
    pub weapon: Weapon,
    pub calculated_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedWeapons {
    pub weapon1: CalculatedWeapon,
    pub weapon2: CalculatedWeapon,
    pub weapon3: CalculatedWeapon,
}

impl CalculatedWeapons {
    pub fn get(&self, slot: WeaponSlot) -> &CalculatedWeapon {
        match slot {
            WeaponSlot::Weapon1 => &self.weapon1,
            WeaponSlot::Weapon2 => &self.weapon2,
            WeaponSlot::Weapon3 => &self.weapon3,
        }
    }
}

/// Calculate every slot. Out-of-range base percentages are clamped first and
/// reported in `warnings`.
pub fn compute_weapons(
    weapons: &Weapons,
    level: u32,
    warnings: &mut Vec<DomainWarning>,
) -> CalculatedWeapons {
    let mut calculate = |slot: WeaponSlot| {
        let weapon = weapons.get(slot);
        let (base, clamped) = weapon.clamped_percentage();
        if clamped {
            warnings.push(DomainWarning::WeaponPercentageClamped {
                slot,
                original: weapon.percentage,
                clamped: base,
            });
        }
        CalculatedWeapon {
            weapon: weapon.clone(),
            calculated_percentage: compute_weapon_accuracy(base, level),
        }
    };

    CalculatedWeapons {
        weapon1: calculate(WeaponSlot::Weapon1),
        weapon2: calculate(WeaponSlot::Weapon2),
        weapon3: calculate(WeaponSlot::Weapon3),
    }
}
