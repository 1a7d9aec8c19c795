//! Weapon slots and weapon stats.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest and highest accuracy percentage a weapon can have.
pub const MIN_WEAPON_PERCENTAGE: f64 = 0.0;
pub const MAX_WEAPON_PERCENTAGE: f64 = 100.0;

/// One of the three weapon slots on a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeaponSlot {
    Weapon1,
    Weapon2,
    Weapon3,
}

impl WeaponSlot {
    pub const ALL: [WeaponSlot; 3] = [Self::Weapon1, Self::Weapon2, Self::Weapon3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon1 => "weapon1",
            Self::Weapon2 => "weapon2",
            Self::Weapon3 => "weapon3",
        }
    }
}

impl fmt::Display for WeaponSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A weapon as written on the sheet.
///
/// `name` and `observations` are free text and default to empty; the numbers
/// are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Weapon {
    #[serde(default)]
    pub name: String,
    /// Base accuracy, 0-100
    pub percentage: f64,
    pub light_damage: f64,
    pub medium_damage: f64,
    pub heavy_damage: f64,
    pub extreme_damage: f64,
    pub critical_damage: f64,
    #[serde(default)]
    pub observations: String,
}

impl Weapon {
    /// The percentage clamped into [0, 100], and whether clamping changed it.
    pub fn clamped_percentage(&self) -> (f64, bool) {
        let clamped = self
            .percentage
            .clamp(MIN_WEAPON_PERCENTAGE, MAX_WEAPON_PERCENTAGE);
        (clamped, clamped != self.percentage)
    }
}

/// The three weapon slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Weapons {
    pub weapon1: Weapon,
    pub weapon2: Weapon,
    pub weapon3: Weapon,
}

impl Weapons {
    pub fn get(&self, slot: WeaponSlot) -> &Weapon {
        match slot {
            WeaponSlot::Weapon1 => &self.weapon1,
            WeaponSlot::Weapon2 => &self.weapon2,
            WeaponSlot::Weapon3 => &self.weapon3,
        }
    }

    pub fn get_mut(&mut self, slot: WeaponSlot) -> &mut Weapon {
        match slot {
            WeaponSlot::Weapon1 => &mut self.weapon1,
            WeaponSlot::Weapon2 => &mut self.weapon2,
            WeaponSlot::Weapon3 => &mut self.weapon3,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeaponSlot, &Weapon)> + '_ {
        WeaponSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }
}
