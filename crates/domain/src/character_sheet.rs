//! Raw character sheet - the persisted, user-edited base data.
//!
//! The persistence layer owns these values; the derivation engine only reads
//! them. Every section rejects unknown keys and every numeric field is
//! required, so a sheet that deserializes is structurally complete.
//!
//! # Write path
//!
//! [`RawCharacterSheet::prepare_for_storage`] is what a collaborator runs before
//! persisting a sheet: it re-syncs `nextLevelXp` with the current level and
//! clamps weapon percentages into range.

use serde::{Deserialize, Serialize};

use crate::calculations::progression::xp_for_level;
use crate::error::{DomainError, DomainWarning};
use crate::value_objects::{Armor, AttributeSets, Weapons};

/// Level and experience counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BasicInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_name: Option<String>,
    pub current_level: u32,
    pub current_xp: u64,
    /// Stored XP threshold for the next level; may be stale
    pub next_level_xp: u64,
}

/// Base vitality contributed by race and class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VitalityBase {
    pub race_base: f64,
    pub class_base: f64,
}

/// Base berkana pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BerkanaBase {
    pub base_value: f64,
}

/// A complete raw character sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawCharacterSheet {
    pub basic_info: BasicInfo,
    pub attributes: AttributeSets,
    pub vitality: VitalityBase,
    pub berkana: BerkanaBase,
    pub weapons: Weapons,
    pub armor: Armor,
}

/// A sheet ready to be persisted, plus what was normalized on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedSheet {
    pub sheet: RawCharacterSheet,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<DomainWarning>,
}

impl RawCharacterSheet {
    /// Read a sheet from an untyped JSON value.
    pub fn from_json(value: serde_json::Value) -> Result<Self, DomainError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Read a sheet from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn level(&self) -> u32 {
        self.basic_info.current_level
    }

    /// Return a copy normalized for storage.
    ///
    /// - `nextLevelXp` is recomputed from the current level
    /// - weapon percentages are clamped into [0, 100]
    pub fn prepare_for_storage(&self) -> PreparedSheet {
        let mut sheet = self.clone();
        let mut warnings = Vec::new();

        let expected = xp_for_level(u64::from(sheet.level()) + 1);
        if sheet.basic_info.next_level_xp != expected {
            warnings.push(DomainWarning::StaleNextLevelXp {
                stored: sheet.basic_info.next_level_xp,
                expected,
            });
            sheet.basic_info.next_level_xp = expected;
        }

        for (slot, weapon) in self.weapons.iter() {
            let (clamped, changed) = weapon.clamped_percentage();
            if changed {
                warnings.push(DomainWarning::WeaponPercentageClamped {
                    slot,
                    original: weapon.percentage,
                    clamped,
                });
                sheet.weapons.get_mut(slot).percentage = clamped;
            }
        }

        PreparedSheet { sheet, warnings }
    }
}
