//! Stat derivation engine.
//!
//! Pure calculators that turn a raw character sheet into its calculated view.
//! Nothing here performs I/O or holds state; every value is recomputed from the
//! sheet and the current level on each call.
//!
//! # Calculators
//!
//! - Attribute totals and the per-five-levels bonus (`attributes`)
//! - Vitality tiers (`vitality`)
//! - Berkana pool (`berkana`)
//! - Weapon accuracy (`weapons`)
//! - Armor condition (`armor`)
//! - Experience progression (`progression`)
//!
//! [`SheetCalculator`] runs all of them under one [`FormulaRevision`].
//!
//! [`FormulaRevision`]: crate::value_objects::FormulaRevision

pub mod armor;
pub mod attributes;
pub mod berkana;
mod calculator;
pub mod progression;
pub mod vitality;
pub mod weapons;

pub use armor::{classify_armor, compute_armor, ArmorCondition, CalculatedArmor};
pub use attributes::{compute_attribute_totals, level_bonus, next_bonus_at_level, AttributeTotals};
pub use berkana::{compute_berkana, BerkanaCalculation};
pub use calculator::{CalculatedCharacterSheet, CalculatedValues, SheetCalculator};
pub use progression::{compute_progression, stale_threshold_warning, xp_for_level, Progression};
pub use vitality::{compute_vitality, VitalityCalculation, VitalityLevels, VitalityTier};
pub use weapons::{compute_weapon_accuracy, compute_weapons, CalculatedWeapon, CalculatedWeapons};

/// Round to the nearest integer, halves going up (2.5 -> 3, -2.5 -> -2).
///
/// Every rounded figure on the calculated sheet goes through this.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
