//! RPG Sheet Domain - character sheets and the stat derivation engine.
//!
//! The crate is pure: no I/O, no global configuration, no caching. Callers
//! hand in a raw sheet (and a formula revision) and get a calculated sheet back.

pub mod calculations;
pub mod character_sheet;
pub mod error;
pub mod value_objects;

pub use error::{DomainError, DomainWarning};

// Re-export the derivation engine
pub use calculations::{
    classify_armor, compute_attribute_totals, compute_berkana, compute_progression,
    compute_vitality, compute_weapon_accuracy, level_bonus, next_bonus_at_level, round_half_up,
    xp_for_level, ArmorCondition, AttributeTotals, BerkanaCalculation, CalculatedArmor,
    CalculatedCharacterSheet, CalculatedValues, CalculatedWeapon, CalculatedWeapons,
    Progression, SheetCalculator, VitalityCalculation, VitalityLevels, VitalityTier,
};

// Re-export character sheet types
pub use character_sheet::{BasicInfo, BerkanaBase, PreparedSheet, RawCharacterSheet, VitalityBase};

// Re-export value objects
pub use value_objects::{
    Armor, ArmorStatus, AttributeName, AttributeSet, AttributeSets, FormulaRevision,
    ProgressionPolicy, VitalityPolicy, Weapon, WeaponSlot, Weapons,
};
