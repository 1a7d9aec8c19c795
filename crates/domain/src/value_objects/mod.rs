//! Value objects - Immutable objects defined by their attributes

mod armor;
mod attributes;
mod formula;
mod weapon;

pub use armor::{Armor, ArmorStatus, DAMAGED_FRACTION};
pub use attributes::{AttributeName, AttributeSet, AttributeSets};
pub use formula::{FormulaRevision, ProgressionPolicy, VitalityPolicy};
pub use weapon::{Weapon, WeaponSlot, Weapons, MAX_WEAPON_PERCENTAGE, MIN_WEAPON_PERCENTAGE};
