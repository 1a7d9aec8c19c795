//! Unified error and warning types for the domain layer
//!
//! Errors abort a derivation: the engine never hands back a half-filled sheet.
//! Warnings are non-fatal notes about values that were tolerated and normalized
//! (clamped) because sheets are user-edited free-form data.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value_objects::WeaponSlot;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The sheet does not have the required shape (missing field, unknown key,
    /// wrong type, negative counter)
    #[error("Structural error: {0}")]
    Structural(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a structural error for sheets that cannot be read as a
    /// `RawCharacterSheet`.
    ///
    /// Required numeric fields are never substituted with silent zeros; use this
    /// instead.
    pub fn structural(msg: impl Into<String>) -> Self {
        Self::Structural(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for FormulaRevision {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "current" => Ok(Self::Current),
    ///             _ => Err(DomainError::parse(format!("Unknown formula revision: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::structural(err.to_string())
    }
}

/// A value outside its expected range that was tolerated rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DomainWarning {
    /// A weapon percentage was outside [0, 100] and has been clamped
    #[serde(rename_all = "camelCase")]
    WeaponPercentageClamped {
        slot: WeaponSlot,
        original: f64,
        clamped: f64,
    },
    /// Armor vitality went below zero
    #[serde(rename_all = "camelCase")]
    NegativeArmorVitality { vitality_current: f64 },
    /// Armor has more current vitality than its total
    #[serde(rename_all = "camelCase")]
    ArmorVitalityAboveTotal {
        vitality_current: f64,
        vitality_total: f64,
    },
    /// The stored XP threshold disagrees with the recomputed one
    #[serde(rename_all = "camelCase")]
    StaleNextLevelXp { stored: u64, expected: u64 },
}

impl fmt::Display for DomainWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeaponPercentageClamped {
                slot,
                original,
                clamped,
            } => write!(f, "{slot} percentage {original} clamped to {clamped}"),
            Self::NegativeArmorVitality { vitality_current } => {
                write!(f, "armor vitality is negative ({vitality_current})")
            }
            Self::ArmorVitalityAboveTotal {
                vitality_current,
                vitality_total,
            } => write!(
                f,
                "armor vitality {vitality_current} exceeds its total {vitality_total}"
            ),
            Self::StaleNextLevelXp { stored, expected } => {
                write!(f, "stored nextLevelXp {stored} is stale, expected {expected}")
            }
        }
    }
}
