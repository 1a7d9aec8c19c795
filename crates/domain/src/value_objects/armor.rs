//! Armor stats and condition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Armor below this fraction of its total vitality counts as damaged.
pub const DAMAGED_FRACTION: f64 = 0.3;

/// Armor as written on the sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Armor {
    #[serde(default)]
    pub name: String,
    pub vitality_total: f64,
    pub vitality_current: f64,
    #[serde(default)]
    pub observations: String,
}

/// Condition of a piece of armor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorStatus {
    Good,
    Damaged,
    Broken,
}

impl ArmorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Damaged => "damaged",
            Self::Broken => "broken",
        }
    }
}

impl fmt::Display for ArmorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
