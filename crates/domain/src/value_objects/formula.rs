//! Formula revisions for the derived quantities whose rules changed over time.
//!
//! Vitality tiers and the XP threshold each have two historical formulas. A
//! revision pins both at once so the calculators never mix formulas from
//! different revisions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// How the six vitality tiers and the vitality total are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalityPolicy {
    /// Each tier is `(base - offset) * multiplier`; total is the sum of all tiers.
    AdditiveTiers,
    /// Tiers step down by a sixth of `base * multiplier`; total is the notable tier.
    SteppedFraction,
}

/// Where the XP needed for the next level comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionPolicy {
    /// `nextLevel * 10`, ignoring the stored value.
    Recomputed,
    /// The stored `nextLevelXp`, as persisted.
    TrustStored,
}

/// A named pair of vitality and progression policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaRevision {
    /// Summed vitality tiers and recomputed XP thresholds.
    #[default]
    Current,
    /// Stepped vitality tiers and stored XP thresholds.
    Legacy,
}

impl FormulaRevision {
    pub const ALL: [FormulaRevision; 2] = [Self::Current, Self::Legacy];

    pub fn vitality_policy(&self) -> VitalityPolicy {
        match self {
            Self::Current => VitalityPolicy::AdditiveTiers,
            Self::Legacy => VitalityPolicy::SteppedFraction,
        }
    }

    pub fn progression_policy(&self) -> ProgressionPolicy {
        match self {
            Self::Current => ProgressionPolicy::Recomputed,
            Self::Legacy => ProgressionPolicy::TrustStored,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for FormulaRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FormulaRevision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" | "a" => Ok(Self::Current),
            "legacy" | "b" => Ok(Self::Legacy),
            _ => Err(DomainError::parse(format!(
                "Unknown formula revision: {}",
                s
            ))),
        }
    }
}
