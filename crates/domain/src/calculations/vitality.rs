//! Vitality (hit-point tier) calculator.
//!
//! Base vitality is `raceBase + classBase` and scales with `level + 1`. It is
//! split into six injury tiers of increasing severity. How the tiers and the
//! reported total are derived depends on the [`VitalityPolicy`]:
//!
//! - `AdditiveTiers`: tier = `(base - offset) * multiplier` with offsets
//!   0, 20, 40, 60, 80, 100; total = sum of the six tiers
//! - `SteppedFraction`: notable = `base * multiplier`, each further tier drops
//!   by `floor(notable / 6)`; total = notable
//!
//! Tiers are never clamped. A negative tier means the character is already
//! below zero hit points at that severity. Under `SteppedFraction` a negative
//! notable value floors to a negative step, so the tiers climb with severity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::VitalityPolicy;

/// Injury tiers, mildest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VitalityTier {
    Notable,
    Injured,
    SeverelyInjured,
    Condemned,
    Incapacitated,
    Coma,
}

impl VitalityTier {
    pub const ALL: [VitalityTier; 6] = [
        Self::Notable,
        Self::Injured,
        Self::SeverelyInjured,
        Self::Condemned,
        Self::Incapacitated,
        Self::Coma,
    ];

    /// Position in the severity order (notable = 0, coma = 5).
    pub fn index(&self) -> u8 {
        match self {
            Self::Notable => 0,
            Self::Injured => 1,
            Self::SeverelyInjured => 2,
            Self::Condemned => 3,
            Self::Incapacitated => 4,
            Self::Coma => 5,
        }
    }

    /// Amount subtracted from base vitality under additive tiers.
    pub fn offset(&self) -> f64 {
        f64::from(self.index()) * 20.0
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notable => "notable",
            Self::Injured => "injured",
            Self::SeverelyInjured => "severelyInjured",
            Self::Condemned => "condemned",
            Self::Incapacitated => "incapacitated",
            Self::Coma => "coma",
        }
    }
}

impl fmt::Display for VitalityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Vitality value of each tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalityLevels {
    pub notable: f64,
    pub injured: f64,
    pub severely_injured: f64,
    pub condemned: f64,
    pub incapacitated: f64,
    pub coma: f64,
}

impl VitalityLevels {
    pub fn from_fn(mut f: impl FnMut(VitalityTier) -> f64) -> Self {
        Self {
            notable: f(VitalityTier::Notable),
            injured: f(VitalityTier::Injured),
            severely_injured: f(VitalityTier::SeverelyInjured),
            condemned: f(VitalityTier::Condemned),
            incapacitated: f(VitalityTier::Incapacitated),
            coma: f(VitalityTier::Coma),
        }
    }

    pub fn get(&self, tier: VitalityTier) -> f64 {
        match tier {
            VitalityTier::Notable => self.notable,
            VitalityTier::Injured => self.injured,
            VitalityTier::SeverelyInjured => self.severely_injured,
            VitalityTier::Condemned => self.condemned,
            VitalityTier::Incapacitated => self.incapacitated,
            VitalityTier::Coma => self.coma,
        }
    }

    pub fn sum(&self) -> f64 {
        VitalityTier::ALL.iter().map(|&tier| self.get(tier)).sum()
    }
}

/// Calculated vitality block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalityCalculation {
    pub total: f64,
    pub base: f64,
    pub multiplier: u64,
    pub levels: VitalityLevels,
}

pub fn compute_vitality(
    race_base: f64,
    class_base: f64,
    level: u32,
    policy: VitalityPolicy,
) -> VitalityCalculation {
    let base = race_base + class_base;
    let multiplier = u64::from(level) + 1;
    let factor = multiplier as f64;

    let (levels, total) = match policy {
        VitalityPolicy::AdditiveTiers => {
            let levels = VitalityLevels::from_fn(|tier| (base - tier.offset()) * factor);
            (levels, levels.sum())
        }
        VitalityPolicy::SteppedFraction => {
            let notable = base * factor;
            let step = (notable / 6.0).floor();
            let levels =
                VitalityLevels::from_fn(|tier| notable - step * f64::from(tier.index()));
            (levels, notable)
        }
    };

    VitalityCalculation {
        total,
        base,
        multiplier,
        levels,
    }
}
