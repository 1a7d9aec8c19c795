//! Attribute value objects - the fixed set of fourteen sheet attributes.
//!
//! Attribute names are a closed enumeration. Sets are plain structs with one
//! field per attribute so that a sheet missing an attribute (or carrying an
//! unknown one) fails to deserialize instead of being silently patched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fourteen attributes every character sheet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeName {
    Agility,
    Charisma,
    Courage,
    Dexterity,
    Dodge,
    Strength,
    Intelligence,
    Initiative,
    Intimidate,
    Maneuver,
    Reflexes,
    Wisdom,
    Vigor,
    Willpower,
}

impl AttributeName {
    /// Every attribute, in sheet order.
    pub const ALL: [AttributeName; 14] = [
        Self::Agility,
        Self::Charisma,
        Self::Courage,
        Self::Dexterity,
        Self::Dodge,
        Self::Strength,
        Self::Intelligence,
        Self::Initiative,
        Self::Intimidate,
        Self::Maneuver,
        Self::Reflexes,
        Self::Wisdom,
        Self::Vigor,
        Self::Willpower,
    ];

    /// Returns the wire key (e.g., "agility", "willpower").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agility => "agility",
            Self::Charisma => "charisma",
            Self::Courage => "courage",
            Self::Dexterity => "dexterity",
            Self::Dodge => "dodge",
            Self::Strength => "strength",
            Self::Intelligence => "intelligence",
            Self::Initiative => "initiative",
            Self::Intimidate => "intimidate",
            Self::Maneuver => "maneuver",
            Self::Reflexes => "reflexes",
            Self::Wisdom => "wisdom",
            Self::Vigor => "vigor",
            Self::Willpower => "willpower",
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One value per attribute.
///
/// Used both for the stored race/class contributions and for calculated totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AttributeSet {
    pub agility: f64,
    pub charisma: f64,
    pub courage: f64,
    pub dexterity: f64,
    pub dodge: f64,
    pub strength: f64,
    pub intelligence: f64,
    pub initiative: f64,
    pub intimidate: f64,
    pub maneuver: f64,
    pub reflexes: f64,
    pub wisdom: f64,
    pub vigor: f64,
    pub willpower: f64,
}

impl AttributeSet {
    /// Build a set by evaluating `f` for every attribute.
    pub fn from_fn(mut f: impl FnMut(AttributeName) -> f64) -> Self {
        Self {
            agility: f(AttributeName::Agility),
            charisma: f(AttributeName::Charisma),
            courage: f(AttributeName::Courage),
            dexterity: f(AttributeName::Dexterity),
            dodge: f(AttributeName::Dodge),
            strength: f(AttributeName::Strength),
            intelligence: f(AttributeName::Intelligence),
            initiative: f(AttributeName::Initiative),
            intimidate: f(AttributeName::Intimidate),
            maneuver: f(AttributeName::Maneuver),
            reflexes: f(AttributeName::Reflexes),
            wisdom: f(AttributeName::Wisdom),
            vigor: f(AttributeName::Vigor),
            willpower: f(AttributeName::Willpower),
        }
    }

    pub fn get(&self, name: AttributeName) -> f64 {
        match name {
            AttributeName::Agility => self.agility,
            AttributeName::Charisma => self.charisma,
            AttributeName::Courage => self.courage,
            AttributeName::Dexterity => self.dexterity,
            AttributeName::Dodge => self.dodge,
            AttributeName::Strength => self.strength,
            AttributeName::Intelligence => self.intelligence,
            AttributeName::Initiative => self.initiative,
            AttributeName::Intimidate => self.intimidate,
            AttributeName::Maneuver => self.maneuver,
            AttributeName::Reflexes => self.reflexes,
            AttributeName::Wisdom => self.wisdom,
            AttributeName::Vigor => self.vigor,
            AttributeName::Willpower => self.willpower,
        }
    }

    pub fn with(mut self, name: AttributeName, value: f64) -> Self {
        let slot = match name {
            AttributeName::Agility => &mut self.agility,
            AttributeName::Charisma => &mut self.charisma,
            AttributeName::Courage => &mut self.courage,
            AttributeName::Dexterity => &mut self.dexterity,
            AttributeName::Dodge => &mut self.dodge,
            AttributeName::Strength => &mut self.strength,
            AttributeName::Intelligence => &mut self.intelligence,
            AttributeName::Initiative => &mut self.initiative,
            AttributeName::Intimidate => &mut self.intimidate,
            AttributeName::Maneuver => &mut self.maneuver,
            AttributeName::Reflexes => &mut self.reflexes,
            AttributeName::Wisdom => &mut self.wisdom,
            AttributeName::Vigor => &mut self.vigor,
            AttributeName::Willpower => &mut self.willpower,
        };
        *slot = value;
        self
    }

    /// Iterate `(name, value)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeName, f64)> + '_ {
        AttributeName::ALL
            .into_iter()
            .map(move |name| (name, self.get(name)))
    }
}

/// The two parallel attribute contributions stored on a sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AttributeSets {
    pub race: AttributeSet,
    pub class: AttributeSet,
}
