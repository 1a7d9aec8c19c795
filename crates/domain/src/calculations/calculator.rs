//! Whole-sheet derivation.

use serde::Serialize;

use super::armor::{compute_armor, CalculatedArmor};
use super::attributes::{compute_attribute_totals, AttributeTotals};
use super::berkana::{compute_berkana, BerkanaCalculation};
use super::progression::{compute_progression, stale_threshold_warning, Progression};
use super::vitality::{compute_vitality, VitalityCalculation};
use super::weapons::{compute_weapons, CalculatedWeapons};
use crate::character_sheet::RawCharacterSheet;
use crate::error::{DomainError, DomainWarning};
use crate::value_objects::FormulaRevision;

/// Every derived figure for a sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedValues {
    pub vitality: VitalityCalculation,
    pub berkana: BerkanaCalculation,
    pub attributes: AttributeTotals,
    pub weapons: CalculatedWeapons,
    pub armor: CalculatedArmor,
    pub progression: Progression,
}

/// A raw sheet together with its derived view.
///
/// Never persisted; rebuilt from the raw sheet on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedCharacterSheet {
    /// The raw sheet, unchanged
    pub data: RawCharacterSheet,
    pub calculated: CalculatedValues,
    /// Formula revision the values were derived with
    pub rules: FormulaRevision,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<DomainWarning>,
}

/// Derives calculated sheets under a fixed formula revision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SheetCalculator {
    revision: FormulaRevision,
}

impl SheetCalculator {
    pub fn new(revision: FormulaRevision) -> Self {
        Self { revision }
    }

    pub fn revision(&self) -> FormulaRevision {
        self.revision
    }

    pub fn calculate(&self, sheet: &RawCharacterSheet) -> CalculatedCharacterSheet {
        let level = sheet.level();
        let mut warnings = Vec::new();

        let vitality = compute_vitality(
            sheet.vitality.race_base,
            sheet.vitality.class_base,
            level,
            self.revision.vitality_policy(),
        );
        let berkana = compute_berkana(sheet.berkana.base_value, level);
        let attributes = compute_attribute_totals(&sheet.attributes, level);
        let weapons = compute_weapons(&sheet.weapons, level, &mut warnings);
        let armor = compute_armor(&sheet.armor, &mut warnings);

        let policy = self.revision.progression_policy();
        let stored_next = sheet.basic_info.next_level_xp;
        let progression =
            compute_progression(level, sheet.basic_info.current_xp, stored_next, policy);
        warnings.extend(stale_threshold_warning(&progression, stored_next, policy));

        CalculatedCharacterSheet {
            data: sheet.clone(),
            calculated: CalculatedValues {
                vitality,
                berkana,
                attributes,
                weapons,
                armor,
                progression,
            },
            rules: self.revision,
            warnings,
        }
    }

    /// Parse an untyped sheet and derive it. Fails without a partial result if
    /// the sheet is structurally incomplete.
    pub fn calculate_json(
        &self,
        value: serde_json::Value,
    ) -> Result<CalculatedCharacterSheet, DomainError> {
        let sheet = RawCharacterSheet::from_json(value)?;
        Ok(self.calculate(&sheet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character_sheet::fixtures::sheet_json;
    use crate::value_objects::{ArmorStatus, WeaponSlot};

    fn sheet() -> RawCharacterSheet {
        RawCharacterSheet::from_json(sheet_json()).expect("fixture sheet")
    }

    #[test]
    fn current_revision_end_to_end() {
        let result = SheetCalculator::default().calculate(&sheet());
        let calc = &result.calculated;

        assert_eq!(result.rules, FormulaRevision::Current);
        assert!(result.warnings.is_empty());

        // Level 4: base 80, multiplier 5
        assert_eq!(calc.vitality.base, 80.0);
        assert_eq!(calc.vitality.multiplier, 5);
        assert_eq!(calc.vitality.levels.notable, 400.0);
        assert_eq!(calc.vitality.total, 900.0);

        assert_eq!(calc.berkana.total, 52.0);
        assert_eq!(calc.attributes.level_bonus, 0);
        assert_eq!(calc.attributes.next_bonus_at_level, 5);
        assert_eq!(calc.attributes.totals.strength, 12.0);

        assert_eq!(calc.weapons.weapon1.calculated_percentage, 64.0);
        assert_eq!(calc.weapons.weapon2.calculated_percentage, 100.0);
        assert_eq!(calc.weapons.weapon3.calculated_percentage, 4.0);

        assert_eq!(calc.armor.condition.durability_percentage, 25);
        assert_eq!(calc.armor.condition.status, ArmorStatus::Damaged);

        assert_eq!(calc.progression.next_level, 5);
        assert_eq!(calc.progression.xp_for_next, 50);
        assert_eq!(calc.progression.xp_progress, 50);
    }

    #[test]
    fn legacy_revision_uses_stepped_tiers_and_stored_xp() {
        let mut raw = sheet();
        raw.basic_info.next_level_xp = 100;

        let result = SheetCalculator::new(FormulaRevision::Legacy).calculate(&raw);
        let calc = &result.calculated;

        assert_eq!(result.rules, FormulaRevision::Legacy);
        // 400 / 6 = 66.67 -> step 66
        assert_eq!(calc.vitality.total, 400.0);
        assert_eq!(calc.vitality.levels.injured, 334.0);
        assert_eq!(calc.vitality.levels.coma, 70.0);
        assert_eq!(calc.progression.xp_for_next, 100);
        assert_eq!(calc.progression.xp_progress, 25);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn stale_stored_threshold_is_reported_under_current_revision() {
        let mut raw = sheet();
        raw.basic_info.next_level_xp = 100;

        let result = SheetCalculator::default().calculate(&raw);

        assert_eq!(result.calculated.progression.xp_for_next, 50);
        assert_eq!(
            result.warnings,
            vec![DomainWarning::StaleNextLevelXp {
                stored: 100,
                expected: 50
            }]
        );
    }

    #[test]
    fn data_is_the_input_unchanged() {
        let raw = sheet();
        let result = SheetCalculator::default().calculate(&raw);
        assert_eq!(result.data, raw);

        let json = serde_json::to_value(&result).expect("serialize sheet");
        let data_back: RawCharacterSheet =
            serde_json::from_value(json["data"].clone()).expect("data round-trips");
        assert_eq!(data_back, raw);
    }

    #[test]
    fn calculation_is_idempotent() {
        let raw = sheet();
        let calculator = SheetCalculator::new(FormulaRevision::Legacy);
        let first = serde_json::to_string(&calculator.calculate(&raw)).expect("serialize");
        let second = serde_json::to_string(&calculator.calculate(&raw)).expect("serialize");
        assert_eq!(first, second);
    }

    #[test]
    fn warnings_are_collected_in_sheet_order() {
        let mut raw = sheet();
        raw.weapons.weapon3.percentage = 101.0;
        raw.armor.vitality_current = -1.0;
        raw.basic_info.next_level_xp = 10;

        let result = SheetCalculator::default().calculate(&raw);

        assert_eq!(result.warnings.len(), 3);
        assert!(matches!(
            result.warnings[0],
            DomainWarning::WeaponPercentageClamped {
                slot: WeaponSlot::Weapon3,
                ..
            }
        ));
        assert!(matches!(
            result.warnings[1],
            DomainWarning::NegativeArmorVitality { .. }
        ));
        assert!(matches!(
            result.warnings[2],
            DomainWarning::StaleNextLevelXp { .. }
        ));
        assert_eq!(result.calculated.armor.condition.status, ArmorStatus::Broken);
    }

    #[test]
    fn calculate_json_rejects_incomplete_sheet() {
        let mut json = sheet_json();
        json["attributes"]["class"]
            .as_object_mut()
            .expect("class attributes")
            .remove("vigor");

        let err = SheetCalculator::default()
            .calculate_json(json)
            .expect_err("missing attribute");
        assert!(matches!(err, DomainError::Structural(_)));
        assert!(err.to_string().contains("vigor"));
    }

    #[test]
    fn serialized_shape_uses_boundary_names() {
        let json = serde_json::to_value(SheetCalculator::default().calculate(&sheet()))
            .expect("serialize sheet");

        assert_eq!(json["rules"], "current");
        assert!(json.get("warnings").is_none());
        assert_eq!(json["calculated"]["vitality"]["levels"]["severelyInjured"], 200.0);
        assert_eq!(json["calculated"]["attributes"]["totals"]["willpower"], 6.0);
        assert_eq!(json["calculated"]["attributes"]["nextBonusAtLevel"], 5);
        assert_eq!(json["calculated"]["berkana"]["levelBonus"], 40);
        assert_eq!(json["calculated"]["weapons"]["weapon2"]["calculatedPercentage"], 100.0);
        assert_eq!(json["calculated"]["armor"]["status"], "damaged");
        assert_eq!(json["calculated"]["progression"]["xpForNext"], 50);
        assert_eq!(json["data"]["basicInfo"]["characterName"], "Ragna");
    }
}
