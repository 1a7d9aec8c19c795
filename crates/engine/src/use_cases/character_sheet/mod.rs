//! Character sheet use cases.
//!
//! Loads raw sheets through a [`SheetSource`] and either derives the
//! calculated view or normalizes the sheet for storage.

mod error;

pub use error::CharacterSheetError;

use std::sync::Arc;

use rpgsheet_domain::{CalculatedCharacterSheet, PreparedSheet, RawCharacterSheet, SheetCalculator};

use crate::infrastructure::ports::SheetSource;

/// Container for character sheet use cases.
pub struct CharacterSheetUseCases {
    source: Arc<dyn SheetSource>,
    calculator: SheetCalculator,
}

impl CharacterSheetUseCases {
    pub fn new(source: Arc<dyn SheetSource>, calculator: SheetCalculator) -> Self {
        Self { source, calculator }
    }

    /// Load a sheet and derive every calculated value.
    pub async fn calculate(
        &self,
        reference: &str,
    ) -> Result<CalculatedCharacterSheet, CharacterSheetError> {
        let raw = self.source.load(reference).await?;
        let result = self.calculator.calculate_json(raw)?;

        for warning in &result.warnings {
            tracing::warn!(reference = %reference, %warning, "Sheet calculated with warning");
        }

        tracing::info!(
            reference = %reference,
            level = result.calculated.progression.current_level,
            vitality_total = result.calculated.vitality.total,
            xp_for_next = result.calculated.progression.xp_for_next,
            revision = %result.rules,
            "Calculated character sheet"
        );

        Ok(result)
    }

    /// Load a sheet and return the copy that should be persisted.
    pub async fn normalize(&self, reference: &str) -> Result<PreparedSheet, CharacterSheetError> {
        let raw = self.source.load(reference).await?;
        let prepared = RawCharacterSheet::from_json(raw)?.prepare_for_storage();

        for warning in &prepared.warnings {
            tracing::warn!(reference = %reference, %warning, "Sheet normalized");
        }

        tracing::info!(
            reference = %reference,
            changes = prepared.warnings.len(),
            "Prepared character sheet for storage"
        );

        Ok(prepared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockSheetSource, RepoError};
    use crate::test_fixtures;
    use rpgsheet_domain::{
        ArmorStatus, AttributeName, DomainError, DomainWarning, FormulaRevision, WeaponSlot,
    };

    fn source_returning(value: serde_json::Value) -> Arc<dyn SheetSource> {
        let mut source = MockSheetSource::new();
        source
            .expect_load()
            .withf(|reference| reference == "ragna.json")
            .times(1)
            .returning(move |_| Ok(value.clone()));
        Arc::new(source)
    }

    fn use_cases(value: serde_json::Value, revision: FormulaRevision) -> CharacterSheetUseCases {
        CharacterSheetUseCases::new(source_returning(value), SheetCalculator::new(revision))
    }

    #[tokio::test]
    async fn calculate_derives_every_section() {
        let result = use_cases(test_fixtures::ragna(), FormulaRevision::Current)
            .calculate("ragna.json")
            .await
            .expect("calculated");
        let calc = &result.calculated;

        assert_eq!(calc.vitality.base, 100.0);
        assert_eq!(calc.vitality.multiplier, 8);
        assert_eq!(calc.vitality.levels.notable, 800.0);
        assert_eq!(calc.vitality.levels.coma, 0.0);
        assert_eq!(calc.vitality.total, 2400.0);

        assert_eq!(calc.berkana.total, 85.0);
        assert_eq!(calc.berkana.level_bonus, 70);

        assert_eq!(calc.attributes.level_bonus, 1);
        assert_eq!(calc.attributes.next_bonus_at_level, 10);
        assert_eq!(calc.attributes.totals.get(AttributeName::Strength), 10.0);
        assert_eq!(calc.attributes.totals.get(AttributeName::Wisdom), 2.0);

        assert_eq!(calc.weapons.get(WeaponSlot::Weapon1).calculated_percentage, 72.0);
        assert_eq!(calc.weapons.get(WeaponSlot::Weapon2).calculated_percentage, 100.0);
        assert_eq!(calc.weapons.get(WeaponSlot::Weapon3).calculated_percentage, 47.0);

        assert_eq!(calc.armor.condition.durability_percentage, 25);
        assert_eq!(calc.armor.condition.status, ArmorStatus::Damaged);

        assert_eq!(calc.progression.next_level, 8);
        assert_eq!(calc.progression.xp_for_next, 80);
        assert_eq!(calc.progression.xp_progress, 65);

        assert!(result.warnings.is_empty());
    }

    #[tokio::test]
    async fn calculate_uses_the_configured_revision() {
        let result = use_cases(test_fixtures::ragna(), FormulaRevision::Legacy)
            .calculate("ragna.json")
            .await
            .expect("calculated");

        assert_eq!(result.rules, FormulaRevision::Legacy);
        assert_eq!(result.calculated.vitality.total, 800.0);
        assert_eq!(result.calculated.vitality.levels.coma, 135.0);
    }

    #[tokio::test]
    async fn calculate_reports_stale_threshold() {
        let mut sheet = test_fixtures::ragna();
        sheet["basicInfo"]["nextLevelXp"] = serde_json::json!(70);

        let result = use_cases(sheet, FormulaRevision::Current)
            .calculate("ragna.json")
            .await
            .expect("calculated");

        assert_eq!(result.calculated.progression.xp_for_next, 80);
        assert_eq!(
            result.warnings,
            vec![DomainWarning::StaleNextLevelXp {
                stored: 70,
                expected: 80
            }]
        );
    }

    #[tokio::test]
    async fn calculate_propagates_missing_sheet() {
        let mut source = MockSheetSource::new();
        source
            .expect_load()
            .returning(|reference| Err(RepoError::not_found(reference)));
        let use_cases = CharacterSheetUseCases::new(Arc::new(source), SheetCalculator::default());

        let err = use_cases.calculate("nobody.json").await.expect_err("missing");
        assert!(matches!(
            err,
            CharacterSheetError::Repo(RepoError::NotFound(ref reference)) if reference == "nobody.json"
        ));
    }

    #[tokio::test]
    async fn calculate_rejects_incomplete_sheet() {
        let mut sheet = test_fixtures::ragna();
        sheet["attributes"]["class"]
            .as_object_mut()
            .expect("class attributes")
            .remove("vigor");

        let err = use_cases(sheet, FormulaRevision::Current)
            .calculate("ragna.json")
            .await
            .expect_err("incomplete");
        assert!(matches!(
            err,
            CharacterSheetError::Domain(DomainError::Structural(_))
        ));
    }

    #[tokio::test]
    async fn normalize_resyncs_threshold_and_clamps_weapons() {
        let mut sheet = test_fixtures::ragna();
        sheet["basicInfo"]["nextLevelXp"] = serde_json::json!(0);
        sheet["weapons"]["weapon3"]["percentage"] = serde_json::json!(130);

        let prepared = use_cases(sheet, FormulaRevision::Current)
            .normalize("ragna.json")
            .await
            .expect("prepared");

        assert_eq!(prepared.sheet.basic_info.next_level_xp, 80);
        assert_eq!(prepared.sheet.weapons.weapon3.percentage, 100.0);
        assert_eq!(prepared.sheet.weapons.weapon1.percentage, 65.0);
        assert_eq!(prepared.warnings.len(), 2);
    }

    #[tokio::test]
    async fn normalize_leaves_clean_sheet_untouched() {
        let prepared = use_cases(test_fixtures::ragna(), FormulaRevision::Current)
            .normalize("ragna.json")
            .await
            .expect("prepared");

        let original = RawCharacterSheet::from_json(test_fixtures::ragna()).expect("sheet");
        assert_eq!(prepared.sheet, original);
        assert!(prepared.warnings.is_empty());
    }
}
