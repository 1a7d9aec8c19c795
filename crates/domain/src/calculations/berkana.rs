//! Berkana resource pool.

use serde::{Deserialize, Serialize};

/// Berkana gained per character level.
pub const BERKANA_PER_LEVEL: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BerkanaCalculation {
    pub total: f64,
    pub base: f64,
    pub level_bonus: u64,
}

pub fn compute_berkana(base_value: f64, level: u32) -> BerkanaCalculation {
    let level_bonus = u64::from(level) * BERKANA_PER_LEVEL;
    BerkanaCalculation {
        total: base_value + level_bonus as f64,
        base: base_value,
        level_bonus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_ten_per_level() {
        let result = compute_berkana(12.0, 4);
        assert_eq!(result.level_bonus, 40);
        assert_eq!(result.total, 52.0);
        assert_eq!(result.base, 12.0);
    }

    #[test]
    fn level_zero_is_base() {
        assert_eq!(compute_berkana(7.5, 0).total, 7.5);
    }

    #[test]
    fn never_decreases_with_level() {
        let mut previous = f64::MIN;
        for level in 0..100 {
            let total = compute_berkana(3.0, level).total;
            assert!(total >= previous);
            previous = total;
        }
    }
}
