use crate::catalogue::{DrinkRecord, Sweetness};
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound (inclusive) of the low tier, in kcal.
pub const LOW_TIER_MAX_KCAL: f64 = 200.0;
/// Upper bound (inclusive) of the medium tier, in kcal.
pub const MEDIUM_TIER_MAX_KCAL: f64 = 400.0;

/// Calorie classification of a drink at a given sweetness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalorieTier {
    Low,
    Medium,
    High,
}

impl CalorieTier {
    pub const ALL: [CalorieTier; 3] = [CalorieTier::Low, CalorieTier::Medium, CalorieTier::High];

    /// Boundary values belong to the lower tier.
    pub fn from_kcal(kcal: f64) -> Self {
        if kcal <= LOW_TIER_MAX_KCAL {
            CalorieTier::Low
        } else if kcal <= MEDIUM_TIER_MAX_KCAL {
            CalorieTier::Medium
        } else {
            CalorieTier::High
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            CalorieTier::Low => "low",
            CalorieTier::Medium => "medium",
            CalorieTier::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CalorieTier::Low => "低 (0-200 卡)",
            CalorieTier::Medium => "中 (201-400 卡)",
            CalorieTier::High => "高 (401+ 卡)",
        }
    }
}

impl fmt::Display for CalorieTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CalorieTier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.key() == s)
            .ok_or_else(|| ParseError::UnknownCalorieTier(s.to_string()))
    }
}

/// Calories of a large cup at `sweetness`, or 0 when the drink does not offer it.
pub fn calories_at(drink: &DrinkRecord, sweetness: Sweetness) -> f64 {
    drink
        .calorie_entry(sweetness)
        .map_or(0.0, |entry| entry.total_kcal)
}

/// Sugar grams at `sweetness`, or 0 when the level or the figure is missing.
pub fn sugar_grams_at(drink: &DrinkRecord, sweetness: Sweetness) -> f64 {
    drink
        .calorie_entry(sweetness)
        .and_then(|entry| entry.sugar_grams)
        .unwrap_or(0.0)
}

/// Classifies a drink at a sweetness level. A missing level counts as 0 kcal,
/// which lands in the low tier, so callers never have to handle a failure.
pub fn classify(drink: &DrinkRecord, sweetness: Sweetness) -> CalorieTier {
    CalorieTier::from_kcal(calories_at(drink, sweetness))
}
