use super::Preferences;
use crate::catalogue::{DrinkRecord, Sweetness};
use crate::classifier::{LOW_TIER_MAX_KCAL, calories_at};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub const REASON_SEPARATOR: &str = "，";

/// A preference that a recommended drink satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    LowCalorie,
    LowSugar,
    CaffeineMatch { caffeine: bool },
    FavoriteBrand,
    Random,
}

impl MatchReason {
    pub fn text(self) -> &'static str {
        match self {
            MatchReason::LowCalorie => "低熱量選擇",
            MatchReason::LowSugar => "較少糖分",
            MatchReason::CaffeineMatch { caffeine: true } => "含有提神咖啡因",
            MatchReason::CaffeineMatch { caffeine: false } => "無咖啡因，適合晚上",
            MatchReason::FavoriteBrand => "您喜愛的品牌",
            MatchReason::Random => "隨機為您挑選",
        }
    }
}

/// Lists which preferences the drink, served at `sweetness`, satisfies.
/// Never empty: falls back to [`MatchReason::Random`].
pub fn match_reasons(
    drink: &DrinkRecord,
    sweetness: Sweetness,
    preferences: &Preferences,
) -> Vec<MatchReason> {
    let mut reasons = Vec::new();

    if preferences.health_conscious {
        if calories_at(drink, sweetness) <= LOW_TIER_MAX_KCAL {
            reasons.push(MatchReason::LowCalorie);
        }
        if sweetness.is_low_sugar() {
            reasons.push(MatchReason::LowSugar);
        }
    }

    if preferences.prefer_caffeine == Some(drink.caffeine) {
        reasons.push(MatchReason::CaffeineMatch {
            caffeine: drink.caffeine,
        });
    }

    if preferences.favorite_brands.contains(&drink.brand) {
        reasons.push(MatchReason::FavoriteBrand);
    }

    if reasons.is_empty() {
        reasons.push(MatchReason::Random);
    }
    reasons
}

/// Joins reasons into the sentence shown under a recommendation.
pub fn format_reasons(reasons: &[MatchReason]) -> String {
    reasons.iter().map(|r| r.text()).join(REASON_SEPARATOR)
}
