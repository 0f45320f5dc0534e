use crate::catalogue::{DrinkRecord, Sweetness};
use crate::classifier::{CalorieTier, calories_at, classify, sugar_grams_at};
use serde::Serialize;

/// Calorie count at which the calorie bar is drawn full.
pub const CALORIE_BAR_FULL_KCAL: f64 = 600.0;

/// One sweetness button on a drink card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweetnessOption {
    pub sweetness: Sweetness,
    pub label: &'static str,
    pub total_kcal: f64,
    pub active: bool,
}

/// Plain data describing a drink card at a selected sweetness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrinkCard {
    pub name: String,
    pub brand: String,
    pub data_source: String,
    pub sweetness: Sweetness,
    pub sweetness_label: &'static str,
    pub calories: f64,
    pub sugar_grams: f64,
    pub tier: CalorieTier,
    pub caffeine_label: &'static str,
    /// Width of the calorie bar, 0 to 100.
    pub calorie_bar_percent: f64,
    pub options: Vec<SweetnessOption>,
}

impl DrinkCard {
    pub fn new(drink: &DrinkRecord, sweetness: Sweetness) -> Self {
        let calories = calories_at(drink, sweetness);
        let options = drink
            .calories
            .iter()
            .map(|(level, entry)| SweetnessOption {
                sweetness: *level,
                label: level.label(),
                total_kcal: entry.total_kcal,
                active: *level == sweetness,
            })
            .collect();

        Self {
            name: drink.name.clone(),
            brand: drink.brand.clone(),
            data_source: drink.data_source.clone(),
            sweetness,
            sweetness_label: sweetness.label(),
            calories,
            sugar_grams: sugar_grams_at(drink, sweetness),
            tier: classify(drink, sweetness),
            caffeine_label: caffeine_label(drink.caffeine),
            calorie_bar_percent: (calories / CALORIE_BAR_FULL_KCAL * 100.0).min(100.0),
            options,
        }
    }

    /// Card at the full-sugar level, the default view of a drink.
    pub fn full_sugar(drink: &DrinkRecord) -> Self {
        Self::new(drink, Sweetness::FullSugar)
    }
}

pub fn caffeine_label(caffeine: bool) -> &'static str {
    if caffeine { "含咖啡因" } else { "無咖啡因" }
}
