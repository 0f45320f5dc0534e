use crate::catalogue::{Catalogue, Sweetness, flatten};
use crate::classifier::CalorieTier;
use itertools::Itertools;
use serde::Serialize;

/// A selectable value and the label it is shown with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub key: String,
    pub label: String,
}

impl FilterOption {
    fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// Everything a filter panel needs to populate its selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub brands: Vec<String>,
    pub drink_types: Vec<String>,
    pub sweetness_levels: Vec<FilterOption>,
    pub calorie_ranges: Vec<FilterOption>,
    pub caffeine_options: Vec<FilterOption>,
}

pub fn filter_options(catalogue: &Catalogue) -> FilterOptions {
    let drinks = flatten(catalogue);

    FilterOptions {
        brands: drinks.iter().map(|d| d.brand.clone()).unique().sorted().collect(),
        drink_types: drinks.iter().map(|d| d.name.clone()).unique().sorted().collect(),
        sweetness_levels: Sweetness::ALL
            .iter()
            .map(|level| FilterOption::new(level.key(), level.label()))
            .collect(),
        calorie_ranges: CalorieTier::ALL
            .iter()
            .map(|tier| FilterOption::new(tier.key(), tier.label()))
            .collect(),
        caffeine_options: vec![
            FilterOption::new("true", "含咖啡因"),
            FilterOption::new("false", "無咖啡因"),
        ],
    }
}
