use crate::catalogue::{Catalogue, DrinkRecord, Sweetness, flatten};
use crate::classifier::classify;
use tracing::debug;

mod criteria;
mod options;

pub use criteria::{FilterCriteria, RawFilterInput};
pub use options::{FilterOption, FilterOptions, filter_options};

/// Sweetness level used to classify calories when no sweetness filter is set.
pub const DEFAULT_TIER_SWEETNESS: Sweetness = Sweetness::FullSugar;

/// Flattens the catalogue and keeps the drinks that satisfy every active criterion.
///
/// Catalogue order is preserved. With no criteria set the full flattened list is
/// returned; when nothing matches the result is empty.
pub fn apply_filters(catalogue: &Catalogue, criteria: &FilterCriteria) -> Vec<DrinkRecord> {
    let mut drinks = flatten(catalogue);
    let total = drinks.len();

    if let Some(brand) = &criteria.brand {
        drinks.retain(|d| &d.brand == brand);
    }

    if let Some(name) = &criteria.drink_type {
        drinks.retain(|d| &d.name == name);
    }

    if let Some(caffeine) = criteria.caffeine {
        drinks.retain(|d| d.caffeine == caffeine);
    }

    if let Some(tier) = criteria.calorie_tier {
        let level = criteria.sweetness.unwrap_or(DEFAULT_TIER_SWEETNESS);
        drinks.retain(|d| classify(d, level) == tier);
    }

    // Separate from the tier lookup above: the drink must actually offer the level.
    if let Some(level) = criteria.sweetness {
        drinks.retain(|d| d.offers(level));
    }

    debug!(total, matched = drinks.len(), ?criteria, "filters applied");
    drinks
}
