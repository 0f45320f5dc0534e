use super::Preferences;
use crate::catalogue::DrinkRecord;
use crate::classifier::{LOW_TIER_MAX_KCAL, MEDIUM_TIER_MAX_KCAL};
use rand::Rng;
use tracing::{trace, warn};

const LOW_CALORIE_BOOST: f64 = 1.5;
const HIGH_CALORIE_PENALTY: f64 = 0.7;
const CAFFEINE_MATCH_BOOST: f64 = 1.3;
const CAFFEINE_MISMATCH_PENALTY: f64 = 0.8;
const FAVORITE_BRAND_BOOST: f64 = 1.4;

/// The selection weight of a drink under the given preferences. Always positive.
pub fn drink_weight(drink: &DrinkRecord, preferences: &Preferences) -> f64 {
    let mut weight = 1.0;

    if preferences.health_conscious {
        let mean = drink.mean_calories();
        if mean <= LOW_TIER_MAX_KCAL {
            weight *= LOW_CALORIE_BOOST;
        } else if mean >= MEDIUM_TIER_MAX_KCAL {
            weight *= HIGH_CALORIE_PENALTY;
        }
    }

    if let Some(caffeine) = preferences.prefer_caffeine {
        weight *= if drink.caffeine == caffeine {
            CAFFEINE_MATCH_BOOST
        } else {
            CAFFEINE_MISMATCH_PENALTY
        };
    }

    if preferences.favorite_brands.contains(&drink.brand) {
        weight *= FAVORITE_BRAND_BOOST;
    }

    weight
}

/// Picks an index by cumulative-weight roulette.
///
/// Draws `r` in `[0, total)` and walks the list subtracting weights, stopping at
/// the first entry that brings the remainder to zero or below. If rounding leaves
/// the remainder positive after the last entry, the last entry is chosen.
/// Returns `None` only for an empty list.
pub fn roulette<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let last = weights.len().checked_sub(1)?;
    let total: f64 = weights.iter().sum();
    let mut remaining = rng.random::<f64>() * total;
    trace!(total, draw = remaining, "roulette draw");

    for (index, weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(index);
        }
    }

    warn!(remaining, "roulette walk overran the weights, using the last entry");
    Some(last)
}
