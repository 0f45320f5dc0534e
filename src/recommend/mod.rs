use crate::catalogue::{DrinkRecord, Sweetness};
use crate::classifier::calories_at;
use ahash::AHashSet;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

mod reason;
mod weights;

pub use reason::{MatchReason, REASON_SEPARATOR, format_reasons, match_reasons};
pub use weights::{drink_weight, roulette};

/// Sweetness levels preferred for health-conscious picks, when the drink offers them.
pub const HEALTHY_SWEETNESS: [Sweetness; 3] =
    [Sweetness::NoSugar, Sweetness::LowSugar, Sweetness::HalfSugar];

/// How a user would like weighted recommendations to lean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub health_conscious: bool,
    pub prefer_caffeine: Option<bool>,
    pub favorite_brands: AHashSet<String>,
    pub preferred_sweetness: Option<Sweetness>,
}

impl Preferences {
    pub fn with_favorite_brand(mut self, brand: impl Into<String>) -> Self {
        self.favorite_brands.insert(brand.into());
        self
    }
}

/// A drink picked for the user at a particular sweetness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub drink: DrinkRecord,
    pub sweetness: Sweetness,
    pub timestamp: DateTime<Utc>,
    /// Why the drink was chosen. Only weighted picks carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Recommendation {
    fn new(drink: &DrinkRecord, sweetness: Sweetness, reason: Option<String>) -> Self {
        Self {
            drink: drink.clone(),
            sweetness,
            timestamp: Utc::now(),
            reason,
        }
    }

    /// Calories of the recommended cup.
    pub fn calories(&self) -> f64 {
        calories_at(&self.drink, self.sweetness)
    }
}

/// Random drink selection over an already-filtered list.
///
/// The engine owns nothing but its random source, so the same engine can serve
/// any number of catalogues or sessions. Seed it for reproducible picks.
pub struct RecommendationEngine<R = StdRng> {
    rng: R,
}

impl RecommendationEngine<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RecommendationEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks a drink uniformly at random, then one of its sweetness levels uniformly.
    /// Returns `None` for an empty list.
    pub fn uniform_pick(&mut self, drinks: &[DrinkRecord]) -> Option<Recommendation> {
        let pool: Vec<&DrinkRecord> = drinks.iter().collect();
        let (drink, sweetness) = self.choose_uniform(&pool)?;
        Some(Recommendation::new(drink, sweetness, None))
    }

    /// Picks a drink by preference-weighted roulette and chooses a sweetness that
    /// suits the preferences. The result carries a human-readable reason.
    pub fn weighted_pick(
        &mut self,
        drinks: &[DrinkRecord],
        preferences: &Preferences,
    ) -> Option<Recommendation> {
        let weights: Vec<f64> = drinks
            .iter()
            .map(|drink| drink_weight(drink, preferences))
            .collect();
        let index = roulette(&weights, &mut self.rng)?;
        let drink = &drinks[index];
        let sweetness = self.choose_sweetness(drink, preferences)?;

        let reasons = match_reasons(drink, sweetness, preferences);
        debug!(
            drink = %drink.name,
            brand = %drink.brand,
            %sweetness,
            weight = weights[index],
            ?reasons,
            "weighted pick"
        );
        Some(Recommendation::new(
            drink,
            sweetness,
            Some(format_reasons(&reasons)),
        ))
    }

    /// Up to `count` uniform picks with no drink repeated, where drinks are told
    /// apart by name and brand. Stops early once every distinct drink is used.
    pub fn daily_picks(&mut self, drinks: &[DrinkRecord], count: usize) -> Vec<Recommendation> {
        let limit = count.min(drinks.len());
        let mut picks = Vec::with_capacity(limit);
        let mut used: AHashSet<(&str, &str)> = AHashSet::new();

        while picks.len() < limit {
            let pool: Vec<&DrinkRecord> = drinks
                .iter()
                .filter(|d| !used.contains(&d.identity()))
                .collect();
            let Some((drink, sweetness)) = self.choose_uniform(&pool) else {
                debug!(picked = picks.len(), requested = count, "daily pool exhausted");
                break;
            };
            used.insert(drink.identity());
            picks.push(Recommendation::new(drink, sweetness, None));
        }

        picks
    }

    fn choose_uniform<'a>(
        &mut self,
        pool: &[&'a DrinkRecord],
    ) -> Option<(&'a DrinkRecord, Sweetness)> {
        let drink = *pool.choose(&mut self.rng)?;
        let sweetness = *drink.sweetness_levels().choose(&mut self.rng)?;
        Some((drink, sweetness))
    }

    fn choose_sweetness(
        &mut self,
        drink: &DrinkRecord,
        preferences: &Preferences,
    ) -> Option<Sweetness> {
        if let Some(preferred) = preferences.preferred_sweetness {
            if drink.offers(preferred) {
                return Some(preferred);
            }
        }

        // An unoffered preference falls through to the health rule, not straight to uniform.
        let offered = drink.sweetness_levels();
        if preferences.health_conscious {
            let healthy: Vec<Sweetness> = HEALTHY_SWEETNESS
                .into_iter()
                .filter(|level| drink.offers(*level))
                .collect();
            if let Some(level) = healthy.choose(&mut self.rng) {
                return Some(*level);
            }
        }

        offered.choose(&mut self.rng).copied()
    }
}

impl Default for RecommendationEngine<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}
