use crate::catalogue::{DrinkRecord, Sweetness};
use crate::classifier::calories_at;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Calories are always compared at this level, whatever sweetness is being filtered on.
pub const SORT_REFERENCE_SWEETNESS: Sweetness = Sweetness::FullSugar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Brand,
    Calories,
    Caffeine,
}

impl SortKey {
    /// Parses a sort key, falling back to [`SortKey::Name`] for anything unrecognised.
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "brand" => Ok(SortKey::Brand),
            "calories" => Ok(SortKey::Calories),
            "caffeine" => Ok(SortKey::Caffeine),
            other => Err(ParseError::UnknownSortKey(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for SortOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            other => Err(ParseError::UnknownSortOrder(other.to_string())),
        }
    }
}

/// Compares two drinks on a single key, ascending.
///
/// Strings compare by Unicode scalar value, independent of locale. Calories use
/// `total_cmp` so the ordering is total even for unusual values.
pub fn compare_by(key: SortKey, a: &DrinkRecord, b: &DrinkRecord) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Brand => a.brand.cmp(&b.brand),
        SortKey::Calories => calories_at(a, SORT_REFERENCE_SWEETNESS)
            .total_cmp(&calories_at(b, SORT_REFERENCE_SWEETNESS)),
        SortKey::Caffeine => u8::from(a.caffeine).cmp(&u8::from(b.caffeine)),
    }
}

/// Sorts drinks in place. The sort is stable in both directions: drinks with equal
/// keys keep their relative input order.
pub fn sort_drinks(drinks: &mut [DrinkRecord], key: SortKey, order: SortOrder) {
    match order {
        SortOrder::Ascending => drinks.sort_by(|a, b| compare_by(key, a, b)),
        SortOrder::Descending => drinks.sort_by(|a, b| compare_by(key, b, a)),
    }
}

/// Owned variant of [`sort_drinks`].
pub fn sorted(mut drinks: Vec<DrinkRecord>, key: SortKey, order: SortOrder) -> Vec<DrinkRecord> {
    sort_drinks(&mut drinks, key, order);
    drinks
}
