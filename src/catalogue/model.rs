use crate::error::ParseError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five sweetness levels a shop will prepare a drink at.
///
/// Declaration order runs from least to most sugar, which is also the order
/// used for option lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sweetness {
    #[serde(rename = "no_sugar_0")]
    NoSugar,
    #[serde(rename = "low_sugar_40")]
    LowSugar,
    #[serde(rename = "half_sugar_60")]
    HalfSugar,
    #[serde(rename = "less_sugar_80")]
    LessSugar,
    #[serde(rename = "full_sugar_100")]
    FullSugar,
}

impl Sweetness {
    pub const ALL: [Sweetness; 5] = [
        Sweetness::NoSugar,
        Sweetness::LowSugar,
        Sweetness::HalfSugar,
        Sweetness::LessSugar,
        Sweetness::FullSugar,
    ];

    /// The key used for this level in the catalogue JSON.
    pub fn key(self) -> &'static str {
        match self {
            Sweetness::NoSugar => "no_sugar_0",
            Sweetness::LowSugar => "low_sugar_40",
            Sweetness::HalfSugar => "half_sugar_60",
            Sweetness::LessSugar => "less_sugar_80",
            Sweetness::FullSugar => "full_sugar_100",
        }
    }

    /// The label shown to customers at the counter.
    pub fn label(self) -> &'static str {
        match self {
            Sweetness::NoSugar => "無糖",
            Sweetness::LowSugar => "少糖",
            Sweetness::HalfSugar => "半糖",
            Sweetness::LessSugar => "微糖",
            Sweetness::FullSugar => "正常糖",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.key() == key)
    }

    pub fn is_low_sugar(self) -> bool {
        matches!(self, Sweetness::NoSugar | Sweetness::LowSugar)
    }
}

impl fmt::Display for Sweetness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Sweetness {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| ParseError::UnknownSweetness(s.to_string()))
    }
}

/// Nutrition for one large cup at one sweetness level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieEntry {
    pub total_kcal: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_grams: Option<f64>,
}

impl CalorieEntry {
    pub fn new(total_kcal: f64) -> Self {
        Self {
            total_kcal,
            sugar_grams: None,
        }
    }

    pub fn with_sugar(total_kcal: f64, sugar_grams: f64) -> Self {
        Self {
            total_kcal,
            sugar_grams: Some(sugar_grams),
        }
    }
}

/// A product as listed under its brand in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub caffeine: bool,
    #[serde(rename = "calories_large_cup")]
    pub calories: IndexMap<Sweetness, CalorieEntry>,
}

/// A brand and the products it sells, in menu order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BrandRecord {
    #[serde(default)]
    pub data_source: String,
    pub products: Vec<ProductEntry>,
}

/// The full brand → products dataset. Brand order is the order of the source data.
///
/// Deserializing goes through [`Catalogue::from_value`], so a catalogue read with
/// serde is validated the same way as one read with [`Catalogue::from_json_str`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Catalogue {
    pub brands: IndexMap<String, BrandRecord>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a brand, replacing any existing brand of the same name in place.
    pub fn with_brand(mut self, name: impl Into<String>, brand: BrandRecord) -> Self {
        self.brands.insert(name.into(), brand);
        self
    }

    pub fn brand(&self, name: &str) -> Option<&BrandRecord> {
        self.brands.get(name)
    }

    pub fn product_count(&self) -> usize {
        self.brands.values().map(|b| b.products.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.product_count() == 0
    }
}

/// A product flattened out of the catalogue together with its owning brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkRecord {
    pub name: String,
    pub brand: String,
    #[serde(rename = "dataSource")]
    pub data_source: String,
    pub caffeine: bool,
    #[serde(rename = "calories_large_cup")]
    pub calories: IndexMap<Sweetness, CalorieEntry>,
}

impl DrinkRecord {
    pub fn from_product(product: &ProductEntry, brand: &str, data_source: &str) -> Self {
        Self {
            name: product.name.clone(),
            brand: brand.to_string(),
            data_source: data_source.to_string(),
            caffeine: product.caffeine,
            calories: product.calories.clone(),
        }
    }

    /// Sweetness levels this drink can be ordered at, in source order.
    pub fn sweetness_levels(&self) -> Vec<Sweetness> {
        self.calories.keys().copied().collect()
    }

    pub fn offers(&self, sweetness: Sweetness) -> bool {
        self.calories.contains_key(&sweetness)
    }

    pub fn calorie_entry(&self, sweetness: Sweetness) -> Option<&CalorieEntry> {
        self.calories.get(&sweetness)
    }

    /// Mean `total_kcal` over every sweetness level the drink offers.
    pub fn mean_calories(&self) -> f64 {
        if self.calories.is_empty() {
            return 0.0;
        }
        let total: f64 = self.calories.values().map(|c| c.total_kcal).sum();
        total / self.calories.len() as f64
    }

    /// The key used to tell drinks apart across brands.
    pub fn identity(&self) -> (&str, &str) {
        (&self.name, &self.brand)
    }
}
