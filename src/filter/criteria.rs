use crate::catalogue::Sweetness;
use crate::classifier::CalorieTier;
use serde::{Deserialize, Serialize};

/// The five independent filter constraints. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub brand: Option<String>,
    pub drink_type: Option<String>,
    pub sweetness: Option<Sweetness>,
    pub calorie_tier: Option<CalorieTier>,
    pub caffeine: Option<bool>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_drink_type(mut self, name: impl Into<String>) -> Self {
        self.drink_type = Some(name.into());
        self
    }

    pub fn with_sweetness(mut self, sweetness: Sweetness) -> Self {
        self.sweetness = Some(sweetness);
        self
    }

    pub fn with_calorie_tier(mut self, tier: CalorieTier) -> Self {
        self.calorie_tier = Some(tier);
        self
    }

    pub fn with_caffeine(mut self, caffeine: bool) -> Self {
        self.caffeine = Some(caffeine);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self == &Self::default()
    }
}

/// Filter values exactly as a form submits them: every field a string, empty for "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawFilterInput {
    pub brand: String,
    pub drink_type: String,
    pub sweetness: String,
    pub calorie_range: String,
    pub caffeine: String,
}

impl RawFilterInput {
    /// Converts form values into typed criteria.
    ///
    /// Brand and drink type pass through unchecked. Sweetness, calorie range and
    /// caffeine must be one of their known keys; anything else becomes "any".
    pub fn sanitize(&self) -> FilterCriteria {
        FilterCriteria {
            brand: non_empty(&self.brand),
            drink_type: non_empty(&self.drink_type),
            sweetness: self.sweetness.parse().ok(),
            calorie_tier: self.calorie_range.parse().ok(),
            caffeine: match self.caffeine.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
        }
    }
}

impl From<&RawFilterInput> for FilterCriteria {
    fn from(raw: &RawFilterInput) -> Self {
        raw.sanitize()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
