use super::model::{BrandRecord, Catalogue, CalorieEntry, ProductEntry, Sweetness};
use crate::error::CatalogueError;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Product shape as it appears on the wire, before sweetness keys are checked.
#[derive(Deserialize)]
struct RawProduct {
    name: String,
    caffeine: bool,
    calories_large_cup: IndexMap<String, CalorieEntry>,
}

impl Catalogue {
    /// Parses and validates a catalogue from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogueError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| CatalogueError::JsonParseError(e.to_string()))?;
        Self::from_value(value)
    }

    /// Validates an already-parsed JSON value and converts it into a catalogue.
    ///
    /// Every brand must be an object with a `products` array, every product must
    /// carry at least one sweetness level, and every sweetness key must be one of
    /// the five known levels. The first violation found is returned.
    pub fn from_value(value: Value) -> Result<Self, CatalogueError> {
        let Value::Object(root) = value else {
            return Err(CatalogueError::NotAnObject);
        };

        let mut brands = IndexMap::with_capacity(root.len());
        for (brand_name, entry) in root {
            let record = parse_brand(&brand_name, entry)?;
            brands.insert(brand_name, record);
        }

        let catalogue = Catalogue { brands };
        debug!(
            brands = catalogue.brands.len(),
            products = catalogue.product_count(),
            "catalogue validated"
        );
        Ok(catalogue)
    }

    /// Checks the invariants of a catalogue built in code rather than parsed.
    pub fn validate(&self) -> Result<(), CatalogueError> {
        for (brand, record) in &self.brands {
            for product in &record.products {
                if product.calories.is_empty() {
                    return Err(CatalogueError::NoSweetnessLevels {
                        brand: brand.clone(),
                        drink: product.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Catalogue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Catalogue::from_value(value).map_err(serde::de::Error::custom)
    }
}

fn parse_brand(brand: &str, entry: Value) -> Result<BrandRecord, CatalogueError> {
    let Value::Object(mut fields) = entry else {
        return Err(CatalogueError::InvalidBrandEntry {
            brand: brand.to_string(),
            message: format!("expected an object, found {}", type_name(&entry)),
        });
    };

    let data_source = match fields.remove("data_source") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(CatalogueError::InvalidBrandEntry {
                brand: brand.to_string(),
                message: format!("'data_source' must be a string, found {}", type_name(&other)),
            });
        }
    };

    let products = match fields.remove("products") {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(CatalogueError::MissingProducts {
                brand: brand.to_string(),
            });
        }
    };

    let products = products
        .into_iter()
        .enumerate()
        .map(|(index, item)| parse_product(brand, index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BrandRecord {
        data_source,
        products,
    })
}

fn parse_product(brand: &str, index: usize, item: Value) -> Result<ProductEntry, CatalogueError> {
    let raw: RawProduct =
        serde_json::from_value(item).map_err(|e| CatalogueError::InvalidProduct {
            brand: brand.to_string(),
            index,
            message: e.to_string(),
        })?;

    if raw.calories_large_cup.is_empty() {
        return Err(CatalogueError::NoSweetnessLevels {
            brand: brand.to_string(),
            drink: raw.name,
        });
    }

    let mut calories = IndexMap::with_capacity(raw.calories_large_cup.len());
    for (key, entry) in raw.calories_large_cup {
        let level = Sweetness::from_key(&key).ok_or_else(|| CatalogueError::UnknownSweetness {
            brand: brand.to_string(),
            drink: raw.name.clone(),
            key: key.clone(),
        })?;
        calories.insert(level, entry);
    }

    Ok(ProductEntry {
        name: raw.name,
        caffeine: raw.caffeine,
        calories,
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
