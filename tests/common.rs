//! Common test utilities for building catalogues and drinks.
use tapioca::prelude::*;

/// A small two-brand catalogue plus one brand with an empty menu.
///
/// Full-sugar calories: 清心福全 珍珠奶茶 650, 綠茶 120, 檸檬汁 210;
/// 五十嵐 青茶 200, 珍珠奶茶 401, 柳橙汁 250.
#[allow(dead_code)]
pub const CATALOGUE_JSON: &str = r#"{
    "清心福全": {
        "data_source": "清心福全官網",
        "products": [
            {
                "name": "珍珠奶茶",
                "caffeine": true,
                "calories_large_cup": {
                    "low_sugar_40": { "total_kcal": 500, "sugar_grams": 20 },
                    "half_sugar_60": { "total_kcal": 550, "sugar_grams": 30 },
                    "less_sugar_80": { "total_kcal": 600, "sugar_grams": 40 },
                    "full_sugar_100": { "total_kcal": 650, "sugar_grams": 50 }
                }
            },
            {
                "name": "綠茶",
                "caffeine": true,
                "calories_large_cup": {
                    "no_sugar_0": { "total_kcal": 0 },
                    "low_sugar_40": { "total_kcal": 40, "sugar_grams": 10 },
                    "half_sugar_60": { "total_kcal": 60, "sugar_grams": 15 },
                    "less_sugar_80": { "total_kcal": 80, "sugar_grams": 20 },
                    "full_sugar_100": { "total_kcal": 120, "sugar_grams": 30 }
                }
            },
            {
                "name": "檸檬汁",
                "caffeine": false,
                "calories_large_cup": {
                    "half_sugar_60": { "total_kcal": 150 },
                    "less_sugar_80": { "total_kcal": 180 },
                    "full_sugar_100": { "total_kcal": 210 }
                }
            }
        ]
    },
    "五十嵐": {
        "data_source": "五十嵐營養標示",
        "products": [
            {
                "name": "青茶",
                "caffeine": true,
                "calories_large_cup": {
                    "no_sugar_0": { "total_kcal": 0 },
                    "full_sugar_100": { "total_kcal": 200 }
                }
            },
            {
                "name": "珍珠奶茶",
                "caffeine": true,
                "calories_large_cup": {
                    "half_sugar_60": { "total_kcal": 380 },
                    "full_sugar_100": { "total_kcal": 401 }
                }
            },
            {
                "name": "柳橙汁",
                "caffeine": false,
                "calories_large_cup": {
                    "full_sugar_100": { "total_kcal": 250 }
                }
            }
        ]
    },
    "迷客夏": {
        "data_source": "迷客夏",
        "products": []
    }
}"#;

#[allow(dead_code)]
pub fn sample_catalogue() -> Catalogue {
    Catalogue::from_json_str(CATALOGUE_JSON).unwrap()
}

#[allow(dead_code)]
pub fn sample_drinks() -> Vec<DrinkRecord> {
    flatten(&sample_catalogue())
}

/// Builds a drink directly, bypassing the catalogue.
#[allow(dead_code)]
pub fn drink(name: &str, brand: &str, caffeine: bool, levels: &[(Sweetness, f64)]) -> DrinkRecord {
    DrinkRecord {
        name: name.to_string(),
        brand: brand.to_string(),
        data_source: String::new(),
        caffeine,
        calories: levels
            .iter()
            .map(|(level, kcal)| (*level, CalorieEntry::new(*kcal)))
            .collect(),
    }
}

/// Finds a drink by brand and name in a flattened list.
#[allow(dead_code)]
pub fn find<'a>(drinks: &'a [DrinkRecord], brand: &str, name: &str) -> &'a DrinkRecord {
    drinks
        .iter()
        .find(|d| d.brand == brand && d.name == name)
        .unwrap()
}

#[allow(dead_code)]
pub fn names(drinks: &[DrinkRecord]) -> Vec<&str> {
    drinks.iter().map(|d| d.name.as_str()).collect()
}
