//! Tests for catalogue validation and the flattening accessors.
mod common;
use common::*;
use serde_json::json;
use tapioca::prelude::*;

#[test]
fn test_flatten_keeps_catalogue_order() {
    let catalogue = sample_catalogue();
    let drinks = flatten(&catalogue);

    assert_eq!(drinks.len(), catalogue.product_count());
    assert_eq!(drinks.len(), 6);
    assert_eq!(
        names(&drinks),
        vec!["珍珠奶茶", "綠茶", "檸檬汁", "青茶", "珍珠奶茶", "柳橙汁"]
    );
    assert!(drinks.iter().all(|d| !d.brand.is_empty()));
    assert_eq!(drinks[0].brand, "清心福全");
    assert_eq!(drinks[0].data_source, "清心福全官網");
    assert_eq!(drinks[3].brand, "五十嵐");
    assert_eq!(drinks[3].data_source, "五十嵐營養標示");
}

#[test]
fn test_flatten_preserves_sweetness_order() {
    let drinks = sample_drinks();
    let bubble = find(&drinks, "清心福全", "珍珠奶茶");
    assert_eq!(
        bubble.sweetness_levels(),
        vec![
            Sweetness::LowSugar,
            Sweetness::HalfSugar,
            Sweetness::LessSugar,
            Sweetness::FullSugar
        ]
    );
}

#[test]
fn test_brand_and_drink_type_names() {
    let catalogue = sample_catalogue();
    assert_eq!(brand_names(&catalogue), vec!["清心福全", "五十嵐", "迷客夏"]);
    assert_eq!(
        drink_type_names(&catalogue),
        vec!["柳橙汁", "檸檬汁", "珍珠奶茶", "綠茶", "青茶"]
    );
}

#[test]
fn test_drinks_by_brand() {
    let catalogue = sample_catalogue();
    let drinks = drinks_by_brand(&catalogue, "五十嵐");
    assert_eq!(names(&drinks), vec!["青茶", "珍珠奶茶", "柳橙汁"]);
    assert!(drinks.iter().all(|d| d.brand == "五十嵐"));

    assert!(drinks_by_brand(&catalogue, "迷客夏").is_empty());
    assert!(drinks_by_brand(&catalogue, "不存在").is_empty());
}

#[test]
fn test_empty_catalogue_flattens_to_nothing() {
    let catalogue = Catalogue::from_json_str("{}").unwrap();
    assert!(catalogue.is_empty());
    assert!(flatten(&catalogue).is_empty());
    assert!(drink_type_names(&catalogue).is_empty());
}

#[test]
fn test_rejects_non_object_root() {
    let err = Catalogue::from_json_str("[1, 2, 3]").unwrap_err();
    assert_eq!(err, CatalogueError::NotAnObject);
}

#[test]
fn test_rejects_invalid_json() {
    let err = Catalogue::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, CatalogueError::JsonParseError(_)));
}

#[test]
fn test_rejects_non_object_brand() {
    let err = Catalogue::from_value(json!({ "A": "oops" })).unwrap_err();
    match err {
        CatalogueError::InvalidBrandEntry { brand, message } => {
            assert_eq!(brand, "A");
            assert!(message.contains("a string"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_rejects_missing_products() {
    let err = Catalogue::from_value(json!({ "A": { "data_source": "x" } })).unwrap_err();
    assert_eq!(
        err,
        CatalogueError::MissingProducts {
            brand: "A".to_string()
        }
    );

    let err = Catalogue::from_value(json!({ "A": { "products": {} } })).unwrap_err();
    assert!(matches!(err, CatalogueError::MissingProducts { .. }));
}

#[test]
fn test_rejects_malformed_product() {
    let err = Catalogue::from_value(json!({
        "A": { "products": [ { "name": "Tea", "calories_large_cup": {} } ] }
    }))
    .unwrap_err();
    match err {
        CatalogueError::InvalidProduct { brand, index, message } => {
            assert_eq!(brand, "A");
            assert_eq!(index, 0);
            assert!(message.contains("caffeine"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_rejects_unknown_sweetness_key() {
    let err = Catalogue::from_value(json!({
        "A": { "products": [ {
            "name": "Tea",
            "caffeine": false,
            "calories_large_cup": { "extra_sugar_120": { "total_kcal": 300 } }
        } ] }
    }))
    .unwrap_err();
    assert_eq!(
        err,
        CatalogueError::UnknownSweetness {
            brand: "A".to_string(),
            drink: "Tea".to_string(),
            key: "extra_sugar_120".to_string(),
        }
    );
}

#[test]
fn test_rejects_drink_without_sweetness_levels() {
    let err = Catalogue::from_value(json!({
        "A": { "products": [ { "name": "Tea", "caffeine": false, "calories_large_cup": {} } ] }
    }))
    .unwrap_err();
    assert!(matches!(err, CatalogueError::NoSweetnessLevels { .. }));
}

#[test]
fn test_missing_data_source_defaults_to_empty() {
    let catalogue = Catalogue::from_value(json!({
        "A": { "products": [ {
            "name": "Tea",
            "caffeine": false,
            "calories_large_cup": { "full_sugar_100": { "total_kcal": 100 } }
        } ] }
    }))
    .unwrap();
    assert_eq!(flatten(&catalogue)[0].data_source, "");
}

#[test]
fn test_validate_programmatic_catalogue() {
    let valid = Catalogue::new().with_brand(
        "A",
        BrandRecord {
            data_source: String::new(),
            products: vec![ProductEntry {
                name: "Tea".to_string(),
                caffeine: true,
                calories: [(Sweetness::FullSugar, CalorieEntry::new(90.0))]
                    .into_iter()
                    .collect(),
            }],
        },
    );
    assert!(valid.validate().is_ok());

    let invalid = Catalogue::new().with_brand(
        "B",
        BrandRecord {
            data_source: String::new(),
            products: vec![ProductEntry {
                name: "Water".to_string(),
                caffeine: false,
                calories: Default::default(),
            }],
        },
    );
    assert!(matches!(
        invalid.validate(),
        Err(CatalogueError::NoSweetnessLevels { .. })
    ));
}

#[test]
fn test_catalogue_serializes_back_to_source_shape() {
    let catalogue = sample_catalogue();
    let json = serde_json::to_string(&catalogue).unwrap();
    assert!(json.starts_with("{\"清心福全\""));
    assert_eq!(Catalogue::from_json_str(&json).unwrap(), catalogue);
}

#[test]
fn test_serde_deserialize_rejects_drink_without_sweetness_levels() {
    let json = r#"{ "B": { "products": [ { "name": "T", "caffeine": true, "calories_large_cup": {} } ] } }"#;
    let err = serde_json::from_str::<Catalogue>(json).unwrap_err();
    assert!(err.to_string().contains("T"));
    assert!(Catalogue::from_json_str(json).is_err());
}

#[test]
fn test_serde_deserialize_matches_loader() {
    let catalogue: Catalogue = serde_json::from_str(CATALOGUE_JSON).unwrap();
    assert_eq!(catalogue, sample_catalogue());

    let drinks = flatten(&catalogue);
    let mut engine = RecommendationEngine::seeded(3);
    assert!(engine.uniform_pick(&drinks).is_some());
}
