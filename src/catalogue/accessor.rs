use super::model::{Catalogue, DrinkRecord};
use itertools::Itertools;

/// Flattens the catalogue into one drink record per product.
///
/// Brands come out in catalogue order, products in menu order within each brand.
pub fn flatten(catalogue: &Catalogue) -> Vec<DrinkRecord> {
    catalogue
        .brands
        .iter()
        .flat_map(|(brand, record)| {
            record
                .products
                .iter()
                .map(move |product| DrinkRecord::from_product(product, brand, &record.data_source))
        })
        .collect()
}

/// Brand names in catalogue order.
pub fn brand_names(catalogue: &Catalogue) -> Vec<String> {
    catalogue.brands.keys().cloned().collect()
}

/// Distinct product names across all brands, sorted ascending.
pub fn drink_type_names(catalogue: &Catalogue) -> Vec<String> {
    catalogue
        .brands
        .values()
        .flat_map(|record| record.products.iter().map(|p| p.name.clone()))
        .unique()
        .sorted()
        .collect()
}

/// Flattened drinks of a single brand; empty when the brand is unknown.
pub fn drinks_by_brand(catalogue: &Catalogue, brand: &str) -> Vec<DrinkRecord> {
    catalogue
        .brand(brand)
        .map(|record| {
            record
                .products
                .iter()
                .map(|product| DrinkRecord::from_product(product, brand, &record.data_source))
                .collect()
        })
        .unwrap_or_default()
}
