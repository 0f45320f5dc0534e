//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the tapioca
//! crate, so that callers can get going with a single `use tapioca::prelude::*;`.

// Catalogue model and accessors
pub use crate::catalogue::{
    BrandRecord, Catalogue, CalorieEntry, DrinkRecord, ProductEntry, Sweetness, brand_names,
    drink_type_names, drinks_by_brand, flatten,
};

// Classification
pub use crate::classifier::{CalorieTier, calories_at, classify, sugar_grams_at};

// Filtering and sorting
pub use crate::filter::{
    FilterCriteria, FilterOptions, RawFilterInput, apply_filters, filter_options,
};
pub use crate::sort::{SortKey, SortOrder, sort_drinks, sorted};

// Recommendation
pub use crate::recommend::{MatchReason, Preferences, Recommendation, RecommendationEngine};

// Session and display
pub use crate::display::DrinkCard;
pub use crate::session::{Session, View, store_search_query};

// Error types
pub use crate::error::{CatalogueError, ParseError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
