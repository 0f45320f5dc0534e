use thiserror::Error;

/// Errors raised when a catalogue value does not have the expected structure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogueError {
    #[error("Failed to parse catalogue JSON: {0}")]
    JsonParseError(String),

    #[error("Catalogue root must be an object mapping brand names to brand entries")]
    NotAnObject,

    #[error("Brand '{brand}' has an invalid entry: {message}")]
    InvalidBrandEntry { brand: String, message: String },

    #[error("Brand '{brand}' is missing its 'products' array")]
    MissingProducts { brand: String },

    #[error("Product #{index} of brand '{brand}' is invalid: {message}")]
    InvalidProduct {
        brand: String,
        index: usize,
        message: String,
    },

    #[error("Drink '{drink}' of brand '{brand}' uses an unknown sweetness level '{key}'")]
    UnknownSweetness {
        brand: String,
        drink: String,
        key: String,
    },

    #[error("Drink '{drink}' of brand '{brand}' has no sweetness levels")]
    NoSweetnessLevels { brand: String, drink: String },
}

/// Errors from strict parsing of enumerated option strings at the input boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown sweetness level '{0}'")]
    UnknownSweetness(String),

    #[error("Unknown calorie tier '{0}', expected one of: low, medium, high")]
    UnknownCalorieTier(String),

    #[error("Unknown sort key '{0}', expected one of: name, brand, calories, caffeine")]
    UnknownSortKey(String),

    #[error("Unknown sort order '{0}', expected 'asc' or 'desc'")]
    UnknownSortOrder(String),
}
