//! # Tapioca - Bubble-Tea Catalogue and Recommendation Engine
//!
//! **Tapioca** browses a static nutrition dataset of bubble-tea drinks, filters and
//! sorts it, and hands out randomized recommendations, either uniformly or leaning
//! towards a user's preferences.
//!
//! ## Core Workflow
//!
//! The engine never performs I/O. It consumes a catalogue that has already been
//! fetched, and returns plain data. The primary workflow is:
//!
//! 1.  **Load the Catalogue**: Parse the dataset JSON with `Catalogue::from_json_str`.
//!     Structurally invalid data is rejected with a `CatalogueError`.
//! 2.  **Filter**: Describe the constraints with `FilterCriteria` (or sanitize raw form
//!     values through `RawFilterInput`) and call `apply_filters`.
//! 3.  **Browse or Pick**: Either order the result with `sort_drinks`, or hand it to a
//!     `RecommendationEngine` for a uniform, weighted or daily pick.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tapioca::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = std::fs::read_to_string("data/drinks.json")?;
//!     let catalogue = Catalogue::from_json_str(&json)?;
//!
//!     // Caffeine-free drinks that stay under 200 kcal at half sugar.
//!     let criteria = FilterCriteria::new()
//!         .with_caffeine(false)
//!         .with_sweetness(Sweetness::HalfSugar)
//!         .with_calorie_tier(CalorieTier::Low);
//!     let drinks = apply_filters(&catalogue, &criteria);
//!
//!     let mut engine = RecommendationEngine::seeded(7);
//!     let preferences = Preferences {
//!         health_conscious: true,
//!         ..Preferences::default()
//!     };
//!
//!     match engine.weighted_pick(&drinks, &preferences) {
//!         Some(pick) => println!(
//!             "-> {} / {} at {} ({} kcal): {}",
//!             pick.drink.brand,
//!             pick.drink.name,
//!             pick.sweetness.label(),
//!             pick.calories(),
//!             pick.reason.as_deref().unwrap_or("")
//!         ),
//!         None => println!("-> Nothing matches these filters."),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod catalogue;
pub mod classifier;
pub mod display;
pub mod error;
pub mod filter;
pub mod prelude;
pub mod recommend;
pub mod session;
pub mod sort;
