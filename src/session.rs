use crate::catalogue::{Catalogue, DrinkRecord};
use crate::filter::{FilterCriteria, apply_filters};
use crate::recommend::{Recommendation, RecommendationEngine};
use crate::sort::{SortKey, SortOrder, sorted};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Suffix appended to a brand name when searching a map provider for its shops.
pub const STORE_SEARCH_SUFFIX: &str = "手搖飲 飲料店";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Recommendation,
    Encyclopedia,
    Map,
}

/// The query handed to the map provider to find shops of `brand`.
pub fn store_search_query(brand: &str) -> String {
    format!("{brand} {STORE_SEARCH_SUFFIX}")
}

/// State of one user's browsing session over a shared, read-only catalogue.
///
/// All engine calls stay pure; the session only remembers what the user chose.
#[derive(Debug, Clone)]
pub struct Session<'c> {
    catalogue: &'c Catalogue,
    pub view: View,
    pub filters: FilterCriteria,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub current: Option<Recommendation>,
}

impl<'c> Session<'c> {
    pub fn new(catalogue: &'c Catalogue) -> Self {
        Self {
            catalogue,
            view: View::default(),
            filters: FilterCriteria::default(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            current: None,
        }
    }

    pub fn catalogue(&self) -> &'c Catalogue {
        self.catalogue
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    /// Drinks matching the current filters, in catalogue order.
    pub fn candidates(&self) -> Vec<DrinkRecord> {
        apply_filters(self.catalogue, &self.filters)
    }

    /// Drinks matching the current filters, in the current sort order.
    pub fn encyclopedia(&self) -> Vec<DrinkRecord> {
        sorted(self.candidates(), self.sort_key, self.sort_order)
    }

    /// Replaces the current recommendation with a fresh uniform pick over the
    /// filtered drinks. Clears it when nothing matches.
    pub fn recommend<R: Rng>(
        &mut self,
        engine: &mut RecommendationEngine<R>,
    ) -> Option<&Recommendation> {
        self.current = engine.uniform_pick(&self.candidates());
        self.current.as_ref()
    }

    /// Switches to the map view and returns the store search for the current
    /// pick's brand. Does nothing without a current recommendation.
    pub fn find_store(&mut self) -> Option<String> {
        let brand = &self.current.as_ref()?.drink.brand;
        let query = store_search_query(brand);
        self.view = View::Map;
        Some(query)
    }
}
