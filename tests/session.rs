//! Tests for session state driving the engine end to end.
mod common;
use common::*;
use tapioca::prelude::*;

#[test]
fn test_new_session_defaults() {
    let catalogue = sample_catalogue();
    let session = Session::new(&catalogue);
    assert_eq!(session.view, View::Recommendation);
    assert!(session.filters.is_unconstrained());
    assert_eq!(session.sort_key, SortKey::Name);
    assert_eq!(session.sort_order, SortOrder::Ascending);
    assert!(session.current.is_none());
    assert_eq!(session.candidates().len(), 6);
}

#[test]
fn test_encyclopedia_filters_then_sorts() {
    let catalogue = sample_catalogue();
    let mut session = Session::new(&catalogue);
    session.set_view(View::Encyclopedia);
    session.set_filters(FilterCriteria::new().with_caffeine(true));
    session.set_sort_key(SortKey::Calories);
    session.toggle_sort_order();

    let listing = session.encyclopedia();
    let kcal: Vec<f64> = listing
        .iter()
        .map(|d| calories_at(d, Sweetness::FullSugar))
        .collect();
    assert_eq!(kcal, vec![650.0, 401.0, 200.0, 120.0]);

    session.toggle_sort_order();
    assert_eq!(names(&session.encyclopedia()), vec!["綠茶", "青茶", "珍珠奶茶", "珍珠奶茶"]);
}

#[test]
fn test_recommend_uses_filtered_candidates() {
    let catalogue = sample_catalogue();
    let mut session = Session::new(&catalogue);
    session.set_filters(FilterCriteria::new().with_brand("五十嵐").with_caffeine(false));

    let mut engine = RecommendationEngine::seeded(21);
    let pick = session.recommend(&mut engine).unwrap();
    assert_eq!(pick.drink.name, "柳橙汁");
    assert_eq!(pick.sweetness, Sweetness::FullSugar);
    assert!(session.current.is_some());
}

#[test]
fn test_recommend_clears_current_when_nothing_matches() {
    let catalogue = sample_catalogue();
    let mut session = Session::new(&catalogue);
    let mut engine = RecommendationEngine::seeded(22);
    assert!(session.recommend(&mut engine).is_some());

    session.set_filters(FilterCriteria::new().with_brand("迷客夏"));
    assert!(session.recommend(&mut engine).is_none());
    assert!(session.current.is_none());
}

#[test]
fn test_find_store_switches_to_map() {
    let catalogue = sample_catalogue();
    let mut session = Session::new(&catalogue);
    assert_eq!(session.find_store(), None);
    assert_eq!(session.view, View::Recommendation);

    session.set_filters(FilterCriteria::new().with_brand("清心福全"));
    let mut engine = RecommendationEngine::seeded(23);
    session.recommend(&mut engine);

    assert_eq!(
        session.find_store().as_deref(),
        Some("清心福全 手搖飲 飲料店")
    );
    assert_eq!(session.view, View::Map);
}

#[test]
fn test_sessions_share_one_catalogue() {
    let catalogue = sample_catalogue();
    let mut first = Session::new(&catalogue);
    let second = Session::new(&catalogue);
    first.set_filters(FilterCriteria::new().with_caffeine(false));

    assert_eq!(first.candidates().len(), 2);
    assert_eq!(second.candidates().len(), 6);
    assert_eq!(first.catalogue(), second.catalogue());
}
