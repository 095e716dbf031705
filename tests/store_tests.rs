//! Tests for the Selection Store
//!
//! These tests verify:
//! - Defaults of a fresh store
//! - Clamping of numeric setters
//! - Dependent ceilings (unique counts never exceed overall counts)
//! - Reset and raw-state loading

use archviz::store::{MAX_APARTMENTS, MAX_BUILDINGS, MAX_LANGUAGES, MAX_ROOMS};
use archviz::{Answer, InvestmentType, SelectionState, SelectionStore};

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_store_defaults() {
    let store = SelectionStore::new();
    assert!(store.investment_type().is_none());
    assert_eq!(store.has_building_models(), Answer::Unset);
    assert_eq!(store.overall_buildings(), 1);
    assert_eq!(store.unique_buildings(), 1);
    assert_eq!(store.average_rooms(), 1);
    assert_eq!(store.languages(), 0);
    assert!(!store.amenities());
}

// =============================================================================
// Clamping
// =============================================================================

#[test]
fn test_counts_clamped_to_ceiling() {
    let mut store = SelectionStore::new();
    store.set_overall_buildings(1_000);
    store.set_average_rooms(99);
    store.set_languages(42);
    store.set_needs_apartment_models(Answer::Yes);
    store.set_overall_apartments(500);

    assert_eq!(store.overall_buildings(), MAX_BUILDINGS);
    assert_eq!(store.average_rooms(), MAX_ROOMS);
    assert_eq!(store.languages(), MAX_LANGUAGES);
    assert_eq!(store.overall_apartments(), MAX_APARTMENTS);
}

#[test]
fn test_negative_counts_clamped_to_zero() {
    let mut store = SelectionStore::new();
    store.set_overall_buildings(-3);
    store.set_languages(-1);
    assert_eq!(store.overall_buildings(), 0);
    assert_eq!(store.languages(), 0);
}

#[test]
fn test_unique_buildings_capped_by_overall() {
    let mut store = SelectionStore::new();
    store.set_overall_buildings(5);
    store.set_unique_buildings(9);
    assert_eq!(store.unique_buildings(), 5);
}

#[test]
fn test_lowering_overall_lowers_unique() {
    let mut store = SelectionStore::new();
    store.set_overall_buildings(20);
    store.set_unique_buildings(15);
    store.set_overall_buildings(8);
    assert_eq!(store.unique_buildings(), 8);

    store.set_needs_apartment_models(Answer::Yes);
    store.set_overall_apartments(30);
    store.set_unique_apartments(30);
    store.set_overall_apartments(12);
    assert_eq!(store.unique_apartments(), 12);
}

#[test]
fn test_changing_investment_type_keeps_building_counts() {
    let mut store = SelectionStore::new();
    store.set_investment_type(Some(InvestmentType::MultipleHouse));
    store.set_overall_buildings(7);
    store.set_investment_type(Some(InvestmentType::SingleHouse));
    assert_eq!(store.overall_buildings(), 7);
}

// =============================================================================
// Apartments Question
// =============================================================================

#[test]
fn test_declining_apartments_resets_numbers() {
    let mut store = SelectionStore::new();
    store.set_needs_apartment_models(Answer::Yes);
    store.set_overall_apartments(25);
    store.set_unique_apartments(4);
    store.set_average_rooms(3);

    store.set_needs_apartment_models(Answer::No);
    assert_eq!(store.overall_apartments(), 1);
    assert_eq!(store.unique_apartments(), 1);
    assert_eq!(store.average_rooms(), 1);
}

// =============================================================================
// Reset and Loading
// =============================================================================

#[test]
fn test_reset_restores_defaults() {
    let mut store = SelectionStore::new();
    store.set_amenities(true);
    store.set_languages(4);
    store.reset();
    assert_eq!(store, SelectionStore::new());
}

#[test]
fn test_from_state_enforces_invariants() {
    let raw = SelectionState {
        overall_buildings: 300,
        unique_buildings: 400,
        needs_apartment_models: Answer::Yes,
        overall_apartments: 5,
        unique_apartments: 9,
        languages: 11,
        ..SelectionState::default()
    };
    let store = SelectionStore::from_state(raw);
    assert_eq!(store.overall_buildings(), MAX_BUILDINGS);
    assert_eq!(store.unique_buildings(), MAX_BUILDINGS);
    assert_eq!(store.unique_apartments(), 5);
    assert_eq!(store.languages(), MAX_LANGUAGES);
}

#[test]
fn test_state_json_uses_camel_case_and_null() {
    let json = serde_json::to_value(SelectionState::default()).unwrap();
    assert!(json.get("overallBuildings").is_some());
    assert!(json["hasBuildingModels"].is_null());
    assert!(json["investmentType"].is_null());
}

#[test]
fn test_partial_state_json_takes_defaults() {
    let state: SelectionState =
        serde_json::from_str(r#"{ "investmentType": "single_house", "amenities": true }"#).unwrap();
    assert_eq!(state.investment_type, Some(InvestmentType::SingleHouse));
    assert!(state.amenities);
    assert_eq!(state.overall_buildings, 1);
    assert_eq!(state.has_building_models, Answer::Unset);
}
