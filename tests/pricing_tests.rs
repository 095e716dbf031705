//! Tests for the Pricing Engine
//!
//! These tests verify:
//! - The worked scenarios for every pricing category
//! - Unset answers contribute nothing
//! - Section subtotals add up to the total

use archviz::engine::pricing::{price, LineKey, PriceCategory};
use archviz::{
    Answer, DetailTier, HeroAnimation, InvestmentType, Money, Section, SelectionState,
    SelectionStore,
};

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_a_default_state_is_free() {
    let store = SelectionStore::new();
    assert_eq!(store.total_price(), Money::ZERO);
}

#[test]
fn test_scenario_b_single_house_with_models_and_amenities() {
    let mut store = SelectionStore::new();
    store.set_investment_type(Some(InvestmentType::SingleHouse));
    store.set_has_building_models(Answer::Yes);
    store.set_amenities(true);

    assert_eq!(store.total_price(), Money::dollars(1800));
}

#[test]
fn test_scenario_c_apartments() {
    let mut store = SelectionStore::new();
    store.set_needs_apartment_models(Answer::Yes);
    store.set_overall_apartments(10);
    store.set_unique_apartments(3);
    store.set_average_rooms(2);

    let breakdown = store.breakdown();
    assert_eq!(breakdown.category(PriceCategory::Apartments), Money::dollars(1950));
    assert_eq!(breakdown.total(), Money::dollars(1950));
}

#[test]
fn test_scenario_d_environment() {
    let mut store = SelectionStore::new();
    store.set_has_environment_model(Answer::No);
    store.set_plot_detail(Some(DetailTier::Detailed));
    store.set_neighborhood_detail(Some(DetailTier::GrassTrees));

    let breakdown = store.breakdown();
    assert_eq!(breakdown.category(PriceCategory::Environment), Money::dollars(1590));
}

#[test]
fn test_scenario_e_website() {
    let mut store = SelectionStore::new();
    store.set_highlight_animation(true);
    store.set_filtering_sorting(true);
    store.set_languages(2);
    store.set_hero_animation(Some(HeroAnimation::TimeLapse));

    let breakdown = store.breakdown();
    assert_eq!(breakdown.category(PriceCategory::Website), Money::dollars(2820));
}

// =============================================================================
// Category Rules
// =============================================================================

#[test]
fn test_apartment_block_inactive_unless_yes() {
    let state = SelectionState {
        overall_apartments: 50,
        unique_apartments: 10,
        average_rooms: 5,
        ..SelectionState::default()
    };
    assert_eq!(price(&state).apartments, Money::ZERO);

    let state = SelectionState {
        needs_apartment_models: Answer::No,
        ..state
    };
    assert_eq!(price(&state).apartments, Money::ZERO);
}

#[test]
fn test_environment_block_only_when_creating_one() {
    let own = SelectionState {
        has_environment_model: Answer::Yes,
        plot_detail: Some(DetailTier::Photogrammetry),
        neighborhood_detail: Some(DetailTier::Photogrammetry),
        ..SelectionState::default()
    };
    assert_eq!(price(&own).environment, Money::ZERO);

    let created = SelectionState {
        has_environment_model: Answer::No,
        ..own
    };
    assert_eq!(price(&created).environment, Money::dollars(30 + 1230 + 1230));
}

#[test]
fn test_neighborhood_uses_plot_tier_table() {
    let tiers = [
        DetailTier::Basic,
        DetailTier::GrassTrees,
        DetailTier::Detailed,
        DetailTier::Photogrammetry,
    ];
    for tier in tiers {
        let plot = SelectionState {
            has_environment_model: Answer::No,
            plot_detail: Some(tier),
            ..SelectionState::default()
        };
        let neighborhood = SelectionState {
            has_environment_model: Answer::No,
            neighborhood_detail: Some(tier),
            ..SelectionState::default()
        };
        assert_eq!(price(&plot).total(), price(&neighborhood).total());
    }
}

#[test]
fn test_zero_languages_add_no_line() {
    let breakdown = price(&SelectionState::default());
    assert!(breakdown
        .amount_of(|key| matches!(key, LineKey::Languages { .. }))
        .is_none());
}

#[test]
fn test_close_up_hero_animation() {
    let state = SelectionState {
        hero_animation: Some(HeroAnimation::CloseUp),
        ..SelectionState::default()
    };
    assert_eq!(price(&state).total(), Money::dollars(600));
}

#[test]
fn test_multiple_houses_base_price() {
    let state = SelectionState {
        investment_type: Some(InvestmentType::MultipleHouse),
        has_building_models: Answer::No,
        ..SelectionState::default()
    };
    assert_eq!(price(&state).total(), Money::dollars(375 + 1350));
}

// =============================================================================
// Breakdown Consistency
// =============================================================================

#[test]
fn test_section_subtotals_sum_to_total() {
    let mut store = SelectionStore::new();
    store.set_investment_type(Some(InvestmentType::MultipleApartment));
    store.set_has_building_models(Answer::No);
    store.set_needs_apartment_models(Answer::Yes);
    store.set_overall_apartments(40);
    store.set_has_environment_model(Answer::No);
    store.set_plot_detail(Some(DetailTier::GrassTrees));
    store.set_languages(3);

    let breakdown = store.breakdown();
    let sum: Money = Section::ALL
        .iter()
        .map(|section| breakdown.section_subtotal(*section))
        .sum();
    assert_eq!(sum, breakdown.total());

    let items: Money = breakdown.items.iter().map(|item| item.amount).sum();
    assert_eq!(items, breakdown.total());
}

#[test]
fn test_breakdown_lines_follow_category_order() {
    let mut store = SelectionStore::new();
    store.set_hero_animation(Some(HeroAnimation::TimeLapse));
    store.set_amenities(true);
    store.set_investment_type(Some(InvestmentType::SingleHouse));

    let categories: Vec<PriceCategory> = store
        .breakdown()
        .items
        .iter()
        .map(|item| item.key.category())
        .collect();
    assert_eq!(
        categories,
        vec![PriceCategory::Investment, PriceCategory::Amenities, PriceCategory::Website]
    );
}
