//! Selection store
//!
//! Holds every value the user has chosen across the four sections. The store is the
//! single owner of [`SelectionState`]; UI sections receive it by reference from
//! `AppState` and go through the typed setters below, which keep the cross-field
//! invariants (`unique* <= overall*`) and clamp numeric input instead of failing.
//!
//! # Cross-field effects
//!
//! - Lowering `overall_buildings`/`overall_apartments` below the matching unique count
//!   lowers the unique count to match.
//! - Answering anything but "yes" to `needs_apartment_models` resets the three apartment
//!   numbers to their floor.
//! - Changing the investment type leaves building counts untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::pricing::{price, PriceBreakdown};
use crate::money::Money;
use crate::types::{
    Answer, DetailTier, DocumentationType, FileFormat, HeroAnimation, InvestmentType,
};

/// Ceiling for `overall_buildings`
pub const MAX_BUILDINGS: u32 = 100;
/// Ceiling for `overall_apartments`
pub const MAX_APARTMENTS: u32 = 100;
/// Ceiling for `average_rooms`
pub const MAX_ROOMS: u32 = 10;
/// Ceiling for `languages`
pub const MAX_LANGUAGES: u32 = 10;
/// Value counts start at and are reset to
pub const COUNT_FLOOR: u32 = 1;

/// All user-chosen configuration values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionState {
    // Buildings
    pub investment_type: Option<InvestmentType>,
    pub has_building_models: Answer,
    pub documentation_type: Option<DocumentationType>,
    pub amenities: bool,
    pub overall_buildings: u32,
    pub unique_buildings: u32,

    // Apartments
    pub needs_apartment_models: Answer,
    pub overall_apartments: u32,
    pub unique_apartments: u32,
    pub average_rooms: u32,

    // Environment
    pub has_environment_model: Answer,
    pub plot_detail: Option<DetailTier>,
    pub neighborhood_detail: Option<DetailTier>,
    pub file_format: Option<FileFormat>,

    // Website
    pub highlight_animation: bool,
    pub filtering_sorting: bool,
    pub languages: u32,
    pub hero_animation: Option<HeroAnimation>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            investment_type: None,
            has_building_models: Answer::Unset,
            documentation_type: None,
            amenities: false,
            overall_buildings: COUNT_FLOOR,
            unique_buildings: COUNT_FLOOR,
            needs_apartment_models: Answer::Unset,
            overall_apartments: COUNT_FLOOR,
            unique_apartments: COUNT_FLOOR,
            average_rooms: COUNT_FLOOR,
            has_environment_model: Answer::Unset,
            plot_detail: None,
            neighborhood_detail: None,
            file_format: None,
            highlight_animation: false,
            filtering_sorting: false,
            languages: 0,
            hero_animation: None,
        }
    }
}

/// Clamp arbitrary numeric input into `0..=max`
fn clamp_count(value: i64, max: u32) -> u32 {
    // max <= u32::MAX so the clamped value always fits
    value.clamp(0, i64::from(max)) as u32
}

/// Owner of the selection state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    state: SelectionState,
}

impl SelectionStore {
    /// Create a store with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from a raw state, routing numbers through the setters so the
    /// store's invariants hold regardless of the input.
    pub fn from_state(state: SelectionState) -> Self {
        let mut store = Self {
            state: SelectionState {
                overall_buildings: COUNT_FLOOR,
                unique_buildings: COUNT_FLOOR,
                overall_apartments: COUNT_FLOOR,
                unique_apartments: COUNT_FLOOR,
                average_rooms: COUNT_FLOOR,
                languages: 0,
                ..state.clone()
            },
        };
        store.set_overall_buildings(i64::from(state.overall_buildings));
        store.set_unique_buildings(i64::from(state.unique_buildings));
        if state.needs_apartment_models.is_yes() {
            store.set_overall_apartments(i64::from(state.overall_apartments));
            store.set_unique_apartments(i64::from(state.unique_apartments));
            store.set_average_rooms(i64::from(state.average_rooms));
        }
        store.set_languages(i64::from(state.languages));
        store
    }

    /// Read-only view of every field
    pub fn snapshot(&self) -> &SelectionState {
        &self.state
    }

    /// Reset every field to its default
    pub fn reset(&mut self) {
        debug!("Resetting all selections");
        self.state = SelectionState::default();
    }

    /// Itemized price of the current selections, recomputed on every call
    pub fn breakdown(&self) -> PriceBreakdown {
        price(&self.state)
    }

    /// Total price of the current selections
    pub fn total_price(&self) -> Money {
        self.breakdown().total()
    }

    // ------------------------------------------------------------------------
    // Buildings
    // ------------------------------------------------------------------------

    pub fn investment_type(&self) -> Option<InvestmentType> {
        self.state.investment_type
    }

    pub fn set_investment_type(&mut self, value: Option<InvestmentType>) {
        self.state.investment_type = value;
    }

    pub fn has_building_models(&self) -> Answer {
        self.state.has_building_models
    }

    pub fn set_has_building_models(&mut self, value: Answer) {
        self.state.has_building_models = value;
    }

    pub fn documentation_type(&self) -> Option<DocumentationType> {
        self.state.documentation_type
    }

    pub fn set_documentation_type(&mut self, value: Option<DocumentationType>) {
        self.state.documentation_type = value;
    }

    pub fn amenities(&self) -> bool {
        self.state.amenities
    }

    pub fn set_amenities(&mut self, value: bool) {
        self.state.amenities = value;
    }

    pub fn overall_buildings(&self) -> u32 {
        self.state.overall_buildings
    }

    /// Set the overall building count, clamped to `0..=100`. Lowers the unique count
    /// when it would exceed the new overall count.
    pub fn set_overall_buildings(&mut self, value: i64) {
        let overall = clamp_count(value, MAX_BUILDINGS);
        self.state.overall_buildings = overall;
        if self.state.unique_buildings > overall {
            debug!(overall, "Clamping unique buildings to overall count");
            self.state.unique_buildings = overall;
        }
    }

    pub fn unique_buildings(&self) -> u32 {
        self.state.unique_buildings
    }

    /// Set the unique building count, clamped to `0..=overall_buildings`
    pub fn set_unique_buildings(&mut self, value: i64) {
        self.state.unique_buildings = clamp_count(value, self.state.overall_buildings);
    }

    // ------------------------------------------------------------------------
    // Apartments
    // ------------------------------------------------------------------------

    pub fn needs_apartment_models(&self) -> Answer {
        self.state.needs_apartment_models
    }

    /// Answer the apartments question. Anything but "yes" resets the apartment
    /// numbers to their floor.
    pub fn set_needs_apartment_models(&mut self, value: Answer) {
        self.state.needs_apartment_models = value;
        if !value.is_yes() {
            self.state.overall_apartments = COUNT_FLOOR;
            self.state.unique_apartments = COUNT_FLOOR;
            self.state.average_rooms = COUNT_FLOOR;
        }
    }

    pub fn overall_apartments(&self) -> u32 {
        self.state.overall_apartments
    }

    /// Set the overall apartment count, clamped to `0..=100`. Lowers the unique count
    /// when it would exceed the new overall count.
    pub fn set_overall_apartments(&mut self, value: i64) {
        let overall = clamp_count(value, MAX_APARTMENTS);
        self.state.overall_apartments = overall;
        if self.state.unique_apartments > overall {
            debug!(overall, "Clamping unique apartments to overall count");
            self.state.unique_apartments = overall;
        }
    }

    pub fn unique_apartments(&self) -> u32 {
        self.state.unique_apartments
    }

    /// Set the unique apartment count, clamped to `0..=overall_apartments`
    pub fn set_unique_apartments(&mut self, value: i64) {
        self.state.unique_apartments = clamp_count(value, self.state.overall_apartments);
    }

    pub fn average_rooms(&self) -> u32 {
        self.state.average_rooms
    }

    /// Set the average room count, clamped to `0..=10`
    pub fn set_average_rooms(&mut self, value: i64) {
        self.state.average_rooms = clamp_count(value, MAX_ROOMS);
    }

    // ------------------------------------------------------------------------
    // Environment
    // ------------------------------------------------------------------------

    pub fn has_environment_model(&self) -> Answer {
        self.state.has_environment_model
    }

    pub fn set_has_environment_model(&mut self, value: Answer) {
        self.state.has_environment_model = value;
    }

    pub fn plot_detail(&self) -> Option<DetailTier> {
        self.state.plot_detail
    }

    pub fn set_plot_detail(&mut self, value: Option<DetailTier>) {
        self.state.plot_detail = value;
    }

    pub fn neighborhood_detail(&self) -> Option<DetailTier> {
        self.state.neighborhood_detail
    }

    pub fn set_neighborhood_detail(&mut self, value: Option<DetailTier>) {
        self.state.neighborhood_detail = value;
    }

    pub fn file_format(&self) -> Option<FileFormat> {
        self.state.file_format
    }

    pub fn set_file_format(&mut self, value: Option<FileFormat>) {
        self.state.file_format = value;
    }

    // ------------------------------------------------------------------------
    // Website
    // ------------------------------------------------------------------------

    pub fn highlight_animation(&self) -> bool {
        self.state.highlight_animation
    }

    pub fn set_highlight_animation(&mut self, value: bool) {
        self.state.highlight_animation = value;
    }

    pub fn filtering_sorting(&self) -> bool {
        self.state.filtering_sorting
    }

    pub fn set_filtering_sorting(&mut self, value: bool) {
        self.state.filtering_sorting = value;
    }

    pub fn languages(&self) -> u32 {
        self.state.languages
    }

    /// Set the number of website languages, clamped to `0..=10`
    pub fn set_languages(&mut self, value: i64) {
        self.state.languages = clamp_count(value, MAX_LANGUAGES);
    }

    pub fn hero_animation(&self) -> Option<HeroAnimation> {
        self.state.hero_animation
    }

    pub fn set_hero_animation(&mut self, value: Option<HeroAnimation>) {
        self.state.hero_animation = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unset_or_floor() {
        let store = SelectionStore::new();
        assert_eq!(store.investment_type(), None);
        assert_eq!(store.has_building_models(), Answer::Unset);
        assert_eq!(store.overall_buildings(), COUNT_FLOOR);
        assert_eq!(store.unique_buildings(), COUNT_FLOOR);
        assert_eq!(store.languages(), 0);
        assert_eq!(store.total_price(), Money::ZERO);
    }

    #[test]
    fn test_overall_buildings_clamps_range() {
        let mut store = SelectionStore::new();
        store.set_overall_buildings(250);
        assert_eq!(store.overall_buildings(), MAX_BUILDINGS);
        store.set_overall_buildings(-4);
        assert_eq!(store.overall_buildings(), 0);
    }

    #[test]
    fn test_lowering_overall_lowers_unique() {
        let mut store = SelectionStore::new();
        store.set_overall_buildings(20);
        store.set_unique_buildings(12);
        store.set_overall_buildings(5);
        assert_eq!(store.unique_buildings(), 5);

        store.set_overall_buildings(30);
        assert_eq!(store.unique_buildings(), 5, "raising overall never raises unique");
    }

    #[test]
    fn test_unique_cannot_exceed_overall() {
        let mut store = SelectionStore::new();
        store.set_overall_apartments(8);
        store.set_unique_apartments(50);
        assert_eq!(store.unique_apartments(), 8);
    }

    #[test]
    fn test_declining_apartments_resets_numbers() {
        let mut store = SelectionStore::new();
        store.set_needs_apartment_models(Answer::Yes);
        store.set_overall_apartments(40);
        store.set_unique_apartments(6);
        store.set_average_rooms(4);

        store.set_needs_apartment_models(Answer::No);
        assert_eq!(store.overall_apartments(), COUNT_FLOOR);
        assert_eq!(store.unique_apartments(), COUNT_FLOOR);
        assert_eq!(store.average_rooms(), COUNT_FLOOR);
    }

    #[test]
    fn test_investment_change_keeps_building_counts() {
        let mut store = SelectionStore::new();
        store.set_investment_type(Some(InvestmentType::MultipleHouse));
        store.set_overall_buildings(12);
        store.set_unique_buildings(3);
        store.set_investment_type(Some(InvestmentType::SingleHouse));
        assert_eq!(store.overall_buildings(), 12);
        assert_eq!(store.unique_buildings(), 3);
    }

    #[test]
    fn test_rooms_and_languages_ceiling() {
        let mut store = SelectionStore::new();
        store.set_average_rooms(11);
        store.set_languages(99);
        assert_eq!(store.average_rooms(), MAX_ROOMS);
        assert_eq!(store.languages(), MAX_LANGUAGES);
    }

    #[test]
    fn test_from_state_restores_invariants() {
        let state = SelectionState {
            overall_buildings: 4,
            unique_buildings: 9,
            languages: 40,
            ..SelectionState::default()
        };
        let store = SelectionStore::from_state(state);
        assert_eq!(store.overall_buildings(), 4);
        assert_eq!(store.unique_buildings(), 4);
        assert_eq!(store.languages(), MAX_LANGUAGES);
    }

    #[test]
    fn test_reset() {
        let mut store = SelectionStore::new();
        store.set_amenities(true);
        store.set_languages(3);
        store.reset();
        assert_eq!(store.snapshot(), &SelectionState::default());
    }

    #[test]
    fn test_state_json_uses_camel_case() {
        let json = serde_json::to_string(SelectionStore::new().snapshot()).unwrap();
        assert!(json.contains("\"investmentType\":null"));
        assert!(json.contains("\"hasBuildingModels\":null"));
        assert!(json.contains("\"overallBuildings\":1"));
    }
}
