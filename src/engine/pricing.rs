//! Pricing Engine
//!
//! Translates a [`SelectionState`] snapshot into an itemized [`PriceBreakdown`].
//!
//! # Price Rules
//!
//! | Category      | Active when                | Contribution |
//! |---------------|----------------------------|--------------|
//! | Investment    | investment type chosen     | 450 / 375 / 750 / 750 |
//! | Documentation | 3D-model question answered | no models: 1350, has models: 1050 |
//! | Amenities     | amenities on               | 300 |
//! | Apartments    | apartment models needed    | 300 + 15/apartment + 300/unique + 300/room |
//! | Environment   | no environment model       | 30 + plot tier + neighborhood tier |
//! | Website       | always                     | highlight 60, filters 660, 450/lang, hero |
//!
//! Plot and neighborhood detail share one tier table: basic 0, grass & trees 630,
//! detailed 930, photogrammetry 1230. The documentation type and file format are
//! informational and never priced. Hero animation: time-lapse 1200, close-up 600.
//!
//! # Design
//!
//! - **Pure logic**: no I/O, no caching; the store calls [`price`] on every read
//! - **Exhaustive**: every option set is a closed enum matched without wildcards
//! - **Itemized**: each contribution is a [`LineItem`] so renderers never recompute figures

use std::fmt;

use serde::Serialize;

use crate::money::Money;
use crate::store::SelectionState;
use crate::types::{DetailTier, HeroAnimation, InvestmentType, Section};

// ============================================================================
// Price Tables
// ============================================================================

/// Flat surcharge for additional 3D amenities
pub const AMENITIES_PRICE: Money = Money::dollars(300);
/// Base fee for 3D apartment representations
pub const APARTMENT_MODELS_PRICE: Money = Money::dollars(300);
/// Price per apartment in the building
pub const PER_APARTMENT_PRICE: Money = Money::dollars(15);
/// Price per unique apartment layout
pub const PER_UNIQUE_APARTMENT_PRICE: Money = Money::dollars(300);
/// Price per average room
pub const PER_ROOM_PRICE: Money = Money::dollars(300);
/// Base fee for creating an environment model
pub const ENVIRONMENT_CREATION_PRICE: Money = Money::dollars(30);
/// Website highlight animation surcharge
pub const HIGHLIGHT_ANIMATION_PRICE: Money = Money::dollars(60);
/// Website filtering/sorting surcharge
pub const FILTERING_SORTING_PRICE: Money = Money::dollars(660);
/// Price per website language
pub const PER_LANGUAGE_PRICE: Money = Money::dollars(450);

/// Base price of an investment type
pub const fn investment_price(investment: InvestmentType) -> Money {
    match investment {
        InvestmentType::SingleHouse => Money::dollars(450),
        InvestmentType::MultipleHouse => Money::dollars(375),
        InvestmentType::SingleApartment => Money::dollars(750),
        InvestmentType::MultipleApartment => Money::dollars(750),
    }
}

/// Documentation/model fee: creating models from scratch costs more than
/// documenting existing ones
pub const fn model_fee(has_models: bool) -> Money {
    if has_models {
        Money::dollars(1050)
    } else {
        Money::dollars(1350)
    }
}

/// Surcharge of an environment detail tier (plot and neighborhood alike)
pub const fn detail_tier_price(tier: DetailTier) -> Money {
    match tier {
        DetailTier::Basic => Money::dollars(0),
        DetailTier::GrassTrees => Money::dollars(630),
        DetailTier::Detailed => Money::dollars(930),
        DetailTier::Photogrammetry => Money::dollars(1230),
    }
}

/// Surcharge of a hero animation
pub const fn hero_animation_price(animation: HeroAnimation) -> Money {
    match animation {
        HeroAnimation::TimeLapse => Money::dollars(1200),
        HeroAnimation::CloseUp => Money::dollars(600),
    }
}

// ============================================================================
// Breakdown Types
// ============================================================================

/// Pricing category, in the order categories are summed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceCategory {
    Investment,
    Documentation,
    Amenities,
    Apartments,
    Environment,
    Website,
}

impl PriceCategory {
    /// Section the category is configured in
    pub const fn section(self) -> Section {
        match self {
            Self::Investment | Self::Documentation | Self::Amenities => Section::Buildings,
            Self::Apartments => Section::Apartments,
            Self::Environment => Section::Environment,
            Self::Website => Section::Website,
        }
    }
}

/// What a single line of the breakdown charges for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineKey {
    InvestmentBase { investment: InvestmentType },
    ModelFee { has_models: bool },
    Amenities,
    ApartmentModels,
    OverallApartments { count: u32 },
    UniqueApartments { count: u32 },
    AverageRooms { count: u32 },
    EnvironmentCreation,
    PlotDetail { tier: DetailTier },
    NeighborhoodDetail { tier: DetailTier },
    HighlightAnimation,
    FilteringSorting,
    Languages { count: u32 },
    HeroAnimation { animation: HeroAnimation },
}

impl LineKey {
    pub const fn category(self) -> PriceCategory {
        match self {
            Self::InvestmentBase { .. } => PriceCategory::Investment,
            Self::ModelFee { .. } => PriceCategory::Documentation,
            Self::Amenities => PriceCategory::Amenities,
            Self::ApartmentModels
            | Self::OverallApartments { .. }
            | Self::UniqueApartments { .. }
            | Self::AverageRooms { .. } => PriceCategory::Apartments,
            Self::EnvironmentCreation
            | Self::PlotDetail { .. }
            | Self::NeighborhoodDetail { .. } => PriceCategory::Environment,
            Self::HighlightAnimation
            | Self::FilteringSorting
            | Self::Languages { .. }
            | Self::HeroAnimation { .. } => PriceCategory::Website,
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvestmentBase { investment } => write!(f, "{}", investment.label()),
            Self::ModelFee { has_models: true } => write!(f, "Documentation of existing 3D models"),
            Self::ModelFee { has_models: false } => write!(f, "3D models created from scratch"),
            Self::Amenities => write!(f, "Additional 3D amenities"),
            Self::ApartmentModels => write!(f, "3D representations of apartments"),
            Self::OverallApartments { count } => write!(f, "Apartments ({} x $15)", count),
            Self::UniqueApartments { count } => write!(f, "Unique apartments ({} x $300)", count),
            Self::AverageRooms { count } => write!(f, "Average rooms ({} x $300)", count),
            Self::EnvironmentCreation => write!(f, "Environment creation"),
            Self::PlotDetail { tier } => write!(f, "Plot detail: {}", tier),
            Self::NeighborhoodDetail { tier } => write!(f, "Neighborhood detail: {}", tier),
            Self::HighlightAnimation => write!(f, "Highlight animation"),
            Self::FilteringSorting => write!(f, "Filtering/Sorting"),
            Self::Languages { count } => write!(f, "Languages ({} x $450)", count),
            Self::HeroAnimation { animation } => write!(f, "Hero animation: {}", animation.label()),
        }
    }
}

/// A single priced line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub key: LineKey,
    pub amount: Money,
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.amount)
    }
}

/// Itemized price of a selection snapshot.
///
/// Never mutated after [`price`] builds it; a new one is computed for every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub investment: Money,
    pub documentation: Money,
    pub amenities: Money,
    pub apartments: Money,
    pub environment: Money,
    pub website: Money,
    /// Every contributing line, in category order
    pub items: Vec<LineItem>,
}

impl PriceBreakdown {
    /// Sum of all categories
    pub fn total(&self) -> Money {
        self.investment
            + self.documentation
            + self.amenities
            + self.apartments
            + self.environment
            + self.website
    }

    /// Figure of one category
    pub fn category(&self, category: PriceCategory) -> Money {
        match category {
            PriceCategory::Investment => self.investment,
            PriceCategory::Documentation => self.documentation,
            PriceCategory::Amenities => self.amenities,
            PriceCategory::Apartments => self.apartments,
            PriceCategory::Environment => self.environment,
            PriceCategory::Website => self.website,
        }
    }

    /// Sum of the categories configured in a section
    pub fn section_subtotal(&self, section: Section) -> Money {
        match section {
            Section::Buildings => self.investment + self.documentation + self.amenities,
            Section::Apartments => self.apartments,
            Section::Environment => self.environment,
            Section::Website => self.website,
        }
    }

    /// Amount of the first line matching `pred`
    pub fn amount_of(&self, pred: impl Fn(&LineKey) -> bool) -> Option<Money> {
        self.items
            .iter()
            .find(|item| pred(&item.key))
            .map(|item| item.amount)
    }

    /// Returns a summary of the breakdown for logging/display.
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Price breakdown ({} lines):", self.items.len())];
        for (i, item) in self.items.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, item));
        }
        lines.push(format!("Total: {}", self.total()));
        lines.join("\n")
    }

    fn push(&mut self, key: LineKey, amount: Money) {
        let slot = match key.category() {
            PriceCategory::Investment => &mut self.investment,
            PriceCategory::Documentation => &mut self.documentation,
            PriceCategory::Amenities => &mut self.amenities,
            PriceCategory::Apartments => &mut self.apartments,
            PriceCategory::Environment => &mut self.environment,
            PriceCategory::Website => &mut self.website,
        };
        *slot += amount;
        self.items.push(LineItem { key, amount });
    }
}

// ============================================================================
// Price Calculation
// ============================================================================

/// Price a selection snapshot.
///
/// Deterministic and side-effect free: the same state always yields the same
/// breakdown. Unset choices contribute nothing.
pub fn price(state: &SelectionState) -> PriceBreakdown {
    let mut breakdown = PriceBreakdown::default();

    if let Some(investment) = state.investment_type {
        breakdown.push(LineKey::InvestmentBase { investment }, investment_price(investment));
    }

    if let Some(has_models) = state.has_building_models.as_option() {
        breakdown.push(LineKey::ModelFee { has_models }, model_fee(has_models));
    }

    if state.amenities {
        breakdown.push(LineKey::Amenities, AMENITIES_PRICE);
    }

    if state.needs_apartment_models.is_yes() {
        let overall = state.overall_apartments;
        let unique = state.unique_apartments;
        let rooms = state.average_rooms;
        breakdown.push(LineKey::ApartmentModels, APARTMENT_MODELS_PRICE);
        breakdown.push(
            LineKey::OverallApartments { count: overall },
            PER_APARTMENT_PRICE * overall,
        );
        breakdown.push(
            LineKey::UniqueApartments { count: unique },
            PER_UNIQUE_APARTMENT_PRICE * unique,
        );
        breakdown.push(LineKey::AverageRooms { count: rooms }, PER_ROOM_PRICE * rooms);
    }

    if state.has_environment_model.is_no() {
        breakdown.push(LineKey::EnvironmentCreation, ENVIRONMENT_CREATION_PRICE);
        if let Some(tier) = state.plot_detail {
            breakdown.push(LineKey::PlotDetail { tier }, detail_tier_price(tier));
        }
        if let Some(tier) = state.neighborhood_detail {
            breakdown.push(LineKey::NeighborhoodDetail { tier }, detail_tier_price(tier));
        }
    }

    if state.highlight_animation {
        breakdown.push(LineKey::HighlightAnimation, HIGHLIGHT_ANIMATION_PRICE);
    }
    if state.filtering_sorting {
        breakdown.push(LineKey::FilteringSorting, FILTERING_SORTING_PRICE);
    }
    if state.languages > 0 {
        let count = state.languages;
        breakdown.push(LineKey::Languages { count }, PER_LANGUAGE_PRICE * count);
    }
    if let Some(animation) = state.hero_animation {
        breakdown.push(LineKey::HeroAnimation { animation }, hero_animation_price(animation));
    }

    breakdown
}

// ============================================================================
// Tests
// ============================================================================
