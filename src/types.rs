//! Type-safe option sets for the estimator
//!
//! Every choice a user can make is a closed enum, so the pricing engine can match
//! exhaustively and adding a tier is a compile-time-checked change. Unset choices are
//! `Option::None` in the selection state, except for yes/no questions which use [`Answer`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Kind of investment being visualized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InvestmentType {
    SingleHouse,
    MultipleHouse,
    SingleApartment,
    MultipleApartment,
}

impl InvestmentType {
    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleHouse => "Single houses",
            Self::MultipleHouse => "Multiple houses",
            Self::SingleApartment => "Single apartment building",
            Self::MultipleApartment => "Multiple apartment buildings",
        }
    }

    /// Whether the investment spans several buildings (building counts apply)
    pub const fn is_multiple(self) -> bool {
        matches!(self, Self::MultipleHouse | Self::MultipleApartment)
    }
}

/// Kind of documentation the client works from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DocumentationType {
    PlansMaterials,
    PlansVisualizations,
}

impl DocumentationType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlansMaterials => "2D plans & materials examples",
            Self::PlansVisualizations => "2D plans & visualizations",
        }
    }
}

/// Detail level of a generated environment (plot or neighborhood)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DetailTier {
    Basic,
    GrassTrees,
    Detailed,
    Photogrammetry,
}

impl DetailTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Just basic plan & plot plan as a ground",
            Self::GrassTrees => "Plot with grass, couple trees and basic neighborhood",
            Self::Detailed => {
                "Detailed plot with gardens, sidewalks, fences & detailed neighborhood blocks"
            }
            Self::Photogrammetry => "Fully detailed environment based on photogrammetry",
        }
    }
}

/// Format of a client-supplied environment model. Informational only, never priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum FileFormat {
    #[serde(rename = "unreal_engine")]
    #[strum(serialize = "unreal_engine")]
    UnrealEngine,
    #[serde(rename = "3d_max_blender_corona")]
    #[strum(serialize = "3d_max_blender_corona")]
    MaxBlenderCorona,
    #[serde(rename = "sketchfab_autocad")]
    #[strum(serialize = "sketchfab_autocad")]
    SketchfabAutocad,
}

impl FileFormat {
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnrealEngine => "Building in Unreal Engine",
            Self::MaxBlenderCorona => "Building in 3D Max, Blender, Corona",
            Self::SketchfabAutocad => "Sketchfab, AutoCAD",
        }
    }
}

/// Animation shown in the website hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HeroAnimation {
    TimeLapse,
    CloseUp,
}

impl HeroAnimation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::TimeLapse => "Time lapse",
            Self::CloseUp => "Close up",
        }
    }
}

/// Answer to a yes/no question that may not have been answered yet
///
/// Serialized as `true`, `false` or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Answer {
    #[default]
    #[strum(serialize = "Not selected")]
    Unset,
    #[strum(serialize = "Yes")]
    Yes,
    #[strum(serialize = "No")]
    No,
}

impl Answer {
    pub const fn as_option(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Yes => Some(true),
            Self::No => Some(false),
        }
    }

    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    pub const fn is_no(self) -> bool {
        matches!(self, Self::No)
    }

    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl From<Option<bool>> for Answer {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::Unset,
            Some(true) => Self::Yes,
            Some(false) => Self::No,
        }
    }
}

impl From<Answer> for Option<bool> {
    fn from(value: Answer) -> Self {
        value.as_option()
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// One of the four configuration sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Section {
    Buildings,
    Apartments,
    Environment,
    Website,
}

impl Section {
    /// All sections in page order
    pub const ALL: [Section; 4] = [
        Self::Buildings,
        Self::Apartments,
        Self::Environment,
        Self::Website,
    ];

    /// Zero-based position in page order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Section at a zero-based position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Heading used in the calculator body and the receipt
    pub const fn title(self) -> &'static str {
        match self {
            Self::Buildings => "Buildings",
            Self::Apartments => "Apartments",
            Self::Environment => "Environment",
            Self::Website => "Website",
        }
    }

    /// Upper-case label used by the step indicator
    pub const fn step_label(self) -> &'static str {
        match self {
            Self::Buildings => "BUILDINGS",
            Self::Apartments => "APARTMENTS",
            Self::Environment => "ENVIRONMENT",
            Self::Website => "WEBSITE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_investment_type_serialization() {
        assert_eq!(InvestmentType::SingleHouse.to_string(), "single_house");
        assert_eq!(
            InvestmentType::from_str("multiple_apartment").unwrap(),
            InvestmentType::MultipleApartment
        );
    }

    #[test]
    fn test_investment_type_multiple() {
        assert!(InvestmentType::MultipleHouse.is_multiple());
        assert!(InvestmentType::MultipleApartment.is_multiple());
        assert!(!InvestmentType::SingleHouse.is_multiple());
        assert!(!InvestmentType::SingleApartment.is_multiple());
    }

    #[test]
    fn test_file_format_wire_names() {
        assert_eq!(FileFormat::MaxBlenderCorona.to_string(), "3d_max_blender_corona");
        let json = serde_json::to_string(&FileFormat::MaxBlenderCorona).unwrap();
        assert_eq!(json, "\"3d_max_blender_corona\"");
    }

    #[test]
    fn test_detail_tier_iteration_order() {
        let tiers: Vec<DetailTier> = DetailTier::iter().collect();
        assert_eq!(
            tiers,
            vec![
                DetailTier::Basic,
                DetailTier::GrassTrees,
                DetailTier::Detailed,
                DetailTier::Photogrammetry
            ]
        );
    }

    #[test]
    fn test_answer_conversion() {
        assert_eq!(Answer::from(None), Answer::Unset);
        assert_eq!(Answer::from(Some(true)), Answer::Yes);
        assert_eq!(Answer::from(false), Answer::No);
        assert_eq!(Answer::No.as_option(), Some(false));
        assert!(!Answer::Unset.is_set());
    }

    #[test]
    fn test_answer_serializes_as_nullable_bool() {
        assert_eq!(serde_json::to_string(&Answer::Unset).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Answer::Yes).unwrap(), "true");
        let parsed: Answer = serde_json::from_str("false").unwrap();
        assert_eq!(parsed, Answer::No);
    }

    #[test]
    fn test_section_order() {
        assert_eq!(Section::Buildings.index(), 0);
        assert_eq!(Section::Website.index(), 3);
        assert_eq!(Section::Buildings.next(), Some(Section::Apartments));
        assert_eq!(Section::Buildings.previous(), None);
        assert!(Section::Website.is_last());
        assert_eq!(Section::from_index(4), None);
    }
}
