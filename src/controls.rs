//! Interactive controls of the four calculator sections.
//!
//! Each [`Control`] knows its section, heading, visibility rule and how a key press maps
//! onto a [`SelectionStore`] setter. Controls never touch the state directly.

use strum::{EnumIter, IntoEnumIterator};

use crate::store::{
    SelectionState, SelectionStore, MAX_APARTMENTS, MAX_BUILDINGS, MAX_LANGUAGES, MAX_ROOMS,
};
use crate::theme::UiText;
use crate::types::{
    Answer, DetailTier, DocumentationType, FileFormat, HeroAnimation, InvestmentType, Section,
};

/// How a control is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// One of a closed list of options, or unset
    Choice,
    /// Yes/No question, or unset
    Question,
    /// On/off switch
    Toggle,
    /// Bounded integer
    Counter,
}

/// Every control of the calculator, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum Control {
    InvestmentType,
    HasBuildingModels,
    DocumentationType,
    Amenities,
    OverallBuildings,
    UniqueBuildings,
    NeedsApartmentModels,
    OverallApartments,
    UniqueApartments,
    AverageRooms,
    HasEnvironmentModel,
    FileFormat,
    PlotDetail,
    NeighborhoodDetail,
    HighlightAnimation,
    FilteringSorting,
    Languages,
    HeroAnimation,
}

/// Step `current` through `all` by `delta`, wrapping. Unset starts at the first option
/// going forward and at the last going backward.
fn cycle<T: Copy + PartialEq>(all: &[T], current: Option<T>, delta: i32) -> Option<T> {
    if all.is_empty() {
        return None;
    }
    let len = all.len() as i64;
    let next = match current.and_then(|value| all.iter().position(|&item| item == value)) {
        Some(index) => (index as i64 + i64::from(delta)).rem_euclid(len),
        None if delta >= 0 => 0,
        None => len - 1,
    };
    all.get(next as usize).copied()
}

fn cycle_answer(current: Answer, delta: i32) -> Answer {
    let next = cycle(&[Answer::Yes, Answer::No], Some(current).filter(|a| a.is_set()), delta);
    next.unwrap_or(Answer::Unset)
}

fn all_of<T: IntoEnumIterator>() -> Vec<T> {
    T::iter().collect()
}

impl Control {
    /// Controls shown for the current selections, in page order
    pub fn visible(state: &SelectionState) -> Vec<Control> {
        Control::iter().filter(|control| control.is_visible(state)).collect()
    }

    /// Visible controls of one section
    pub fn visible_in(section: Section, state: &SelectionState) -> Vec<Control> {
        Control::iter()
            .filter(|control| control.section() == section && control.is_visible(state))
            .collect()
    }

    pub const fn section(self) -> Section {
        match self {
            Self::InvestmentType
            | Self::HasBuildingModels
            | Self::DocumentationType
            | Self::Amenities
            | Self::OverallBuildings
            | Self::UniqueBuildings => Section::Buildings,
            Self::NeedsApartmentModels
            | Self::OverallApartments
            | Self::UniqueApartments
            | Self::AverageRooms => Section::Apartments,
            Self::HasEnvironmentModel
            | Self::FileFormat
            | Self::PlotDetail
            | Self::NeighborhoodDetail => Section::Environment,
            Self::HighlightAnimation
            | Self::FilteringSorting
            | Self::Languages
            | Self::HeroAnimation => Section::Website,
        }
    }

    pub const fn kind(self) -> ControlKind {
        match self {
            Self::InvestmentType
            | Self::DocumentationType
            | Self::FileFormat
            | Self::PlotDetail
            | Self::NeighborhoodDetail
            | Self::HeroAnimation => ControlKind::Choice,
            Self::HasBuildingModels | Self::NeedsApartmentModels | Self::HasEnvironmentModel => {
                ControlKind::Question
            }
            Self::Amenities | Self::HighlightAnimation | Self::FilteringSorting => {
                ControlKind::Toggle
            }
            Self::OverallBuildings
            | Self::UniqueBuildings
            | Self::OverallApartments
            | Self::UniqueApartments
            | Self::AverageRooms
            | Self::Languages => ControlKind::Counter,
        }
    }

    /// Heading shown above the control
    pub const fn title(self) -> &'static str {
        match self {
            Self::InvestmentType => "Select investment type",
            Self::HasBuildingModels => "Do you have 3D models of your buildings?",
            Self::DocumentationType => "What kind of documentation do you use?",
            Self::Amenities => "Additional 3D amenities inside and outside the building",
            Self::OverallBuildings => "Overall number of buildings",
            Self::UniqueBuildings => "Number of unique buildings",
            Self::NeedsApartmentModels => "Do you need 3D representations of apartments?",
            Self::OverallApartments => "Overall number of apartments",
            Self::UniqueApartments => "Number of unique apartments",
            Self::AverageRooms => "Average number of rooms per apartment",
            Self::HasEnvironmentModel => "Do you have your own environment model?",
            Self::FileFormat => "Select the file format used for your 3D models",
            Self::PlotDetail => "How detailed should the plot be?",
            Self::NeighborhoodDetail => "How detailed should the neighborhood be?",
            Self::HighlightAnimation => "Highlight animation",
            Self::FilteringSorting => "Filtering/Sorting",
            Self::Languages => "Languages",
            Self::HeroAnimation => "Hero section animation",
        }
    }

    /// Visibility rule; hidden controls keep their values
    pub fn is_visible(self, state: &SelectionState) -> bool {
        match self {
            Self::OverallBuildings | Self::UniqueBuildings => state
                .investment_type
                .is_some_and(InvestmentType::is_multiple),
            Self::DocumentationType => state.has_building_models.is_set(),
            Self::OverallApartments | Self::UniqueApartments | Self::AverageRooms => {
                state.needs_apartment_models.is_yes()
            }
            Self::FileFormat => state.has_environment_model.is_yes(),
            Self::PlotDetail | Self::NeighborhoodDetail => state.has_environment_model.is_no(),
            _ => true,
        }
    }

    /// Option labels of a choice or question control, in cycling order
    pub fn options(self) -> Vec<&'static str> {
        match self {
            Self::InvestmentType => InvestmentType::iter().map(InvestmentType::label).collect(),
            Self::DocumentationType => {
                DocumentationType::iter().map(DocumentationType::label).collect()
            }
            Self::FileFormat => FileFormat::iter().map(FileFormat::label).collect(),
            Self::PlotDetail | Self::NeighborhoodDetail => {
                DetailTier::iter().map(DetailTier::label).collect()
            }
            Self::HeroAnimation => HeroAnimation::iter().map(HeroAnimation::label).collect(),
            Self::HasBuildingModels => vec![
                "Yes, I have 3D models of the building",
                "No, I need to create 3D models from the ground up",
            ],
            Self::NeedsApartmentModels => vec![
                "Yes, I need 3D visualizations of the apartments",
                "No, I don't need 3D visualizations of apartments",
            ],
            Self::HasEnvironmentModel => vec![
                "Yes, I have my own environment model that I want to use",
                "No, I don't have a model and I want you to create one for me",
            ],
            _ => Vec::new(),
        }
    }

    /// Index into [`Control::options`] of the current value
    pub fn selected_index(self, state: &SelectionState) -> Option<usize> {
        fn position<T: IntoEnumIterator + PartialEq>(value: Option<T>) -> Option<usize> {
            let value = value?;
            T::iter().position(|item| item == value)
        }
        fn answer_index(answer: Answer) -> Option<usize> {
            answer.as_option().map(|yes| if yes { 0 } else { 1 })
        }

        match self {
            Self::InvestmentType => position(state.investment_type),
            Self::DocumentationType => position(state.documentation_type),
            Self::FileFormat => position(state.file_format),
            Self::PlotDetail => position(state.plot_detail),
            Self::NeighborhoodDetail => position(state.neighborhood_detail),
            Self::HeroAnimation => position(state.hero_animation),
            Self::HasBuildingModels => answer_index(state.has_building_models),
            Self::NeedsApartmentModels => answer_index(state.needs_apartment_models),
            Self::HasEnvironmentModel => answer_index(state.has_environment_model),
            _ => None,
        }
    }

    /// Current value of a toggle
    pub fn toggle_value(self, state: &SelectionState) -> Option<bool> {
        match self {
            Self::Amenities => Some(state.amenities),
            Self::HighlightAnimation => Some(state.highlight_animation),
            Self::FilteringSorting => Some(state.filtering_sorting),
            _ => None,
        }
    }

    /// Current value of a counter
    pub fn counter_value(self, state: &SelectionState) -> Option<u32> {
        match self {
            Self::OverallBuildings => Some(state.overall_buildings),
            Self::UniqueBuildings => Some(state.unique_buildings),
            Self::OverallApartments => Some(state.overall_apartments),
            Self::UniqueApartments => Some(state.unique_apartments),
            Self::AverageRooms => Some(state.average_rooms),
            Self::Languages => Some(state.languages),
            _ => None,
        }
    }

    /// Upper bound of a counter for the current selections
    pub fn counter_max(self, state: &SelectionState) -> Option<u32> {
        match self {
            Self::OverallBuildings => Some(MAX_BUILDINGS),
            Self::UniqueBuildings => Some(state.overall_buildings),
            Self::OverallApartments => Some(MAX_APARTMENTS),
            Self::UniqueApartments => Some(state.overall_apartments),
            Self::AverageRooms => Some(MAX_ROOMS),
            Self::Languages => Some(MAX_LANGUAGES),
            _ => None,
        }
    }

    /// Whether decrementing a counter would change it
    pub fn can_decrement(self, state: &SelectionState) -> bool {
        self.counter_value(state).is_some_and(|value| value > 0)
    }

    /// Whether incrementing a counter would change it
    pub fn can_increment(self, state: &SelectionState) -> bool {
        match (self.counter_value(state), self.counter_max(state)) {
            (Some(value), Some(max)) => value < max,
            _ => false,
        }
    }

    /// Short text of the current value
    pub fn value_text(self, state: &SelectionState) -> String {
        match self.kind() {
            ControlKind::Choice | ControlKind::Question => self
                .selected_index(state)
                .and_then(|index| self.options().get(index).copied())
                .unwrap_or(UiText::NOT_SELECTED)
                .to_string(),
            ControlKind::Toggle => match self.toggle_value(state) {
                Some(true) => "Yes".to_string(),
                _ => "No".to_string(),
            },
            ControlKind::Counter => self
                .counter_value(state)
                .map(|value| value.to_string())
                .unwrap_or_default(),
        }
    }

    /// Left/Right: step a choice or question, flip a toggle, or change a counter by `delta`
    pub fn adjust(self, store: &mut SelectionStore, delta: i32) {
        let step = |value: u32| i64::from(value) + i64::from(delta);
        match self {
            Self::InvestmentType => {
                let next = cycle(&all_of::<InvestmentType>(), store.investment_type(), delta);
                store.set_investment_type(next);
            }
            Self::DocumentationType => {
                let next = cycle(&all_of::<DocumentationType>(), store.documentation_type(), delta);
                store.set_documentation_type(next);
            }
            Self::FileFormat => {
                let next = cycle(&all_of::<FileFormat>(), store.file_format(), delta);
                store.set_file_format(next);
            }
            Self::PlotDetail => {
                let next = cycle(&all_of::<DetailTier>(), store.plot_detail(), delta);
                store.set_plot_detail(next);
            }
            Self::NeighborhoodDetail => {
                let next = cycle(&all_of::<DetailTier>(), store.neighborhood_detail(), delta);
                store.set_neighborhood_detail(next);
            }
            Self::HeroAnimation => {
                let next = cycle(&all_of::<HeroAnimation>(), store.hero_animation(), delta);
                store.set_hero_animation(next);
            }
            Self::HasBuildingModels => {
                store.set_has_building_models(cycle_answer(store.has_building_models(), delta));
            }
            Self::NeedsApartmentModels => {
                let next = cycle_answer(store.needs_apartment_models(), delta);
                store.set_needs_apartment_models(next);
            }
            Self::HasEnvironmentModel => {
                store.set_has_environment_model(cycle_answer(store.has_environment_model(), delta));
            }
            Self::Amenities => store.set_amenities(!store.amenities()),
            Self::HighlightAnimation => store.set_highlight_animation(!store.highlight_animation()),
            Self::FilteringSorting => store.set_filtering_sorting(!store.filtering_sorting()),
            Self::OverallBuildings => {
                store.set_overall_buildings(step(store.overall_buildings()));
            }
            Self::UniqueBuildings => {
                store.set_unique_buildings(step(store.unique_buildings()));
            }
            Self::OverallApartments => {
                store.set_overall_apartments(step(store.overall_apartments()));
            }
            Self::UniqueApartments => {
                store.set_unique_apartments(step(store.unique_apartments()));
            }
            Self::AverageRooms => {
                store.set_average_rooms(step(store.average_rooms()));
            }
            Self::Languages => {
                store.set_languages(step(store.languages()));
            }
        }
    }

    /// Space/Enter: cycle forward or flip. Counters only move with Left/Right.
    pub fn activate(self, store: &mut SelectionStore) {
        if self.kind() != ControlKind::Counter {
            self.adjust(store, 1);
        }
    }

    /// Delete: back to the default value
    pub fn clear(self, store: &mut SelectionStore) {
        let defaults = SelectionState::default();
        match self {
            Self::InvestmentType => store.set_investment_type(None),
            Self::DocumentationType => store.set_documentation_type(None),
            Self::FileFormat => store.set_file_format(None),
            Self::PlotDetail => store.set_plot_detail(None),
            Self::NeighborhoodDetail => store.set_neighborhood_detail(None),
            Self::HeroAnimation => store.set_hero_animation(None),
            Self::HasBuildingModels => store.set_has_building_models(Answer::Unset),
            Self::NeedsApartmentModels => store.set_needs_apartment_models(Answer::Unset),
            Self::HasEnvironmentModel => store.set_has_environment_model(Answer::Unset),
            Self::Amenities => store.set_amenities(false),
            Self::HighlightAnimation => store.set_highlight_animation(false),
            Self::FilteringSorting => store.set_filtering_sorting(false),
            Self::OverallBuildings => {
                store.set_overall_buildings(i64::from(defaults.overall_buildings))
            }
            Self::UniqueBuildings => {
                store.set_unique_buildings(i64::from(defaults.unique_buildings))
            }
            Self::OverallApartments => {
                store.set_overall_apartments(i64::from(defaults.overall_apartments))
            }
            Self::UniqueApartments => {
                store.set_unique_apartments(i64::from(defaults.unique_apartments))
            }
            Self::AverageRooms => store.set_average_rooms(i64::from(defaults.average_rooms)),
            Self::Languages => store.set_languages(i64::from(defaults.languages)),
        }
    }
}
