//! Selections file handling for the headless commands.
//!
//! A selections file is the JSON form of [`SelectionState`] (camelCase keys, `null` for
//! unset answers). Missing keys take their defaults, so a file only needs the fields the
//! user actually chose.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::EstimatorError;
use crate::store::{
    SelectionState, SelectionStore, MAX_APARTMENTS, MAX_BUILDINGS, MAX_LANGUAGES, MAX_ROOMS,
};

/// Save selections to a JSON file
pub fn save_to_file<P: AsRef<Path>>(state: &SelectionState, path: P) -> Result<()> {
    let json =
        serde_json::to_string_pretty(state).context("Failed to serialize selections to JSON")?;

    fs::write(&path, json)
        .with_context(|| format!("Failed to write selections to {:?}", path.as_ref()))?;

    Ok(())
}

/// Load selections from a JSON file, without checking bounds
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SelectionState> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read selections from {:?}", path.as_ref()))?;

    let state: SelectionState =
        serde_json::from_str(&content).context("Failed to parse selections JSON")?;

    info!(path = ?path.as_ref(), "Loaded selections file");
    Ok(state)
}

/// Load a selections file into a store. Out-of-range numbers are clamped the same way
/// the interactive setters clamp them.
pub fn load_store<P: AsRef<Path>>(path: P) -> Result<SelectionStore> {
    Ok(SelectionStore::from_state(load_from_file(path)?))
}

/// Validate the field bounds of a selections file
pub fn validate(state: &SelectionState) -> crate::error::Result<()> {
    if state.overall_buildings > MAX_BUILDINGS {
        return Err(EstimatorError::validation(format!(
            "overallBuildings must be at most {} (got {})",
            MAX_BUILDINGS,
            state.overall_buildings
        )));
    }
    if state.unique_buildings > state.overall_buildings {
        return Err(EstimatorError::validation(format!(
            "uniqueBuildings ({}) cannot exceed overallBuildings ({})",
            state.unique_buildings,
            state.overall_buildings
        )));
    }

    if state.overall_apartments > MAX_APARTMENTS {
        return Err(EstimatorError::validation(format!(
            "overallApartments must be at most {} (got {})",
            MAX_APARTMENTS,
            state.overall_apartments
        )));
    }
    if state.unique_apartments > state.overall_apartments {
        return Err(EstimatorError::validation(format!(
            "uniqueApartments ({}) cannot exceed overallApartments ({})",
            state.unique_apartments,
            state.overall_apartments
        )));
    }
    if state.average_rooms > MAX_ROOMS {
        return Err(EstimatorError::validation(format!(
            "averageRooms must be at most {} (got {})",
            MAX_ROOMS,
            state.average_rooms
        )));
    }

    if state.languages > MAX_LANGUAGES {
        return Err(EstimatorError::validation(format!(
            "languages must be at most {} (got {})",
            MAX_LANGUAGES,
            state.languages
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Answer, InvestmentType};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_and_load() {
        let state = SelectionState {
            investment_type: Some(InvestmentType::MultipleHouse),
            has_building_models: Answer::No,
            overall_buildings: 12,
            unique_buildings: 4,
            ..SelectionState::default()
        };

        let temp_file = NamedTempFile::new().unwrap();
        save_to_file(&state, temp_file.path()).unwrap();

        let loaded = load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{ "investmentType": "single_house", "amenities": true }"#)
            .unwrap();
        temp_file.flush().unwrap();

        let loaded = load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.investment_type, Some(InvestmentType::SingleHouse));
        assert!(loaded.amenities);
        assert_eq!(loaded.overall_buildings, 1);
        assert_eq!(loaded.has_building_models, Answer::Unset);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_from_file(Path::new("/nonexistent/selections.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{ invalid json }").unwrap();
        temp_file.flush().unwrap();

        let result = load_from_file(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_unknown_enum_value() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{ "plotDetail": "marble" }"#)
            .unwrap();
        temp_file.flush().unwrap();

        assert!(load_from_file(temp_file.path()).is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(validate(&SelectionState::default()).is_ok());
    }

    #[test]
    fn test_validate_unique_over_overall() {
        let state = SelectionState {
            overall_apartments: 3,
            unique_apartments: 5,
            ..SelectionState::default()
        };
        let err = validate(&state).unwrap_err();
        assert!(err.to_string().contains("uniqueApartments"));
    }

    #[test]
    fn test_validate_ceilings() {
        let state = SelectionState {
            languages: 11,
            ..SelectionState::default()
        };
        assert!(validate(&state).is_err());

        let state = SelectionState {
            overall_buildings: 101,
            unique_buildings: 1,
            ..SelectionState::default()
        };
        assert!(validate(&state).is_err());
    }

    #[test]
    fn test_load_store_clamps() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{ "overallBuildings": 500, "uniqueBuildings": 600 }"#)
            .unwrap();
        temp_file.flush().unwrap();

        let store = load_store(temp_file.path()).unwrap();
        assert_eq!(store.overall_buildings(), MAX_BUILDINGS);
        assert_eq!(store.unique_buildings(), MAX_BUILDINGS);
    }
}
