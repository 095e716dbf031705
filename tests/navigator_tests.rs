//! Tests for the Step Navigator
//!
//! These tests verify:
//! - The scroll observer on hand-built geometry
//! - The navigator against the geometry of the real calculator document
//! - Jump targets line sections up under the sticky chrome

use archviz::navigator::{connector, step_status};
use archviz::ui::document::Document;
use archviz::{
    observe_scroll, Answer, Connector, ScrollUpdate, Section, SectionBand, SectionGeometry,
    SelectionStore, StepNavigator, StepState, StepStatus, TrackBand,
};

fn thousand_row_sections() -> SectionGeometry {
    SectionGeometry::stacked(0, [1000, 1000, 1000, 1000])
}

// =============================================================================
// Scroll Observer
// =============================================================================

#[test]
fn test_halfway_through_buildings() {
    let update = observe_scroll(&thousand_row_sections(), 500, 0).unwrap();
    match update {
        ScrollUpdate::Inside { section, progress } => {
            assert_eq!(section, Section::Buildings);
            let progress = progress.unwrap();
            assert_eq!(progress.from, Section::Buildings);
            assert!((progress.ratio - 0.5).abs() < 1e-9);
        }
        other => panic!("expected Inside, got {:?}", other),
    }
}

#[test]
fn test_halfway_with_fixed_offset() {
    // bands in page rows, chrome of 6 rows
    let geometry = SectionGeometry::stacked(6, [1000, 1000, 1000, 1000]);
    let state = observe_scroll(&geometry, 500, 6).unwrap().state();
    assert_eq!(state.active, Some(Section::Buildings));
    assert!((state.progress.unwrap().ratio - 0.5).abs() < 1e-9);
}

#[test]
fn test_section_boundaries() {
    let geometry = thousand_row_sections();
    let at = |offset| observe_scroll(&geometry, offset, 0).unwrap().state().active;
    assert_eq!(at(999), Some(Section::Buildings));
    assert_eq!(at(1000), Some(Section::Apartments));
    assert_eq!(at(3999), Some(Section::Website));
    assert_eq!(at(4000), Some(Section::Website));
}

#[test]
fn test_past_last_has_no_progress() {
    let state = observe_scroll(&thousand_row_sections(), 10_000, 0)
        .unwrap()
        .state();
    assert_eq!(state, StepState::at(Section::Website));
}

#[test]
fn test_before_first_is_none() {
    let geometry = SectionGeometry::stacked(100, [10, 10, 10, 10]);
    assert_eq!(
        observe_scroll(&geometry, 50, 0).unwrap().state(),
        StepState::NONE
    );
}

#[test]
fn test_gap_between_bands() {
    let geometry = SectionGeometry::new(vec![
        SectionBand { section: Section::Buildings, top: 0, bottom: 10 },
        SectionBand { section: Section::Apartments, top: 20, bottom: 30 },
    ]);
    assert!(observe_scroll(&geometry, 15, 0).is_none());
}

// =============================================================================
// Step Indicator Rules
// =============================================================================

#[test]
fn test_step_statuses_for_environment() {
    let active = Some(Section::Environment);
    assert_eq!(step_status(active, Section::Buildings), StepStatus::Completed);
    assert_eq!(step_status(active, Section::Apartments), StepStatus::Completed);
    assert_eq!(step_status(active, Section::Environment), StepStatus::Active);
    assert_eq!(step_status(active, Section::Website), StepStatus::Pending);
}

#[test]
fn test_nothing_completed_before_first_section() {
    for section in Section::ALL {
        assert_eq!(step_status(None, section), StepStatus::Pending);
        assert_eq!(connector(&StepState::NONE, section), Connector::Default);
    }
}

// =============================================================================
// Against the Calculator Document
// =============================================================================

#[test]
fn test_scrolling_document_never_moves_backwards() {
    let mut store = SelectionStore::new();
    store.set_needs_apartment_models(Answer::Yes);
    store.set_has_environment_model(Answer::No);
    let document = Document::build(&store, None);
    let geometry = document.geometry(6);

    let mut last_index = None;
    for scroll in 0..document.len() {
        let Some(update) = observe_scroll(&geometry, scroll, 6) else {
            continue;
        };
        let index = update.state().active.map(Section::index);
        assert!(index >= last_index, "active section went back at row {}", scroll);
        last_index = index;
    }
    assert_eq!(last_index, Some(Section::Website.index()));

    let mut navigator = StepNavigator::new(6, 0, TrackBand::default());
    navigator.on_viewport(&geometry, document.len() - 1, 40);
    assert_eq!(navigator.active(), Some(Section::Website));
    assert!(navigator.progress().is_none());
}

#[test]
fn test_section_active_once_heading_reaches_chrome() {
    let document = Document::build(&SelectionStore::new(), None);
    let geometry = document.geometry(6);
    let apartments = document.section_band(Section::Apartments).unwrap().top;

    let before = observe_scroll(&geometry, apartments - 1, 6).unwrap().state();
    let at = observe_scroll(&geometry, apartments, 6).unwrap().state();
    assert_eq!(before.active, Some(Section::Buildings));
    assert_eq!(at.active, Some(Section::Apartments));
}

#[test]
fn test_jump_target_puts_section_under_chrome() {
    let document = Document::build(&SelectionStore::new(), None);
    let geometry = document.geometry(6);
    let mut navigator = StepNavigator::new(6, 0, TrackBand::default());

    for section in Section::ALL {
        let target = navigator.jump_to(&geometry, section).unwrap();
        assert_eq!(target, document.section_band(section).unwrap().top);
        assert_eq!(navigator.state(), StepState::at(section));
    }
}

#[test]
fn test_jump_padding_leaves_rows_above() {
    let document = Document::build(&SelectionStore::new(), None);
    let geometry = document.geometry(6);
    let navigator = StepNavigator::new(6, 2, TrackBand::default());
    let top = document.section_band(Section::Environment).unwrap().top;
    assert_eq!(navigator.jump_target(&geometry, Section::Environment), Some(top - 2));
}

// =============================================================================
// Both Observers Together
// =============================================================================

fn forty_row_navigator() -> (SectionGeometry, StepNavigator) {
    let track = TrackBand {
        top_margin: 0,
        bottom_fraction: 0.5,
        threshold: 0.1,
    };
    (
        SectionGeometry::stacked(0, [40, 40, 40, 40]),
        StepNavigator::new(0, 0, track),
    )
}

#[test]
fn test_last_section_entering_band_drops_progress() {
    let (geometry, mut navigator) = forty_row_navigator();
    navigator.on_viewport(&geometry, 0, 40);
    // scroll is 3/4 through Environment while Website enters the band
    navigator.on_viewport(&geometry, 110, 40);
    assert_eq!(navigator.state(), StepState::at(Section::Website));
}

#[test]
fn test_progress_never_left_on_previous_section() {
    let (geometry, mut navigator) = forty_row_navigator();
    navigator.on_viewport(&geometry, 0, 40);
    navigator.on_viewport(&geometry, 30, 40);
    assert_eq!(navigator.active(), Some(Section::Apartments));
    assert!(navigator.progress().is_none());
    assert_eq!(navigator.connector(Section::Apartments), Connector::Default);
    assert_eq!(navigator.connector(Section::Buildings), Connector::Completed);
}

#[test]
fn test_gradient_only_on_own_progress() {
    let state = StepState {
        active: Some(Section::Apartments),
        progress: Some(archviz::Progress {
            from: Section::Buildings,
            ratio: 0.75,
        }),
    };
    assert_eq!(connector(&state, Section::Apartments), Connector::Default);
    assert_eq!(connector(&state, Section::Buildings), Connector::Completed);
}

#[test]
fn test_document_scroll_keeps_progress_on_active_section() {
    let document = Document::build(&SelectionStore::new(), None);
    let geometry = document.geometry(6);
    let mut navigator = StepNavigator::new(6, 0, TrackBand::default());

    for scroll in 0..document.len() {
        navigator.on_viewport(&geometry, scroll, 40);
        let state = navigator.state();
        if let Some(progress) = state.progress {
            assert_eq!(state.active, Some(progress.from), "mismatch at row {}", scroll);
            assert!(!progress.from.is_last());
        }
    }
}
