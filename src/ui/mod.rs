//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title bar, nav bar and help overlay rendering
//! - `stepper` - Sticky step indicator with progress connectors
//! - `document` - Layout of the calculator document and its section bands
//!
//! The screen is split top to bottom into the title bar, the stepper, the document
//! view, the result panel and the nav bar. Title bar plus stepper form the sticky
//! chrome the step navigator offsets its bands by.

pub mod document;
mod header;
pub mod stepper;

use crate::app::{AppMode, AppState, StatusKind};
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Styles, UiConstants, UiText};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// Re-export for external use
pub use header::{nav_bar_line, HeaderRenderer};

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for different parts of the UI.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Split the frame into title, stepper, document, result panel and nav bar
    pub fn layout(state: &AppState, area: Rect) -> [Rect; 5] {
        let layout = &state.settings.layout;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(layout.header_rows),
                Constraint::Length(layout.stepper_rows),
                Constraint::Min(1),
                Constraint::Length(UiConstants::RESULT_PANEL_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]]
    }

    /// Render the complete UI with keybinding context
    pub fn render_with_context(
        &self,
        f: &mut Frame,
        state: &AppState,
        keybinding_ctx: &KeybindingContext,
    ) {
        let [title_area, stepper_area, document_area, result_area, nav_bar_area] =
            Self::layout(state, f.area());
        let breakdown = state.store.breakdown();

        self.header.render_title(f, title_area, UiText::APP_TITLE);
        stepper::render_stepper(f, stepper_area, &state.navigator, &breakdown);

        let lines = state.document.visible_lines(state.scroll, document_area.height);
        f.render_widget(Paragraph::new(lines), document_area);

        render_result_panel(f, state, result_area);

        // Render navigation bar
        header::render_nav_bar(f, state, keybinding_ctx, nav_bar_area);

        // Render help overlay if visible (on top of everything)
        if state.mode == AppMode::Help {
            header::render_help_overlay(f, keybinding_ctx);
        }
    }
}

/// Total and status line
fn render_result_panel(f: &mut Frame, state: &AppState, area: Rect) {
    let status_style = match state.status_kind {
        StatusKind::Info => Styles::text_secondary(),
        StatusKind::Success => Styles::success(),
        StatusKind::Error => Styles::error(),
    };
    let line = Line::from(vec![
        Span::styled(format!("{}: ", UiText::TOTAL_LABEL), Styles::question()),
        Span::styled(state.store.total_price().to_string(), Styles::price()),
        Span::raw("   "),
        Span::styled(state.status_message.clone(), status_style),
    ]);
    let panel = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_inactive()),
    );
    f.render_widget(panel, area);
}
