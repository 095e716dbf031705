//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors, styles and layout constants used by the
//! renderer. Components never hardcode colors.
//!
//! # Usage
//! ```rust
//! use archviz::theme::{Colors, Styles, Theme};
//! use archviz::navigator::StepStatus;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let step_style = Theme::step_style(StepStatus::Active);
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::navigator::StepStatus;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Primary dark background - used for panels and the help popup
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - borders, titles, headings
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - focused control, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Prices and totals
    pub const PRICE: Color = Color::LightGreen;

    /// Status line feedback
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    pub const BORDER_ACTIVE: Color = Color::Cyan;
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected option marker
    pub const SELECTED: Color = Color::LightCyan;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Step Indicator Colors
    // -------------------------------------------------------------------------

    pub const STEP_ACTIVE: Color = Color::Yellow;
    pub const STEP_COMPLETE: Color = Color::Green;
    pub const STEP_PENDING: Color = Color::Gray;

    /// Filled part of a progress connector
    pub const CONNECTOR_FILL: Color = Color::Green;
    /// Empty part of a connector
    pub const CONNECTOR_EMPTY: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Title bar text
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section heading in the calculator document
    pub fn section_heading() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Control question
    pub fn question() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Focused control question
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected option
    pub fn selected() -> Style {
        Style::default().fg(Colors::SELECTED)
    }

    pub fn unselected() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn price() -> Style {
        Style::default()
            .fg(Colors::PRICE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Key label in the nav bar
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// SEMANTIC STYLES
// =============================================================================

/// Style lookups keyed by domain state
pub struct Theme;

impl Theme {
    /// Style of a step in the indicator
    pub fn step_style(status: StepStatus) -> Style {
        match status {
            StepStatus::Completed => Style::default().fg(Colors::STEP_COMPLETE),
            StepStatus::Active => Style::default()
                .fg(Colors::STEP_ACTIVE)
                .add_modifier(Modifier::BOLD),
            StepStatus::Pending => Style::default().fg(Colors::STEP_PENDING),
        }
    }

    /// Marker drawn in front of a step label
    pub fn step_marker(status: StepStatus) -> &'static str {
        match status {
            StepStatus::Completed => "●",
            StepStatus::Active => "◉",
            StepStatus::Pending => "○",
        }
    }

    /// Style of a filled or empty connector cell
    pub fn connector_style(filled: bool) -> Style {
        if filled {
            Style::default().fg(Colors::CONNECTOR_FILL)
        } else {
            Style::default().fg(Colors::CONNECTOR_EMPTY)
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Help popup width percentage
    pub const HELP_WIDTH_PCT: u16 = 60;

    /// Help popup height percentage
    pub const HELP_HEIGHT_PCT: u16 = 70;

    /// Help popup minimum width
    pub const HELP_MIN_WIDTH: u16 = 44;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Result panel height (total and status line)
    pub const RESULT_PANEL_HEIGHT: u16 = 3;

    /// Rows scrolled by PgUp/PgDn when the viewport is tiny
    pub const MIN_PAGE_SCROLL: u16 = 3;
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Common UI text strings
pub struct UiText;

impl UiText {
    pub const APP_TITLE: &'static str = "ArchViz Investment Calculator";
    pub const TOTAL_LABEL: &'static str = "Total";
    pub const NOT_SELECTED: &'static str = "Not selected";
    pub const HELP_CLOSE: &'static str = "Press ? or Esc to close";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_styles_differ() {
        let completed = Theme::step_style(StepStatus::Completed);
        let active = Theme::step_style(StepStatus::Active);
        let pending = Theme::step_style(StepStatus::Pending);
        assert_ne!(completed, active);
        assert_ne!(active, pending);
        assert!(active.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_connector_styles() {
        assert_eq!(Theme::connector_style(true).fg, Some(Colors::CONNECTOR_FILL));
        assert_eq!(Theme::connector_style(false).fg, Some(Colors::CONNECTOR_EMPTY));
    }

    #[test]
    fn test_step_markers() {
        assert_ne!(
            Theme::step_marker(StepStatus::Completed),
            Theme::step_marker(StepStatus::Pending)
        );
    }
}
