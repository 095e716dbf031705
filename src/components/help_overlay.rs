//! Help overlay component
//!
//! Displays the keybindings of the mode the help was opened from in a centered popup.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::{Colors, Styles, UiConstants, UiText};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode);
        Self {
            content: Self::build_content(&sections),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection]) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            format!("  {} Help  ", UiText::APP_TITLE),
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            UiText::HELP_CLOSE,
            Styles::text_muted(),
        )]));

        lines
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.content
    }

    /// Popup area centered in `parent`
    pub fn area(&self, parent: Rect) -> Rect {
        let width = (parent.width * UiConstants::HELP_WIDTH_PCT / 100)
            .max(UiConstants::HELP_MIN_WIDTH)
            .min(parent.width);
        let wanted = self.content.len() as u16 + 2;
        let height = (parent.height * UiConstants::HELP_HEIGHT_PCT / 100)
            .max(wanted)
            .min(parent.height);
        Rect {
            x: parent.x + (parent.width - width) / 2,
            y: parent.y + (parent.height - height) / 2,
            width,
            height,
        }
    }

    /// Render the help overlay
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = self.area(parent);
        f.render_widget(Clear, area);
        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .style(Styles::panel_bg());
        let paragraph = Paragraph::new(self.content.clone())
            .block(block)
            .alignment(Alignment::Left);
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_lists_every_section() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(&AppMode::Calculator, &ctx);
        let text: Vec<String> = overlay
            .lines()
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        for title in ["Questions", "Scrolling", "Sections", "General"] {
            assert!(text.iter().any(|l| l.contains(title)), "missing {}", title);
        }
        assert_eq!(text.last().map(String::as_str), Some(UiText::HELP_CLOSE));
    }

    #[test]
    fn test_area_fits_parent() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(&AppMode::Calculator, &ctx);
        let parent = Rect::new(0, 0, 40, 12);
        let area = overlay.area(parent);
        assert!(area.width <= parent.width && area.height <= parent.height);
    }
}
