//! Sticky step indicator
//!
//! Four columns, one per section. Each shows the step marker and label, the section
//! subtotal and a connector bar towards the next step. The connector of the active step
//! fills with the scroll progress; connectors of completed steps are full.

use crate::engine::pricing::PriceBreakdown;
use crate::navigator::{Connector, StepNavigator};
use crate::theme::{Styles, Theme};
use crate::types::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CONNECTOR_GLYPH: &str = "━";

/// Number of filled cells of a connector `width` cells wide
pub fn connector_fill(connector: Connector, width: u16) -> u16 {
    match connector {
        Connector::Completed => width,
        Connector::Default => 0,
        Connector::Gradient(ratio) => {
            let filled = (f64::from(width) * ratio.clamp(0.0, 1.0)).round();
            (filled as u16).min(width)
        }
    }
}

fn connector_line(connector: Connector, width: u16) -> Line<'static> {
    let filled = connector_fill(connector, width);
    Line::from(vec![
        Span::styled(
            CONNECTOR_GLYPH.repeat(usize::from(filled)),
            Theme::connector_style(true),
        ),
        Span::styled(
            CONNECTOR_GLYPH.repeat(usize::from(width - filled)),
            Theme::connector_style(false),
        ),
    ])
}

/// Lines of one step column
pub fn step_lines(
    navigator: &StepNavigator,
    breakdown: &PriceBreakdown,
    section: Section,
    width: u16,
) -> Vec<Line<'static>> {
    let status = navigator.step_status(section);
    let style = Theme::step_style(status);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", Theme::step_marker(status)), style),
            Span::styled(
                format!("{}. {}", section.index() + 1, section.step_label()),
                style,
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", breakdown.section_subtotal(section).short()),
            Styles::text_secondary(),
        )),
    ];
    if !section.is_last() {
        lines.push(connector_line(navigator.connector(section), width.saturating_sub(1)));
    }
    lines
}

/// Render the step indicator into `area`
pub fn render_stepper(
    f: &mut Frame,
    area: Rect,
    navigator: &StepNavigator,
    breakdown: &PriceBreakdown,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (section, column) in Section::ALL.into_iter().zip(columns.iter()) {
        let lines = step_lines(navigator, breakdown, section, column.width);
        f.render_widget(Paragraph::new(lines), *column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_fill() {
        assert_eq!(connector_fill(Connector::Default, 10), 0);
        assert_eq!(connector_fill(Connector::Completed, 10), 10);
        assert_eq!(connector_fill(Connector::Gradient(0.5), 10), 5);
        assert_eq!(connector_fill(Connector::Gradient(1.5), 10), 10);
    }

    #[test]
    fn test_last_step_has_no_connector() {
        let navigator = StepNavigator::default();
        let breakdown = PriceBreakdown::default();
        assert_eq!(step_lines(&navigator, &breakdown, Section::Website, 20).len(), 2);
        assert_eq!(step_lines(&navigator, &breakdown, Section::Buildings, 20).len(), 3);
    }
}
