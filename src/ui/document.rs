//! Calculator document layout
//!
//! Lays the four sections out as one vertical document of lines and measures, while
//! doing so, the row band of every section and every control. The bands are what the
//! step navigator consumes; the control rows drive focus-follow scrolling.
//!
//! The layout does not depend on the terminal width (long lines are clipped, never
//! wrapped), so it can be rebuilt from the store alone after every change.

use ratatui::text::{Line, Span};

use crate::controls::{Control, ControlKind};
use crate::engine::pricing::{
    detail_tier_price, hero_animation_price, investment_price, model_fee, PriceBreakdown,
    AMENITIES_PRICE, APARTMENT_MODELS_PRICE, FILTERING_SORTING_PRICE, HIGHLIGHT_ANIMATION_PRICE,
};
use crate::money::Money;
use crate::navigator::{SectionBand, SectionGeometry};
use crate::store::SelectionStore;
use crate::theme::{Styles, UiText};
use crate::types::{DetailTier, HeroAnimation, InvestmentType, Section};
use strum::IntoEnumIterator;

/// Rows `[top, bottom)` a control occupies in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSpan {
    pub control: Control,
    pub top: u32,
    pub bottom: u32,
}

/// Laid-out calculator document
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    /// Section bands in document rows
    pub sections: Vec<SectionBand>,
    pub controls: Vec<ControlSpan>,
}

/// Price shown next to an option, when choosing it adds a fixed amount
fn option_hint(control: Control, index: usize) -> Option<Money> {
    match control {
        Control::InvestmentType => InvestmentType::iter().nth(index).map(investment_price),
        Control::HasBuildingModels => Some(model_fee(index == 0)),
        Control::NeedsApartmentModels if index == 0 => Some(APARTMENT_MODELS_PRICE),
        Control::PlotDetail | Control::NeighborhoodDetail => {
            DetailTier::iter().nth(index).map(detail_tier_price)
        }
        Control::HeroAnimation => HeroAnimation::iter().nth(index).map(hero_animation_price),
        _ => None,
    }
}

fn toggle_hint(control: Control) -> Option<Money> {
    match control {
        Control::Amenities => Some(AMENITIES_PRICE),
        Control::HighlightAnimation => Some(HIGHLIGHT_ANIMATION_PRICE),
        Control::FilteringSorting => Some(FILTERING_SORTING_PRICE),
        _ => None,
    }
}

fn hint_span(hint: Option<Money>) -> Span<'static> {
    match hint.filter(|amount| !amount.is_zero()) {
        Some(amount) => Span::styled(format!("  +{}", amount.short()), Styles::text_muted()),
        None => Span::raw(""),
    }
}

fn question_line(control: Control, focused: bool) -> Line<'static> {
    let (marker, style) = if focused {
        ("▶ ", Styles::focused())
    } else {
        ("  ", Styles::question())
    };
    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(control.title(), style),
    ])
}

impl Document {
    /// Lay the document out for the current selections
    pub fn build(store: &SelectionStore, focus: Option<Control>) -> Self {
        let state = store.snapshot();
        let breakdown = store.breakdown();
        let mut doc = Self::default();

        doc.push(Line::from(Span::styled(
            "Estimate the cost of your architectural visualization project.",
            Styles::text_secondary(),
        )));
        doc.push(Line::from(Span::styled(
            "Answer the questions below; the total updates as you go.",
            Styles::text_muted(),
        )));
        doc.push(Line::from(""));

        for section in Section::ALL {
            let top = doc.row();
            doc.push(Line::from(vec![
                Span::styled(
                    format!("{}. {}", section.index() + 1, section.title()),
                    Styles::section_heading(),
                ),
                Span::raw("  "),
                Span::styled(
                    breakdown.section_subtotal(section).to_string(),
                    Styles::price(),
                ),
            ]));
            doc.push(Line::from(""));

            for control in Control::visible_in(section, state) {
                let control_top = doc.row();
                doc.push_control(store, control, focus == Some(control));
                doc.controls.push(ControlSpan {
                    control,
                    top: control_top,
                    bottom: doc.row(),
                });
                doc.push(Line::from(""));
            }

            doc.push(Line::from(""));
            doc.sections.push(SectionBand {
                section,
                top,
                bottom: doc.row(),
            });
        }

        doc.push_result(&breakdown);
        doc
    }

    fn row(&self) -> u32 {
        self.lines.len() as u32
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn push_control(&mut self, store: &SelectionStore, control: Control, focused: bool) {
        let state = store.snapshot();
        match control.kind() {
            ControlKind::Choice | ControlKind::Question => {
                self.push(question_line(control, focused));
                let selected = control.selected_index(state);
                for (index, label) in control.options().into_iter().enumerate() {
                    let is_selected = selected == Some(index);
                    let (mark, style) = if is_selected {
                        ("(•) ", Styles::selected())
                    } else {
                        ("( ) ", Styles::unselected())
                    };
                    self.push(Line::from(vec![
                        Span::raw("    "),
                        Span::styled(mark, style),
                        Span::styled(label, style),
                        hint_span(option_hint(control, index)),
                    ]));
                }
            }
            ControlKind::Toggle => {
                let on = control.toggle_value(state).unwrap_or(false);
                let (mark, style) = if on {
                    ("[x] ", Styles::selected())
                } else {
                    ("[ ] ", Styles::unselected())
                };
                let mut line = question_line(control, focused);
                line.spans.insert(1, Span::styled(mark, style));
                line.spans.push(hint_span(toggle_hint(control)));
                self.push(line);
            }
            ControlKind::Counter => {
                self.push(question_line(control, focused));
                let value = control.counter_value(state).unwrap_or_default();
                let arrow = |enabled: bool, glyph: &'static str| {
                    if enabled {
                        Span::styled(glyph, Styles::text())
                    } else {
                        Span::styled(glyph, Styles::text_muted())
                    }
                };
                self.push(Line::from(vec![
                    Span::raw("    "),
                    arrow(control.can_decrement(state), "◀ "),
                    Span::styled(format!("{:>3}", value), Styles::selected()),
                    arrow(control.can_increment(state), " ▶"),
                ]));
            }
        }
    }

    fn push_result(&mut self, breakdown: &PriceBreakdown) {
        self.push(Line::from(Span::styled("Your estimate", Styles::section_heading())));
        self.push(Line::from(""));
        if breakdown.items.is_empty() {
            self.push(Line::from(Span::styled(
                "  Nothing selected yet.",
                Styles::text_muted(),
            )));
        }
        for item in &breakdown.items {
            self.push(Line::from(vec![
                Span::styled(format!("  {:<48}", item.key.to_string()), Styles::text()),
                Span::styled(format!("{:>12}", item.amount.to_string()), Styles::price()),
            ]));
        }
        self.push(Line::from(""));
        self.push(Line::from(vec![
            Span::styled(format!("  {:<48}", UiText::TOTAL_LABEL), Styles::question()),
            Span::styled(format!("{:>12}", breakdown.total().to_string()), Styles::price()),
        ]));
        self.push(Line::from(""));
    }

    /// Number of rows
    pub fn len(&self) -> u32 {
        self.row()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Section bands in page rows: the document starts below `fixed_offset` rows of
    /// sticky chrome
    pub fn geometry(&self, fixed_offset: u32) -> SectionGeometry {
        SectionGeometry::new(
            self.sections
                .iter()
                .map(|band| SectionBand {
                    section: band.section,
                    top: band.top + fixed_offset,
                    bottom: band.bottom + fixed_offset,
                })
                .collect(),
        )
    }

    pub fn control_span(&self, control: Control) -> Option<&ControlSpan> {
        self.controls.iter().find(|span| span.control == control)
    }

    /// Document band of a section
    pub fn section_band(&self, section: Section) -> Option<&SectionBand> {
        self.sections.iter().find(|band| band.section == section)
    }

    /// Lines visible from `scroll` in a viewport of `height` rows
    pub fn visible_lines(&self, scroll: u32, height: u16) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .skip(scroll as usize)
            .take(usize::from(height))
            .cloned()
            .collect()
    }
}
