//! Text receipt of a price breakdown.
//!
//! The receipt lists every section's choices with `(+$N)` suffixes. Suffix amounts are
//! looked up in the [`PriceBreakdown`] line items, never recomputed, so the receipt always
//! agrees with the total shown in the calculator.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::info;

use crate::engine::pricing::{LineKey, PriceBreakdown};
use crate::error::{EstimatorError, Result};
use crate::money::Money;
use crate::store::SelectionState;
use crate::theme::UiText;
use crate::types::{Answer, InvestmentType, Section};

pub const RECEIPT_TITLE: &str = "Investment Calculator Receipt";
pub const RECEIPT_FOOTER: &str = "Thank you for using our Investment Calculator";
const FILE_STEM: &str = "investment-calculator";
const LABEL_WIDTH: usize = 24;

/// One labelled row of the receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptRow {
    pub label: &'static str,
    pub value: String,
    /// Charge for this row, when it contributes to the total
    pub charge: Option<Money>,
}

impl ReceiptRow {
    fn new(label: &'static str, value: impl Into<String>, charge: Option<Money>) -> Self {
        Self {
            label,
            value: value.into(),
            charge: charge.filter(|amount| !amount.is_zero()),
        }
    }

    /// Value with its `(+$N)` suffix
    pub fn display_value(&self) -> String {
        match self.charge {
            Some(amount) => format!("{} (+{})", self.value, amount.short()),
            None => self.value.clone(),
        }
    }
}

/// Rows of one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptSection {
    pub section: Section,
    pub rows: Vec<ReceiptRow>,
}

/// Receipt content, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub date: NaiveDate,
    pub sections: Vec<ReceiptSection>,
    pub total: Money,
}

fn answer_text(answer: Answer) -> String {
    answer.to_string()
}

fn option_text<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| UiText::NOT_SELECTED.to_string(), |v| v.to_string())
}

fn yes_no(value: bool) -> String {
    Answer::from(value).to_string()
}

impl Receipt {
    /// Build the receipt for a selection snapshot and its breakdown
    pub fn build(state: &SelectionState, breakdown: &PriceBreakdown, date: NaiveDate) -> Self {
        let find = |pred: fn(&LineKey) -> bool| breakdown.amount_of(pred);

        let mut buildings = vec![
            ReceiptRow::new(
                "Investment Type",
                option_text(state.investment_type),
                find(|k| matches!(k, LineKey::InvestmentBase { .. })),
            ),
            ReceiptRow::new(
                "Has 3D Models",
                answer_text(state.has_building_models),
                find(|k| matches!(k, LineKey::ModelFee { .. })),
            ),
        ];
        if state.investment_type.is_some_and(InvestmentType::is_multiple) {
            buildings.push(ReceiptRow::new(
                "Overall Buildings",
                state.overall_buildings.to_string(),
                None,
            ));
            buildings.push(ReceiptRow::new(
                "Unique Buildings",
                state.unique_buildings.to_string(),
                None,
            ));
        }
        buildings.push(ReceiptRow::new(
            "Documentation Type",
            option_text(state.documentation_type),
            None,
        ));
        buildings.push(ReceiptRow::new(
            "Additional Amenities",
            yes_no(state.amenities),
            find(|k| matches!(k, LineKey::Amenities)),
        ));

        let mut apartments = vec![ReceiptRow::new(
            "Needs 3D Models",
            answer_text(state.needs_apartment_models),
            find(|k| matches!(k, LineKey::ApartmentModels)),
        )];
        if state.needs_apartment_models.is_yes() {
            apartments.push(ReceiptRow::new(
                "Overall Apartments",
                state.overall_apartments.to_string(),
                find(|k| matches!(k, LineKey::OverallApartments { .. })),
            ));
            apartments.push(ReceiptRow::new(
                "Unique Apartments",
                state.unique_apartments.to_string(),
                find(|k| matches!(k, LineKey::UniqueApartments { .. })),
            ));
            apartments.push(ReceiptRow::new(
                "Average Rooms",
                state.average_rooms.to_string(),
                find(|k| matches!(k, LineKey::AverageRooms { .. })),
            ));
        }

        let mut environment = vec![ReceiptRow::new(
            "Has Environment Model",
            answer_text(state.has_environment_model),
            find(|k| matches!(k, LineKey::EnvironmentCreation)),
        )];
        if state.has_environment_model.is_no() {
            environment.push(ReceiptRow::new(
                "Plot Detail",
                option_text(state.plot_detail),
                find(|k| matches!(k, LineKey::PlotDetail { .. })),
            ));
            environment.push(ReceiptRow::new(
                "Neighborhood Detail",
                option_text(state.neighborhood_detail),
                find(|k| matches!(k, LineKey::NeighborhoodDetail { .. })),
            ));
        } else if state.has_environment_model.is_yes() {
            environment.push(ReceiptRow::new(
                "File Format",
                option_text(state.file_format),
                None,
            ));
        }

        let website = vec![
            ReceiptRow::new(
                "Highlight Animation",
                yes_no(state.highlight_animation),
                find(|k| matches!(k, LineKey::HighlightAnimation)),
            ),
            ReceiptRow::new(
                "Filtering/Sorting",
                yes_no(state.filtering_sorting),
                find(|k| matches!(k, LineKey::FilteringSorting)),
            ),
            ReceiptRow::new(
                "Languages",
                state.languages.to_string(),
                find(|k| matches!(k, LineKey::Languages { .. })),
            ),
            ReceiptRow::new(
                "Hero Animation",
                option_text(state.hero_animation),
                find(|k| matches!(k, LineKey::HeroAnimation { .. })),
            ),
        ];

        let sections = [buildings, apartments, environment, website]
            .into_iter()
            .zip(Section::ALL)
            .map(|(rows, section)| ReceiptSection { section, rows })
            .collect();

        Self {
            date,
            sections,
            total: breakdown.total(),
        }
    }

    /// Receipt dated today (local time)
    pub fn build_today(state: &SelectionState, breakdown: &PriceBreakdown) -> Self {
        Self::build(state, breakdown, Local::now().date_naive())
    }

    /// File name, `investment-calculator-YYYY-MM-DD.txt`
    pub fn file_name(&self) -> String {
        format!("{}-{}.txt", FILE_STEM, self.date.format("%Y-%m-%d"))
    }

    /// Render as plain text
    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(48);

        // writeln! into a String cannot fail
        let _ = writeln!(out, "{}", RECEIPT_TITLE);
        let _ = writeln!(out, "Generated on {}", self.date.format("%-m/%-d/%Y"));
        let _ = writeln!(out, "{}", rule);

        for section in &self.sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", section.section.title());
            let _ = writeln!(out, "{}", "-".repeat(section.section.title().len()));
            for row in &section.rows {
                let label = format!("{}:", row.label);
                let value = row.display_value();
                let _ = writeln!(out, "{:<width$}{}", label, value, width = LABEL_WIDTH);
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "{:<width$}{}", "TOTAL:", self.total, width = LABEL_WIDTH);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", RECEIPT_FOOTER);
        out
    }

    /// Write the rendered receipt into `dir`, returning the file path
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(EstimatorError::receipt(format!(
                "receipt directory {:?} does not exist",
                dir
            )));
        }
        let path = dir.join(self.file_name());
        self.write_to_file(&path)?;
        Ok(path)
    }

    /// Write the rendered receipt to `path`
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(&path, self.render())?;
        info!(path = ?path.as_ref(), total = %self.total, "Receipt written");
        Ok(())
    }
}

/// Breakdown as pretty JSON, for `quote --json`
pub fn breakdown_json(breakdown: &PriceBreakdown) -> Result<String> {
    #[derive(Serialize)]
    struct Export<'a> {
        #[serde(flatten)]
        breakdown: &'a PriceBreakdown,
        total: Money,
    }

    let export = Export {
        breakdown,
        total: breakdown.total(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}
