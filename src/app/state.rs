//! Application state definitions
//!
//! `AppState` owns the selection store, the step navigator and the laid-out document.
//! Every mutation of the store rebuilds the document and feeds the new geometry to the
//! navigator, so the stepper, the subtotals and the total never lag behind the answers.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::controls::Control;
use crate::navigator::{ScrollAnimation, StepNavigator};
use crate::receipt::Receipt;
use crate::store::SelectionStore;
use crate::theme::UiConstants;
use crate::types::Section;
use crate::ui::document::Document;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Answering questions
    Calculator,
    /// Help overlay on top of the calculator
    Help,
}

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    pub store: SelectionStore,
    pub navigator: StepNavigator,
    /// Document laid out for the current store and focus
    pub document: Document,
    /// First document row shown
    pub scroll: u32,
    /// Terminal height
    pub viewport_height: u16,
    /// Rows available to the document between the stepper and the result panel
    pub doc_view_rows: u16,
    /// Focused control
    pub focus: Control,
    /// Smooth scroll in progress after a jump
    pub animation: Option<ScrollAnimation>,
    /// Status message for user feedback
    pub status_message: String,
    pub status_kind: StatusKind,
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self::with_store(settings, SelectionStore::new())
    }

    /// State over existing selections
    pub fn with_store(settings: Settings, store: SelectionStore) -> Self {
        let navigator = settings.navigator();
        let focus = Control::visible(store.snapshot())
            .first()
            .copied()
            .unwrap_or(Control::InvestmentType);
        let document = Document::build(&store, Some(focus));
        let mut state = Self {
            mode: AppMode::Calculator,
            store,
            navigator,
            document,
            scroll: 0,
            viewport_height: 0,
            doc_view_rows: 0,
            focus,
            animation: None,
            status_message: String::from("Ready"),
            status_kind: StatusKind::Info,
            settings,
        };
        state.handle_resize(80, 24);
        state
    }

    fn fixed_rows(&self) -> u32 {
        self.navigator.fixed_offset()
    }

    /// Largest scroll offset; the last document row stays on screen
    pub fn max_scroll(&self) -> u32 {
        self.document.len().saturating_sub(1)
    }

    fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status_kind = kind;
        self.status_message = message.into();
    }

    // =========================================================================
    // Document and viewport
    // =========================================================================

    /// Rebuild the document after a store or focus change and re-run the observers
    pub fn refresh(&mut self) {
        let visible = Control::visible(self.store.snapshot());
        if !visible.contains(&self.focus) {
            // the focused control was hidden by the last answer
            let hidden = self.focus;
            self.focus = visible
                .iter()
                .rev()
                .find(|c| **c < hidden)
                .or_else(|| visible.first())
                .copied()
                .unwrap_or(Control::InvestmentType);
        }
        self.document = Document::build(&self.store, Some(self.focus));
        self.scroll = self.scroll.min(self.max_scroll());
        self.observe();
    }

    fn observe(&mut self) {
        let geometry = self.document.geometry(self.fixed_rows());
        self.navigator
            .on_viewport(&geometry, self.scroll, u32::from(self.viewport_height));
    }

    /// New terminal size
    pub fn handle_resize(&mut self, _width: u16, height: u16) {
        self.viewport_height = height;
        let chrome = self.settings.layout.fixed_rows()
            + UiConstants::RESULT_PANEL_HEIGHT
            + UiConstants::NAV_BAR_HEIGHT;
        self.doc_view_rows = height.saturating_sub(chrome).max(1);
        debug!(height, doc_rows = self.doc_view_rows, "Viewport resized");
        self.scroll = self.scroll.min(self.max_scroll());
        self.observe();
    }

    /// Scroll to an absolute offset, clamped to the document
    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll = offset.min(self.max_scroll());
        self.observe();
    }

    /// Scroll by a signed number of rows; manual scrolling cancels a running jump
    pub fn scroll_by(&mut self, delta: i64) {
        self.animation = None;
        let target = (i64::from(self.scroll) + delta).clamp(0, i64::from(self.max_scroll()));
        self.scroll_to(target as u32);
    }

    fn page_rows(&self) -> i64 {
        i64::from(
            self.doc_view_rows
                .saturating_sub(1)
                .max(UiConstants::MIN_PAGE_SCROLL),
        )
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-self.page_rows());
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page_rows());
    }

    pub fn home(&mut self) {
        self.animation = None;
        self.scroll_to(0);
    }

    pub fn end(&mut self) {
        self.animation = None;
        self.scroll_to(self.max_scroll());
    }

    /// Keep the focused control inside the document view
    fn follow_focus(&mut self) {
        let Some(span) = self.document.control_span(self.focus).copied() else {
            return;
        };
        let rows = u32::from(self.doc_view_rows);
        if span.top < self.scroll {
            self.scroll_to(span.top);
        } else if span.bottom > self.scroll + rows {
            let height = span.bottom - span.top;
            if height >= rows {
                self.scroll_to(span.top);
            } else {
                self.scroll_to(span.bottom - rows);
            }
        }
    }

    // =========================================================================
    // Focus and answers
    // =========================================================================

    fn move_focus(&mut self, forward: bool) {
        let visible = Control::visible(self.store.snapshot());
        let Some(index) = visible.iter().position(|c| *c == self.focus) else {
            return;
        };
        let next = if forward {
            visible.get(index + 1)
        } else {
            index.checked_sub(1).and_then(|i| visible.get(i))
        };
        if let Some(next) = next.copied() {
            self.animation = None;
            self.focus = next;
            self.refresh();
            self.follow_focus();
        }
    }

    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    pub fn focus_previous(&mut self) {
        self.move_focus(false);
    }

    /// Left/Right on the focused control
    pub fn adjust_focused(&mut self, delta: i32) {
        self.focus.adjust(&mut self.store, delta);
        self.after_answer();
    }

    /// Space/Enter on the focused control
    pub fn activate_focused(&mut self) {
        self.focus.activate(&mut self.store);
        self.after_answer();
    }

    /// Reset the focused control to its unanswered value
    pub fn clear_focused(&mut self) {
        self.focus.clear(&mut self.store);
        self.after_answer();
    }

    fn after_answer(&mut self) {
        debug!(
            control = ?self.focus,
            value = %self.focus.value_text(self.store.snapshot()),
            "Answer changed"
        );
        self.refresh();
        self.follow_focus();
        let total = self.store.total_price();
        self.set_status(StatusKind::Info, format!("Total {}", total));
    }

    // =========================================================================
    // Section jumps
    // =========================================================================

    /// Jump to a section: the stepper switches at once, the view scrolls smoothly
    pub fn jump_to(&mut self, section: Section) {
        let geometry = self.document.geometry(self.fixed_rows());
        let Some(target) = self.navigator.jump_to(&geometry, section) else {
            return;
        };
        let target = target.min(self.max_scroll());

        if let Some(first) = Control::visible_in(section, self.store.snapshot()).first() {
            self.focus = *first;
            self.document = Document::build(&self.store, Some(self.focus));
        }

        let frames = self.settings.animation.frames;
        self.animation = Some(ScrollAnimation::new(self.scroll, target, frames));
    }

    pub fn jump_to_index(&mut self, index: usize) {
        if let Some(section) = Section::from_index(index) {
            self.jump_to(section);
        }
    }

    /// Section after the active one (the first when none is active)
    pub fn next_section(&mut self) {
        let target = match self.navigator.active() {
            Some(section) => section.next(),
            None => Some(Section::ALL[0]),
        };
        if let Some(section) = target {
            self.jump_to(section);
        }
    }

    pub fn previous_section(&mut self) {
        if let Some(section) = self.navigator.active().and_then(Section::previous) {
            self.jump_to(section);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advance the smooth scroll by one frame
    pub fn tick_animation(&mut self) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        match animation.tick() {
            Some(offset) => {
                let finished = animation.is_finished();
                self.scroll_to(offset);
                if finished {
                    self.animation = None;
                }
            }
            None => self.animation = None,
        }
    }

    /// Run the animation to its end
    pub fn finish_animation(&mut self) {
        while self.animation.is_some() {
            self.tick_animation();
        }
    }

    // =========================================================================
    // Receipt and help
    // =========================================================================

    /// Write today's receipt into the receipt directory
    pub fn write_receipt(&mut self) -> Option<PathBuf> {
        let receipt = Receipt::build_today(self.store.snapshot(), &self.store.breakdown());
        match receipt.write_to_dir(self.settings.receipt_dir()) {
            Ok(path) => {
                info!(path = ?path, "Receipt saved from calculator");
                let message = format!("Receipt saved to {}", path.display());
                self.set_status(StatusKind::Success, message);
                Some(path)
            }
            Err(e) => {
                warn!(error = %e, "Receipt not saved");
                self.set_status(StatusKind::Error, format!("Receipt not saved: {}", e));
                None
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Calculator => AppMode::Help,
            AppMode::Help => AppMode::Calculator,
        };
    }
}
