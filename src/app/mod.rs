//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, StatusKind)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState, StatusKind};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::Settings;
use crate::error::Result;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// Poll interval while idle
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for dispatch and navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self::with_state(AppState::new(settings))
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Main event loop
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        info!("Starting main application loop");

        let size = terminal.size()?;
        self.handle_resize(size.width, size.height);

        loop {
            // Animation frames drive the poll timeout while a jump is in flight
            let timeout = if self.state.is_animating() {
                self.state.settings.animation.tick()
            } else {
                IDLE_POLL
            };

            if crossterm::event::poll(timeout)? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event) {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height);
                    }
                    _ => {}
                }
            } else if self.state.is_animating() {
                self.state.tick_animation();
            }

            // Render UI
            terminal.draw(|f| self.render(f))?;
        }

        info!(total = %self.state.store.total_price(), "Calculator closed");
        Ok(())
    }

    /// Draw one frame
    pub fn render(&self, f: &mut Frame) {
        self.ui_renderer
            .render_with_context(f, &self.state, &self.keybinding_context);
    }

    /// Handle a key press. Returns true when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return false;
        }
        let Some(action) = self
            .keybinding_context
            .action_for(&self.state.mode, &key_event)
        else {
            return false;
        };
        debug!(?action, mode = ?self.state.mode, "Key action");
        self.dispatch(action)
    }

    /// Apply an action. Returns true when the app should exit.
    pub fn dispatch(&mut self, action: KeyAction) -> bool {
        let state = &mut self.state;
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help | KeyAction::Dismiss => state.toggle_help(),
            KeyAction::FocusUp => state.focus_previous(),
            KeyAction::FocusDown => state.focus_next(),
            KeyAction::Decrease => state.adjust_focused(-1),
            KeyAction::Increase => state.adjust_focused(1),
            KeyAction::Activate => state.activate_focused(),
            KeyAction::Clear => state.clear_focused(),
            KeyAction::PageUp => state.page_up(),
            KeyAction::PageDown => state.page_down(),
            KeyAction::Home => state.home(),
            KeyAction::End => state.end(),
            KeyAction::JumpSection(index) => state.jump_to_index(index),
            KeyAction::NextSection => state.next_section(),
            KeyAction::PreviousSection => state.previous_section(),
            KeyAction::SaveReceipt => {
                state.write_receipt();
            }
        }
        false
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.state.handle_resize(width, height);
    }
}
