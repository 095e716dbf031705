//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current application mode.
//! The app resolves every key event through [`KeybindingContext::action_for`], so the nav
//! bar, the help overlay and the actual behavior share one table.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    FocusUp,
    FocusDown,
    Decrease,
    Increase,
    Activate,
    Clear,
    PageUp,
    PageDown,
    Home,
    End,
    /// Jump to the section at this zero-based index
    JumpSection(usize),
    NextSection,
    PreviousSection,
    SaveReceipt,
    Help,
    Dismiss,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding. Bindings without modifiers ignore
    /// Shift (terminals report `BackTab` with it) but never match Control combinations.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.code != self.key {
            return false;
        }
        if self.modifiers.is_empty() {
            !event.modifiers.contains(KeyModifiers::CONTROL)
        } else {
            event.modifiers.contains(self.modifiers)
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ];

        // Calculator
        self.mode_bindings.insert(
            AppMode::Calculator,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::FocusUp, "Up", "Previous question"),
                Keybinding::new(KeyCode::Down, KeyAction::FocusDown, "Down", "Next question"),
                Keybinding::new(
                    KeyCode::Left,
                    KeyAction::Decrease,
                    "Left",
                    "Previous option / decrease",
                ),
                Keybinding::new(
                    KeyCode::Right,
                    KeyAction::Increase,
                    "Right",
                    "Next option / increase",
                ),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Activate, "Space", "Toggle / cycle"),
                Keybinding::new(KeyCode::Enter, KeyAction::Activate, "Enter", "Toggle / cycle"),
                Keybinding::new(KeyCode::Delete, KeyAction::Clear, "Del", "Clear answer"),
                Keybinding::new(KeyCode::Backspace, KeyAction::Clear, "Bksp", "Clear answer"),
                Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Scroll page up"),
                Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Scroll page down"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "Scroll to top"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Scroll to bottom"),
                Keybinding::new(
                    KeyCode::Char('1'),
                    KeyAction::JumpSection(0),
                    "1",
                    "Jump to Buildings",
                ),
                Keybinding::new(
                    KeyCode::Char('2'),
                    KeyAction::JumpSection(1),
                    "2",
                    "Jump to Apartments",
                ),
                Keybinding::new(
                    KeyCode::Char('3'),
                    KeyAction::JumpSection(2),
                    "3",
                    "Jump to Environment",
                ),
                Keybinding::new(
                    KeyCode::Char('4'),
                    KeyAction::JumpSection(3),
                    "4",
                    "Jump to Website",
                ),
                Keybinding::new(KeyCode::Tab, KeyAction::NextSection, "Tab", "Next section"),
                Keybinding::new(
                    KeyCode::BackTab,
                    KeyAction::PreviousSection,
                    "S-Tab",
                    "Previous section",
                ),
                Keybinding::new(KeyCode::Char('r'), KeyAction::SaveReceipt, "R", "Save receipt"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            ],
        );

        // Help overlay
        self.mode_bindings.insert(
            AppMode::Help,
            vec![
                Keybinding::new(KeyCode::Char('?'), KeyAction::Dismiss, "?", "Close help"),
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close help"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key event to an action in the given mode
    pub fn action_for(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        let bindings = self.get_bindings(mode);
        // bindings with modifiers win over plain ones for the same key
        bindings
            .iter()
            .filter(|b| !b.modifiers.is_empty())
            .chain(bindings.iter().filter(|b| b.modifiers.is_empty()))
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        match mode {
            AppMode::Calculator => vec![
                NavBarItem::new("Up/Dn", "Question"),
                NavBarItem::new("Left/Right", "Change"),
                NavBarItem::new("Space", "Toggle"),
                NavBarItem::new("1-4/Tab", "Section"),
                NavBarItem::new("R", "Receipt"),
                NavBarItem::new("?", "Help"),
                NavBarItem::new("Q", "Quit"),
            ],
            AppMode::Help => vec![
                NavBarItem::new("Esc", "Close help"),
                NavBarItem::new("Q", "Quit"),
            ],
        }
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 4] = [
            ("Questions", |a| {
                matches!(
                    a,
                    KeyAction::FocusUp
                        | KeyAction::FocusDown
                        | KeyAction::Decrease
                        | KeyAction::Increase
                        | KeyAction::Activate
                        | KeyAction::Clear
                )
            }),
            ("Scrolling", |a| {
                matches!(
                    a,
                    KeyAction::PageUp | KeyAction::PageDown | KeyAction::Home | KeyAction::End
                )
            }),
            ("Sections", |a| {
                matches!(
                    a,
                    KeyAction::JumpSection(_) | KeyAction::NextSection | KeyAction::PreviousSection
                )
            }),
            ("General", |a| {
                matches!(
                    a,
                    KeyAction::SaveReceipt | KeyAction::Help | KeyAction::Dismiss | KeyAction::Quit
                )
            }),
        ];

        let bindings = self.get_bindings(mode);
        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| belongs(b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

impl NavBarItem {
    fn new(key_display: &str, action_label: &str) -> Self {
        Self {
            key_display: key_display.to_string(),
            action_label: action_label.to_string(),
        }
    }
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
