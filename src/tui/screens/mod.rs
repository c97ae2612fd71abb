//! # Screens
//!
//! Top-level, interchangeable UI modes and the machine that switches
//! between them.
//!
//! ```text
//!            TuiEvent
//!               │
//!               ▼
//!   ┌──────── ScreenMachine ────────┐
//!   │  active ──► Box<dyn Screen>   │
//!   │             update() ──► Outcome { transition, action }
//!   └───────────────────────────────┘
//!               │
//!      transition? switch active screen
//!      action?     handed back to the shell for core::update
//! ```
//!
//! Screens are registered once and never torn down, so leaving a screen and
//! coming back finds it exactly as it was. Asking for a screen that was never
//! registered is a bug in the program, reported as [`ScreenError`].

pub mod browser;
pub mod help;

use std::fmt;

use log::{info, warn};
use ratatui::text::{Line, Text};

use crate::core::action::Action;
use crate::core::geometry::Geometry;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{BottomBorder, Pane, StatusLine, TabStrip};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

pub use browser::Browser;
pub use help::Help;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Main,
    Help,
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenId::Main => write!(f, "main"),
            ScreenId::Help => write!(f, "help"),
        }
    }
}

/// What a screen wants to happen after handling an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Screen to switch to. `None` stays put.
    pub transition: Option<ScreenId>,
    /// Follow-up for the shared model.
    pub action: Option<Action>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn transition(to: ScreenId) -> Self {
        Self {
            transition: Some(to),
            action: None,
        }
    }

    pub fn action(action: Option<Action>) -> Self {
        Self {
            transition: None,
            action,
        }
    }
}

pub trait Screen {
    fn id(&self) -> ScreenId;

    /// The geometry changed; recompute anything derived from it.
    fn relayout(&mut self, geometry: &Geometry);

    fn update(&mut self, event: TuiEvent, app: &App) -> Outcome;

    fn view(&self, app: &App, theme: &Theme) -> Text<'static>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenError {
    Unregistered(ScreenId),
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::Unregistered(id) => {
                write!(f, "transition to unregistered screen '{id}'")
            }
        }
    }
}

impl std::error::Error for ScreenError {}

/// Owns every screen instance and routes events to the active one.
pub struct ScreenMachine {
    screens: Vec<Box<dyn Screen>>,
    active: usize,
}

impl ScreenMachine {
    /// Start on `initial`. There is always at least one screen.
    pub fn new(initial: Box<dyn Screen>) -> Self {
        Self {
            screens: vec![initial],
            active: 0,
        }
    }

    /// Add a screen. A screen with the same id is replaced.
    pub fn register(&mut self, screen: Box<dyn Screen>) {
        match self.position(screen.id()) {
            Some(index) => {
                warn!("Replacing already registered screen '{}'", screen.id());
                self.screens[index] = screen;
            }
            None => self.screens.push(screen),
        }
    }

    pub fn with(mut self, screen: Box<dyn Screen>) -> Self {
        self.register(screen);
        self
    }

    pub fn active_id(&self) -> ScreenId {
        self.screens[self.active].id()
    }

    pub fn is_registered(&self, id: ScreenId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: ScreenId) -> Option<usize> {
        self.screens.iter().position(|screen| screen.id() == id)
    }

    /// Every screen, not just the active one: a hidden screen must be
    /// correct the moment it becomes visible again.
    pub fn relayout(&mut self, geometry: &Geometry) {
        for screen in &mut self.screens {
            screen.relayout(geometry);
        }
    }

    /// Forward `event` to the active screen and apply its transition.
    ///
    /// Returns the follow-up action, if any, for the caller to run.
    pub fn dispatch(&mut self, event: TuiEvent, app: &App) -> Result<Option<Action>, ScreenError> {
        let outcome = self.screens[self.active].update(event, app);

        if let Some(target) = outcome.transition {
            let index = self
                .position(target)
                .ok_or(ScreenError::Unregistered(target))?;
            info!("Screen transition: {} -> {}", self.active_id(), target);
            self.active = index;
        }
        Ok(outcome.action)
    }

    pub fn view(&self, app: &App, theme: &Theme) -> Text<'static> {
        self.screens[self.active].view(app, theme)
    }
}

/// Stack the standard frame: tab strip, content pane, status row, border.
pub(crate) fn compose(
    app: &App,
    theme: &Theme,
    tabs: TabStrip<'_>,
    body: Vec<Line<'static>>,
    status: StatusLine<'_>,
) -> Text<'static> {
    let geometry = &app.geometry;
    let width = geometry.width();
    let chrome = geometry.chrome();

    let mut lines = tabs.lines(width, theme);
    lines.extend(Pane::new(body, geometry.content_height()).lines(width, theme));
    lines.extend(
        Pane::new(status.lines(geometry.inner_width(), theme), chrome.status_line)
            .lines(width, theme),
    );
    lines.extend(BottomBorder.lines(width, theme));
    // Shorter than the chrome: keep the top of the frame, drop the rest.
    lines.truncate(usize::from(geometry.height()));
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_browser};

    #[test]
    fn test_starts_on_initial_screen() {
        let machine = ScreenMachine::new(Box::new(test_browser()));
        assert_eq!(machine.active_id(), ScreenId::Main);
        assert!(!machine.is_registered(ScreenId::Help));
    }

    #[test]
    fn test_transition_to_registered_screen() {
        let app = test_app();
        let mut machine = ScreenMachine::new(Box::new(test_browser())).with(Box::new(Help));

        let action = machine.dispatch(TuiEvent::ToggleHelp, &app).unwrap();
        assert_eq!(action, None);
        assert_eq!(machine.active_id(), ScreenId::Help);

        machine.dispatch(TuiEvent::Back, &app).unwrap();
        assert_eq!(machine.active_id(), ScreenId::Main);
    }

    #[test]
    fn test_transition_to_unregistered_screen_fails() {
        let app = test_app();
        let mut machine = ScreenMachine::new(Box::new(test_browser()));
        let err = machine.dispatch(TuiEvent::ToggleHelp, &app).unwrap_err();
        assert_eq!(err, ScreenError::Unregistered(ScreenId::Help));
        assert_eq!(machine.active_id(), ScreenId::Main);
        assert_eq!(err.to_string(), "transition to unregistered screen 'help'");
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut machine = ScreenMachine::new(Box::new(test_browser())).with(Box::new(Help));
        machine.register(Box::new(Help));
        assert_eq!(machine.screens.len(), 2);
    }

    #[test]
    fn test_compose_never_exceeds_terminal_height() {
        for (width, height) in [(200, 3), (40, 0), (10, 1), (80, 5)] {
            let mut app = test_app();
            app.geometry.resize(width, height);
            let mut browser = test_browser();
            browser.relayout(&app.geometry);
            let text = ScreenMachine::new(Box::new(browser)).view(&app, &Theme::plain());
            assert_eq!(text.lines.len(), usize::from(height));
        }
    }

    #[test]
    fn test_compose_fills_terminal_height() {
        let app = test_app();
        let machine = ScreenMachine::new(Box::new(test_browser()));
        let text = machine.view(&app, &Theme::plain());
        assert_eq!(text.lines.len(), usize::from(app.geometry.height()));
    }
}
