//! # Shell
//!
//! The whole running program as a value: shared model, screens and theme.
//!
//! ```text
//! step(shell, event) ──► shell'      // no I/O
//! render(shell)      ──► Text        // no I/O, no mutation
//! ```
//!
//! The terminal loop in `tui::run` is the only caller that touches a real
//! terminal; everything here can be driven directly from tests.

use ratatui::text::Text;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::event::TuiEvent;
use crate::tui::screens::{Browser, Help, ScreenError, ScreenId, ScreenMachine};
use crate::tui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    app: App,
    machine: ScreenMachine,
    theme: Theme,
}

impl Shell {
    pub fn new(app: App, mut machine: ScreenMachine, theme: Theme) -> Self {
        machine.relayout(&app.geometry);
        Self {
            app,
            machine,
            theme,
        }
    }

    /// The standard screen set: the browser as `main`, plus `help`.
    pub fn with_browser(app: App, theme: Theme, browser: Browser) -> Self {
        let machine = ScreenMachine::new(Box::new(browser)).with(Box::new(Help));
        Self::new(app, machine, theme)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn active_screen(&self) -> ScreenId {
        self.machine.active_id()
    }

    /// Process one event to completion.
    pub fn step(&mut self, event: TuiEvent) -> Result<Flow, ScreenError> {
        let action = match event {
            // Never reaches a screen: quitting cannot be swallowed.
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::Resize { width, height } => Some(Action::Resize { width, height }),
            other => self.machine.dispatch(other, &self.app)?,
        };

        Ok(match action {
            Some(action) => self.apply(action),
            None => Flow::Continue,
        })
    }

    fn apply(&mut self, action: Action) -> Flow {
        match update(&mut self.app, action) {
            Effect::None => Flow::Continue,
            Effect::Relayout => {
                self.machine.relayout(&self.app.geometry);
                Flow::Continue
            }
            Effect::Quit => Flow::Quit,
        }
    }

    pub fn render(&self) -> Text<'static> {
        self.machine.view(&self.app, &self.theme)
    }
}
