//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, turns crossterm events
//! into [`TuiEvent`]s and hands them to the [`Shell`].
//!
//! This is the only module that knows about ratatui and crossterm; `core`
//! never sees a terminal.
//!
//! ## Event Loop
//!
//! Strictly one turn at a time:
//!
//! ```text
//! draw ──► block on next event ──► Shell::step ──► draw ...
//! ```
//!
//! Nothing animates, so the loop sleeps inside `event::read` until a key
//! or a resize arrives. A resize is an ordinary event: the geometry and
//! every screen's pagination are recomputed in `step`, before the next draw.

mod component;
pub mod components;
pub mod event;
pub mod screens;
pub mod shell;
pub mod theme;
mod ui;

use std::fmt;
use std::io::{self, IsTerminal};

use log::info;
use ratatui::DefaultTerminal;

use crate::core::config::ResolvedConfig;
use crate::core::geometry::{Chrome, Geometry, SizeUnavailable};
use crate::core::library::Library;
use crate::core::pagination::LayoutError;
use crate::core::state::App;
use crate::tui::components::ItemHeights;
use crate::tui::event::{TuiEvent, read_event};
use crate::tui::screens::{Browser, ScreenError};
use crate::tui::shell::{Flow, Shell};
use crate::tui::theme::{Theme, ThemeError};

pub use component::Component;

#[derive(Debug)]
pub enum TuiError {
    Io(io::Error),
    /// stdin or stdout is not a terminal.
    NotInteractive,
    Layout(LayoutError),
    Theme(ThemeError),
    Screen(ScreenError),
}

impl fmt::Display for TuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuiError::Io(e) => write!(f, "terminal I/O failed: {e}"),
            TuiError::NotInteractive => write!(f, "playtab needs an interactive terminal"),
            TuiError::Layout(e) => write!(f, "{e}"),
            TuiError::Theme(e) => write!(f, "{e}"),
            TuiError::Screen(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TuiError {}

impl From<io::Error> for TuiError {
    fn from(e: io::Error) -> Self {
        TuiError::Io(e)
    }
}

impl From<LayoutError> for TuiError {
    fn from(e: LayoutError) -> Self {
        TuiError::Layout(e)
    }
}

impl From<ThemeError> for TuiError {
    fn from(e: ThemeError) -> Self {
        TuiError::Theme(e)
    }
}

impl From<ScreenError> for TuiError {
    fn from(e: ScreenError) -> Self {
        TuiError::Screen(e)
    }
}

/// Ask the terminal for its size. A zero dimension counts as a failure.
fn terminal_size() -> Result<(u16, u16), SizeUnavailable> {
    match crossterm::terminal::size() {
        Ok((width, height)) if width == 0 || height == 0 => {
            Err(SizeUnavailable::Empty { width, height })
        }
        Ok(size) => Ok(size),
        Err(e) => Err(SizeUnavailable::Query(e)),
    }
}

pub fn run(config: ResolvedConfig) -> Result<(), TuiError> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return Err(TuiError::NotInteractive);
    }

    // Configuration defects surface here, before the terminal is touched.
    let heights = ItemHeights::measure()?;
    let theme = Theme::from_config(&config)?;

    let geometry = Geometry::from_query(terminal_size, config.fallback_size, Chrome::STANDARD);
    info!(
        "Starting at {}x{} on tab {}",
        geometry.width(),
        geometry.height(),
        config.initial_tab.label()
    );

    let library = Library::demo(config.demo_songs, config.demo_stations);
    let browser = Browser::new(
        library,
        heights,
        config.initial_tab,
        config.show_layout_stats,
    );
    let mut shell = Shell::with_browser(App::new(geometry), theme, browser);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut shell);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, shell: &mut Shell) -> Result<(), TuiError> {
    loop {
        terminal.draw(|frame| ui::draw(frame, shell))?;

        let event = next_event()?;
        if shell.step(event)? == Flow::Quit {
            info!("Shutting down");
            return Ok(());
        }
    }
}

/// Skip unbound input without redrawing.
fn next_event() -> io::Result<TuiEvent> {
    loop {
        if let Some(event) = read_event()? {
            return Ok(event);
        }
    }
}
