//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::text::{Line, Text};

use crate::core::geometry::Geometry;
use crate::core::library::Library;
use crate::core::state::App;
use crate::core::tabs::TabKind;
use crate::tui::components::ItemHeights;
use crate::tui::screens::Browser;
use crate::tui::shell::Shell;
use crate::tui::theme::Theme;

/// Plain text of a line, styles dropped.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// Plain text of every row of a rendered frame.
pub fn text_rows(text: &Text<'_>) -> Vec<String> {
    text.lines.iter().map(line_text).collect()
}

/// An 80x24 app with nothing playing.
pub fn test_app() -> App {
    App::new(Geometry::default())
}

/// A browser on the songs tab over the demo library, laid out for 80x24.
pub fn test_browser() -> Browser {
    use crate::tui::screens::Screen;

    let heights = ItemHeights::measure().expect("demo items have a height");
    let mut browser = Browser::new(Library::demo(50, 75), heights, TabKind::Songs, false);
    browser.relayout(&Geometry::default());
    browser
}

/// A shell with both screens registered and a plain theme.
pub fn test_shell() -> Shell {
    Shell::with_browser(test_app(), Theme::plain(), test_browser())
}
