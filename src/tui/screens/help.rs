//! Keymap reference. `?` or `Esc` goes back to the browser.

use ratatui::text::{Line, Span, Text};

use crate::core::geometry::Geometry;
use crate::core::state::App;
use crate::tui::components::{StatusLine, TabStrip};
use crate::tui::event::TuiEvent;
use crate::tui::screens::{Outcome, Screen, ScreenId, compose};
use crate::tui::theme::Theme;

const KEYMAP: [(&str, &str); 8] = [
    ("ctrl+c", "quit"),
    ("tab", "next tab"),
    ("shift+tab", "previous tab"),
    ("l / h", "next / previous page"),
    ("j / k", "move selection down / up"),
    ("enter", "play selected item"),
    ("?", "toggle this help"),
    ("esc", "back"),
];

pub struct Help;

impl Screen for Help {
    fn id(&self) -> ScreenId {
        ScreenId::Help
    }

    fn relayout(&mut self, _geometry: &Geometry) {}

    fn update(&mut self, event: TuiEvent, _app: &App) -> Outcome {
        match event {
            TuiEvent::ToggleHelp | TuiEvent::Back => Outcome::transition(ScreenId::Main),
            _ => Outcome::none(),
        }
    }

    fn view(&self, app: &App, theme: &Theme) -> Text<'static> {
        let mut body = vec![Line::default()];
        body.extend(KEYMAP.iter().map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("   {key:<12}"), theme.selected),
                Span::styled(*what, theme.text_primary),
            ])
        }));

        compose(
            app,
            theme,
            TabStrip::new(&["Help"], 0),
            body,
            StatusLine::new(app.now_playing.as_ref(), app.connected),
        )
    }
}
