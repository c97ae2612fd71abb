//! # StatusLine Component
//!
//! The row between the content pane and the bottom border.
//!
//! ## Conditional Formatting
//!
//! The left side changes with state:
//!
//! 1. **Playing + stats**: `"▶ Song 3 · John Music | pane 19 · item 4 · 4/page · page 1/13"`
//! 2. **Playing**: `"▶ Song 3 · John Music"`
//! 3. **Idle**: `"Nothing playing"` (stats still appended when enabled)
//!
//! The right side shows the daemon link (`● online` / `○ offline`). When the
//! row is too narrow for both, the link marker is dropped first so the
//! playing item stays visible.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::library::NowPlaying;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Layout numbers for the current tab, shown on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutStats {
    pub content_height: u16,
    pub item_height: u16,
    pub per_page: usize,
    pub page: usize,
    pub page_count: usize,
}

pub struct StatusLine<'a> {
    pub now_playing: Option<&'a NowPlaying>,
    pub stats: Option<LayoutStats>,
    pub connected: bool,
}

impl<'a> StatusLine<'a> {
    pub fn new(now_playing: Option<&'a NowPlaying>, connected: bool) -> Self {
        Self {
            now_playing,
            stats: None,
            connected,
        }
    }

    pub fn with_stats(mut self, stats: Option<LayoutStats>) -> Self {
        self.stats = stats;
        self
    }

    fn message(&self) -> String {
        let playing = match self.now_playing {
            Some(item) if item.subtitle().is_empty() => format!("▶ {}", item.title()),
            Some(item) => format!("▶ {} · {}", item.title(), item.subtitle()),
            None => "Nothing playing".to_string(),
        };
        match self.stats {
            Some(s) => format!(
                "{playing} | pane {} · item {} · {}/page · page {}/{}",
                s.content_height,
                s.item_height,
                s.per_page,
                // Pages are shown 1-based; an empty list is "page 0/0".
                if s.page_count == 0 { 0 } else { s.page + 1 },
                s.page_count
            ),
            None => playing,
        }
    }
}

impl Component for StatusLine<'_> {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let left = format!(" {}", self.message());
        let right = if self.connected {
            "● online "
        } else {
            "○ offline "
        };

        let width = usize::from(width);
        let used = left.width() + right.width();
        let line = if used < width {
            Line::from(vec![
                Span::styled(left, theme.status),
                Span::raw(" ".repeat(width - used)),
                Span::styled(right, theme.status),
            ])
        } else {
            Line::from(Span::styled(left, theme.status))
        };
        vec![line]
    }
}
