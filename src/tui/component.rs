use ratatui::text::Line;

use crate::tui::theme::Theme;

/// A reusable piece of the frame.
///
/// Components receive their data as struct fields ("props") and turn it into
/// styled lines for a given width. They never draw to the terminal and never
/// mutate anything, so the same props always produce the same lines.
///
/// The shell stacks component output into one `Text` per frame; only `ui.rs`
/// hands that to ratatui.
pub trait Component {
    /// Lines for a region `width` columns wide.
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>>;
}
