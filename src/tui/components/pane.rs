//! # Pane Component
//!
//! The side-bordered body under the tab strip. A pane has no top border of
//! its own (the tab strip's joint row is its top edge); the closing
//! `╰──╯` row is drawn once, under the status line, by [`BottomBorder`].
//!
//! Contents are clipped or padded to the inner width by display width, so
//! the right border always lands in the same column.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Clip or pad `line` to exactly `width` display columns.
pub fn fit_line(line: Line<'static>, width: usize) -> Line<'static> {
    let style = line.style;
    let mut remaining = width;
    let mut spans = Vec::with_capacity(line.spans.len() + 1);

    for span in line.spans {
        if remaining == 0 {
            break;
        }
        let span_width = span.width();
        if span_width <= remaining {
            remaining -= span_width;
            spans.push(span);
            continue;
        }
        let mut clipped = String::new();
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if w > remaining {
                break;
            }
            remaining -= w;
            clipped.push(c);
        }
        spans.push(Span::styled(clipped, span.style));
        // A wide glyph that did not fit leaves a gap; pad it below.
        break;
    }

    if remaining > 0 {
        spans.push(Span::raw(" ".repeat(remaining)));
    }
    Line::from(spans).style(style)
}

/// Side-bordered rows, exactly `height` of them.
pub struct Pane {
    pub lines: Vec<Line<'static>>,
    pub height: u16,
}

impl Pane {
    pub fn new(lines: Vec<Line<'static>>, height: u16) -> Self {
        Self { lines, height }
    }
}

impl Component for Pane {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let width = usize::from(width);
        let inner = width.saturating_sub(2);
        let blank = Line::default();

        self.lines
            .iter()
            .chain(std::iter::repeat(&blank))
            .take(usize::from(self.height))
            .map(|line| {
                let body = fit_line(line.clone(), inner);
                if width < 2 {
                    return fit_line(body, width);
                }
                let mut spans = Vec::with_capacity(body.spans.len() + 2);
                spans.push(Span::styled("│", theme.border));
                spans.extend(body.spans);
                spans.push(Span::styled("│", theme.border));
                Line::from(spans)
            })
            .collect()
    }
}

/// The `╰──╯` row that closes the frame.
pub struct BottomBorder;

impl Component for BottomBorder {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let text = match usize::from(width) {
            0 => String::new(),
            1 => "─".to_string(),
            w => format!("╰{}╯", "─".repeat(w - 2)),
        };
        vec![Line::from(Span::styled(text, theme.border))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::line_text;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_fit_line_pads_short_lines() {
        let line = fit_line(Line::from("abc"), 6);
        assert_eq!(line_text(&line), "abc   ");
    }

    #[test]
    fn test_fit_line_clips_long_lines_across_spans() {
        let line = Line::from(vec![Span::raw("abc"), Span::raw("defgh")]);
        assert_eq!(line_text(&fit_line(line, 5)), "abcde");
    }

    #[test]
    fn test_fit_line_handles_wide_glyphs() {
        // "日" is two columns wide and cannot be split.
        let line = fit_line(Line::from("a日本"), 4);
        let text = line_text(&line);
        assert_eq!(text, "a日 ");
        assert_eq!(text.width(), 4);
    }

    #[test]
    fn test_pane_has_exact_height_and_borders() {
        let pane = Pane::new(vec![Line::from("hello"), Line::from("world")], 4);
        let rows: Vec<String> = pane.lines(10, &Theme::plain()).iter().map(line_text).collect();
        assert_eq!(
            rows,
            vec!["│hello   │", "│world   │", "│        │", "│        │"]
        );
    }

    #[test]
    fn test_pane_truncates_extra_lines() {
        let pane = Pane::new(vec![Line::from("1"), Line::from("2"), Line::from("3")], 2);
        assert_eq!(pane.lines(5, &Theme::plain()).len(), 2);
    }

    #[test]
    fn test_zero_height_pane_is_empty() {
        let pane = Pane::new(vec![Line::from("x")], 0);
        assert!(pane.lines(10, &Theme::plain()).is_empty());
    }

    #[test]
    fn test_bottom_border() {
        let rows = BottomBorder.lines(6, &Theme::plain());
        assert_eq!(line_text(&rows[0]), "╰────╯");
    }
}
