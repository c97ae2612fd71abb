//! # TabStrip Component
//!
//! A row of rounded tab boxes sitting on top of the content pane.
//!
//! ```text
//! ╭──────────╮╭───────╮╭─────────────╮
//! │ Stations ││ Songs ││ Placeholder │
//! ├──────────┴┘       └┴─────────────┴──────────╮
//! ```
//!
//! The bottom row is where the strip meets the content pane's top border.
//! An inactive tab closes with `┴` T-junctions that continue the pane's
//! border; the active tab stays open (`┘ └`) so it reads as part of the pane.
//! The glyph choice depends only on where the tab sits and whether it is
//! active, and lives in a single table: [`JOINTS`].

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::geometry::TAB_STRIP_ROWS;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Spaces on each side of a label.
const PADDING: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabPosition {
    First,
    Middle,
    Last,
}

impl TabPosition {
    /// Position of tab `index` in a strip of `count` tabs.
    /// A lone tab counts as `First`: it starts at the pane's left edge.
    pub fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            TabPosition::First
        } else if index + 1 == count {
            TabPosition::Last
        } else {
            TabPosition::Middle
        }
    }

    fn row(self) -> usize {
        match self {
            TabPosition::First => 0,
            TabPosition::Middle => 1,
            TabPosition::Last => 2,
        }
    }
}

/// Bottom row glyphs of one tab box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Joint {
    pub left: &'static str,
    pub fill: &'static str,
    pub right: &'static str,
}

const fn joint(left: &'static str, fill: &'static str, right: &'static str) -> Joint {
    Joint { left, fill, right }
}

/// `JOINTS[position][active]`.
pub const JOINTS: [[Joint; 2]; 3] = [
    // First: meets the pane's left border.
    [joint("├", "─", "┴"), joint("│", " ", "└")],
    // Middle
    [joint("┴", "─", "┴"), joint("┘", " ", "└")],
    // Last
    [joint("┴", "─", "┴"), joint("┘", " ", "└")],
];

pub fn joint_for(position: TabPosition, active: bool) -> Joint {
    JOINTS[position.row()][usize::from(active)]
}

pub struct TabStrip<'a> {
    pub labels: &'a [&'a str],
    pub active: usize,
}

impl<'a> TabStrip<'a> {
    pub fn new(labels: &'a [&'a str], active: usize) -> Self {
        Self { labels, active }
    }

    /// Total width of the tab boxes, without the trailing border.
    pub fn tabs_width(&self) -> usize {
        self.labels
            .iter()
            .map(|label| label.width() + 2 * PADDING + 2)
            .sum()
    }
}

impl Component for TabStrip<'_> {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        // Sized by the chrome; the destructuring breaks if the two disagree.
        let mut rows: [Vec<Span<'static>>; TAB_STRIP_ROWS as usize] = Default::default();
        let [top, middle, bottom] = &mut rows;

        for (index, label) in self.labels.iter().enumerate() {
            let active = index == self.active;
            let position = TabPosition::of(index, self.labels.len());
            let joint = joint_for(position, active);
            let inner = label.width() + 2 * PADDING;
            let label_style = if active {
                theme.active_tab
            } else {
                theme.inactive_tab
            };

            top.push(Span::styled(format!("╭{}╮", "─".repeat(inner)), theme.border));

            middle.push(Span::styled("│", theme.border));
            middle.push(Span::styled(
                format!("{pad}{label}{pad}", pad = " ".repeat(PADDING)),
                label_style,
            ));
            middle.push(Span::styled("│", theme.border));

            bottom.push(Span::styled(
                format!("{}{}{}", joint.left, joint.fill.repeat(inner), joint.right),
                theme.border,
            ));
        }

        // The remainder of the bottom row is the pane's top border.
        let used = self.tabs_width();
        let width = usize::from(width);
        if width > used {
            let rest = width - used;
            bottom.push(Span::styled(format!("{}╮", "─".repeat(rest - 1)), theme.border));
        }

        rows.into_iter().map(Line::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::line_text;

    const LABELS: [&str; 3] = ["Stations", "Songs", "Placeholder"];

    fn strip(active: usize, width: u16) -> Vec<String> {
        TabStrip::new(&LABELS, active)
            .lines(width, &Theme::plain())
            .iter()
            .map(line_text)
            .collect()
    }

    #[test]
    fn test_positions() {
        assert_eq!(TabPosition::of(0, 3), TabPosition::First);
        assert_eq!(TabPosition::of(1, 3), TabPosition::Middle);
        assert_eq!(TabPosition::of(2, 3), TabPosition::Last);
        assert_eq!(TabPosition::of(0, 1), TabPosition::First);
    }

    #[test]
    fn test_joint_table_is_deterministic() {
        for position in [TabPosition::First, TabPosition::Middle, TabPosition::Last] {
            for active in [false, true] {
                assert_eq!(joint_for(position, active), joint_for(position, active));
            }
        }
        assert_eq!(joint_for(TabPosition::First, false).left, "├");
        assert_eq!(joint_for(TabPosition::First, true).left, "│");
        assert_eq!(joint_for(TabPosition::Middle, false), joint("┴", "─", "┴"));
        assert_eq!(joint_for(TabPosition::Last, true), joint("┘", " ", "└"));
    }

    #[test]
    fn test_strip_height_matches_chrome() {
        use crate::core::geometry::Chrome;
        for width in [0u16, 10, 80] {
            let lines = TabStrip::new(&LABELS, 0).lines(width, &Theme::plain());
            assert_eq!(lines.len(), usize::from(Chrome::STANDARD.tab_strip));
        }
        let lone = TabStrip::new(&["Help"], 0).lines(40, &Theme::plain());
        assert_eq!(lone.len(), usize::from(Chrome::STANDARD.tab_strip));
    }

    #[test]
    fn test_middle_tab_active() {
        let lines = strip(1, 48);
        assert_eq!(lines[0], "╭──────────╮╭───────╮╭─────────────╮");
        assert_eq!(lines[1], "│ Stations ││ Songs ││ Placeholder │");
        assert_eq!(lines[2], "├──────────┴┘       └┴─────────────┴───────────╮");
    }

    #[test]
    fn test_first_tab_active_opens_left_edge() {
        let lines = strip(0, 40);
        assert!(lines[2].starts_with("│          └┴───────┴┴"));
        assert!(lines[2].ends_with("─╮"));
    }

    #[test]
    fn test_bottom_row_spans_full_width() {
        for width in [36u16, 40, 80, 120] {
            let lines = strip(2, width);
            assert_eq!(lines[2].width(), usize::from(width));
        }
    }

    #[test]
    fn test_narrow_width_drops_trailing_border() {
        let lines = strip(0, 10);
        assert!(!lines[2].ends_with('╮'));
        assert_eq!(lines[2].width(), TabStrip::new(&LABELS, 0).tabs_width());
    }

    #[test]
    fn test_active_label_uses_active_style() {
        use ratatui::style::{Color, Style};
        let mut theme = Theme::plain();
        theme.active_tab = Style::new().fg(Color::Yellow);
        let lines = TabStrip::new(&LABELS, 1).lines(60, &theme);
        let songs = lines[1]
            .spans
            .iter()
            .find(|span| span.content.contains("Songs"))
            .unwrap();
        assert_eq!(songs.style.fg, Some(Color::Yellow));
    }
}
