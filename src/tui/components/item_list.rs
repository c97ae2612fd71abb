//! # Item List Component
//!
//! One page of library items plus the page indicator under it.
//!
//! ```text
//!    • Song 0             ┐
//!      John Music         │ one item = ItemHeight rows
//!      Music - The Sequel │
//!                         ┘
//!    > Song 1             ← selected row
//!      ...
//!
//!   ••••••••••••          ← page indicator, bottom row of the pane
//! ```
//!
//! Each item kind renders to a fixed number of rows. That number is measured
//! once at startup by rendering a default item ([`ItemHeights::measure`]);
//! a kind that renders to nothing stops the program before the terminal is
//! touched.

use log::debug;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::config::PaginatorStyle;
use crate::core::library::{Song, Station};
use crate::core::pagination::{FOOTER_LINES, ItemHeight, LayoutError, Paginator};
use crate::core::tabs::TabKind;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Left margin before the bullet, and before the page indicator.
const INDENT: &str = "   ";
/// Continuation lines line up under the item name.
const DETAIL_INDENT: &str = "     ";

/// An item that knows how to draw itself in a list.
pub trait ItemView: Default {
    /// Name used in diagnostics.
    const KIND: &'static str;

    fn render(&self, selected: bool, theme: &Theme) -> Vec<Line<'static>>;
}

fn name_line(name: &str, selected: bool, theme: &Theme) -> Line<'static> {
    let (bullet, style) = if selected {
        (">", theme.selected)
    } else {
        ("•", theme.text_primary)
    };
    Line::from(vec![
        Span::raw(INDENT),
        Span::styled(format!("{bullet} {name}"), style),
    ])
}

fn detail_line(text: &str, theme: &Theme) -> Line<'static> {
    Line::styled(format!("{DETAIL_INDENT}{text}"), theme.text_secondary)
}

impl ItemView for Song {
    const KIND: &'static str = "song";

    fn render(&self, selected: bool, theme: &Theme) -> Vec<Line<'static>> {
        vec![
            name_line(&self.name, selected, theme),
            detail_line(&self.artist, theme),
            detail_line(&self.album, theme),
            Line::default(),
        ]
    }
}

impl ItemView for Station {
    const KIND: &'static str = "station";

    fn render(&self, selected: bool, theme: &Theme) -> Vec<Line<'static>> {
        vec![
            name_line(&self.name, selected, theme),
            detail_line(&self.description, theme),
            Line::default(),
        ]
    }
}

/// Rows one item of kind `T` occupies.
pub fn measure<T: ItemView>() -> Result<ItemHeight, LayoutError> {
    let rows = T::default().render(false, &Theme::plain()).len();
    ItemHeight::new(rows, T::KIND)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemHeights {
    pub song: ItemHeight,
    pub station: ItemHeight,
}

impl ItemHeights {
    pub fn measure() -> Result<Self, LayoutError> {
        let heights = Self {
            song: measure::<Song>()?,
            station: measure::<Station>()?,
        };
        debug!(
            "Item heights: song={} station={}",
            heights.song.get(),
            heights.station.get()
        );
        Ok(heights)
    }

    pub fn for_tab(&self, tab: TabKind) -> ItemHeight {
        match tab {
            TabKind::Songs => self.song,
            TabKind::Stations => self.station,
            TabKind::Placeholder => ItemHeight::ONE,
        }
    }
}

/// Current page of `items`, padded to `height` rows, indicator last.
pub struct ItemPage<'a, T> {
    pub items: &'a [T],
    pub paginator: &'a Paginator,
    pub height: u16,
}

impl<'a, T> ItemPage<'a, T> {
    pub fn new(items: &'a [T], paginator: &'a Paginator, height: u16) -> Self {
        Self {
            items,
            paginator,
            height,
        }
    }
}

impl<T: ItemView> Component for ItemPage<'_, T> {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        if self.height == 0 {
            return Vec::new();
        }
        let page = self
            .items
            .get(self.paginator.slice_bounds())
            .unwrap_or_default();

        let mut lines: Vec<Line<'static>> = page
            .iter()
            .enumerate()
            .flat_map(|(row, item)| item.render(row == self.paginator.selected(), theme))
            .collect();

        let body_rows = usize::from(self.height.saturating_sub(FOOTER_LINES));
        lines.resize(body_rows, Line::default());
        lines.extend(PageIndicator::new(self.paginator).lines(width, theme));
        lines
    }
}

/// The one-row page indicator.
pub struct PageIndicator<'a> {
    pub paginator: &'a Paginator,
}

impl<'a> PageIndicator<'a> {
    pub fn new(paginator: &'a Paginator) -> Self {
        Self { paginator }
    }

    fn arabic(&self, theme: &Theme) -> Line<'static> {
        let text = format!(
            "{}/{}",
            self.paginator.page() + 1,
            self.paginator.page_count()
        );
        Line::from(vec![Span::raw(INDENT), Span::styled(text, theme.active_dot)])
    }
}

impl Component for PageIndicator<'_> {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let count = self.paginator.page_count();
        if count == 0 {
            return vec![Line::default()];
        }

        let fits = INDENT.width() + count <= usize::from(width);
        let line = match theme.paginator {
            PaginatorStyle::Dots if fits => {
                let mut spans = vec![Span::raw(INDENT)];
                spans.extend((0..count).map(|page| {
                    let style = if page == self.paginator.page() {
                        theme.active_dot
                    } else {
                        theme.inactive_dot
                    };
                    Span::styled("•", style)
                }));
                Line::from(spans)
            }
            // Too many pages for dots: fall back to numbers.
            _ => self.arabic(theme),
        };
        vec![line]
    }
}
