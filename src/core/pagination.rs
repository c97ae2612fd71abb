//! # Pagination
//!
//! Splits a list into pages that fit the content pane.
//!
//! A `Paginator` is rebuilt from scratch by [`Paginator::recompute`] whenever
//! the page size can change (tab switch, resize). Rebuilding always lands on
//! page 0 with the first row selected: a selected row has no stable meaning
//! once the page size changes, so the scroll position is dropped.
//!
//! Movement inside a tab is clamped, never wrapped:
//!
//! - `next_page` / `prev_page` stop at the last / first page
//! - `move_down` / `move_up` stay on the current page
//!
//! Out-of-range requests are silent no-ops.

use std::fmt;
use std::num::NonZeroU16;
use std::ops::Range;

/// Rows reserved under the items for the page indicator.
pub const FOOTER_LINES: u16 = 1;

/// Render height of one item, in terminal rows. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemHeight(NonZeroU16);

impl ItemHeight {
    pub const ONE: ItemHeight = ItemHeight(NonZeroU16::MIN);

    /// Validate a measured height for the item kind `kind`.
    pub fn new(lines: usize, kind: &'static str) -> Result<Self, LayoutError> {
        u16::try_from(lines)
            .ok()
            .and_then(NonZeroU16::new)
            .map(ItemHeight)
            .ok_or(LayoutError::ZeroItemHeight { kind, lines })
    }

    pub fn get(self) -> u16 {
        self.0.get()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// An item kind rendered to zero rows (or more rows than a terminal has).
    ZeroItemHeight { kind: &'static str, lines: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::ZeroItemHeight { kind, lines } => {
                write!(f, "invalid render height for {kind} items: {lines} rows")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    per_page: usize,
    total: usize,
    /// Row within the current page.
    selected: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 1,
            total: 0,
            selected: 0,
        }
    }
}

impl Paginator {
    /// Fit `total` items of `item_height` rows into `available` rows, keeping
    /// `reserved_footer` rows free. At least one item per page, always.
    pub fn recompute(
        total: usize,
        item_height: ItemHeight,
        available: u16,
        reserved_footer: u16,
    ) -> Self {
        let usable = available.saturating_sub(reserved_footer);
        let per_page = usize::from(usable / item_height.get()).max(1);
        Self {
            page: 0,
            per_page,
            total,
            selected: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// `ceil(total / per_page)`; zero for an empty list.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    /// Index range of the items on the current page.
    pub fn slice_bounds(&self) -> Range<usize> {
        let start = (self.page * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    pub fn items_on_page(&self) -> usize {
        self.slice_bounds().len()
    }

    /// Absolute index of the selected item, if there is one.
    pub fn selected_index(&self) -> Option<usize> {
        let bounds = self.slice_bounds();
        let index = bounds.start + self.selected;
        bounds.contains(&index).then_some(index)
    }

    pub fn next_page(&mut self) -> bool {
        if self.page + 1 >= self.page_count() {
            return false;
        }
        self.page += 1;
        self.selected = 0;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        self.selected = 0;
        true
    }

    /// Move the selection down one row. Stops at the last row of the page.
    pub fn move_down(&mut self) -> bool {
        let last_row = self.items_on_page().min(self.per_page);
        if self.selected + 1 >= last_row {
            return false;
        }
        self.selected += 1;
        true
    }

    pub fn move_up(&mut self) -> bool {
        if self.selected == 0 {
            return false;
        }
        self.selected -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn height(rows: usize) -> ItemHeight {
        ItemHeight::new(rows, "test").unwrap()
    }

    #[test]
    fn test_zero_item_height_is_rejected() {
        assert_eq!(
            ItemHeight::new(0, "song"),
            Err(LayoutError::ZeroItemHeight {
                kind: "song",
                lines: 0
            })
        );
    }

    #[test]
    fn test_oversized_item_height_is_rejected() {
        assert!(ItemHeight::new(usize::from(u16::MAX) + 1, "song").is_err());
    }

    #[test]
    fn test_recompute_fifty_items_scenario() {
        let p = Paginator::recompute(50, height(3), 20, 1);
        assert_eq!(p.per_page(), 6);
        assert_eq!(p.page_count(), 9);
        assert_eq!(p.page(), 0);
        assert_eq!(p.selected(), 0);
    }

    #[test]
    fn test_recompute_empty_list() {
        let p = Paginator::recompute(0, height(4), 20, 1);
        assert_eq!(p.page_count(), 0);
        assert_eq!(p.slice_bounds(), 0..0);
        assert_eq!(p.selected_index(), None);
        assert!(p.is_empty());
    }

    #[test]
    fn test_recompute_tiny_window_keeps_one_per_page() {
        let p = Paginator::recompute(10, height(4), 0, 1);
        assert_eq!(p.per_page(), 1);
        assert_eq!(p.page_count(), 10);
    }

    #[test]
    fn test_next_page_clamps_at_last_page() {
        let mut p = Paginator::recompute(50, height(3), 20, 1);
        for _ in 0..8 {
            assert!(p.next_page());
        }
        assert_eq!(p.page(), 8);
        assert!(!p.next_page());
        assert_eq!(p.page(), 8);
    }

    #[test]
    fn test_prev_page_at_first_page_is_noop() {
        let mut p = Paginator::recompute(50, height(3), 20, 1);
        p.move_down();
        assert!(!p.prev_page());
        assert_eq!(p.page(), 0);
        // A refused page change leaves the selection alone.
        assert_eq!(p.selected(), 1);
    }

    #[test]
    fn test_page_change_resets_selection() {
        let mut p = Paginator::recompute(50, height(3), 20, 1);
        p.move_down();
        p.move_down();
        assert!(p.next_page());
        assert_eq!(p.selected(), 0);
        p.move_down();
        assert!(p.prev_page());
        assert_eq!(p.selected(), 0);
    }

    #[test]
    fn test_move_down_stops_at_page_end() {
        let mut p = Paginator::recompute(50, height(3), 20, 1);
        for _ in 0..10 {
            p.move_down();
        }
        assert_eq!(p.selected(), 5);
        assert!(!p.move_down());
        assert_eq!(p.page(), 0);
    }

    #[test]
    fn test_move_up_at_top_is_noop() {
        let mut p = Paginator::recompute(50, height(3), 20, 1);
        assert!(!p.move_up());
        assert_eq!(p.selected(), 0);
    }

    #[test]
    fn test_selection_stays_on_items_of_partial_last_page() {
        let mut p = Paginator::recompute(50, height(3), 20, 1);
        while p.next_page() {}
        assert_eq!(p.slice_bounds(), 48..50);
        p.move_down();
        p.move_down();
        p.move_down();
        assert_eq!(p.selected(), 1);
        assert_eq!(p.selected_index(), Some(49));
    }

    #[test]
    fn test_empty_list_ignores_movement() {
        let mut p = Paginator::recompute(0, height(3), 20, 1);
        assert!(!p.move_down());
        assert!(!p.next_page());
        assert!(!p.prev_page());
        assert_eq!((p.page(), p.selected()), (0, 0));
    }

    #[test]
    fn test_layout_error_display() {
        let err = LayoutError::ZeroItemHeight {
            kind: "station",
            lines: 0,
        };
        assert_eq!(err.to_string(), "invalid render height for station items: 0 rows");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// At least one item per page and ceil(total / per_page) pages.
            #[test]
            fn per_page_and_page_count(
                total in 0usize..10_000,
                rows in 1usize..20,
                available in 0u16..500,
            ) {
                let p = Paginator::recompute(total, height(rows), available, FOOTER_LINES);
                prop_assert!(p.per_page() >= 1);
                prop_assert_eq!(p.page_count(), total.div_ceil(p.per_page()));
                if total == 0 {
                    prop_assert_eq!(p.page_count(), 0);
                }
            }

            /// Any sequence of moves keeps page and selection in range.
            #[test]
            fn moves_stay_in_bounds(
                total in 0usize..500,
                rows in 1usize..6,
                available in 0u16..60,
                moves in proptest::collection::vec(0u8..4, 0..200),
            ) {
                let mut p = Paginator::recompute(total, height(rows), available, FOOTER_LINES);
                for m in moves {
                    match m {
                        0 => { p.next_page(); }
                        1 => { p.prev_page(); }
                        2 => { p.move_down(); }
                        _ => { p.move_up(); }
                    }
                    prop_assert!(p.selected() < p.per_page());
                    if total == 0 {
                        prop_assert_eq!(p.page(), 0);
                    } else {
                        prop_assert!(p.page() < p.page_count());
                        prop_assert!(p.selected_index().is_some());
                    }
                }
            }
        }
    }
}
