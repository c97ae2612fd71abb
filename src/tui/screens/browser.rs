//! # Browser Screen
//!
//! The main screen: one tab per library view, each paginated to fit the
//! content pane.
//!
//! Pagination belongs to the active tab only. Switching tabs or resizing
//! recomputes it from scratch, so both always land on page 0 with the first
//! row selected.

use log::{debug, info};
use ratatui::text::{Line, Text};

use crate::core::action::Action;
use crate::core::geometry::Geometry;
use crate::core::library::{Library, NowPlaying};
use crate::core::pagination::{FOOTER_LINES, Paginator};
use crate::core::state::App;
use crate::core::tabs::{TabKind, TabNavigator};
use crate::tui::component::Component;
use crate::tui::components::{ItemHeights, ItemPage, LayoutStats, StatusLine, TabStrip};
use crate::tui::event::TuiEvent;
use crate::tui::screens::{Outcome, Screen, ScreenId, compose};
use crate::tui::theme::Theme;

const EMPTY_MESSAGE: &str = "   Nothing here yet.";

pub struct Browser {
    tabs: TabNavigator<TabKind>,
    paginator: Paginator,
    library: Library,
    heights: ItemHeights,
    content_height: u16,
    show_stats: bool,
}

impl Browser {
    /// Not usable until the first [`Screen::relayout`].
    pub fn new(library: Library, heights: ItemHeights, initial: TabKind, show_stats: bool) -> Self {
        Self {
            tabs: TabNavigator::library(initial),
            paginator: Paginator::default(),
            library,
            heights,
            content_height: 0,
            show_stats,
        }
    }

    pub fn active_tab(&self) -> TabKind {
        *self.tabs.active()
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    fn item_count(&self, tab: TabKind) -> usize {
        match tab {
            TabKind::Songs => self.library.songs.len(),
            TabKind::Stations => self.library.stations.len(),
            TabKind::Placeholder => 0,
        }
    }

    fn recompute(&mut self) {
        let tab = self.active_tab();
        let height = self.heights.for_tab(tab);
        self.paginator = Paginator::recompute(
            self.item_count(tab),
            height,
            self.content_height,
            FOOTER_LINES,
        );
        debug!(
            "Paginated {tab:?}: {} items, {} per page, {} pages",
            self.paginator.total(),
            self.paginator.per_page(),
            self.paginator.page_count()
        );
    }

    fn switched_tab(&mut self) {
        info!("Switched to tab {}", self.active_tab().label());
        self.recompute();
    }

    fn selected_item(&self) -> Option<NowPlaying> {
        let index = self.paginator.selected_index()?;
        match self.active_tab() {
            TabKind::Songs => self.library.songs.get(index).cloned().map(NowPlaying::Song),
            TabKind::Stations => self
                .library
                .stations
                .get(index)
                .cloned()
                .map(NowPlaying::Station),
            TabKind::Placeholder => None,
        }
    }

    fn stats(&self) -> LayoutStats {
        LayoutStats {
            content_height: self.content_height,
            item_height: self.heights.for_tab(self.active_tab()).get(),
            per_page: self.paginator.per_page(),
            page: self.paginator.page(),
            page_count: self.paginator.page_count(),
        }
    }

    fn body(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let height = self.content_height;
        match self.active_tab() {
            _ if self.paginator.is_empty() => vec![Line::default(), Line::from(EMPTY_MESSAGE)],
            TabKind::Songs => {
                ItemPage::new(&self.library.songs, &self.paginator, height).lines(width, theme)
            }
            TabKind::Stations => {
                ItemPage::new(&self.library.stations, &self.paginator, height).lines(width, theme)
            }
            TabKind::Placeholder => vec![Line::default(), Line::from(EMPTY_MESSAGE)],
        }
    }
}

impl Screen for Browser {
    fn id(&self) -> ScreenId {
        ScreenId::Main
    }

    fn relayout(&mut self, geometry: &Geometry) {
        self.content_height = geometry.content_height();
        self.recompute();
    }

    fn update(&mut self, event: TuiEvent, _app: &App) -> Outcome {
        match event {
            TuiEvent::NextTab => {
                self.tabs.next();
                self.switched_tab();
            }
            TuiEvent::PrevTab => {
                self.tabs.prev();
                self.switched_tab();
            }
            TuiEvent::NextPage => {
                self.paginator.next_page();
            }
            TuiEvent::PrevPage => {
                self.paginator.prev_page();
            }
            TuiEvent::MoveDown => {
                self.paginator.move_down();
            }
            TuiEvent::MoveUp => {
                self.paginator.move_up();
            }
            TuiEvent::Select => return Outcome::action(self.selected_item().map(Action::Play)),
            TuiEvent::ToggleHelp => return Outcome::transition(ScreenId::Help),
            TuiEvent::Back | TuiEvent::Quit | TuiEvent::Resize { .. } => {}
        }
        Outcome::none()
    }

    fn view(&self, app: &App, theme: &Theme) -> Text<'static> {
        let labels: Vec<&str> = self.tabs.tabs().iter().map(|tab| tab.label()).collect();
        let status = StatusLine::new(app.now_playing.as_ref(), app.connected)
            .with_stats(self.show_stats.then(|| self.stats()));

        compose(
            app,
            theme,
            TabStrip::new(&labels, self.tabs.active_index()),
            self.body(app.geometry.inner_width(), theme),
            status,
        )
    }
}
