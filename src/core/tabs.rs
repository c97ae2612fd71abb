//! # Tabs
//!
//! A fixed, ordered set of named views with one active cursor.
//! Movement is cyclic in both directions and no tab is ever hidden.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The views of the library browser, in strip order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TabKind {
    Stations,
    #[default]
    Songs,
    Placeholder,
}

impl TabKind {
    pub const ALL: [TabKind; 3] = [TabKind::Stations, TabKind::Songs, TabKind::Placeholder];

    pub fn label(self) -> &'static str {
        match self {
            TabKind::Stations => "Stations",
            TabKind::Songs => "Songs",
            TabKind::Placeholder => "Placeholder",
        }
    }
}

/// Ordered tabs plus the index of the active one.
///
/// Non-empty by construction, so `active` is always in `[0, len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabNavigator<T> {
    tabs: Vec<T>,
    active: usize,
}

impl<T> TabNavigator<T> {
    pub fn new(first: T, rest: impl IntoIterator<Item = T>) -> Self {
        let mut tabs = vec![first];
        tabs.extend(rest);
        Self { tabs, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn tabs(&self) -> &[T] {
        &self.tabs
    }

    pub fn active(&self) -> &T {
        &self.tabs[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    /// Forward one tab; the last tab wraps to the first.
    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.tabs.len();
    }

    /// Back one tab; the first tab wraps to the last.
    pub fn prev(&mut self) {
        self.active = self.active.checked_sub(1).unwrap_or(self.tabs.len() - 1);
    }
}

impl<T: PartialEq> TabNavigator<T> {
    pub fn position(&self, tab: &T) -> Option<usize> {
        self.tabs.iter().position(|t| t == tab)
    }
}

impl TabNavigator<TabKind> {
    /// The browser's tab set, starting on `initial`.
    pub fn library(initial: TabKind) -> Self {
        let [first, rest @ ..] = TabKind::ALL;
        let mut nav = Self::new(first, rest);
        if let Some(index) = nav.position(&initial) {
            nav.select(index);
        }
        nav
    }
}
