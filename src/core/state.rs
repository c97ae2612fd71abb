//! # Application State
//!
//! The shared, UI-agnostic part of the model. Per-screen navigation state
//! (tabs, pages, selection) lives with each screen; this holds what every
//! screen reads.
//!
//! ```text
//! App
//! ├── geometry: Geometry            // terminal size, pane heights
//! ├── now_playing: Option<...>      // last item handed to the player
//! └── connected: bool               // daemon link status
//! ```
//!
//! Screens get `&App` only. Changes go through `update(app, action)` in
//! action.rs.

use crate::core::geometry::Geometry;
use crate::core::library::NowPlaying;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub geometry: Geometry,
    pub now_playing: Option<NowPlaying>,
    pub connected: bool,
}

impl App {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            now_playing: None,
            connected: true,
        }
    }
}
