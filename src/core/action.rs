//! # Actions
//!
//! Everything that changes the shared [`App`] state becomes an `Action`.
//! The terminal was resized? That's `Action::Resize`. A screen asked to
//! play the selected song? That's `Action::Play(..)`.
//!
//! ```text
//! App + Action  →  update()  →  App' + Effect
//! ```
//!
//! `update` does no I/O. The returned `Effect` tells the shell what else has
//! to happen before the next frame.

use log::info;

use crate::core::library::NowPlaying;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Resize { width: u16, height: u16 },
    Play(NowPlaying),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Geometry changed: every screen must recompute its pagination.
    Relayout,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Resize { width, height } => {
            if app.geometry.resize(width, height) {
                info!(
                    "Resized to {width}x{height} (content height {})",
                    app.geometry.content_height()
                );
                Effect::Relayout
            } else {
                Effect::None
            }
        }
        Action::Play(item) => {
            info!("Now playing: {}", item.title());
            app.now_playing = Some(item);
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}
