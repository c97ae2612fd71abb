//! # Core Application Logic
//!
//! Layout arithmetic and navigation state for playtab.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Geometry (sizes)     │
//!                    │  • Paginator, Tabs      │
//!                    │  • State + update()     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`geometry`]: terminal size and derived pane heights
//! - [`pagination`]: page size computation and clamped page/row movement
//! - [`tabs`]: cyclic tab cursor
//! - [`library`]: the items being listed
//! - [`state`]: the shared `App` struct
//! - [`action`]: the `Action` enum and its reducer
//! - [`config`]: settings file and override resolution
//!
//! Config loading is the one exception to "no I/O": it runs once in `main`
//! before anything else exists.

pub mod action;
pub mod config;
pub mod geometry;
pub mod library;
pub mod pagination;
pub mod state;
pub mod tabs;
