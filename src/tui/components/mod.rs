//! # TUI Components
//!
//! The pieces a frame is stacked from, top to bottom:
//!
//! ```text
//! ╭───────╮╭───────╮            ┐
//! │ Songs ││ ...   │            │ TabStrip (3 rows)
//! │       └┴───────┴─────────╮  ┘
//! │   • Song 0               │  ┐
//! │     ...                  │  │ Pane(ItemPage)
//! │   ••••••                 │  ┘
//! │ ▶ Song 3        ● online │    Pane(StatusLine)
//! ╰──────────────────────────╯    BottomBorder
//! ```
//!
//! ## Props-Based Rendering
//!
//! Every component is a plain struct of borrowed props implementing
//! [`Component`](crate::tui::component::Component). None of them hold state
//! between frames; pagination and tab cursors belong to the screen that
//! owns them and are passed in by reference.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── tab_strip.rs    (tab boxes + border joint table)
//! ├── pane.rs         (side borders, line fitting, bottom border)
//! ├── item_list.rs    (song/station rows, page indicator)
//! └── status_line.rs  (now playing, link marker, layout stats)
//! ```

pub mod item_list;
pub mod pane;
pub mod status_line;
pub mod tab_strip;

pub use item_list::{ItemHeights, ItemPage, ItemView, PageIndicator};
pub use pane::{BottomBorder, Pane};
pub use status_line::{LayoutStats, StatusLine};
pub use tab_strip::TabStrip;
