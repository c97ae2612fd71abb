//! # Geometry
//!
//! Terminal size and the pane heights derived from it.
//!
//! ```text
//! ╭────────╮╭───────╮          ┐
//! │ Tab    ││ Tab   │          │ tab strip (3)
//! ├────────┴┘       └────────╮ ┘
//! │                          │ ┐
//! │          content         │ │ content_height()
//! │                          │ ┘
//! │ status                   │   status line (1)
//! ╰──────────────────────────╯   bottom border (1)
//! ```
//!
//! `Geometry` is the single source of truth: every pane asks it for its
//! height instead of caching its own copy, so nothing drifts after a resize.

use std::fmt;
use std::io;

use log::warn;

pub const FALLBACK_WIDTH: u16 = 80;
pub const FALLBACK_HEIGHT: u16 = 24;

/// Rows of the tab strip: box tops, labels, and the joint row that doubles
/// as the content pane's top border.
pub const TAB_STRIP_ROWS: u16 = 3;

/// Fixed-height decoration around the content pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub tab_strip: u16,
    pub status_line: u16,
    pub bottom_border: u16,
}

impl Chrome {
    /// Rounded tab boxes on top, one status row and the closing border below.
    pub const STANDARD: Chrome = Chrome {
        tab_strip: TAB_STRIP_ROWS,
        status_line: 1,
        bottom_border: 1,
    };

    pub fn height(&self) -> u16 {
        self.tab_strip + self.status_line + self.bottom_border
    }
}

impl Default for Chrome {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The terminal could not report a usable size.
#[derive(Debug)]
pub enum SizeUnavailable {
    Query(io::Error),
    /// The device answered, but with a zero dimension.
    Empty { width: u16, height: u16 },
}

impl fmt::Display for SizeUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeUnavailable::Query(e) => write!(f, "terminal size query failed: {e}"),
            SizeUnavailable::Empty { width, height } => {
                write!(f, "terminal reported an empty size ({width}x{height})")
            }
        }
    }
}

impl std::error::Error for SizeUnavailable {}

/// Height left for content once `chrome_height` rows are taken.
///
/// Clamped to zero when the window is too small to show any content.
pub fn content_height(height: u16, chrome_height: u16) -> u16 {
    height.saturating_sub(chrome_height)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: u16,
    height: u16,
    chrome: Chrome,
}

impl Geometry {
    pub fn new(width: u16, height: u16, chrome: Chrome) -> Self {
        Self {
            width,
            height,
            chrome,
        }
    }

    /// Build from a size query, degrading to `fallback` if the query fails.
    ///
    /// A cramped but usable screen beats refusing to start.
    pub fn from_query<Q>(query: Q, fallback: (u16, u16), chrome: Chrome) -> Self
    where
        Q: FnOnce() -> Result<(u16, u16), SizeUnavailable>,
    {
        let (width, height) = match query() {
            Ok(size) => size,
            Err(e) => {
                warn!("{e}; falling back to {}x{}", fallback.0, fallback.1);
                fallback
            }
        };
        Self::new(width, height, chrome)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn chrome(&self) -> Chrome {
        self.chrome
    }

    /// Rows available to the content pane.
    pub fn content_height(&self) -> u16 {
        content_height(self.height, self.chrome.height())
    }

    /// Columns between the left and right border.
    pub fn inner_width(&self) -> u16 {
        self.width.saturating_sub(2)
    }

    /// Apply a resize. Returns false when nothing changed.
    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        if (width, height) == (self.width, self.height) {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(FALLBACK_WIDTH, FALLBACK_HEIGHT, Chrome::STANDARD)
    }
}
