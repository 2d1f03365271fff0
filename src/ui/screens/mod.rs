//! Full-screen render functions, one per view mode
//!
//! Each takes the frame plus the state it displays and draws the whole
//! terminal. None of them own state; the only write-back is
//! [`render_portfolio`] recording the measured page layout on the view so
//! scrolling and section tracking agree with what was drawn. Each returns
//! the [`Hit`] regions a left click can land on.
//!
//! - [`loading`]: progress panel
//! - [`start`]: title, start button and controls panel
//! - [`portfolio`]: header, scrolled page window, menu overlay, status bar
//! - [`page`]: builds the off-screen page for the portfolio screen
//! - [`column`]: layout cursor the page sections are written against

pub mod column;
pub mod loading;
pub mod page;
pub mod portfolio;
pub mod start;

use ratatui::layout::Rect;

use crate::view::Command;

pub use loading::render_loading;
pub use portfolio::render_portfolio;
pub use start::{render_start, START_LABEL};

/// A clickable screen region and the command a left click on it issues.
/// Later hits sit on top of earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub area: Rect,
    pub command: Command,
}

impl Hit {
    pub fn new(area: Rect, command: Command) -> Self {
        Hit { area, command }
    }
}
