//! Stateless presentational widgets shared by the screens
//!
//! - [`card`]: project card with optional image and play button
//! - [`panel`]: titled "game window" frame
//! - [`button`]: link or action button
//! - [`progress`]: progress bar and skill row

pub mod button;
pub mod card;
pub mod panel;
pub mod progress;

pub use button::{ButtonKind, PixelButton, BUTTON_HEIGHT};
pub use card::{ProjectCard, FALLBACK_GLYPH, PLAY_LABEL};
pub use panel::{GameWindow, DEFAULT_TITLE};
pub use progress::{ProgressBar, SkillRow};
