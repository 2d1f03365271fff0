//! # Introduction
//!
//! Pixelfolio renders a retro-game styled personal portfolio in the terminal.
//! A simulated loading bar leads to a title screen, and pressing start opens
//! a single scrollable page (home, about, projects, skills, contact) with a
//! header that tracks which section is in view.
//!
//! ## Pipeline
//!
//! ```text
//! content.toml → Content → Controller (views + timers) → screens → terminal
//! ```
//!
//! 1. [`content`]: the portfolio document, compiled in or loaded from TOML.
//! 2. [`view`]: the loading → start → playing state machine. Every view is
//!    advanced by explicit time deltas, driven by [`timer`] and [`anim`].
//! 3. [`scroll`]: section ids and the scroll-spy that picks the active one.
//! 4. [`ui`]: ratatui screens, widgets and the event loop.
//! 5. [`config`], [`errors`], [`links`]: runtime settings, error types and
//!    launching external URLs.

pub mod anim;
pub mod config;
pub mod content;
pub mod errors;
pub mod links;
pub mod scroll;
pub mod timer;
pub mod ui;
pub mod view;
