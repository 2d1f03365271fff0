//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: event loop, key and mouse mapping, link launching
//! - **[`screens`]**: render functions for the loading, start and main screens
//! - **[`widgets`]**: reusable pieces (game window, buttons, cards, bars)
//! - **[`theme`]**: the retro palette used everywhere
//!
//! [`text`] holds the word-wrapping helpers shared by screens and widgets.
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Controller`] and a [`LinkOpener`], then call [`App::run`].
//!
//! [`Controller`]: crate::view::Controller
//! [`LinkOpener`]: crate::links::LinkOpener
//! [`App::run`]: app::App::run

pub mod app;
pub mod screens;
pub mod text;
pub mod theme;
pub mod widgets;

pub use app::App;
