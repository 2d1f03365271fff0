//! View state and the top-level controller
//!
//! The controller owns exactly one mounted view at a time and only ever moves
//! forward: loading -> start -> playing. Views report transitions by return
//! value instead of touching shared state, and unmounting a view drops the
//! timers it owns.
//!
//! - [`loading`]: simulated progress and completion signal
//! - [`start`]: title screen with an instructions toggle
//! - [`portfolio`]: the scrollable page, active-section tracking, menu and focus

pub mod loading;
pub mod portfolio;
pub mod start;

use std::time::Duration;

use tracing::info;

use crate::config::Config;
use crate::content::Content;
use crate::scroll::Section;
use crate::timer::Timeout;

use loading::{LoadingEvent, LoadingView, ProgressSource};
use portfolio::{PortfolioSettings, PortfolioView, TargetId};
use start::StartView;

/// Which full-screen view is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ViewMode {
    Loading,
    Start,
    Playing,
}

/// User intents, already decoupled from concrete keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    ToggleInstructions,
    ScrollBy(isize),
    ScrollPage(isize),
    ScrollHome,
    ScrollEnd,
    Navigate(Section),
    ToggleMenu,
    MenuMove(isize),
    MenuSelect,
    FocusNext,
    FocusPrev,
    Activate,
    /// Focus and activate one target directly (mouse click)
    Press(TargetId),
}

/// Side effects the controller asks its host to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenLink(String),
}

pub enum Screen {
    Loading(LoadingView),
    Start(StartView),
    Playing(PortfolioView),
}

impl Screen {
    pub fn mode(&self) -> ViewMode {
        match self {
            Screen::Loading(_) => ViewMode::Loading,
            Screen::Start(_) => ViewMode::Start,
            Screen::Playing(_) => ViewMode::Playing,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub tick: Duration,
    pub completion_delay: Duration,
    pub startup_cap: Option<Duration>,
    pub portfolio: PortfolioSettings,
}

impl Default for ViewSettings {
    fn default() -> Self {
        ViewSettings::from_config(&Config::default())
    }
}

impl ViewSettings {
    pub fn from_config(config: &Config) -> Self {
        ViewSettings {
            tick: config.timing.tick(),
            completion_delay: config.timing.completion_delay(),
            startup_cap: config.timing.startup_cap(),
            portfolio: PortfolioSettings {
                probe_line: config.layout.probe_line,
                scroll_throttle: config.timing.scroll_throttle(),
                fill: config.timing.fill(),
            },
        }
    }
}

pub struct Controller {
    screen: Screen,
    content: Content,
    settings: ViewSettings,
    startup_cap: Option<Timeout>,
}

impl Controller {
    /// Mount the loading view
    pub fn new(content: Content, settings: ViewSettings, source: Box<dyn ProgressSource>) -> Self {
        let loading = LoadingView::new(settings.tick, settings.completion_delay, source);
        let startup_cap = settings.startup_cap.map(Timeout::new);
        Controller {
            screen: Screen::Loading(loading),
            content,
            settings,
            startup_cap,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.screen.mode()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Content and the mounted view together, for renderers that write
    /// layout back into the view
    pub fn parts_mut(&mut self) -> (&Content, &mut Screen) {
        (&self.content, &mut self.screen)
    }

    /// Loading -> start. Returns `false` (and does nothing) from any other mode.
    pub fn advance_to_start(&mut self) -> bool {
        if !matches!(self.screen, Screen::Loading(_)) {
            return false;
        }
        self.startup_cap = None;
        self.screen = Screen::Start(StartView::new());
        info!(from = ?ViewMode::Loading, to = ?ViewMode::Start, "view transition");
        true
    }

    /// Start -> playing. Returns `false` (and does nothing) from any other mode.
    pub fn advance_to_playing(&mut self) -> bool {
        if !matches!(self.screen, Screen::Start(_)) {
            return false;
        }
        let view = PortfolioView::new(&self.content, self.settings.portfolio.clone());
        self.screen = Screen::Playing(view);
        info!(from = ?ViewMode::Start, to = ?ViewMode::Playing, "view transition");
        true
    }

    /// Advance the mounted view's timers by `dt`
    pub fn advance(&mut self, dt: Duration) {
        let capped = self
            .startup_cap
            .as_mut()
            .is_some_and(|cap| cap.advance(dt));

        match &mut self.screen {
            Screen::Loading(view) => {
                if view.advance(dt) == Some(LoadingEvent::Complete) || capped {
                    self.advance_to_start();
                }
            }
            Screen::Start(view) => view.advance(dt),
            Screen::Playing(view) => view.advance(dt),
        }
    }

    /// Route a command to the mounted view. Commands that do not apply to it
    /// are ignored.
    pub fn dispatch(&mut self, command: Command) -> Option<Effect> {
        match &mut self.screen {
            Screen::Loading(_) => None,
            Screen::Start(view) => {
                match command {
                    Command::Start => {
                        self.advance_to_playing();
                    }
                    Command::ToggleInstructions => view.toggle_instructions(),
                    _ => {}
                }
                None
            }
            Screen::Playing(view) => match command {
                Command::ScrollBy(rows) => {
                    view.scroll_by(rows);
                    None
                }
                Command::ScrollPage(pages) => {
                    view.scroll_page(pages);
                    None
                }
                Command::ScrollHome => {
                    view.scroll_home();
                    None
                }
                Command::ScrollEnd => {
                    view.scroll_end();
                    None
                }
                Command::Navigate(section) => {
                    view.navigate(section);
                    None
                }
                Command::ToggleMenu => {
                    view.toggle_menu();
                    None
                }
                Command::MenuMove(delta) => {
                    view.menu_move(delta);
                    None
                }
                Command::MenuSelect => {
                    view.menu_select();
                    None
                }
                Command::FocusNext => {
                    view.focus_next();
                    None
                }
                Command::FocusPrev => {
                    view.focus_prev();
                    None
                }
                Command::Activate => view.activate(),
                Command::Press(id) => view.press(id),
                Command::Start | Command::ToggleInstructions => None,
            },
        }
    }
}
