//! Main TUI application state and event loop

use crate::config::LayoutConfig;
use crate::links::LinkOpener;
use crate::view::{Command, Controller, Effect, Screen, ViewMode};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::Backend, layout::Position, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::screens::{render_loading, render_portfolio, render_start, Hit};

/// Rows moved per mouse wheel notch
const WHEEL_ROWS: isize = 3;

/// The main application state
pub struct App<O: LinkOpener> {
    /// View state machine
    pub controller: Controller,

    /// Launches project and contact links
    opener: O,

    pub layout: LayoutConfig,

    /// Redraw and timer granularity
    pub frame_interval: Duration,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Click regions from the last drawn frame
    hits: Vec<Hit>,

    last_frame: Instant,
}

impl<O: LinkOpener> App<O> {
    pub fn new(controller: Controller, opener: O, layout: LayoutConfig, frame_interval: Duration) -> Self {
        App {
            controller,
            opener,
            layout,
            frame_interval,
            should_quit: false,
            status_message: String::from("Ready!"),
            hits: Vec::new(),
            last_frame: Instant::now(),
        }
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.last_frame = Instant::now();
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            let dt = now.duration_since(self.last_frame);
            self.last_frame = now;
            self.controller.advance(dt);

            // Poll with a timeout so timers keep running without input
            if event::poll(self.frame_interval)? {
                self.handle_event(event::read()?);
            }
        }

        Ok(())
    }

    /// Render the mounted screen
    pub fn render(&mut self, frame: &mut Frame) {
        let compact_width = self.layout.compact_width;
        let (content, screen) = self.controller.parts_mut();
        self.hits = match screen {
            Screen::Loading(view) => render_loading(frame, &content.loading, view),
            Screen::Start(view) => render_start(frame, &content.start, view),
            Screen::Playing(view) => {
                render_portfolio(frame, content, view, compact_width, &self.status_message)
            }
        };
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let mode = self.controller.mode();
        let menu_open = self.menu_open();

        let command = match (mode, key.code) {
            (_, KeyCode::Char('q') | KeyCode::Char('Q')) => {
                self.should_quit = true;
                None
            }
            (ViewMode::Playing, KeyCode::Esc) if menu_open => Some(Command::ToggleMenu),
            (_, KeyCode::Esc) => {
                self.should_quit = true;
                None
            }

            (ViewMode::Loading, _) => None,

            (ViewMode::Start, KeyCode::Enter | KeyCode::Char(' ')) => Some(Command::Start),
            (ViewMode::Start, KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?')) => {
                Some(Command::ToggleInstructions)
            }
            (ViewMode::Start, _) => None,

            (ViewMode::Playing, KeyCode::Up | KeyCode::Char('k')) => Some(if menu_open {
                Command::MenuMove(-1)
            } else {
                Command::ScrollBy(-1)
            }),
            (ViewMode::Playing, KeyCode::Down | KeyCode::Char('j')) => Some(if menu_open {
                Command::MenuMove(1)
            } else {
                Command::ScrollBy(1)
            }),
            (ViewMode::Playing, KeyCode::PageUp) => Some(Command::ScrollPage(-1)),
            (ViewMode::Playing, KeyCode::PageDown | KeyCode::Char(' ')) => {
                Some(Command::ScrollPage(1))
            }
            (ViewMode::Playing, KeyCode::Home | KeyCode::Char('g')) => Some(Command::ScrollHome),
            (ViewMode::Playing, KeyCode::End | KeyCode::Char('G')) => Some(Command::ScrollEnd),
            // Number keys jump straight to a section
            (ViewMode::Playing, KeyCode::Char(c @ '1'..='9')) => c
                .to_digit(10)
                .and_then(|n| crate::scroll::Section::from_index(n as usize - 1))
                .map(Command::Navigate),
            (ViewMode::Playing, KeyCode::Char('m') | KeyCode::Char('M')) => Some(Command::ToggleMenu),
            (ViewMode::Playing, KeyCode::Enter) => Some(if menu_open {
                Command::MenuSelect
            } else {
                Command::Activate
            }),
            (ViewMode::Playing, KeyCode::Tab) => Some(Command::FocusNext),
            (ViewMode::Playing, KeyCode::BackTab) => Some(Command::FocusPrev),
            (ViewMode::Playing, _) => None,
        };

        if let Some(command) = command {
            self.apply(command);
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let command = match mouse.kind {
            MouseEventKind::ScrollUp => Command::ScrollBy(-WHEEL_ROWS),
            MouseEventKind::ScrollDown => Command::ScrollBy(WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => {
                let at = Position::new(mouse.column, mouse.row);
                match self.hits.iter().rev().find(|hit| hit.area.contains(at)) {
                    Some(hit) => hit.command,
                    None => return,
                }
            }
            _ => return,
        };
        self.apply(command);
    }

    /// Dispatch a command and carry out any effect it produces
    pub fn apply(&mut self, command: Command) {
        debug!(?command, "dispatch");
        let effect = self.controller.dispatch(command);

        // Every route to a section reports it on the status line
        if let Screen::Playing(view) = self.controller.screen_mut() {
            if let Some(section) = view.take_navigation() {
                self.status_message = format!("Travelling to {}", section.label());
            }
        }

        if let Some(Effect::OpenLink(url)) = effect {
            self.open_link(&url);
        }
    }

    fn open_link(&mut self, url: &str) {
        match self.opener.open(url) {
            Ok(()) => {
                info!(%url, "opened link");
                self.status_message = format!("Opened {url}");
            }
            Err(e) => {
                warn!(error = %e, "link launch failed");
                self.status_message = format!("Could not open link: {e}");
            }
        }
    }

    fn menu_open(&self) -> bool {
        match self.controller.screen() {
            Screen::Playing(view) => view.menu().is_open(),
            _ => false,
        }
    }
}
