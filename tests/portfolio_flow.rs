// End-to-end tests for the loading -> start -> playing flow

use std::time::Duration;

use pixelfolio::config::LayoutConfig;
use pixelfolio::content::Content;
use pixelfolio::errors::LinkError;
use pixelfolio::links::LinkOpener;
use pixelfolio::scroll::Section;
use pixelfolio::ui::App;
use pixelfolio::view::loading::ProgressSource;
use pixelfolio::view::portfolio::TargetId;
use pixelfolio::view::{Command, Controller, Effect, Screen, ViewMode, ViewSettings};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn fixed(step: f64) -> Box<dyn ProgressSource> {
    Box::new(move || step)
}

fn controller(settings: ViewSettings) -> Controller {
    let content = Content::builtin().expect("built-in content parses");
    Controller::new(content, settings, fixed(25.0))
}

/// Records every URL instead of launching anything
#[derive(Default)]
struct RecordingOpener {
    opened: Vec<String>,
    fail: bool,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<(), LinkError> {
        if self.fail {
            return Err(LinkError::Spawn {
                program: "test-opener",
                url: url.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            });
        }
        self.opened.push(url.to_string());
        Ok(())
    }
}

fn app(opener: RecordingOpener) -> App<RecordingOpener> {
    App::new(
        controller(ViewSettings::default()),
        opener,
        LayoutConfig::default(),
        ms(50),
    )
}

fn press(app: &mut App<RecordingOpener>, code: KeyCode) {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn click(app: &mut App<RecordingOpener>, column: u16, row: u16) {
    app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

fn playing(app: &App<RecordingOpener>) -> &pixelfolio::view::portfolio::PortfolioView {
    match app.controller.screen() {
        Screen::Playing(view) => view,
        _ => panic!("expected main view"),
    }
}

fn draw(app: &mut App<RecordingOpener>, terminal: &mut Terminal<TestBackend>) -> String {
    terminal.draw(|f| app.render(f)).expect("draw succeeds");
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

/// Top-left cell of the first occurrence of ASCII `text`
fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
    let area = buffer.area;
    for y in 0..area.height {
        for x in 0..area.width {
            let matches = text.chars().enumerate().all(|(i, ch)| {
                buffer
                    .cell((x + i as u16, y))
                    .is_some_and(|cell| cell.symbol() == ch.encode_utf8(&mut [0; 4]))
            });
            if matches {
                return Some((x, y));
            }
        }
    }
    None
}

#[test]
fn test_loading_reaches_start_after_delay() {
    // 25 per 200ms tick: full at 800ms, start at 1300ms.
    let mut controller = controller(ViewSettings::default());
    assert_eq!(controller.mode(), ViewMode::Loading);

    controller.advance(ms(800));
    match controller.screen() {
        Screen::Loading(view) => assert_eq!(view.percent(), 100),
        _ => panic!("still loading at 800ms"),
    }

    controller.advance(ms(499));
    assert_eq!(controller.mode(), ViewMode::Loading);
    controller.advance(ms(1));
    assert_eq!(controller.mode(), ViewMode::Start);
}

#[test]
fn test_commands_ignored_while_loading() {
    let mut controller = controller(ViewSettings::default());
    assert_eq!(controller.dispatch(Command::Start), None);
    assert_eq!(controller.dispatch(Command::Navigate(Section::Skills)), None);
    assert_eq!(controller.mode(), ViewMode::Loading);
}

#[test]
fn test_transitions_only_move_forward() {
    let mut controller = controller(ViewSettings::default());
    assert!(!controller.advance_to_playing());
    assert!(controller.advance_to_start());
    assert!(!controller.advance_to_start());
    assert!(controller.advance_to_playing());
    assert!(!controller.advance_to_start());
    assert_eq!(controller.mode(), ViewMode::Playing);
}

#[test]
fn test_startup_cap_preempts_slow_loading() {
    let settings = ViewSettings {
        startup_cap: Some(ms(2500)),
        ..ViewSettings::default()
    };
    let content = Content::builtin().expect("built-in content parses");
    let mut controller = Controller::new(content, settings, fixed(0.0));

    controller.advance(ms(2499));
    assert_eq!(controller.mode(), ViewMode::Loading);
    controller.advance(ms(1));
    assert_eq!(controller.mode(), ViewMode::Start);
}

#[test]
fn test_start_toggle_instructions() {
    let mut controller = controller(ViewSettings::default());
    controller.advance_to_start();
    controller.dispatch(Command::ToggleInstructions);
    match controller.screen() {
        Screen::Start(view) => {
            assert!(view.show_instructions());
            assert_eq!(view.toggle_label(), "HIDE INSTRUCTIONS");
        }
        _ => panic!("expected start screen"),
    }
}

#[test]
fn test_screens_render_in_order() {
    let mut app = app(RecordingOpener::default());
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");

    let loading = draw(&mut app, &mut terminal);
    assert!(loading.contains("LOADING AIYVAN'S WORLD..."));
    assert!(loading.contains("0%"));

    // Keys do nothing until loading finishes
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.controller.mode(), ViewMode::Loading);

    app.controller.advance(ms(1300));
    assert_eq!(app.controller.mode(), ViewMode::Start);
    // Let the start screen finish fading in
    app.controller.advance(ms(1000));
    let start = draw(&mut app, &mut terminal);
    assert!(start.contains("PRESS START"));
    assert!(start.contains("HOW TO PLAY"));
    assert!(!start.contains("CONTROLS"));

    press(&mut app, KeyCode::Char('h'));
    let start = draw(&mut app, &mut terminal);
    assert!(start.contains("CONTROLS"));
    assert!(start.contains("HIDE INSTRUCTIONS"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.controller.mode(), ViewMode::Playing);
    let page = draw(&mut app, &mut terminal);
    assert!(!page.contains("PRESS START"));
    assert!(!page.contains("LOADING"));
    assert!(page.contains("Projects"));
    assert!(page.contains("VIEW PROJECTS"));
}

#[test]
fn test_number_keys_navigate_and_update_header() {
    let mut app = app(RecordingOpener::default());
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
    app.controller.advance_to_start();
    app.controller.advance_to_playing();
    draw(&mut app, &mut terminal);

    press(&mut app, KeyCode::Char('4'));
    app.controller.advance(ms(200));
    let Screen::Playing(view) = app.controller.screen() else {
        panic!("expected main view");
    };
    assert_eq!(view.active_section(), Section::Skills);
    let skills_start = view.sections()[&Section::Skills].start;
    assert_eq!(view.scroll(), skills_start.min(view.max_scroll()));
    assert_eq!(app.status_message, "Travelling to Skills");
}

#[test]
fn test_compact_menu_flow() {
    let mut app = app(RecordingOpener::default());
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).expect("test terminal");
    app.controller.advance_to_start();
    app.controller.advance_to_playing();

    let page = draw(&mut app, &mut terminal);
    assert!(page.contains("☰"));
    assert!(!page.contains("Contact"));

    press(&mut app, KeyCode::Char('m'));
    let page = draw(&mut app, &mut terminal);
    assert!(page.contains("✕"));
    assert!(page.contains("Contact"));

    // Esc closes the menu instead of quitting
    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit);
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let view = playing(&app);
    assert!(!view.menu().is_open());
    assert_eq!(view.scroll(), view.sections()[&Section::About].start);
    assert_eq!(app.status_message, "Travelling to About");
}

#[test]
fn test_hero_button_reports_travel() {
    let mut app = app(RecordingOpener::default());
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
    app.controller.advance_to_start();
    app.controller.advance_to_playing();
    draw(&mut app, &mut terminal);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.status_message, "Travelling to Projects");

    // Moving focus alone is not a trip
    app.status_message.clear();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.status_message, "");
}

#[test]
fn test_focus_scrolls_lower_card_into_short_terminal() {
    let mut app = app(RecordingOpener::default());
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).expect("test terminal");
    app.controller.advance_to_start();
    app.controller.advance_to_playing();
    draw(&mut app, &mut terminal);

    // Two hero buttons, then three cards stacked in one column
    for _ in 0..5 {
        press(&mut app, KeyCode::Tab);
    }
    assert_eq!(
        playing(&app).focused().map(|t| t.id),
        Some(TargetId::Card { group: 0, index: 2 })
    );

    let page = draw(&mut app, &mut terminal);
    assert!(page.contains("A Knight Shift Pic.png"), "{page}");
}

#[test]
fn test_click_header_nav_label() {
    let mut app = app(RecordingOpener::default());
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
    app.controller.advance_to_start();
    app.controller.advance_to_playing();
    draw(&mut app, &mut terminal);

    let (x, y) = find_text(terminal.backend().buffer(), "Skills").expect("nav label drawn");
    assert_eq!(y, 1);
    click(&mut app, x + 2, y);

    let view = playing(&app);
    let skills_start = view.sections()[&Section::Skills].start;
    assert_eq!(view.scroll(), skills_start.min(view.max_scroll()));
    assert_eq!(app.status_message, "Travelling to Skills");
}

#[test]
fn test_click_compact_menu() {
    let mut app = app(RecordingOpener::default());
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).expect("test terminal");
    app.controller.advance_to_start();
    app.controller.advance_to_playing();
    draw(&mut app, &mut terminal);

    click(&mut app, 58, 1);
    assert!(playing(&app).menu().is_open());

    // Menu rows start right under the header: Home, then About
    draw(&mut app, &mut terminal);
    click(&mut app, 10, 4);

    let view = playing(&app);
    assert!(!view.menu().is_open());
    assert_eq!(view.scroll(), view.sections()[&Section::About].start);
    assert_eq!(app.status_message, "Travelling to About");
}

#[test]
fn test_click_card_opens_its_link() {
    let mut app = app(RecordingOpener::default());
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
    app.controller.advance_to_start();
    app.controller.advance_to_playing();
    draw(&mut app, &mut terminal);

    // Bring the project cards on screen, then click the second one
    press(&mut app, KeyCode::Char('3'));
    draw(&mut app, &mut terminal);
    let (x, y) = find_text(terminal.backend().buffer(), "Eira Pic.png").expect("card drawn");
    click(&mut app, x, y);

    assert_eq!(app.opener().opened, vec!["https://aiyvan.itch.io/eira".to_string()]);
    assert_eq!(
        playing(&app).focused().map(|t| t.id),
        Some(TargetId::Card { group: 0, index: 1 })
    );
}

#[test]
fn test_click_start_button() {
    let mut app = app(RecordingOpener::default());
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
    app.controller.advance_to_start();
    app.controller.advance(ms(1000));
    draw(&mut app, &mut terminal);

    // Empty space does nothing
    click(&mut app, 0, 0);
    assert_eq!(app.controller.mode(), ViewMode::Start);

    let (x, y) = find_text(terminal.backend().buffer(), "HOW TO PLAY").expect("toggle drawn");
    click(&mut app, x, y);
    match app.controller.screen() {
        Screen::Start(view) => assert!(view.show_instructions()),
        _ => panic!("expected start screen"),
    }

    let (x, y) = find_text(terminal.backend().buffer(), "PRESS START").expect("button drawn");
    click(&mut app, x, y);
    assert_eq!(app.controller.mode(), ViewMode::Playing);
}

#[test]
fn test_activate_opens_project_link() {
    let mut app = app(RecordingOpener::default());
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
    app.controller.advance_to_start();
    app.controller.advance_to_playing();
    draw(&mut app, &mut terminal);

    // Two hero buttons, then the first playable card
    for _ in 0..3 {
        press(&mut app, KeyCode::Tab);
    }
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.opener().opened.len(), 1);
    assert!(app.opener().opened[0].starts_with("https://aiyvan.itch.io/"));
    assert!(app.status_message.starts_with("Opened "));
}

#[test]
fn test_activate_email_produces_mailto() {
    let mut controller = controller(ViewSettings::default());
    controller.advance_to_start();
    controller.advance_to_playing();

    // Backwards from the start: three socials, then the email
    for _ in 0..4 {
        controller.dispatch(Command::FocusPrev);
    }
    assert_eq!(
        controller.dispatch(Command::Activate),
        Some(Effect::OpenLink("mailto:charlesivanbrena@gmail.com".to_string()))
    );
}

#[test]
fn test_failed_link_reported_in_status() {
    let mut app = app(RecordingOpener {
        fail: true,
        ..RecordingOpener::default()
    });
    app.controller.advance_to_start();
    app.controller.advance_to_playing();

    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Enter);

    assert!(app.opener().opened.is_empty());
    assert!(app.status_message.starts_with("Could not open link"));
    assert!(!app.should_quit);
}

#[test]
fn test_quit_keys() {
    let mut app = app(RecordingOpener::default());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);

    let mut app = self::app(RecordingOpener::default());
    app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit);
}
