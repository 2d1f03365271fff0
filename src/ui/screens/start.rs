//! Start screen rendering

use std::time::Duration;

use crate::anim::{ping_pong, Tween};
use crate::content::StartText;
use crate::ui::text::wrap;
use crate::ui::theme::DEFAULT_THEME;
use crate::ui::widgets::{PixelButton, BUTTON_HEIGHT};
use crate::view::start::StartView;
use crate::view::Command;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Hit;

pub const START_LABEL: &str = "► PRESS START";

const BOUNCE_PERIOD: Duration = Duration::from_millis(1500);
const BOUNCE_ROWS: f64 = 2.0;
const TITLE_IN: Tween = Tween::new(Duration::from_millis(800));
const WELCOME_IN: Tween = Tween::new(Duration::from_millis(400)).delayed(Duration::from_millis(400));
const TOGGLE_IN: Tween = Tween::new(Duration::from_millis(400)).delayed(Duration::from_millis(600));

const CONTROLS: [(&str, &str); 3] = [
    ("↑/↓ SCROLL", "Navigate through sections"),
    ("TAB/ENTER", "Interact with elements"),
    ("1-5 / M NAV MENU", "Quick travel to sections"),
];

pub fn render_start(frame: &mut Frame, text: &StartText, view: &StartView) -> Vec<Hit> {
    let area = frame.area();
    let mut hits = Vec::new();
    frame.render_widget(
        Block::default().style(Style::default().bg(DEFAULT_THEME.bg)),
        area,
    );

    let width = area.width.saturating_sub(4).min(60).max(1).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let welcome = wrap(&text.welcome, width as usize);
    let panel_rows = if view.show_instructions() {
        CONTROLS.len() as u16 + 4
    } else {
        0
    };
    // glyph(+bounce) gap title gap welcome gap button gap toggle panel
    let content_rows =
        1 + BOUNCE_ROWS as u16 + 1 + 1 + 1 + welcome.len() as u16 + 1 + BUTTON_HEIGHT + 1 + 1 + panel_rows;
    let mut y = area.y + area.height.saturating_sub(content_rows) / 2;
    let bottom = area.y + area.height;
    let row = |y: u16, height: u16| Rect {
        x,
        y,
        width,
        height: height.min(bottom.saturating_sub(y)),
    };

    let elapsed = view.elapsed();

    // Joystick bounces down and back within its reserved rows.
    let bounce = (ping_pong(elapsed, BOUNCE_PERIOD) * BOUNCE_ROWS).round() as u16;
    if y + bounce < bottom {
        frame.render_widget(
            Paragraph::new("🕹️").alignment(Alignment::Center),
            row(y + bounce, 1),
        );
    }
    y += 1 + BOUNCE_ROWS as u16 + 1;

    let mut title_style = Style::default()
        .fg(DEFAULT_THEME.accent)
        .add_modifier(Modifier::BOLD);
    if !TITLE_IN.finished(elapsed) {
        title_style = title_style.add_modifier(Modifier::DIM);
    }
    if y < bottom {
        frame.render_widget(
            Paragraph::new(Line::styled(text.title.clone(), title_style)).alignment(Alignment::Center),
            row(y, 1),
        );
    }
    y += 2;

    if WELCOME_IN.started(elapsed) {
        let mut style = Style::default().fg(DEFAULT_THEME.muted);
        if !WELCOME_IN.finished(elapsed) {
            style = style.add_modifier(Modifier::DIM);
        }
        for (i, line) in welcome.iter().enumerate() {
            let line_y = y + i as u16;
            if line_y < bottom {
                frame.render_widget(
                    Paragraph::new(Line::styled(line.clone(), style)).alignment(Alignment::Center),
                    row(line_y, 1),
                );
            }
        }
    }
    y += welcome.len() as u16 + 1;

    let button = PixelButton::new(START_LABEL).focused(true);
    let button_width = button.width().min(width);
    if y + BUTTON_HEIGHT <= bottom {
        let button_area = Rect {
            x: x + (width - button_width) / 2,
            y,
            width: button_width,
            height: BUTTON_HEIGHT,
        };
        frame.render_widget(button, button_area);
        hits.push(Hit::new(button_area, Command::Start));
    }
    y += BUTTON_HEIGHT + 1;

    if TOGGLE_IN.started(elapsed) && y < bottom {
        let toggle = Line::from(vec![
            Span::styled(
                view.toggle_label(),
                Style::default()
                    .fg(DEFAULT_THEME.faint)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled("  (h)", Style::default().fg(DEFAULT_THEME.faint)),
        ]);
        let toggle_width = (toggle.width() as u16).min(width);
        frame.render_widget(Paragraph::new(toggle).alignment(Alignment::Center), row(y, 1));
        hits.push(Hit::new(
            Rect {
                x: x + (width - toggle_width) / 2,
                width: toggle_width,
                ..row(y, 1)
            },
            Command::ToggleInstructions,
        ));
    }
    y += 1;

    if view.show_instructions() && y + 1 < bottom {
        let mut lines = vec![Line::styled(
            "CONTROLS",
            Style::default()
                .fg(DEFAULT_THEME.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)];
        for (key, what) in CONTROLS {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(DEFAULT_THEME.accent)),
                Span::styled(key, Style::default().fg(DEFAULT_THEME.fg)),
                Span::styled(format!(" - {what}"), Style::default().fg(DEFAULT_THEME.accent)),
            ]));
        }
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(DEFAULT_THEME.accent)),
            ),
            row(y + 1, panel_rows - 1),
        );
    }
    hits
}
