//! Loading screen rendering

use std::time::Duration;

use crate::anim::Tween;
use crate::content::LoadingText;
use crate::ui::theme::DEFAULT_THEME;
use crate::ui::widgets::ProgressBar;
use crate::view::loading::LoadingView;

use super::Hit;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

const FADE_IN: Tween = Tween::new(Duration::from_millis(300));
const PANEL_WIDTH: u16 = 50;
const PANEL_HEIGHT: u16 = 7;

/// The loading screen takes no clicks, so it returns no hits.
pub fn render_loading(frame: &mut Frame, text: &LoadingText, view: &LoadingView) -> Vec<Hit> {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(DEFAULT_THEME.bg)),
        area,
    );

    let width = PANEL_WIDTH.min(area.width.saturating_sub(4)).max(1).min(area.width);
    let height = PANEL_HEIGHT.min(area.height);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let mut accent = Style::default().fg(DEFAULT_THEME.accent);
    if !FADE_IN.finished(view.elapsed()) {
        accent = accent.add_modifier(Modifier::DIM);
    }

    let row = |offset: u16| Rect {
        y: panel.y + offset,
        height: 1,
        ..panel
    };

    if panel.height > 0 {
        frame.render_widget(
            Paragraph::new(Line::styled(
                text.heading.clone(),
                accent.add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            row(0),
        );
    }
    if panel.height > 2 {
        frame.render_widget(ProgressBar::new(view.progress()), row(2));
    }
    if panel.height > 3 {
        frame.render_widget(
            Paragraph::new(Line::styled(format!("{}%", view.percent()), accent))
                .alignment(Alignment::Right),
            row(3),
        );
    }
    if panel.height > 5 {
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!("\"{}\"", text.tagline),
                Style::default()
                    .fg(DEFAULT_THEME.faint)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
            row(5),
        );
    }
    Vec::new()
}
