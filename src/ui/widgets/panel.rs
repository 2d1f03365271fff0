//! Titled, thick-bordered frame around a group of content

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

pub const DEFAULT_TITLE: &str = "QUEST LOG";

/// Rows taken by the frame (top and bottom border plus one row of padding)
pub const FRAME_ROWS: u16 = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct GameWindow<'a> {
    title: Option<&'a str>,
}

impl<'a> GameWindow<'a> {
    pub fn new(title: Option<&'a str>) -> Self {
        GameWindow { title }
    }

    pub fn title(&self) -> &'a str {
        self.title.unwrap_or(DEFAULT_TITLE)
    }

    /// Area left for content inside the frame
    pub fn inner(area: Rect) -> Rect {
        Rect {
            x: area.x.saturating_add(3),
            y: area.y.saturating_add(2),
            width: area.width.saturating_sub(6),
            height: area.height.saturating_sub(FRAME_ROWS),
        }
    }

    fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(DEFAULT_THEME.accent))
            .style(Style::default().bg(DEFAULT_THEME.panel))
            .title(Line::from(Span::styled(
                format!(" {} ", self.title()),
                Style::default()
                    .fg(DEFAULT_THEME.accent)
                    .add_modifier(Modifier::BOLD),
            )))
    }
}

impl Widget for GameWindow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title() {
        assert_eq!(GameWindow::new(None).title(), "QUEST LOG");
        assert_eq!(GameWindow::new(Some("ABOUT ME")).title(), "ABOUT ME");
    }

    #[test]
    fn test_title_drawn_on_border() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        GameWindow::new(None).render(area, &mut buf);

        let top: String = (0..area.width)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(top.contains("QUEST LOG"));
    }
}
