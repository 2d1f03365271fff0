//! Bordered pixel-style button

use crate::scroll::Section;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub const BUTTON_HEIGHT: u16 = 3;

/// A button is a link when it has a navigation target, otherwise an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Link(Section),
    Action,
}

#[derive(Debug, Clone, Copy)]
pub struct PixelButton<'a> {
    label: &'a str,
    href: Option<Section>,
    focused: bool,
}

impl<'a> PixelButton<'a> {
    pub fn new(label: &'a str) -> Self {
        PixelButton {
            label,
            href: None,
            focused: false,
        }
    }

    pub fn href(mut self, section: Section) -> Self {
        self.href = Some(section);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn kind(&self) -> ButtonKind {
        match self.href {
            Some(section) => ButtonKind::Link(section),
            None => ButtonKind::Action,
        }
    }

    /// Columns needed to draw the whole label
    pub fn width(&self) -> u16 {
        let suffix = if self.href.is_some() { 2 } else { 0 };
        (self.label.width() + suffix + 6) as u16
    }
}

impl Widget for PixelButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, text) = if self.focused {
            (
                Style::default().fg(DEFAULT_THEME.border_focused),
                Style::default()
                    .fg(DEFAULT_THEME.on_accent)
                    .bg(DEFAULT_THEME.accent),
            )
        } else {
            (
                Style::default().fg(DEFAULT_THEME.accent),
                Style::default().fg(DEFAULT_THEME.accent),
            )
        };

        let mut spans = vec![Span::styled(
            format!(" {} ", self.label),
            text.add_modifier(Modifier::BOLD),
        )];
        if let ButtonKind::Link(_) = self.kind() {
            spans[0] = Span::styled(
                format!(" {} ", self.label),
                text.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
            spans.push(Span::styled("› ", text));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_target() {
        assert_eq!(PixelButton::new("PLAY NOW").kind(), ButtonKind::Action);
        assert_eq!(
            PixelButton::new("VIEW PROJECTS").href(Section::Projects).kind(),
            ButtonKind::Link(Section::Projects)
        );
    }

    #[test]
    fn test_width_fits_label() {
        assert_eq!(PixelButton::new("GO").width(), 8);
        assert_eq!(PixelButton::new("GO").href(Section::Home).width(), 10);
    }
}
