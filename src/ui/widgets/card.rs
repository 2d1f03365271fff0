//! Project card: image slot, title, description, tags and a play button

use std::path::Path;

use crate::content::Project;
use crate::ui::text::{flow, wrap};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::button::{PixelButton, BUTTON_HEIGHT};

/// Shown in the image slot when a project has no screenshot
pub const FALLBACK_GLYPH: &str = "🎮";
pub const PLAY_LABEL: &str = "PLAY NOW";

const IMAGE_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy)]
pub struct ProjectCard<'a> {
    project: &'a Project,
    focused: bool,
}

impl<'a> ProjectCard<'a> {
    pub fn new(project: &'a Project) -> Self {
        ProjectCard {
            project,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Whether the card offers a play button
    pub fn is_playable(&self) -> bool {
        self.project.link.is_some()
    }

    fn text_width(width: u16) -> usize {
        width.saturating_sub(4) as usize
    }

    fn tag_labels(&self) -> Vec<String> {
        self.project.tags.iter().map(|t| format!("[{t}]")).collect()
    }

    /// Rows needed to draw this card at `width` columns
    pub fn height(&self, width: u16) -> u16 {
        let text_width = Self::text_width(width);
        let title = wrap(&self.project.title, text_width).len() as u16;
        let description = wrap(&self.project.description, text_width).len() as u16;
        let tags = flow(&self.tag_labels(), text_width).len() as u16;
        let button = if self.is_playable() { BUTTON_HEIGHT } else { 0 };

        // borders + image + gap + title + description + gap + tags + button
        2 + IMAGE_HEIGHT + 1 + title + description + 1 + tags + button
    }

    fn render_image(&self, area: Rect, buf: &mut Buffer) {
        let slot = Block::default().style(Style::default().bg(DEFAULT_THEME.surface));
        let label = match &self.project.image {
            Some(path) => {
                let name = Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or(path.as_str());
                Line::from(vec![
                    Span::styled("▣ ", Style::default().fg(DEFAULT_THEME.accent)),
                    Span::styled(name.to_string(), Style::default().fg(DEFAULT_THEME.muted)),
                ])
            }
            None => Line::from(Span::styled(
                FALLBACK_GLYPH,
                Style::default().fg(DEFAULT_THEME.accent),
            )),
        };
        let middle = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        slot.render(area, buf);
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}

impl Widget for ProjectCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.accent)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused {
                BorderType::Double
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .style(Style::default().bg(DEFAULT_THEME.panel));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height < IMAGE_HEIGHT {
            return;
        }
        let text_width = Self::text_width(area.width);
        let left = inner.x + 1;
        let bottom = inner.y + inner.height;
        let mut y = inner.y;

        self.render_image(
            Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: IMAGE_HEIGHT,
            },
            buf,
        );
        y += IMAGE_HEIGHT + 1;

        let title_style = Style::default()
            .fg(DEFAULT_THEME.accent)
            .add_modifier(Modifier::BOLD);
        for line in wrap(&self.project.title, text_width) {
            if y >= bottom {
                return;
            }
            buf.set_stringn(left, y, line, text_width, title_style);
            y += 1;
        }

        let body_style = Style::default().fg(DEFAULT_THEME.muted);
        for line in wrap(&self.project.description, text_width) {
            if y >= bottom {
                return;
            }
            buf.set_stringn(left, y, line, text_width, body_style);
            y += 1;
        }
        y += 1;

        let tag_style = Style::default()
            .fg(DEFAULT_THEME.accent_soft)
            .bg(DEFAULT_THEME.surface);
        let labels = self.tag_labels();
        for row in flow(&labels, text_width) {
            if y >= bottom {
                return;
            }
            let mut x = left;
            for tag in row {
                let (next_x, _) = buf.set_stringn(x, y, tag, text_width, tag_style);
                x = next_x + 1;
            }
            y += 1;
        }

        if self.is_playable() && y + BUTTON_HEIGHT <= bottom {
            PixelButton::new(PLAY_LABEL).focused(self.focused).render(
                Rect {
                    x: left,
                    y,
                    width: text_width as u16,
                    height: BUTTON_HEIGHT,
                },
                buf,
            );
        }
    }
}
