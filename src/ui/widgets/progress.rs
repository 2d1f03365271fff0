//! Horizontal progress bar and the skill row built on it

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// Fills a share of its track proportional to `percent`. The value is not
/// validated; it is only clamped by the cell arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct ProgressBar {
    percent: f64,
}

impl ProgressBar {
    pub fn new(percent: f64) -> Self {
        ProgressBar { percent }
    }

    /// Number of filled cells on a track `width` cells wide
    pub fn filled_cells(percent: f64, width: u16) -> u16 {
        let width_f = f64::from(width);
        let cells = (percent / 100.0 * width_f).round();
        if cells.is_nan() {
            return 0;
        }
        cells.clamp(0.0, width_f) as u16
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let filled = Self::filled_cells(self.percent, area.width);
        let y = area.y;
        for dx in 0..area.width {
            let (symbol, style) = if dx < filled {
                ("█", Style::default().fg(DEFAULT_THEME.accent))
            } else {
                ("░", Style::default().fg(DEFAULT_THEME.surface))
            };
            if let Some(cell) = buf.cell_mut((area.x + dx, y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}

/// Skill label and `LVL n/100` over a progress bar
#[derive(Debug, Clone, Copy)]
pub struct SkillRow<'a> {
    name: &'a str,
    level: f64,
    fill: f64,
}

impl<'a> SkillRow<'a> {
    pub const HEIGHT: u16 = 2;

    /// `fill` in `[0, 1]` scales the bar while it animates in
    pub fn new(name: &'a str, level: f64, fill: f64) -> Self {
        SkillRow { name, level, fill }
    }

    pub fn level_label(&self) -> String {
        format!("LVL {}/100", self.level)
    }
}

impl Widget for SkillRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < Self::HEIGHT {
            return;
        }
        buf.set_stringn(
            area.x,
            area.y,
            self.name,
            area.width as usize,
            Style::default()
                .fg(DEFAULT_THEME.accent)
                .add_modifier(Modifier::BOLD),
        );

        let label = self.level_label();
        let label_width = label.width() as u16;
        if label_width + self.name.width() as u16 + 1 <= area.width {
            let span = Span::styled(label, Style::default().fg(DEFAULT_THEME.muted));
            buf.set_span(area.x + area.width - label_width, area.y, &span, label_width);
        }

        let bar = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        ProgressBar::new(self.level * self.fill).render(bar, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_cells() {
        assert_eq!(ProgressBar::filled_cells(0.0, 20), 0);
        assert_eq!(ProgressBar::filled_cells(50.0, 20), 10);
        assert_eq!(ProgressBar::filled_cells(100.0, 20), 20);
    }

    #[test]
    fn test_out_of_range_clamped_by_drawing() {
        assert_eq!(ProgressBar::filled_cells(250.0, 20), 20);
        assert_eq!(ProgressBar::filled_cells(-30.0, 20), 0);
        assert_eq!(ProgressBar::filled_cells(f64::NAN, 20), 0);
    }

    #[test]
    fn test_skill_row_draws_level() {
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        SkillRow::new("Unity", 85.0, 1.0).render(area, &mut buf);

        let top: String = (0..30)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(top.starts_with("Unity"));
        assert!(top.ends_with("LVL 85/100"));

        let filled = (0..30)
            .filter(|x| buf.cell((*x, 1)).is_some_and(|c| c.symbol() == "█"))
            .count();
        assert_eq!(filled, 26);
    }
}
