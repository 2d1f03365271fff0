//! Top-to-bottom layout cursor
//!
//! A `Column` either measures (no buffer) or draws. Section renderers are
//! written once against it and run twice: first to size the page, then to
//! paint it, so measured and painted heights always agree. While drawing it
//! also collects where each focus target landed.

use crate::ui::text::wrap;
use crate::ui::widgets::panel::{GameWindow, FRAME_ROWS};
use crate::view::portfolio::TargetId;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

pub struct Column<'b> {
    buf: Option<&'b mut Buffer>,
    x: u16,
    width: u16,
    top: u16,
    y: u16,
    marks: Vec<(TargetId, Rect)>,
}

impl<'b> Column<'b> {
    pub fn measure(width: u16) -> Self {
        Column {
            buf: None,
            x: 0,
            width,
            top: 0,
            y: 0,
            marks: Vec::new(),
        }
    }

    pub fn draw(buf: &'b mut Buffer, area: Rect) -> Self {
        Column {
            buf: Some(buf),
            x: area.x,
            width: area.width,
            top: area.y,
            y: area.y,
            marks: Vec::new(),
        }
    }

    /// Rows consumed so far
    pub fn rows(&self) -> u16 {
        self.y - self.top
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn gap(&mut self, rows: u16) {
        self.y += rows;
    }

    /// Area the next `height` rows will occupy at full width
    pub fn full_row(&self, height: u16) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height,
        }
    }

    pub fn line(&mut self, line: Line<'_>, alignment: Alignment) {
        let area = self.full_row(1);
        if let Some(buf) = self.buf.as_deref_mut() {
            Paragraph::new(line).alignment(alignment).render(area, buf);
        }
        self.y += 1;
    }

    /// Word-wrapped text, one row per wrapped line
    pub fn text(&mut self, text: &str, style: Style, alignment: Alignment) {
        for line in wrap(text, self.width as usize) {
            self.line(Line::styled(line, style), alignment);
        }
    }

    /// A widget spanning the full column width
    pub fn widget<W: Widget>(&mut self, widget: W, height: u16) {
        let area = self.full_row(height);
        if let Some(buf) = self.buf.as_deref_mut() {
            widget.render(area, buf);
        }
        self.y += height;
    }

    /// Area of a `width` x `height` item placed at the cursor
    pub fn sized_area(&self, width: u16, height: u16, alignment: Alignment) -> Rect {
        let width = width.min(self.width);
        let offset = match alignment {
            Alignment::Left => 0,
            Alignment::Center => (self.width - width) / 2,
            Alignment::Right => self.width - width,
        };
        Rect {
            x: self.x + offset,
            y: self.y,
            width,
            height,
        }
    }

    /// A fixed-size widget placed according to `alignment`
    pub fn widget_sized<W: Widget>(&mut self, widget: W, width: u16, height: u16, alignment: Alignment) {
        let area = self.sized_area(width, height, alignment);
        if let Some(buf) = self.buf.as_deref_mut() {
            widget.render(area, buf);
        }
        self.y += height;
    }

    /// Reserve `height` rows and draw them with `paint` (skipped when measuring)
    pub fn block<F>(&mut self, height: u16, paint: F)
    where
        F: FnOnce(&mut Buffer, Rect),
    {
        let area = self.full_row(height);
        if let Some(buf) = self.buf.as_deref_mut() {
            paint(buf, area);
        }
        self.y += height;
    }

    /// Frame `body` in a [`GameWindow`] sized to fit it
    pub fn window<F>(&mut self, window: GameWindow<'_>, body: F)
    where
        F: Fn(&mut Column<'_>),
    {
        let inner_width = GameWindow::inner(self.full_row(FRAME_ROWS)).width;
        let mut sizing = Column::measure(inner_width);
        body(&mut sizing);
        let height = sizing.rows() + FRAME_ROWS;

        let area = self.full_row(height);
        if let Some(buf) = self.buf.as_deref_mut() {
            window.render(area, buf);
            let mut inner = Column::draw(buf, GameWindow::inner(area));
            body(&mut inner);
            let marks = inner.marks;
            self.marks.extend(marks);
        }
        self.y += height;
    }

    /// Record that target `id` is drawn at `area` (ignored while measuring)
    pub fn mark(&mut self, id: TargetId, area: Rect) {
        if self.buf.is_some() {
            self.marks.push((id, area));
        }
    }

    /// Targets recorded while drawing
    pub fn into_marks(self) -> Vec<(TargetId, Rect)> {
        self.marks
    }
}
