//! Main page screen: fixed header, scrolled page window, mobile menu overlay
//! and status bar

use crate::content::Content;
use crate::scroll::Section;
use crate::ui::theme::DEFAULT_THEME;
use crate::view::portfolio::{PortfolioView, HEADER_HEIGHT};
use crate::view::Command;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::page::build_page;
use super::Hit;

/// Render the main page and record its layout on the view.
pub fn render_portfolio(
    frame: &mut Frame,
    content: &Content,
    view: &mut PortfolioView,
    compact_width: u16,
    status: &str,
) -> Vec<Hit> {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let header_area = chunks[0];
    let page_area = chunks[1];
    let status_area = chunks[2];

    let page = build_page(content, view, page_area.width, page_area.height);
    view.set_layout(page.sections, page.targets, page.height, page_area.height as usize);
    blit(&page.buffer, view.scroll(), page_area, frame.buffer_mut());

    let mut hits = page_hits(view, page_area);
    let compact = area.width < compact_width;
    hits.extend(render_header(frame, header_area, content, view, compact));
    if view.menu().is_open() {
        hits.extend(render_menu(frame, page_area, view));
    }
    render_status_bar(frame, status_area, status, view);
    hits
}

/// Screen regions of the focus targets inside the visible page window
fn page_hits(view: &PortfolioView, area: Rect) -> Vec<Hit> {
    let top = view.scroll();
    let bottom = top + area.height as usize;
    view.target_areas()
        .iter()
        .filter_map(|(id, target)| {
            let start = target.rows.start.max(top);
            let end = target.rows.end.min(bottom);
            if start >= end {
                return None;
            }
            let rect = Rect {
                x: area.x + target.columns.start,
                y: area.y + (start - top) as u16,
                width: target.columns.end - target.columns.start,
                height: (end - start) as u16,
            };
            Some(Hit::new(rect.intersection(area), Command::Press(*id)))
        })
        .collect()
}

/// Copy the visible rows of the page into the frame
fn blit(page: &Buffer, scroll: usize, area: Rect, out: &mut Buffer) {
    for dy in 0..area.height {
        let Ok(src_y) = u16::try_from(scroll + dy as usize) else {
            break;
        };
        for dx in 0..area.width {
            let Some(src) = page.cell((dx, src_y)) else {
                continue;
            };
            if let Some(dst) = out.cell_mut((area.x + dx, area.y + dy)) {
                *dst = src.clone();
            }
        }
    }
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    content: &Content,
    view: &PortfolioView,
    compact: bool,
) -> Vec<Hit> {
    let mut hits = Vec::new();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .style(Style::default().bg(DEFAULT_THEME.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return hits;
    }
    let row = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: 1,
        ..inner
    };

    let logo = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            content.brand.accent.clone(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            content.brand.rest.clone(),
            Style::default()
                .fg(DEFAULT_THEME.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let logo_width = (logo.width() as u16).min(row.width);
    frame.render_widget(Paragraph::new(logo), row);
    hits.push(Hit::new(
        Rect {
            width: logo_width,
            ..row
        },
        Command::Navigate(Section::Home),
    ));

    let nav = if compact {
        let glyph = if view.menu().is_open() { "✕ " } else { "☰ " };
        let glyph_width = (glyph.width() as u16).min(row.width);
        hits.push(Hit::new(
            Rect {
                x: row.right() - glyph_width,
                width: glyph_width,
                ..row
            },
            Command::ToggleMenu,
        ));
        Line::from(Span::styled(
            glyph,
            Style::default()
                .fg(DEFAULT_THEME.accent)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        let active = view.active_section();
        let mut spans = Vec::new();
        let mut labels = Vec::new();
        let mut offset = 0u16;
        for (i, section) in Section::ALL.iter().enumerate() {
            let style = if *section == active {
                Style::default()
                    .fg(DEFAULT_THEME.highlight)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(DEFAULT_THEME.accent)
            };
            let number = format!("{} ", i + 1);
            let width = (number.width() + section.label().width()) as u16;
            labels.push((offset, width, *section));
            offset += width + 3;

            spans.push(Span::styled(number, Style::default().fg(DEFAULT_THEME.faint)));
            spans.push(Span::styled(section.label(), style));
            spans.push(Span::raw("   "));
        }
        // Right-aligned, so label positions are only known when the line fits
        if offset <= row.width {
            let left = row.right() - offset;
            for (offset, width, section) in labels {
                hits.push(Hit::new(
                    Rect {
                        x: left + offset,
                        width,
                        ..row
                    },
                    Command::Navigate(section),
                ));
            }
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(nav).alignment(Alignment::Right), row);
    hits
}

fn render_menu(frame: &mut Frame, page_area: Rect, view: &PortfolioView) -> Vec<Hit> {
    let height = (Section::ALL.len() as u16 + 2).min(page_area.height);
    let area = Rect {
        height,
        ..page_area
    };
    let active = view.active_section();
    let cursor = view.menu().cursor();

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| {
            let marker_style = if *section == active {
                Style::default().fg(DEFAULT_THEME.accent)
            } else {
                Style::default().fg(DEFAULT_THEME.bg)
            };
            let mut label_style = if *section == active {
                Style::default().fg(DEFAULT_THEME.highlight)
            } else {
                Style::default().fg(DEFAULT_THEME.muted)
            };
            if *section == cursor {
                label_style = label_style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::styled("▌ ", marker_style),
                Span::styled(format!(" {} ", section.label()), label_style),
            ]))
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
                .style(Style::default().bg(DEFAULT_THEME.bg)),
        ),
        area,
    );

    // The whole overlay swallows clicks; a click on a row travels there
    let mut hits = vec![Hit::new(area, Command::ToggleMenu)];
    for (i, section) in Section::ALL.iter().enumerate() {
        let y = area.y + i as u16;
        if y >= area.bottom().saturating_sub(1) {
            break;
        }
        hits.push(Hit::new(
            Rect {
                y,
                height: 1,
                ..area
            },
            Command::Navigate(*section),
        ));
    }
    hits
}

fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, view: &PortfolioView) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let key_style = Style::default().bg(DEFAULT_THEME.faint).fg(DEFAULT_THEME.on_accent);
    let desc_style = Style::default().bg(DEFAULT_THEME.surface).fg(DEFAULT_THEME.fg);
    let sep_style = Style::default().bg(DEFAULT_THEME.surface).fg(DEFAULT_THEME.faint);

    let left = Line::from(vec![
        Span::styled(
            format!(" {} ", view.active_section().label().to_uppercase()),
            Style::default()
                .bg(DEFAULT_THEME.accent)
                .fg(DEFAULT_THEME.on_accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {message} "), desc_style),
    ]);
    frame.render_widget(
        Paragraph::new(left).style(Style::default().bg(DEFAULT_THEME.surface)),
        layout[0],
    );

    let right = Line::from(vec![
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" scroll ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" 1-5 ", key_style),
        Span::styled(" jump ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" m ", key_style),
        Span::styled(" menu ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⇥ / ↵ ", key_style),
        Span::styled(" select ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ]);
    frame.render_widget(
        Paragraph::new(right)
            .style(Style::default().bg(DEFAULT_THEME.surface))
            .alignment(Alignment::Right),
        layout[1],
    );
}
