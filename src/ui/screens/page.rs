//! The scrollable page, laid out into an off-screen buffer
//!
//! Every section is at least one viewport tall and its content is centred
//! vertically, so scrolling moves through whole "screens". The row range of
//! each section is recorded for the active-section tracker, and the cells of
//! each focus target for scrolling it into view and for mouse hits.

use crate::anim::staggered;
use crate::content::{Content, ProjectGroup};
use crate::scroll::{Section, SectionMap};
use crate::ui::text::{flow, wrap};
use crate::ui::theme::DEFAULT_THEME;
use crate::ui::widgets::{GameWindow, PixelButton, ProjectCard, SkillRow, BUTTON_HEIGHT};
use crate::view::portfolio::{PortfolioView, TargetArea, TargetId, TargetMap, HERO_BUTTONS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use std::path::Path;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

use super::column::Column;

const MAX_CONTENT_WIDTH: u16 = 100;
const TAGLINE_STAGGER: Duration = Duration::from_millis(50);
const CARD_GAP: u16 = 2;
const SOCIAL_GAP: u16 = 2;
const AVATAR_SIZE: (u16, u16) = (28, 7);

pub struct Page {
    pub buffer: Buffer,
    pub sections: SectionMap,
    pub targets: TargetMap,
    pub height: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Section(Section),
    Footer,
}

const PARTS: [Part; 6] = [
    Part::Section(Section::Home),
    Part::Section(Section::About),
    Part::Section(Section::Projects),
    Part::Section(Section::Skills),
    Part::Section(Section::Contact),
    Part::Footer,
];

struct PageCtx<'a> {
    content: &'a Content,
    view: &'a PortfolioView,
}

/// Lay out and paint the whole page at `width` columns
pub fn build_page(content: &Content, view: &PortfolioView, width: u16, viewport_height: u16) -> Page {
    let ctx = PageCtx { content, view };
    let column_width = content_width(width);

    let mut heights = Vec::with_capacity(PARTS.len());
    for part in PARTS {
        let mut sizing = Column::measure(column_width);
        render_part(&ctx, part, &mut sizing);
        let natural = sizing.rows() + 2;
        let height = match part {
            Part::Section(_) => natural.max(viewport_height),
            Part::Footer => natural,
        };
        heights.push((natural - 2, height));
    }

    let total: u16 = heights
        .iter()
        .fold(0u16, |acc, (_, h)| acc.saturating_add(*h));
    let mut buffer = Buffer::empty(Rect::new(0, 0, width, total));
    let mut sections = SectionMap::default();
    let mut targets = TargetMap::default();

    let mut y = 0u16;
    for (part, (content_rows, height)) in PARTS.into_iter().zip(heights) {
        if y.saturating_add(height) > total {
            break;
        }
        let area = Rect::new(0, y, width, height);
        buffer.set_style(area, Style::default().bg(part_background(part)));

        let x = (width - column_width) / 2;
        let inner = Rect {
            x,
            y: y + (height - content_rows) / 2,
            width: column_width,
            height: content_rows,
        };
        let mut col = Column::draw(&mut buffer, inner);
        render_part(&ctx, part, &mut col);
        for (id, rect) in col.into_marks() {
            targets.insert(
                id,
                TargetArea {
                    rows: rect.y as usize..rect.bottom() as usize,
                    columns: rect.x..rect.right(),
                },
            );
        }

        if let Part::Section(section) = part {
            sections.insert(section, y as usize..(y + height) as usize);
        }
        y += height;
    }

    Page {
        buffer,
        sections,
        targets,
        height: total as usize,
    }
}

fn content_width(width: u16) -> u16 {
    width.saturating_sub(4).min(MAX_CONTENT_WIDTH).max(1).min(width)
}

fn part_background(part: Part) -> Color {
    match part {
        Part::Section(Section::Home | Section::Projects | Section::Contact) => DEFAULT_THEME.panel,
        Part::Section(Section::About | Section::Skills) => DEFAULT_THEME.surface,
        Part::Footer => DEFAULT_THEME.bg,
    }
}

fn render_part(ctx: &PageCtx<'_>, part: Part, col: &mut Column<'_>) {
    match part {
        Part::Section(Section::Home) => render_hero(ctx, col),
        Part::Section(Section::About) => render_about(ctx, col),
        Part::Section(Section::Projects) => render_projects(ctx, col),
        Part::Section(Section::Skills) => render_skills(ctx, col),
        Part::Section(Section::Contact) => render_contact(ctx, col),
        Part::Footer => render_footer(ctx, col),
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::styled(
        text.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.accent)
            .add_modifier(Modifier::BOLD),
    )
}

fn caption(text: &str) -> Line<'static> {
    Line::styled(text.to_string(), Style::default().fg(DEFAULT_THEME.faint))
}

fn letter_spaced(text: &str) -> String {
    text.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_hero(ctx: &PageCtx<'_>, col: &mut Column<'_>) {
    let hero = &ctx.content.hero;
    let brand = &ctx.content.brand;

    col.line(
        Line::from(Span::styled(
            format!(" {} ", hero.badge),
            Style::default()
                .fg(DEFAULT_THEME.on_accent)
                .bg(DEFAULT_THEME.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Alignment::Center,
    );
    col.gap(1);

    let bold = Modifier::BOLD;
    col.line(
        Line::from(vec![
            Span::styled(
                letter_spaced(&brand.accent),
                Style::default().fg(DEFAULT_THEME.accent).add_modifier(bold),
            ),
            Span::raw(" "),
            Span::styled(
                letter_spaced(&brand.rest),
                Style::default().fg(DEFAULT_THEME.fg).add_modifier(bold),
            ),
        ]),
        Alignment::Center,
    );
    col.line(
        Line::from(vec![
            Span::styled(
                format!("{} ", hero.class_label),
                Style::default().fg(DEFAULT_THEME.muted),
            ),
            Span::styled(
                hero.class_name.clone(),
                Style::default().fg(DEFAULT_THEME.accent).add_modifier(bold),
            ),
        ]),
        Alignment::Center,
    );
    col.gap(1);
    col.text(&hero.roles, Style::default().fg(DEFAULT_THEME.faint), Alignment::Center);
    render_tagline(&hero.tagline, ctx.view.elapsed(), col);
    col.gap(1);

    render_hero_buttons(ctx, col);
    col.gap(1);

    render_avatar(hero.avatar.as_deref(), hero.level.as_deref(), col);
}

/// Tagline revealed one word at a time; hidden words keep their space so the
/// layout never shifts
fn render_tagline(tagline: &str, elapsed: Duration, col: &mut Column<'_>) {
    let lines = wrap(tagline, col.width() as usize);
    let total_words: usize = lines.iter().map(|l| l.split_whitespace().count()).sum();
    let shown = staggered(elapsed, total_words, TAGLINE_STAGGER);
    let style = Style::default().fg(DEFAULT_THEME.faint);

    let mut index = 0;
    for line in lines {
        let words: Vec<String> = line
            .split_whitespace()
            .map(|word| {
                let visible = index < shown;
                index += 1;
                if visible {
                    word.to_string()
                } else {
                    " ".repeat(word.width())
                }
            })
            .collect();
        col.line(Line::styled(words.join(" "), style), Alignment::Center);
    }
}

fn render_hero_buttons(ctx: &PageCtx<'_>, col: &mut Column<'_>) {
    let buttons: Vec<PixelButton<'_>> = HERO_BUTTONS
        .iter()
        .enumerate()
        .map(|(i, (label, section))| {
            PixelButton::new(label)
                .href(*section)
                .focused(ctx.view.is_focused(TargetId::HeroButton(i)))
        })
        .collect();

    let total: u16 = buttons.iter().map(|b| b.width()).sum::<u16>() + 2;
    if total <= col.width() {
        let row = col.full_row(BUTTON_HEIGHT);
        let mut x = row.x + (row.width - total) / 2;
        let mut placed = Vec::with_capacity(buttons.len());
        for (i, button) in buttons.into_iter().enumerate() {
            let area = Rect {
                x,
                width: button.width(),
                ..row
            };
            col.mark(TargetId::HeroButton(i), area);
            placed.push((button, area));
            x += area.width + 2;
        }
        col.block(BUTTON_HEIGHT, |buf, _| {
            for (button, area) in placed {
                button.render(area, buf);
            }
        });
    } else {
        for (i, button) in buttons.into_iter().enumerate() {
            if i > 0 {
                col.gap(1);
            }
            let width = button.width();
            let area = col.sized_area(width, BUTTON_HEIGHT, Alignment::Center);
            col.mark(TargetId::HeroButton(i), area);
            col.widget_sized(button, width, BUTTON_HEIGHT, Alignment::Center);
        }
    }
}

fn render_avatar(avatar: Option<&str>, level: Option<&str>, col: &mut Column<'_>) {
    let (width, height) = AVATAR_SIZE;
    let label = avatar
        .map(|path| {
            Path::new(path)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(path)
                .to_string()
        })
        .unwrap_or_else(|| "☺".to_string());
    let badge = level.map(|l| format!(" {l} "));

    col.widget_sized(
        AvatarFrame {
            label: &label,
            badge: badge.as_deref(),
        },
        width,
        height,
        Alignment::Center,
    );
}

struct AvatarFrame<'a> {
    label: &'a str,
    badge: Option<&'a str>,
}

impl Widget for AvatarFrame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(DEFAULT_THEME.accent))
            .style(Style::default().bg(DEFAULT_THEME.surface))
            .render(area, buf);

        let middle = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        Paragraph::new(Line::from(vec![
            Span::styled("◉ ", Style::default().fg(DEFAULT_THEME.accent)),
            Span::styled(self.label.to_string(), Style::default().fg(DEFAULT_THEME.muted)),
        ]))
        .alignment(Alignment::Center)
        .render(middle, buf);

        if let Some(badge) = self.badge {
            let w = badge.width() as u16;
            if w + 2 <= area.width && area.height > 0 {
                buf.set_string(
                    area.x + area.width - w - 1,
                    area.y + area.height - 1,
                    badge,
                    Style::default()
                        .fg(DEFAULT_THEME.on_accent)
                        .bg(DEFAULT_THEME.accent)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}

fn render_about(ctx: &PageCtx<'_>, col: &mut Column<'_>) {
    let about = &ctx.content.about;
    col.window(GameWindow::new(Some("ABOUT ME")), |col| {
        col.line(heading(&about.heading), Alignment::Left);
        col.gap(1);

        for (i, paragraph) in about.paragraphs.iter().enumerate() {
            if i > 0 {
                col.gap(1);
            }
            col.text(paragraph, Style::default().fg(DEFAULT_THEME.muted), Alignment::Left);
        }

        if let Some(quote) = &about.quote {
            col.gap(1);
            let width = col.width().saturating_sub(2) as usize;
            for line in wrap(&format!("\"{quote}\""), width) {
                col.line(
                    Line::from(vec![
                        Span::styled("▌ ", Style::default().fg(DEFAULT_THEME.accent)),
                        Span::styled(
                            line,
                            Style::default()
                                .fg(DEFAULT_THEME.muted)
                                .add_modifier(Modifier::ITALIC),
                        ),
                    ]),
                    Alignment::Left,
                );
            }
        }

        col.gap(1);
        col.line(heading("Character Stats"), Alignment::Left);
        col.gap(1);
        for stat in &about.stats {
            col.line(caption(&stat.label), Alignment::Left);
            col.text(
                &stat.value,
                Style::default().fg(DEFAULT_THEME.fg).add_modifier(Modifier::BOLD),
                Alignment::Left,
            );
        }

        if !about.quests.is_empty() {
            col.gap(1);
            col.line(heading("Main Quests"), Alignment::Left);
            for quest in &about.quests {
                let marker = if quest.done { "✓ " } else { "… " };
                col.line(
                    Line::from(vec![
                        Span::styled(marker, Style::default().fg(DEFAULT_THEME.accent)),
                        Span::styled(quest.text.clone(), Style::default().fg(DEFAULT_THEME.muted)),
                    ]),
                    Alignment::Left,
                );
            }
        }
    });
}

fn card_columns(width: u16) -> u16 {
    match width {
        w if w >= 90 => 3,
        w if w >= 56 => 2,
        _ => 1,
    }
}

fn render_projects(ctx: &PageCtx<'_>, col: &mut Column<'_>) {
    for (group_index, group) in ctx.content.project_groups.iter().enumerate() {
        if group_index > 0 {
            col.gap(1);
        }
        col.window(GameWindow::new(group.title.as_deref()), |col| {
            col.line(heading(&group.heading), Alignment::Left);
            col.gap(1);
            col.text(&group.blurb, Style::default().fg(DEFAULT_THEME.muted), Alignment::Left);
            col.gap(1);
            render_card_grid(ctx, group_index, group, col);
        });
    }
}

fn render_card_grid(ctx: &PageCtx<'_>, group_index: usize, group: &ProjectGroup, col: &mut Column<'_>) {
    let columns = card_columns(col.width());
    let card_width = (col.width() - CARD_GAP * (columns - 1)) / columns;

    for (row_index, row) in group.projects.chunks(columns as usize).enumerate() {
        if row_index > 0 {
            col.gap(1);
        }
        let cards: Vec<(TargetId, ProjectCard<'_>)> = row
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let id = TargetId::Card {
                    group: group_index,
                    index: row_index * columns as usize + i,
                };
                (id, ProjectCard::new(project).focused(ctx.view.is_focused(id)))
            })
            .collect();
        let height = cards.iter().map(|(_, c)| c.height(card_width)).max().unwrap_or(0);

        let row_area = col.full_row(height);
        for (i, (id, card)) in cards.iter().enumerate() {
            if card.is_playable() {
                let x = row_area.x + i as u16 * (card_width + CARD_GAP);
                col.mark(
                    *id,
                    Rect {
                        x,
                        width: card_width,
                        ..row_area
                    },
                );
            }
        }

        col.block(height, |buf, area| {
            for (i, (_, card)) in cards.into_iter().enumerate() {
                let x = area.x + i as u16 * (card_width + CARD_GAP);
                card.render(
                    Rect {
                        x,
                        y: area.y,
                        width: card_width,
                        height,
                    },
                    buf,
                );
            }
        });
    }
}

fn render_skills(ctx: &PageCtx<'_>, col: &mut Column<'_>) {
    let content = ctx.content;
    let fill = ctx.view.fill_fraction();

    col.window(GameWindow::new(Some("SKILLS & ABILITIES")), |col| {
        for (i, group) in content.tool_groups.iter().enumerate() {
            if i > 0 {
                col.gap(1);
            }
            col.line(heading(&group.title), Alignment::Center);
            let chips: Vec<String> = group
                .tools
                .iter()
                .map(|tool| {
                    let marker = if tool.icon.is_some() { "◆" } else { "◇" };
                    format!(" {marker} {} ", tool.name)
                })
                .collect();
            for row in flow(&chips, col.width() as usize) {
                col.line(
                    Line::styled(row.join(" "), Style::default().fg(DEFAULT_THEME.fg)),
                    Alignment::Center,
                );
            }
        }

        if !content.skills.is_empty() {
            col.gap(1);
            col.line(heading("Character Levels"), Alignment::Center);
            col.gap(1);
            for (i, skill) in content.skills.iter().enumerate() {
                if i > 0 {
                    col.gap(1);
                }
                col.widget(SkillRow::new(&skill.name, skill.level, fill), SkillRow::HEIGHT);
            }
        }
    });
}

fn link_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(DEFAULT_THEME.on_accent)
            .bg(DEFAULT_THEME.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.accent)
            .add_modifier(Modifier::UNDERLINED)
    }
}

fn render_contact(ctx: &PageCtx<'_>, col: &mut Column<'_>) {
    let contact = &ctx.content.contact;
    let view = ctx.view;

    col.window(GameWindow::new(Some("CONTACT")), |col| {
        col.line(heading(&contact.heading), Alignment::Center);
        col.text(&contact.invite, Style::default().fg(DEFAULT_THEME.muted), Alignment::Center);
        col.gap(1);

        col.line(heading("Quick Contact"), Alignment::Center);
        col.line(caption("EMAIL"), Alignment::Center);
        let email_area = col.sized_area(contact.email.width() as u16, 1, Alignment::Center);
        col.mark(TargetId::Email, email_area);
        col.block(1, |buf, _| {
            buf.set_stringn(
                email_area.x,
                email_area.y,
                &contact.email,
                email_area.width as usize,
                link_style(view.is_focused(TargetId::Email)),
            );
        });
        col.line(caption("BASED IN"), Alignment::Center);
        col.line(Line::raw(contact.based_in.clone()), Alignment::Center);

        if !contact.socials.is_empty() {
            col.gap(1);
            col.line(heading("Join My Quest"), Alignment::Center);
            let labels: Vec<String> = contact
                .socials
                .iter()
                .map(|social| format!("[ {} ]", social.name))
                .collect();
            let total = labels.iter().map(|l| l.width() as u16).sum::<u16>()
                + SOCIAL_GAP * labels.len().saturating_sub(1) as u16;
            let row = col.sized_area(total, 1, Alignment::Center);

            let mut placed = Vec::with_capacity(labels.len());
            let mut x = row.x;
            for (i, label) in labels.into_iter().enumerate() {
                let width = (label.width() as u16).min(row.right().saturating_sub(x));
                let area = Rect { x, width, ..row };
                col.mark(TargetId::Social(i), area);
                placed.push((label, area, link_style(view.is_focused(TargetId::Social(i)))));
                x = x.saturating_add(width + SOCIAL_GAP);
            }
            col.block(1, |buf, _| {
                for (label, area, style) in placed {
                    buf.set_stringn(area.x, area.y, &label, area.width as usize, style);
                }
            });
        }
    });
}

fn render_footer(ctx: &PageCtx<'_>, col: &mut Column<'_>) {
    let footer = &ctx.content.footer;
    col.line(heading(&footer.title), Alignment::Center);
    col.line(caption(&footer.subtitle), Alignment::Center);
    col.gap(1);
    col.line(
        Line::styled(footer.copyright.clone(), Style::default().fg(DEFAULT_THEME.faint)),
        Alignment::Center,
    );
    col.line(
        Line::styled(
            footer.prompt.clone(),
            Style::default()
                .fg(DEFAULT_THEME.faint)
                .add_modifier(Modifier::DIM),
        ),
        Alignment::Center,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::portfolio::PortfolioSettings;

    fn page(width: u16, viewport: u16) -> Page {
        let content = Content::builtin().unwrap();
        let view = PortfolioView::new(&content, PortfolioSettings::default());
        build_page(&content, &view, width, viewport)
    }

    #[test]
    fn test_sections_contiguous_and_ordered() {
        let page = page(100, 30);
        let mut next_start = 0;
        for section in Section::ALL {
            let rows = page.sections.get(&section).expect("section laid out");
            assert_eq!(rows.start, next_start, "{section} starts after previous");
            assert!(rows.end - rows.start >= 30, "{section} fills a viewport");
            next_start = rows.end;
        }
        assert!(page.height > next_start, "footer follows contact");
    }

    #[test]
    fn test_every_focus_target_is_placed() {
        let content = Content::builtin().unwrap();
        let view = PortfolioView::new(&content, PortfolioSettings::default());
        let page = build_page(&content, &view, 100, 30);

        for target in view.targets() {
            let area = page.targets.get(&target.id).expect("target laid out");
            let section = &page.sections[&target.section];
            assert!(section.start <= area.rows.start && area.rows.end <= section.end);
            assert!(area.columns.end <= 100);
        }

        let first = &page.targets[&TargetId::Card { group: 0, index: 0 }];
        let third = &page.targets[&TargetId::Card { group: 0, index: 2 }];
        assert_eq!(first.rows, third.rows, "three cards share a row at this width");
        assert!(first.columns.end <= third.columns.start);
    }

    #[test]
    fn test_narrow_terminal_still_lays_out() {
        let page = page(40, 20);
        assert_eq!(page.sections.len(), Section::ALL.len());
        assert_eq!(page.buffer.area.width, 40);
    }
}
