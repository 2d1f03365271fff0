//! Main page state: scroll position, active section, mobile menu and focus

use std::ops::Range;
use std::time::Duration;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::anim::Tween;
use crate::content::Content;
use crate::scroll::{PageGeometry, ScrollSpy, Section, SectionMap};
use crate::timer::Throttle;

use super::Effect;

/// Hero call-to-action buttons and where they lead
pub const HERO_BUTTONS: [(&str, Section); 2] = [
    ("VIEW PROJECTS", Section::Projects),
    ("CONTACT ME", Section::Contact),
];

/// Rows occupied by the fixed navigation header
pub const HEADER_HEIGHT: u16 = 3;

#[derive(Debug, Clone)]
pub struct PortfolioSettings {
    pub probe_line: u16,
    pub scroll_throttle: Duration,
    pub fill: Duration,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        PortfolioSettings {
            probe_line: HEADER_HEIGHT + 1,
            scroll_throttle: Duration::from_millis(100),
            fill: Duration::from_millis(1000),
        }
    }
}

/// Identifies a focusable element so the renderer can highlight it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetId {
    HeroButton(usize),
    Card { group: usize, index: usize },
    Email,
    Social(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetAction {
    Navigate(Section),
    Open(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: TargetId,
    pub section: Section,
    pub action: TargetAction,
}

/// Where a target was drawn on the page, in page rows and columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetArea {
    pub rows: Range<usize>,
    pub columns: Range<u16>,
}

pub type TargetMap = FxHashMap<TargetId, TargetArea>;

/// Collapsible navigation used on narrow terminals
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
    cursor: usize,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> Section {
        Section::from_index(self.cursor).unwrap_or(Section::Home)
    }
}

pub struct PortfolioView {
    settings: PortfolioSettings,
    sections: SectionMap,
    target_areas: TargetMap,
    page_height: usize,
    viewport_height: usize,
    scroll: usize,
    spy: ScrollSpy,
    throttle: Throttle,
    menu: MobileMenu,
    targets: Vec<Target>,
    focus: Option<usize>,
    navigated: Option<Section>,
    elapsed: Duration,
}

impl PortfolioView {
    pub fn new(content: &Content, settings: PortfolioSettings) -> Self {
        let throttle = Throttle::new(settings.scroll_throttle);
        PortfolioView {
            settings,
            sections: SectionMap::default(),
            target_areas: TargetMap::default(),
            page_height: 0,
            viewport_height: 0,
            scroll: 0,
            spy: ScrollSpy::default(),
            throttle,
            menu: MobileMenu::default(),
            targets: collect_targets(content),
            focus: None,
            navigated: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn active_section(&self) -> Section {
        self.spy.active()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn max_scroll(&self) -> usize {
        self.page_height.saturating_sub(self.viewport_height)
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn sections(&self) -> &SectionMap {
        &self.sections
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn focused(&self) -> Option<&Target> {
        self.focus.and_then(|i| self.targets.get(i))
    }

    pub fn is_focused(&self, id: TargetId) -> bool {
        self.focused().is_some_and(|t| t.id == id)
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Fraction of each skill bar drawn, easing in after mount
    pub fn fill_fraction(&self) -> f64 {
        Tween::new(self.settings.fill).eased(self.elapsed)
    }

    pub fn target_areas(&self) -> &TargetMap {
        &self.target_areas
    }

    /// Record the page as last laid out by the renderer
    pub fn set_layout(
        &mut self,
        sections: SectionMap,
        target_areas: TargetMap,
        page_height: usize,
        viewport_height: usize,
    ) {
        let changed = sections != self.sections
            || page_height != self.page_height
            || viewport_height != self.viewport_height;
        self.sections = sections;
        self.target_areas = target_areas;
        self.page_height = page_height;
        self.viewport_height = viewport_height;
        self.scroll = self.scroll.min(self.max_scroll());
        if changed {
            self.throttle.request();
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta as usize)
        };
        self.set_scroll(target);
    }

    pub fn scroll_page(&mut self, pages: isize) {
        let page = self.viewport_height.max(1) as isize;
        self.scroll_by(pages.saturating_mul(page));
    }

    pub fn scroll_home(&mut self) {
        self.set_scroll(0);
    }

    pub fn scroll_end(&mut self) {
        self.set_scroll(self.max_scroll());
    }

    fn set_scroll(&mut self, row: usize) {
        let row = row.min(self.max_scroll());
        if row != self.scroll {
            self.scroll = row;
            self.throttle.request();
        }
    }

    /// Jump so `section` starts right under the header. Always closes the
    /// mobile menu.
    pub fn navigate(&mut self, section: Section) {
        self.menu.open = false;
        self.navigated = Some(section);
        if let Some(rows) = self.sections.get(&section) {
            let start = rows.start;
            self.set_scroll(start);
        }
        debug!(%section, scroll = self.scroll, "navigate");
    }

    pub fn toggle_menu(&mut self) {
        self.menu.open = !self.menu.open;
        if self.menu.open {
            self.menu.cursor = self.active_section().index();
        }
    }

    pub fn menu_move(&mut self, delta: isize) {
        if !self.menu.open {
            return;
        }
        let len = Section::ALL.len() as isize;
        self.menu.cursor = (self.menu.cursor as isize + delta).rem_euclid(len) as usize;
    }

    pub fn menu_select(&mut self) {
        if self.menu.open {
            self.navigate(self.menu.cursor());
        }
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, delta: isize) {
        if self.targets.is_empty() {
            return;
        }
        let len = self.targets.len() as isize;
        let next = match self.focus {
            Some(current) => (current as isize + delta).rem_euclid(len),
            None if delta >= 0 => 0,
            None => len - 1,
        } as usize;
        self.focus = Some(next);

        let target = &self.targets[next];
        match self.target_areas.get(&target.id) {
            Some(area) => {
                let rows = area.rows.clone();
                self.reveal(rows);
            }
            // Not laid out yet: fall back to the section start
            None => {
                let section = target.section;
                if section != self.active_section() {
                    if let Some(start) = self.sections.get(&section).map(|rows| rows.start) {
                        self.set_scroll(start);
                    }
                }
            }
        }
    }

    /// Scroll the least distance that brings `rows` into the viewport. Rows
    /// taller than the viewport are shown from their top.
    fn reveal(&mut self, rows: Range<usize>) {
        let height = self.viewport_height.max(1);
        if rows.start < self.scroll {
            self.set_scroll(rows.start);
        } else if rows.end > self.scroll + height {
            self.set_scroll(rows.end.saturating_sub(height).min(rows.start));
        }
    }

    /// Focus `id` and activate it, as a click does
    pub fn press(&mut self, id: TargetId) -> Option<Effect> {
        let index = self.targets.iter().position(|t| t.id == id)?;
        self.focus = Some(index);
        self.activate()
    }

    /// Section most recently navigated to, cleared on read
    pub fn take_navigation(&mut self) -> Option<Section> {
        self.navigated.take()
    }

    /// Activate the focused element
    pub fn activate(&mut self) -> Option<Effect> {
        let action = self.focused()?.action.clone();
        match action {
            TargetAction::Navigate(section) => {
                self.navigate(section);
                None
            }
            TargetAction::Open(url) => Some(Effect::OpenLink(url)),
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
        if self.throttle.advance(dt) {
            self.refresh_active();
        }
    }

    /// Re-run the active-section selection now, bypassing the throttle
    pub fn refresh_active(&mut self) {
        let geometry = PageGeometry {
            sections: &self.sections,
            scroll: self.scroll,
            header_height: HEADER_HEIGHT,
            probe_line: self.settings.probe_line,
        };
        if let Some(section) = self.spy.observe(&geometry) {
            debug!(%section, "active section changed");
        }
    }
}

fn collect_targets(content: &Content) -> Vec<Target> {
    let mut targets: Vec<Target> = HERO_BUTTONS
        .iter()
        .enumerate()
        .map(|(i, (_, section))| Target {
            id: TargetId::HeroButton(i),
            section: Section::Home,
            action: TargetAction::Navigate(*section),
        })
        .collect();

    for (group, projects) in content.project_groups.iter().enumerate() {
        for (index, project) in projects.projects.iter().enumerate() {
            if let Some(link) = &project.link {
                targets.push(Target {
                    id: TargetId::Card { group, index },
                    section: Section::Projects,
                    action: TargetAction::Open(link.clone()),
                });
            }
        }
    }

    targets.push(Target {
        id: TargetId::Email,
        section: Section::Contact,
        action: TargetAction::Open(content.contact.mailto()),
    });
    targets.extend(content.contact.socials.iter().enumerate().map(|(i, social)| Target {
        id: TargetId::Social(i),
        section: Section::Contact,
        action: TargetAction::Open(social.url.clone()),
    }));

    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> PortfolioView {
        let content = Content::builtin().unwrap();
        let mut view = PortfolioView::new(&content, PortfolioSettings::default());
        let mut sections = SectionMap::default();
        sections.insert(Section::Home, 0..30);
        sections.insert(Section::About, 30..60);
        sections.insert(Section::Projects, 60..120);
        sections.insert(Section::Skills, 120..150);
        sections.insert(Section::Contact, 150..180);
        view.set_layout(sections, TargetMap::default(), 190, 27);
        view
    }

    fn area(rows: Range<usize>) -> TargetArea {
        TargetArea {
            rows,
            columns: 0..40,
        }
    }

    fn settle(view: &mut PortfolioView) {
        view.advance(Duration::from_millis(500));
    }

    #[test]
    fn test_scroll_updates_active_after_throttle() {
        let mut view = view();
        settle(&mut view);
        assert_eq!(view.active_section(), Section::Home);

        view.scroll_by(40);
        assert_eq!(view.active_section(), Section::Home);
        settle(&mut view);
        assert_eq!(view.active_section(), Section::About);
    }

    #[test]
    fn test_scroll_clamped() {
        let mut view = view();
        view.scroll_by(-5);
        assert_eq!(view.scroll(), 0);
        view.scroll_end();
        assert_eq!(view.scroll(), 190 - 27);
        view.scroll_by(1000);
        assert_eq!(view.scroll(), 190 - 27);
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut view = view();
        view.toggle_menu();
        assert!(view.menu().is_open());

        view.navigate(Section::Skills);
        assert!(!view.menu().is_open());
        assert_eq!(view.scroll(), 120);
        settle(&mut view);
        assert_eq!(view.active_section(), Section::Skills);
    }

    #[test]
    fn test_menu_select_navigates() {
        let mut view = view();
        view.toggle_menu();
        view.menu_move(2);
        assert_eq!(view.menu().cursor(), Section::Projects);
        view.menu_select();
        assert!(!view.menu().is_open());
        assert_eq!(view.scroll(), 60);

        view.toggle_menu();
        view.menu_move(-4);
        settle(&mut view);
        assert_eq!(view.active_section(), Section::Projects);
    }

    #[test]
    fn test_focus_and_activate() {
        let mut view = view();
        view.focus_next();
        assert_eq!(view.focused().unwrap().id, TargetId::HeroButton(0));
        assert_eq!(view.activate(), None);
        assert_eq!(view.scroll(), 60);

        view.focus_prev();
        let last = view.focused().unwrap().clone();
        assert_eq!(last.id, TargetId::Social(2));
        assert_eq!(
            view.activate(),
            Some(Effect::OpenLink("https://twitter.com/yourprofile".to_string()))
        );
    }

    #[test]
    fn test_cards_without_link_not_focusable() {
        let view = view();
        let cards = view
            .targets()
            .iter()
            .filter(|t| matches!(t.id, TargetId::Card { .. }))
            .count();
        assert_eq!(cards, 3);
    }

    #[test]
    fn test_fill_eases_in() {
        let mut view = view();
        assert_eq!(view.fill_fraction(), 0.0);
        view.advance(Duration::from_millis(500));
        assert!(view.fill_fraction() > 0.5);
        view.advance(Duration::from_millis(600));
        assert_eq!(view.fill_fraction(), 1.0);
    }

    #[test]
    fn test_focus_scrolls_card_into_view() {
        let mut view = view();
        let mut areas = TargetMap::default();
        areas.insert(TargetId::HeroButton(0), area(10..13));
        areas.insert(TargetId::HeroButton(1), area(10..13));
        areas.insert(TargetId::Card { group: 0, index: 0 }, area(62..72));
        areas.insert(TargetId::Card { group: 0, index: 1 }, area(90..100));
        let sections = view.sections().clone();
        view.set_layout(sections, areas, 190, 27);

        view.focus_next();
        view.focus_next();
        assert_eq!(view.scroll(), 0);

        view.focus_next();
        assert_eq!(view.scroll(), 72 - 27);
        view.focus_next();
        assert_eq!(view.focused().unwrap().id, TargetId::Card { group: 0, index: 1 });
        assert_eq!(view.scroll(), 100 - 27);

        view.focus_prev();
        assert_eq!(view.scroll(), 62);
        assert_eq!(view.take_navigation(), None);
    }

    #[test]
    fn test_tall_target_shown_from_top() {
        let mut view = view();
        let mut areas = TargetMap::default();
        areas.insert(TargetId::HeroButton(0), area(40..100));
        let sections = view.sections().clone();
        view.set_layout(sections, areas, 190, 27);

        view.focus_next();
        assert_eq!(view.scroll(), 40);
    }

    #[test]
    fn test_press_focuses_and_activates() {
        let mut view = view();
        assert_eq!(view.press(TargetId::HeroButton(1)), None);
        assert_eq!(view.focused().unwrap().id, TargetId::HeroButton(1));
        assert_eq!(view.take_navigation(), Some(Section::Contact));
        assert_eq!(view.take_navigation(), None);

        assert_eq!(
            view.press(TargetId::Email),
            Some(Effect::OpenLink("mailto:charlesivanbrena@gmail.com".to_string()))
        );
        assert_eq!(view.press(TargetId::Social(9)), None);
    }
}
