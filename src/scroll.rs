//! Page sections and active-section tracking
//!
//! The tracker only sees the page through [`ViewportGeometry`], so the
//! selection rule can be exercised with hand-written rectangles.

use std::fmt;
use std::ops::Range;

use rustc_hash::FxHashMap;

/// The fixed, ordered set of page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Tracker and navigation order; earlier entries win ties.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Navigation label: the id with its first letter capitalised
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Section::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Section::ALL.get(index).copied()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// On-screen vertical extent of a section, inclusive on both ends as the
/// probe test treats it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalBounds {
    pub top: i32,
    pub bottom: i32,
}

impl VerticalBounds {
    pub fn straddles(&self, line: i32) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Capability needed by the tracker: where each section currently is, and
/// where the probe line sits
pub trait ViewportGeometry {
    fn section_bounds(&self, section: Section) -> Option<VerticalBounds>;
    fn probe_line(&self) -> i32;
}

/// Remembers the active section across scroll events
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    active: Section,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        ScrollSpy {
            active: Section::Home,
        }
    }
}

impl ScrollSpy {
    pub fn active(&self) -> Section {
        self.active
    }

    /// First section (in [`Section::ALL`] order) straddling the probe line,
    /// or `None` when no section does
    pub fn select<G: ViewportGeometry + ?Sized>(geometry: &G) -> Option<Section> {
        let probe = geometry.probe_line();
        Section::ALL.into_iter().find(|section| {
            geometry
                .section_bounds(*section)
                .is_some_and(|bounds| bounds.straddles(probe))
        })
    }

    /// Re-evaluate after a scroll. Returns the new section when it changed;
    /// keeps the previous one when nothing straddles the probe line.
    pub fn observe<G: ViewportGeometry + ?Sized>(&mut self, geometry: &G) -> Option<Section> {
        match Self::select(geometry) {
            Some(section) if section != self.active => {
                self.active = section;
                Some(section)
            }
            _ => None,
        }
    }
}

/// Row ranges of each section within the laid-out page
pub type SectionMap = FxHashMap<Section, Range<usize>>;

/// Geometry of the terminal page: section rows shifted by the scroll offset,
/// drawn below a fixed header
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry<'a> {
    pub sections: &'a SectionMap,
    pub scroll: usize,
    pub header_height: u16,
    pub probe_line: u16,
}

impl ViewportGeometry for PageGeometry<'_> {
    fn section_bounds(&self, section: Section) -> Option<VerticalBounds> {
        let rows = self.sections.get(&section)?;
        if rows.is_empty() {
            return None;
        }
        let offset = i32::from(self.header_height) - self.scroll as i32;
        Some(VerticalBounds {
            top: offset + rows.start as i32,
            bottom: offset + rows.end as i32 - 1,
        })
    }

    fn probe_line(&self) -> i32 {
        i32::from(self.probe_line)
    }
}
