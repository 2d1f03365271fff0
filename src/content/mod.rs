//! Static portfolio content
//!
//! Every record here is plain immutable data deserialized once at startup,
//! either from the document compiled into the binary or from a user-supplied
//! TOML file. Optional fields (`image`, `link`, `icon`) are legitimate
//! variants: renderers omit whatever depends on them.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::ContentError;

const BUILTIN: &str = include_str!("../../assets/content.toml");

/// The complete content set for one portfolio
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    pub brand: Brand,
    pub loading: LoadingText,
    pub start: StartText,
    pub hero: Hero,
    pub about: About,
    #[serde(default)]
    pub project_groups: Vec<ProjectGroup>,
    #[serde(default)]
    pub tool_groups: Vec<ToolGroup>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    pub contact: Contact,
    pub footer: Footer,
}

/// Logo split into a highlighted prefix and a plain suffix ("AIY" + "VAN")
#[derive(Debug, Clone, Deserialize)]
pub struct Brand {
    pub accent: String,
    pub rest: String,
}

impl Brand {
    pub fn full(&self) -> String {
        format!("{}{}", self.accent, self.rest)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadingText {
    pub heading: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartText {
    pub title: String,
    pub welcome: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub class_label: String,
    pub class_name: String,
    pub roles: String,
    pub tagline: String,
    pub avatar: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    pub quote: Option<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub quests: Vec<Quest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Quest {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

/// A titled window of project cards
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectGroup {
    pub title: Option<String>,
    pub heading: String,
    pub blurb: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// One project card
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolGroup {
    pub title: String,
    #[serde(default)]
    pub tools: Vec<Tool>,
}

/// A tool tile; `icon` is an opaque remote URL that is never fetched
#[derive(Debug, Clone, Deserialize)]
pub struct Tool {
    pub name: String,
    pub icon: Option<String>,
}

/// A labelled skill level, displayed as `LVL n/100`
#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub invite: String,
    pub email: String,
    pub based_in: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
    pub title: String,
    pub subtitle: String,
    pub copyright: String,
    pub prompt: String,
}

impl Content {
    /// The content document compiled into the binary
    pub fn builtin() -> Result<Self, ContentError> {
        Self::parse(BUILTIN)
    }

    pub fn parse(document: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(document)?)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let document = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&document)
    }

    /// All projects across groups, in display order
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.project_groups.iter().flat_map(|g| g.projects.iter())
    }
}
