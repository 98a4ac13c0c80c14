//! Tab routing: which section is selected, which tabs an identity may see,
//! and which page a section id actually renders.
//!
//! Unknown ids and the admin section for non-admin identities both fall back
//! to the quotes page. There is no error path; a bad id simply lands on the
//! default tab.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::session::Identity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Quotes,
    Videos,
    Calendar,
    Teacher,
    Admin,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Quotes,
        Section::Videos,
        Section::Calendar,
        Section::Teacher,
        Section::Admin,
    ];

    /// Sections every signed-in identity sees, in tab order.
    pub const PUBLIC: [Section; 4] = [
        Section::Quotes,
        Section::Videos,
        Section::Calendar,
        Section::Teacher,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Quotes => "quotes",
            Self::Videos => "videos",
            Self::Calendar => "calendar",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }

    /// Parses a section id. `gurudev` is kept as an alias of the teacher page.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "gurudev" => Some(Self::Teacher),
            _ => Self::ALL.into_iter().find(|section| section.id() == id),
        }
    }

    pub fn requires_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownSection(s.to_string()))
    }
}

fn is_admin(identity: Option<&Identity>) -> bool {
    identity.is_some_and(|identity| identity.is_admin)
}

/// Tabs offered to `identity`, in display order.
pub fn visible_sections(identity: Option<&Identity>) -> Vec<Section> {
    let mut sections = Section::PUBLIC.to_vec();
    if is_admin(identity) {
        sections.push(Section::Admin);
    }
    sections
}

/// The page to render for `section`.
pub fn resolve_section(section: Section, identity: Option<&Identity>) -> Section {
    if section.requires_admin() && !is_admin(identity) {
        Section::Quotes
    } else {
        section
    }
}

/// The page to render for a raw section id.
pub fn resolve(section_id: &str, identity: Option<&Identity>) -> Section {
    Section::from_id(section_id)
        .map(|section| resolve_section(section, identity))
        .unwrap_or(Section::Quotes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabRouter {
    active: Section,
}

impl TabRouter {
    pub fn active(&self) -> Section {
        self.active
    }

    /// Selects `section_id` if it names a section; unknown ids are ignored.
    /// Returns whether the active section changed.
    pub fn select(&mut self, section_id: &str) -> bool {
        match Section::from_id(section_id) {
            Some(section) => self.select_section(section),
            None => false,
        }
    }

    pub fn select_section(&mut self, section: Section) -> bool {
        let changed = self.active != section;
        self.active = section;
        changed
    }

    pub fn current_page(&self, identity: Option<&Identity>) -> Section {
        resolve_section(self.active, identity)
    }
}
