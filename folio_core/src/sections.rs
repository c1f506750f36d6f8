//! Closed section sets for both portfolio sites.
//!
//! Every site owns a fixed, ordered list of sections. Each list is an enum
//! implementing [`Section`], so an "active section" can never hold a value
//! outside its set. String ids only appear at the edges (DOM element ids,
//! URL fragments) and go through [`Section::resolve`].

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Glyphs used by navigation items and content cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    User,
    Briefcase,
    Code,
    BookOpen,
    Terminal,
    Mail,
    FolderOpen,
    Trophy,
    GraduationCap,
    School,
    Award,
    Medal,
    Star,
    Target,
    Heart,
    Languages,
    Brain,
    Lightbulb,
    Users,
    Newspaper,
    Clock,
    Zap,
    Globe,
    MessageSquare,
    Phone,
    MapPin,
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Youtube,
    Download,
    Coffee,
    Database,
    Server,
    Cloud,
    BarChart,
}

impl Icon {
    /// Text glyph rendered in place of an SVG icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::User => "☺",
            Icon::Briefcase => "▣",
            Icon::Code => "</>",
            Icon::BookOpen => "❐",
            Icon::Terminal => ">_",
            Icon::Mail => "✉",
            Icon::FolderOpen => "▤",
            Icon::Trophy => "♛",
            Icon::GraduationCap => "⌬",
            Icon::School => "⌂",
            Icon::Award => "✪",
            Icon::Medal => "◎",
            Icon::Star => "★",
            Icon::Target => "◉",
            Icon::Heart => "♥",
            Icon::Languages => "文",
            Icon::Brain => "❋",
            Icon::Lightbulb => "✧",
            Icon::Users => "⚇",
            Icon::Newspaper => "▦",
            Icon::Clock => "◷",
            Icon::Zap => "ϟ",
            Icon::Globe => "◍",
            Icon::MessageSquare => "▭",
            Icon::Phone => "☏",
            Icon::MapPin => "⌖",
            Icon::Github => "gh",
            Icon::Linkedin => "in",
            Icon::Twitter => "tw",
            Icon::Instagram => "ig",
            Icon::Youtube => "yt",
            Icon::Download => "⤓",
            Icon::Coffee => "☕",
            Icon::Database => "⛁",
            Icon::Server => "▥",
            Icon::Cloud => "☁",
            Icon::BarChart => "▮",
        }
    }

    /// Accessible name for screen readers.
    pub fn aria_label(&self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::User => "user",
            Icon::Briefcase => "briefcase",
            Icon::Code => "code",
            Icon::BookOpen => "book",
            Icon::Terminal => "terminal",
            Icon::Mail => "mail",
            Icon::FolderOpen => "folder",
            Icon::Trophy => "trophy",
            Icon::GraduationCap => "graduation cap",
            Icon::School => "school",
            Icon::Award => "award",
            Icon::Medal => "medal",
            Icon::Star => "star",
            Icon::Target => "target",
            Icon::Heart => "heart",
            Icon::Languages => "languages",
            Icon::Brain => "brain",
            Icon::Lightbulb => "lightbulb",
            Icon::Users => "users",
            Icon::Newspaper => "newspaper",
            Icon::Clock => "clock",
            Icon::Zap => "zap",
            Icon::Globe => "globe",
            Icon::MessageSquare => "message",
            Icon::Phone => "phone",
            Icon::MapPin => "location",
            Icon::Github => "GitHub",
            Icon::Linkedin => "LinkedIn",
            Icon::Twitter => "Twitter",
            Icon::Instagram => "Instagram",
            Icon::Youtube => "YouTube",
            Icon::Download => "download",
            Icon::Coffee => "coffee",
            Icon::Database => "database",
            Icon::Server => "server",
            Icon::Cloud => "cloud",
            Icon::BarChart => "chart",
        }
    }
}

/// Static navigation entry derived from a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

/// A closed, ordered set of mutually exclusive content panels.
pub trait Section: Copy + Eq + Debug + Send + Sync + 'static {
    /// All sections in navigation (and document) order.
    const ALL: &'static [Self];
    /// Section shown on first load and for unknown ids.
    const DEFAULT: Self;

    /// Stable identifier, also used as the DOM element id.
    fn id(self) -> &'static str;
    fn label(self) -> &'static str;
    fn icon(self) -> Icon;

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|section| section.id() == id)
    }

    /// Like [`Section::from_id`], but unknown ids land on [`Section::DEFAULT`].
    fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or(Self::DEFAULT)
    }

    /// Zero-based position in [`Section::ALL`].
    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or_default()
    }

    fn nav_item(self) -> NavItem {
        NavItem {
            id: self.id(),
            label: self.label(),
            icon: self.icon(),
        }
    }

    fn nav_items() -> Vec<NavItem> {
        Self::ALL.iter().map(|section| section.nav_item()).collect()
    }
}

/// Sections of the tab-switching site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudioSection {
    Hero,
    About,
    Projects,
    Skills,
    Articles,
    Coding,
    Contact,
}

impl Section for StudioSection {
    const ALL: &'static [Self] = &[
        StudioSection::Hero,
        StudioSection::About,
        StudioSection::Projects,
        StudioSection::Skills,
        StudioSection::Articles,
        StudioSection::Coding,
        StudioSection::Contact,
    ];
    const DEFAULT: Self = StudioSection::Hero;

    fn id(self) -> &'static str {
        match self {
            StudioSection::Hero => "hero",
            StudioSection::About => "about",
            StudioSection::Projects => "projects",
            StudioSection::Skills => "skills",
            StudioSection::Articles => "articles",
            StudioSection::Coding => "coding",
            StudioSection::Contact => "contact",
        }
    }

    fn label(self) -> &'static str {
        match self {
            StudioSection::Hero => "Home",
            StudioSection::About => "About",
            StudioSection::Projects => "Projects",
            StudioSection::Skills => "Skills",
            StudioSection::Articles => "Articles",
            StudioSection::Coding => "Coding",
            StudioSection::Contact => "Contact",
        }
    }

    fn icon(self) -> Icon {
        match self {
            StudioSection::Hero => Icon::Home,
            StudioSection::About => Icon::User,
            StudioSection::Projects => Icon::Briefcase,
            StudioSection::Skills => Icon::Code,
            StudioSection::Articles => Icon::BookOpen,
            StudioSection::Coding => Icon::Terminal,
            StudioSection::Contact => Icon::Mail,
        }
    }
}

/// Sections of the single-page scroll-spy site, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShowcaseSection {
    Home,
    Projects,
    Skills,
    Achievements,
    About,
    Education,
    Certificates,
    SoftSkills,
    Languages,
    Contact,
}

impl Section for ShowcaseSection {
    const ALL: &'static [Self] = &[
        ShowcaseSection::Home,
        ShowcaseSection::Projects,
        ShowcaseSection::Skills,
        ShowcaseSection::Achievements,
        ShowcaseSection::About,
        ShowcaseSection::Education,
        ShowcaseSection::Certificates,
        ShowcaseSection::SoftSkills,
        ShowcaseSection::Languages,
        ShowcaseSection::Contact,
    ];
    const DEFAULT: Self = ShowcaseSection::Home;

    fn id(self) -> &'static str {
        match self {
            ShowcaseSection::Home => "home",
            ShowcaseSection::Projects => "projects",
            ShowcaseSection::Skills => "skills",
            ShowcaseSection::Achievements => "achievements",
            ShowcaseSection::About => "about",
            ShowcaseSection::Education => "education",
            ShowcaseSection::Certificates => "certificates",
            ShowcaseSection::SoftSkills => "soft-skills",
            ShowcaseSection::Languages => "languages",
            ShowcaseSection::Contact => "contact",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ShowcaseSection::Home => "Home",
            ShowcaseSection::Projects => "Projects",
            ShowcaseSection::Skills => "Skills",
            ShowcaseSection::Achievements => "Achievements",
            ShowcaseSection::About => "About",
            ShowcaseSection::Education => "Education",
            ShowcaseSection::Certificates => "Certificates",
            ShowcaseSection::SoftSkills => "Soft Skills",
            ShowcaseSection::Languages => "Languages",
            ShowcaseSection::Contact => "Contact",
        }
    }

    fn icon(self) -> Icon {
        match self {
            ShowcaseSection::Home => Icon::Home,
            ShowcaseSection::Projects => Icon::FolderOpen,
            ShowcaseSection::Skills => Icon::Code,
            ShowcaseSection::Achievements => Icon::Trophy,
            ShowcaseSection::About => Icon::User,
            ShowcaseSection::Education => Icon::GraduationCap,
            ShowcaseSection::Certificates => Icon::Award,
            ShowcaseSection::SoftSkills => Icon::Heart,
            ShowcaseSection::Languages => Icon::Languages,
            ShowcaseSection::Contact => Icon::Mail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_round_trip_through_from_id() {
        for section in StudioSection::ALL {
            assert_eq!(StudioSection::from_id(section.id()), Some(*section));
        }
        for section in ShowcaseSection::ALL {
            assert_eq!(ShowcaseSection::from_id(section.id()), Some(*section));
        }
    }

    #[test]
    fn ids_are_unique_within_a_set() {
        let studio: HashSet<_> = StudioSection::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(studio.len(), StudioSection::ALL.len());

        let showcase: HashSet<_> = ShowcaseSection::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(showcase.len(), ShowcaseSection::ALL.len());
    }

    #[test]
    fn unknown_ids_resolve_to_default() {
        assert_eq!(StudioSection::resolve("blog"), StudioSection::Hero);
        assert_eq!(StudioSection::resolve(""), StudioSection::Hero);
        assert_eq!(ShowcaseSection::resolve("HOME"), ShowcaseSection::Home);
    }

    #[test]
    fn showcase_has_ten_sections_in_document_order() {
        assert_eq!(ShowcaseSection::ALL.len(), 10);
        assert_eq!(ShowcaseSection::SoftSkills.id(), "soft-skills");
        assert_eq!(ShowcaseSection::Contact.position(), 9);
    }

    #[test]
    fn nav_items_mirror_sections() {
        let items = StudioSection::nav_items();
        assert_eq!(items.len(), 7);
        assert_eq!(items[4].id, "articles");
        assert_eq!(items[4].label, "Articles");
        assert_eq!(items[4].icon, Icon::BookOpen);
    }

    #[test]
    fn section_serde_uses_kebab_ids() {
        let json = serde_json::to_string(&ShowcaseSection::SoftSkills).unwrap();
        assert_eq!(json, "\"soft-skills\"");
        let parsed: StudioSection = serde_json::from_str("\"coding\"").unwrap();
        assert_eq!(parsed, StudioSection::Coding);
    }
}
