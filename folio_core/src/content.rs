//! Static content records shared by both sites.
//!
//! All records borrow `'static` data so each site can declare its content as
//! plain `const`/`static` tables. Nothing here is mutated at runtime.

use crate::orbit::IconKind;
use crate::sections::Icon;
use serde::Serialize;

/// Proficiency percentage, clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Level(u8);

impl Level {
    pub const fn new(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    pub const fn value(&self) -> u8 {
        self.0
    }

    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Bar width for inline styles, e.g. `"95%"`.
    pub fn width_css(&self) -> String {
        format!("{}%", self.0)
    }
}

/// Records that may be promoted to a "featured" block.
pub trait Featured {
    fn is_featured(&self) -> bool;
}

/// Split into (featured, rest), preserving order in both halves.
pub fn partition_featured<T: Featured>(items: &[T]) -> (Vec<&T>, Vec<&T>) {
    items.iter().partition(|item| item.is_featured())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    /// One or more description paragraphs / bullets.
    pub summary: &'static [&'static str],
    /// Emoji thumbnail.
    pub thumbnail: Option<&'static str>,
    pub tech: &'static [&'static str],
    pub category: Option<&'static str>,
    pub repo: Option<&'static str>,
    pub demo: Option<&'static str>,
    pub featured: bool,
}

impl Project {
    pub fn demo_label(&self) -> &'static str {
        if self.demo.is_some() { "Live Demo" } else { "Coming Soon" }
    }
}

impl Featured for Project {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

/// Project grid filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(&'static str),
}

impl ProjectFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Category(name) => name,
        }
    }

    /// `All` followed by each distinct category in first-seen order.
    pub fn options(projects: &[Project]) -> Vec<ProjectFilter> {
        let mut options = vec![ProjectFilter::All];
        for category in projects.iter().filter_map(|p| p.category) {
            let option = ProjectFilter::Category(category);
            if !options.contains(&option) {
                options.push(option);
            }
        }
        options
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(name) => project.category == Some(*name),
        }
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar date without time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub fn iso(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Long US form, e.g. "January 15, 2024". Out-of-range months fall back
    /// to [`Date::iso`].
    pub fn long_label(&self) -> String {
        match MONTHS.get(usize::from(self.month).wrapping_sub(1)) {
            Some(month) => format!("{month} {}, {}", self.day, self.year),
            None => self.iso(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub published: Date,
    pub read_minutes: u16,
    pub tags: &'static [&'static str],
    pub url: Option<&'static str>,
    pub featured: bool,
}

impl Article {
    pub fn published_label(&self) -> String {
        self.published.long_label()
    }

    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_minutes)
    }
}

impl Featured for Article {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: Level,
}

impl Skill {
    pub const fn new(name: &'static str, level: u8) -> Self {
        Self {
            name,
            level: Level::new(level),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: Option<Icon>,
    /// Decorative badge floating next to the group, if any.
    pub badge: Option<IconKind>,
    pub skills: &'static [Skill],
}

impl SkillGroup {
    /// Rounded mean level; zero for an empty group.
    pub fn average(&self) -> Level {
        if self.skills.is_empty() {
            return Level::default();
        }
        let total: u32 = self.skills.iter().map(|s| u32::from(s.level.value())).sum();
        let count = self.skills.len() as u32;
        Level::new(((total + count / 2) / count) as u8)
    }
}

/// Every skill name across groups, in display order.
pub fn all_skills(groups: &[SkillGroup]) -> Vec<&'static Skill> {
    groups
        .iter()
        .flat_map(|group| {
            let skills: &'static [Skill] = group.skills;
            skills.iter()
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkillView {
    #[default]
    Grid,
    Cloud,
}

impl SkillView {
    pub fn toggled(&self) -> Self {
        match self {
            SkillView::Grid => SkillView::Cloud,
            SkillView::Cloud => SkillView::Grid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillView::Grid => "Grid View",
            SkillView::Cloud => "Tag Cloud",
        }
    }
}

const CLOUD_MIN_REM: f64 = 0.875;
const CLOUD_SPAN_REM: f64 = 0.75;

/// Font size of a skill chip in cloud view; stronger skills print larger.
pub fn cloud_font_size(level: Level) -> String {
    format!("{:.3}rem", CLOUD_MIN_REM + CLOUD_SPAN_REM * level.fraction())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub detail: &'static str,
    pub year: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub skills: &'static [&'static str],
    pub verified: bool,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StudyStatus {
    Current,
    Completed,
}

impl StudyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StudyStatus::Current => "Current",
            StudyStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub grade: &'static str,
    pub period: &'static str,
    pub status: StudyStatus,
    pub icon: Icon,
}

/// Titled blurb with an icon. Used for soft skills, highlights and
/// communication strengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub type SoftSkill = Highlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub name: &'static str,
    pub proficiency: &'static str,
    pub level: Level,
    pub description: &'static str,
    pub flag: &'static str,
}

/// One line of the contact card. `copy` is the text put on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactEntry {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub copy: Option<&'static str>,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodingProfile {
    pub platform: &'static str,
    pub username: &'static str,
    pub rating: &'static str,
    pub solved: &'static str,
    pub badge: &'static str,
    pub url: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const fn project(title: &'static str, category: Option<&'static str>, featured: bool) -> Project {
        Project {
            title,
            summary: &[],
            thumbnail: None,
            tech: &[],
            category,
            repo: None,
            demo: None,
            featured,
        }
    }

    const PROJECTS: [Project; 4] = [
        project("defects", Some("CV"), true),
        project("toxicity", Some("NLP"), true),
        project("rag", Some("NLP"), false),
        project("dashboard", Some("Apps"), false),
    ];

    #[test]
    fn level_clamps() {
        assert_eq!(Level::new(250).value(), 100);
        assert_eq!(Level::new(95).width_css(), "95%");
    }

    #[test]
    fn filter_options_in_first_seen_order() {
        let labels: Vec<&str> = ProjectFilter::options(&PROJECTS)
            .iter()
            .map(|f| f.label())
            .collect();
        assert_eq!(labels, vec!["All", "CV", "NLP", "Apps"]);
    }

    #[test]
    fn filter_selects_category() {
        let titles: Vec<&str> = ProjectFilter::Category("NLP")
            .apply(&PROJECTS)
            .iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["toxicity", "rag"]);
        assert_eq!(ProjectFilter::All.apply(&PROJECTS).len(), 4);
        assert!(ProjectFilter::Category("Games").apply(&PROJECTS).is_empty());
    }

    #[test]
    fn featured_partition_keeps_order() {
        let (featured, rest) = partition_featured(&PROJECTS);
        assert_eq!(featured.iter().map(|p| p.title).collect::<Vec<_>>(), vec!["defects", "toxicity"]);
        assert_eq!(rest.len(), 2);
    }

    #[test]
    fn dates_render_long_form() {
        assert_eq!(Date::new(2024, 1, 15).long_label(), "January 15, 2024");
        assert_eq!(Date::new(2023, 12, 20).long_label(), "December 20, 2023");
        assert_eq!(Date::new(2023, 13, 1).long_label(), "2023-13-01");
        assert_eq!(Date::new(2023, 0, 1).long_label(), "2023-00-01");
    }

    #[test]
    fn group_average_rounds() {
        const SKILLS: [Skill; 3] = [Skill::new("C", 85), Skill::new("Python", 95), Skill::new("Java", 80)];
        let group = SkillGroup {
            title: "Languages",
            icon: None,
            badge: None,
            skills: &SKILLS,
        };
        assert_eq!(group.average().value(), 87);
        assert_eq!(all_skills(&[group]).len(), 3);
    }

    #[test]
    fn cloud_size_grows_with_level() {
        assert_eq!(cloud_font_size(Level::new(0)), "0.875rem");
        assert_eq!(cloud_font_size(Level::new(100)), "1.625rem");
        assert_eq!(SkillView::Grid.toggled(), SkillView::Cloud);
    }
}
