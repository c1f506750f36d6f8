// Showcase sections, in document order, plus page chrome

mod about;
mod achievements;
mod backdrop;
mod certificates;
mod contact;
mod education;
mod footer;
mod home;
mod languages;
mod projects;
mod sidebar;
mod skills;
mod soft_skills;
mod widgets;

pub use about::About;
pub use achievements::Achievements;
pub use backdrop::BackgroundBlobs;
pub use certificates::Certificates;
pub use contact::Contact;
pub use education::Education;
pub use footer::Footer;
pub use home::Home;
pub use languages::Languages;
pub use projects::Projects;
pub use sidebar::{BackToTop, Sidebar};
pub use skills::Skills;
pub use soft_skills::SoftSkills;
