// Studio panels, one per StudioSection

mod about;
mod articles;
mod coding;
mod contact;
mod hero;
mod layout;
mod projects;
mod skills;

pub use about::About;
pub use articles::Articles;
pub use coding::Coding;
pub use contact::Contact;
pub use hero::Hero;
pub use layout::Layout;
pub use projects::Projects;
pub use skills::Skills;
