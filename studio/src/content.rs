// Site content
// Everything the sections render, as static tables.

use folio_core::content::{
    Article, CodingProfile, ContactEntry, Date, Project, Skill, SkillGroup, SocialLink, Stat,
};
use folio_core::orbit::IconKind;
use folio_core::sections::Icon;

pub const OWNER: &str = "John Doe";
pub const ROLE: &str = "Full Stack Developer & UI/UX Designer";

pub static BIO: [&str; 3] = [
    "Hello! I'm John, a full-stack developer based in San Francisco. I enjoy creating things \
     that live on the internet, whether that be websites, applications, or anything in between.",
    "My interest in web development started back in 2018 when I decided to try editing custom \
     Tumblr themes. Hacking together a custom reblog button taught me a lot about HTML & CSS!",
    "Today I've had the privilege of working at an advertising agency, a start-up, a huge \
     corporation, and a student-led design studio. My main focus these days is building \
     accessible, inclusive products and digital experiences for a variety of clients.",
];

pub static STATS: [Stat; 4] = [
    Stat { label: "Years Experience", value: "5+", icon: Icon::Award },
    Stat { label: "Projects Completed", value: "50+", icon: Icon::Users },
    Stat { label: "Cups of Coffee", value: "1000+", icon: Icon::Coffee },
    Stat { label: "Happy Clients", value: "30+", icon: Icon::Star },
];

pub static HERO_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", url: "#", icon: Icon::Github },
    SocialLink { label: "LinkedIn", url: "#", icon: Icon::Linkedin },
    SocialLink { label: "Resume", url: "#", icon: Icon::Download },
];

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "E-Commerce Platform",
        summary: &["A full-stack e-commerce solution with React, Node.js, and PostgreSQL. Features \
                    include user authentication, payment processing, and admin dashboard."],
        thumbnail: Some("🛍️"),
        tech: &["React", "Node.js", "PostgreSQL", "Stripe", "Tailwind CSS"],
        category: None,
        repo: Some("#"),
        demo: Some("#"),
        featured: true,
    },
    Project {
        title: "Task Management App",
        summary: &["A collaborative task management application with real-time updates, \
                    drag-and-drop functionality, and team collaboration features."],
        thumbnail: Some("📋"),
        tech: &["Vue.js", "Firebase", "Socket.io", "Vuex"],
        category: None,
        repo: Some("#"),
        demo: Some("#"),
        featured: false,
    },
    Project {
        title: "Weather Dashboard",
        summary: &["A responsive weather application that displays current conditions and \
                    forecasts using OpenWeatherMap API with beautiful data visualizations."],
        thumbnail: Some("🌤️"),
        tech: &["React", "Chart.js", "OpenWeather API", "CSS Grid"],
        category: None,
        repo: Some("#"),
        demo: Some("#"),
        featured: false,
    },
    Project {
        title: "Social Media Analytics",
        summary: &["Analytics dashboard for social media metrics with real-time data processing \
                    and interactive charts."],
        thumbnail: Some("📊"),
        tech: &["Next.js", "D3.js", "MongoDB", "Express"],
        category: None,
        repo: Some("#"),
        demo: Some("#"),
        featured: true,
    },
    Project {
        title: "Portfolio Website",
        summary: &["A modern portfolio website with 3D animations, particle effects, and smooth \
                    transitions."],
        thumbnail: Some("🎨"),
        tech: &["Rust", "Leptos", "Canvas", "CSS"],
        category: None,
        repo: Some("#"),
        demo: Some("#"),
        featured: false,
    },
    Project {
        title: "Learning Management System",
        summary: &["A comprehensive LMS with course creation, student progress tracking, and \
                    interactive learning modules."],
        thumbnail: Some("🎓"),
        tech: &["Angular", "NestJS", "MySQL", "TypeScript"],
        category: None,
        repo: Some("#"),
        demo: Some("#"),
        featured: false,
    },
];

pub static SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        title: "Frontend",
        icon: Some(Icon::Code),
        badge: Some(IconKind::React),
        skills: &[
            Skill::new("React/Next.js", 95),
            Skill::new("TypeScript", 90),
            Skill::new("Tailwind CSS", 92),
            Skill::new("Three.js", 85),
            Skill::new("Framer Motion", 88),
        ],
    },
    SkillGroup {
        title: "Backend",
        icon: Some(Icon::Server),
        badge: Some(IconKind::Node),
        skills: &[
            Skill::new("Node.js", 90),
            Skill::new("Python", 85),
            Skill::new("GraphQL", 80),
            Skill::new("REST APIs", 92),
            Skill::new("Microservices", 78),
        ],
    },
    SkillGroup {
        title: "Database",
        icon: Some(Icon::Database),
        badge: None,
        skills: &[
            Skill::new("PostgreSQL", 88),
            Skill::new("MongoDB", 85),
            Skill::new("Redis", 80),
            Skill::new("Prisma", 87),
        ],
    },
    SkillGroup {
        title: "DevOps & Cloud",
        icon: Some(Icon::Cloud),
        badge: None,
        skills: &[
            Skill::new("AWS", 82),
            Skill::new("Docker", 85),
            Skill::new("Kubernetes", 75),
            Skill::new("CI/CD", 88),
        ],
    },
];

pub static ARTICLES: [Article; 6] = [
    Article {
        title: "Building Interactive 3D Experiences with Three.js and React",
        excerpt: "A comprehensive guide to creating immersive 3D web experiences using Three.js \
                  with React. Learn about geometry, materials, lighting, and animations.",
        published: Date::new(2024, 1, 15),
        read_minutes: 8,
        tags: &["Three.js", "React", "3D", "WebGL"],
        url: Some("#"),
        featured: true,
    },
    Article {
        title: "Advanced Animation Techniques with Framer Motion",
        excerpt: "Explore advanced animation patterns, gesture handling, and performance \
                  optimization techniques for creating smooth, engaging user interfaces.",
        published: Date::new(2024, 1, 8),
        read_minutes: 12,
        tags: &["Framer Motion", "Animation", "React", "UX"],
        url: Some("#"),
        featured: true,
    },
    Article {
        title: "Building Scalable React Applications with TypeScript",
        excerpt: "Best practices for structuring large React applications with TypeScript, \
                  including type safety, code organization, and testing strategies.",
        published: Date::new(2023, 12, 20),
        read_minutes: 15,
        tags: &["React", "TypeScript", "Architecture", "Best Practices"],
        url: Some("#"),
        featured: false,
    },
    Article {
        title: "Modern CSS Techniques for Dynamic Layouts",
        excerpt: "Discover CSS Grid, Flexbox, and custom properties to create responsive, \
                  maintainable layouts that adapt to any screen size.",
        published: Date::new(2023, 12, 12),
        read_minutes: 10,
        tags: &["CSS", "Layout", "Responsive Design", "Grid"],
        url: Some("#"),
        featured: false,
    },
    Article {
        title: "Performance Optimization in Next.js Applications",
        excerpt: "Learn about image optimization, code splitting, caching strategies, and Core \
                  Web Vitals to build lightning-fast Next.js applications.",
        published: Date::new(2023, 11, 28),
        read_minutes: 14,
        tags: &["Next.js", "Performance", "Optimization", "SEO"],
        url: Some("#"),
        featured: false,
    },
    Article {
        title: "Creating Beautiful Particle Systems for Web",
        excerpt: "Step-by-step guide to implementing interactive particle systems using Canvas \
                  API and WebGL for stunning visual effects.",
        published: Date::new(2023, 11, 15),
        read_minutes: 11,
        tags: &["Canvas", "WebGL", "Particles", "Animation"],
        url: Some("#"),
        featured: false,
    },
];

pub static CODING_PROFILES: [CodingProfile; 3] = [
    CodingProfile {
        platform: "LeetCode",
        username: "johndoe",
        rating: "2150",
        solved: "450+",
        badge: "💻",
        url: "#",
    },
    CodingProfile {
        platform: "HackerRank",
        username: "john_doe",
        rating: "5 Star",
        solved: "200+",
        badge: "🏆",
        url: "#",
    },
    CodingProfile {
        platform: "CodeForces",
        username: "johndoe123",
        rating: "1850",
        solved: "300+",
        badge: "⭐",
        url: "#",
    },
];

pub static CONTACT_INFO: [ContactEntry; 3] = [
    ContactEntry {
        label: "Email",
        value: "john.doe@example.com",
        href: Some("mailto:john.doe@example.com"),
        copy: Some("john.doe@example.com"),
        icon: Icon::Mail,
    },
    ContactEntry {
        label: "Phone",
        value: "+1 (555) 123-4567",
        href: Some("tel:+15551234567"),
        copy: Some("+15551234567"),
        icon: Icon::Phone,
    },
    ContactEntry {
        label: "Location",
        value: "San Francisco, CA",
        href: None,
        copy: None,
        icon: Icon::MapPin,
    },
];

pub static SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink { label: "GitHub", url: "https://github.com", icon: Icon::Github },
    SocialLink { label: "LinkedIn", url: "https://linkedin.com", icon: Icon::Linkedin },
    SocialLink { label: "Twitter", url: "https://twitter.com", icon: Icon::Twitter },
    SocialLink { label: "Instagram", url: "https://instagram.com", icon: Icon::Instagram },
    SocialLink { label: "YouTube", url: "https://youtube.com", icon: Icon::Youtube },
];

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::partition_featured;
    use pretty_assertions::assert_eq;

    #[test]
    fn featured_projects_are_first_and_fourth() {
        let (featured, rest) = partition_featured(&PROJECTS);
        let titles: Vec<&str> = featured.iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["E-Commerce Platform", "Social Media Analytics"]);
        assert_eq!(rest.len(), 4);
    }

    #[test]
    fn articles_newest_first() {
        assert!(ARTICLES.windows(2).all(|w| w[0].published >= w[1].published));
        assert_eq!(ARTICLES[0].published_label(), "January 15, 2024");
        assert_eq!(ARTICLES[2].read_time_label(), "15 min read");
    }
}
