// Site content
// Static tables rendered by the sections, in document order.

use folio_core::content::{
    Achievement, Certificate, ContactEntry, Education, Highlight, Language, Level, Project, Skill,
    SkillGroup, SocialLink, SoftSkill, Stat, StudyStatus,
};
use folio_core::sections::Icon;

pub const OWNER: &str = "Rithick M K";
pub const TAGLINE: &str = "Generative AI & ML Developer building intelligent, data-driven products";
pub const GITHUB: &str = "https://github.com/rithick-06";
pub const LINKEDIN: &str = "https://www.linkedin.com/in/rithick-m-k";
pub const EMAIL: &str = "rithick.ad22@bitsathy.ac.in";

pub static TYPEWRITER_PHRASES: [&str; 3] = [
    "Generative AI & ML Developer",
    "Computer Vision Enthusiast",
    "Full-Stack Explorer",
];

pub static TECH_CHIPS: [&str; 8] = [
    "LLMs",
    "RAG",
    "YOLOv8",
    "PyTorch",
    "TensorFlow",
    "FAISS",
    "Qt",
    "Flask",
];

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "Defect Detection for Manufacturing",
        summary: &[
            "Hybrid pipeline with EfficientNet + YOLOv8 + UNet for detection & classification in real time",
            "Unified workflow enables shop-floor quality control with high accuracy",
        ],
        thumbnail: None,
        tech: &["PyTorch", "OpenCV", "ONNX", "CUDA"],
        category: Some("CV"),
        repo: Some(GITHUB),
        demo: Some(GITHUB),
        featured: true,
    },
    Project {
        title: "Comment Toxicity Detection",
        summary: &[
            "Hybrid CNN–RNN–LSTM model; F1 = 87.59% on real-time toxic comment detection",
            "Flags hate speech, threats, and abusive language; better context on disguised toxicity",
        ],
        thumbnail: None,
        tech: &["TensorFlow/Keras", "NLTK", "spaCy", "scikit-learn"],
        category: Some("NLP"),
        repo: Some(GITHUB),
        demo: Some(GITHUB),
        featured: true,
    },
    Project {
        title: "LLAMA Chatbot with RAG",
        summary: &[
            "Flask RAG app with FAISS vector search + Hugging Face embeddings; Ollama LLM responses",
            "RetrievalQA on chunked documents for context-aware answers",
        ],
        thumbnail: None,
        tech: &["Flask", "FAISS", "Hugging Face", "Ollama"],
        category: Some("NLP"),
        repo: Some(GITHUB),
        demo: Some(GITHUB),
        featured: true,
    },
    Project {
        title: "Car Dashboard (Qt)",
        summary: &[
            "Real-time speed, fuel, and navigation; responsive Qt Widgets UI for multiple resolutions",
        ],
        thumbnail: None,
        tech: &["PyQt/Qt", "Python"],
        category: Some("Apps"),
        repo: Some(GITHUB),
        demo: Some(GITHUB),
        featured: false,
    },
];

/// Label of the secondary project button, by category.
pub fn demo_label(project: &Project) -> &'static str {
    match project.category {
        Some("CV") => "Architecture",
        Some("NLP") => "Model Card",
        _ => "Demo",
    }
}

pub static SKILL_GROUPS: [SkillGroup; 6] = [
    SkillGroup {
        title: "Languages",
        icon: None,
        badge: None,
        skills: &[Skill::new("C", 85), Skill::new("Python", 95), Skill::new("Java", 80)],
    },
    SkillGroup {
        title: "AI/ML Frameworks",
        icon: None,
        badge: None,
        skills: &[
            Skill::new("PyTorch", 90),
            Skill::new("TensorFlow/Keras", 88),
            Skill::new("Hugging Face Transformers", 85),
        ],
    },
    SkillGroup {
        title: "Libraries",
        icon: None,
        badge: None,
        skills: &[
            Skill::new("NLTK", 85),
            Skill::new("spaCy", 82),
            Skill::new("scikit-learn", 88),
            Skill::new("OpenCV", 90),
            Skill::new("FAISS", 80),
            Skill::new("Ollama LLM", 75),
        ],
    },
    SkillGroup {
        title: "Dev & Deployment",
        icon: None,
        badge: None,
        skills: &[
            Skill::new("CUDA", 80),
            Skill::new("Gradio", 85),
            Skill::new("Flask", 88),
            Skill::new("Qt Framework (PyQt)", 85),
            Skill::new("ONNX", 78),
        ],
    },
    SkillGroup {
        title: "Computer Vision Models",
        icon: None,
        badge: None,
        skills: &[
            Skill::new("YOLOv8", 90),
            Skill::new("EfficientNet", 85),
            Skill::new("UNet", 82),
            Skill::new("ResUNet", 80),
        ],
    },
    SkillGroup {
        title: "Data & Analysis",
        icon: None,
        badge: None,
        skills: &[
            Skill::new("Jupyter Notebook", 95),
            Skill::new("Power BI", 85),
            Skill::new("Excel", 88),
        ],
    },
];

pub static ACHIEVEMENTS: [Achievement; 5] = [
    Achievement {
        title: "India Skill 2024 – Bronze",
        detail: "Fabric Design & Development",
        year: "2024",
        icon: Icon::Medal,
    },
    Achievement {
        title: "IITDM National Conference – Finalist",
        detail: "Osteoporosis detection using Deep Learning",
        year: "2024",
        icon: Icon::Trophy,
    },
    Achievement {
        title: "SRM TECHSPECTRUM – Finalist",
        detail: "Comment Toxicity Detection",
        year: "2024",
        icon: Icon::Star,
    },
    Achievement {
        title: "ASET International Conference – Finalist",
        detail: "Green IT best practices",
        year: "2024",
        icon: Icon::Award,
    },
    Achievement {
        title: "Caterpillar Tech Challenge 2025 – Finalist",
        detail: "Defect Detection using CV",
        year: "2025",
        icon: Icon::Target,
    },
];

pub static ACHIEVEMENT_STATS: [Stat; 3] = [
    Stat { label: "Major Achievements", value: "5", icon: Icon::Trophy },
    Stat { label: "Conference Finals", value: "4", icon: Icon::Star },
    Stat { label: "National Medal", value: "1", icon: Icon::Medal },
];

pub static BIO: [&str; 3] = [
    "Highly motivated Generative AI & ML Developer building intelligent, data-driven solutions \
     with LLMs, diffusion models, and scalable full-stack integration.",
    "I specialize in developing end-to-end AI systems that solve real-world problems. From \
     computer vision models for manufacturing quality control to natural language processing \
     systems for content moderation, I enjoy the complete journey from research to production \
     deployment.",
    "My approach combines deep technical expertise with product thinking, ensuring that the \
     solutions I build are not only technically sound but also provide genuine value to users \
     and businesses.",
];

pub static HIGHLIGHTS: [Highlight; 6] = [
    Highlight {
        title: "AI/ML Expertise",
        description: "Deep experience with LLMs, computer vision, and neural networks",
        icon: Icon::Brain,
    },
    Highlight {
        title: "Full-Stack Integration",
        description: "Building end-to-end solutions from model training to deployment",
        icon: Icon::Code,
    },
    Highlight {
        title: "Product Thinking",
        description: "Focus on user experience and solving real-world problems",
        icon: Icon::Lightbulb,
    },
    Highlight {
        title: "Results-Driven",
        description: "Shipped multiple ML systems with measurable impact",
        icon: Icon::Target,
    },
    Highlight {
        title: "Team Collaboration",
        description: "Strong communication and leadership in technical projects",
        icon: Icon::Users,
    },
    Highlight {
        title: "Continuous Learning",
        description: "Staying updated with latest AI research and industry trends",
        icon: Icon::Newspaper,
    },
];

pub static HOBBIES: [&str; 4] = [
    "Sports for teamwork & discipline",
    "Following current affairs",
    "Technology research",
    "Open source contributions",
];

pub static EDUCATION: [Education; 3] = [
    Education {
        degree: "B.Tech – AI & Data Science",
        institution: "Bannari Amman Institute of Technology",
        grade: "CGPA 8.13",
        period: "2022 - 2026",
        status: StudyStatus::Current,
        icon: Icon::GraduationCap,
    },
    Education {
        degree: "Grade 12",
        institution: "Sri Chaitanya Techno School",
        grade: "76%",
        period: "2020 - 2022",
        status: StudyStatus::Completed,
        icon: Icon::School,
    },
    Education {
        degree: "Grade 10",
        institution: "KMC Public School (CBSE)",
        grade: "86%",
        period: "2018 - 2020",
        status: StudyStatus::Completed,
        icon: Icon::Award,
    },
];

pub static CERTIFICATES: [Certificate; 2] = [
    Certificate {
        title: "Deep Learning",
        issuer: "NVIDIA",
        description: "Comprehensive training in neural networks, CNNs, RNNs, and advanced deep \
                      learning architectures.",
        category: "AI/ML",
        skills: &["Neural Networks", "CNNs", "RNNs", "TensorFlow", "PyTorch"],
        verified: true,
        icon: Icon::Brain,
    },
    Certificate {
        title: "Power BI Data Analyst",
        issuer: "Microsoft",
        description: "Advanced data visualization, DAX formulas, and business intelligence \
                      dashboard creation.",
        category: "Data Analysis",
        skills: &["Power BI", "DAX", "Data Visualization", "Business Intelligence"],
        verified: true,
        icon: Icon::BarChart,
    },
];

pub static CERTIFICATE_STATS: [Stat; 3] = [
    Stat { label: "Professional Certificates", value: "2", icon: Icon::Award },
    Stat { label: "Primary Focus", value: "AI/ML", icon: Icon::Brain },
    Stat { label: "Verified Credentials", value: "100%", icon: Icon::BarChart },
];

pub static SOFT_SKILLS: [SoftSkill; 5] = [
    SoftSkill {
        title: "Creativity",
        description: "Innovative problem-solving and out-of-the-box thinking",
        icon: Icon::Lightbulb,
    },
    SoftSkill {
        title: "Communication",
        description: "Clear technical communication and presentation skills",
        icon: Icon::MessageSquare,
    },
    SoftSkill {
        title: "Leadership",
        description: "Project leadership and team coordination abilities",
        icon: Icon::Users,
    },
    SoftSkill {
        title: "Time Management",
        description: "Efficient project planning and deadline management",
        icon: Icon::Clock,
    },
    SoftSkill {
        title: "Honesty & Integrity",
        description: "Ethical approach to work and transparent communication",
        icon: Icon::Heart,
    },
];

pub static STRENGTHS: [(&str, Icon); 3] = [
    ("Critical Thinking", Icon::Brain),
    ("Adaptability", Icon::Zap),
    ("Problem Solving", Icon::Target),
];

pub static LANGUAGES: [Language; 3] = [
    Language {
        name: "English",
        proficiency: "Fluent",
        level: Level::new(95),
        description: "Technical communication, presentations, and documentation",
        flag: "🇺🇸",
    },
    Language {
        name: "Tamil",
        proficiency: "Fluent",
        level: Level::new(100),
        description: "Native language, cultural communication",
        flag: "🇮🇳",
    },
    Language {
        name: "Hindi",
        proficiency: "Basics",
        level: Level::new(60),
        description: "Conversational understanding and basic communication",
        flag: "🇮🇳",
    },
];

pub static COMMUNICATION: [Highlight; 3] = [
    Highlight {
        title: "Technical Writing",
        description: "Documentation, research papers, and technical blogs",
        icon: Icon::MessageSquare,
    },
    Highlight {
        title: "Cross-Cultural Communication",
        description: "Working with diverse teams and international clients",
        icon: Icon::Globe,
    },
    Highlight {
        title: "Public Speaking",
        description: "Conference presentations and technical talks",
        icon: Icon::Users,
    },
];

pub static CONTACT_INFO: [ContactEntry; 3] = [
    ContactEntry {
        label: "Email",
        value: EMAIL,
        href: Some("mailto:rithick.ad22@bitsathy.ac.in"),
        copy: Some(EMAIL),
        icon: Icon::Mail,
    },
    ContactEntry {
        label: "Phone/WhatsApp",
        value: "+91 9585224455",
        href: Some("https://wa.me/919585224455"),
        copy: Some("+91 9585224455"),
        icon: Icon::Phone,
    },
    ContactEntry {
        label: "Location",
        value: "Tirupur, Tamil Nadu",
        href: None,
        copy: None,
        icon: Icon::MapPin,
    },
];

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", url: GITHUB, icon: Icon::Github },
    SocialLink { label: "LinkedIn", url: LINKEDIN, icon: Icon::Linkedin },
    SocialLink { label: "Email", url: "mailto:rithick.ad22@bitsathy.ac.in", icon: Icon::Mail },
];

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::{ProjectFilter, all_skills};
    use pretty_assertions::assert_eq;

    #[test]
    fn project_filters_follow_categories() {
        let labels: Vec<&str> = ProjectFilter::options(&PROJECTS).iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "CV", "NLP", "Apps"]);
        assert_eq!(ProjectFilter::Category("NLP").apply(&PROJECTS).len(), 2);
    }

    #[test]
    fn demo_button_depends_on_category() {
        assert_eq!(demo_label(&PROJECTS[0]), "Architecture");
        assert_eq!(demo_label(&PROJECTS[1]), "Model Card");
        assert_eq!(demo_label(&PROJECTS[3]), "Demo");
    }

    #[test]
    fn cloud_lists_every_skill_once_per_group() {
        let total: usize = SKILL_GROUPS.iter().map(|g| g.skills.len()).sum();
        assert_eq!(all_skills(&SKILL_GROUPS).len(), total);
        assert_eq!(total, 24);
    }

    #[test]
    fn only_the_degree_is_current() {
        let current: Vec<&str> = EDUCATION
            .iter()
            .filter(|e| e.status == StudyStatus::Current)
            .map(|e| e.degree)
            .collect();
        assert_eq!(current, vec!["B.Tech – AI & Data Science"]);
    }
}
