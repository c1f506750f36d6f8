// Shared Leptos components for both sites

pub mod avatar;
pub mod banner;
pub mod chip;
pub mod contact_form;
pub mod glyph;
pub mod orbit;
pub mod particles;
pub mod shortcut;
pub mod skill_bar;
pub mod toast;
pub mod typewriter;

pub use avatar::ProfileAvatar;
pub use banner::ConsoleBanner;
pub use chip::CopyChip;
pub use contact_form::ContactForm;
pub use glyph::Glyph;
pub use orbit::FloatingIcon;
pub use particles::{Confetti, ParticleBackground};
pub use shortcut::ShortcutListener;
pub use skill_bar::SkillBar;
pub use toast::{Toaster, Toasts, use_toasts};
pub use typewriter::TypewriterText;
