//! # folio-core
//!
//! Target-independent logic behind the folio portfolio sites.
//!
//! Everything that decides *what* the page shows lives here as plain Rust
//! state machines; the Leptos crates only wire them to signals, timers and
//! DOM events. That keeps the interesting behaviour testable with a normal
//! `cargo test` on the host.
//!
//! ## Modules
//!
//! - [`sections`] - closed section sets and their navigation items
//! - [`nav`] - tab-switch activation and the slide-in drawer
//! - [`scroll_spy`] - scroll-position activation, frame coalescing, scroll chrome
//! - [`typewriter`] - cycling typed/deleted phrases
//! - [`contact`] - form validation and submission through a [`contact::FormRelay`]
//! - [`notice`] - toasts
//! - [`profile`] - avatar lookup with a placeholder fallback
//! - [`shortcut`] - single-key global shortcut
//! - [`timer`] - pending-callback bookkeeping for teardown
//! - [`particles`] / [`orbit`] - decorative background simulations
//! - [`content`] - static content records
//! - [`config`] - embedded `site.toml`
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_core::nav::ActiveSection;
//! use folio_core::sections::{Section, StudioSection};
//!
//! let mut active = ActiveSection::<StudioSection>::default();
//! assert_eq!(active.current(), StudioSection::Hero);
//!
//! let transition = active.select_id("projects");
//! assert!(transition.is_changed());
//! assert!(active.is_active(StudioSection::Projects));
//!
//! // Unknown ids never leave the set.
//! active.select_id("nope");
//! assert_eq!(active.current(), StudioSection::DEFAULT);
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod nav;
pub mod notice;
pub mod orbit;
pub mod particles;
pub mod profile;
pub mod scroll_spy;
pub mod sections;
pub mod shortcut;
pub mod timer;
pub mod typewriter;

pub use config::{ConfigError, SiteConfig};
pub use contact::{ContactForm, FormRelay, SubmitError};
pub use nav::{ActiveSection, NavDrawer, Transition};
pub use notice::{Notice, Notify, Tone};
pub use scroll_spy::{FrameGate, ScrollChrome, ScrollSpy};
pub use sections::{Icon, NavItem, Section, ShowcaseSection, StudioSection};
pub use timer::TimerSlot;
pub use typewriter::{Typewriter, TypewriterTiming};
