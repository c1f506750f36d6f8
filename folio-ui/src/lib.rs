//! # folio-ui
//!
//! Leptos 0.8 CSR building blocks shared by the folio sites.
//!
//! The state machines live in [`folio_core`]; this crate binds them to the
//! browser:
//!
//! - [`telemetry`] - `tracing` subscriber writing to the devtools console
//! - [`browser`] - scroll, clipboard, viewport and focus helpers
//! - [`relay`] - `fetch` implementation of [`folio_core::contact::FormRelay`]
//!   and the avatar lookup
//! - [`animation`] - owner-scoped `requestAnimationFrame` loop
//! - [`components`] - particle and confetti canvases, floating badges,
//!   typewriter, toasts, contact form, skill bars, keyboard shortcut
//! - [`styles`] - base stylesheet
//!
//! ## Mounting
//!
//! ```rust,ignore
//! use folio_ui::components::Toaster;
//! use leptos::prelude::*;
//!
//! folio_ui::telemetry::init(tracing::Level::INFO);
//! leptos::mount::mount_to_body(|| view! { <Toaster><App/></Toaster> });
//! ```

pub mod animation;
pub mod browser;
pub mod components;
pub mod relay;
pub mod styles;
pub mod telemetry;
