//! Section activation for the tab-switching layout.
//!
//! [`ActiveSection`] is the single owner of "which panel is showing". It only
//! changes through [`ActiveSection::select`] / [`ActiveSection::select_id`],
//! and both report whether anything actually changed so the view layer can
//! skip re-rendering (and replaying entrance animations) on repeat clicks.

use crate::sections::Section;
use tracing::debug;

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<S> {
    Changed { from: S, to: S },
    Unchanged,
}

impl<S: Copy> Transition<S> {
    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed { .. })
    }

    /// Newly activated section, if any.
    pub fn target(&self) -> Option<S> {
        match self {
            Transition::Changed { to, .. } => Some(*to),
            Transition::Unchanged => None,
        }
    }
}

/// Currently active section. Always holds a member of `S::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSection<S: Section> {
    current: S,
}

impl<S: Section> Default for ActiveSection<S> {
    fn default() -> Self {
        Self::new(S::DEFAULT)
    }
}

impl<S: Section> ActiveSection<S> {
    pub fn new(initial: S) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> S {
        self.current
    }

    pub fn is_active(&self, section: S) -> bool {
        self.current == section
    }

    pub fn select(&mut self, section: S) -> Transition<S> {
        if self.current == section {
            return Transition::Unchanged;
        }
        let from = std::mem::replace(&mut self.current, section);
        debug!(from = from.id(), to = section.id(), "section changed");
        Transition::Changed { from, to: section }
    }

    /// Select by raw id. Unknown ids fall back to `S::DEFAULT`.
    pub fn select_id(&mut self, id: &str) -> Transition<S> {
        let section = S::from_id(id).unwrap_or_else(|| {
            debug!(id, fallback = S::DEFAULT.id(), "unknown section id");
            S::DEFAULT
        });
        self.select(section)
    }
}

/// Scroll distance after which an open drawer hides itself.
pub const DRAWER_AUTO_HIDE_Y: f64 = 100.0;

/// Slide-in navigation drawer of the tab layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavDrawer {
    open: bool,
}

impl NavDrawer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the drawer and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns `true` when this scroll position closed the drawer.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        if self.open && scroll_y > DRAWER_AUTO_HIDE_Y {
            self.open = false;
            return true;
        }
        false
    }

    /// Select a section from the drawer; the drawer closes either way.
    pub fn choose<S: Section>(
        &mut self,
        active: &mut ActiveSection<S>,
        section: S,
    ) -> Transition<S> {
        self.close();
        active.select(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::StudioSection;

    #[test]
    fn starts_on_default_section() {
        let active = ActiveSection::<StudioSection>::default();
        assert_eq!(active.current(), StudioSection::Hero);
    }

    #[test]
    fn select_reports_change_once() {
        let mut active = ActiveSection::<StudioSection>::default();
        assert_eq!(
            active.select(StudioSection::Skills),
            Transition::Changed {
                from: StudioSection::Hero,
                to: StudioSection::Skills
            }
        );
        assert_eq!(active.select(StudioSection::Skills), Transition::Unchanged);
        assert!(active.is_active(StudioSection::Skills));
    }

    #[test]
    fn unknown_id_falls_back_to_default() {
        let mut active = ActiveSection::new(StudioSection::Contact);
        let transition = active.select_id("does-not-exist");
        assert_eq!(transition.target(), Some(StudioSection::Hero));
        assert_eq!(active.current(), StudioSection::Hero);

        // Already on the default: nothing to do.
        assert_eq!(active.select_id("still-missing"), Transition::Unchanged);
    }

    #[test]
    fn drawer_hides_after_scrolling_past_threshold() {
        let mut drawer = NavDrawer::default();
        assert!(drawer.toggle());
        assert!(!drawer.on_scroll(80.0));
        assert!(drawer.is_open());
        assert!(drawer.on_scroll(140.0));
        assert!(!drawer.is_open());
        assert!(!drawer.on_scroll(400.0));
    }

    #[test]
    fn choosing_from_drawer_closes_it() {
        let mut drawer = NavDrawer::default();
        let mut active = ActiveSection::<StudioSection>::default();
        drawer.toggle();

        let transition = drawer.choose(&mut active, StudioSection::Hero);
        assert_eq!(transition, Transition::Unchanged);
        assert!(!drawer.is_open());
    }
}
