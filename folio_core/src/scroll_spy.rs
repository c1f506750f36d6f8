//! Scroll-position driven section tracking.
//!
//! The browser side measures each section element and hands the rectangles
//! to [`ScrollSpy::observe`] through a probe closure. Measurement is
//! coalesced through [`FrameGate`] so a burst of scroll events costs at most
//! one scan per animation frame.

use crate::nav::{ActiveSection, Transition};
use crate::sections::Section;

/// Viewport line (px from the top) a section must straddle to become active.
pub const DEFAULT_SPY_OFFSET: f64 = 100.0;
/// Scroll distance after which the sidebar gets its elevated look.
pub const SCROLLED_AFTER: f64 = 50.0;
/// Scroll distance after which the back-to-top button appears.
pub const BACK_TO_TOP_AFTER: f64 = 500.0;

/// Viewport-relative vertical extent of a section element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// `true` when the horizontal line at `y` crosses this section.
    pub fn straddles(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Tracks the section under the spy offset.
#[derive(Debug, Clone, Copy)]
pub struct ScrollSpy<S: Section> {
    active: ActiveSection<S>,
    offset: f64,
}

impl<S: Section> Default for ScrollSpy<S> {
    fn default() -> Self {
        Self::new(DEFAULT_SPY_OFFSET)
    }
}

impl<S: Section> ScrollSpy<S> {
    pub fn new(offset: f64) -> Self {
        Self {
            active: ActiveSection::default(),
            offset,
        }
    }

    pub fn active(&self) -> S {
        self.active.current()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Scan sections in order and activate the first one straddling the
    /// offset line. Sections the probe cannot measure are skipped. When
    /// nothing qualifies the previous section stays active.
    pub fn observe<F>(&mut self, mut probe: F) -> Transition<S>
    where
        F: FnMut(S) -> Option<SectionBounds>,
    {
        let hit = S::ALL
            .iter()
            .copied()
            .find(|&section| probe(section).is_some_and(|b| b.straddles(self.offset)));

        match hit {
            Some(section) => self.active.select(section),
            None => Transition::Unchanged,
        }
    }
}

/// Presentation flags derived from the raw scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollChrome {
    pub scrolled: bool,
    pub back_to_top: bool,
}

impl ScrollChrome {
    pub fn from_scroll_y(scroll_y: f64) -> Self {
        Self {
            scrolled: scroll_y > SCROLLED_AFTER,
            back_to_top: scroll_y > BACK_TO_TOP_AFTER,
        }
    }
}

/// Coalesces high-frequency events into one unit of work per frame.
///
/// ```
/// use folio_core::scroll_spy::FrameGate;
///
/// let mut gate = FrameGate::default();
/// assert!(gate.request());   // first scroll event: schedule a frame
/// assert!(!gate.request());  // more events before the frame: ignored
/// gate.complete();           // frame ran
/// assert!(gate.request());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` if the caller must schedule a frame.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::ShowcaseSection;

    /// Lay sections out back to back, `height` px each, scrolled by `scroll_y`.
    fn stacked(height: f64, scroll_y: f64) -> impl FnMut(ShowcaseSection) -> Option<SectionBounds> {
        move |section| {
            let top = section.position() as f64 * height - scroll_y;
            Some(SectionBounds::new(top, top + height))
        }
    }

    #[test]
    fn top_of_page_keeps_home() {
        let mut spy = ScrollSpy::<ShowcaseSection>::default();
        assert_eq!(spy.observe(stacked(800.0, 0.0)), Transition::Unchanged);
        assert_eq!(spy.active(), ShowcaseSection::Home);
    }

    #[test]
    fn section_crossing_offset_becomes_active() {
        let mut spy = ScrollSpy::<ShowcaseSection>::default();
        // Skills spans 1600..2400; scrolled to 1550 its top sits at 50px.
        let transition = spy.observe(stacked(800.0, 1550.0));
        assert_eq!(transition.target(), Some(ShowcaseSection::Skills));
    }

    #[test]
    fn first_match_wins_on_shared_boundary() {
        let mut spy = ScrollSpy::<ShowcaseSection>::default();
        // Projects ends and Skills starts exactly on the offset line.
        spy.observe(stacked(800.0, 1500.0));
        assert_eq!(spy.active(), ShowcaseSection::Projects);
    }

    #[test]
    fn gap_retains_previous_section() {
        let mut spy = ScrollSpy::<ShowcaseSection>::default();
        spy.observe(stacked(800.0, 900.0));
        assert_eq!(spy.active(), ShowcaseSection::Projects);

        let nothing = spy.observe(|_| Some(SectionBounds::new(400.0, 900.0)));
        assert_eq!(nothing, Transition::Unchanged);
        assert_eq!(spy.active(), ShowcaseSection::Projects);
    }

    #[test]
    fn missing_elements_are_skipped() {
        let mut spy = ScrollSpy::<ShowcaseSection>::default();
        let transition = spy.observe(|section| match section {
            ShowcaseSection::Contact => Some(SectionBounds::new(-20.0, 600.0)),
            _ => None,
        });
        assert_eq!(transition.target(), Some(ShowcaseSection::Contact));
    }

    #[test]
    fn custom_offset_is_honoured() {
        let mut spy = ScrollSpy::<ShowcaseSection>::new(300.0);
        spy.observe(|section| match section {
            ShowcaseSection::About => Some(SectionBounds::new(250.0, 900.0)),
            ShowcaseSection::Skills => Some(SectionBounds::new(-300.0, 250.0)),
            _ => None,
        });
        assert_eq!(spy.active(), ShowcaseSection::About);
    }

    #[test]
    fn chrome_thresholds() {
        assert_eq!(ScrollChrome::from_scroll_y(0.0), ScrollChrome::default());
        let mid = ScrollChrome::from_scroll_y(120.0);
        assert!(mid.scrolled && !mid.back_to_top);
        let deep = ScrollChrome::from_scroll_y(501.0);
        assert!(deep.scrolled && deep.back_to_top);
    }

    #[test]
    fn frame_gate_coalesces_requests() {
        let mut gate = FrameGate::default();
        let scheduled = (0..25).filter(|_| gate.request()).count();
        assert_eq!(scheduled, 1);
        assert!(gate.is_pending());
        gate.complete();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }
}
