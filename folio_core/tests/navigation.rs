//! Section activation across both layouts.

use folio_core::nav::{ActiveSection, NavDrawer, Transition};
use folio_core::scroll_spy::{ScrollChrome, ScrollSpy, SectionBounds, DEFAULT_SPY_OFFSET};
use folio_core::sections::{Section, ShowcaseSection, StudioSection};
use pretty_assertions::assert_eq;

/// Lays sections out back to back, `height` px each, as seen at `scroll_y`.
fn stacked(height: f64, scroll_y: f64) -> impl FnMut(ShowcaseSection) -> Option<SectionBounds> {
    move |section| {
        let top = section.position() as f64 * height - scroll_y;
        Some(SectionBounds::new(top, top + height))
    }
}

#[test]
fn exactly_one_section_is_active_after_any_click_sequence() {
    let mut active = ActiveSection::<StudioSection>::default();
    let clicks = ["about", "about", "contact", "bogus", "skills", "hero", "coding"];
    for id in clicks {
        active.select_id(id);
        let matching = StudioSection::ALL
            .iter()
            .filter(|s| active.is_active(**s))
            .count();
        assert_eq!(matching, 1);
    }
    assert_eq!(active.current(), StudioSection::Coding);
}

#[test]
fn repeated_selection_is_a_no_op() {
    let mut active = ActiveSection::<StudioSection>::default();
    assert!(active.select(StudioSection::Articles).is_changed());
    for _ in 0..3 {
        assert_eq!(active.select(StudioSection::Articles), Transition::Unchanged);
    }
}

#[test]
fn scrolling_walks_through_sections_in_document_order() {
    let mut spy = ScrollSpy::<ShowcaseSection>::new(DEFAULT_SPY_OFFSET);
    let mut visited = vec![spy.active()];
    for step in 0..ShowcaseSection::ALL.len() {
        let scroll_y = step as f64 * 800.0;
        if let Some(section) = spy.observe(stacked(800.0, scroll_y)).target() {
            visited.push(section);
        }
    }
    assert_eq!(visited, ShowcaseSection::ALL.to_vec());
}

#[test]
fn gap_between_sections_keeps_previous() {
    let mut spy = ScrollSpy::<ShowcaseSection>::new(DEFAULT_SPY_OFFSET);
    spy.observe(stacked(600.0, 650.0));
    assert_eq!(spy.active(), ShowcaseSection::Projects);

    // Nothing straddles the offset line: e.g. a tall footer-only gap.
    let transition = spy.observe(|_| Some(SectionBounds::new(400.0, 900.0)));
    assert_eq!(transition, Transition::Unchanged);
    assert_eq!(spy.active(), ShowcaseSection::Projects);
}

#[test]
fn missing_elements_are_skipped() {
    let mut spy = ScrollSpy::<ShowcaseSection>::new(DEFAULT_SPY_OFFSET);
    let transition = spy.observe(|section| match section {
        ShowcaseSection::Home | ShowcaseSection::Projects => None,
        _ => Some(SectionBounds::new(0.0, 500.0)),
    });
    assert_eq!(transition.target(), Some(ShowcaseSection::Skills));
}

#[test]
fn drawer_and_chrome_follow_scroll_position() {
    let mut drawer = NavDrawer::default();
    drawer.toggle();
    assert!(!drawer.on_scroll(100.0));
    assert!(drawer.on_scroll(101.0));

    assert_eq!(ScrollChrome::from_scroll_y(0.0), ScrollChrome::default());
    assert_eq!(
        ScrollChrome::from_scroll_y(320.0),
        ScrollChrome {
            scrolled: true,
            back_to_top: false
        }
    );
    assert!(ScrollChrome::from_scroll_y(501.0).back_to_top);
}
