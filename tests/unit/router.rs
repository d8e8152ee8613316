//! Section routing tests

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use test_log::test;

use harvest_flow::error::HarvestError;
use harvest_flow::models::{Panel, Section, ViewId};
use harvest_flow::ui::ViewRouter;

#[test]
fn test_home_is_the_initial_section() {
    let router = ViewRouter::new();
    assert_eq!(router.current(), Section::Home);
    assert_eq!(router.current_view(), ViewId::Home);
}

#[test]
fn test_navigate_is_idempotent() {
    for section in Section::ALL {
        let mut once = ViewRouter::new();
        once.navigate(section);

        let mut twice = ViewRouter::new();
        twice.navigate(section);
        twice.navigate(section);

        assert_eq!(once.current_view(), twice.current_view());
        assert_eq!(once, twice);
    }
}

#[test]
fn test_every_section_maps_to_its_own_view() {
    let mut router = ViewRouter::new();
    let mut seen = Vec::new();

    for section in Section::ALL {
        router.navigate(section);
        let view = router.current_view();
        assert!(!seen.contains(&view), "{:?} is shared by two sections", view);
        seen.push(view);
    }
    assert_eq!(seen.len(), Section::ALL.len());
}

#[test]
fn test_home_composes_hero_and_features() {
    assert_eq!(ViewId::Home.panels(), &[Panel::Hero, Panel::Features]);
    for section in Section::ALL.into_iter().filter(|s| *s != Section::Home) {
        assert_eq!(section.view().panels().len(), 1, "{} should render one panel", section);
    }
}

#[test]
fn test_navigate_to_rejects_unknown_ids() {
    let mut router = ViewRouter::with_section(Section::Weather);

    assert_matches!(
        router.navigate_to("settings"),
        Err(HarvestError::InvalidSection(id)) if id == "settings"
    );
    assert_eq!(router.current(), Section::Weather);

    router.navigate_to("Dashboard").unwrap();
    assert_eq!(router.current(), Section::Dashboard);
}

#[test]
fn test_next_and_previous_wrap() {
    let mut router = ViewRouter::with_section(Section::Dashboard);
    router.next();
    assert_eq!(router.current(), Section::Home);
    router.previous();
    assert_eq!(router.current(), Section::Dashboard);
}
