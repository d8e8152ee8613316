//! Option selector tests

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use test_log::test;

use harvest_flow::error::HarvestError;
use harvest_flow::selector::OptionSelector;

fn farms() -> OptionSelector {
    OptionSelector::new("farm", ["farm-1", "farm-2", "farm-3"])
}

#[test]
fn test_starts_on_first_option() {
    let selector = farms();
    assert_eq!(selector.selected(), "farm-1");
    assert_eq!(selector.selected_index(), 0);
    assert_eq!(selector.len(), 3);
}

#[test]
fn test_select_known_id() {
    let mut selector = farms();
    selector.select("farm-3").unwrap();
    assert_eq!(selector.selected(), "farm-3");
    assert_eq!(selector.selected_index(), 2);
}

#[test]
fn test_unknown_id_leaves_selection_unchanged() {
    let mut selector = farms();
    selector.select("farm-2").unwrap();

    let err = selector.select("farm-9").unwrap_err();
    assert_matches!(&err, HarvestError::UnknownOption { kind, id } if kind == "farm" && id == "farm-9");
    assert_eq!(err.to_string(), "'farm-9' is not a valid farm option");
    assert_eq!(selector.selected(), "farm-2");

    assert!(selector.select_index(3).is_err());
    assert_eq!(selector.selected(), "farm-2");
}

#[test]
fn test_next_and_previous_wrap() {
    let mut selector = farms();
    selector.previous();
    assert_eq!(selector.selected(), "farm-3");
    selector.next();
    assert_eq!(selector.selected(), "farm-1");
}

#[test]
fn test_empty_selector_is_inert() {
    let mut selector = OptionSelector::new("route", Vec::<String>::new());
    selector.next();
    selector.previous();
    assert!(selector.is_empty());
    assert_eq!(selector.selected(), "");
}
