use super::*;
use crate::fixture::portfolio_page;

fn setup() -> (crate::fixture::PortfolioPage, SmoothScroller, MenuController) {
    let page = portfolio_page();
    let config = UiConfig::default();
    let scroller = SmoothScroller::discover(&page.dom, &config).unwrap();
    let menu = MenuController::discover(&page.dom, &config).unwrap().unwrap();
    (page, scroller, menu)
}

// =============================================================
// fragment_id
// =============================================================

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#about"), Some("about"));
}

#[test]
fn fragment_id_rejects_bare_hash_and_non_fragments() {
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id(""), None);
    assert_eq!(fragment_id("/about"), None);
}

// =============================================================
// on_click
// =============================================================

#[test]
fn discover_collects_fragment_anchors() {
    let (page, scroller, _) = setup();
    assert_eq!(scroller.anchors(), &[page.home_link, page.about_link, page.missing_link]);
}

#[test]
fn bare_hash_prevents_default_without_scrolling() {
    let (mut page, scroller, menu) = setup();
    let mut state = ViewState::default();

    let actions = scroller.on_click(&mut page.dom, page.home_link, &mut state, Some(&menu)).unwrap();

    assert_eq!(actions, vec![Action::PreventDefault]);
}

#[test]
fn missing_target_prevents_default_without_scrolling() {
    let (mut page, scroller, menu) = setup();
    let mut state = ViewState::default();

    let actions = scroller.on_click(&mut page.dom, page.missing_link, &mut state, Some(&menu)).unwrap();

    assert_eq!(actions, vec![Action::PreventDefault]);
}

#[test]
fn target_scrolls_below_fixed_header() {
    let (mut page, scroller, menu) = setup();
    let mut state = ViewState::default();

    let actions = scroller.on_click(&mut page.dom, page.about_link, &mut state, Some(&menu)).unwrap();

    assert_eq!(actions, vec![Action::PreventDefault, Action::SmoothScrollTo { top: 820.0 }]);
}

#[test]
fn navigation_closes_open_menu() {
    let (mut page, scroller, menu) = setup();
    let mut state = ViewState::default();
    menu.toggle(&mut page.dom, &mut state).unwrap();

    scroller.on_click(&mut page.dom, page.about_link, &mut state, Some(&menu)).unwrap();

    assert!(!state.menu_open);
    assert!(!page.dom.has_class(page.nav_links, "active"));
    assert!(!page.dom.has_class(page.bars[0], "rotated"));
}

#[test]
fn missing_target_leaves_menu_open() {
    let (mut page, scroller, menu) = setup();
    let mut state = ViewState::default();
    menu.toggle(&mut page.dom, &mut state).unwrap();

    scroller.on_click(&mut page.dom, page.missing_link, &mut state, Some(&menu)).unwrap();

    assert!(state.menu_open);
    assert!(page.dom.has_class(page.nav_links, "active"));
}

#[test]
fn works_without_menu() {
    let (mut page, scroller, _) = setup();
    let mut state = ViewState::default();

    let actions = scroller.on_click(&mut page.dom, page.about_link, &mut state, None).unwrap();

    assert_eq!(actions.len(), 2);
}

#[test]
fn header_offset_follows_config() {
    let mut page = portfolio_page();
    let mut config = UiConfig::default();
    config.header_offset_px = 100.0;
    let scroller = SmoothScroller::discover(&page.dom, &config).unwrap();
    let mut state = ViewState::default();

    let actions = scroller.on_click(&mut page.dom, page.about_link, &mut state, None).unwrap();

    assert_eq!(actions[1], Action::SmoothScrollTo { top: 800.0 });
}

#[test]
fn unknown_anchor_is_ignored() {
    let (mut page, scroller, _) = setup();
    let mut state = ViewState::default();

    let actions = scroller.on_click(&mut page.dom, page.theme_toggle, &mut state, None).unwrap();

    assert!(actions.is_empty());
}
