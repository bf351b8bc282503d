use super::*;
use crate::dom::MemoryDom;
use crate::fixture::portfolio_page;

fn at(scroll_y: f64) -> Viewport {
    Viewport { scroll_y, height: 800.0 }
}

fn revealed(dom: &MemoryDom, cards: &[NodeId]) -> Vec<bool> {
    cards.iter().map(|c| dom.has_class(*c, "animate-in")).collect()
}

// =============================================================
// Navbar
// =============================================================

#[test]
fn navbar_scrolled_only_past_threshold() {
    let mut page = portfolio_page();
    let effects = ScrollEffects::discover(&page.dom, &UiConfig::default()).unwrap();

    effects.on_scroll(&mut page.dom, at(50.0)).unwrap();
    assert!(!page.dom.has_class(page.navbar, "scrolled"));

    effects.on_scroll(&mut page.dom, at(50.5)).unwrap();
    assert!(page.dom.has_class(page.navbar, "scrolled"));
}

#[test]
fn navbar_class_removed_when_back_at_top() {
    let mut page = portfolio_page();
    let effects = ScrollEffects::discover(&page.dom, &UiConfig::default()).unwrap();

    effects.on_scroll(&mut page.dom, at(300.0)).unwrap();
    effects.on_scroll(&mut page.dom, at(0.0)).unwrap();

    assert!(!page.dom.has_class(page.navbar, "scrolled"));
}

#[test]
fn missing_navbar_still_reveals() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let card = dom.create(body, "div", &["project-card"]);
    dom.set_layout(card, 100.0, 100.0);
    let effects = ScrollEffects::discover(&dom, &UiConfig::default()).unwrap();

    assert_eq!(effects.navbar(), None);
    effects.on_scroll(&mut dom, at(10.0)).unwrap();
    assert!(dom.has_class(card, "animate-in"));
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn load_reveals_elements_above_line() {
    let mut page = portfolio_page();
    let mut effects = ScrollEffects::discover(&page.dom, &UiConfig::default()).unwrap();

    effects.on_load(&mut page.dom, at(0.0)).unwrap();

    // 800 / 1.2 = 666.67; only the card at 400 is above the line.
    assert_eq!(revealed(&page.dom, &page.cards), vec![true, false, false, false, false]);
}

#[test]
fn scrolling_reveals_more_and_never_reverts() {
    let mut page = portfolio_page();
    let mut effects = ScrollEffects::discover(&page.dom, &UiConfig::default()).unwrap();
    effects.on_load(&mut page.dom, at(0.0)).unwrap();

    for card in &page.cards {
        let offset = page.dom.offset_top(*card);
        page.dom.set_layout(*card, offset, offset - 700.0);
    }
    effects.on_scroll(&mut page.dom, at(700.0)).unwrap();
    assert_eq!(revealed(&page.dom, &page.cards), vec![true, true, true, true, false]);

    for card in &page.cards {
        let offset = page.dom.offset_top(*card);
        page.dom.set_layout(*card, offset, offset);
    }
    effects.on_scroll(&mut page.dom, at(0.0)).unwrap();
    assert_eq!(revealed(&page.dom, &page.cards), vec![true, true, true, true, false]);
}

#[test]
fn element_exactly_on_line_is_not_revealed() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let card = dom.create(body, "div", &["timeline-item"]);
    dom.set_layout(card, 400.0, 400.0);
    let mut config = UiConfig::default();
    config.reveal_viewport_divisor = 2.0;
    let effects = ScrollEffects::discover(&dom, &config).unwrap();

    effects.reveal(&mut dom, at(0.0)).unwrap();

    assert!(!dom.has_class(card, "animate-in"));
}

// =============================================================
// Stylesheet
// =============================================================

#[test]
fn stylesheet_injected_once() {
    let mut page = portfolio_page();
    let mut effects = ScrollEffects::discover(&page.dom, &UiConfig::default()).unwrap();

    effects.on_load(&mut page.dom, at(0.0)).unwrap();
    effects.on_load(&mut page.dom, at(0.0)).unwrap();

    assert_eq!(page.dom.stylesheets(), vec![REVEAL_STYLESHEET]);
}

#[test]
fn stylesheet_defines_reveal_and_navbar_rules() {
    assert!(REVEAL_STYLESHEET.contains(".animate-in {"));
    assert!(REVEAL_STYLESHEET.contains(".navbar.scrolled {"));
    assert!(REVEAL_STYLESHEET.contains("transition: opacity 0.6s ease, transform 0.6s ease;"));
}
