use super::*;
use crate::dom::MemoryDom;
use crate::error::StorageError;
use crate::fixture::portfolio_page;
use crate::storage::MemoryStore;

struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

fn stored(store: &MemoryStore) -> Option<String> {
    store.get("theme").unwrap()
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_enables_dark_mode_and_persists() {
    let mut page = portfolio_page();
    let theme = ThemeController::discover(&page.dom, &UiConfig::default()).unwrap();
    let mut store = MemoryStore::new();
    let mut state = ViewState::default();

    let next = theme.toggle(&mut page.dom, &mut store, &mut state).unwrap();

    assert_eq!(next, Some(Theme::Dark));
    assert!(state.dark_mode);
    assert!(page.dom.has_class(page.dom.root(), "dark-mode"));
    assert_eq!(stored(&store).as_deref(), Some("dark"));
}

#[test]
fn toggle_twice_returns_to_light_and_stores_light() {
    let mut page = portfolio_page();
    let theme = ThemeController::discover(&page.dom, &UiConfig::default()).unwrap();
    let mut store = MemoryStore::new();
    let mut state = ViewState::default();

    theme.toggle(&mut page.dom, &mut store, &mut state).unwrap();
    theme.toggle(&mut page.dom, &mut store, &mut state).unwrap();

    assert!(!state.dark_mode);
    assert!(!page.dom.has_class(page.dom.root(), "dark-mode"));
    assert_eq!(stored(&store).as_deref(), Some("light"));
}

#[test]
fn toggle_without_control_does_nothing() {
    let mut dom = MemoryDom::new();
    let theme = ThemeController::discover(&dom, &UiConfig::default()).unwrap();
    let mut store = MemoryStore::new();
    let mut state = ViewState::default();

    assert_eq!(theme.control(), None);
    assert_eq!(theme.toggle(&mut dom, &mut store, &mut state).unwrap(), None);
    assert!(!state.dark_mode);
    assert_eq!(stored(&store), None);
}

#[test]
fn toggle_reports_storage_failure() {
    let mut page = portfolio_page();
    let theme = ThemeController::discover(&page.dom, &UiConfig::default()).unwrap();
    let mut state = ViewState::default();

    let err = theme.toggle(&mut page.dom, &mut UnavailableStore, &mut state).unwrap_err();
    assert_eq!(err, PageError::Storage(StorageError::Unavailable));
}

#[test]
fn toggle_uses_configured_storage_key() {
    let mut page = portfolio_page();
    let mut config = UiConfig::default();
    config.theme_storage_key = "portfolio-theme".into();
    let theme = ThemeController::discover(&page.dom, &config).unwrap();
    let mut store = MemoryStore::new();
    let mut state = ViewState::default();

    theme.toggle(&mut page.dom, &mut store, &mut state).unwrap();

    assert_eq!(store.get("portfolio-theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(stored(&store), None);
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_applies_stored_dark() {
    let mut page = portfolio_page();
    let theme = ThemeController::discover(&page.dom, &UiConfig::default()).unwrap();
    let store = MemoryStore::with("theme", "dark");
    let mut state = ViewState::default();

    assert_eq!(theme.restore(&mut page.dom, &store, &mut state).unwrap(), Some(Theme::Dark));
    assert!(state.dark_mode);
    assert!(page.dom.has_class(page.dom.root(), "dark-mode"));
}

#[test]
fn restore_ignores_unknown_value() {
    let mut page = portfolio_page();
    let theme = ThemeController::discover(&page.dom, &UiConfig::default()).unwrap();
    let store = MemoryStore::with("theme", "sepia");
    let mut state = ViewState::default();

    assert_eq!(theme.restore(&mut page.dom, &store, &mut state).unwrap(), None);
    assert!(!state.dark_mode);
    assert!(!page.dom.has_class(page.dom.root(), "dark-mode"));
}

#[test]
fn restore_with_empty_store_is_noop() {
    let mut page = portfolio_page();
    let theme = ThemeController::discover(&page.dom, &UiConfig::default()).unwrap();
    let mut state = ViewState::default();

    assert_eq!(theme.restore(&mut page.dom, &MemoryStore::new(), &mut state).unwrap(), None);
}

#[test]
fn restore_then_toggle_goes_light() {
    let mut page = portfolio_page();
    let theme = ThemeController::discover(&page.dom, &UiConfig::default()).unwrap();
    let mut store = MemoryStore::with("theme", "dark");
    let mut state = ViewState::default();

    theme.restore(&mut page.dom, &store, &mut state).unwrap();
    theme.toggle(&mut page.dom, &mut store, &mut state).unwrap();

    assert!(!state.dark_mode);
    assert_eq!(stored(&store).as_deref(), Some("light"));
}
