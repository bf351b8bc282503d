//! Light/dark theme toggle with persisted preference.
//!
//! The dark-mode class lives on the document root. The flag in
//! [`ViewState`], the root class, and the stored value are written together
//! on every change.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::UiConfig;
use crate::dom::{Dom, NodeId};
use crate::error::{DomError, PageError};
use crate::state::{Theme, ViewState};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone)]
pub struct ThemeController {
    toggle: Option<NodeId>,
    dark_class: String,
    storage_key: String,
}

impl ThemeController {
    /// Bind to the theme toggle control, if the page has one.
    ///
    /// The controller exists even without a control so the stored
    /// preference can still be restored at load.
    pub fn discover<D: Dom + ?Sized>(dom: &D, config: &UiConfig) -> Result<Self, DomError> {
        Ok(Self {
            toggle: dom.query(&config.selectors.theme_toggle)?,
            dark_class: config.classes.dark_mode.clone(),
            storage_key: config.theme_storage_key.clone(),
        })
    }

    /// The toggle control. `None` disables [`ThemeController::toggle`].
    #[must_use]
    pub fn control(&self) -> Option<NodeId> {
        self.toggle
    }

    /// Flip the theme, update the root class, and persist the new value.
    ///
    /// Returns `Ok(None)` when the page has no toggle control.
    pub fn toggle<D, S>(&self, dom: &mut D, store: &mut S, state: &mut ViewState) -> Result<Option<Theme>, PageError>
    where
        D: Dom + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        if self.toggle.is_none() {
            return Ok(None);
        }
        let next = state.theme().toggled();
        self.apply(dom, state, next)?;
        store.set(&self.storage_key, next.as_str())?;
        Ok(Some(next))
    }

    /// Apply the stored preference, if any.
    ///
    /// Missing keys and unrecognized values leave the current mode alone.
    pub fn restore<D, S>(&self, dom: &mut D, store: &S, state: &mut ViewState) -> Result<Option<Theme>, PageError>
    where
        D: Dom + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        let Some(theme) = store.get(&self.storage_key)?.as_deref().and_then(Theme::parse) else {
            return Ok(None);
        };
        self.apply(dom, state, theme)?;
        Ok(Some(theme))
    }

    fn apply<D: Dom + ?Sized>(&self, dom: &mut D, state: &mut ViewState, theme: Theme) -> Result<(), DomError> {
        let root = dom.root();
        dom.set_class(root, &self.dark_class, theme.is_dark())?;
        state.dark_mode = theme.is_dark();
        Ok(())
    }
}
