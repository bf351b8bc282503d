//! The assembled page: controllers, shared state, and event routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host (the browser entry point, or a test) owns exactly one [`Page`].
//! It forwards every DOM event as an [`Event`] and carries out the returned
//! [`Action`]s. `Page` itself never touches timers, event objects, or the
//! window scroll position, which keeps it runnable over [`crate::dom::MemoryDom`].
//!
//! ERROR HANDLING
//! ==============
//! A page whose markup lacks a feature's elements mounts with that feature
//! off. Markup that breaks a controller's contract is logged and disables
//! that controller. Only an unusable selector in the config aborts mounting.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::UiConfig;
use crate::controllers::alerts::AlertDismisser;
use crate::controllers::effects::ScrollEffects;
use crate::controllers::form::FormValidator;
use crate::controllers::menu::MenuController;
use crate::controllers::scroll::SmoothScroller;
use crate::controllers::theme::ThemeController;
use crate::dom::{Dom, NodeId};
use crate::error::{PageError, SetupError};
use crate::event::{Action, Event};
use crate::state::ViewState;
use crate::storage::KeyValueStore;
use crate::timers::Task;

pub struct Page<D, S> {
    dom: D,
    store: S,
    config: UiConfig,
    state: ViewState,
    menu: Option<MenuController>,
    theme: ThemeController,
    alerts: AlertDismisser,
    scroller: SmoothScroller,
    effects: ScrollEffects,
    form: Option<FormValidator>,
}

impl<D: Dom, S: KeyValueStore> Page<D, S> {
    /// Discover every controller, read the menu and theme flags off the
    /// markup, and apply the stored theme.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Dom`] when a configured selector cannot be parsed.
    pub fn mount(mut dom: D, store: S, config: UiConfig) -> Result<Self, PageError> {
        let menu = match MenuController::discover(&dom, &config) {
            Ok(menu) => menu,
            Err(SetupError::Dom(e)) => return Err(e.into()),
            Err(e) => {
                log::warn!("mobile menu disabled: {e}");
                None
            }
        };
        let theme = ThemeController::discover(&dom, &config)?;
        let alerts = AlertDismisser::discover(&dom, &config)?;
        let scroller = SmoothScroller::discover(&dom, &config)?;
        let effects = ScrollEffects::discover(&dom, &config)?;
        let form = FormValidator::discover(&dom, &config)?;

        // Markup may be served with either class already set.
        let mut state = ViewState {
            menu_open: menu.as_ref().is_some_and(|m| dom.has_class(m.panel(), &config.classes.menu_open)),
            dark_mode: dom.has_class(dom.root(), &config.classes.dark_mode),
        };
        match theme.restore(&mut dom, &store, &mut state) {
            Ok(Some(restored)) => log::debug!("restored {} theme", restored.as_str()),
            Ok(None) => {}
            Err(e) => log::warn!("theme preference not restored: {e}"),
        }

        log::info!(
            "page mounted: menu={} theme_toggle={} alerts={} anchors={} form={}",
            menu.is_some(),
            theme.control().is_some(),
            alerts.buttons().len(),
            scroller.anchors().len(),
            form.is_some(),
        );

        Ok(Self { dom, store, config, state, menu, theme, alerts, scroller, effects, form })
    }

    /// Route one event to its controller and collect the resulting actions.
    ///
    /// # Errors
    ///
    /// Propagates document and storage failures from the handling controller.
    /// State already changed before the failure stays changed.
    pub fn dispatch(&mut self, event: Event) -> Result<Vec<Action>, PageError> {
        let actions = match event {
            Event::Loaded(viewport) => {
                self.effects.on_load(&mut self.dom, viewport)?;
                Vec::new()
            }
            Event::MenuToggleClicked => {
                if let Some(menu) = &self.menu {
                    menu.toggle(&mut self.dom, &mut self.state)?;
                }
                Vec::new()
            }
            Event::ThemeToggleClicked => {
                self.theme.toggle(&mut self.dom, &mut self.store, &mut self.state)?;
                Vec::new()
            }
            Event::AlertCloseClicked { button } => self.alerts.on_click(&mut self.dom, button)?,
            Event::AnchorClicked { anchor } => {
                self.scroller.on_click(&mut self.dom, anchor, &mut self.state, self.menu.as_ref())?
            }
            Event::Scrolled(viewport) => {
                self.effects.on_scroll(&mut self.dom, viewport)?;
                Vec::new()
            }
            Event::FormSubmitted => match &self.form {
                Some(form) => form.on_submit(&mut self.dom)?,
                None => Vec::new(),
            },
            Event::TimerFired(Task::HideAlert(banner)) => {
                AlertDismisser::hide(&mut self.dom, banner)?;
                Vec::new()
            }
        };
        Ok(actions)
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    // ---- elements the host attaches listeners to ----

    #[must_use]
    pub fn menu_trigger(&self) -> Option<NodeId> {
        self.menu.as_ref().map(MenuController::trigger)
    }

    #[must_use]
    pub fn theme_control(&self) -> Option<NodeId> {
        self.theme.control()
    }

    #[must_use]
    pub fn alert_buttons(&self) -> &[NodeId] {
        self.alerts.buttons()
    }

    #[must_use]
    pub fn anchors(&self) -> &[NodeId] {
        self.scroller.anchors()
    }

    #[must_use]
    pub fn contact_form(&self) -> Option<NodeId> {
        self.form.as_ref().map(FormValidator::form)
    }
}
