//! Mobile navigation menu.
//!
//! The panel's open class and the three icon bar classes always move
//! together, so the hamburger icon shows a close glyph exactly while the
//! panel is open.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::{Classes, UiConfig};
use crate::dom::{Dom, NodeId};
use crate::error::{DomError, SetupError};
use crate::state::ViewState;

/// Number of bars the trigger icon must contain.
pub const MENU_BAR_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct MenuController {
    trigger: NodeId,
    panel: NodeId,
    bars: [NodeId; MENU_BAR_COUNT],
    classes: Classes,
}

impl MenuController {
    /// Locate the trigger, the panel, and the icon bars.
    ///
    /// Returns `Ok(None)` when the trigger or panel is absent. A trigger
    /// whose icon does not have exactly three bars is a setup error.
    pub fn discover<D: Dom + ?Sized>(dom: &D, config: &UiConfig) -> Result<Option<Self>, SetupError> {
        let selectors = &config.selectors;
        let (Some(trigger), Some(panel)) = (dom.query(&selectors.menu_trigger)?, dom.query(&selectors.nav_links)?)
        else {
            return Ok(None);
        };

        let found = dom.query_all_within(trigger, &selectors.menu_bars)?;
        let bars: [NodeId; MENU_BAR_COUNT] =
            found.as_slice().try_into().map_err(|_| SetupError::MenuBars { found: found.len() })?;

        Ok(Some(Self { trigger, panel, bars, classes: config.classes.clone() }))
    }

    #[must_use]
    pub fn trigger(&self) -> NodeId {
        self.trigger
    }

    #[must_use]
    pub fn panel(&self) -> NodeId {
        self.panel
    }

    /// Flip the menu open/closed.
    pub fn toggle<D: Dom + ?Sized>(&self, dom: &mut D, state: &mut ViewState) -> Result<(), DomError> {
        self.render(dom, !state.menu_open)?;
        state.menu_open = !state.menu_open;
        Ok(())
    }

    /// Close the menu if it is open.
    pub fn close<D: Dom + ?Sized>(&self, dom: &mut D, state: &mut ViewState) -> Result<(), DomError> {
        if !state.menu_open {
            return Ok(());
        }
        self.render(dom, false)?;
        state.menu_open = false;
        Ok(())
    }

    fn render<D: Dom + ?Sized>(&self, dom: &mut D, open: bool) -> Result<(), DomError> {
        let [top, middle, bottom] = self.bars;
        dom.set_class(self.panel, &self.classes.menu_open, open)?;
        dom.set_class(top, &self.classes.bar_top, open)?;
        dom.set_class(middle, &self.classes.bar_middle, open)?;
        dom.set_class(bottom, &self.classes.bar_bottom, open)?;
        Ok(())
    }
}
