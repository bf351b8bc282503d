//! Dismissible notification banners.
//!
//! Dismissal is two-phase: opacity drops to zero at once so the stylesheet
//! transition runs, then a deferred task takes the banner out of layout.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use std::time::Duration;

use crate::config::UiConfig;
use crate::dom::{Dom, NodeId};
use crate::error::DomError;
use crate::event::Action;
use crate::timers::Task;

#[derive(Debug, Clone)]
pub struct AlertDismisser {
    buttons: Vec<NodeId>,
    fade: Duration,
}

impl AlertDismisser {
    /// Collect the dismiss controls present at initialization.
    pub fn discover<D: Dom + ?Sized>(dom: &D, config: &UiConfig) -> Result<Self, DomError> {
        Ok(Self { buttons: dom.query_all(&config.selectors.alert_close)?, fade: config.alert_fade() })
    }

    #[must_use]
    pub fn buttons(&self) -> &[NodeId] {
        &self.buttons
    }

    /// Start fading the banner that owns `button`.
    ///
    /// Controls not seen at discovery and controls without a parent are
    /// ignored.
    pub fn on_click<D: Dom + ?Sized>(&self, dom: &mut D, button: NodeId) -> Result<Vec<Action>, DomError> {
        if !self.buttons.contains(&button) {
            return Ok(Vec::new());
        }
        let Some(banner) = dom.parent(button) else {
            return Ok(Vec::new());
        };
        dom.set_style(banner, "opacity", "0")?;
        Ok(vec![Action::Schedule { task: Task::HideAlert(banner), delay: self.fade }])
    }

    /// Deferred second phase. A banner that left the document is skipped.
    pub fn hide<D: Dom + ?Sized>(dom: &mut D, banner: NodeId) -> Result<(), DomError> {
        if !dom.is_attached(banner) {
            return Ok(());
        }
        dom.set_style(banner, "display", "none")
    }
}
