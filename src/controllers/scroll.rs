//! Smooth scrolling for same-document fragment links.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use super::menu::MenuController;
use crate::config::UiConfig;
use crate::dom::{Dom, NodeId};
use crate::error::DomError;
use crate::event::Action;
use crate::state::ViewState;

#[derive(Debug, Clone)]
pub struct SmoothScroller {
    anchors: Vec<NodeId>,
    header_offset_px: f64,
}

impl SmoothScroller {
    /// Collect every anchor whose `href` starts with `#`.
    pub fn discover<D: Dom + ?Sized>(dom: &D, config: &UiConfig) -> Result<Self, DomError> {
        Ok(Self { anchors: dom.query_all(&config.selectors.fragment_links)?, header_offset_px: config.header_offset_px })
    }

    #[must_use]
    pub fn anchors(&self) -> &[NodeId] {
        &self.anchors
    }

    /// Handle a click on a fragment anchor.
    ///
    /// Default navigation is always suppressed. A bare `#` or a fragment with
    /// no matching element stops there. Otherwise the window scrolls so the
    /// target clears the fixed header, and an open menu is closed.
    pub fn on_click<D: Dom + ?Sized>(
        &self,
        dom: &mut D,
        anchor: NodeId,
        state: &mut ViewState,
        menu: Option<&MenuController>,
    ) -> Result<Vec<Action>, DomError> {
        if !self.anchors.contains(&anchor) {
            return Ok(Vec::new());
        }
        let mut actions = vec![Action::PreventDefault];

        let href = dom.attribute(anchor, "href");
        let Some(target) = href.as_deref().and_then(fragment_id).and_then(|id| dom.element_by_id(id)) else {
            return Ok(actions);
        };

        actions.push(Action::SmoothScrollTo { top: dom.offset_top(target) - self.header_offset_px });
        if let Some(menu) = menu {
            menu.close(dom, state)?;
        }
        Ok(actions)
    }
}

/// Element id referenced by a fragment href. `"#"` and `""` reference nothing.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
