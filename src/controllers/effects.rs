//! Scroll-driven presentation classes.
//!
//! Two independent behaviors re-evaluated on every scroll event: the navbar
//! gets a `scrolled` class past a fixed offset, and reveal-category elements
//! get `animate-in` once their top edge rises above `height / 1.2`.
//! Reveal is one-way. Scroll events are not throttled.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::config::UiConfig;
use crate::dom::{Dom, NodeId};
use crate::error::DomError;
use crate::event::Viewport;

/// Transition rules installed once at load.
pub const REVEAL_STYLESHEET: &str = "\
.timeline-item, .education-card, .skill-category, .project-card, .certification-card {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.animate-in {
    opacity: 1;
    transform: translateY(0);
}

.navbar.scrolled {
    background-color: rgba(var(--primary-color-rgb), 0.95);
    box-shadow: var(--shadow-md);
}

.mobile-menu-btn span.rotated {
    transform: rotate(45deg) translate(5px, 5px);
}

.mobile-menu-btn span.hidden {
    opacity: 0;
}

.mobile-menu-btn span.rotated-reverse {
    transform: rotate(-45deg) translate(5px, -5px);
}
";

#[derive(Debug, Clone)]
pub struct ScrollEffects {
    navbar: Option<NodeId>,
    scrolled_class: String,
    threshold_px: f64,
    reveal_selector: String,
    reveal_class: String,
    reveal_divisor: f64,
    styles_injected: bool,
}

impl ScrollEffects {
    pub fn discover<D: Dom + ?Sized>(dom: &D, config: &UiConfig) -> Result<Self, DomError> {
        Ok(Self {
            navbar: dom.query(&config.selectors.navbar)?,
            scrolled_class: config.classes.navbar_scrolled.clone(),
            threshold_px: config.navbar_threshold_px,
            reveal_selector: config.selectors.reveal.clone(),
            reveal_class: config.classes.reveal_in.clone(),
            reveal_divisor: config.reveal_viewport_divisor,
            styles_injected: false,
        })
    }

    #[must_use]
    pub fn navbar(&self) -> Option<NodeId> {
        self.navbar
    }

    /// Install the transition stylesheet (first call only) and run one reveal pass.
    pub fn on_load<D: Dom + ?Sized>(&mut self, dom: &mut D, viewport: Viewport) -> Result<(), DomError> {
        if !self.styles_injected {
            dom.inject_stylesheet(REVEAL_STYLESHEET)?;
            self.styles_injected = true;
        }
        self.reveal(dom, viewport)
    }

    pub fn on_scroll<D: Dom + ?Sized>(&self, dom: &mut D, viewport: Viewport) -> Result<(), DomError> {
        if let Some(navbar) = self.navbar {
            dom.set_class(navbar, &self.scrolled_class, viewport.scroll_y > self.threshold_px)?;
        }
        self.reveal(dom, viewport)
    }

    /// Add the reveal class to every element that has entered the viewport.
    pub fn reveal<D: Dom + ?Sized>(&self, dom: &mut D, viewport: Viewport) -> Result<(), DomError> {
        let line = viewport.height / self.reveal_divisor;
        for element in dom.query_all(&self.reveal_selector)? {
            if dom.viewport_top(element) < line {
                dom.set_class(element, &self.reveal_class, true)?;
            }
        }
        Ok(())
    }
}
