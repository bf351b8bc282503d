//! Events the host feeds into the page, and actions the page hands back.

use std::time::Duration;

use crate::dom::NodeId;
use crate::timers::Task;

/// Window metrics sampled when the event fired.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Vertical scroll offset (`window.scrollY`).
    pub scroll_y: f64,
    /// Viewport height (`window.innerHeight`).
    pub height: f64,
}

/// A DOM event routed to the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Document finished parsing (`DOMContentLoaded`).
    Loaded(Viewport),
    MenuToggleClicked,
    ThemeToggleClicked,
    AlertCloseClicked { button: NodeId },
    AnchorClicked { anchor: NodeId },
    Scrolled(Viewport),
    FormSubmitted,
    TimerFired(Task),
}

/// Side effects the host performs after a handler returns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Cancel the browser's default handling of the triggering event.
    PreventDefault,
    /// Animate the window scroll so its top edge lands at `top`.
    SmoothScrollTo { top: f64 },
    /// Run `task` after `delay`, replacing any pending task with the same key.
    Schedule { task: Task, delay: Duration },
}
