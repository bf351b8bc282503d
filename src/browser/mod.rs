//! Browser entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once when the WebAssembly module is instantiated. Mounting waits for
//! `DOMContentLoaded` if the document is still parsing. After mounting, every
//! listener funnels into [`Host::handle`], which dispatches to the [`Page`]
//! and carries out the returned actions against the real window.
//!
//! Listeners live for the page lifetime, so their closures are forgotten.
//! Deferred tasks are `gloo_timers` timeouts keyed by [`TaskKey`]; replacing
//! a map entry drops, and so cancels, the previous timeout.

mod local_store;
mod web_dom;

pub use local_store::LocalStore;
pub use web_dom::WebDom;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, EventTarget, ScrollBehavior, ScrollToOptions, Window};

use crate::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::dom::NodeId;
use crate::event::{Action, Event, Viewport};
use crate::page::Page;
use crate::timers::TaskKey;

struct Host {
    window: Window,
    page: RefCell<Page<WebDom, LocalStore>>,
    timers: RefCell<HashMap<TaskKey, Timeout>>,
}

impl Host {
    /// Dispatch `event` and perform its actions. `source` is the DOM event
    /// that triggered it, if any.
    fn handle(self: &Rc<Self>, event: Event, source: Option<&web_sys::Event>) {
        let result = self.page.borrow_mut().dispatch(event);
        match result {
            Ok(actions) => {
                for action in actions {
                    self.perform(action, source);
                }
            }
            Err(e) => log::warn!("{event:?} handler failed: {e}"),
        }
    }

    fn perform(self: &Rc<Self>, action: Action, source: Option<&web_sys::Event>) {
        match action {
            Action::PreventDefault => {
                if let Some(source) = source {
                    source.prevent_default();
                }
            }
            Action::SmoothScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Action::Schedule { task, delay } => {
                let host = Rc::clone(self);
                let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                let timeout = Timeout::new(millis, move || host.handle(Event::TimerFired(task), None));
                self.timers.borrow_mut().insert(task.key(), timeout);
            }
        }
    }

    fn viewport(&self) -> Viewport {
        let scroll_y = self.window.scroll_y().unwrap_or_default();
        let height = self.window.inner_height().map_or(0.0, |h| h.as_f64().unwrap_or_default());
        Viewport { scroll_y, height }
    }

    fn target(&self, node: NodeId) -> Result<EventTarget, JsValue> {
        let element = self.page.borrow().dom().element(node).map_err(to_js)?;
        Ok(element.into())
    }

    /// Attach a page-lifetime listener that maps each DOM event to a page event.
    fn listen<F>(self: &Rc<Self>, target: &EventTarget, kind: &str, to_event: F) -> Result<(), JsValue>
    where
        F: Fn(&Host) -> Event + 'static,
    {
        let host = Rc::clone(self);
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |source: web_sys::Event| {
            let event = to_event(host.as_ref());
            host.handle(event, Some(&source));
        });
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        callback.forget();
        Ok(())
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn read_config(document: &Document) -> UiConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; using defaults");
            UiConfig::default()
        }
    }
}

/// Mount the page and wire every listener.
fn boot(window: Window, document: &Document) -> Result<(), JsValue> {
    let config = read_config(document);
    let dom = WebDom::new(document.clone()).map_err(to_js)?;
    let store = LocalStore::new(&window);
    let page = Page::mount(dom, store, config).map_err(to_js)?;

    let host = Rc::new(Host { window, page: RefCell::new(page), timers: RefCell::new(HashMap::new()) });

    let (menu, theme, alerts, anchors, form) = {
        let page = host.page.borrow();
        (
            page.menu_trigger(),
            page.theme_control(),
            page.alert_buttons().to_vec(),
            page.anchors().to_vec(),
            page.contact_form(),
        )
    };

    if let Some(menu) = menu {
        host.listen(&host.target(menu)?, "click", |_| Event::MenuToggleClicked)?;
    }
    if let Some(theme) = theme {
        host.listen(&host.target(theme)?, "click", |_| Event::ThemeToggleClicked)?;
    }
    for button in alerts {
        host.listen(&host.target(button)?, "click", move |_| Event::AlertCloseClicked { button })?;
    }
    for anchor in anchors {
        host.listen(&host.target(anchor)?, "click", move |_| Event::AnchorClicked { anchor })?;
    }
    if let Some(form) = form {
        host.listen(&host.target(form)?, "submit", |_| Event::FormSubmitted)?;
    }
    let window_target: EventTarget = host.window.clone().into();
    host.listen(&window_target, "scroll", |host| Event::Scrolled(host.viewport()))?;

    host.handle(Event::Loaded(host.viewport()), None);
    Ok(())
}

fn run(window: Window, document: &Document) {
    if let Err(e) = boot(window, document) {
        log::error!("portfolio ui failed to start: {e:?}");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("logger already installed: {e}");
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() != "loading" {
        run(window, &document);
        return Ok(());
    }

    let doc = document.clone();
    let on_ready = Closure::once(move || run(window, &doc));
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}
