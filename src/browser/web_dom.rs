//! [`Dom`] over the live browser document.
//!
//! Elements are interned on first sight: the registry holds one `Element`
//! per [`NodeId`], and a second lookup of the same element returns the same
//! id. Each interned element carries its registry index in
//! [`NODE_ATTRIBUTE`], so a lookup is one attribute read and one identity
//! check. The registry only grows, which is fine for a static page.

#[cfg(test)]
#[path = "web_dom_test.rs"]
mod web_dom_test;

use std::cell::RefCell;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom::selector::Selector;
use crate::dom::{Dom, NodeId};
use crate::error::DomError;

/// Attribute holding an element's registry index.
pub const NODE_ATTRIBUTE: &str = "data-portfolio-ui-node";

/// The registry index recorded in `raw`, if it names a slot below `len`.
fn recorded_slot(raw: Option<&str>, len: usize) -> Option<usize> {
    let Ok(index) = raw?.trim().parse::<usize>() else {
        return None;
    };
    (index < len).then_some(index)
}

fn node_id(index: usize) -> Result<NodeId, DomError> {
    u32::try_from(index).map(NodeId).map_err(|_| DomError::Js("node registry overflow".into()))
}

pub(crate) fn js_error(err: JsValue) -> DomError {
    DomError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

pub struct WebDom {
    document: Document,
    root: NodeId,
    nodes: RefCell<Vec<Element>>,
}

impl WebDom {
    pub fn new(document: Document) -> Result<Self, DomError> {
        let html = document.document_element().ok_or_else(|| DomError::Js("document has no root element".into()))?;
        html.set_attribute(NODE_ATTRIBUTE, "0").map_err(js_error)?;
        Ok(Self { document, root: NodeId(0), nodes: RefCell::new(vec![html]) })
    }

    /// The browser element behind `id`.
    pub fn element(&self, id: NodeId) -> Result<Element, DomError> {
        self.nodes.borrow().get(id.0 as usize).cloned().ok_or(DomError::UnknownNode(id))
    }

    fn intern(&self, element: Element) -> Result<NodeId, DomError> {
        let mut nodes = self.nodes.borrow_mut();
        let recorded = element.get_attribute(NODE_ATTRIBUTE);
        if let Some(index) = recorded_slot(recorded.as_deref(), nodes.len()) {
            if nodes[index].is_same_node(Some(element.as_ref())) {
                return node_id(index);
            }
        }
        // Unseen, or a clone that copied another element's index.
        let index = nodes.len();
        let id = node_id(index)?;
        element.set_attribute(NODE_ATTRIBUTE, &index.to_string()).map_err(js_error)?;
        nodes.push(element);
        Ok(id)
    }

    fn intern_logged(&self, element: Element) -> Option<NodeId> {
        match self.intern(element) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    fn html(&self, id: NodeId) -> Option<HtmlElement> {
        match self.element(id).map(|e| e.dyn_into::<HtmlElement>()) {
            Ok(Ok(html)) => Some(html),
            _ => None,
        }
    }

    fn first(&self, found: Result<Option<Element>, JsValue>, selector: &str) -> Result<Option<NodeId>, DomError> {
        match found.map_err(|e| selector_error(selector, e))? {
            Some(element) => Ok(Some(self.intern(element)?)),
            None => Ok(None),
        }
    }

    fn all(&self, found: Result<web_sys::NodeList, JsValue>, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let list = found.map_err(|e| selector_error(selector, e))?;
        let mut ids = Vec::with_capacity(list.length() as usize);
        for index in 0..list.length() {
            if let Some(Ok(element)) = list.item(index).map(|node| node.dyn_into::<Element>()) {
                ids.push(self.intern(element)?);
            }
        }
        Ok(ids)
    }
}

fn selector_error(selector: &str, err: JsValue) -> DomError {
    DomError::Selector { selector: selector.to_owned(), reason: format!("{err:?}") }
}

impl Dom for WebDom {
    fn root(&self) -> NodeId {
        self.root
    }

    // Selectors go through the same parser as the in-memory document so both
    // hosts accept exactly the same set.
    fn query(&self, selector: &str) -> Result<Option<NodeId>, DomError> {
        Selector::parse(selector)?;
        self.first(self.document.query_selector(selector), selector)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        Selector::parse(selector)?;
        self.all(self.document.query_selector_all(selector), selector)
    }

    fn query_within(&self, scope: NodeId, selector: &str) -> Result<Option<NodeId>, DomError> {
        Selector::parse(selector)?;
        let scope = self.element(scope)?;
        self.first(scope.query_selector(selector), selector)
    }

    fn query_all_within(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        Selector::parse(selector)?;
        let scope = self.element(scope)?;
        self.all(scope.query_selector_all(selector), selector)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.document.get_element_by_id(id).and_then(|element| self.intern_logged(element))
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        let Ok(element) = self.element(node) else {
            return None;
        };
        self.intern_logged(element.parent_element()?)
    }

    fn is_attached(&self, node: NodeId) -> bool {
        self.element(node).is_ok_and(|e| e.is_connected())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node).map(|e| e.get_attribute(name)).unwrap_or_default()
    }

    fn value(&self, node: NodeId) -> Option<String> {
        let Ok(element) = self.element(node) else {
            return None;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        element.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_ok_and(|e| e.class_list().contains(class))
    }

    fn set_class(&mut self, node: NodeId, class: &str, on: bool) -> Result<(), DomError> {
        self.element(node)?.class_list().toggle_with_force(class, on).map_err(js_error)?;
        Ok(())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), DomError> {
        let html = self.html(node).ok_or_else(|| DomError::Js(format!("{node:?} is not an html element")))?;
        html.style().set_property(property, value).map_err(js_error)
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        match self.html(node)?.style().get_property_value(property) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    fn offset_top(&self, node: NodeId) -> f64 {
        self.html(node).map_or(0.0, |h| f64::from(h.offset_top()))
    }

    fn viewport_top(&self, node: NodeId) -> f64 {
        self.element(node).map_or(0.0, |e| e.get_bounding_client_rect().top())
    }

    fn append_element(&mut self, parent: NodeId, tag: &str, class: &str, text: &str) -> Result<NodeId, DomError> {
        let parent = self.element(parent)?;
        let element = self.document.create_element(tag).map_err(js_error)?;
        if !class.is_empty() {
            element.set_class_name(class);
        }
        element.set_text_content(Some(text));
        parent.append_child(&element).map_err(js_error)?;
        self.intern(element)
    }

    fn remove(&mut self, node: NodeId) -> Result<(), DomError> {
        self.element(node)?.remove();
        Ok(())
    }

    fn inject_stylesheet(&mut self, css: &str) -> Result<(), DomError> {
        let head = self.document.head().ok_or_else(|| DomError::Js("document has no head".into()))?;
        let style = self.document.create_element("style").map_err(js_error)?;
        style.set_text_content(Some(css));
        head.append_child(&style).map_err(js_error)?;
        Ok(())
    }
}
