//! Minimal document interface the page controllers are written against.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers never touch `web_sys` directly. They read and mutate the page
//! through [`Dom`], which the browser host implements over the live document
//! and [`MemoryDom`] implements over an owned node tree for tests and native
//! hosts.
//!
//! Elements are addressed by [`NodeId`] handles that stay valid for the life
//! of the page, including after the element is detached.

pub mod memory;
pub mod selector;

pub use memory::MemoryDom;

use crate::error::DomError;

/// Opaque handle to a document element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Read/write access to the subset of the DOM the page behaviors need.
pub trait Dom {
    /// The document root (`<html>`).
    fn root(&self) -> NodeId;

    /// First element in document order matching `selector`.
    fn query(&self, selector: &str) -> Result<Option<NodeId>, DomError>;

    /// Every element in document order matching `selector`.
    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError>;

    /// First descendant of `scope` matching `selector`.
    fn query_within(&self, scope: NodeId, selector: &str) -> Result<Option<NodeId>, DomError>;

    /// Every descendant of `scope` matching `selector`.
    fn query_all_within(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError>;

    /// Element whose `id` attribute equals `id`.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Whether `node` is still reachable from the document root.
    fn is_attached(&self, node: NodeId) -> bool;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Current value of a form control. `None` for non-controls.
    fn value(&self, node: NodeId) -> Option<String>;

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Add (`on == true`) or remove a class.
    fn set_class(&mut self, node: NodeId, class: &str, on: bool) -> Result<(), DomError>;

    /// Set an inline style property.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), DomError>;

    fn style(&self, node: NodeId, property: &str) -> Option<String>;

    /// Distance in CSS pixels from the document top (`offsetTop`).
    fn offset_top(&self, node: NodeId) -> f64;

    /// Top edge relative to the viewport (`getBoundingClientRect().top`).
    fn viewport_top(&self, node: NodeId) -> f64;

    /// Create `<tag class=..>text</tag>` and append it to `parent`.
    fn append_element(&mut self, parent: NodeId, tag: &str, class: &str, text: &str) -> Result<NodeId, DomError>;

    /// Detach `node` from its parent. Detaching a detached node is a no-op.
    fn remove(&mut self, node: NodeId) -> Result<(), DomError>;

    /// Append a `<style>` element with `css` to the document head.
    fn inject_stylesheet(&mut self, css: &str) -> Result<(), DomError>;
}
