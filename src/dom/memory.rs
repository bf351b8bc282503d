//! Owned in-memory document.
//!
//! Backs the controller tests and any host without a browser. Layout is not
//! computed: callers assign `offset_top` / `viewport_top` per element with
//! [`MemoryDom::set_layout`] to stand in for what the browser would report.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::BTreeMap;

use super::selector::{Candidate, Selector};
use super::{Dom, NodeId};
use crate::error::DomError;

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    value: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    offset_top: f64,
    viewport_top: f64,
}

/// Node tree rooted at `<html>` with `<head>` and `<body>` children.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<Node>,
    head: NodeId,
    body: NodeId,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: vec![Node { tag: "html".into(), ..Node::default() }],
            head: NodeId(0),
            body: NodeId(0),
        };
        dom.head = dom.create(NodeId(0), "head", &[]);
        dom.body = dom.create(NodeId(0), "body", &[]);
        dom
    }

    #[must_use]
    pub fn head(&self) -> NodeId {
        self.head
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Append a new `<tag>` with `classes` under `parent`.
    ///
    /// An unknown `parent` yields a detached element.
    pub fn create(&mut self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        let attached = self.node(parent).is_some();
        self.nodes.push(Node {
            tag: tag.to_owned(),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            parent: attached.then_some(parent),
            ..Node::default()
        });
        if attached {
            if let Some(p) = self.node_mut(parent) {
                p.children.push(id);
            }
        }
        id
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.node_mut(node) {
            n.attrs.insert(name.to_owned(), value.to_owned());
        }
    }

    /// Set the value of a form control.
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(n) = self.node_mut(node) {
            n.value = Some(value.to_owned());
        }
    }

    /// Assign the layout the browser would report for `node`.
    pub fn set_layout(&mut self, node: NodeId, offset_top: f64, viewport_top: f64) {
        if let Some(n) = self.node_mut(node) {
            n.offset_top = offset_top;
            n.viewport_top = viewport_top;
        }
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.node(node).map(|n| n.text.as_str())
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.node(node).map(|n| n.tag.as_str())
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map_or(&[], |n| n.children.as_slice())
    }

    /// Text of every `<style>` element in the head, in insertion order.
    #[must_use]
    pub fn stylesheets(&self) -> Vec<&str> {
        self.children(self.head)
            .iter()
            .filter_map(|id| self.node(*id))
            .filter(|n| n.tag == "style")
            .map(|n| n.text.as_str())
            .collect()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    fn known_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.node_mut(id).ok_or(DomError::UnknownNode(id))
    }

    /// Descendants of `scope` in document order, excluding `scope`.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    fn select(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants(scope)
            .into_iter()
            .filter(|id| {
                self.node(*id).is_some_and(|n| {
                    selector.matches(&Candidate { tag: &n.tag, classes: &n.classes, attrs: &n.attrs })
                })
            })
            .collect())
    }
}

impl Dom for MemoryDom {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn query(&self, selector: &str) -> Result<Option<NodeId>, DomError> {
        Ok(self.select(self.root(), selector)?.into_iter().next())
    }

    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        self.select(self.root(), selector)
    }

    fn query_within(&self, scope: NodeId, selector: &str) -> Result<Option<NodeId>, DomError> {
        Ok(self.select(scope, selector)?.into_iter().next())
    }

    fn query_all_within(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        self.select(scope, selector)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|node| self.attribute(*node, "id").as_deref() == Some(id))
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(|n| n.parent)
    }

    fn is_attached(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == self.root() {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.node(node).and_then(|n| n.attrs.get(name).cloned())
    }

    fn value(&self, node: NodeId) -> Option<String> {
        self.node(node).and_then(|n| n.value.clone())
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node).is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn set_class(&mut self, node: NodeId, class: &str, on: bool) -> Result<(), DomError> {
        let n = self.known_mut(node)?;
        let present = n.classes.iter().any(|c| c == class);
        if on && !present {
            n.classes.push(class.to_owned());
        } else if !on {
            n.classes.retain(|c| c != class);
        }
        Ok(())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), DomError> {
        self.known_mut(node)?.style.insert(property.to_owned(), value.to_owned());
        Ok(())
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.node(node).and_then(|n| n.style.get(property).cloned())
    }

    fn offset_top(&self, node: NodeId) -> f64 {
        self.node(node).map_or(0.0, |n| n.offset_top)
    }

    fn viewport_top(&self, node: NodeId) -> f64 {
        self.node(node).map_or(0.0, |n| n.viewport_top)
    }

    fn append_element(&mut self, parent: NodeId, tag: &str, class: &str, text: &str) -> Result<NodeId, DomError> {
        if self.node(parent).is_none() {
            return Err(DomError::UnknownNode(parent));
        }
        let id = if class.is_empty() { self.create(parent, tag, &[]) } else { self.create(parent, tag, &[class]) };
        self.known_mut(id)?.text = text.to_owned();
        Ok(id)
    }

    fn remove(&mut self, node: NodeId) -> Result<(), DomError> {
        let parent = self.known_mut(node)?.parent.take();
        if let Some(parent) = parent.and_then(|p| self.node_mut(p)) {
            parent.children.retain(|c| *c != node);
        }
        Ok(())
    }

    fn inject_stylesheet(&mut self, css: &str) -> Result<(), DomError> {
        let head = self.head;
        self.append_element(head, "style", "", css)?;
        Ok(())
    }
}
