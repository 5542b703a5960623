//! Document - High-level document API

use crate::{DomTree, ElementData, Node, NodeId, Selector};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Document URL
    url: String,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
    /// `document.activeElement`; `None` means the body
    focused: Option<NodeId>,
}

impl Document {
    /// Create a document with an empty `<html><head><body>` skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");
        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
            focused: None,
        }
    }

    /// Create a document with no structure; call [`Document::finalize`]
    /// after filling the tree.
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            focused: None,
        }
    }

    /// Locate `<html>`, `<head>` and `<body>` after the tree was built
    pub fn finalize(&mut self) {
        let find = |tree: &DomTree, parent: NodeId, tag: &str| {
            tree.children(parent)
                .find(|(_, node)| node.as_element().is_some_and(|e| e.tag_name() == tag))
                .map_or(NodeId::NONE, |(id, _)| id)
        };
        self.html_element = find(&self.tree, self.tree.root(), "html");
        if self.html_element.is_valid() {
            self.head_element = find(&self.tree, self.html_element, "head");
            self.body_element = find(&self.tree, self.html_element, "body");
        }
        tracing::trace!(
            html = %self.html_element,
            head = %self.head_element,
            body = %self.body_element,
            "document finalized"
        );
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Text of the first `<title>` in `<head>`
    pub fn title(&self) -> String {
        if !self.head_element.is_valid() {
            return String::new();
        }
        self.tree
            .children(self.head_element)
            .find(|(_, node)| node.as_element().is_some_and(|e| e.tag_name() == "title"))
            .map(|(id, _)| self.tree.text_content(id).trim().to_string())
            .unwrap_or_default()
    }

    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    pub fn head(&self) -> NodeId {
        self.head_element
    }

    pub fn body(&self) -> NodeId {
        self.body_element
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.tree.get(id)
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.element(id)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.tree.element_mut(id)
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.tree.append_child(parent, child)
    }

    /// Get element by ID among connected nodes
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .find(|&n| self.tree.element(n).and_then(ElementData::id) == Some(id))
    }

    /// First element under `root` (exclusive) matching `selector`
    pub fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector)?;
        self.tree
            .descendants(root)
            .find(|&n| self.tree.element(n).is_some_and(|e| selector.matches(e)))
    }

    /// All elements under `root` (exclusive) matching `selector`, in tree order
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(selector) = Selector::parse(selector) else {
            tracing::warn!(selector, "unsupported selector");
            return Vec::new();
        };
        self.tree
            .descendants(root)
            .filter(|&n| self.tree.element(n).is_some_and(|e| selector.matches(e)))
            .collect()
    }

    pub fn text_content(&self, id: NodeId) -> String {
        self.tree.text_content(id)
    }

    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        self.tree.set_text_content(id, text);
    }

    /// Whether the node is reachable from the document root
    pub fn is_connected(&self, id: NodeId) -> bool {
        id == self.tree.root() || self.tree.ancestors(id).any(|a| a == self.tree.root())
    }

    /// Inclusive containment, as in `node.contains(other)`
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.tree.contains(ancestor, node)
    }

    /// Detach a node from the document. Focus inside the removed subtree is dropped.
    pub fn remove(&mut self, id: NodeId) {
        if let Some(focused) = self.focused {
            if self.tree.contains(id, focused) {
                self.focused = None;
            }
        }
        self.tree.detach(id);
    }

    /// Move focus to a connected, enabled element
    pub fn focus(&mut self, id: NodeId) -> bool {
        let focusable = self.is_connected(id)
            && self.tree.element(id).is_some_and(|e| !e.is_disabled());
        if focusable {
            self.focused = Some(id);
        }
        focusable
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    /// Live value of a form control
    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.tree.element(id).map(ElementData::value)
    }

    pub fn set_value(&mut self, id: NodeId, value: &str) -> bool {
        match self.tree.element_mut(id) {
            Some(elem) => {
                elem.set_value(value);
                true
            }
            None => false,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
