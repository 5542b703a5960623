//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to our DOM format.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use lsf_dom::{Document, DomTree, NodeId};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, ParseError> {
        tracing::debug!(url, bytes = html.len(), "parsing HTML document");

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty(url);
        let root = document.tree().root();
        convert_node(&dom.document, document.tree_mut(), root);
        document.finalize();

        if !document.body().is_valid() {
            return Err(ParseError::MissingBody);
        }

        tracing::debug!(nodes = document.tree().len(), "parsed HTML document");
        Ok(document)
    }
}

/// Copy an RcDom node (and its subtree) under `parent`
fn convert_node(handle: &Handle, tree: &mut DomTree, parent: NodeId) {
    match &handle.data {
        RcNodeData::Document => {
            for child in handle.children.borrow().iter() {
                convert_node(child, tree, parent);
            }
        }
        RcNodeData::Doctype { name, .. } => {
            let id = tree.create_doctype(name);
            tree.append_child(parent, id);
        }
        RcNodeData::Text { contents } => {
            let text = contents.borrow();
            if !text.trim().is_empty() {
                let id = tree.create_text(&text);
                tree.append_child(parent, id);
            }
        }
        RcNodeData::Comment { contents } => {
            let id = tree.create_comment(contents);
            tree.append_child(parent, id);
        }
        RcNodeData::Element { name, attrs, .. } => {
            let id = tree.create_element(&name.local);
            if let Some(elem) = tree.element_mut(id) {
                for attr in attrs.borrow().iter() {
                    elem.set_attribute(&attr.name.local, &attr.value);
                }
            }
            tree.append_child(parent, id);

            for child in handle.children.borrow().iter() {
                convert_node(child, tree, id);
            }

            // A textarea's initial value is its text content
            if tree.element(id).is_some_and(|e| e.tag_name() == "textarea") {
                let initial = tree.text_content(id);
                if let Some(elem) = tree.element_mut(id) {
                    elem.set_value(&initial);
                }
            }
        }
        RcNodeData::ProcessingInstruction { .. } => {}
    }
}
