//! DOM Node
//!
//! Nodes link to their neighbours through [`NodeId`]s instead of pointers,
//! so the whole tree lives in one `Vec` and ids stay valid after removal.

use crate::{DOMTokenList, NodeId, StyleDeclaration};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::with_data(NodeData::Text(content.to_string()))
    }

    /// Create a comment node
    pub fn comment(content: &str) -> Self {
        Self::with_data(NodeData::Comment(content.to_string()))
    }

    /// Create a doctype node
    pub fn doctype(name: &str) -> Self {
        Self::with_data(NodeData::Doctype { name: name.to_string() })
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype { name: String },
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Element-specific data
///
/// `class` and `style` are kept parsed in [`DOMTokenList`] and
/// [`StyleDeclaration`]; reading those attributes serializes them back.
#[derive(Debug)]
pub struct ElementData {
    tag: String,
    attrs: Vec<Attribute>,
    /// Cached id attribute (very common lookup)
    id: Option<String>,
    /// `classList`
    pub class_list: DOMTokenList,
    /// `style`
    pub style: StyleDeclaration,
    /// Live value of a form control, diverges from the `value` attribute once edited
    value: Option<String>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            id: None,
            class_list: DOMTokenList::new(),
            style: StyleDeclaration::new(),
            value: None,
        }
    }

    /// Lowercase tag name
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn get_attribute(&self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "class" if !self.class_list.is_empty() => Some(self.class_list.value()),
            "style" if !self.style.is_empty() => Some(self.style.css_text()),
            "class" | "style" => None,
            _ => self.attr(&name).map(str::to_string),
        }
    }

    /// Borrowing lookup for plain attributes (not `class`/`style`)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        match name.to_ascii_lowercase().as_str() {
            "class" => !self.class_list.is_empty(),
            "style" => !self.style.is_empty(),
            other => self.attr(other).is_some(),
        }
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "class" => {
                self.class_list = DOMTokenList::from_string(value);
                return;
            }
            "style" => {
                self.style = StyleDeclaration::parse(value);
                return;
            }
            "id" => self.id = Some(value.to_string()),
            _ => {}
        }
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.to_string(),
            None => self.attrs.push(Attribute { name, value: value.to_string() }),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "class" => {
                let had = !self.class_list.is_empty();
                self.class_list = DOMTokenList::new();
                return had;
            }
            "style" => {
                let had = !self.style.is_empty();
                self.style = StyleDeclaration::new();
                return had;
            }
            "id" => self.id = None,
            _ => {}
        }
        let before = self.attrs.len();
        self.attrs.retain(|a| a.name != name);
        self.attrs.len() != before
    }

    /// Plain attributes in source order
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }

    /// `element.dataset[key]` for already dash-cased keys
    pub fn data(&self, key: &str) -> Option<&str> {
        self.attr(&format!("data-{key}"))
    }

    pub fn is_form_control(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea" | "select")
    }

    /// Current value of a form control
    pub fn value(&self) -> &str {
        match &self.value {
            Some(v) => v,
            None => self.attr("value").unwrap_or(""),
        }
    }

    /// Set the live value without touching the `value` attribute
    pub fn set_value(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }

    pub fn is_disabled(&self) -> bool {
        self.has_attribute("disabled")
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.set_attribute("disabled", "");
        } else {
            self.remove_attribute("disabled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_attribute_round_trips_through_class_list() {
        let mut elem = ElementData::new("DIV");
        assert_eq!(elem.tag_name(), "div");

        elem.set_attribute("class", "praticien-card active");
        assert!(elem.class_list.contains("active"));
        elem.class_list.remove("active");
        assert_eq!(elem.get_attribute("class").as_deref(), Some("praticien-card"));
        assert!(elem.attributes().next().is_none());
    }

    #[test]
    fn test_id_cached() {
        let mut elem = ElementData::new("form");
        elem.set_attribute("id", "contact-form");
        assert_eq!(elem.id(), Some("contact-form"));
        elem.remove_attribute("id");
        assert_eq!(elem.id(), None);
    }

    #[test]
    fn test_live_value_diverges_from_attribute() {
        let mut input = ElementData::new("input");
        input.set_attribute("value", "initial");
        assert_eq!(input.value(), "initial");

        input.set_value("typed");
        assert_eq!(input.value(), "typed");
        assert_eq!(input.attr("value"), Some("initial"));
    }

    #[test]
    fn test_disabled_flag() {
        let mut button = ElementData::new("button");
        assert!(!button.is_disabled());
        button.set_disabled(true);
        assert!(button.is_disabled());
        button.set_disabled(false);
        assert!(!button.is_disabled());
    }

    #[test]
    fn test_dataset_lookup() {
        let mut button = ElementData::new("button");
        button.set_attribute("data-index", "3");
        assert_eq!(button.data("index"), Some("3"));
        assert_eq!(button.data("missing"), None);
    }
}
