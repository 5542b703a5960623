//! Form fields as seen by the validator

use lsf_dom::{Document, NodeId};

/// Validation role of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Generic,
    Email,
    Name,
    Message,
}

impl FieldKind {
    /// `type="email"` wins, then the well-known `name`s
    pub fn detect(name: &str, input_type: Option<&str>) -> Self {
        if input_type.is_some_and(|t| t.eq_ignore_ascii_case("email")) {
            return Self::Email;
        }
        match name {
            "name" => Self::Name,
            "message" => Self::Message,
            _ => Self::Generic,
        }
    }
}

/// Snapshot of one input, read fresh on every validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl Field {
    /// Optional generic field
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            required: false,
            kind: FieldKind::Generic,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Read the live state of a form control. `None` if `node` is not an element.
    pub fn read(document: &Document, node: NodeId) -> Option<Self> {
        let elem = document.element(node)?;
        let name = elem.attr("name").or(elem.id()).unwrap_or_default().to_string();
        let kind = FieldKind::detect(&name, elem.attr("type"));
        Some(Self {
            value: elem.value().to_string(),
            required: elem.has_attribute("required"),
            kind,
            name,
        })
    }

    /// Id of the element that displays this field's error
    pub fn error_slot_id(&self) -> String {
        format!("{}-error", self.name)
    }
}
