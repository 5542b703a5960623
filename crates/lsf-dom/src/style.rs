//! Inline style declarations (`element.style`)

/// Ordered `property: value` pairs of an element's `style` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    properties: Vec<(String, String)>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `style` attribute. Malformed declarations are skipped.
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        for decl in css_text.split(';') {
            if let Some((name, value)) = decl.split_once(':') {
                let name = name.trim();
                let value = value.trim();
                if !name.is_empty() && !value.is_empty() {
                    style.set_property(name, value);
                }
            }
        }
        style
    }

    pub fn get_property(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.properties
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a property; an empty value removes it like the CSSOM does.
    pub fn set_property(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        if value.is_empty() {
            self.remove_property(&name);
            return;
        }
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.properties.push((name, value.to_string())),
        }
    }

    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        let pos = self.properties.iter().position(|(n, _)| *n == name)?;
        Some(self.properties.remove(pos).1)
    }

    /// `display` shorthand used by the modal and menu toggles
    pub fn display(&self) -> Option<&str> {
        self.get_property("display")
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Serialize back to attribute form
    pub fn css_text(&self) -> String {
        self.properties
            .iter()
            .map(|(n, v)| format!("{n}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
