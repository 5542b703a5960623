//! DOMTokenList (classList)

use std::fmt;

/// Space-separated token set backing `element.classList`.
///
/// Order of first insertion is preserved so the serialized `class`
/// attribute stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DOMTokenList {
    tokens: Vec<String>,
}

impl DOMTokenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a `class` attribute value
    pub fn from_string(s: &str) -> Self {
        let mut list = Self::new();
        for token in s.split_whitespace() {
            list.add(token);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add a token; returns `false` if it was already present
    pub fn add(&mut self, token: &str) -> bool {
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove a token; returns `true` if it was present
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    /// Toggle a token, returns the new state.
    ///
    /// `force` pins the result the same way `classList.toggle(token, force)` does.
    pub fn toggle(&mut self, token: &str, force: Option<bool>) -> bool {
        let on = force.unwrap_or(!self.contains(token));
        if on {
            self.add(token);
        } else {
            self.remove(token);
        }
        on
    }

    /// Serialized attribute value
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl fmt::Display for DOMTokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_dedups() {
        let list = DOMTokenList::from_string("  btn  btn-primary btn ");
        assert_eq!(list.len(), 2);
        assert_eq!(list.value(), "btn btn-primary");
    }

    #[test]
    fn test_toggle() {
        let mut list = DOMTokenList::new();
        assert!(list.toggle("open", None));
        assert!(list.contains("open"));
        assert!(!list.toggle("open", None));
        assert!(!list.contains("open"));

        assert!(list.toggle("active", Some(true)));
        assert!(list.toggle("active", Some(true)));
        assert_eq!(list.len(), 1);
        assert!(!list.toggle("active", Some(false)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut list = DOMTokenList::from_string("error");
        assert!(list.remove("error"));
        assert!(!list.remove("error"));
    }
}
