//! Simple selectors
//!
//! Enough of the selector grammar for the site scripts: type, `.class`,
//! `#id`, `[attr]`, `[attr=value]`, compounds of those, and comma lists.
//! Combinators are not supported.

use crate::ElementData;

/// One component of a compound selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Universal,
    Tag(String),
    Class(String),
    Id(String),
    Attribute { name: String, value: Option<String> },
}

impl SimpleSelector {
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => element.tag_name() == tag,
            Self::Class(class) => element.class_list.contains(class),
            Self::Id(id) => element.id() == Some(id.as_str()),
            Self::Attribute { name, value: None } => element.has_attribute(name),
            Self::Attribute { name, value: Some(expected) } => {
                element.get_attribute(name).as_deref() == Some(expected.as_str())
            }
        }
    }
}

/// Parsed selector list. An element matches if any compound matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Vec<SimpleSelector>>,
}

impl Selector {
    /// Parse a selector list; `None` for empty input or unsupported syntax
    pub fn parse(input: &str) -> Option<Self> {
        let alternatives = input
            .split(',')
            .map(parse_compound)
            .collect::<Option<Vec<_>>>()?;
        Some(Self { alternatives })
    }

    pub fn matches(&self, element: &ElementData) -> bool {
        self.alternatives
            .iter()
            .any(|compound| compound.iter().all(|s| s.matches(element)))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<String> {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    (!ident.is_empty()).then_some(ident)
}

fn parse_compound(input: &str) -> Option<Vec<SimpleSelector>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    let mut chars = input.chars().peekable();

    if chars.peek() == Some(&'*') {
        chars.next();
        parts.push(SimpleSelector::Universal);
    } else if chars.peek().is_some_and(|c| is_ident_char(*c)) {
        parts.push(SimpleSelector::Tag(take_ident(&mut chars)?.to_ascii_lowercase()));
    }

    while let Some(c) = chars.next() {
        match c {
            '.' => parts.push(SimpleSelector::Class(take_ident(&mut chars)?)),
            '#' => parts.push(SimpleSelector::Id(take_ident(&mut chars)?)),
            '[' => {
                let body: String = chars.by_ref().take_while(|&c| c != ']').collect();
                parts.push(parse_attribute(&body)?);
            }
            _ => return None,
        }
    }
    Some(parts)
}

fn parse_attribute(body: &str) -> Option<SimpleSelector> {
    match body.split_once('=') {
        None => {
            let name = body.trim();
            (!name.is_empty()).then(|| SimpleSelector::Attribute {
                name: name.to_ascii_lowercase(),
                value: None,
            })
        }
        Some((name, value)) => {
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            Some(SimpleSelector::Attribute {
                name: name.to_ascii_lowercase(),
                value: Some(value.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, ty: &str, required: bool) -> ElementData {
        let mut elem = ElementData::new("input");
        elem.set_attribute("name", name);
        elem.set_attribute("type", ty);
        if required {
            elem.set_attribute("required", "");
        }
        elem
    }

    #[test]
    fn test_simple_selector_parse() {
        let sel = Selector::parse("div").unwrap();
        assert_eq!(sel.alternatives, vec![vec![SimpleSelector::Tag("div".into())]]);
        assert!(Selector::parse(".nav-link").is_some());
        assert!(Selector::parse("#contact-form").is_some());
        assert!(Selector::parse("*").is_some());
        assert!(Selector::parse("").is_none());
        assert!(Selector::parse("div p").is_none());
    }

    #[test]
    fn test_compound_attribute_selector() {
        let sel = Selector::parse("input[required]").unwrap();
        assert!(sel.matches(&input("email", "email", true)));
        assert!(!sel.matches(&input("phone", "tel", false)));

        let sel = Selector::parse(r#"input[type="email"]"#).unwrap();
        assert!(sel.matches(&input("email", "email", false)));
        assert!(!sel.matches(&input("name", "text", false)));
    }

    #[test]
    fn test_selector_list() {
        let sel = Selector::parse("input[required], textarea[required]").unwrap();
        let mut textarea = ElementData::new("textarea");
        textarea.set_attribute("required", "");
        assert!(sel.matches(&textarea));
        assert!(!sel.matches(&ElementData::new("select")));
    }

    #[test]
    fn test_class_and_id() {
        let mut elem = ElementData::new("button");
        elem.set_attribute("class", "btn-primary rdv-btn");
        elem.set_attribute("id", "book-0");
        assert!(Selector::parse("button.rdv-btn").unwrap().matches(&elem));
        assert!(Selector::parse("#book-0").unwrap().matches(&elem));
        assert!(!Selector::parse(".close").unwrap().matches(&elem));
    }
}
