//! Form submission
//!
//! The site has no backend yet; [`SubmissionSimulator`] stands in for one by
//! answering after a fixed delay on the window's timer queue.

use std::time::Duration;

use lsf_dom::{Document, NodeId};
use lsf_runtime::Window;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Confirmation shown after a successful submission
pub const THANK_YOU: &str = "Thank you for your message! We will get back to you within 24 hours.";

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission endpoint unreachable: {0}")]
    Unreachable(String),
}

/// Completion callback. Receives the confirmation text or the failure.
pub type SubmitCallback = Box<dyn FnOnce(&mut Window, Result<String, SubmitError>)>;

/// Sends collected form data somewhere and reports back exactly once
pub trait Submitter {
    fn submit(&self, window: &mut Window, data: FormData, done: SubmitCallback);
}

/// Succeeds with [`THANK_YOU`] after a delay
#[derive(Debug, Clone, Copy)]
pub struct SubmissionSimulator {
    delay: Duration,
}

impl SubmissionSimulator {
    pub fn new() -> Self {
        Self { delay: DEFAULT_SUBMIT_DELAY }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SubmissionSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Submitter for SubmissionSimulator {
    fn submit(&self, window: &mut Window, data: FormData, done: SubmitCallback) {
        tracing::info!(fields = data.len(), delay_ms = self.delay.as_millis() as u64, "simulating submission");
        window.set_timeout(self.delay, move |w| done(w, Ok(THANK_YOU.to_string())));
    }
}

/// Name/value pairs of a form's successful controls, in tree order.
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect named, enabled controls under `form`. Buttons are skipped;
    /// checkboxes and radios count only when `checked`, with `"on"` as the
    /// default value.
    pub fn collect(document: &Document, form: NodeId) -> Self {
        let mut data = Self::new();
        for node in document.query_selector_all(form, "input[name], textarea[name], select[name]") {
            let Some(elem) = document.element(node) else { continue };
            let Some(name) = elem.attr("name") else { continue };
            if elem.is_disabled() {
                continue;
            }
            match elem.attr("type") {
                Some("submit" | "button" | "reset") => {}
                Some("checkbox" | "radio") => {
                    if elem.has_attribute("checked") {
                        data.append(name, elem.attr("value").unwrap_or("on"));
                    }
                }
                _ => data.append(name, elem.value()),
            }
        }
        data
    }

    pub fn append(&mut self, name: &str, value: &str) {
        self.entries.push((name.to_string(), value.to_string()));
    }

    /// First value for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FormData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn contact_form(doc: &mut Document) -> NodeId {
        let body = doc.body();
        let form = doc.create_element("form");
        doc.append_child(body, form);
        for (tag, name, value) in [("input", "name", "Ana"), ("input", "email", "a@b.co"), ("textarea", "message", "Hello there")] {
            let control = doc.create_element(tag);
            doc.element_mut(control).unwrap().set_attribute("name", name);
            doc.set_value(control, value);
            doc.append_child(form, control);
        }
        let button = doc.create_element("button");
        doc.element_mut(button).unwrap().set_attribute("type", "submit");
        doc.append_child(form, button);
        form
    }

    #[test]
    fn test_collect_in_tree_order() {
        let mut doc = Document::default();
        let form = contact_form(&mut doc);
        let data = FormData::collect(&doc, form);
        assert_eq!(data.len(), 3);
        assert_eq!(data.get("email"), Some("a@b.co"));
        let names: Vec<_> = data.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["name", "email", "message"]);
    }

    #[test]
    fn test_collect_skips_unchecked_boxes() {
        let mut doc = Document::default();
        let form = contact_form(&mut doc);
        for (name, value, checked) in [("newsletter", None, true), ("rgpd", Some("yes"), false), ("canal", Some("video"), true)] {
            let input = doc.create_element("input");
            let elem = doc.element_mut(input).unwrap();
            elem.set_attribute("type", if name == "canal" { "radio" } else { "checkbox" });
            elem.set_attribute("name", name);
            if let Some(value) = value {
                elem.set_attribute("value", value);
            }
            if checked {
                elem.set_attribute("checked", "");
            }
            doc.append_child(form, input);
        }

        let data = FormData::collect(&doc, form);
        assert_eq!(data.get("newsletter"), Some("on"));
        assert_eq!(data.get("rgpd"), None);
        assert_eq!(data.get("canal"), Some("video"));
        assert_eq!(data.len(), 5);
    }

    #[test]
    fn test_serializes_as_object() {
        let mut data = FormData::new();
        data.append("name", "Ana");
        data.append("email", "a@b.co");
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"name":"Ana","email":"a@b.co"}"#);
    }

    #[test]
    fn test_simulator_completes_after_delay() {
        let mut window = Window::new(Document::default());
        let outcome = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&outcome);
        SubmissionSimulator::new().submit(
            &mut window,
            FormData::new(),
            Box::new(move |_: &mut Window, result: Result<String, SubmitError>| *sink.borrow_mut() = Some(result.map_err(|e| e.to_string()))),
        );

        window.advance(Duration::from_millis(1999));
        assert!(outcome.borrow().is_none());
        window.advance(Duration::from_millis(1));
        assert_eq!(*outcome.borrow(), Some(Ok(THANK_YOU.to_string())));
    }
}
