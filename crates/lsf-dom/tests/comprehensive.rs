//! Comprehensive tests for lsf-dom
//!
//! Builds the contact-form structure the site scripts rely on and checks
//! lookups, selectors and removal against it.

use lsf_dom::{Document, NodeId};

fn element(doc: &mut Document, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let id = doc.create_element(tag);
    let elem = doc.element_mut(id).unwrap();
    for (name, value) in attrs {
        elem.set_attribute(name, value);
    }
    doc.append_child(parent, id);
    id
}

fn contact_form(doc: &mut Document) -> (NodeId, Vec<NodeId>, NodeId) {
    let body = doc.body();
    let form = element(doc, body, "form", &[("id", "contact-form")]);
    let name = element(doc, form, "input", &[("id", "name"), ("name", "name"), ("required", "")]);
    element(doc, form, "span", &[("id", "name-error"), ("class", "error-message")]);
    let email = element(
        doc,
        form,
        "input",
        &[("id", "email"), ("name", "email"), ("type", "email"), ("required", "")],
    );
    element(doc, form, "span", &[("id", "email-error"), ("class", "error-message")]);
    element(doc, form, "input", &[("id", "phone"), ("name", "phone"), ("type", "tel")]);
    let message = element(doc, form, "textarea", &[("id", "message"), ("name", "message"), ("required", "")]);
    element(doc, form, "span", &[("id", "message-error"), ("class", "error-message")]);
    let submit = element(doc, form, "button", &[("type", "submit")]);
    doc.set_text_content(submit, "Envoyer");
    (form, vec![name, email, message], submit)
}

#[test]
fn test_required_fields_in_tree_order() {
    let mut doc = Document::default();
    let (form, required, _) = contact_form(&mut doc);

    let found = doc.query_selector_all(form, "input[required], textarea[required]");
    assert_eq!(found, required);
}

#[test]
fn test_submit_button_lookup() {
    let mut doc = Document::default();
    let (form, _, submit) = contact_form(&mut doc);

    assert_eq!(doc.query_selector(form, "button[type=submit]"), Some(submit));
    assert_eq!(doc.text_content(submit), "Envoyer");
}

#[test]
fn test_error_slots_by_id() {
    let mut doc = Document::default();
    contact_form(&mut doc);

    for field in ["name", "email", "message"] {
        let slot = doc.get_element_by_id(&format!("{field}-error"));
        assert!(slot.is_some(), "missing error slot for {field}");
    }
    assert_eq!(doc.get_element_by_id("phone-error"), None);
    assert_eq!(doc.query_selector_all(doc.body(), ".error-message").len(), 3);
}

#[test]
fn test_removed_subtree_is_unreachable() {
    let mut doc = Document::default();
    let (form, required, _) = contact_form(&mut doc);
    doc.focus(required[0]);

    doc.remove(form);
    assert!(!doc.is_connected(form));
    assert!(!doc.is_connected(required[0]));
    assert_eq!(doc.active_element(), None);
    assert!(doc.query_selector_all(doc.body(), "input").is_empty());
}

#[test]
fn test_live_values_do_not_leak_between_fields() {
    let mut doc = Document::default();
    let (_, required, _) = contact_form(&mut doc);

    doc.set_value(required[0], "Alice");
    assert_eq!(doc.value(required[0]), Some("Alice"));
    assert_eq!(doc.value(required[1]), Some(""));
}
