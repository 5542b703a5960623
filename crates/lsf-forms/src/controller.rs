//! Contact form controller
//!
//! Binds validation to a `<form>`: required fields revalidate on blur, and on
//! input once they are already marked invalid; submit validates everything,
//! focuses the first offender, and hands valid data to a [`Submitter`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use lsf_a11y::Announcer;
use lsf_dom::{Document, NodeId};
use lsf_runtime::{Event, EventTarget, EventType, ScriptError, Window};

use crate::{Field, FormData, Notifier, Severity, SubmitError, Submitter, ValidationResult, validate};

pub const ERROR_CLASS: &str = "error";
pub const CORRECT_ERRORS: &str = "Please correct the errors in the form";
pub const BUSY_LABEL: &str = "Sending...";
pub const SUBMIT_FAILED: &str = "Sorry, your message could not be sent. Please try again.";

const REQUIRED_FIELDS: &str = "input[required], textarea[required], select[required]";
const RESETTABLE_FIELDS: &str = "input, textarea";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
}

/// Handlers a form needs from its controller
pub trait FormEvents {
    fn on_blur(&self, window: &mut Window, field: NodeId) -> Result<(), ScriptError>;
    fn on_input(&self, window: &mut Window, field: NodeId) -> Result<(), ScriptError>;
    fn on_submit(&self, window: &mut Window, event: &mut Event) -> Result<(), ScriptError>;
}

/// Attach `handlers` to `form` (submit) and each of `fields` (blur, input)
pub fn register_form_events<H: FormEvents + 'static>(
    window: &mut Window,
    form: NodeId,
    fields: &[NodeId],
    handlers: Rc<H>,
) {
    for &field in fields {
        let h = Rc::clone(&handlers);
        window.add_event_listener(EventTarget::Node(field), EventType::Blur, move |w, _| h.on_blur(w, field));
        let h = Rc::clone(&handlers);
        window.add_event_listener(EventTarget::Node(field), EventType::Input, move |w, _| h.on_input(w, field));
    }
    window.add_event_listener(EventTarget::Node(form), EventType::Submit, move |w, e| handlers.on_submit(w, e));
}

pub struct FormController {
    this: Weak<FormController>,
    form: NodeId,
    fields: Vec<NodeId>,
    submit_button: NodeId,
    state: Cell<FormState>,
    /// Button content set aside while the busy label is shown
    idle_content: RefCell<Vec<NodeId>>,
    submitter: Box<dyn Submitter>,
    notifier: Notifier,
    announcer: Announcer,
}

impl FormController {
    /// Look up `#form_id`, collect its required fields and submit button,
    /// and register the form's listeners.
    pub fn attach(
        window: &mut Window,
        form_id: &str,
        submitter: impl Submitter + 'static,
        notifier: Notifier,
        announcer: Announcer,
    ) -> Result<Rc<Self>, ScriptError> {
        let form = window.require_element(form_id)?;
        let doc = window.document();
        let fields = doc.query_selector_all(form, REQUIRED_FIELDS);
        let submit_button = doc
            .query_selector(form, "button[type=submit]")
            .or_else(|| doc.query_selector(form, "button"))
            .ok_or_else(|| ScriptError::MissingElement(format!("#{form_id} button[type=submit]")))?;

        let controller = Rc::new_cyclic(|this| Self {
            this: this.clone(),
            form,
            fields,
            submit_button,
            state: Cell::new(FormState::Idle),
            idle_content: RefCell::new(Vec::new()),
            submitter: Box::new(submitter),
            notifier,
            announcer,
        });
        register_form_events(window, form, &controller.fields, Rc::clone(&controller));
        tracing::debug!(form_id, fields = controller.fields.len(), "form controller attached");
        Ok(controller)
    }

    pub fn form(&self) -> NodeId {
        self.form
    }

    /// Required fields in document order
    pub fn fields(&self) -> &[NodeId] {
        &self.fields
    }

    pub fn submit_button(&self) -> NodeId {
        self.submit_button
    }

    pub fn state(&self) -> FormState {
        self.state.get()
    }

    fn set_state(&self, state: FormState) {
        let previous = self.state.replace(state);
        if previous != state {
            tracing::debug!(?previous, ?state, "form state");
        }
    }

    /// Validate one field and reflect the result in the page
    pub fn validate_field(&self, window: &mut Window, node: NodeId) -> Result<ValidationResult, ScriptError> {
        let doc = window.document_mut();
        let field = Field::read(doc, node).ok_or(ScriptError::NotAnElement(node))?;
        let result = validate(&field);
        show_result(doc, node, &field, &result);
        Ok(result)
    }

    /// Validate every required field without stopping at the first failure.
    /// Returns the first invalid field in document order.
    pub fn validate_all(&self, window: &mut Window) -> Result<Option<NodeId>, ScriptError> {
        let mut first_invalid = None;
        for &node in &self.fields {
            if !self.validate_field(window, node)?.valid && first_invalid.is_none() {
                first_invalid = Some(node);
            }
        }
        Ok(first_invalid)
    }

    /// Empty every text control and clear all error markers.
    /// Checkboxes and radios keep their state.
    pub fn reset(&self, window: &mut Window) {
        let doc = window.document_mut();
        for node in doc.query_selector_all(self.form, RESETTABLE_FIELDS) {
            let resettable = doc
                .element(node)
                .is_some_and(|e| !matches!(e.attr("type"), Some("submit" | "button" | "reset" | "hidden" | "checkbox" | "radio")));
            if resettable {
                doc.set_value(node, "");
            }
        }
        for &node in &self.fields {
            if let Some(field) = Field::read(doc, node) {
                show_result(doc, node, &field, &ValidationResult::ok());
            }
        }
    }

    fn has_errors(&self, doc: &Document) -> bool {
        self.fields.iter().any(|&node| is_marked_invalid(doc, node))
    }

    /// Leave `Invalid` once the user has fixed every flagged field
    fn settle(&self, window: &Window) {
        if self.state() == FormState::Invalid && !self.has_errors(window.document()) {
            self.set_state(FormState::Idle);
        }
    }

    fn begin_submission(&self, window: &mut Window) {
        self.set_state(FormState::Submitting);

        let doc = window.document_mut();
        *self.idle_content.borrow_mut() = take_children(doc, self.submit_button);
        if let Some(button) = doc.element_mut(self.submit_button) {
            button.set_disabled(true);
        }
        doc.set_text_content(self.submit_button, BUSY_LABEL);
        if let Some(form) = doc.element_mut(self.form) {
            form.set_attribute("aria-busy", "true");
        }

        let data = FormData::collect(doc, self.form);
        let this = self.this.clone();
        self.submitter.submit(
            window,
            data,
            Box::new(move |w: &mut Window, outcome| {
                if let Some(controller) = this.upgrade() {
                    controller.finish_submission(w, outcome);
                }
            }),
        );
    }

    fn finish_submission(&self, window: &mut Window, outcome: Result<String, SubmitError>) {
        let doc = window.document_mut();
        take_children(doc, self.submit_button);
        for child in self.idle_content.take() {
            doc.append_child(self.submit_button, child);
        }
        if let Some(button) = doc.element_mut(self.submit_button) {
            button.set_disabled(false);
        }
        if let Some(form) = doc.element_mut(self.form) {
            form.remove_attribute("aria-busy");
        }

        match outcome {
            Ok(confirmation) => {
                tracing::info!("form submitted");
                self.reset(window);
                self.notifier.show(window, &confirmation, Severity::Success);
                self.announcer.announce(window, &confirmation);
            }
            Err(error) => {
                tracing::warn!(%error, "form submission failed");
                self.notifier.show(window, SUBMIT_FAILED, Severity::Error);
                self.announcer.announce(window, SUBMIT_FAILED);
            }
        }
        self.set_state(FormState::Idle);
    }
}

impl FormEvents for FormController {
    fn on_blur(&self, window: &mut Window, field: NodeId) -> Result<(), ScriptError> {
        self.validate_field(window, field)?;
        self.settle(window);
        Ok(())
    }

    fn on_input(&self, window: &mut Window, field: NodeId) -> Result<(), ScriptError> {
        if is_marked_invalid(window.document(), field) {
            self.validate_field(window, field)?;
            self.settle(window);
        }
        Ok(())
    }

    fn on_submit(&self, window: &mut Window, event: &mut Event) -> Result<(), ScriptError> {
        event.prevent_default();
        if self.state() == FormState::Submitting {
            tracing::debug!("submit ignored while a submission is in flight");
            return Ok(());
        }

        self.set_state(FormState::Validating);
        match self.validate_all(window)? {
            Some(first_invalid) => {
                self.set_state(FormState::Invalid);
                window.focus(first_invalid);
                self.announcer.announce(window, CORRECT_ERRORS);
            }
            None => self.begin_submission(window),
        }
        Ok(())
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("form", &self.form)
            .field("fields", &self.fields)
            .field("submit_button", &self.submit_button)
            .field("state", &self.state.get())
            .finish_non_exhaustive()
    }
}

/// Detach and return the children of `node`, in order
fn take_children(doc: &mut Document, node: NodeId) -> Vec<NodeId> {
    let children: Vec<NodeId> = doc.tree().children(node).map(|(child, _)| child).collect();
    for &child in &children {
        doc.tree_mut().detach(child);
    }
    children
}

fn is_marked_invalid(doc: &Document, node: NodeId) -> bool {
    doc.element(node).is_some_and(|e| e.class_list.contains(ERROR_CLASS))
}

/// Mark or clear the field and overwrite its error slot
fn show_result(doc: &mut Document, node: NodeId, field: &Field, result: &ValidationResult) {
    if let Some(elem) = doc.element_mut(node) {
        if result.valid {
            elem.class_list.remove(ERROR_CLASS);
            elem.remove_attribute("aria-invalid");
        } else {
            elem.class_list.add(ERROR_CLASS);
            elem.set_attribute("aria-invalid", "true");
        }
    }
    match doc.get_element_by_id(&field.error_slot_id()) {
        Some(slot) => doc.set_text_content(slot, &result.message),
        None => tracing::trace!(field = %field.name, "no error slot"),
    }
}
