//! Booking modal

use std::rc::Rc;

use lsf_dom::{Document, NodeId};
use lsf_runtime::{Event, EventTarget, EventType, ScriptError, Window};

use crate::Practitioner;

pub const MODAL_ID: &str = "rdv-modal";
pub const NAME_ID: &str = "modal-praticien-name";

/// `#rdv-modal`, filled from the card whose booking button was clicked
#[derive(Debug)]
pub struct BookingModal {
    modal: NodeId,
    name: NodeId,
    image: Option<NodeId>,
    info: Option<NodeId>,
    practitioners: Rc<[Practitioner]>,
}

impl BookingModal {
    /// Wire every `.rdv-btn`, the close control and the backdrop
    pub fn bind(window: &mut Window, practitioners: Rc<[Practitioner]>) -> Result<Rc<Self>, ScriptError> {
        let modal = window.require_element(MODAL_ID)?;
        let name = window.require_element(NAME_ID)?;
        let doc = window.document();
        let close = doc
            .query_selector(modal, ".close")
            .ok_or_else(|| ScriptError::MissingElement(format!("#{MODAL_ID} .close")))?;
        let details = doc.query_selector(modal, ".modal-praticien");
        let image = details.and_then(|d| doc.query_selector(d, "img"));
        let info = details.and_then(|d| doc.query_selector(d, "p"));
        let buttons = doc.query_selector_all(doc.body(), ".rdv-btn");

        let this = Rc::new(Self { modal, name, image, info, practitioners });

        for button in buttons {
            let m = Rc::clone(&this);
            window.add_event_listener(EventTarget::Node(button), EventType::Click, move |w, e| m.on_book(w, e));
        }
        let m = Rc::clone(&this);
        window.add_event_listener(EventTarget::Node(close), EventType::Click, move |w, _| {
            m.hide(w.document_mut());
            Ok(())
        });
        let m = Rc::clone(&this);
        window.add_event_listener(EventTarget::Window, EventType::Click, move |w, e| {
            if e.target == EventTarget::Node(m.modal) {
                m.hide(w.document_mut());
            }
            Ok(())
        });
        Ok(this)
    }

    fn on_book(&self, window: &mut Window, event: &mut Event) -> Result<(), ScriptError> {
        let EventTarget::Node(button) = event.current_target else {
            return Ok(());
        };
        let raw = window
            .document()
            .element(button)
            .and_then(|e| e.data("index"))
            .unwrap_or_default()
            .to_string();
        let practitioner = raw
            .parse::<usize>()
            .ok()
            .and_then(|i| self.practitioners.get(i))
            .ok_or_else(|| ScriptError::InvalidData { name: "data-index".into(), value: raw.clone() })?;
        self.open(window.document_mut(), practitioner);
        Ok(())
    }

    /// Fill in `practitioner` and show the modal
    pub fn open(&self, doc: &mut Document, practitioner: &Practitioner) {
        doc.set_text_content(self.name, &practitioner.name);
        if let Some(img) = self.image {
            if let Some(elem) = doc.element_mut(img) {
                match &practitioner.image {
                    Some(src) => elem.set_attribute("src", src),
                    None => {
                        elem.remove_attribute("src");
                    }
                }
                elem.set_attribute("alt", &practitioner.name);
            }
        }
        if let Some(info) = self.info {
            doc.set_text_content(info, &practitioner.booking_summary());
        }
        self.set_display(doc, "flex");
        tracing::debug!(practitioner = %practitioner.name, "booking modal opened");
    }

    pub fn hide(&self, doc: &mut Document) {
        self.set_display(doc, "none");
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.element(self.modal).and_then(|e| e.style.display()) == Some("flex")
    }

    pub fn node(&self) -> NodeId {
        self.modal
    }

    fn set_display(&self, doc: &mut Document, display: &str) {
        if let Some(elem) = doc.element_mut(self.modal) {
            elem.style.set_property("display", display);
        }
    }
}
