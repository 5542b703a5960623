//! Burger navigation

use lsf_dom::{Document, NodeId};
use lsf_runtime::{EventTarget, EventType, ScriptError, Window};

pub const BURGER_ID: &str = "nav-burger";
pub const MENU_ID: &str = "nav-menu";

#[derive(Debug, Clone, Copy)]
pub struct Navigation {
    burger: NodeId,
    menu: NodeId,
}

impl Navigation {
    /// Wire the burger menu. Pages without `#nav-burger` get nothing (`Ok(None)`).
    pub fn bind(window: &mut Window) -> Result<Option<Self>, ScriptError> {
        let Some(burger) = window.document().get_element_by_id(BURGER_ID) else {
            tracing::debug!("no burger menu on this page");
            return Ok(None);
        };
        let menu = window.require_element(MENU_ID)?;
        let nav = Self { burger, menu };
        let links = {
            let doc = window.document();
            doc.query_selector_all(doc.body(), ".nav-link")
        };

        let n = nav;
        window.add_event_listener(EventTarget::Node(burger), EventType::Click, move |w, e| {
            e.stop_propagation();
            n.toggle(w.document_mut());
            Ok(())
        });

        let n = nav;
        window.add_event_listener(EventTarget::Document, EventType::Click, move |w, e| {
            let Some(target) = e.target_node() else { return Ok(()) };
            let doc = w.document();
            if !doc.contains(n.menu, target) && !doc.contains(n.burger, target) {
                n.close(w.document_mut());
            }
            Ok(())
        });

        let n = nav;
        window.add_event_listener(EventTarget::Document, EventType::KeyDown, move |w, e| {
            if e.key.as_deref() == Some("Escape") && n.is_open(w.document()) {
                n.close(w.document_mut());
                w.focus(n.burger);
            }
            Ok(())
        });

        for link in links {
            let n = nav;
            window.add_event_listener(EventTarget::Node(link), EventType::Click, move |w, _| {
                n.close(w.document_mut());
                Ok(())
            });
        }

        tracing::debug!("burger navigation bound");
        Ok(Some(nav))
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.element(self.menu).is_some_and(|e| e.class_list.contains("open"))
    }

    pub fn burger(&self) -> NodeId {
        self.burger
    }

    pub fn menu(&self) -> NodeId {
        self.menu
    }

    pub fn toggle(&self, doc: &mut Document) {
        let expanded = doc.element(self.burger).and_then(|e| e.attr("aria-expanded")) == Some("true");
        self.set_open(doc, !expanded);
    }

    pub fn close(&self, doc: &mut Document) {
        self.set_open(doc, false);
    }

    fn set_open(&self, doc: &mut Document, open: bool) {
        if let Some(menu) = doc.element_mut(self.menu) {
            menu.class_list.toggle("open", Some(open));
        }
        if let Some(burger) = doc.element_mut(self.burger) {
            burger.set_attribute("aria-expanded", if open { "true" } else { "false" });
            burger.class_list.toggle("active", Some(open));
        }
    }
}
