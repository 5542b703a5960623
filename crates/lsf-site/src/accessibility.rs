//! High-contrast and large-text toggles

use std::cell::Cell;
use std::rc::Rc;

use lsf_a11y::{AccessibilityPreferences, Announcer, PreferenceFlag};
use lsf_dom::Document;
use lsf_runtime::{EventTarget, EventType, ScriptError, Window};

/// Id of the button controlling `flag`
pub fn toggle_id(flag: PreferenceFlag) -> &'static str {
    match flag {
        PreferenceFlag::HighContrast => "high-contrast-toggle",
        PreferenceFlag::LargeText => "large-text-toggle",
    }
}

/// Restore saved preferences, apply them, and wire the toggle buttons that
/// exist on the page. Returns the live preferences.
pub fn bind(window: &mut Window, announcer: Announcer) -> Rc<Cell<AccessibilityPreferences>> {
    let prefs = AccessibilityPreferences::load(window.local_storage());
    prefs.apply(window.document_mut());
    reflect_pressed(window.document_mut(), &prefs);
    let shared = Rc::new(Cell::new(prefs));

    for flag in PreferenceFlag::ALL {
        let Some(button) = window.document().get_element_by_id(toggle_id(flag)) else {
            tracing::debug!(toggle = toggle_id(flag), "toggle not on this page");
            continue;
        };
        let prefs = Rc::clone(&shared);
        window.add_event_listener(EventTarget::Node(button), EventType::Click, move |w, _| {
            let mut current = prefs.get();
            let on = current.toggle(flag);
            prefs.set(current);

            current.apply(w.document_mut());
            reflect_pressed(w.document_mut(), &current);
            announcer.announce(w, &format!("{} {}", flag.label(), if on { "enabled" } else { "disabled" }));
            tracing::info!(preference = flag.storage_key(), on, "accessibility preference changed");
            current.save(w.local_storage_mut())?;
            Ok(())
        });
    }
    shared
}

fn reflect_pressed(doc: &mut Document, prefs: &AccessibilityPreferences) {
    for flag in PreferenceFlag::ALL {
        let Some(button) = doc.get_element_by_id(toggle_id(flag)) else { continue };
        if let Some(elem) = doc.element_mut(button) {
            elem.set_attribute("aria-pressed", if prefs.get(flag) { "true" } else { "false" });
        }
    }
}
