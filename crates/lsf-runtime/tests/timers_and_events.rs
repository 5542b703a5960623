//! Window-level behaviour shared by every script on the page

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lsf_dom::Document;
use lsf_runtime::{EventTarget, EventType, ScriptError, Storage, Window};

#[test]
fn test_cleared_timer_never_fires() {
    let mut window = Window::new(Document::default());
    let fired = Rc::new(RefCell::new(0));

    let count = Rc::clone(&fired);
    let id = window.set_timeout(Duration::from_millis(5000), move |_| *count.borrow_mut() += 1);
    window.advance(Duration::from_millis(100));
    assert!(window.clear_timeout(id));

    window.run_until_idle();
    assert_eq!(*fired.borrow(), 0);
    assert!(!window.is_timer_pending(id));
}

#[test]
fn test_run_until_idle_drains_chains() {
    let mut window = Window::new(Document::default());
    let order = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&order);
    window.set_timeout(Duration::from_millis(2000), move |w| {
        log.borrow_mut().push(w.now());
        let log = Rc::clone(&log);
        w.set_timeout(Duration::from_millis(5000), move |w| log.borrow_mut().push(w.now()));
    });

    assert_eq!(window.run_until_idle(), 2);
    assert_eq!(
        *order.borrow(),
        vec![Duration::from_millis(2000), Duration::from_millis(7000)]
    );
}

#[test]
fn test_keydown_targets_focused_element_and_bubbles_to_document() {
    let mut doc = Document::default();
    let body = doc.body();
    let burger = doc.create_element("button");
    doc.append_child(body, burger);
    let mut window = Window::new(doc);

    let keys = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&keys);
    window.add_event_listener(EventTarget::Document, EventType::KeyDown, move |_, event| {
        sink.borrow_mut().push((event.target_node(), event.key.clone()));
        Ok(())
    });

    window.keydown("Tab");
    window.focus(burger);
    window.keydown("Escape");

    assert_eq!(
        *keys.borrow(),
        vec![
            (Some(body), Some("Tab".to_string())),
            (Some(burger), Some("Escape".to_string())),
        ]
    );
}

#[test]
fn test_error_handler_may_touch_the_document() {
    let mut window = Window::with_storage(Document::default(), Storage::session());
    window.set_error_handler(|w, error| {
        let body = w.document().body();
        w.document_mut().set_text_content(body, &error.to_string());
    });
    window.add_event_listener(EventTarget::Document, EventType::DomContentLoaded, |w, _| {
        w.require_element("praticiensGrid").map(|_| ())
    });

    window.content_loaded();
    let body = window.document().body();
    assert_eq!(window.document().text_content(body), "element not found: #praticiensGrid");
    assert!(matches!(
        window.require_element("missing"),
        Err(ScriptError::MissingElement(_))
    ));
}
