//! Transient notifications
//!
//! Every notification is an independent element appended to `<body>` with
//! its own auto-dismiss timer, so several can be on screen at once. Closing
//! one by hand cancels its timer and lets the slide-out run before removal.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use lsf_dom::NodeId;
use lsf_runtime::{EventTarget, EventType, TimerId, Window};

pub const DEFAULT_DISPLAY_TIME: Duration = Duration::from_millis(5000);
pub const DEFAULT_EXIT_TIME: Duration = Duration::from_millis(300);

pub const STYLE_ELEMENT_ID: &str = "notification-styles";
pub const CLOSE_LABEL: &str = "Close notification";
const SLIDE_OUT_CLASS: &str = "slide-out";

const NOTIFICATION_CSS: &str = "\
.notification { position: fixed; top: 20px; right: 20px; z-index: 10000; max-width: 400px; \
padding: 16px 20px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); \
display: flex; align-items: center; gap: 12px; animation: slideIn 0.3s ease-out; }
.notification-success { background: #10b981; color: white; }
.notification-error { background: #ef4444; color: white; }
.notification-info { background: #3b82f6; color: white; }
.notification-close { background: none; border: none; color: inherit; font-size: 20px; cursor: pointer; }
.notification.slide-out { animation: slideOut 0.3s ease-in forwards; }
@keyframes slideIn { from { transform: translateX(100%); opacity: 0; } to { transform: translateX(0); opacity: 1; } }
@keyframes slideOut { from { transform: translateX(0); opacity: 1; } to { transform: translateX(100%); opacity: 0; } }
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Errors interrupt (`alert`), everything else waits its turn (`status`)
    pub fn role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            _ => "status",
        }
    }
}

/// Handle to a shown notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(NodeId);

impl NotificationId {
    /// The notification's root element
    pub fn node(self) -> NodeId {
        self.0
    }
}

#[derive(Debug)]
struct Entry {
    auto_dismiss: Option<TimerId>,
    closing: bool,
}

/// Cheap to clone; clones share the set of open notifications
#[derive(Clone)]
pub struct Notifier {
    open: Rc<RefCell<HashMap<NotificationId, Entry>>>,
    display_time: Duration,
    exit_time: Duration,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_timings(DEFAULT_DISPLAY_TIME, DEFAULT_EXIT_TIME)
    }

    pub fn with_timings(display_time: Duration, exit_time: Duration) -> Self {
        Self {
            open: Rc::new(RefCell::new(HashMap::new())),
            display_time,
            exit_time,
        }
    }

    /// Show `message` and schedule its auto-dismissal
    pub fn show(&self, window: &mut Window, message: &str, severity: Severity) -> NotificationId {
        ensure_styles(window);

        let doc = window.document_mut();
        let body = doc.body();
        let root = doc.create_element("div");
        if let Some(elem) = doc.element_mut(root) {
            elem.class_list.add("notification");
            elem.class_list.add(&format!("notification-{}", severity.as_str()));
            elem.set_attribute("role", severity.role());
        }

        let text = doc.create_element("span");
        if let Some(elem) = doc.element_mut(text) {
            elem.class_list.add("notification-message");
        }
        doc.set_text_content(text, message);
        doc.append_child(root, text);

        let close = doc.create_element("button");
        if let Some(elem) = doc.element_mut(close) {
            elem.set_attribute("type", "button");
            elem.set_attribute("aria-label", CLOSE_LABEL);
            elem.class_list.add("notification-close");
        }
        doc.set_text_content(close, "×");
        doc.append_child(root, close);
        doc.append_child(body, root);

        let id = NotificationId(root);
        let notifier = self.clone();
        window.add_event_listener(EventTarget::Node(close), EventType::Click, move |w, _| {
            notifier.close(w, id);
            Ok(())
        });

        let notifier = self.clone();
        let timer = window.set_timeout(self.display_time, move |w| notifier.expire(w, id));
        self.open.borrow_mut().insert(id, Entry { auto_dismiss: Some(timer), closing: false });

        tracing::debug!(severity = severity.as_str(), message, node = %root, "notification shown");
        id
    }

    /// Start the slide-out. Returns `false` if already closing or gone.
    pub fn close(&self, window: &mut Window, id: NotificationId) -> bool {
        let timer = {
            let mut open = self.open.borrow_mut();
            let Some(entry) = open.get_mut(&id) else { return false };
            if entry.closing {
                return false;
            }
            entry.closing = true;
            entry.auto_dismiss.take()
        };
        if let Some(timer) = timer {
            window.clear_timeout(timer);
        }
        if let Some(elem) = window.document_mut().element_mut(id.node()) {
            elem.class_list.add(SLIDE_OUT_CLASS);
        }

        let notifier = self.clone();
        window.set_timeout(self.exit_time, move |w| notifier.remove(w, id));
        true
    }

    pub fn is_open(&self, id: NotificationId) -> bool {
        self.open.borrow().contains_key(&id)
    }

    pub fn open_count(&self) -> usize {
        self.open.borrow().len()
    }

    fn expire(&self, window: &mut Window, id: NotificationId) {
        let live = self.open.borrow().get(&id).is_some_and(|e| !e.closing);
        if live {
            self.remove(window, id);
        }
    }

    fn remove(&self, window: &mut Window, id: NotificationId) {
        if self.open.borrow_mut().remove(&id).is_none() {
            return;
        }
        if window.document().is_connected(id.node()) {
            window.remove_node(id.node());
        }
        tracing::trace!(node = %id.node(), "notification removed");
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("open", &self.open.borrow().len())
            .field("display_time", &self.display_time)
            .field("exit_time", &self.exit_time)
            .finish()
    }
}

/// Inject the shared stylesheet into `<head>` once per document
fn ensure_styles(window: &mut Window) {
    let doc = window.document_mut();
    if doc.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let head = doc.head();
    let style = doc.create_element("style");
    if let Some(elem) = doc.element_mut(style) {
        elem.set_attribute("id", STYLE_ELEMENT_ID);
    }
    doc.set_text_content(style, NOTIFICATION_CSS);
    doc.append_child(head, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsf_dom::Document;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn close_button(window: &Window, id: NotificationId) -> NodeId {
        window.document().query_selector(id.node(), ".notification-close").unwrap()
    }

    #[test]
    fn test_show_builds_markup() {
        let mut window = Window::new(Document::default());
        let notifier = Notifier::new();
        let id = notifier.show(&mut window, "Saved", Severity::Success);

        let doc = window.document();
        let elem = doc.element(id.node()).unwrap();
        assert!(elem.class_list.contains("notification"));
        assert!(elem.class_list.contains("notification-success"));
        assert_eq!(elem.attr("role"), Some("status"));
        assert_eq!(doc.text_content(id.node()), "Saved×");
        let close = doc.element(close_button(&window, id)).unwrap();
        assert_eq!(close.attr("aria-label"), Some(CLOSE_LABEL));
    }

    #[test]
    fn test_error_role_is_alert() {
        let mut window = Window::new(Document::default());
        let id = Notifier::new().show(&mut window, "Boom", Severity::Error);
        let elem = window.document().element(id.node()).unwrap();
        assert_eq!(elem.attr("role"), Some("alert"));
    }

    #[test]
    fn test_styles_injected_once() {
        let mut window = Window::new(Document::default());
        let notifier = Notifier::new();
        notifier.show(&mut window, "one", Severity::Info);
        notifier.show(&mut window, "two", Severity::Info);
        let doc = window.document();
        assert_eq!(doc.query_selector_all(doc.head(), "style#notification-styles").len(), 1);
    }

    #[test]
    fn test_auto_dismiss() {
        let mut window = Window::new(Document::default());
        let notifier = Notifier::new();
        let id = notifier.show(&mut window, "Hi", Severity::Info);

        window.advance(ms(4999));
        assert!(notifier.is_open(id));
        window.advance(ms(1));
        assert!(!notifier.is_open(id));
        assert!(!window.document().is_connected(id.node()));
    }

    #[test]
    fn test_manual_close_slides_out() {
        let mut window = Window::new(Document::default());
        let notifier = Notifier::new();
        let id = notifier.show(&mut window, "Hi", Severity::Info);

        window.advance(ms(100));
        let close = close_button(&window, id);
        window.click(close);

        let elem = window.document().element(id.node()).unwrap();
        assert!(elem.class_list.contains("slide-out"));
        // auto-dismiss cancelled, only the exit timer remains
        assert_eq!(window.pending_timers(), 1);

        window.advance(ms(299));
        assert!(window.document().is_connected(id.node()));
        window.advance(ms(1));
        assert!(!window.document().is_connected(id.node()));
        assert_eq!(window.run_until_idle(), 0);
    }

    #[test]
    fn test_close_twice_is_noop() {
        let mut window = Window::new(Document::default());
        let notifier = Notifier::new();
        let id = notifier.show(&mut window, "Hi", Severity::Info);
        assert!(notifier.close(&mut window, id));
        assert!(!notifier.close(&mut window, id));
        assert_eq!(window.pending_timers(), 1);
        window.run_until_idle();
        assert!(!notifier.close(&mut window, id));
    }

    #[test]
    fn test_stacked_notifications_expire_independently() {
        let mut window = Window::new(Document::default());
        let notifier = Notifier::new();
        let first = notifier.show(&mut window, "first", Severity::Info);
        window.advance(ms(2000));
        let second = notifier.show(&mut window, "second", Severity::Error);
        assert_eq!(notifier.open_count(), 2);

        window.advance(ms(3000));
        assert!(!notifier.is_open(first));
        assert!(notifier.is_open(second));
        window.advance(ms(2000));
        assert_eq!(notifier.open_count(), 0);
    }
}
