//! Window - the global object scripts run against

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use lsf_dom::{Document, NodeId};

use crate::events::ListenerRegistry;
use crate::{Event, EventTarget, EventType, ListenerId, ScriptError, Storage, TimerId, TimerQueue};

/// Last-resort handler for errors escaping listeners and timers
pub type ErrorHandler = Rc<dyn Fn(&mut Window, &ScriptError)>;

/// Upper bound on timer tasks run by one `run_until_idle` call
const MAX_IDLE_TASKS: usize = 10_000;

/// Browsing context: the document plus everything scripts reach through `window`
pub struct Window {
    document: Document,
    timers: TimerQueue<Window>,
    listeners: ListenerRegistry,
    local_storage: Storage,
    error_handler: Option<ErrorHandler>,
}

impl Window {
    /// Window with in-memory storage
    pub fn new(document: Document) -> Self {
        Self::with_storage(document, Storage::session())
    }

    pub fn with_storage(document: Document, local_storage: Storage) -> Self {
        Self {
            document,
            timers: TimerQueue::new(),
            listeners: ListenerRegistry::default(),
            local_storage,
            error_handler: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn local_storage(&self) -> &Storage {
        &self.local_storage
    }

    pub fn local_storage_mut(&mut self) -> &mut Storage {
        &mut self.local_storage
    }

    /// Look up an element id, failing with a script error when absent
    pub fn require_element(&self, id: &str) -> Result<NodeId, ScriptError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| ScriptError::MissingElement(format!("#{id}")))
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    /// Virtual time since the window was created
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn set_timeout(&mut self, delay: Duration, task: impl FnOnce(&mut Window) + 'static) -> TimerId {
        self.timers.set_timeout(delay, Box::new(task))
    }

    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        self.timers.clear_timeout(id)
    }

    pub fn is_timer_pending(&self, id: TimerId) -> bool {
        self.timers.is_pending(id)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn next_timer_due(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    /// Fast-forward the clock by `by`, running every timer that falls due,
    /// including ones scheduled by the tasks themselves. Returns the number
    /// of tasks run.
    pub fn advance(&mut self, by: Duration) -> usize {
        let target = self.timers.now() + by;
        let mut ran = 0;
        while let Some((id, task)) = self.timers.pop_due(target) {
            tracing::trace!(?id, now = ?self.timers.now(), "running timer");
            task(self);
            ran += 1;
        }
        self.timers.advance_to(target);
        ran
    }

    /// Run timers until none are left
    pub fn run_until_idle(&mut self) -> usize {
        let mut ran = 0;
        while let Some(due) = self.timers.next_due() {
            if ran >= MAX_IDLE_TASKS {
                tracing::warn!(pending = self.timers.len(), "timers still pending after {MAX_IDLE_TASKS} tasks");
                break;
            }
            let wait = due.saturating_sub(self.timers.now());
            ran += self.advance(wait);
        }
        ran
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    pub fn add_event_listener(
        &mut self,
        target: EventTarget,
        event_type: EventType,
        listener: impl Fn(&mut Window, &mut Event) -> Result<(), ScriptError> + 'static,
    ) -> ListenerId {
        tracing::trace!(?target, event = event_type.as_str(), "addEventListener");
        self.listeners.add(target, event_type, Rc::new(listener))
    }

    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Listeners currently attached to `target`
    pub fn listener_count(&self, target: EventTarget) -> usize {
        self.listeners.count(target)
    }

    /// Install the unhandled-error handler
    pub fn set_error_handler(&mut self, handler: impl Fn(&mut Window, &ScriptError) + 'static) {
        self.error_handler = Some(Rc::new(handler));
    }

    /// Route an error to the unhandled-error handler
    pub fn report_error(&mut self, error: ScriptError) {
        tracing::error!(%error, "unhandled script error");
        if let Some(handler) = self.error_handler.clone() {
            handler(self, &error);
        }
    }

    /// Dispatch an event: target, then ancestors, then document, then window.
    /// Returns the event so callers can inspect `default_prevented`.
    pub fn dispatch(&mut self, mut event: Event) -> Event {
        event.timestamp = self.now();
        for current in self.propagation_path(&event) {
            event.current_target = current;
            for listener in self.listeners.handlers(current, event.event_type) {
                if let Err(error) = listener(self, &mut event) {
                    self.report_error(error);
                }
            }
            if event.propagation_stopped() {
                break;
            }
        }
        event
    }

    fn propagation_path(&self, event: &Event) -> Vec<EventTarget> {
        let mut path = vec![event.target];
        if !event.event_type.bubbles() {
            return path;
        }
        if let EventTarget::Node(node) = event.target {
            let tree = self.document.tree();
            path.extend(
                tree.ancestors(node)
                    .filter(|&a| a != tree.root())
                    .map(EventTarget::Node),
            );
            if !self.document.is_connected(node) {
                return path;
            }
            path.push(EventTarget::Document);
        }
        if event.target != EventTarget::Window {
            path.push(EventTarget::Window);
        }
        path
    }

    /// Remove a node from the document along with the listeners of its subtree
    pub fn remove_node(&mut self, node: NodeId) {
        let mut subtree = vec![node];
        subtree.extend(self.document.tree().descendants(node));
        self.document.remove(node);
        let dropped = self.listeners.remove_nodes(&subtree);
        tracing::trace!(%node, dropped, "removed node");
    }

    // ------------------------------------------------------------------
    // User interaction helpers
    // ------------------------------------------------------------------

    /// Click an element. Disabled controls swallow the click (`None`).
    /// An unprevented click on a submit button submits its form.
    pub fn click(&mut self, node: NodeId) -> Option<Event> {
        let elem = self.document.element(node)?;
        if elem.is_disabled() {
            tracing::trace!(%node, "click on disabled control ignored");
            return None;
        }
        let submits = elem.tag_name() == "button" && elem.attr("type").is_none_or(|t| t == "submit");

        let event = self.dispatch(Event::new(EventType::Click, EventTarget::Node(node)));
        if submits && !event.default_prevented() {
            if let Some(form) = self.form_owner(node) {
                self.submit(form);
            }
        }
        Some(event)
    }

    /// Click on the page outside any element of interest
    pub fn click_body(&mut self) -> Option<Event> {
        let body = self.document.body();
        self.click(body)
    }

    fn form_owner(&self, node: NodeId) -> Option<NodeId> {
        let tree = self.document.tree();
        tree.ancestors(node)
            .find(|&a| tree.element(a).is_some_and(|e| e.tag_name() == "form"))
    }

    /// Move focus, firing `blur` on the element losing it and `focus` on the new one
    pub fn focus(&mut self, node: NodeId) -> bool {
        let previous = self.document.active_element();
        if previous == Some(node) {
            return true;
        }
        if !self.document.focus(node) {
            return false;
        }
        if let Some(prev) = previous {
            self.dispatch(Event::new(EventType::Blur, EventTarget::Node(prev)));
        }
        self.dispatch(Event::new(EventType::Focus, EventTarget::Node(node)));
        true
    }

    /// Drop focus from `node` and fire `blur` on it
    pub fn blur(&mut self, node: NodeId) -> Event {
        if self.document.active_element() == Some(node) {
            self.document.blur();
        }
        self.dispatch(Event::new(EventType::Blur, EventTarget::Node(node)))
    }

    /// Replace a control's value as typing would, then fire `input`
    pub fn input(&mut self, node: NodeId, value: &str) -> Event {
        self.document.set_value(node, value);
        self.dispatch(Event::new(EventType::Input, EventTarget::Node(node)))
    }

    /// Fire `submit` on a form. Without `preventDefault` the browser would navigate;
    /// this host only logs it.
    pub fn submit(&mut self, form: NodeId) -> Event {
        let event = self.dispatch(Event::new(EventType::Submit, EventTarget::Node(form)));
        if !event.default_prevented() {
            tracing::debug!(%form, "form submitted without a script handling it");
        }
        event
    }

    /// Press a key on the focused element (or the body)
    pub fn keydown(&mut self, key: &str) -> Event {
        let target = self.document.active_element().unwrap_or_else(|| self.document.body());
        self.dispatch(Event::new(EventType::KeyDown, EventTarget::Node(target)).with_key(key))
    }

    /// Fire `DOMContentLoaded` on the document
    pub fn content_loaded(&mut self) -> Event {
        self.dispatch(Event::new(EventType::DomContentLoaded, EventTarget::Document))
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("url", &self.document.url())
            .field("timers", &self.timers)
            .field("storage_items", &self.local_storage.len())
            .finish_non_exhaustive()
    }
}
