//! DOM Events
//!
//! Event objects, targets and the listener registry.

use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use lsf_dom::NodeId;

use crate::{ScriptError, Window};

/// Event types the site scripts listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    Focus,
    Blur,
    Input,
    Submit,
    KeyDown,
    DomContentLoaded,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Input => "input",
            Self::Submit => "submit",
            Self::KeyDown => "keydown",
            Self::DomContentLoaded => "DOMContentLoaded",
        }
    }

    /// Focus events do not bubble
    pub fn bubbles(self) -> bool {
        !matches!(self, Self::Focus | Self::Blur)
    }
}

/// Where a listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Node(NodeId),
    Document,
    Window,
}

/// Dispatched event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: EventType,
    pub target: EventTarget,
    pub current_target: EventTarget,
    /// `KeyboardEvent.key` for keydown
    pub key: Option<String>,
    /// Virtual time of dispatch
    pub timestamp: Duration,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    pub fn new(event_type: EventType, target: EventTarget) -> Self {
        Self {
            event_type,
            target,
            current_target: target,
            key: None,
            timestamp: Duration::ZERO,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Target node, if the event was aimed at an element
    pub fn target_node(&self) -> Option<NodeId> {
        match self.target {
            EventTarget::Node(id) => Some(id),
            _ => None,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Event listener
pub type Listener = Rc<dyn Fn(&mut Window, &mut Event) -> Result<(), ScriptError>>;

/// Handle for `removeEventListener`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: u64,
    entries: HashMap<(EventTarget, EventType), Vec<(ListenerId, Listener)>>,
}

impl ListenerRegistry {
    pub(crate) fn add(&mut self, target: EventTarget, event_type: EventType, listener: Listener) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries
            .entry((target, event_type))
            .or_default()
            .push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let mut removed = false;
        self.entries.retain(|_, list| {
            let before = list.len();
            list.retain(|(lid, _)| *lid != id);
            removed |= list.len() != before;
            !list.is_empty()
        });
        removed
    }

    /// Snapshot of the listeners for one target, safe to call while dispatching
    pub(crate) fn handlers(&self, target: EventTarget, event_type: EventType) -> Vec<Listener> {
        self.entries
            .get(&(target, event_type))
            .map(|list| list.iter().map(|(_, l)| Rc::clone(l)).collect())
            .unwrap_or_default()
    }

    pub(crate) fn count(&self, target: EventTarget) -> usize {
        self.entries
            .iter()
            .filter(|((t, _), _)| *t == target)
            .map(|(_, list)| list.len())
            .sum()
    }

    /// Drop every listener attached to one of `nodes`
    pub(crate) fn remove_nodes(&mut self, nodes: &[NodeId]) -> usize {
        let mut dropped = 0;
        self.entries.retain(|(target, _), list| match target {
            EventTarget::Node(id) if nodes.contains(id) => {
                dropped += list.len();
                false
            }
            _ => true,
        });
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Listener {
        Rc::new(|_: &mut Window, _: &mut Event| Ok(()))
    }

    #[test]
    fn test_bubbling_flags() {
        assert!(EventType::Click.bubbles());
        assert!(EventType::Submit.bubbles());
        assert!(!EventType::Blur.bubbles());
    }

    #[test]
    fn test_prevent_default_and_stop() {
        let mut event = Event::new(EventType::Submit, EventTarget::Document);
        assert!(!event.default_prevented());
        event.prevent_default();
        event.stop_propagation();
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }

    #[test]
    fn test_registry_add_remove() {
        let mut registry = ListenerRegistry::default();
        let id = registry.add(EventTarget::Window, EventType::Click, noop());
        registry.add(EventTarget::Window, EventType::KeyDown, noop());
        assert_eq!(registry.count(EventTarget::Window), 2);

        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert_eq!(registry.handlers(EventTarget::Window, EventType::Click).len(), 0);
    }
}
