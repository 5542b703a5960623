//! Screen-reader announcer
//!
//! Each announcement gets its own visually hidden live region appended to
//! `<body>` and removed by its own timer, so back-to-back announcements
//! never share an element.

use std::time::Duration;

use lsf_dom::NodeId;
use lsf_runtime::Window;

use crate::LiveRegionMode;

/// How long a live region stays in the document
pub const DEFAULT_ANNOUNCEMENT_TTL: Duration = Duration::from_millis(1000);

/// Class hiding content visually while keeping it in the accessibility tree
pub const SR_ONLY_CLASS: &str = "sr-only";

#[derive(Debug, Clone, Copy)]
pub struct Announcer {
    ttl: Duration,
}

impl Announcer {
    pub fn new() -> Self {
        Self { ttl: DEFAULT_ANNOUNCEMENT_TTL }
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Announce `text` assertively
    pub fn announce(&self, window: &mut Window, text: &str) -> NodeId {
        self.announce_with(window, text, LiveRegionMode::Assertive)
    }

    /// Announce `text` with the given politeness. Returns the live region,
    /// which is already scheduled for removal.
    pub fn announce_with(&self, window: &mut Window, text: &str, mode: LiveRegionMode) -> NodeId {
        let doc = window.document_mut();
        let body = doc.body();
        let region = doc.create_element("div");
        if let Some(elem) = doc.element_mut(region) {
            elem.set_attribute("aria-live", mode.as_str());
            elem.set_attribute("aria-atomic", "true");
            elem.class_list.add(SR_ONLY_CLASS);
        }
        doc.set_text_content(region, text);
        doc.append_child(body, region);

        tracing::debug!(mode = mode.as_str(), text, "screen reader announcement");

        window.set_timeout(self.ttl, move |w| {
            if w.document().is_connected(region) {
                w.remove_node(region);
            }
        });
        region
    }
}

impl Default for Announcer {
    fn default() -> Self {
        Self::new()
    }
}
