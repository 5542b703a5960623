//! LSF Accessibility
//!
//! Accessibility support for the site scripts.
//!
//! Features:
//! - ARIA live-region politeness levels
//! - Screen-reader announcements through self-cleaning live regions
//! - High-contrast and large-text preferences persisted in `localStorage`

pub mod announcer;
pub mod aria;
pub mod preferences;

pub use announcer::{Announcer, DEFAULT_ANNOUNCEMENT_TTL};
pub use aria::LiveRegionMode;
pub use preferences::{AccessibilityPreferences, PreferenceFlag};
