//! LSF Runtime
//!
//! The scripting host the site scripts run against.
//!
//! Features:
//! - [`Window`]: document, listeners and `localStorage` in one place
//! - Timers on a virtual clock, fast-forwarded with [`Window::advance`]
//! - Event dispatch with bubbling and `preventDefault`
//! - A last-resort handler for errors escaping event listeners
//! - A real-time driver on `smol` for running outside tests

pub mod driver;
mod error;
mod events;
mod storage;
mod timers;
mod window;

pub use error::{ScriptError, StorageError};
pub use events::{Event, EventTarget, EventType, Listener, ListenerId};
pub use storage::Storage;
pub use timers::{Task, TimerId, TimerQueue};
pub use window::{ErrorHandler, Window};

pub use lsf_dom as dom;
