//! LSF Forms
//!
//! The contact form pipeline:
//!
//! - [`validator`]: pure per-field rules producing a [`ValidationResult`]
//! - [`controller`]: wires blur/input/submit, shows inline errors, drives focus
//! - [`submission`]: the [`Submitter`] seam and the timer-driven [`SubmissionSimulator`]
//! - [`notifier`]: transient, stacked, auto-dismissing notifications
//!
//! ```rust,ignore
//! let notifier = Notifier::new();
//! let controller = FormController::attach(
//!     &mut window,
//!     "contact-form",
//!     SubmissionSimulator::new(),
//!     notifier.clone(),
//!     Announcer::new(),
//! )?;
//! ```

pub mod controller;
pub mod field;
pub mod notifier;
pub mod submission;
pub mod validator;

pub use controller::{FormController, FormEvents, FormState, register_form_events};
pub use field::{Field, FieldKind};
pub use notifier::{NotificationId, Notifier, Severity};
pub use submission::{FormData, SubmissionSimulator, SubmitCallback, SubmitError, Submitter};
pub use validator::{ValidationResult, validate};
