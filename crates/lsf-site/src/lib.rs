//! LSF Santé site
//!
//! The site's client-side behaviour on top of the LSF runtime: practitioner
//! cards and the booking modal, burger navigation, accessibility toggles,
//! the contact form and the last-resort error notice.
//!
//! ```rust,ignore
//! let mut site = lsf_site::boot(lsf_site::PAGE_HTML, &SiteConfig::default())?;
//! let window = site.window_mut();
//! ```

pub mod accessibility;
pub mod cards;
pub mod config;
pub mod error;
pub mod modal;
pub mod nav;
pub mod page;
pub mod practitioners;

pub use config::SiteConfig;
pub use error::SiteError;
pub use modal::BookingModal;
pub use nav::Navigation;
pub use page::{PAGE_HTML, Site, UNHANDLED_ERROR, boot, install_error_handler};
pub use practitioners::Practitioner;
