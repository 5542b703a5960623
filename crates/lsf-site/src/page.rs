//! Page bootstrap

use std::cell::Cell;
use std::rc::Rc;

use lsf_a11y::AccessibilityPreferences;
use lsf_forms::{FormController, Notifier, Severity};
use lsf_html::HtmlParser;
use lsf_runtime::{EventTarget, EventType, Window};

use crate::{BookingModal, Navigation, Practitioner, SiteConfig, SiteError, accessibility, cards, practitioners};

/// The bundled home page
pub const PAGE_HTML: &str = include_str!("../data/index.html");
pub const PAGE_URL: &str = "https://lsf-sante.fr/";

pub const UNHANDLED_ERROR: &str = "An error occurred. Please refresh the page and try again.";
pub const CONTACT_FORM_ID: &str = "contact-form";

/// A booted page: the window plus handles to its scripted components
#[derive(Debug)]
pub struct Site {
    window: Window,
    notifier: Notifier,
    preferences: Rc<Cell<AccessibilityPreferences>>,
    practitioners: Rc<[Practitioner]>,
    modal: Option<Rc<BookingModal>>,
    navigation: Rc<Cell<Option<Navigation>>>,
    form: Option<Rc<FormController>>,
}

impl Site {
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn preferences(&self) -> AccessibilityPreferences {
        self.preferences.get()
    }

    pub fn practitioners(&self) -> &[Practitioner] {
        &self.practitioners
    }

    /// `None` on pages without `#rdv-modal`
    pub fn modal(&self) -> Option<&BookingModal> {
        self.modal.as_deref()
    }

    /// Bound once `DOMContentLoaded` has fired on a page with a burger menu
    pub fn navigation(&self) -> Option<Navigation> {
        self.navigation.get()
    }

    pub fn form(&self) -> Option<&FormController> {
        self.form.as_deref()
    }
}

/// Show a notice for errors no script handled
pub fn install_error_handler(window: &mut Window, notifier: Notifier) {
    window.set_error_handler(move |w, error| {
        tracing::warn!(%error, "showing unhandled error notice");
        notifier.show(w, UNHANDLED_ERROR, Severity::Error);
    });
}

/// Parse `html` and run the site scripts against it
pub fn boot(html: &str, config: &SiteConfig) -> Result<Site, SiteError> {
    let document = HtmlParser::new().parse_with_url(html, PAGE_URL)?;
    let mut window = Window::with_storage(document, config.storage()?);

    let notifier = config.notifier();
    let announcer = config.announcer();
    install_error_handler(&mut window, notifier.clone());

    let preferences = accessibility::bind(&mut window, announcer);

    let practitioners: Rc<[Practitioner]> = practitioners::builtin()?.into();
    let modal = match window.document().get_element_by_id(cards::GRID_ID) {
        Some(grid) => {
            cards::render(window.document_mut(), grid, &practitioners);
            Some(BookingModal::bind(&mut window, Rc::clone(&practitioners))?)
        }
        None => None,
    };

    let form = match window.document().get_element_by_id(CONTACT_FORM_ID) {
        Some(_) => Some(FormController::attach(
            &mut window,
            CONTACT_FORM_ID,
            config.submitter(),
            notifier.clone(),
            announcer,
        )?),
        None => None,
    };

    let navigation = Rc::new(Cell::new(None));
    let slot = Rc::clone(&navigation);
    window.add_event_listener(EventTarget::Document, EventType::DomContentLoaded, move |w, _| {
        slot.set(Navigation::bind(w)?);
        Ok(())
    });
    window.content_loaded();

    tracing::info!(
        url = window.document().url(),
        practitioners = practitioners.len(),
        contact_form = form.is_some(),
        "site booted"
    );

    Ok(Site { window, notifier, preferences, practitioners, modal, navigation, form })
}
