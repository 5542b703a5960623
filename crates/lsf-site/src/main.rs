//! LSF Santé - scripted visit of the bundled page

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use lsf_dom::NodeId;
use lsf_runtime::{Window, driver};
use lsf_site::{PAGE_HTML, Site, SiteConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // lsf-site [--config <file>] [storage-file]
    let config = SiteConfig::from_args(std::env::args_os().skip(1)).context("invalid arguments")?;

    let mut site = lsf_site::boot(PAGE_HTML, &config).context("failed to boot the site")?;
    visit(&mut site, &config)?;
    Ok(())
}

fn visit(site: &mut Site, config: &SiteConfig) -> Result<()> {
    let window = site.window_mut();

    let toggle = find(window, "high-contrast-toggle")?;
    window.click(toggle);

    let first_booking = {
        let doc = window.document();
        doc.query_selector(doc.body(), ".rdv-btn").context("no booking buttons rendered")?
    };
    window.click(first_booking);
    let name = find(window, "modal-praticien-name")?;
    tracing::info!(practitioner = %window.document().text_content(name), "booking modal opened");
    let modal = find(window, "rdv-modal")?;
    window.click(modal);

    let fields = [
        ("name", "A", "Alice"),
        ("email", "bad", "alice@example.org"),
        ("message", "short", "Bonjour, je souhaite un rendez-vous."),
    ];
    for (id, invalid, _) in fields {
        let node = find(window, id)?;
        window.input(node, invalid);
    }
    let form = find(window, "contact-form")?;
    window.submit(form);
    for (id, _, _) in fields {
        let slot = find(window, &format!("{id}-error"))?;
        tracing::info!(field = id, error = %window.document().text_content(slot), "validation");
    }

    for (id, _, valid) in fields {
        let node = find(window, id)?;
        window.input(node, valid);
    }
    window.submit(form);

    let ran = smol::block_on(driver::run_realtime_for(window, config.submit_delay()));
    tracing::info!(tasks = ran, "submission settled");

    let doc = window.document();
    for notification in doc.query_selector_all(doc.body(), ".notification") {
        tracing::info!(message = %doc.text_content(notification).trim_end_matches('×'), "notification");
    }
    tracing::info!(preferences = ?site.preferences(), "visit finished");
    Ok(())
}

fn find(window: &Window, id: &str) -> Result<NodeId> {
    window.document().get_element_by_id(id).with_context(|| format!("page has no #{id}"))
}
