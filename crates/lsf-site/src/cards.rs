//! Practitioner cards

use lsf_dom::{Document, NodeId};

use crate::Practitioner;

pub const GRID_ID: &str = "praticiensGrid";
pub const BOOK_LABEL: &str = "Prendre rendez-vous";

/// Append one card per practitioner to `grid`. Returns the booking buttons
/// in directory order.
pub fn render(doc: &mut Document, grid: NodeId, practitioners: &[Practitioner]) -> Vec<NodeId> {
    let buttons: Vec<_> = practitioners
        .iter()
        .enumerate()
        .map(|(index, p)| render_card(doc, grid, index, p))
        .collect();
    tracing::debug!(cards = buttons.len(), "rendered practitioner cards");
    buttons
}

fn render_card(doc: &mut Document, grid: NodeId, index: usize, p: &Practitioner) -> NodeId {
    let card = element(doc, grid, "div", &[("class", "praticien-card")]);

    let header = element(doc, card, "div", &[("class", "praticien-header")]);
    let img = element(doc, header, "img", &[("alt", p.name.as_str())]);
    if let (Some(src), Some(elem)) = (&p.image, doc.element_mut(img)) {
        elem.set_attribute("src", src);
    }

    let info = element(doc, header, "div", &[("class", "praticien-info")]);
    text_element(doc, info, "h3", &[], &p.name);
    match &p.video {
        Some(video) => {
            let label = format!("Présentation vidéo de {}", p.name);
            let node = element(
                doc,
                info,
                "video",
                &[
                    ("class", "praticien-video"),
                    ("src", video.as_str()),
                    ("controls", ""),
                    ("muted", ""),
                    ("autoplay", ""),
                    ("loop", ""),
                    ("playsinline", ""),
                    ("preload", "metadata"),
                    ("aria-label", label.as_str()),
                ],
            );
            if let (Some(poster), Some(elem)) = (&p.image, doc.element_mut(node)) {
                elem.set_attribute("poster", poster);
            }
        }
        None => {
            text_element(doc, info, "p", &[], &p.specialty);
        }
    }
    text_element(doc, info, "p", &[("style", "color: #e65100; font-weight: 600")], &p.lsf_level);

    let badges = element(doc, card, "div", &[("class", "badges")]);
    for badge in &p.badges {
        text_element(doc, badges, "span", &[("class", "badge")], badge);
    }

    let details = element(doc, card, "div", &[("class", "details")]);
    icon_line(doc, details, "info rating", "fa-star", &p.rating_label());
    icon_line(doc, details, "info", "fa-location-dot", &p.location);
    icon_line(doc, details, "info availability", "fa-circle-check", &p.availability);

    let index = index.to_string();
    let button = text_element(
        doc,
        card,
        "button",
        &[("type", "button"), ("class", "btn-primary rdv-btn"), ("data-index", index.as_str())],
        BOOK_LABEL,
    );

    let actions = element(doc, card, "div", &[("class", "actions")]);
    let video = element(doc, actions, "button", &[("type", "button")]);
    element(doc, video, "i", &[("class", "fa-solid fa-video")]);
    append_text(doc, video, " Vidéo LSF");
    text_element(doc, actions, "button", &[("type", "button")], "Profil complet");

    button
}

fn element(doc: &mut Document, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let node = doc.create_element(tag);
    if let Some(elem) = doc.element_mut(node) {
        for (name, value) in attrs {
            elem.set_attribute(name, value);
        }
    }
    doc.append_child(parent, node);
    node
}

fn text_element(doc: &mut Document, parent: NodeId, tag: &str, attrs: &[(&str, &str)], text: &str) -> NodeId {
    let node = element(doc, parent, tag, attrs);
    doc.set_text_content(node, text);
    node
}

fn append_text(doc: &mut Document, parent: NodeId, text: &str) {
    let node = doc.tree_mut().create_text(text);
    doc.append_child(parent, node);
}

/// `<p class="…"><i class="fa-solid …"></i> text</p>`
fn icon_line(doc: &mut Document, parent: NodeId, class: &str, icon: &str, text: &str) {
    let line = element(doc, parent, "p", &[("class", class)]);
    let icon = format!("fa-solid {icon}");
    element(doc, line, "i", &[("class", icon.as_str())]);
    append_text(doc, line, &format!(" {text}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practitioners;

    fn rendered() -> (Document, NodeId, Vec<NodeId>) {
        let mut doc = Document::default();
        let body = doc.body();
        let grid = element(&mut doc, body, "div", &[("id", GRID_ID)]);
        let all = practitioners::builtin().unwrap();
        let buttons = render(&mut doc, grid, &all);
        (doc, grid, buttons)
    }

    #[test]
    fn test_one_card_per_practitioner() {
        let (doc, grid, buttons) = rendered();
        assert_eq!(doc.query_selector_all(grid, ".praticien-card").len(), 6);
        assert_eq!(buttons.len(), 6);
        for (i, &button) in buttons.iter().enumerate() {
            let elem = doc.element(button).unwrap();
            assert_eq!(elem.data("index"), Some(i.to_string().as_str()));
            assert_eq!(doc.text_content(button), BOOK_LABEL);
        }
    }

    #[test]
    fn test_card_contents() {
        let (doc, grid, _) = rendered();
        let cards = doc.query_selector_all(grid, ".praticien-card");
        let first = cards[0];
        let video = doc.query_selector(first, "video.praticien-video").unwrap();
        let video = doc.element(video).unwrap();
        assert_eq!(video.attr("aria-label"), Some("Présentation vidéo de Dr. Marie Dubois"));
        assert!(video.attr("poster").is_some());

        let badges: Vec<_> = doc
            .query_selector_all(first, ".badge")
            .into_iter()
            .map(|b| doc.text_content(b))
            .collect();
        assert_eq!(badges, ["LSF", "Urgences"]);

        let rating = doc.query_selector(first, ".rating").unwrap();
        assert_eq!(doc.text_content(rating), " 4.9 (127 avis)");
    }

    #[test]
    fn test_missing_image_and_rating() {
        let (doc, grid, _) = rendered();
        let cards = doc.query_selector_all(grid, ".praticien-card");

        let leroy_img = doc.query_selector(cards[2], "img").unwrap();
        let leroy_img = doc.element(leroy_img).unwrap();
        assert!(!leroy_img.has_attribute("src"));
        assert_eq!(leroy_img.attr("alt"), Some("Dr. Sophie Leroy"));

        let rating = doc.query_selector(cards[5], ".rating").unwrap();
        assert_eq!(doc.text_content(rating), " 92 avis");
    }
}
