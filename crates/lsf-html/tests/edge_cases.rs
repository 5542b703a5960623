//! Edge cases for HTML to DOM conversion

use lsf_html::{HtmlParser, parse};

#[test]
fn test_attributes_survive_conversion() {
    let html = r#"
        <!DOCTYPE html>
        <html lang="fr">
            <head><title>Contact</title></head>
            <body>
                <form id="contact-form" novalidate>
                    <input id="email" name="email" type="email" required value="a@b.co">
                    <span id="email-error" class="error-message" aria-live="polite"></span>
                    <button type="submit" class="btn-primary">Envoyer</button>
                </form>
            </body>
        </html>
    "#;
    let doc = parse(html).unwrap();

    let form = doc.get_element_by_id("contact-form").unwrap();
    assert!(doc.element(form).unwrap().has_attribute("novalidate"));

    let email = doc.get_element_by_id("email").unwrap();
    let elem = doc.element(email).unwrap();
    assert_eq!(elem.attr("type"), Some("email"));
    assert!(elem.has_attribute("required"));
    assert_eq!(elem.value(), "a@b.co");

    let submit = doc.query_selector(form, "button[type=submit]").unwrap();
    assert!(doc.element(submit).unwrap().class_list.contains("btn-primary"));
    assert_eq!(doc.text_content(submit), "Envoyer");
}

#[test]
fn test_inline_style_parsed() {
    let doc = parse(r#"<div id="rdv-modal" class="modal" style="display:none"></div>"#).unwrap();
    let modal = doc.get_element_by_id("rdv-modal").unwrap();
    assert_eq!(doc.element(modal).unwrap().style.display(), Some("none"));
}

#[test]
fn test_base_url_recorded() {
    let doc = HtmlParser::new()
        .parse_with_url("<p>hi</p>", "https://lsf-sante.fr/contact")
        .unwrap();
    assert_eq!(doc.url(), "https://lsf-sante.fr/contact");
}

#[test]
fn test_entities_decoded() {
    let doc = parse("<p id=\"p\">Prendre rendez-vous &amp; vid&eacute;o</p>").unwrap();
    let p = doc.get_element_by_id("p").unwrap();
    assert_eq!(doc.text_content(p), "Prendre rendez-vous & vidéo");
}
