//! LSF HTML Parser
//!
//! HTML5 parsing built on html5ever. The page markup is parsed into an
//! `RcDom` first and then copied into the arena-based [`lsf_dom::Document`].

mod parser;

pub use parser::HtmlParser;

use lsf_dom::Document;

/// Parse an HTML string into a document at `about:blank`
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error("document has no <body> element")]
    MissingBody,
}
