//! Site errors

use std::path::PathBuf;

use lsf_html::ParseError;
use lsf_runtime::{ScriptError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("failed to parse page: {0}")]
    Parse(#[from] ParseError),

    #[error("page script failed: {0}")]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {field} URL for {practitioner}: {source}")]
    MediaUrl {
        practitioner: String,
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("usage: lsf-site [--config <file>] [storage-file]: {0}")]
    Usage(&'static str),

    #[error("failed to read config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
