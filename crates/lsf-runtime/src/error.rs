//! Runtime errors

use std::path::PathBuf;

use lsf_dom::NodeId;

/// Error raised by a script (event listener or timer task)
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("{0} is not an element")]
    NotAnElement(NodeId),

    #[error("invalid data attribute `{name}`: {value:?}")]
    InvalidData { name: String, value: String },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Other(String),
}

/// `localStorage` persistence failure
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access storage file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt storage file {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
