//! Site configuration

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lsf_a11y::Announcer;
use lsf_forms::{Notifier, SubmissionSimulator};
use lsf_runtime::{Storage, StorageError};
use serde::{Deserialize, Serialize};

use crate::SiteError;

/// Storage location and the timings of every delayed UI effect.
/// Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `localStorage` file; in-memory when unset
    pub storage_path: Option<PathBuf>,
    pub submit_delay_ms: u64,
    pub notification_ms: u64,
    pub dismiss_ms: u64,
    pub announcement_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            submit_delay_ms: 2000,
            notification_ms: 5000,
            dismiss_ms: 300,
            announcement_ms: 1000,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Command-line form: `[--config <file>] [storage-file]`. A storage file
    /// given on the command line overrides the one in the config file.
    pub fn from_args<I>(args: I) -> Result<Self, SiteError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let mut config_path = None;
        let mut storage_path = None;
        while let Some(arg) = args.next() {
            if arg == "--config" {
                let path = args.next().ok_or(SiteError::Usage("--config needs a file"))?;
                config_path = Some(PathBuf::from(path));
            } else if storage_path.is_none() {
                storage_path = Some(PathBuf::from(arg));
            } else {
                return Err(SiteError::Usage("unexpected extra argument"));
            }
        }

        let config = match config_path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(match storage_path {
            Some(path) => config.with_storage_path(path),
            None => config,
        })
    }

    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn storage(&self) -> Result<Storage, StorageError> {
        match &self.storage_path {
            Some(path) => Storage::local(path),
            None => Ok(Storage::session()),
        }
    }

    pub fn announcer(&self) -> Announcer {
        Announcer::with_ttl(Duration::from_millis(self.announcement_ms))
    }

    pub fn notifier(&self) -> Notifier {
        Notifier::with_timings(
            Duration::from_millis(self.notification_ms),
            Duration::from_millis(self.dismiss_ms),
        )
    }

    pub fn submitter(&self) -> SubmissionSimulator {
        SubmissionSimulator::with_delay(self.submit_delay())
    }
}
