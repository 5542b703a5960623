//! Display preferences
//!
//! High-contrast and large-text modes. Each flag is stored in
//! `localStorage` as `"true"`/`"false"` under its own key and shown on the
//! page as a class on `<body>`.

use lsf_dom::Document;
use lsf_runtime::{Storage, StorageError};

/// One boolean display preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceFlag {
    HighContrast,
    LargeText,
}

impl PreferenceFlag {
    pub const ALL: [PreferenceFlag; 2] = [Self::HighContrast, Self::LargeText];

    /// `localStorage` key
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::HighContrast => "high-contrast",
            Self::LargeText => "large-text",
        }
    }

    /// Class toggled on `<body>`
    pub fn body_class(self) -> &'static str {
        match self {
            Self::HighContrast => "high-contrast",
            Self::LargeText => "large-text",
        }
    }

    /// Human-readable name used in announcements
    pub fn label(self) -> &'static str {
        match self {
            Self::HighContrast => "High contrast mode",
            Self::LargeText => "Large text mode",
        }
    }
}

/// The user's display preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessibilityPreferences {
    high_contrast: bool,
    large_text: bool,
}

impl AccessibilityPreferences {
    /// Restore from storage; anything but `"true"` counts as off
    pub fn load(storage: &Storage) -> Self {
        let read = |flag: PreferenceFlag| storage.get_item(flag.storage_key()) == Some("true");
        let prefs = Self {
            high_contrast: read(PreferenceFlag::HighContrast),
            large_text: read(PreferenceFlag::LargeText),
        };
        tracing::debug!(?prefs, "loaded accessibility preferences");
        prefs
    }

    pub fn save(&self, storage: &mut Storage) -> Result<(), StorageError> {
        for flag in PreferenceFlag::ALL {
            storage.set_item(flag.storage_key(), if self.get(flag) { "true" } else { "false" })?;
        }
        Ok(())
    }

    pub fn get(&self, flag: PreferenceFlag) -> bool {
        match flag {
            PreferenceFlag::HighContrast => self.high_contrast,
            PreferenceFlag::LargeText => self.large_text,
        }
    }

    pub fn set(&mut self, flag: PreferenceFlag, on: bool) {
        match flag {
            PreferenceFlag::HighContrast => self.high_contrast = on,
            PreferenceFlag::LargeText => self.large_text = on,
        }
    }

    /// Flip a flag, returning its new state
    pub fn toggle(&mut self, flag: PreferenceFlag) -> bool {
        let on = !self.get(flag);
        self.set(flag, on);
        on
    }

    /// Reflect every flag as a class on `<body>`
    pub fn apply(&self, document: &mut Document) {
        let body = document.body();
        if let Some(elem) = document.element_mut(body) {
            for flag in PreferenceFlag::ALL {
                elem.class_list.toggle(flag.body_class(), Some(self.get(flag)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_off() {
        let prefs = AccessibilityPreferences::load(&Storage::session());
        assert_eq!(prefs, AccessibilityPreferences::default());
    }

    #[test]
    fn test_only_literal_true_enables() {
        let mut storage = Storage::session();
        storage.set_item("high-contrast", "yes").unwrap();
        storage.set_item("large-text", "true").unwrap();

        let prefs = AccessibilityPreferences::load(&storage);
        assert!(!prefs.get(PreferenceFlag::HighContrast));
        assert!(prefs.get(PreferenceFlag::LargeText));
    }

    #[test]
    fn test_toggle_and_save() {
        let mut storage = Storage::session();
        let mut prefs = AccessibilityPreferences::default();
        assert!(prefs.toggle(PreferenceFlag::HighContrast));
        prefs.save(&mut storage).unwrap();

        assert_eq!(storage.get_item("high-contrast"), Some("true"));
        assert_eq!(storage.get_item("large-text"), Some("false"));

        assert!(!prefs.toggle(PreferenceFlag::HighContrast));
        prefs.save(&mut storage).unwrap();
        assert_eq!(storage.get_item("high-contrast"), Some("false"));
    }

    #[test]
    fn test_apply_sets_and_clears_body_classes() {
        let mut doc = Document::default();
        let mut prefs = AccessibilityPreferences::default();
        prefs.set(PreferenceFlag::LargeText, true);
        prefs.apply(&mut doc);

        let body = doc.element(doc.body()).unwrap();
        assert!(body.class_list.contains("large-text"));
        assert!(!body.class_list.contains("high-contrast"));

        prefs.set(PreferenceFlag::LargeText, false);
        prefs.apply(&mut doc);
        assert!(doc.element(doc.body()).unwrap().class_list.is_empty());
    }
}
