//! Preferences survive a reload through the on-disk localStorage file

use lsf_a11y::{AccessibilityPreferences, PreferenceFlag};
use lsf_dom::Document;
use lsf_runtime::Storage;

#[test]
fn test_preferences_restored_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local-storage.json");

    {
        let mut storage = Storage::local(&path).unwrap();
        let mut prefs = AccessibilityPreferences::load(&storage);
        prefs.toggle(PreferenceFlag::HighContrast);
        prefs.toggle(PreferenceFlag::LargeText);
        prefs.save(&mut storage).unwrap();
    }

    let storage = Storage::local(&path).unwrap();
    let prefs = AccessibilityPreferences::load(&storage);
    assert!(prefs.get(PreferenceFlag::HighContrast));
    assert!(prefs.get(PreferenceFlag::LargeText));

    let mut doc = Document::default();
    prefs.apply(&mut doc);
    let body = doc.element(doc.body()).unwrap();
    assert_eq!(body.class_list.value(), "high-contrast large-text");
}
