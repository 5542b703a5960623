//! Practitioner directory

use serde::{Deserialize, Serialize};
use url::Url;

use crate::SiteError;

const DIRECTORY_JSON: &str = include_str!("../data/practitioners.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Practitioner {
    pub name: String,
    pub specialty: String,
    /// Presentation video in LSF
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    pub reviews: u32,
    pub location: String,
    pub availability: String,
    pub lsf_level: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub badges: Vec<String>,
}

impl Practitioner {
    /// `"4.9 (127 avis)"`, or just the review count when unrated
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) => format!("{rating} ({} avis)", self.reviews),
            None => format!("{} avis", self.reviews),
        }
    }

    /// Line shown under the name in the booking modal
    pub fn booking_summary(&self) -> String {
        format!("{} – {}", self.specialty, self.location)
    }

    fn validate(&self) -> Result<(), SiteError> {
        for (field, value) in [("video", &self.video), ("image", &self.image)] {
            if let Some(value) = value {
                Url::parse(value).map_err(|source| SiteError::MediaUrl {
                    practitioner: self.name.clone(),
                    field,
                    source,
                })?;
            }
        }
        Ok(())
    }
}

/// Parse a directory and check every media URL
pub fn load(json: &str) -> Result<Vec<Practitioner>, SiteError> {
    let practitioners: Vec<Practitioner> = serde_json::from_str(json)?;
    for p in &practitioners {
        p.validate()?;
    }
    tracing::debug!(count = practitioners.len(), "loaded practitioner directory");
    Ok(practitioners)
}

/// The directory bundled with the site
pub fn builtin() -> Result<Vec<Practitioner>, SiteError> {
    load(DIRECTORY_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_directory() {
        let all = builtin().unwrap();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].name, "Dr. Marie Dubois");
        assert_eq!(all[0].lsf_level, "LSF Natif");
        assert_eq!(all[2].image, None);
        assert_eq!(all[5].rating, None);
        assert!(all.iter().all(|p| p.badges.contains(&"LSF".to_string())));
    }

    #[test]
    fn test_labels() {
        let all = builtin().unwrap();
        assert_eq!(all[0].rating_label(), "4.9 (127 avis)");
        assert_eq!(all[5].rating_label(), "92 avis");
        assert_eq!(all[1].booking_summary(), "Psychologue – Lyon 3ème");
    }

    #[test]
    fn test_rejects_bad_media_url() {
        let json = r#"[{"name": "Dr. X", "specialty": "S", "reviews": 1, "location": "L",
            "availability": "A", "lsfLevel": "LSF", "video": "not a url"}]"#;
        let err = load(json).unwrap_err();
        assert!(matches!(err, SiteError::MediaUrl { field: "video", .. }));
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert!(matches!(load(r#"[{"name": "Dr. X"}]"#), Err(SiteError::Json(_))));
    }
}
