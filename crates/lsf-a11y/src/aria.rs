//! ARIA Support

/// `aria-live` politeness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveRegionMode {
    #[default]
    Off,
    Polite,
    Assertive,
}

impl LiveRegionMode {
    /// Attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}
