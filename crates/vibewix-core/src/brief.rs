//! The brand brief a draft is derived from.

use serde::{Deserialize, Serialize};

use crate::tone::Tone;

/// Feature blocks offered as toggles in the studio.
pub const FEATURE_PRESETS: [&str; 5] = [
    "Booking",
    "Email capture",
    "Analytics",
    "CMS blog",
    "Payments",
];

/// User-supplied description of a branding project.
///
/// Text fields are not validated; empty strings produce degenerate but
/// well-formed drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brief {
    /// Brand or studio name
    pub brand_name: String,

    /// Who the landing page speaks to
    pub audience: String,

    /// What the page should achieve
    pub primary_goal: String,

    /// Stylistic preset
    #[serde(default)]
    pub tone: Tone,

    /// Selected feature labels, in selection order
    #[serde(default)]
    pub features: Vec<String>,
}

impl Default for Brief {
    fn default() -> Self {
        Self {
            brand_name: "Studio Pulse".to_string(),
            audience: "independent creators".to_string(),
            primary_goal: "Convert visitors into booked consultation calls".to_string(),
            tone: Tone::Clean,
            features: vec!["Booking".to_string(), "Analytics".to_string()],
        }
    }
}

impl Brief {
    /// Check whether a feature label is selected.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Toggle a feature label.
    ///
    /// A selected label is removed (every occurrence); an unselected one is
    /// appended. Returns whether the label is selected afterwards.
    pub fn toggle_feature(&mut self, feature: &str) -> bool {
        if self.has_feature(feature) {
            self.features.retain(|f| f != feature);
            false
        } else {
            self.features.push(feature.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_studio_starting_state() {
        let brief = Brief::default();

        assert_eq!(brief.brand_name, "Studio Pulse");
        assert_eq!(brief.tone, Tone::Clean);
        assert_eq!(brief.features, vec!["Booking", "Analytics"]);
    }

    #[test]
    fn toggle_appends_missing_feature() {
        let mut brief = Brief::default();

        assert!(brief.toggle_feature("Payments"));
        assert_eq!(brief.features, vec!["Booking", "Analytics", "Payments"]);
    }

    #[test]
    fn toggle_removes_every_occurrence() {
        let mut brief = Brief {
            features: vec![
                "Booking".to_string(),
                "Analytics".to_string(),
                "Booking".to_string(),
            ],
            ..Brief::default()
        };

        assert!(!brief.toggle_feature("Booking"));
        assert_eq!(brief.features, vec!["Analytics"]);
        assert!(!brief.has_feature("Booking"));
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let brief: Brief = serde_json::from_str(
            r#"{"brand_name":"Acme","audience":"makers","primary_goal":"Grow signups"}"#,
        )
        .unwrap();

        assert_eq!(brief.tone, Tone::Clean);
        assert!(brief.features.is_empty());
    }
}
