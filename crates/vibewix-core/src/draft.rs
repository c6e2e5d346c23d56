//! Draft builder: maps a brief onto the fixed landing-page template.

use serde::Serialize;

use crate::brief::Brief;

/// Summary used when a brief selects no features.
const EMPTY_FEATURES_SUMMARY: &str = "fast setup";

/// A fixed content block every draft contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub cta: Option<&'static str>,
}

/// The four section templates, in page order.
pub const SECTION_TEMPLATES: [SectionTemplate; 4] = [
    SectionTemplate {
        title: "Hero",
        description: "Lead with value and one focused call to action",
        cta: Some("Start now"),
    },
    SectionTemplate {
        title: "Proof",
        description: "Show testimonials, client logos, or measurable outcomes",
        cta: None,
    },
    SectionTemplate {
        title: "Offer",
        description: "Explain packages, pricing, and what is included",
        cta: Some("View plans"),
    },
    SectionTemplate {
        title: "FAQ",
        description: "Reduce objections with concise Q&A content",
        cta: None,
    },
];

/// A content section of a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Anchor id (e.g., "offer-3")
    pub id: String,

    /// Section heading
    pub title: String,

    /// Guidance text for the section
    pub description: String,

    /// Call-to-action button label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

impl SectionTemplate {
    /// Instantiate the template at a 0-based position.
    fn instantiate(&self, index: usize) -> Section {
        Section {
            id: format!("{}-{}", self.title.to_lowercase(), index + 1),
            title: self.title.to_string(),
            description: self.description.to_string(),
            cta: self.cta.map(str::to_string),
        }
    }
}

/// Landing-page content derived from a brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub headline: String,
    pub sub_headline: String,
    pub sections: Vec<Section>,
}

/// Build the draft for a brief.
///
/// Never fails. The sections are always the four templates in order; the
/// brief's features only show up in the sub-headline.
pub fn build_draft(brief: &Brief) -> Draft {
    let features = features_summary(&brief.features);

    Draft {
        headline: format!("{} for {}", brief.brand_name, brief.audience),
        sub_headline: format!(
            "{}. Style: {}. Core features: {}.",
            brief.primary_goal,
            brief.tone.descriptor(),
            features
        ),
        sections: SECTION_TEMPLATES
            .iter()
            .enumerate()
            .map(|(index, template)| template.instantiate(index))
            .collect(),
    }
}

/// Join feature labels in order, or fall back when there are none.
fn features_summary(features: &[String]) -> String {
    if features.is_empty() {
        EMPTY_FEATURES_SUMMARY.to_string()
    } else {
        features.join(", ")
    }
}
