//! Print the draft for a brief.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use vibewix_core::{build_draft, serialize_draft, Brief, Draft, Tone};

use crate::config::load_config;

/// Output format for the draft command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// React component
    #[default]
    Jsx,
    /// Headline, sub-headline and section outline
    Text,
    /// Brief, draft and component as JSON
    Json,
}

/// Brief overrides from the command line.
#[derive(Debug, Default)]
pub struct DraftArgs {
    pub brand: Option<String>,
    pub audience: Option<String>,
    pub goal: Option<String>,
    pub tone: Option<String>,
    pub features: Vec<String>,
    pub no_features: bool,
    pub format: OutputFormat,
}

impl DraftArgs {
    /// Apply overrides on top of a configured brief.
    fn apply(&self, mut brief: Brief) -> Result<Brief> {
        if let Some(brand) = &self.brand {
            brief.brand_name = brand.clone();
        }
        if let Some(audience) = &self.audience {
            brief.audience = audience.clone();
        }
        if let Some(goal) = &self.goal {
            brief.primary_goal = goal.clone();
        }
        if let Some(tone) = &self.tone {
            brief.tone = tone.parse::<Tone>()?;
        }
        if self.no_features {
            brief.features.clear();
        } else if !self.features.is_empty() {
            brief.features = self.features.clone();
        }
        Ok(brief)
    }
}

#[derive(Serialize)]
struct DraftOutput<'a> {
    brief: &'a Brief,
    draft: &'a Draft,
    jsx: String,
}

/// Run the draft command.
pub fn run(config_path: &Path, args: DraftArgs) -> Result<()> {
    let config = load_config(config_path)?;
    let brief = args.apply(config.brief.to_brief())?;

    println!("{}", render(&brief, args.format)?);

    Ok(())
}

/// Render a brief's draft in the requested format.
fn render(brief: &Brief, format: OutputFormat) -> Result<String> {
    let draft = build_draft(brief);

    let output = match format {
        OutputFormat::Jsx => serialize_draft(&draft),
        OutputFormat::Text => outline(&draft),
        OutputFormat::Json => {
            let output = DraftOutput {
                brief,
                draft: &draft,
                jsx: serialize_draft(&draft),
            };
            serde_json::to_string_pretty(&output).context("Failed to serialize draft")?
        }
    };

    Ok(output)
}

/// Plain-text outline of a draft.
fn outline(draft: &Draft) -> String {
    let mut out = format!("{}\n{}\n", draft.headline, draft.sub_headline);

    for (index, section) in draft.sections.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} ({})\n   {}\n",
            index + 1,
            section.title,
            section.id,
            section.description
        ));
        if let Some(cta) = &section.cta {
            out.push_str(&format!("   CTA: {}\n", cta));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_configured_fields() {
        let args = DraftArgs {
            brand: Some("Acme".to_string()),
            audience: Some("makers".to_string()),
            goal: Some("Grow signups".to_string()),
            tone: Some("playful".to_string()),
            features: vec!["Payments".to_string()],
            ..Default::default()
        };

        let brief = args.apply(Brief::default()).unwrap();

        assert_eq!(brief.brand_name, "Acme");
        assert_eq!(brief.tone, Tone::Playful);
        assert_eq!(brief.features, vec!["Payments"]);
    }

    #[test]
    fn no_features_clears_list() {
        let args = DraftArgs {
            no_features: true,
            ..Default::default()
        };

        let brief = args.apply(Brief::default()).unwrap();

        assert!(brief.features.is_empty());
        assert!(render(&brief, OutputFormat::Jsx)
            .unwrap()
            .contains("Core features: fast setup."));
    }

    #[test]
    fn unknown_tone_is_an_error() {
        let args = DraftArgs {
            tone: Some("grunge".to_string()),
            ..Default::default()
        };

        assert!(args.apply(Brief::default()).is_err());
    }

    #[test]
    fn text_outline_lists_sections() {
        let text = render(&Brief::default(), OutputFormat::Text).unwrap();

        assert!(text.starts_with("Studio Pulse for independent creators\n"));
        assert!(text.contains("1. Hero (hero-1)\n"));
        assert!(text.contains("   CTA: View plans\n"));
        assert!(text.contains("4. FAQ (faq-4)\n"));
    }

    #[test]
    fn json_output_includes_component() {
        let json = render(&Brief::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["draft"]["sections"][0]["id"], "hero-1");
        assert!(value["jsx"]
            .as_str()
            .unwrap()
            .starts_with("export function LandingPage()"));
    }
}
