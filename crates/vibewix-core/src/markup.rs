//! React component serializer for drafts.

use crate::draft::{Draft, Section};

/// Serialize a draft into a `LandingPage` React component.
///
/// Values are interpolated raw: markup-significant characters in the draft
/// pass through unescaped.
pub fn serialize_draft(draft: &Draft) -> String {
    let sections = draft
        .sections
        .iter()
        .map(render_section)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"export function LandingPage() {{
  return (
    <main>
      <header>
        <h1>{headline}</h1>
        <p>{sub_headline}</p>
      </header>

{sections}
    </main>
  );
}}"#,
        headline = draft.headline,
        sub_headline = draft.sub_headline,
        sections = sections,
    )
}

/// Render one `<section>` block at component indentation.
fn render_section(section: &Section) -> String {
    let cta = section
        .cta
        .as_ref()
        .map(|cta| format!("\n      <button className=\"cta\">{}</button>", cta))
        .unwrap_or_default();

    format!(
        r#"    <section id="{id}">
      <h2>{title}</h2>
      <p>{description}</p>{cta}
    </section>"#,
        id = section.id,
        title = section.title,
        description = section.description,
        cta = cta,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::Brief;
    use crate::draft::build_draft;
    use crate::tone::Tone;
    use pretty_assertions::assert_eq;

    fn acme() -> Brief {
        Brief {
            brand_name: "Acme".to_string(),
            audience: "makers".to_string(),
            primary_goal: "Grow signups".to_string(),
            tone: Tone::Playful,
            features: vec![],
        }
    }

    #[test]
    fn serializes_full_component() {
        let output = serialize_draft(&build_draft(&acme()));

        let expected = r#"export function LandingPage() {
  return (
    <main>
      <header>
        <h1>Acme for makers</h1>
        <p>Grow signups. Style: Friendly language, vibrant energy, lightweight interactions. Core features: fast setup.</p>
      </header>

    <section id="hero-1">
      <h2>Hero</h2>
      <p>Lead with value and one focused call to action</p>
      <button className="cta">Start now</button>
    </section>

    <section id="proof-2">
      <h2>Proof</h2>
      <p>Show testimonials, client logos, or measurable outcomes</p>
    </section>

    <section id="offer-3">
      <h2>Offer</h2>
      <p>Explain packages, pricing, and what is included</p>
      <button className="cta">View plans</button>
    </section>

    <section id="faq-4">
      <h2>FAQ</h2>
      <p>Reduce objections with concise Q&A content</p>
    </section>
    </main>
  );
}"#;

        assert_eq!(output, expected);
    }

    #[test]
    fn has_single_header_and_four_sections() {
        let output = serialize_draft(&build_draft(&Brief::default()));

        assert_eq!(output.matches("<h1>").count(), 1);
        assert_eq!(output.matches("<section").count(), 4);
        assert_eq!(output.matches("<button className=\"cta\">").count(), 2);

        let header = output
            .split("<header>")
            .nth(1)
            .and_then(|rest| rest.split("</header>").next())
            .unwrap();
        assert_eq!(header.matches("<p>").count(), 1);
    }

    #[test]
    fn passes_markup_through_unescaped() {
        let brief = Brief {
            brand_name: "<Acme & Co>".to_string(),
            ..acme()
        };

        let output = serialize_draft(&build_draft(&brief));

        assert!(output.contains("<h1><Acme & Co> for makers</h1>"));
    }

    #[test]
    fn is_deterministic() {
        let brief = Brief::default();

        let first = serialize_draft(&build_draft(&brief));
        let second = serialize_draft(&build_draft(&brief));

        assert_eq!(first, second);
    }
}
