//! Template engine for rendering the studio page.

use minijinja::{context, Environment};
use serde::Serialize;

use vibewix_core::{build_draft, serialize_draft, Brief, Draft, Tone, FEATURE_PRESETS};

/// A tone button.
#[derive(Debug, Clone, Serialize)]
pub struct ToneOption {
    /// Button label (e.g., "Playful")
    pub label: String,
    /// Submitted value (e.g., "playful")
    pub value: String,
    /// Whether this is the brief's tone
    pub selected: bool,
}

/// A feature block toggle.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureOption {
    pub label: String,
    pub selected: bool,
}

/// Form endpoints for an interactive page.
#[derive(Debug, Clone, Serialize)]
pub struct FormActions {
    /// Endpoint receiving the text fields
    pub brief: String,
    /// Endpoint receiving the selected tone
    pub tone: String,
    /// Endpoint receiving a feature to toggle
    pub toggle_feature: String,
}

impl Default for FormActions {
    fn default() -> Self {
        Self {
            brief: "/brief".to_string(),
            tone: "/tone".to_string(),
            toggle_feature: "/features/toggle".to_string(),
        }
    }
}

/// Context for rendering the studio template.
#[derive(Debug, Clone, Serialize)]
pub struct StudioContext {
    /// Brief being edited
    pub brief: Brief,
    /// Tone selector buttons
    pub tones: Vec<ToneOption>,
    /// Feature block toggles
    pub features: Vec<FeatureOption>,
    /// Draft derived from the brief
    pub draft: Draft,
    /// Serialized React component
    pub jsx: String,
    /// Form endpoints; `None` renders a read-only page
    pub actions: Option<FormActions>,
}

impl StudioContext {
    /// Derive the full page context from a brief.
    pub fn from_brief(brief: &Brief, actions: Option<FormActions>) -> Self {
        let draft = build_draft(brief);
        let jsx = serialize_draft(&draft);

        let tones = Tone::ALL
            .into_iter()
            .map(|tone| ToneOption {
                label: tone.label().to_string(),
                value: tone.as_str().to_string(),
                selected: tone == brief.tone,
            })
            .collect();

        let features = FEATURE_PRESETS
            .into_iter()
            .map(|label| FeatureOption {
                label: label.to_string(),
                selected: brief.has_feature(label),
            })
            .collect();

        Self {
            brief: brief.clone(),
            tones,
            features,
            draft,
            jsx,
            actions,
        }
    }
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the studio templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Add base and studio templates
        env.add_template("base.html", BASE_TEMPLATE)
            .expect("Failed to add base template");
        env.add_template("studio.html", STUDIO_TEMPLATE)
            .expect("Failed to add studio template");

        Self { env }
    }

    /// Render the studio page.
    pub fn render_studio(&self, context: &StudioContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("studio.html")?;

        tmpl.render(context! {
            brief => &context.brief,
            tones => &context.tones,
            features => &context.features,
            draft => &context.draft,
            jsx => &context.jsx,
            actions => &context.actions,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ draft.headline }} - Vibe-Wix Starter Studio</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 1100px; margin: 2.5rem auto; padding: 0 1rem; }
    .grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }
    .panel { border: 1px solid #d4d4d8; border-radius: 0.5rem; padding: 1.25rem; }
    .choice { padding: 0.35rem 0.75rem; border-radius: 0.375rem; border: 1px solid #d4d4d8; background: #f4f4f5; }
    .choice.selected { background: #4f46e5; color: #fff; border-color: #4f46e5; }
    .choices { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .choices form { display: inline; }
    label { display: block; margin-bottom: 0.75rem; }
    input, textarea { width: 100%; box-sizing: border-box; padding: 0.5rem; }
    .output { background: #0f1115; color: #d1d5db; }
    pre { white-space: pre-wrap; font-size: 0.85rem; overflow-x: auto; }
    .cta { color: #4f46e5; font-size: 0.8rem; }
  </style>
</head>
<body>
  {% block content %}{% endblock %}
</body>
</html>"##;

const STUDIO_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<div>
  <h1>Vibe-Wix Starter Studio</h1>
  <p>Use this generator to draft a landing page structure inspired by Vibe-Wix workflows.</p>
</div>

<div class="grid">
  <section class="panel">
    <h2>Project brief</h2>
    {% if actions %}
    <form method="post" action="{{ actions.brief }}">
      <label>Brand name
        <input name="brand_name" value="{{ brief.brand_name }}">
      </label>
      <label>Target audience
        <input name="audience" value="{{ brief.audience }}">
      </label>
      <label>Primary goal
        <textarea name="primary_goal">{{ brief.primary_goal }}</textarea>
      </label>
      <button type="submit">Update brief</button>
    </form>
    {% else %}
    <dl>
      <dt>Brand name</dt><dd>{{ brief.brand_name }}</dd>
      <dt>Target audience</dt><dd>{{ brief.audience }}</dd>
      <dt>Primary goal</dt><dd>{{ brief.primary_goal }}</dd>
    </dl>
    {% endif %}

    <p>Tone</p>
    <div class="choices">
    {% for tone in tones %}
      {% if actions %}
      <form method="post" action="{{ actions.tone }}">
        <button type="submit" name="tone" value="{{ tone.value }}" class="choice{% if tone.selected %} selected{% endif %}">{{ tone.label }}</button>
      </form>
      {% else %}
      <span class="choice{% if tone.selected %} selected{% endif %}">{{ tone.label }}</span>
      {% endif %}
    {% endfor %}
    </div>

    <p>Feature blocks</p>
    <div class="choices">
    {% for feature in features %}
      {% if actions %}
      <form method="post" action="{{ actions.toggle_feature }}">
        <button type="submit" name="feature" value="{{ feature.label }}" class="choice{% if feature.selected %} selected{% endif %}">{{ feature.label }}</button>
      </form>
      {% else %}
      <span class="choice{% if feature.selected %} selected{% endif %}">{{ feature.label }}</span>
      {% endif %}
    {% endfor %}
    </div>
  </section>

  <section class="panel">
    <h2>Generated draft</h2>
    <div class="panel">
      <h3>{{ draft.headline }}</h3>
      <p>{{ draft.sub_headline }}</p>
    </div>
    <ul>
    {% for section in draft.sections %}
      <li id="draft-{{ section.id }}">
        <p><strong>{{ section.title }}</strong></p>
        <p>{{ section.description }}</p>
        {% if section.cta %}<p class="cta">CTA: {{ section.cta }}</p>{% endif %}
      </li>
    {% endfor %}
    </ul>
  </section>
</div>

<section class="panel output">
  <h2>React output</h2>
  <pre>{{ jsx }}</pre>
</section>
{% endblock %}"##;
