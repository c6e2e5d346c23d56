//! Request handlers and shared studio state.

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use vibewix_core::{build_draft, serialize_draft, Brief, Draft, Tone};
use vibewix_studio::{FormActions, StudioContext, TemplateEngine};

/// Shared server state: the brief being edited.
#[derive(Clone)]
pub struct StudioState {
    brief: Arc<RwLock<Brief>>,
    templates: Arc<TemplateEngine>,
}

impl StudioState {
    /// Create state seeded with a brief.
    pub fn new(brief: Brief) -> Self {
        Self {
            brief: Arc::new(RwLock::new(brief)),
            templates: Arc::new(TemplateEngine::new()),
        }
    }

    /// Snapshot of the current brief.
    pub async fn brief(&self) -> Brief {
        self.brief.read().await.clone()
    }
}

/// Draft and component derived from a brief.
#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub brief: Brief,
    pub draft: Draft,
    pub jsx: String,
}

impl DraftResponse {
    fn from_brief(brief: Brief) -> Self {
        let draft = build_draft(&brief);
        let jsx = serialize_draft(&draft);
        Self { brief, draft, jsx }
    }
}

/// Text fields of the brief form.
#[derive(Debug, Deserialize)]
pub struct BriefForm {
    pub brand_name: String,
    pub audience: String,
    pub primary_goal: String,
}

#[derive(Debug, Deserialize)]
pub struct ToneForm {
    pub tone: String,
}

#[derive(Debug, Deserialize)]
pub struct FeatureForm {
    pub feature: String,
}

/// Studio page for the current brief.
pub async fn index(State(state): State<StudioState>) -> Response {
    let brief = state.brief().await;
    let context = StudioContext::from_brief(&brief, Some(FormActions::default()));

    match state.templates.render_studio(&context) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render studio page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render studio page").into_response()
        }
    }
}

/// Replace the brief's text fields.
pub async fn update_brief(
    State(state): State<StudioState>,
    Form(form): Form<BriefForm>,
) -> Redirect {
    let mut brief = state.brief.write().await;
    brief.brand_name = form.brand_name;
    brief.audience = form.audience;
    brief.primary_goal = form.primary_goal;
    tracing::debug!("Brief updated: {}", brief.brand_name);

    Redirect::to("/")
}

/// Select the brief's tone.
pub async fn select_tone(
    State(state): State<StudioState>,
    Form(form): Form<ToneForm>,
) -> Result<Redirect, (StatusCode, String)> {
    let tone = form
        .tone
        .parse::<Tone>()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    state.brief.write().await.tone = tone;
    tracing::debug!("Tone selected: {}", tone);

    Ok(Redirect::to("/"))
}

/// Toggle a feature block.
pub async fn toggle_feature(
    State(state): State<StudioState>,
    Form(form): Form<FeatureForm>,
) -> Redirect {
    let selected = state.brief.write().await.toggle_feature(&form.feature);
    tracing::debug!("Feature '{}' selected: {}", form.feature, selected);

    Redirect::to("/")
}

/// Serialized component for the current brief.
pub async fn component(State(state): State<StudioState>) -> impl IntoResponse {
    let jsx = serialize_draft(&build_draft(&state.brief().await));
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], jsx)
}

/// Draft for the current brief.
pub async fn current_draft(State(state): State<StudioState>) -> Json<DraftResponse> {
    Json(DraftResponse::from_brief(state.brief().await))
}

/// Draft for a posted brief; the studio state is left untouched.
pub async fn draft_for(Json(brief): Json<Brief>) -> Json<DraftResponse> {
    Json(DraftResponse::from_brief(brief))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn index_renders_current_brief() {
        let state = StudioState::new(Brief::default());

        let response = index(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Studio Pulse for independent creators"));
        assert!(html.contains(r#"action="&#x2f;features&#x2f;toggle""#));
    }

    #[tokio::test]
    async fn update_brief_replaces_text_fields() {
        let state = StudioState::new(Brief::default());

        let redirect = update_brief(
            State(state.clone()),
            Form(BriefForm {
                brand_name: "Acme".to_string(),
                audience: "makers".to_string(),
                primary_goal: "Grow signups".to_string(),
            }),
        )
        .await;

        assert_eq!(redirect.into_response().status(), StatusCode::SEE_OTHER);
        let brief = state.brief().await;
        assert_eq!(brief.brand_name, "Acme");
        assert_eq!(brief.features, vec!["Booking", "Analytics"]);
    }

    #[tokio::test]
    async fn select_tone_updates_state() {
        let state = StudioState::new(Brief::default());

        let result = select_tone(
            State(state.clone()),
            Form(ToneForm {
                tone: "luxury".to_string(),
            }),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(state.brief().await.tone, Tone::Luxury);
    }

    #[tokio::test]
    async fn select_tone_rejects_unknown_value() {
        let state = StudioState::new(Brief::default());

        let result = select_tone(
            State(state.clone()),
            Form(ToneForm {
                tone: "grunge".to_string(),
            }),
        )
        .await;

        let (status, message) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("grunge"));
        assert_eq!(state.brief().await.tone, Tone::Clean);
    }

    #[tokio::test]
    async fn toggle_feature_flips_selection() {
        let state = StudioState::new(Brief::default());

        let redirect = toggle_feature(
            State(state.clone()),
            Form(FeatureForm {
                feature: "Booking".to_string(),
            }),
        )
        .await;
        assert_eq!(redirect.into_response().status(), StatusCode::SEE_OTHER);
        assert_eq!(state.brief().await.features, vec!["Analytics"]);

        let redirect = toggle_feature(
            State(state.clone()),
            Form(FeatureForm {
                feature: "Booking".to_string(),
            }),
        )
        .await;
        assert_eq!(redirect.into_response().status(), StatusCode::SEE_OTHER);
        assert_eq!(state.brief().await.features, vec!["Analytics", "Booking"]);
    }

    #[tokio::test]
    async fn component_is_plain_text() {
        let state = StudioState::new(Brief::default());

        let response = component(State(state)).await.into_response();

        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        let jsx = body_text(response).await;
        assert!(jsx.starts_with("export function LandingPage() {"));
        assert_eq!(jsx.matches("<section").count(), 4);
    }

    #[tokio::test]
    async fn api_draft_follows_state() {
        let state = StudioState::new(Brief::default());
        state.brief.write().await.features.clear();

        let Json(response) = current_draft(State(state)).await;

        assert!(response.draft.sub_headline.ends_with("Core features: fast setup."));
        assert_eq!(response.jsx, serialize_draft(&response.draft));
    }
}
