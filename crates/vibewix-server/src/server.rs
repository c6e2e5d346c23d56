//! Studio server implementation.

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use vibewix_core::Brief;

use crate::handlers::{self, StudioState};

/// Configuration for the studio server.
#[derive(Debug, Clone)]
pub struct StudioServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Open browser on start
    pub open: bool,

    /// Brief the studio starts from
    pub brief: Brief,
}

impl Default for StudioServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7777,
            open: true,
            brief: Brief::default(),
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    Bind(SocketAddr, String),

    #[error("Server error: {0}")]
    Serve(String),
}

/// Studio server.
pub struct StudioServer {
    config: StudioServerConfig,
}

impl StudioServer {
    /// Create a new studio server.
    pub fn new(config: StudioServerConfig) -> Self {
        Self { config }
    }

    /// Socket address from the configured host and port.
    pub fn addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        addr.parse().map_err(|_| ServerError::InvalidAddress(addr))
    }

    /// Start the studio server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = self.addr()?;
        let app = router(StudioState::new(self.config.brief.clone()));

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind(addr, e.to_string()))?;

        tracing::info!("Starting studio at http://{}", addr);

        // Open browser if configured
        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Serve(e.to_string()))?;

        Ok(())
    }
}

/// Build the studio router.
pub fn router(state: StudioState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/brief", post(handlers::update_brief))
        .route("/tone", post(handlers::select_tone))
        .route("/features/toggle", post(handlers::toggle_feature))
        .route("/LandingPage.jsx", get(handlers::component))
        .route(
            "/api/draft",
            get(handlers::current_draft).post(handlers::draft_for),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
