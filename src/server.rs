//! HTTP surface: the landing page plus a small JSON API.
//!
//! `/flights` and `/hotels` are linked from the page but owned by the
//! routing layer in front of this service, so they are not mounted here.

use crate::config::Config;
use crate::i18n::{
    resolve, resolve_code, DisplayRecord, I18nError, Language, LanguageConfig, LanguageRegistry,
    MetricsReport, ResolutionMetrics,
};
use crate::render::render_page;
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub default_language: Language,
}

impl From<&Config> for AppState {
    fn from(config: &Config) -> Self {
        Self {
            default_language: config.default_language,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LandingQuery {
    lang: Option<String>,
}

/// JSON API error.
#[derive(Debug)]
pub struct ApiError(I18nError);

impl From<I18nError> for ApiError {
    fn from(err: I18nError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            I18nError::UnknownLanguage(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/health", get(health))
        .route("/api/languages", get(list_languages))
        .route("/api/translations/:code", get(get_translation))
        .route("/api/metrics", get(get_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &Config) -> Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Listening on http://{}", address);
    axum::serve(listener, build_router(AppState::from(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("{}", ResolutionMetrics::global().report().summary());
    Ok(())
}

async fn landing_page(
    State(state): State<AppState>,
    Query(query): Query<LandingQuery>,
) -> Html<String> {
    let (language, record) = resolve_code(query.lang.as_deref(), state.default_language);
    Html(render_page(language, &record))
}

async fn health() -> &'static str {
    "OK"
}

async fn list_languages() -> Json<Vec<&'static LanguageConfig>> {
    Json(LanguageRegistry::get().list_all())
}

async fn get_translation(Path(code): Path<String>) -> Result<Json<DisplayRecord>, ApiError> {
    let language = Language::from_code(&code)?;
    Ok(Json(resolve(language)))
}

async fn get_metrics() -> Json<MetricsReport> {
    let report = ResolutionMetrics::global().report();
    debug!("{}", report.summary());
    Json(report)
}
