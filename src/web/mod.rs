//! Web API module for TokenGuide.
//!
//! This module provides a REST API so a browser front end can submit
//! token files and color pairs and display the structured results.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/guideline` - Parse a token file and build its guideline
//! - `GET /api/guideline/latest` - Last successfully built guideline
//! - `GET /api/guideline/markdown` - Last guideline rendered as markdown
//! - `POST /api/contrast` - Check a foreground/background pair
//! - `GET /api/contrast/explanation` - WCAG level explanation

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::constants::{APP_NAME, MISSING_FILE_MESSAGE};
use crate::export;
use crate::models::GuidelineModel;
use crate::parser::TokenParseError;
use crate::services::contrast_checker::{
    check_inputs, ContrastResponse, WCAG_EXPLANATION, WCAG_EXPLANATION_TITLE,
};
use crate::services::generate_guideline;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Most recent successful guideline; later submissions overwrite it
    latest: Arc<RwLock<Option<GuidelineModel>>>,
}

impl AppState {
    /// Creates a new application state with no guideline yet.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            latest: Arc::new(RwLock::new(None)),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Application name.
    pub name: String,
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Token file submitted for guideline generation.
#[derive(Debug, Deserialize)]
pub struct GuidelineRequest {
    /// Uploaded file name; its suffix selects the parser.
    #[serde(default)]
    pub file_name: String,
    /// Full file text.
    #[serde(default)]
    pub content: String,
}

/// Color pair submitted to the contrast checker.
#[derive(Debug, Deserialize)]
pub struct ContrastRequest {
    /// Text color as typed.
    pub foreground: String,
    /// Background color as typed.
    pub background: String,
}

/// WCAG explanation response.
#[derive(Debug, Serialize)]
pub struct ExplanationResponse {
    /// Section title.
    pub title: String,
    /// Explanation paragraphs.
    pub paragraphs: Vec<String>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// Reports malformed request bodies in the same shape as other API errors.
fn rejection_error(rejection: JsonRejection) -> (StatusCode, Json<ApiError>) {
    (rejection.status(), Json(ApiError::new(rejection.body_text())))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        name: APP_NAME.to_string(),
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/guideline - Build a guideline from a submitted token file.
///
/// Parse failures are reported with one generic message; the cause is
/// only logged. A failure leaves the previous guideline in place.
async fn create_guideline(
    State(state): State<AppState>,
    request: Result<Json<GuidelineRequest>, JsonRejection>,
) -> ApiResult<Json<GuidelineModel>> {
    let Json(request) = request.map_err(rejection_error)?;
    if request.file_name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(MISSING_FILE_MESSAGE)),
        ));
    }

    let model = generate_guideline(&request.file_name, &request.content).map_err(|e| {
        warn!(file = %request.file_name, error = %e, "Failed to parse token file");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiError::new(TokenParseError::USER_MESSAGE)),
        )
    })?;

    *state.latest.write().await = Some(model.clone());

    Ok(Json(model))
}

async fn latest_model(state: &AppState) -> ApiResult<GuidelineModel> {
    state.latest.read().await.clone().ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::new("No guideline has been generated yet")),
        )
    })
}

/// GET /api/guideline/latest - Last successfully generated guideline.
async fn get_latest_guideline(State(state): State<AppState>) -> ApiResult<Json<GuidelineModel>> {
    latest_model(&state).await.map(Json)
}

/// GET /api/guideline/markdown - Last guideline rendered as markdown.
async fn get_latest_markdown(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let model = latest_model(&state).await?;
    let markdown = export::generate_guideline_markdown(&model, &state.config.guideline.title);

    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        markdown,
    ))
}

/// POST /api/contrast - Contrast between two colors.
async fn check_contrast(
    request: Result<Json<ContrastRequest>, JsonRejection>,
) -> ApiResult<Json<ContrastResponse>> {
    let Json(request) = request.map_err(rejection_error)?;
    let check = check_inputs(&request.foreground, &request.background);

    Ok(Json(ContrastResponse::from(check)))
}

/// GET /api/contrast/explanation - How the WCAG levels work.
async fn get_explanation() -> Json<ExplanationResponse> {
    Json(ExplanationResponse {
        title: WCAG_EXPLANATION_TITLE.to_string(),
        paragraphs: WCAG_EXPLANATION.iter().map(ToString::to_string).collect(),
    })
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for development
    // NOTE: This permissive CORS policy is intended for local use only; the
    // server is meant to run on the user's machine alongside the front end.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Guideline endpoints
        .route("/api/guideline", post(create_guideline))
        .route("/api/guideline/latest", get(get_latest_guideline))
        .route("/api/guideline/markdown", get(get_latest_markdown))
        // Contrast endpoints
        .route("/api/contrast", post(check_contrast))
        .route("/api/contrast/explanation", get(get_explanation))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config);
    let app = create_router(state);

    info!("Starting {} web server on {}", APP_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
