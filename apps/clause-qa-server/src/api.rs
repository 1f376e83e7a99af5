//! API handlers for the Clause QA server
//!
//! Provides REST endpoints for:
//! - Health check
//! - Clause list analysis (projection + issue report)

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use clause_engine::{parse_clauses, Analysis, ClauseEngine};
use serde::{Deserialize, Serialize};
use shared_types::{DisplayClause, IssueReport};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ServerError;
use crate::AppState;

/// Build the API router (rate limiting is layered on by `app` in `main`)
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // Analysis endpoints
        .route("/api/analyze", post(handle_analyze))
        .route("/analyze", post(handle_analyze))
        // Apply middleware
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "clause-qa-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Analysis response
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub clauses: Vec<DisplayClause>,
    pub issues: IssueReport,
    pub issue_count: usize,
    pub clean: bool,
}

impl From<Analysis> for AnalyzeResponse {
    fn from(analysis: Analysis) -> Self {
        let issue_count = analysis.issues.total();
        Self {
            success: true,
            clauses: analysis.clauses,
            issues: analysis.issues,
            issue_count,
            clean: issue_count == 0,
        }
    }
}

/// Handler: POST /api/analyze
///
/// Body is `{ "clauses": [...] }` (a bare array is accepted as well).
/// Individual malformed records never fail the request; only a body that is
/// not a clause sequence does.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ServerError> {
    let request_id = Uuid::new_v4();
    let Json(body) = payload?;

    let clauses = parse_clauses(&body)?;
    if clauses.len() > state.max_clauses {
        return Err(ServerError::TooManyClauses {
            count: clauses.len(),
            max: state.max_clauses,
        });
    }

    let analysis = ClauseEngine::new().analyze(&clauses);
    info!(
        "Analysis {}: {} clauses, {} gaps, {} empty titles, {} invalid pages",
        request_id,
        clauses.len(),
        analysis.issues.continuity_gaps.len(),
        analysis.issues.empty_titles.len(),
        analysis.issues.invalid_pages.len()
    );
    debug!("Analysis {} report:\n{}", request_id, analysis.issues.to_text());

    Ok(Json(analysis.into()))
}
