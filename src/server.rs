//! JSON HTTP API over the loop viewer.
//!
//! Routes:
//! - `GET /api/health`
//! - `GET /api/branches?repo=`
//! - `GET /api/run?repo=&branch=`
//! - `GET /api/iteration/{label}?repo=&branch=`

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;
use crate::domain::{IterationDetail, LoopRun};
use crate::error::{Result, ViewerError};
use crate::viewer::LoopViewer;

// ── App State ──

struct AppState {
    viewer: LoopViewer,
}

// ── Error Handling ──

/// Request failure mapped to an HTTP status
#[derive(Debug)]
pub enum ApiError {
    /// Required query parameter absent or empty
    MissingParameter(&'static str),
    Viewer(ViewerError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Viewer(ViewerError::IterationNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Viewer(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Viewer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::MissingParameter(message) => f.write_str(message),
            ApiError::Viewer(err) => write!(f, "{}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(error = %message, "request failed");
        } else {
            tracing::debug!(error = %message, status = status.as_u16(), "request rejected");
        }
        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

impl From<ViewerError> for ApiError {
    fn from(err: ViewerError) -> Self {
        ApiError::Viewer(err)
    }
}

fn required(value: Option<String>, message: &'static str) -> std::result::Result<String, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ApiError::MissingParameter(message))
}

// ── Entrypoint ──

/// Bind and serve until the process is stopped.
pub async fn serve(viewer: LoopViewer, config: &ServerConfig) -> Result<()> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "loopview HTTP server listening");
    eprintln!("loopview HTTP server listening on http://{addr}");
    axum::serve(listener, router(viewer)).await?;
    Ok(())
}

/// Build the router (for testing without binding to a port).
pub fn router(viewer: LoopViewer) -> Router {
    let state = Arc::new(AppState { viewer });
    Router::new()
        .route("/api/health", get(health))
        .route("/api/branches", get(get_branches))
        .route("/api/run", get(get_run))
        .route("/api/iteration/{label}", get(get_iteration))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Health ──

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

// ── GET /api/branches ──

#[derive(Deserialize)]
struct BranchesQuery {
    repo: Option<String>,
}

#[derive(Serialize)]
struct BranchesResponse {
    branches: Vec<String>,
}

async fn get_branches(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BranchesQuery>,
) -> std::result::Result<Json<BranchesResponse>, ApiError> {
    let repo = required(params.repo, "Missing \"repo\" query parameter")?;
    let branches = state.viewer.list_branches(&repo).await?;
    Ok(Json(BranchesResponse { branches }))
}

// ── GET /api/run ──

#[derive(Deserialize)]
struct RunQuery {
    repo: Option<String>,
    branch: Option<String>,
}

impl RunQuery {
    fn into_parts(self) -> std::result::Result<(String, String), ApiError> {
        const MESSAGE: &str = "Missing \"repo\" or \"branch\" query parameter";
        Ok((required(self.repo, MESSAGE)?, required(self.branch, MESSAGE)?))
    }
}

async fn get_run(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RunQuery>,
) -> std::result::Result<Json<LoopRun>, ApiError> {
    let (repo, branch) = params.into_parts()?;
    let run = state.viewer.load_run(&repo, &branch).await?;
    Ok(Json(run))
}

// ── GET /api/iteration/{label} ──

async fn get_iteration(
    State(state): State<Arc<AppState>>,
    Path(label): Path<String>,
    Query(params): Query<RunQuery>,
) -> std::result::Result<Json<IterationDetail>, ApiError> {
    let (repo, branch) = params.into_parts()?;
    let detail = state.viewer.iteration_detail(&repo, &branch, &label).await?;
    Ok(Json(detail))
}

// ── Tests ──
