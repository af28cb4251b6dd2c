//! Axum request handlers for the HTTP API.
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::routes::AppState;
use crate::error::AppError;
use crate::leonardo::types::{GenerationParams, JobStatus};
use crate::metadata::CoinMetadata;
use crate::prompt::constructor::ComposedPrompt;
use crate::prompt::styles;

/// Single conversion point from error kind to HTTP status and the
/// `{"error": ...}` envelope. Upstream 4xx statuses pass through; every
/// other upstream failure collapses to 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub image_url: String,
    pub name: String,
    pub ticker: String,
    pub description: String,
    pub social_links: Vec<String>,
    pub success: bool,
}

/// `POST /api/generate`: validate the idea, compose the prompt, submit a
/// generation job, poll it to a terminal status, and answer with the image
/// URL plus synthesized coin metadata.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::Validation("Invalid JSON".to_string()))?;

    let idea = payload
        .get("idea")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Field 'idea' is required and must be a non-empty string".to_string()))?;
    let style_key = payload
        .get("artStyle")
        .and_then(|v| v.as_str())
        .unwrap_or(styles::DEFAULT_STYLE);

    let client = state
        .leonardo
        .as_ref()
        .ok_or_else(|| AppError::Config("LEONARDO_API_KEY is not configured".to_string()))?;

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, idea, style = style_key, "starting generation request");

    let prompt = ComposedPrompt::compose(idea, style_key);
    let params = GenerationParams::for_prompt(prompt.text());
    let job_id = client.create_generation(&params).await?;
    let job = client
        .await_completion(&job_id, state.poll_max_attempts, state.poll_interval)
        .await?;

    match job.status {
        JobStatus::Complete => {
            let image_url = job.image_url.ok_or_else(|| {
                AppError::InvalidResponse("generation completed without any images".to_string())
            })?;
            let meta = CoinMetadata::synthesize(idea);
            tracing::info!(%request_id, %image_url, "generation complete");
            Ok(Json(GenerateResponse {
                image_url,
                name: meta.name,
                ticker: meta.ticker,
                description: meta.description,
                social_links: meta.social_links,
                success: true,
            }))
        }
        JobStatus::Failed => Err(AppError::GenerationFailed(format!("job {} reported FAILED", job.id))),
        JobStatus::Timeout => Err(AppError::Timeout { attempts: state.poll_max_attempts }),
        // await_completion only returns terminal jobs
        JobStatus::Pending => Err(AppError::InvalidResponse("poll loop returned a non-terminal job".to_string())),
    }
}

/// Plain OPTIONS outside a browser preflight; the CORS layer answers real
/// preflights before this handler runs.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// `GET /api/styles`: the style keys the generator page can offer.
pub async fn styles_index() -> Json<Value> {
    Json(json!({ "styles": styles::known_styles(), "default": styles::DEFAULT_STYLE }))
}

pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    serve_page(&state.static_dir, "index.html").await
}

pub async fn generator(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    serve_page(&state.static_dir, "generator.html").await
}

pub async fn whitepaper(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    serve_page(&state.static_dir, "whitepaper.html").await
}

async fn serve_page(static_dir: &str, file: &str) -> Result<Html<String>, AppError> {
    let path = format!("{}/{}", static_dir.trim_end_matches('/'), file);
    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => Ok(Html(contents)),
        Err(e) => {
            tracing::error!("Failed to read page {}: {}", path, e);
            Err(AppError::NotFound(file.to_string()))
        }
    }
}

pub async fn asset_error(err: std::io::Error) -> Response {
    tracing::error!("Asset service error: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "asset service error" }))).into_response()
}
