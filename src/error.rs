//! Common error type and result alias for the service.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Network-level failure talking to the generation service.
    #[error("request to generation service failed: {0}")]
    HttpClient(reqwest::Error),

    /// The generation service answered with a non-success status.
    #[error("generation service returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The generation service answered 200 but the payload was not
    /// in the expected shape.
    #[error("unexpected response from generation service: {0}")]
    InvalidResponse(String),

    /// The generation service reported the job as failed.
    #[error("generation failed: {0}")]
    GenerationFailed(String),

    /// Polling exhausted the attempt bound without a terminal status.
    #[error("timed out waiting for image generation after {attempts} attempts")]
    Timeout { attempts: u32 },

    /// Bad request body or parameters.
    #[error("{0}")]
    Validation(String),

    /// Missing or unusable runtime configuration.
    #[error("{0}")]
    Config(String),

    /// Requested page or asset does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
