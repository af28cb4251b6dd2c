//! Types shared by the generation client and the API layer.
use serde_json::{json, Value};

/// Lifecycle of a generation job as tracked by this service.
///
/// `Pending` and `Complete`/`Failed` mirror the upstream status strings;
/// `Timeout` is assigned locally when the polling bound is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Complete,
    Failed,
    Timeout,
}

impl JobStatus {
    /// Map an upstream status string. `None` for statuses we do not know,
    /// which the client treats as a fatal payload problem.
    pub fn from_upstream(status: &str) -> Option<Self> {
        match status {
            "PENDING" => Some(JobStatus::Pending),
            "COMPLETE" => Some(JobStatus::Complete),
            "FAILED" => Some(JobStatus::Failed),
            _ => None,
        }
    }

    /// Terminal statuses stop the polling loop.
    pub fn is_terminal(self) -> bool {
        !matches!(self, JobStatus::Pending)
    }
}

/// One generation job, request-local. Never persisted or shared.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub id: String,
    pub status: JobStatus,
    pub image_url: Option<String>,
}

impl GenerationJob {
    pub fn timed_out(id: impl Into<String>) -> Self {
        GenerationJob { id: id.into(), status: JobStatus::Timeout, image_url: None }
    }
}

/// Default model: Leonardo Creative.
pub const DEFAULT_MODEL_ID: &str = "6bef9f1b-29cb-40c7-b9df-32b51c1f67d3";

const DEFAULT_NEGATIVE_PROMPT: &str = "text, letters, watermark, signature, blurry, low quality";

/// Full parameter set for one generation submission.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub prompt: String,
    pub model_id: String,
    pub width: u32,
    pub height: u32,
    pub negative_prompt: String,
    pub num_images: u8,
    pub guidance_scale: u8,
    pub init_strength: f64,
}

impl GenerationParams {
    /// Parameters used for coin images, matching the deployed site.
    pub fn for_prompt(prompt: impl Into<String>) -> Self {
        GenerationParams {
            prompt: prompt.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            width: 512,
            height: 512,
            negative_prompt: DEFAULT_NEGATIVE_PROMPT.to_string(),
            num_images: 4,
            guidance_scale: 7,
            init_strength: 0.4,
        }
    }

    /// Request body in the generation service's wire format.
    pub fn to_body(&self) -> Value {
        json!({
            "prompt": self.prompt,
            "modelId": self.model_id,
            "width": self.width,
            "height": self.height,
            "negative_prompt": self.negative_prompt,
            "num_images": self.num_images,
            "guidance_scale": self.guidance_scale,
            "init_strength": self.init_strength,
        })
    }
}
