//! Thin HTTP client for the Leonardo generation endpoints.
//!
//! - `create_generation` posts the composed parameters to `/generations`.
//! - `get_generation` fetches `/generations/{id}` and maps it to a job.
//! - `await_completion` polls until the job is terminal or the bound runs out.
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::leonardo::types::{GenerationJob, GenerationParams, JobStatus};

const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);
const POLL_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct LeonardoClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LeonardoClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base = base_url.into().trim_end_matches('/').to_string();
        LeonardoClient { client: Client::new(), base_url: base, api_key: api_key.into() }
    }

    /// Submit a generation job. Returns the job id assigned upstream.
    ///
    /// A non-success status aborts immediately with the upstream response
    /// text preserved; submission is never retried.
    pub async fn create_generation(&self, params: &GenerationParams) -> AppResult<String> {
        let url = format!("{}/generations", self.base_url);
        tracing::info!("Submitting generation to {}", url);

        let response = self.client.post(&url)
            .bearer_auth(&self.api_key)
            .timeout(SUBMIT_TIMEOUT)
            .json(&params.to_body())
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            tracing::error!("Generation submission rejected. Status: {}, Body: {}", status, body);
            return Err(AppError::Upstream { status, body });
        }

        let json: Value = response.json().await.map_err(AppError::HttpClient)?;
        let job_id = json
            .pointer("/sdGenerationJob/generationId")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AppError::InvalidResponse("missing sdGenerationJob.generationId".to_string()))?;
        tracing::info!("Generation job {} accepted", job_id);
        Ok(job_id.to_string())
    }

    /// Query job status once.
    ///
    /// Network failures and non-success statuses surface as errors here;
    /// `await_completion` decides whether they abort the wait. A payload we
    /// cannot interpret is always `InvalidResponse`.
    pub async fn get_generation(&self, job_id: &str) -> AppResult<GenerationJob> {
        let url = format!("{}/generations/{}", self.base_url, job_id);
        let response = self.client.get(&url)
            .bearer_auth(&self.api_key)
            .timeout(POLL_TIMEOUT)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(AppError::Upstream { status, body });
        }

        let json: Value = response.json().await.map_err(AppError::HttpClient)?;
        let generation = json
            .get("generations_by_pk")
            .filter(|v| !v.is_null())
            .ok_or_else(|| AppError::InvalidResponse("missing generations_by_pk".to_string()))?;

        let status_str = generation
            .get("status")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AppError::InvalidResponse("missing generation status".to_string()))?;
        let status = JobStatus::from_upstream(status_str)
            .ok_or_else(|| AppError::InvalidResponse(format!("unknown generation status '{}'", status_str)))?;

        let image_url = generation
            .get("generated_images")
            .and_then(|v| v.as_array())
            .and_then(|images| images.first())
            .and_then(|img| img.get("url"))
            .and_then(|v| v.as_str())
            .map(String::from);

        Ok(GenerationJob { id: job_id.to_string(), status, image_url })
    }

    /// Poll until the job reaches a terminal status, with a fixed delay
    /// between attempts. Exhausting the bound yields a `Timeout` job.
    ///
    /// Policy: a poll attempt that fails at the network or HTTP level is
    /// transient and consumes one attempt; a malformed payload aborts.
    pub async fn await_completion(
        &self,
        job_id: &str,
        max_attempts: u32,
        interval: Duration,
    ) -> AppResult<GenerationJob> {
        for attempt in 1..=max_attempts {
            match self.get_generation(job_id).await {
                Ok(job) if job.status.is_terminal() => {
                    tracing::info!("Generation job {} terminal after {} polls: {:?}", job_id, attempt, job.status);
                    return Ok(job);
                }
                Ok(_) => {
                    tracing::debug!("Generation job {} still pending (attempt {}/{})", job_id, attempt, max_attempts);
                }
                Err(AppError::HttpClient(e)) => {
                    tracing::warn!("Poll attempt {}/{} for job {} failed: {}", attempt, max_attempts, job_id, e);
                }
                Err(AppError::Upstream { status, .. }) => {
                    tracing::warn!("Poll attempt {}/{} for job {} returned HTTP {}", attempt, max_attempts, job_id, status);
                }
                Err(e) => return Err(e),
            }
            if attempt < max_attempts {
                tokio::time::sleep(interval).await;
            }
        }
        tracing::warn!("Generation job {} did not complete within {} attempts", job_id, max_attempts);
        Ok(GenerationJob::timed_out(job_id))
    }
}
