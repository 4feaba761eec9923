//! Azure AI Language client
//!
//! Submits analyze-text summarization jobs and polls them until they finish.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};
use reqwest::{Client, Response};
use tokio::time::Instant;
use tracing::{debug, error, info};
use url::Url;
use uuid::Uuid;

use super::jobs::{AnalyzeJobRequest, ErrorResponse, JobState, extract_summary};
use crate::core::config::Credentials;
use crate::core::models::{Summary, SummaryMode};
use crate::errors::{ConfigError, SummaryError};

pub const DEFAULT_API_VERSION: &str = "2023-04-01";

const JOBS_PATH: &str = "language/analyze-text/jobs";
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OPERATION_LOCATION_HEADER: &str = "Operation-Location";

/// Tunables for talking to the Language service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub api_version: String,
    /// Delay between polls when the service sends no `Retry-After`.
    pub poll_interval: Duration,
    /// Upper bound on the time spent polling one job.
    pub poll_timeout: Duration,
    /// Timeout applied to each individual HTTP call.
    pub request_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            poll_interval: Duration::from_secs(1),
            poll_timeout: Duration::from_secs(300),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Authenticated handle to one Language resource. Built per request.
pub struct LanguageClient {
    http: Client,
    endpoint: Url,
    api_key: String,
    options: ClientOptions,
}

impl LanguageClient {
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an absolute URL, the key is not
    /// a valid header value, or the HTTP client cannot be built.
    pub fn new(credentials: &Credentials, options: ClientOptions) -> Result<Self, ConfigError> {
        let mut raw = credentials.endpoint.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let endpoint = Url::parse(&raw).map_err(|e| ConfigError::Invalid {
            name: crate::core::config::ENDPOINT_VAR.to_string(),
            value: credentials.endpoint.clone(),
            reason: e.to_string(),
        })?;

        HeaderValue::from_str(&credentials.api_key).map_err(|e| ConfigError::Invalid {
            name: crate::core::config::KEY_VAR.to_string(),
            value: "<redacted>".to_string(),
            reason: e.to_string(),
        })?;

        let http = Client::builder()
            .timeout(options.request_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            api_key: credentials.api_key.clone(),
            options,
        })
    }

    /// Runs one summarization job for `text` and waits for its result.
    ///
    /// Failures are logged here with their full detail before being returned.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] describing why no summary was produced.
    #[tracing::instrument(level = "info", skip_all, fields(mode = %mode))]
    pub async fn summarize(&self, mode: SummaryMode, text: &str) -> Result<Summary, SummaryError> {
        #[cfg(feature = "debug-logs")]
        info!("Summarizing text:\n{}", text);

        #[cfg(not(feature = "debug-logs"))]
        info!("Summarizing {} characters of text", text.chars().count());

        let result = self.run_job(mode, text).await;

        match &result {
            Ok(summary) => info!(segments = summary.segments().len(), "Summary ready"),
            Err(e) => error!(kind = e.kind(), "{} summarization failed: {}", mode, e),
        }

        result
    }

    async fn run_job(&self, mode: SummaryMode, text: &str) -> Result<Summary, SummaryError> {
        let location = self.submit_job(mode, text).await?;
        let state = self.wait_for_job(&location).await?;
        extract_summary(&state, mode)
    }

    fn jobs_url(&self) -> Result<Url, SummaryError> {
        let mut url = self
            .endpoint
            .join(JOBS_PATH)
            .map_err(|e| SummaryError::Protocol(format!("Invalid jobs URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("api-version", &self.options.api_version);
        Ok(url)
    }

    /// Submits the job and returns its operation location.
    async fn submit_job(&self, mode: SummaryMode, text: &str) -> Result<Url, SummaryError> {
        let job_id = Uuid::new_v4().to_string();
        let body = AnalyzeJobRequest::single(mode, text, &job_id);

        let response = self
            .http
            .post(self.jobs_url()?)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SummaryError::Http(format!("Job submission failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(service_error(response).await);
        }

        let location = response
            .headers()
            .get(OPERATION_LOCATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                SummaryError::Protocol(format!(
                    "Job submission returned {status} without an {OPERATION_LOCATION_HEADER} header"
                ))
            })?;

        let location = Url::parse(location)
            .or_else(|_| self.endpoint.join(location))
            .map_err(|e| {
                SummaryError::Protocol(format!("Invalid {OPERATION_LOCATION_HEADER} {location:?}: {e}"))
            })?;

        debug!(job_id = %job_id, operation = %location, "Job submitted");
        Ok(location)
    }

    /// Polls the operation until it reaches a terminal status or the poll deadline passes.
    async fn wait_for_job(&self, location: &Url) -> Result<JobState, SummaryError> {
        let deadline = Instant::now() + self.options.poll_timeout;
        let mut polls = 0u32;

        loop {
            let (state, retry_after) = self.fetch_job(location).await?;
            polls += 1;

            if state.status.is_terminal() {
                debug!(polls, status = ?state.status, "Job finished");
                return Ok(state);
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(SummaryError::Timeout(self.options.poll_timeout));
            }

            // Never sleep past the deadline; the last poll happens right at it.
            let delay = retry_after
                .unwrap_or(self.options.poll_interval)
                .min(remaining);
            debug!(polls, status = ?state.status, delay = ?delay, "Job still running");
            tokio::time::sleep(delay).await;
        }
    }

    async fn fetch_job(&self, location: &Url) -> Result<(JobState, Option<Duration>), SummaryError> {
        let response = self
            .http
            .get(location.clone())
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| SummaryError::Http(format!("Job status request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(service_error(response).await);
        }

        let retry_after = retry_after(response.headers());
        let state: JobState = response
            .json()
            .await
            .map_err(|e| SummaryError::Protocol(format!("Failed to parse job status: {e}")))?;

        Ok((state, retry_after))
    }
}

/// Seconds from a `Retry-After` header. HTTP-date values are ignored.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

async fn service_error(response: Response) -> SummaryError {
    let status = response.status();
    let body = response.text().await.unwrap_or_else(|e| {
        format!("Failed to read error response body (status {status}): {e}")
    });

    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|r| {
            let inner = r.error.innermost();
            if inner.code.is_empty() {
                inner.message.clone()
            } else {
                format!("{}: {}", inner.code, inner.message)
            }
        })
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body
            }
        });

    SummaryError::Service {
        status: status.as_u16(),
        message,
    }
}
