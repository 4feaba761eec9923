//! Wire types for the analyze-text jobs API and extraction of summaries from a finished job.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::core::models::{Summary, SummaryMode};
use crate::errors::SummaryError;

pub const DOCUMENT_ID: &str = "1";
pub const LANGUAGE: &str = "en";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeJobRequest<'a> {
    pub display_name: String,
    pub analysis_input: AnalysisInput<'a>,
    pub tasks: Vec<JobTask>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisInput<'a> {
    pub documents: Vec<InputDocument<'a>>,
}

#[derive(Debug, Serialize)]
pub struct InputDocument<'a> {
    pub id: &'a str,
    pub language: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTask {
    pub kind: &'static str,
    pub task_name: String,
    pub parameters: Value,
}

impl<'a> AnalyzeJobRequest<'a> {
    /// A single-document, single-task job for `mode`.
    #[must_use]
    pub fn single(mode: SummaryMode, text: &'a str, job_id: &str) -> Self {
        let parameters = match mode {
            SummaryMode::Extractive { max_sentences } => json!({ "sentenceCount": max_sentences }),
            SummaryMode::Abstractive => json!({}),
        };

        Self {
            display_name: format!("summarizer {mode} {job_id}"),
            analysis_input: AnalysisInput {
                documents: vec![InputDocument {
                    id: DOCUMENT_ID,
                    language: LANGUAGE,
                    text,
                }],
            },
            tasks: vec![JobTask {
                kind: mode.task_kind(),
                task_name: format!("{mode}-{job_id}"),
                parameters,
            }],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobStatus {
    NotStarted,
    Running,
    Cancelling,
    Succeeded,
    PartiallySucceeded,
    PartiallyCompleted,
    Failed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            JobStatus::Succeeded
                | JobStatus::PartiallySucceeded
                | JobStatus::PartiallyCompleted
                | JobStatus::Failed
                | JobStatus::Cancelled
        )
    }

    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, JobStatus::Failed | JobStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobState {
    pub status: JobStatus,
    #[serde(default)]
    pub errors: Vec<ServiceError>,
    #[serde(default)]
    pub tasks: Option<TaskList>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskList {
    #[serde(default)]
    pub items: Vec<TaskItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskItem {
    pub kind: String,
    #[serde(default)]
    pub results: Option<TaskResults>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskResults {
    #[serde(default)]
    pub documents: Vec<DocumentResult>,
    #[serde(default)]
    pub errors: Vec<DocumentError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentResult {
    pub id: String,
    #[serde(default)]
    pub sentences: Vec<TextSegment>,
    #[serde(default)]
    pub summaries: Vec<TextSegment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextSegment {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentError {
    pub id: String,
    pub error: ServiceError,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub innererror: Option<Box<ServiceError>>,
}

impl ServiceError {
    /// The most specific error the service reported.
    #[must_use]
    pub fn innermost(&self) -> &ServiceError {
        let mut current = self;
        while let Some(inner) = current.innererror.as_deref() {
            current = inner;
        }
        current
    }
}

/// Body of a non-success HTTP response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ServiceError,
}

/// Pulls the summary for document `DOCUMENT_ID` out of a job that reached a terminal status.
///
/// A document-level error wins over a job-level failure, so callers see the
/// service's explanation of what was wrong with the text.
pub fn extract_summary(state: &JobState, mode: SummaryMode) -> Result<Summary, SummaryError> {
    let results = state
        .tasks
        .as_ref()
        .and_then(|tasks| tasks.items.iter().find(|item| item.kind == mode.result_kind()))
        .and_then(|item| item.results.as_ref());

    if let Some(results) = results {
        if let Some(doc_error) = results.errors.iter().find(|e| e.id == DOCUMENT_ID) {
            let inner = doc_error.error.innermost();
            return Err(SummaryError::Document {
                code: inner.code.clone(),
                message: inner.message.clone(),
            });
        }

        if let Some(doc) = results.documents.iter().find(|d| d.id == DOCUMENT_ID) {
            let segments = match mode {
                SummaryMode::Extractive { .. } => &doc.sentences,
                SummaryMode::Abstractive => &doc.summaries,
            };
            return Ok(Summary::new(
                segments.iter().map(|s| s.text.clone()).collect(),
            ));
        }
    }

    if state.status.is_failure() {
        let message = state
            .errors
            .first()
            .map(|e| e.innermost().message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("job ended with status {:?}", state.status));
        return Err(SummaryError::Job(message));
    }

    Err(SummaryError::Protocol(format!(
        "job finished without a {} result for document {DOCUMENT_ID}",
        mode.result_kind()
    )))
}
