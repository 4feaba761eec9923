use std::time::Duration;

use thiserror::Error;

/// Why a single summarization call did not produce a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The service accepted the job but rejected the document itself.
    #[error("Document rejected by the Language service ({code}): {message}")]
    Document { code: String, message: String },

    #[error("Summarization job did not succeed: {0}")]
    Job(String),

    #[error("Language service returned status {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Unexpected response from the Language service: {0}")]
    Protocol(String),

    #[error("Summarization job did not finish within {0:?}")]
    Timeout(Duration),
}

impl SummaryError {
    /// Short, stable name for the failure, used as a structured log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            SummaryError::Document { .. } => "document",
            SummaryError::Job(_) => "job",
            SummaryError::Service { .. } => "service",
            SummaryError::Http(_) => "http",
            SummaryError::Protocol(_) => "protocol",
            SummaryError::Timeout(_) => "timeout",
        }
    }
}

/// Missing or malformed configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(String),

    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}
