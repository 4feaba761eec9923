use std::fmt;

/// Which kind of summary to ask the Language service for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    /// Up to `max_sentences` sentences copied verbatim from the input.
    Extractive { max_sentences: u32 },
    /// Freely generated condensed text.
    Abstractive,
}

impl SummaryMode {
    pub const DEFAULT_EXTRACTIVE_SENTENCES: u32 = 3;

    /// Extractive mode with the default sentence count.
    #[must_use]
    pub const fn extractive() -> Self {
        SummaryMode::Extractive {
            max_sentences: Self::DEFAULT_EXTRACTIVE_SENTENCES,
        }
    }

    /// Task kind sent in the job submission.
    #[must_use]
    pub const fn task_kind(self) -> &'static str {
        match self {
            SummaryMode::Extractive { .. } => "ExtractiveSummarization",
            SummaryMode::Abstractive => "AbstractiveSummarization",
        }
    }

    /// Task kind reported back in the job state.
    #[must_use]
    pub const fn result_kind(self) -> &'static str {
        match self {
            SummaryMode::Extractive { .. } => "ExtractiveSummarizationLROResults",
            SummaryMode::Abstractive => "AbstractiveSummarizationLROResults",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SummaryMode::Extractive { .. } => "extractive",
            SummaryMode::Abstractive => "abstractive",
        }
    }
}

impl fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text segments returned by the service, in the order it returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    segments: Vec<String>,
}

impl Summary {
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments joined with newlines.
    #[must_use]
    pub fn joined(&self) -> String {
        self.segments.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extractive_defaults_to_three_sentences() {
        assert_eq!(
            SummaryMode::extractive(),
            SummaryMode::Extractive { max_sentences: 3 }
        );
    }

    #[test]
    fn kinds_match_service_names() {
        assert_eq!(SummaryMode::extractive().task_kind(), "ExtractiveSummarization");
        assert_eq!(
            SummaryMode::Abstractive.result_kind(),
            "AbstractiveSummarizationLROResults"
        );
        assert_eq!(SummaryMode::Abstractive.to_string(), "abstractive");
    }

    #[test]
    fn joined_keeps_service_order() {
        let summary = Summary::new(vec!["First.".into(), "Second.".into()]);
        assert_eq!(summary.joined(), "First.\nSecond.");
        assert!(Summary::default().joined().is_empty());
    }
}
