/// Minimum number of characters, after trimming, worth sending for summarization
pub const MIN_INPUT_CHARS: usize = 50;

/// Shown in the extractive slot when the submitted text is too short
pub const TOO_SHORT_MESSAGE: &str = "Please enter at least 50 characters of text.";

/// Checks that the submitted text is long enough to summarize.
/// Returns the text unchanged so it can be sent and echoed back as submitted.
pub fn validate_input(text: &str) -> Result<&str, &'static str> {
    if text.trim().chars().count() < MIN_INPUT_CHARS {
        return Err(TOO_SHORT_MESSAGE);
    }
    Ok(text)
}
