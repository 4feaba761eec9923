use crate::core::models::{Summary, SummaryMode};
use crate::errors::SummaryError;

/// Build the summarizer page.
///
/// All three values are escaped, and the `<textarea>` and `<pre>` blocks open
/// with a newline because HTML parsers drop one leading newline there. The
/// browser therefore shows exactly the strings passed in.
#[must_use]
pub fn render_page(input_text: &str, extractive_summary: &str, abstractive_summary: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Text Summarizer</title>
</head>
<body>
  <h1>Text Summarizer</h1>
  <form method="post" action="/">
    <label for="project_data">Paste the text to summarize</label>
    <textarea id="project_data" name="project_data" rows="12" cols="80">
{input}</textarea>
    <button type="submit">Summarize</button>
  </form>
  <h2>Extractive summary</h2>
  <pre id="extractive_summary">
{extractive}</pre>
  <h2>Abstractive summary</h2>
  <pre id="abstractive_summary">
{abstractive}</pre>
</body>
</html>
"#,
        input = escape_html(input_text),
        extractive = escape_html(extractive_summary),
        abstractive = escape_html(abstractive_summary),
    )
}

/// Page shown when a request cannot be served at all.
#[must_use]
pub fn render_error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Text Summarizer - Error</title>
</head>
<body>
  <h1>Something went wrong</h1>
  <p>{}</p>
</body>
</html>
"#,
        escape_html(message)
    )
}

/// Text for a summary slot.
///
/// Document errors carry the service's own explanation and are shown to the
/// user; every other failure shows a generic message and is only detailed in
/// the logs.
#[must_use]
pub fn display_outcome(mode: SummaryMode, outcome: &Result<Summary, SummaryError>) -> String {
    match outcome {
        Ok(summary) => summary.joined(),
        Err(SummaryError::Document { message, .. }) => {
            format!("Error during {mode} summarization: {message}")
        }
        Err(_) => format!("Error during {mode} summarization."),
    }
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
