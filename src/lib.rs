/// Summarizer - a small web form that sends pasted text to Azure AI Language
/// and shows the extractive and abstractive summaries it returns.
///
/// # Architecture
///
/// - `core::config` loads server settings and per-request service credentials
/// - `ai::client` submits analyze-text jobs and polls them to completion
/// - `api` exposes the single `/` route (GET renders the form, POST summarizes)
/// - `views` renders the HTML page and turns outcomes into display text
///
/// # Example
///
/// ```no_run
/// use summarizer::ai::{ClientOptions, LanguageClient};
/// use summarizer::core::config::Credentials;
/// use summarizer::core::models::SummaryMode;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     summarizer::setup_logging();
///
///     let credentials = Credentials::from_env()?;
///     let client = LanguageClient::new(&credentials, ClientOptions::default())?;
///
///     let text = "Rust is a general-purpose programming language emphasizing \
///                 performance, type safety, and concurrency.";
///     match client.summarize(SummaryMode::extractive(), text).await {
///         Ok(summary) => println!("{}", summary.joined()),
///         Err(e) => eprintln!("summarization failed: {e}"),
///     }
///
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod input;
pub mod views;

/// Configure structured JSON logging.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
