//! The summarizer page: GET shows the empty form, POST summarizes the submitted text.

use axum::Form;
use axum::Router;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::response::Html;
use axum::routing::get;
use serde::Deserialize;
use tracing::info;

use super::error::ApiError;
use super::middleware::log_request;
use super::state::SharedState;
use crate::ai::LanguageClient;
use crate::core::models::{Summary, SummaryMode};
use crate::errors::SummaryError;
use crate::input::validate_input;
use crate::views::{display_outcome, render_page};

/// Form fields posted by the page.
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeForm {
    #[serde(default)]
    pub project_data: String,
}

/// The three strings that fill the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    pub input_text: String,
    pub extractive_summary: String,
    pub abstractive_summary: String,
}

impl PageContent {
    #[must_use]
    pub fn render(&self) -> String {
        render_page(
            &self.input_text,
            &self.extractive_summary,
            &self.abstractive_summary,
        )
    }
}

/// Build the router with the single `/` route.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .layer(axum::middleware::from_fn(log_request))
        .with_state(state)
}

pub async fn show_form() -> Html<String> {
    Html(PageContent::default().render())
}

pub async fn submit_form(
    State(state): State<SharedState>,
    form: Result<Form<SummarizeForm>, FormRejection>,
) -> Result<Html<String>, ApiError> {
    let Form(form) = form?;
    let content = summarize_submission(&state, form.project_data).await?;
    Ok(Html(content.render()))
}

/// Validate the submission and, when it is long enough, summarize it both ways.
///
/// # Errors
///
/// Returns an error only when credentials cannot be loaded or the client
/// cannot be built; no remote call is made in that case.
#[tracing::instrument(level = "info", skip_all, fields(chars = input_text.chars().count()))]
pub async fn summarize_submission(
    state: &SharedState,
    input_text: String,
) -> Result<PageContent, ApiError> {
    if let Err(message) = validate_input(&input_text) {
        info!("Submission too short, skipping summarization");
        return Ok(PageContent {
            input_text,
            extractive_summary: message.to_string(),
            abstractive_summary: String::new(),
        });
    }

    let credentials = state.credentials.load()?;
    let client = LanguageClient::new(&credentials, state.client_options.clone())?;

    let extractive_mode = SummaryMode::extractive();
    let abstractive_mode = SummaryMode::Abstractive;

    let (extractive, abstractive) = if state.concurrent {
        futures::future::join(
            client.summarize(extractive_mode, &input_text),
            client.summarize(abstractive_mode, &input_text),
        )
        .await
    } else {
        let extractive = client.summarize(extractive_mode, &input_text).await;
        let abstractive = client.summarize(abstractive_mode, &input_text).await;
        (extractive, abstractive)
    };

    log_outcome(extractive_mode, &extractive);
    log_outcome(abstractive_mode, &abstractive);

    Ok(PageContent {
        extractive_summary: display_outcome(extractive_mode, &extractive),
        abstractive_summary: display_outcome(abstractive_mode, &abstractive),
        input_text,
    })
}

fn log_outcome(mode: SummaryMode, outcome: &Result<Summary, SummaryError>) {
    match outcome {
        Ok(summary) => info!(mode = %mode, segments = summary.segments().len(), "Summary rendered"),
        Err(e) => info!(mode = %mode, kind = e.kind(), "Rendering error text in place of summary"),
    }
}
