#![allow(dead_code)]

use std::time::Duration;

use serde_json::{Value, json};
use summarizer::ai::ClientOptions;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-key";
pub const JOBS_PATH: &str = "/language/analyze-text/jobs";

pub const SAMPLE_TEXT: &str = "The city council met on Tuesday to discuss the new transit plan. \
    Members debated the cost of extending the light rail line to the airport. \
    The mayor said the project would create jobs and reduce traffic downtown. \
    A final vote is expected next month after a public comment period.";

pub fn fast_options() -> ClientOptions {
    ClientOptions {
        poll_interval: Duration::from_millis(10),
        poll_timeout: Duration::from_secs(2),
        request_timeout: Duration::from_secs(5),
        ..ClientOptions::default()
    }
}

/// Mounts a job submission for `task_kind` that answers 202 and points at `job_id`.
pub async fn mount_submission(server: &MockServer, task_kind: &str, job_id: &str) {
    Mock::given(method("POST"))
        .and(path(JOBS_PATH))
        .and(query_param("api-version", "2023-04-01"))
        .and(header("Ocp-Apim-Subscription-Key", API_KEY))
        .and(body_partial_json(json!({ "tasks": [{ "kind": task_kind }] })))
        .respond_with(ResponseTemplate::new(202).insert_header(
            "Operation-Location",
            format!("{}{JOBS_PATH}/{job_id}?api-version=2023-04-01", server.uri()).as_str(),
        ))
        .expect(1)
        .mount(server)
        .await;
}

/// Mounts the status endpoint for `job_id`.
pub async fn mount_job_state(server: &MockServer, job_id: &str, state: Value) {
    Mock::given(method("GET"))
        .and(path(format!("{JOBS_PATH}/{job_id}")))
        .and(header("Ocp-Apim-Subscription-Key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(state))
        .mount(server)
        .await;
}

pub fn extractive_done(sentences: &[&str]) -> Value {
    let sentences: Vec<Value> = sentences
        .iter()
        .enumerate()
        .map(|(i, s)| json!({ "text": s, "rankScore": 1.0 - (i as f64) / 10.0 }))
        .collect();
    json!({
        "jobId": "job",
        "status": "succeeded",
        "errors": [],
        "tasks": {
            "completed": 1, "failed": 0, "inProgress": 0, "total": 1,
            "items": [{
                "kind": "ExtractiveSummarizationLROResults",
                "status": "succeeded",
                "results": {
                    "documents": [{ "id": "1", "sentences": sentences, "warnings": [] }],
                    "errors": [],
                    "modelVersion": "2023-04-01"
                }
            }]
        }
    })
}

pub fn abstractive_done(summaries: &[&str]) -> Value {
    let summaries: Vec<Value> = summaries.iter().map(|s| json!({ "text": s })).collect();
    json!({
        "jobId": "job",
        "status": "succeeded",
        "errors": [],
        "tasks": {
            "completed": 1, "failed": 0, "inProgress": 0, "total": 1,
            "items": [{
                "kind": "AbstractiveSummarizationLROResults",
                "status": "succeeded",
                "results": {
                    "documents": [{ "id": "1", "summaries": summaries, "warnings": [] }],
                    "errors": [],
                    "modelVersion": "2023-04-01"
                }
            }]
        }
    })
}

pub fn document_error(result_kind: &str, message: &str) -> Value {
    json!({
        "jobId": "job",
        "status": "succeeded",
        "errors": [],
        "tasks": {
            "items": [{
                "kind": result_kind,
                "status": "succeeded",
                "results": {
                    "documents": [],
                    "errors": [{
                        "id": "1",
                        "error": {
                            "code": "InvalidArgument",
                            "message": "Invalid document in request.",
                            "innererror": { "code": "InvalidDocument", "message": message }
                        }
                    }]
                }
            }]
        }
    })
}

/// Text between the opening tag with `id` (plus its leading newline) and `closing`, unescaped.
pub fn slot(html: &str, id: &str, closing: &str) -> String {
    let marker = format!("id=\"{id}\"");
    let start = html.find(&marker).expect("slot present");
    let open_end = start + html[start..].find(">\n").expect("tag end") + 2;
    let close = open_end + html[open_end..].find(closing).expect("closing tag");
    unescape(&html[open_end..close])
}

pub fn input_slot(html: &str) -> String {
    slot(html, "project_data", "</textarea>")
}

pub fn extractive_slot(html: &str) -> String {
    slot(html, "extractive_summary", "</pre>")
}

pub fn abstractive_slot(html: &str) -> String {
    slot(html, "abstractive_summary", "</pre>")
}

pub fn unescape(escaped: &str) -> String {
    escaped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
