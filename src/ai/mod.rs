//! Summarization through the Azure AI Language service

pub mod client;
pub mod jobs;

// Re-export main types for convenience
pub use client::{ClientOptions, LanguageClient};
