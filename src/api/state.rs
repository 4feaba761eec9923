//! Shared application state for the web server.

use std::sync::Arc;

use crate::ai::ClientOptions;
use crate::core::config::{CredentialProvider, ServerConfig};

/// Read-only state handed to every request. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialProvider>,
    pub client_options: ClientOptions,
    pub concurrent: bool,
}

impl AppState {
    #[must_use]
    pub fn new(credentials: Arc<dyn CredentialProvider>, config: &ServerConfig) -> Self {
        Self {
            credentials,
            client_options: config.client.clone(),
            concurrent: config.concurrent,
        }
    }
}

pub type SharedState = Arc<AppState>;
