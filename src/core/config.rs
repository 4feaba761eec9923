use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::ai::ClientOptions;
use crate::errors::ConfigError;

pub const ENDPOINT_VAR: &str = "AZURE_LANGUAGE_ENDPOINT";
pub const KEY_VAR: &str = "AZURE_LANGUAGE_KEY";

pub const BIND_ADDR_VAR: &str = "SUMMARIZER_BIND_ADDR";
pub const API_VERSION_VAR: &str = "SUMMARIZER_API_VERSION";
pub const POLL_INTERVAL_VAR: &str = "SUMMARIZER_POLL_INTERVAL_MS";
pub const POLL_TIMEOUT_VAR: &str = "SUMMARIZER_POLL_TIMEOUT_SECS";
pub const REQUEST_TIMEOUT_VAR: &str = "SUMMARIZER_REQUEST_TIMEOUT_SECS";
pub const CONCURRENT_VAR: &str = "SUMMARIZER_CONCURRENT";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Endpoint and key for the Language resource.
#[derive(Clone)]
pub struct Credentials {
    pub endpoint: String,
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Reads both values through `lookup`. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::Missing(name.to_string()))
        };

        Ok(Self {
            endpoint: required(ENDPOINT_VAR)?,
            api_key: required(KEY_VAR)?,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }
}

/// Source of credentials, consulted once per summarization request.
pub trait CredentialProvider: Send + Sync {
    fn load(&self) -> Result<Credentials, ConfigError>;
}

/// Reads `AZURE_LANGUAGE_ENDPOINT` and `AZURE_LANGUAGE_KEY` on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn load(&self) -> Result<Credentials, ConfigError> {
        Credentials::from_env()
    }
}

/// Fixed credentials. `missing()` behaves like an unset environment.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    credentials: Option<Credentials>,
}

impl StaticCredentials {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            credentials: Some(Credentials::new(endpoint, api_key)),
        }
    }

    #[must_use]
    pub fn missing() -> Self {
        Self { credentials: None }
    }
}

impl CredentialProvider for StaticCredentials {
    fn load(&self) -> Result<Credentials, ConfigError> {
        self.credentials
            .clone()
            .ok_or_else(|| ConfigError::Missing(ENDPOINT_VAR.to_string()))
    }
}

/// Process-wide settings. None of these are required.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub client: ClientOptions,
    /// Run the extractive and abstractive calls concurrently instead of one after the other.
    pub concurrent: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            client: ClientOptions::default(),
            concurrent: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ClientOptions::default();

        let bind_addr: SocketAddr =
            parse_or(&lookup, BIND_ADDR_VAR, DEFAULT_BIND_ADDR.parse().ok())?;
        let api_version = lookup(API_VERSION_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_version);
        let poll_interval_ms: u64 = parse_or(
            &lookup,
            POLL_INTERVAL_VAR,
            Some(duration_millis(defaults.poll_interval)),
        )?;
        let poll_timeout_secs: u64 =
            parse_or(&lookup, POLL_TIMEOUT_VAR, Some(defaults.poll_timeout.as_secs()))?;
        let request_timeout_secs: u64 = parse_or(
            &lookup,
            REQUEST_TIMEOUT_VAR,
            Some(defaults.request_timeout.as_secs()),
        )?;
        let concurrent = match lookup(CONCURRENT_VAR) {
            Some(raw) => parse_flag(CONCURRENT_VAR, &raw)?,
            None => false,
        };

        Ok(Self {
            bind_addr,
            client: ClientOptions {
                api_version,
                poll_interval: Duration::from_millis(poll_interval_ms),
                poll_timeout: Duration::from_secs(poll_timeout_secs),
                request_timeout: Duration::from_secs(request_timeout_secs),
            },
            concurrent,
        })
    }
}

fn duration_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

fn parse_or<F, T>(lookup: &F, name: &str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(name).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name: name.to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => default.ok_or_else(|| ConfigError::Missing(name.to_string())),
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name: name.to_string(),
            value: raw.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
