use std::collections::HashMap;
use std::time::Duration;

use summarizer::core::config::{
    CredentialProvider, Credentials, ServerConfig, StaticCredentials, ENDPOINT_VAR, KEY_VAR,
};
use summarizer::errors::ConfigError;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn credentials_require_both_values() {
    let creds = Credentials::from_lookup(lookup(&[
        (ENDPOINT_VAR, "https://example.cognitiveservices.azure.com/"),
        (KEY_VAR, "key"),
    ]))
    .unwrap();
    assert_eq!(creds.endpoint, "https://example.cognitiveservices.azure.com/");
    assert_eq!(creds.api_key, "key");

    let err = Credentials::from_lookup(lookup(&[(ENDPOINT_VAR, "https://example.com/")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Missing(ref name) if name == KEY_VAR));

    let err = Credentials::from_lookup(lookup(&[(KEY_VAR, "key")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing(ref name) if name == ENDPOINT_VAR));
}

#[test]
fn empty_credential_counts_as_missing() {
    let err = Credentials::from_lookup(lookup(&[
        (ENDPOINT_VAR, "https://example.com/"),
        (KEY_VAR, "  "),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Missing(_)));
}

#[test]
fn static_credentials_provider() {
    let provider = StaticCredentials::new("https://example.com/", "key");
    assert_eq!(provider.load().unwrap().api_key, "key");
    assert!(StaticCredentials::missing().load().is_err());
}

#[test]
fn server_config_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5000");
    assert_eq!(config.client.api_version, "2023-04-01");
    assert_eq!(config.client.poll_interval, Duration::from_secs(1));
    assert_eq!(config.client.poll_timeout, Duration::from_secs(300));
    assert_eq!(config.client.request_timeout, Duration::from_secs(30));
    assert!(!config.concurrent);
}

#[test]
fn server_config_overrides() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("SUMMARIZER_BIND_ADDR", "0.0.0.0:8080"),
        ("SUMMARIZER_API_VERSION", "2024-11-01"),
        ("SUMMARIZER_POLL_INTERVAL_MS", "250"),
        ("SUMMARIZER_POLL_TIMEOUT_SECS", "60"),
        ("SUMMARIZER_REQUEST_TIMEOUT_SECS", "10"),
        ("SUMMARIZER_CONCURRENT", "true"),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.client.api_version, "2024-11-01");
    assert_eq!(config.client.poll_interval, Duration::from_millis(250));
    assert_eq!(config.client.poll_timeout, Duration::from_secs(60));
    assert_eq!(config.client.request_timeout, Duration::from_secs(10));
    assert!(config.concurrent);
}

#[test]
fn server_config_rejects_malformed_values() {
    let err = ServerConfig::from_lookup(lookup(&[("SUMMARIZER_POLL_INTERVAL_MS", "soon")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { ref name, .. } if name == "SUMMARIZER_POLL_INTERVAL_MS"));

    let err =
        ServerConfig::from_lookup(lookup(&[("SUMMARIZER_BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}
