use std::collections::HashMap;

use client::config::{ConfigError, ResponseOrdering};

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_requires_api_base() {
    let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
    assert!(matches!(err, ServerError::Config(ConfigError::Missing { name: "CV_API_BASE" })));
    assert_eq!(err.to_string(), "missing configuration value: CV_API_BASE not set");
}

#[test]
fn from_lookup_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("CV_API_BASE", "http://localhost:8000/")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api.base_url(), "http://localhost:8000");
    assert_eq!(cfg.api.ordering(), ResponseOrdering::LastCompleted);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("CV_API_BASE", "https://cv.example.test"),
        ("CV_RESPONSE_ORDERING", "latest_issued"),
        ("PORT", "8080"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api.ordering(), ResponseOrdering::LatestIssued);
}

#[test]
fn from_lookup_invalid_port_errors() {
    for raw in ["abc", "0", "70000"] {
        let err = ServerConfig::from_lookup(lookup(&[("CV_API_BASE", "/"), ("PORT", raw)])).unwrap_err();
        assert!(matches!(err, ServerError::InvalidPort(ref p) if p == raw));
    }
}

#[test]
fn from_lookup_invalid_ordering_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("CV_API_BASE", "/"), ("CV_RESPONSE_ORDERING", "random")]))
        .unwrap_err();
    assert!(err.to_string().contains("CV_RESPONSE_ORDERING"));
}
