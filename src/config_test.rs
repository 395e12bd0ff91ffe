use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(
        cfg.timeouts,
        BackendTimeouts { request_secs: DEFAULT_BACKEND_TIMEOUT_SECS, connect_secs: DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = Config::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://api.example.test/"),
        ("BACKEND_TIMEOUT_SECS", "42"),
        ("BACKEND_CONNECT_TIMEOUT_SECS", " 7 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.example.test");
    assert_eq!(cfg.timeouts, BackendTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn from_lookup_trims_every_trailing_slash() {
    let cfg = Config::from_lookup(lookup(&[("BACKEND_URL", "http://backend:8000///")])).unwrap();
    assert_eq!(cfg.backend_url, "http://backend:8000");
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    let err = Config::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn from_lookup_rejects_bad_timeout() {
    let err = Config::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BACKEND_TIMEOUT_SECS", .. }));
}

#[test]
fn from_lookup_rejects_blank_backend_url() {
    let err = Config::from_lookup(lookup(&[("BACKEND_URL", " / ")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { var: "BACKEND_URL" });
}
