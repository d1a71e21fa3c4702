use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, DEFAULT_CATALOG_API_URL);
    assert_eq!(
        cfg.timeouts,
        UpstreamTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn overrides_are_parsed_and_url_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8081"),
        ("CATALOG_API_URL", "https://api.example.test/ "),
        ("CATALOG_API_TIMEOUT_SECS", " 5 "),
        ("CATALOG_API_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.api_url, "https://api.example.test");
    assert_eq!(cfg.timeouts, UpstreamTimeouts { request_secs: 5, connect_secs: 2 });
}

#[test]
fn bad_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { var: "PORT", .. }));
}

#[test]
fn non_http_api_url_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("CATALOG_API_URL", "localhost:5000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidApiUrl("localhost:5000".to_owned()));
}
