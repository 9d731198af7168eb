use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |var| map.get(var).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, "/api");
    assert_eq!(cfg.log_level, log::Level::Info);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("MARKETPLACE_API_BASE_URL", "https://shop.example/api/"),
        ("MARKETPLACE_LOG_LEVEL", " DEBUG "),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base_url, "https://shop.example/api");
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn from_lookup_rejects_blank_api_base_url() {
    let err = ClientConfig::from_lookup(lookup_from(&[("MARKETPLACE_API_BASE_URL", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { var: API_BASE_URL_VAR });
}

#[test]
fn from_lookup_rejects_unknown_log_level() {
    let err = ClientConfig::from_lookup(lookup_from(&[("MARKETPLACE_LOG_LEVEL", "loud")])).unwrap_err();
    assert_eq!(err, ConfigError::LogLevel { var: LOG_LEVEL_VAR, value: "loud".to_owned() });
    assert!(err.to_string().contains("loud"));
}

#[test]
fn root_api_base_url_trims_to_root_relative() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("MARKETPLACE_API_BASE_URL", "/")])).unwrap();
    assert_eq!(cfg.api_base_url, "");
}

#[test]
fn parse_log_level_accepts_every_level() {
    for (raw, level) in [
        ("error", log::Level::Error),
        ("warn", log::Level::Warn),
        ("info", log::Level::Info),
        ("debug", log::Level::Debug),
        ("trace", log::Level::Trace),
    ] {
        assert_eq!(parse_log_level(raw), Ok(level));
    }
}
