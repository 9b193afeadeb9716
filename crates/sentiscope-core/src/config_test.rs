use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.lexicon_path.is_none());
    assert_eq!(
        cfg.history_path,
        PathBuf::from("./.sentiscope/history.json")
    );
    assert_eq!(cfg.history_limit, 10);
    assert!(!cfg.negation);
}

#[test]
fn log_level_override() {
    let mut map = HashMap::new();
    map.insert("SENTISCOPE_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn lexicon_path_override() {
    let mut map = HashMap::new();
    map.insert("SENTISCOPE_LEXICON_PATH", "/etc/sentiscope/lexicon.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.lexicon_path,
        Some(PathBuf::from("/etc/sentiscope/lexicon.yaml"))
    );
}

#[test]
fn blank_lexicon_path_is_ignored() {
    let mut map = HashMap::new();
    map.insert("SENTISCOPE_LEXICON_PATH", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.lexicon_path.is_none());
}

#[test]
fn history_path_override() {
    let mut map = HashMap::new();
    map.insert("SENTISCOPE_HISTORY_PATH", "/tmp/history.json");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.history_path, PathBuf::from("/tmp/history.json"));
}

#[test]
fn history_limit_override() {
    let mut map = HashMap::new();
    map.insert("SENTISCOPE_HISTORY_LIMIT", "25");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.history_limit, 25);
}

#[test]
fn history_limit_invalid() {
    let mut map = HashMap::new();
    map.insert("SENTISCOPE_HISTORY_LIMIT", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SENTISCOPE_HISTORY_LIMIT"),
        "expected InvalidEnvVar(SENTISCOPE_HISTORY_LIMIT), got: {result:?}"
    );
}

#[test]
fn history_limit_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("SENTISCOPE_HISTORY_LIMIT", "0");
    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    assert!(err.to_string().contains("must be at least 1"), "got: {err}");
}

#[test]
fn negation_accepts_truthy_values() {
    for raw in ["true", "TRUE", "1", "yes"] {
        let mut map = HashMap::new();
        map.insert("SENTISCOPE_NEGATION", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.negation, "expected negation enabled for '{raw}'");
    }
}

#[test]
fn negation_accepts_falsy_values() {
    for raw in ["false", "0", "no"] {
        let mut map = HashMap::new();
        map.insert("SENTISCOPE_NEGATION", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(!cfg.negation, "expected negation disabled for '{raw}'");
    }
}

#[test]
fn negation_invalid() {
    let mut map = HashMap::new();
    map.insert("SENTISCOPE_NEGATION", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SENTISCOPE_NEGATION"),
        "expected InvalidEnvVar(SENTISCOPE_NEGATION), got: {result:?}"
    );
}
