use marketdeck_core::config::{
    AppConfig, ConfigError, DEFAULT_MODEL, ENV_API_KEY, ENV_LOG_LEVEL, ENV_MODEL,
    ENV_TOAST_DURATION_MS,
};
use std::collections::HashMap;
use std::fs;
use std::time::Duration;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = AppConfig::load_from_path(&dir.path().join("absent.json")).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.gateway.model, DEFAULT_MODEL);
}

#[test]
fn file_overrides_defaults_and_env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("marketdeck.json");
    fs::write(
        &path,
        r#"{"logging":{"level":"debug"},"toast":{"defaultDurationMs":2500},"gateway":{"model":"file-model"}}"#,
    )
    .unwrap();

    let mut config = AppConfig::load_from_path(&path).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.toast.default_duration(), Duration::from_millis(2_500));
    assert_eq!(config.gateway.model, "file-model");
    assert_eq!(config.logging.dir, AppConfig::default().logging.dir);

    config.apply_env_overrides_from(env(&[
        (ENV_MODEL, "env-model"),
        (ENV_API_KEY, "secret"),
        (ENV_LOG_LEVEL, "WARNING"),
    ]));

    assert_eq!(config.gateway.model, "env-model");
    assert!(config.gateway.is_configured());
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.toast.default_duration_ms, 2_500);
    config.validate().unwrap();
}

#[test]
fn invalid_env_values_are_ignored() {
    let mut config = AppConfig::default();

    config.apply_env_overrides_from(env(&[
        (ENV_TOAST_DURATION_MS, "soon"),
        (ENV_LOG_LEVEL, "loud"),
        (ENV_API_KEY, "   "),
    ]));

    assert_eq!(config, AppConfig::default());
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = AppConfig::load_from_path(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn empty_model_fails_validation() {
    let err = AppConfig::from_json_str(r#"{"gateway":{"model":"  "}}"#).unwrap_err();

    assert!(matches!(err, ConfigError::Invalid(_)));
}
