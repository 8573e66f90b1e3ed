use super::{apply_env_overrides, apply_file_overrides, load_settings, Settings};

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        "server_url = \"http://lumen.local:9000\"\nlog_filter = \"debug\"\n",
    )
    .expect("parse");

    assert_eq!(settings.server_url, "http://lumen.local:9000");
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn blank_file_values_keep_defaults() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "server_url = \"  \"\n").expect("parse");
    assert_eq!(settings, Settings::default());
}

#[test]
fn unknown_file_keys_are_rejected() {
    let mut settings = Settings::default();
    assert!(apply_file_overrides(&mut settings, "poll_interval_ms = 100\n").is_err());
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("LUMEN_SERVER_URL", "http://plain:8000"),
        ("APP__SERVER_URL", "http://prefixed:8000"),
        ("LUMEN_LOG", "warn"),
    ]);
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(settings.server_url, "http://prefixed:8000");
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn missing_config_file_yields_defaults() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("lumen_agent_missing_{suffix}.toml"));

    let settings = load_settings(&path).expect("load");
    assert!(!settings.server_url.is_empty());
}

#[test]
fn malformed_config_file_is_an_error() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("lumen_agent_bad_{suffix}.toml"));
    fs::write(&path, "server_url = [").expect("write");

    let err = load_settings(&path).expect_err("must fail");
    assert!(err.to_string().contains("failed to parse config file"));

    fs::remove_file(path).expect("cleanup");
}
