use std::{fs, io, path::Path};

use anyhow::Context;
use lumen_client::DEFAULT_SERVER_URL;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "lumen.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    server_url: Option<String>,
    log_filter: Option<String>,
}

/// Defaults, then the optional config file, then environment variables.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file_overrides(&mut settings, &raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = non_blank(file_cfg.server_url) {
        settings.server_url = v;
    }
    if let Some(v) = non_blank(file_cfg.log_filter) {
        settings.log_filter = v;
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    for key in ["LUMEN_SERVER_URL", "APP__SERVER_URL"] {
        if let Some(v) = non_blank(lookup(key)) {
            settings.server_url = v;
        }
    }
    for key in ["LUMEN_LOG", "APP__LOG_FILTER"] {
        if let Some(v) = non_blank(lookup(key)) {
            settings.log_filter = v;
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
