use std::{fs, path::Path, time::Duration};

use client_core::FlowSettings;
use serde::Deserialize;
use tracing::{info, warn};

const FALLBACK_DATABASE_URL: &str = "sqlite://./data/landing.db";

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub flow: FlowSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            flow: FlowSettings::default(),
        }
    }
}

/// Optional `landing.toml` keys; anything missing keeps its default.
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    database_url: Option<String>,
    upload_delay_ms: Option<u64>,
    processing_delay_ms: Option<u64>,
    url_error_display_ms: Option<u64>,
    result_status: Option<String>,
    result_items_found: Option<String>,
    result_processing_time: Option<String>,
}

pub fn load_settings(config_path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                info!(path = %config_path.display(), "loaded settings file");
                apply_file_settings(&mut settings, file_cfg);
            }
            Err(err) => {
                warn!(path = %config_path.display(), error = %err, "ignoring unreadable settings file");
            }
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.database_url {
        settings.database_url = normalize_database_url(&v);
    }
    if let Some(ms) = file_cfg.upload_delay_ms {
        settings.flow.upload_delay = Duration::from_millis(ms);
    }
    if let Some(ms) = file_cfg.processing_delay_ms {
        settings.flow.processing_delay = Duration::from_millis(ms);
    }
    if let Some(ms) = file_cfg.url_error_display_ms {
        settings.flow.url_error_display = Duration::from_millis(ms);
    }
    if let Some(v) = file_cfg.result_status {
        settings.flow.results.status = v;
    }
    if let Some(v) = file_cfg.result_items_found {
        settings.flow.results.items_found = v;
    }
    if let Some(v) = file_cfg.result_processing_time {
        settings.flow.results.processing_time = v;
    }
}

/// `APP__`-prefixed names win over the plain ones.
fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let var = |name: &str| lookup(&format!("APP__{name}")).or_else(|| lookup(name));

    if let Some(v) = var("DATABASE_URL") {
        settings.database_url = normalize_database_url(&v);
    }
    if let Some(d) = millis(var("UPLOAD_DELAY_MS"), "UPLOAD_DELAY_MS") {
        settings.flow.upload_delay = d;
    }
    if let Some(d) = millis(var("PROCESSING_DELAY_MS"), "PROCESSING_DELAY_MS") {
        settings.flow.processing_delay = d;
    }
    if let Some(d) = millis(var("URL_ERROR_DISPLAY_MS"), "URL_ERROR_DISPLAY_MS") {
        settings.flow.url_error_display = d;
    }
    if let Some(v) = var("RESULT_STATUS") {
        settings.flow.results.status = v;
    }
    if let Some(v) = var("RESULT_ITEMS_FOUND") {
        settings.flow.results.items_found = v;
    }
    if let Some(v) = var("RESULT_PROCESSING_TIME") {
        settings.flow.results.processing_time = v;
    }
}

fn millis(raw: Option<String>, name: &str) -> Option<Duration> {
    let raw = raw?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(err) => {
            warn!(name, value = %raw, error = %err, "ignoring invalid millisecond override");
            None
        }
    }
}

fn default_database_url() -> String {
    dirs::data_local_dir()
        .map(|dir| dir.join("auction_scan").join("landing.db"))
        .map(|path| format!("sqlite://{}", path.to_string_lossy().replace('\\', "/")))
        .unwrap_or_else(|| FALLBACK_DATABASE_URL.to_string())
}

pub fn normalize_database_url(raw_database_url: &str) -> String {
    let raw_database_url = raw_database_url.trim();

    if raw_database_url.is_empty() {
        return default_database_url();
    }

    if raw_database_url.starts_with("sqlite::memory:")
        || raw_database_url.starts_with("sqlite://")
        || raw_database_url.contains("://")
    {
        return raw_database_url.to_string();
    }

    if let Some(path) = raw_database_url.strip_prefix("sqlite:") {
        let path = path.replace('\\', "/");
        return format!("sqlite://{path}");
    }

    format!("sqlite://{}", raw_database_url.replace('\\', "/"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
